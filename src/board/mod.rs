//! Board topology: spaces, tiles, adjacency and bonus queries.
//!
//! ## Key Types
//!
//! - [`Space`]: a space with static bonuses, an optional tile and an
//!   optional adjacency bonus offered to its neighbours
//! - [`Tile`]: an occupying tile; `covers` marks an upgrade over an older tile
//! - [`Board`]: the frozen adjacency graph plus its [`BoardType`] identity
//! - [`BoardBuilder`]: assembles and validates a board
//!
//! All queries are read-only. Static layout and bonus placement are owned
//! by whoever builds the board; this module only answers questions about it.

mod map;
mod space;

pub use map::{Board, BoardBuilder, BoardError, BoardType};
pub use space::{AdjacencyBonus, Space, SpaceBonus, SpaceId, SpaceType, Tile, TileType};
