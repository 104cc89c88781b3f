//! The space graph and its read-only queries.
//!
//! Adjacency is stored as an undirected index list per space and is fixed
//! when [`BoardBuilder::build`] runs. Tiles are the only thing that changes
//! on a built board.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::space::{Space, SpaceBonus, SpaceId, Tile};
use crate::core::PlayerId;

/// Board identity. Placement-bonus reactions apply to one designated
/// identity only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardType {
    Mars,
    Moon,
}

/// Errors raised by board construction and tile placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unknown space '{0}'")]
    UnknownSpace(SpaceId),

    #[error("space '{0}' declared twice")]
    DuplicateSpace(SpaceId),

    #[error("space '{0}' cannot be adjacent to itself")]
    SelfAdjacent(SpaceId),

    #[error("space '{0}' is already occupied")]
    SpaceOccupied(SpaceId),

    #[error("tile on space '{space}' does not cover the existing tile")]
    CoverMismatch { space: SpaceId },
}

/// Adjacency list entry: neighbours by index. Hex grids never exceed six.
type Neighbours = SmallVec<[usize; 6]>;

/// A board: spaces plus a fixed undirected adjacency relation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    board_type: BoardType,
    spaces: Vec<Space>,
    index: FxHashMap<SpaceId, usize>,
    adjacency: Vec<Neighbours>,
}

impl Board {
    /// The board's identity.
    #[must_use]
    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the board has no spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Look up a space.
    pub fn space(&self, id: &SpaceId) -> Result<&Space, BoardError> {
        self.index
            .get(id)
            .map(|&i| &self.spaces[i])
            .ok_or_else(|| BoardError::UnknownSpace(id.clone()))
    }

    /// Iterate over all spaces in declaration order.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Spaces adjacent to `space`.
    ///
    /// Unknown spaces have no neighbours.
    pub fn adjacent_spaces<'a>(&'a self, space: &SpaceId) -> impl Iterator<Item = &'a Space> + 'a {
        let neighbours: &'a [usize] = self
            .index
            .get(space)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[]);
        neighbours.iter().map(move |&j| &self.spaces[j])
    }

    /// Whether placing on `space` collects its static `bonus` right now.
    #[must_use]
    pub fn grants_bonus_now(&self, space: &Space, bonus: SpaceBonus) -> bool {
        space.grants_bonus_now(bonus)
    }

    /// Whether any neighbour of `space` offers `bonus` through adjacency.
    ///
    /// Boolean: several qualifying neighbours count the same as one.
    #[must_use]
    pub fn any_adjacent_gives_bonus(&self, space: &Space, bonus: SpaceBonus) -> bool {
        self.adjacent_spaces(&space.id)
            .any(|adj| adj.offers_adjacency_bonus(bonus))
    }

    /// Whether `space` is an ocean space holding an uncovered ocean tile.
    #[must_use]
    pub fn is_uncovered_ocean_space(space: &Space) -> bool {
        space.is_uncovered_ocean()
    }

    /// Put a tile on a space.
    ///
    /// An occupied space only accepts a tile whose `covers` names the tile
    /// already there; a tile with `covers` set needs something to cover.
    pub fn place_tile(&mut self, id: &SpaceId, tile: Tile, player: PlayerId) -> Result<(), BoardError> {
        let &i = self
            .index
            .get(id)
            .ok_or_else(|| BoardError::UnknownSpace(id.clone()))?;
        let space = &mut self.spaces[i];

        match (space.tile, tile.covers) {
            (None, None) => {}
            (Some(existing), Some(covered)) if existing.tile_type == covered => {}
            (Some(_), None) => return Err(BoardError::SpaceOccupied(id.clone())),
            _ => return Err(BoardError::CoverMismatch { space: id.clone() }),
        }

        space.tile = Some(tile);
        space.player = Some(player);
        Ok(())
    }
}

/// Builder for a [`Board`].
///
/// ```
/// use placement_rules::board::{BoardBuilder, BoardType, Space, SpaceType};
///
/// let board = BoardBuilder::new(BoardType::Mars)
///     .space(Space::new("01", SpaceType::Land))
///     .space(Space::new("02", SpaceType::Ocean))
///     .connect("01", "02")
///     .build()
///     .unwrap();
///
/// assert_eq!(board.adjacent_spaces(&"01".into()).count(), 1);
/// ```
#[derive(Debug)]
pub struct BoardBuilder {
    board_type: BoardType,
    spaces: Vec<Space>,
    edges: Vec<(SpaceId, SpaceId)>,
}

impl BoardBuilder {
    /// Start a board with the given identity.
    #[must_use]
    pub fn new(board_type: BoardType) -> Self {
        Self {
            board_type,
            spaces: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a space.
    #[must_use]
    pub fn space(mut self, space: Space) -> Self {
        self.spaces.push(space);
        self
    }

    /// Declare two spaces adjacent. Order does not matter.
    #[must_use]
    pub fn connect(mut self, a: impl Into<SpaceId>, b: impl Into<SpaceId>) -> Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Validate and freeze the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut index = FxHashMap::default();
        for (i, space) in self.spaces.iter().enumerate() {
            if index.insert(space.id.clone(), i).is_some() {
                return Err(BoardError::DuplicateSpace(space.id.clone()));
            }
        }

        let mut adjacency: Vec<Neighbours> = vec![Neighbours::new(); self.spaces.len()];
        for (a, b) in &self.edges {
            if a == b {
                return Err(BoardError::SelfAdjacent(a.clone()));
            }
            let &ia = index.get(a).ok_or_else(|| BoardError::UnknownSpace(a.clone()))?;
            let &ib = index.get(b).ok_or_else(|| BoardError::UnknownSpace(b.clone()))?;
            if !adjacency[ia].contains(&ib) {
                adjacency[ia].push(ib);
                adjacency[ib].push(ia);
            }
        }

        Ok(Board {
            board_type: self.board_type,
            spaces: self.spaces,
            index,
            adjacency,
        })
    }
}
