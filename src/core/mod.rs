//! Core types: players, resources, RNG, configuration.
//!
//! These are shared by every other module. Nothing here knows about
//! placement reactions.

pub mod config;
pub mod player;
pub mod resource;
pub mod rng;

pub use config::{CardSelection, Phase, SessionConfig};
pub use player::{Player, PlayerId, PlayerMap};
pub use resource::{Resource, ResourceStock};
pub use rng::{GameRng, GameRngState};
