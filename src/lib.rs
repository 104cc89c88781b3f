//! # placement-rules
//!
//! Tile-placement reactions for a Mars terraforming board game: cards that
//! grant resources when their owner places a tile on (or next to) a bonus
//! space.
//!
//! ## Design Principles
//!
//! 1. **Read-only eligibility**: Deciding whether a card grants anything
//!    never mutates state. Every grant is a queued unit.
//!
//! 2. **Strict queue order**: Units resolve in the order reactions fired;
//!    units spawned while resolving run right after their parent.
//!
//! 3. **Explicit context**: The log sink, policy state and RNG are passed
//!    down the call chain. There is no global game state.
//!
//! ## Modules
//!
//! - `core`: Players, resources, RNG, configuration
//! - `board`: Spaces, tiles, adjacency and bonus queries
//! - `policy`: Policy-active queries
//! - `cards`: Card identities and the survey reactions
//! - `triggers`: Reaction registry and placement dispatch
//! - `effects`: Deferred grant units
//! - `queue`: The deferred effect queue
//! - `log`: Structured game log
//! - `session`: Ties the above together for one game

pub mod core;
pub mod board;
pub mod policy;
pub mod cards;
pub mod triggers;
pub mod effects;
pub mod queue;
pub mod log;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CardSelection, Phase, SessionConfig,
    Player, PlayerId, PlayerMap,
    Resource, ResourceStock,
    GameRng, GameRngState,
};

pub use crate::board::{
    AdjacencyBonus, Board, BoardBuilder, BoardError, BoardType,
    Space, SpaceBonus, SpaceId, SpaceType, Tile, TileType,
};

pub use crate::policy::{PartyName, PolicyHooks, PolicyId, PolicyState};

pub use crate::cards::{
    CardName, CardResource, PlayedCard,
    EcologicalSurvey, GeologicalSurvey,
    SideCondition, SurveyCard, SurveyContext,
};

pub use crate::triggers::{
    DispatchReport, GateRejection, PlacementDispatcher, PlacementEvent,
    Reaction, ReactionId, ReactionRegistry,
};

pub use crate::effects::{
    AddResourcesToCard, ApplyContext, DeferredAction, GainResources,
    InputRequest, InputResponse, Step,
};

pub use crate::queue::{
    DeferredQueue, PendingInput, QueueError, ResolutionStatus, UnitId, UnitState,
};

pub use crate::log::{GameLog, LogBuilder, LogDataType, LogMessage, LogMessageData, LogSink};

pub use crate::session::{GameSession, SessionError};
