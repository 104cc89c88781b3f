//! Deferred effect queue.
//!
//! Grants produced by placement reactions are queued here and drained in
//! order. Draining stops at the first unit that needs player input; the
//! host collects the answer and calls [`DeferredQueue::respond`], which
//! resumes that unit and keeps draining.
//!
//! ## Ordering
//!
//! - Units run strictly in queue order; nothing overtakes a suspended unit.
//! - Units spawned while unit A resolves run right after A, in the order
//!   they were spawned, and before anything that was queued behind A.
//!
//! ## Example Usage
//!
//! ```
//! use placement_rules::core::{CardSelection, GameRng, Player, PlayerId, PlayerMap, Resource};
//! use placement_rules::effects::{ApplyContext, GainResources};
//! use placement_rules::log::GameLog;
//! use placement_rules::queue::{DeferredQueue, ResolutionStatus};
//!
//! let mut players = PlayerMap::new(2, |p| Player::new(format!("P{}", p.0)));
//! let mut log = GameLog::new();
//! let mut rng = GameRng::new(42);
//!
//! let mut queue = DeferredQueue::new();
//! queue.enqueue(Box::new(GainResources::new(PlayerId::new(1), Resource::Steel)));
//!
//! let mut ctx = ApplyContext::new(&mut players, &mut log, &mut rng, CardSelection::Ask);
//! assert_eq!(queue.drain(&mut ctx), ResolutionStatus::Complete);
//! drop(ctx);
//!
//! assert_eq!(players[PlayerId::new(1)].resource(Resource::Steel), 1);
//! ```

mod deferred;

pub use deferred::{DeferredQueue, PendingInput};

use serde::{Deserialize, Serialize};

use crate::cards::CardName;
use crate::core::PlayerId;
use crate::effects::{InputRequest, InputResponse};

/// Identifier of a queued unit, unique per queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Lifecycle of a queued unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// Queued, not yet run.
    Pending,
    /// Suspended until its player responds.
    AwaitingInput,
    /// Finished.
    Resolved,
    /// Dropped by a queue clear before it finished.
    Discarded,
}

/// Status returned by draining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Queue is empty.
    Complete,

    /// A unit is waiting for `player`.
    AwaitingInput {
        player: PlayerId,
        unit: UnitId,
        request: InputRequest,
    },
}

impl ResolutionStatus {
    /// Whether draining finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, ResolutionStatus::Complete)
    }
}

/// Errors raised when resuming a suspended unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("no unit is waiting for input")]
    NothingPending,

    #[error("{got} is not the suspended unit ({expected} is)")]
    UnitMismatch { expected: UnitId, got: UnitId },

    #[error("{got} answered a request addressed to {expected}")]
    WrongPlayer { expected: PlayerId, got: PlayerId },

    #[error("response {0:?} does not fit the pending request")]
    UnexpectedResponse(InputResponse),

    #[error("{0} is not a valid selection")]
    InvalidSelection(CardName),
}
