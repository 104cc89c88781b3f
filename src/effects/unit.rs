//! The deferred-unit protocol.
//!
//! A deferred unit is a boxed command owned by the queue. Executing it
//! either resolves it (state mutated, log written) or asks its player for
//! input. A suspended unit keeps its own state and is resumed with the
//! player's response.

use serde::{Deserialize, Serialize};

use crate::cards::{CardName, CardResource};
use crate::core::{CardSelection, GameRng, Player, PlayerId, PlayerMap};
use crate::log::LogSink;
use crate::queue::QueueError;

/// Input a suspended unit needs from its player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputRequest {
    /// Pick one card to receive card resources.
    SelectCard {
        title: String,
        resource: CardResource,
        count: u32,
        candidates: Vec<CardName>,
    },
}

/// A player's answer to an [`InputRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputResponse {
    SelectCard(CardName),
}

/// Outcome of executing or resuming a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The unit finished.
    Resolved,
    /// The unit is waiting for its player.
    AwaitInput(InputRequest),
}

/// Mutable state a unit may touch while it resolves.
///
/// Units spawned through [`ApplyContext::defer`] run right after the unit
/// that spawned them, in spawn order.
pub struct ApplyContext<'a> {
    pub players: &'a mut PlayerMap<Player>,
    pub log: &'a mut dyn LogSink,
    pub rng: &'a mut GameRng,
    pub card_selection: CardSelection,
    spawned: Vec<Box<dyn DeferredAction>>,
}

impl<'a> ApplyContext<'a> {
    /// Create a context.
    pub fn new(
        players: &'a mut PlayerMap<Player>,
        log: &'a mut dyn LogSink,
        rng: &'a mut GameRng,
        card_selection: CardSelection,
    ) -> Self {
        Self {
            players,
            log,
            rng,
            card_selection,
            spawned: Vec::new(),
        }
    }

    /// Schedule a follow-up unit.
    pub fn defer(&mut self, unit: Box<dyn DeferredAction>) {
        self.spawned.push(unit);
    }

    /// Take units spawned since the last call.
    pub(crate) fn take_spawned(&mut self) -> Vec<Box<dyn DeferredAction>> {
        std::mem::take(&mut self.spawned)
    }
}

/// A scheduled effect.
pub trait DeferredAction {
    /// The player this unit acts on (and asks, if it needs input).
    fn player(&self) -> PlayerId;

    /// Short name for diagnostics.
    fn label(&self) -> &'static str;

    /// Run the unit.
    fn execute(&mut self, ctx: &mut ApplyContext<'_>) -> Step;

    /// Continue a unit that returned [`Step::AwaitInput`].
    ///
    /// Units that never ask for input reject every response.
    fn resume(&mut self, _ctx: &mut ApplyContext<'_>, response: InputResponse) -> Result<Step, QueueError> {
        Err(QueueError::UnexpectedResponse(response))
    }
}

/// Follow-up run after a unit's mutation and log.
pub type OnApplied = Box<dyn FnOnce(&mut ApplyContext<'_>)>;
