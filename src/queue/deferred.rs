//! FIFO queue of deferred units with single-unit suspension.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::PlayerId;
use crate::effects::{ApplyContext, DeferredAction, InputRequest, InputResponse, Step};

use super::{QueueError, ResolutionStatus, UnitId, UnitState};

/// A queued unit.
struct QueuedUnit {
    id: UnitId,
    action: Box<dyn DeferredAction>,
}

/// The unit currently waiting for input, with its resume handle.
struct Suspended {
    id: UnitId,
    request: InputRequest,
    action: Box<dyn DeferredAction>,
}

/// Public view of the suspended unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingInput {
    pub unit: UnitId,
    pub player: PlayerId,
    pub request: InputRequest,
}

/// Deferred effect queue.
///
/// ## Behavior
///
/// - `enqueue()`: appends to the tail, returns the unit's id
/// - `drain()`: runs units front to back until empty or one suspends
/// - `respond()`: resumes the suspended unit, then keeps draining
/// - `clear()`: discards everything (session teardown); discarded units
///   report [`UnitState::Discarded`], never `Resolved`
#[derive(Default)]
pub struct DeferredQueue {
    units: VecDeque<QueuedUnit>,
    suspended: Option<Suspended>,
    discarded: FxHashSet<UnitId>,
    next_id: u32,
}

impl DeferredQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a unit to the tail.
    pub fn enqueue(&mut self, action: Box<dyn DeferredAction>) -> UnitId {
        let id = self.alloc_id();
        tracing::trace!(
            target: "placement_rules::queue",
            unit = id.0,
            label = action.label(),
            player = action.player().0,
            "unit enqueued"
        );
        self.units.push_back(QueuedUnit { id, action });
        id
    }

    /// Number of units not yet resolved, including a suspended one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len() + usize::from(self.suspended.is_some())
    }

    /// Whether nothing is queued or suspended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unit waiting for input, if any.
    #[must_use]
    pub fn pending_input(&self) -> Option<PendingInput> {
        self.suspended.as_ref().map(|s| PendingInput {
            unit: s.id,
            player: s.action.player(),
            request: s.request.clone(),
        })
    }

    /// Ids of queued units in run order (suspended unit first).
    #[must_use]
    pub fn queued_ids(&self) -> Vec<UnitId> {
        self.suspended
            .iter()
            .map(|s| s.id)
            .chain(self.units.iter().map(|u| u.id))
            .collect()
    }

    /// Lifecycle state of a unit. `None` for ids this queue never issued.
    #[must_use]
    pub fn state_of(&self, id: UnitId) -> Option<UnitState> {
        if id.0 >= self.next_id {
            return None;
        }
        if self.suspended.as_ref().is_some_and(|s| s.id == id) {
            return Some(UnitState::AwaitingInput);
        }
        if self.units.iter().any(|u| u.id == id) {
            return Some(UnitState::Pending);
        }
        if self.discarded.contains(&id) {
            return Some(UnitState::Discarded);
        }
        Some(UnitState::Resolved)
    }

    /// Run units until the queue is empty or a unit needs input.
    pub fn drain(&mut self, ctx: &mut ApplyContext<'_>) -> ResolutionStatus {
        if let Some(pending) = self.pending_input() {
            return Self::awaiting(pending);
        }

        while let Some(QueuedUnit { id, mut action }) = self.units.pop_front() {
            let step = action.execute(ctx);
            self.splice_spawned(ctx);

            if let Some(status) = self.settle(id, action, step) {
                return status;
            }
        }

        ResolutionStatus::Complete
    }

    /// Resume the suspended unit with `player`'s response, then keep
    /// draining.
    ///
    /// On error the unit stays suspended and nothing else runs.
    pub fn respond(
        &mut self,
        player: PlayerId,
        unit: UnitId,
        response: InputResponse,
        ctx: &mut ApplyContext<'_>,
    ) -> Result<ResolutionStatus, QueueError> {
        let Some(suspended) = self.suspended.as_ref() else {
            return Err(QueueError::NothingPending);
        };
        if suspended.id != unit {
            return Err(QueueError::UnitMismatch {
                expected: suspended.id,
                got: unit,
            });
        }
        let owner = suspended.action.player();
        if owner != player {
            return Err(QueueError::WrongPlayer {
                expected: owner,
                got: player,
            });
        }

        let Some(Suspended { id, request, mut action }) = self.suspended.take() else {
            return Err(QueueError::NothingPending);
        };

        let step = match action.resume(ctx, response) {
            Ok(step) => step,
            Err(err) => {
                self.suspended = Some(Suspended { id, request, action });
                return Err(err);
            }
        };
        self.splice_spawned(ctx);

        if let Some(status) = self.settle(id, action, step) {
            return Ok(status);
        }
        Ok(self.drain(ctx))
    }

    /// Discard every queued and suspended unit without running it.
    pub fn clear(&mut self) {
        self.discarded.extend(self.suspended.take().map(|s| s.id));
        self.discarded.extend(self.units.drain(..).map(|u| u.id));
    }

    fn alloc_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Put units spawned by the unit that just ran at the front, keeping
    /// their spawn order.
    fn splice_spawned(&mut self, ctx: &mut ApplyContext<'_>) {
        let spawned = ctx.take_spawned();
        if spawned.is_empty() {
            return;
        }

        let mut batch: Vec<QueuedUnit> = Vec::with_capacity(spawned.len());
        for action in spawned {
            let id = self.alloc_id();
            batch.push(QueuedUnit { id, action });
        }
        for unit in batch.into_iter().rev() {
            self.units.push_front(unit);
        }
    }

    /// Record a unit's step. Returns a status if draining must stop.
    fn settle(&mut self, id: UnitId, action: Box<dyn DeferredAction>, step: Step) -> Option<ResolutionStatus> {
        match step {
            Step::Resolved => {
                tracing::debug!(
                    target: "placement_rules::queue",
                    unit = id.0,
                    label = action.label(),
                    "unit resolved"
                );
                None
            }
            Step::AwaitInput(request) => {
                let player = action.player();
                tracing::debug!(
                    target: "placement_rules::queue",
                    unit = id.0,
                    label = action.label(),
                    player = player.0,
                    "unit awaiting input"
                );
                let pending = PendingInput {
                    unit: id,
                    player,
                    request: request.clone(),
                };
                self.suspended = Some(Suspended { id, request, action });
                Some(Self::awaiting(pending))
            }
        }
    }

    fn awaiting(pending: PendingInput) -> ResolutionStatus {
        ResolutionStatus::AwaitingInput {
            player: pending.player,
            unit: pending.unit,
            request: pending.request,
        }
    }
}

impl std::fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("queued", &self.queued_ids())
            .field("suspended", &self.suspended.as_ref().map(|s| s.id))
            .finish()
    }
}
