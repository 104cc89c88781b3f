//! Built-in grant units.
//!
//! - [`GainResources`]: add standard resources to a player's stock
//! - [`AddResourcesToCard`]: add card resources to one of a player's cards
//!
//! Both mutate first, then write their log message (if any), then run
//! their `on_applied` follow-up.

use crate::cards::{CardName, CardResource};
use crate::core::{CardSelection, PlayerId, Resource};
use crate::log::LogMessage;
use crate::queue::QueueError;

use super::unit::{ApplyContext, DeferredAction, InputRequest, InputResponse, OnApplied, Step};

/// Add `count` of a standard resource to a player's stock.
pub struct GainResources {
    player: PlayerId,
    resource: Resource,
    count: i64,
    log: Option<LogMessage>,
    on_applied: Option<OnApplied>,
}

impl GainResources {
    /// Grant one unit of `resource` to `player`.
    #[must_use]
    pub fn new(player: PlayerId, resource: Resource) -> Self {
        Self {
            player,
            resource,
            count: 1,
            log: None,
            on_applied: None,
        }
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Log `message` once the resources are added (builder pattern).
    #[must_use]
    pub fn with_log(mut self, message: LogMessage) -> Self {
        self.log = Some(message);
        self
    }

    /// Run `f` after the mutation and log (builder pattern).
    #[must_use]
    pub fn on_applied(mut self, f: impl FnOnce(&mut ApplyContext<'_>) + 'static) -> Self {
        self.on_applied = Some(Box::new(f));
        self
    }

    /// The granted resource.
    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// The granted amount.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl std::fmt::Debug for GainResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GainResources")
            .field("player", &self.player)
            .field("resource", &self.resource)
            .field("count", &self.count)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl DeferredAction for GainResources {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn label(&self) -> &'static str {
        "GainResources"
    }

    fn execute(&mut self, ctx: &mut ApplyContext<'_>) -> Step {
        ctx.players[self.player].stock.add(self.resource, self.count);
        tracing::debug!(
            target: "placement_rules::effects",
            player = self.player.0,
            resource = %self.resource,
            count = self.count,
            "resources gained"
        );

        if let Some(message) = self.log.take() {
            ctx.log.record(message);
        }
        if let Some(f) = self.on_applied.take() {
            f(ctx);
        }
        Step::Resolved
    }
}

/// Add `count` of a card resource to one of a player's cards.
///
/// The target is the only card accumulating the resource, or, with several
/// candidates, the one picked per the session's [`CardSelection`]. If the
/// player no longer holds any candidate when the unit runs, it resolves
/// without effect.
pub struct AddResourcesToCard {
    player: PlayerId,
    resource: CardResource,
    count: u32,
    log: Option<LogMessage>,
    on_applied: Option<OnApplied>,
    candidates: Vec<CardName>,
}

impl AddResourcesToCard {
    /// Add one `resource` to one of `player`'s cards.
    #[must_use]
    pub fn new(player: PlayerId, resource: CardResource) -> Self {
        Self {
            player,
            resource,
            count: 1,
            log: None,
            on_applied: None,
            candidates: Vec::new(),
        }
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Log `message` once the resources are added (builder pattern).
    #[must_use]
    pub fn with_log(mut self, message: LogMessage) -> Self {
        self.log = Some(message);
        self
    }

    /// Run `f` after the mutation and log (builder pattern).
    #[must_use]
    pub fn on_applied(mut self, f: impl FnOnce(&mut ApplyContext<'_>) + 'static) -> Self {
        self.on_applied = Some(Box::new(f));
        self
    }

    /// The card resource being added.
    #[must_use]
    pub fn resource(&self) -> CardResource {
        self.resource
    }

    fn apply(&mut self, ctx: &mut ApplyContext<'_>, target: CardName) -> Step {
        if let Some(card) = ctx.players[self.player].played_card_mut(target) {
            card.add_resources(self.count);
        }
        tracing::debug!(
            target: "placement_rules::effects",
            player = self.player.0,
            resource = %self.resource,
            card = %target,
            count = self.count,
            "card resources added"
        );

        if let Some(message) = self.log.take() {
            ctx.log.record(message);
        }
        if let Some(f) = self.on_applied.take() {
            f(ctx);
        }
        Step::Resolved
    }
}

impl std::fmt::Debug for AddResourcesToCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddResourcesToCard")
            .field("player", &self.player)
            .field("resource", &self.resource)
            .field("count", &self.count)
            .field("candidates", &self.candidates)
            .finish_non_exhaustive()
    }
}

impl DeferredAction for AddResourcesToCard {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn label(&self) -> &'static str {
        "AddResourcesToCard"
    }

    fn execute(&mut self, ctx: &mut ApplyContext<'_>) -> Step {
        self.candidates = ctx.players[self.player]
            .cards_accumulating(self.resource)
            .map(|c| c.name)
            .collect();

        let target = match (self.candidates.as_slice(), ctx.card_selection) {
            ([], _) => {
                tracing::debug!(
                    target: "placement_rules::effects",
                    player = self.player.0,
                    resource = %self.resource,
                    "no card accumulates resource"
                );
                return Step::Resolved;
            }
            ([only], _) => *only,
            ([first, ..], CardSelection::First) => *first,
            (all, CardSelection::Random) => match ctx.rng.choose(all) {
                Some(&picked) => picked,
                None => return Step::Resolved,
            },
            (all, CardSelection::Ask) => {
                return Step::AwaitInput(InputRequest::SelectCard {
                    title: format!("Select card to add {} {}(s)", self.count, self.resource),
                    resource: self.resource,
                    count: self.count,
                    candidates: all.to_vec(),
                });
            }
        };

        self.apply(ctx, target)
    }

    fn resume(&mut self, ctx: &mut ApplyContext<'_>, response: InputResponse) -> Result<Step, QueueError> {
        let InputResponse::SelectCard(card) = response;
        if !self.candidates.contains(&card) {
            return Err(QueueError::InvalidSelection(card));
        }
        Ok(self.apply(ctx, card))
    }
}
