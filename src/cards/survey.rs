//! Placement-reacting survey cards.
//!
//! A survey card watches its owner's tile placements and queues resource
//! grants when the placed-on space (or a neighbour) carries a matching bonus.
//! Eligibility checks here are read-only; every grant goes through the
//! [`DeferredQueue`].

use crate::board::{Board, Space, SpaceBonus, SpaceType};
use crate::core::{Phase, Player, PlayerId, PlayerMap, Resource, SessionConfig};
use crate::effects::{AddResourcesToCard, GainResources};
use crate::log::{LogBuilder, LogMessage};
use crate::policy::{PolicyHooks, PolicyId};
use crate::queue::{DeferredQueue, UnitId};

use super::definition::{CardName, CardResource};

/// Template for every survey grant.
pub const SURVEY_GRANT_TEMPLATE: &str = "${0} gained a bonus ${1} because of ${2}";

/// State a survey card reads while deciding grants, plus the queue it
/// writes them to.
pub struct SurveyContext<'a> {
    pub board: &'a Board,
    pub players: &'a PlayerMap<Player>,
    pub policies: &'a dyn PolicyHooks,
    pub phase: Phase,
    pub config: &'a SessionConfig,
    pub queue: &'a mut DeferredQueue,
}

/// Extra eligibility for a standard resource when no bonus tag applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideCondition {
    /// `policy` is active for the owner and the space is not `excluded_space`.
    PolicyActive {
        policy: PolicyId,
        excluded_space: SpaceType,
    },
    /// The owner has `card` in effect and the space is an uncovered ocean.
    CardInEffectOnUncoveredOcean { card: CardName },
}

impl SideCondition {
    /// The side condition shared by every survey card, if any.
    ///
    /// Only steel and plants have one. Any other resource gets no extra
    /// eligibility, so a new resource that needs a side condition must be
    /// added here or in a card's override.
    #[must_use]
    pub fn standard(resource: Resource) -> Option<SideCondition> {
        match resource {
            Resource::Steel => Some(SideCondition::PolicyActive {
                policy: PolicyId::MARS_FIRST_01,
                excluded_space: SpaceType::Colony,
            }),
            Resource::Plants => Some(SideCondition::CardInEffectOnUncoveredOcean {
                card: CardName::ArcticAlgae,
            }),
            _ => None,
        }
    }

    /// Evaluate for `owner` placing on `space`.
    #[must_use]
    pub fn holds(&self, ctx: &SurveyContext<'_>, owner: PlayerId, space: &Space) -> bool {
        match *self {
            SideCondition::PolicyActive { policy, excluded_space } => {
                space.space_type != excluded_space && ctx.policies.is_policy_active_for(owner, policy)
            }
            SideCondition::CardInEffectOnUncoveredOcean { card } => {
                Board::is_uncovered_ocean_space(space) && ctx.players[owner].card_is_in_effect(card)
            }
        }
    }
}

/// A card that reacts to its owner's tile placements.
///
/// Implementors supply [`name`](SurveyCard::name) and
/// [`check_for_bonuses`](SurveyCard::check_for_bonuses), usually as a list
/// of calls to the two provided grant tests. Board, phase and ownership
/// gating happens in the dispatcher before `check_for_bonuses` is called.
pub trait SurveyCard {
    /// Card identity, used in grant log messages.
    fn name(&self) -> CardName;

    /// Queue whatever this card grants for `owner` placing on `space`.
    fn check_for_bonuses(&self, ctx: &mut SurveyContext<'_>, owner: PlayerId, space: &Space);

    /// Extra eligibility for a standard resource.
    fn side_condition(&self, resource: Resource) -> Option<SideCondition> {
        SideCondition::standard(resource)
    }

    /// Queue one `resource` for `owner` if `bonus` is live on `space` or
    /// offered by a neighbour, or the resource's side condition holds.
    fn test_for_standard_resource(
        &self,
        ctx: &mut SurveyContext<'_>,
        owner: PlayerId,
        space: &Space,
        resource: Resource,
        bonus: SpaceBonus,
    ) -> Option<UnitId> {
        let grant = bonus_applies(ctx.board, space, bonus)
            || self
                .side_condition(resource)
                .is_some_and(|cond| cond.holds(ctx, owner, space));
        if !grant {
            return None;
        }

        let log = grant_log(owner, resource.as_str(), self.name());
        let unit = ctx
            .queue
            .enqueue(Box::new(GainResources::new(owner, resource).with_log(log)));
        tracing::debug!(
            target: "placement_rules::cards",
            card = %self.name(),
            player = owner.0,
            space = %space.id,
            %resource,
            "standard grant queued"
        );
        Some(unit)
    }

    /// Queue one `resource` onto one of `owner`'s cards if the owner has a
    /// card accumulating it and `bonus` is live on `space` or offered by a
    /// neighbour.
    fn test_for_card_resource(
        &self,
        ctx: &mut SurveyContext<'_>,
        owner: PlayerId,
        space: &Space,
        resource: CardResource,
        bonus: SpaceBonus,
    ) -> Option<UnitId> {
        if !ctx.players[owner].has_card_accumulating(resource) || !bonus_applies(ctx.board, space, bonus) {
            return None;
        }

        let log = grant_log(owner, resource.as_str(), self.name());
        let unit = ctx
            .queue
            .enqueue(Box::new(AddResourcesToCard::new(owner, resource).with_log(log)));
        tracing::debug!(
            target: "placement_rules::cards",
            card = %self.name(),
            player = owner.0,
            space = %space.id,
            %resource,
            "card grant queued"
        );
        Some(unit)
    }
}

fn bonus_applies(board: &Board, space: &Space, bonus: SpaceBonus) -> bool {
    board.grants_bonus_now(space, bonus) || board.any_adjacent_gives_bonus(space, bonus)
}

/// The log message for one survey grant.
#[must_use]
pub fn grant_log(owner: PlayerId, resource: &str, card: CardName) -> LogMessage {
    LogBuilder::new(SURVEY_GRANT_TEMPLATE)
        .player(owner)
        .string(resource)
        .card_name(card)
        .build()
}
