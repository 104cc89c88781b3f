//! Placement dispatch.

use serde::{Deserialize, Serialize};

use crate::board::{BoardError, BoardType, Space, SpaceId};
use crate::cards::{SurveyCard, SurveyContext};
use crate::core::{Phase, PlayerId};

use super::registry::{ReactionId, ReactionRegistry};

/// One physical tile placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementEvent {
    pub placing_player: PlayerId,
    pub space: SpaceId,
    pub board: BoardType,
}

impl PlacementEvent {
    /// Create a placement event.
    pub fn new(placing_player: PlayerId, space: impl Into<SpaceId>, board: BoardType) -> Self {
        Self {
            placing_player,
            space: space.into(),
            board,
        }
    }
}

/// Why a reaction ignored a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateRejection {
    /// The placement was not on the designated board.
    OtherBoard(BoardType),
    /// The placement happened during the excluded phase.
    ExcludedPhase(Phase),
    /// Someone other than the card's owner placed the tile.
    NotOwner { owner: PlayerId, placing_player: PlayerId },
}

impl std::fmt::Display for GateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateRejection::OtherBoard(board) => write!(f, "placement on {:?} board", board),
            GateRejection::ExcludedPhase(phase) => write!(f, "placement during {:?} phase", phase),
            GateRejection::NotOwner { owner, placing_player } => {
                write!(f, "{} placed but {} owns the card", placing_player, owner)
            }
        }
    }
}

/// What one dispatch did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Reactions whose gates passed, in dispatch order.
    pub fired: Vec<ReactionId>,
    /// Reactions that ignored the placement.
    pub rejected: Vec<(ReactionId, GateRejection)>,
    /// Units queued by the fired reactions.
    pub queued: usize,
}

/// Routes placements to reacting cards.
pub struct PlacementDispatcher;

impl PlacementDispatcher {
    /// Check whether a card owned by `card_owner` reacts to this placement.
    ///
    /// Gates run in order and the first failure wins: designated board,
    /// then excluded phase, then ownership.
    pub fn gate(
        ctx: &SurveyContext<'_>,
        card_owner: PlayerId,
        placing_player: PlayerId,
        board_type: BoardType,
    ) -> Result<(), GateRejection> {
        if board_type != ctx.config.designated_board {
            return Err(GateRejection::OtherBoard(board_type));
        }
        if ctx.phase == ctx.config.excluded_phase {
            return Err(GateRejection::ExcludedPhase(ctx.phase));
        }
        if card_owner != placing_player {
            return Err(GateRejection::NotOwner {
                owner: card_owner,
                placing_player,
            });
        }
        Ok(())
    }

    /// Deliver one placement to one card owned by `card_owner`: gate it,
    /// then let the card check for bonuses.
    pub fn on_placement(
        card: &dyn SurveyCard,
        ctx: &mut SurveyContext<'_>,
        card_owner: PlayerId,
        placing_player: PlayerId,
        space: &Space,
        board_type: BoardType,
    ) -> Result<(), GateRejection> {
        if let Err(rejection) = Self::gate(ctx, card_owner, placing_player, board_type) {
            tracing::trace!(
                target: "placement_rules::triggers",
                card = %card.name(),
                owner = card_owner.0,
                space = %space.id,
                %rejection,
                "placement ignored"
            );
            return Err(rejection);
        }

        card.check_for_bonuses(ctx, card_owner, space);
        Ok(())
    }

    /// Broadcast a placement to every enabled reaction in dispatch order.
    ///
    /// Fails only if the event names a space the board does not have.
    pub fn dispatch(
        registry: &ReactionRegistry,
        ctx: &mut SurveyContext<'_>,
        event: &PlacementEvent,
    ) -> Result<DispatchReport, BoardError> {
        let board = ctx.board;
        let space = board.space(&event.space)?;
        let queued_before = ctx.queue.len();

        let mut report = DispatchReport::default();
        for reaction in registry.in_dispatch_order() {
            match Self::on_placement(
                reaction.card.as_ref(),
                ctx,
                reaction.owner,
                event.placing_player,
                space,
                event.board,
            ) {
                Ok(()) => report.fired.push(reaction.id),
                Err(rejection) => report.rejected.push((reaction.id, rejection)),
            }
        }
        report.queued = ctx.queue.len().saturating_sub(queued_before);

        tracing::debug!(
            target: "placement_rules::triggers",
            player = event.placing_player.0,
            space = %event.space,
            fired = report.fired.len(),
            queued = report.queued,
            "placement dispatched"
        );
        Ok(report)
    }
}
