//! Game session.
//!
//! A [`GameSession`] owns everything one game's placement rules touch:
//! boards, players, policy state, registered reactions, the deferred queue,
//! the log and the RNG. Hosts drive it with [`GameSession::place_tile`] and
//! answer input requests with [`GameSession::respond`].
//!
//! ## Example Usage
//!
//! ```
//! use placement_rules::board::{BoardBuilder, BoardType, Space, SpaceBonus, SpaceType, Tile, TileType};
//! use placement_rules::cards::CardName;
//! use placement_rules::core::{PlayerId, Resource, SessionConfig};
//! use placement_rules::session::GameSession;
//!
//! let mars = BoardBuilder::new(BoardType::Mars)
//!     .space(Space::new("05", SpaceType::Land).with_bonus(SpaceBonus::Steel))
//!     .build()
//!     .unwrap();
//!
//! let mut session = GameSession::new(SessionConfig::new(2), [mars]);
//! let owner = PlayerId::new(0);
//! session.play_card_named(owner, CardName::GeologicalSurvey).unwrap();
//!
//! let status = session
//!     .place_tile(BoardType::Mars, owner, "05", Tile::new(TileType::Greenery))
//!     .unwrap();
//!
//! assert!(status.is_complete());
//! assert_eq!(session.player(owner).resource(Resource::Steel), 1);
//! assert_eq!(
//!     session.render_log().last().map(String::as_str),
//!     Some("Player 0 gained a bonus steel because of Geological Survey")
//! );
//! ```

use rustc_hash::FxHashMap;

use crate::board::{Board, BoardError, BoardType, SpaceId, Tile};
use crate::cards::{survey_card, CardName, PlayedCard, SurveyCard, SurveyContext};
use crate::core::{GameRng, GameRngState, Phase, Player, PlayerId, PlayerMap, SessionConfig};
use crate::effects::{ApplyContext, DeferredAction, InputResponse};
use crate::log::GameLog;
use crate::policy::PolicyState;
use crate::queue::{DeferredQueue, PendingInput, QueueError, ResolutionStatus, UnitId};
use crate::triggers::{DispatchReport, PlacementDispatcher, PlacementEvent, Reaction, ReactionId, ReactionRegistry};

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no {0:?} board in this session")]
    UnknownBoard(BoardType),

    #[error("{0} is not in this session")]
    UnknownPlayer(PlayerId),

    #[error("{0} is not registered")]
    UnknownReaction(ReactionId),

    #[error("{player} must answer {unit} first")]
    InputPending { player: PlayerId, unit: UnitId },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// One game's placement-rules state.
pub struct GameSession {
    config: SessionConfig,
    boards: FxHashMap<BoardType, Board>,
    players: PlayerMap<Player>,
    policies: PolicyState,
    phase: Phase,
    reactions: ReactionRegistry,
    queue: DeferredQueue,
    log: GameLog,
    rng: GameRng,
}

impl GameSession {
    /// Create a session with default player names and policies disabled.
    ///
    /// A later board with the same [`BoardType`] replaces an earlier one.
    pub fn new(config: SessionConfig, boards: impl IntoIterator<Item = Board>) -> Self {
        let players = PlayerMap::new(config.player_count, |p| Player::new(p.to_string()));
        let rng = GameRng::new(config.seed);
        let boards = boards.into_iter().map(|b| (b.board_type(), b)).collect();

        tracing::info!(
            target: "placement_rules::session",
            players = config.player_count,
            seed = config.seed,
            designated_board = ?config.designated_board,
            "session created"
        );

        Self {
            config,
            boards,
            players,
            policies: PolicyState::disabled(),
            phase: Phase::default(),
            reactions: ReactionRegistry::new(),
            queue: DeferredQueue::new(),
            log: GameLog::new(),
            rng,
        }
    }

    /// Replace the policy state (builder pattern).
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyState) -> Self {
        self.policies = policies;
        self
    }

    /// Rename a player (builder pattern).
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        if self.players.contains(player) {
            self.players[player].name = name.into();
        }
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A board by identity.
    #[must_use]
    pub fn board(&self, board_type: BoardType) -> Option<&Board> {
        self.boards.get(&board_type)
    }

    /// A player. Panics if `player` is not in the session.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn policies(&self) -> &PolicyState {
        &self.policies
    }

    pub fn policies_mut(&mut self) -> &mut PolicyState {
        &mut self.policies
    }

    #[must_use]
    pub fn reactions(&self) -> &ReactionRegistry {
        &self.reactions
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    #[must_use]
    pub fn queue(&self) -> &DeferredQueue {
        &self.queue
    }

    /// The unit waiting for input, if any.
    #[must_use]
    pub fn pending_input(&self) -> Option<PendingInput> {
        self.queue.pending_input()
    }

    /// Checkpoint of the RNG behind random card selections.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume random card selections from a checkpoint.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Render every log entry with the players' names.
    #[must_use]
    pub fn render_log(&self) -> Vec<String> {
        let players = &self.players;
        self.log.render_all(|p| {
            if players.contains(p) {
                players[p].name.clone()
            } else {
                p.to_string()
            }
        })
    }

    // === Setup ===

    /// Set the current phase.
    pub fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(target: "placement_rules::session", ?phase, "phase changed");
        self.phase = phase;
    }

    /// Put a card on `player`'s tableau.
    ///
    /// Registers its placement reaction if the card has one.
    pub fn play_card(&mut self, player: PlayerId, card: PlayedCard) -> Result<Option<ReactionId>, SessionError> {
        self.check_player(player)?;
        self.players[player].play_card(card);

        Ok(survey_card(card.name).map(|reaction| self.reactions.register(player, reaction)))
    }

    /// Put a card on `player`'s tableau by name, with the card resource the
    /// catalog would give it left unset.
    pub fn play_card_named(&mut self, player: PlayerId, name: CardName) -> Result<Option<ReactionId>, SessionError> {
        self.play_card(player, PlayedCard::new(name))
    }

    /// Register a reacting card for `owner`, adding it to the tableau if it
    /// is not already there.
    pub fn register_reaction(&mut self, owner: PlayerId, card: Box<dyn SurveyCard>) -> Result<ReactionId, SessionError> {
        self.check_player(owner)?;
        let name = card.name();
        if !self.players[owner].card_is_in_effect(name) {
            self.players[owner].play_card(PlayedCard::new(name));
        }
        Ok(self.reactions.register(owner, card))
    }

    /// Remove a reaction, for a card that leaves play.
    pub fn unregister_reaction(&mut self, id: ReactionId) -> Result<Reaction, SessionError> {
        let reaction = self
            .reactions
            .unregister(id)
            .ok_or(SessionError::UnknownReaction(id))?;
        tracing::debug!(
            target: "placement_rules::session",
            reaction = id.0,
            card = %reaction.card.name(),
            "reaction removed"
        );
        Ok(reaction)
    }

    /// Switch a reaction off or back on without removing it.
    pub fn set_reaction_enabled(&mut self, id: ReactionId, enabled: bool) -> Result<(), SessionError> {
        if self.reactions.set_enabled(id, enabled) {
            Ok(())
        } else {
            Err(SessionError::UnknownReaction(id))
        }
    }

    // === Placement ===

    /// Place a tile, dispatch the placement to every reacting card, then
    /// drain the queue.
    ///
    /// Refused while a unit is waiting for input.
    pub fn place_tile(
        &mut self,
        board_type: BoardType,
        player: PlayerId,
        space: impl Into<SpaceId>,
        tile: Tile,
    ) -> Result<ResolutionStatus, SessionError> {
        self.check_player(player)?;
        self.check_idle()?;
        let space = space.into();

        let board = self
            .boards
            .get_mut(&board_type)
            .ok_or(SessionError::UnknownBoard(board_type))?;
        board.place_tile(&space, tile, player)?;

        tracing::info!(
            target: "placement_rules::session",
            player = player.0,
            board = ?board_type,
            space = %space,
            tile = ?tile.tile_type,
            "tile placed"
        );

        self.dispatch(&PlacementEvent {
            placing_player: player,
            space,
            board: board_type,
        })?;
        Ok(self.run_all())
    }

    /// Broadcast a placement that already happened to every reacting card.
    /// Grants are queued but not drained.
    pub fn dispatch(&mut self, event: &PlacementEvent) -> Result<DispatchReport, SessionError> {
        let board = self
            .boards
            .get(&event.board)
            .ok_or(SessionError::UnknownBoard(event.board))?;

        let mut ctx = SurveyContext {
            board,
            players: &self.players,
            policies: &self.policies,
            phase: self.phase,
            config: &self.config,
            queue: &mut self.queue,
        };
        Ok(PlacementDispatcher::dispatch(&self.reactions, &mut ctx, event)?)
    }

    // === Queue ===

    /// Queue a unit behind everything already queued.
    pub fn enqueue(&mut self, unit: Box<dyn DeferredAction>) -> UnitId {
        self.queue.enqueue(unit)
    }

    /// Drain the queue until it is empty or a unit needs input.
    pub fn run_all(&mut self) -> ResolutionStatus {
        let mut ctx = ApplyContext::new(
            &mut self.players,
            &mut self.log,
            &mut self.rng,
            self.config.card_selection,
        );
        self.queue.drain(&mut ctx)
    }

    /// Answer the pending input request and keep draining.
    pub fn respond(
        &mut self,
        player: PlayerId,
        unit: UnitId,
        response: InputResponse,
    ) -> Result<ResolutionStatus, SessionError> {
        self.check_player(player)?;
        let mut ctx = ApplyContext::new(
            &mut self.players,
            &mut self.log,
            &mut self.rng,
            self.config.card_selection,
        );
        let status = self.queue.respond(player, unit, response, &mut ctx)?;

        tracing::debug!(
            target: "placement_rules::session",
            player = player.0,
            unit = unit.0,
            complete = status.is_complete(),
            "input answered"
        );
        Ok(status)
    }

    /// Discard all queued work. Used at teardown.
    pub fn clear_queue(&mut self) {
        if !self.queue.is_empty() {
            tracing::warn!(
                target: "placement_rules::session",
                discarded = self.queue.len(),
                "discarding queued units"
            );
        }
        self.queue.clear();
    }

    fn check_player(&self, player: PlayerId) -> Result<(), SessionError> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(SessionError::UnknownPlayer(player))
        }
    }

    fn check_idle(&self) -> Result<(), SessionError> {
        match self.queue.pending_input() {
            Some(pending) => Err(SessionError::InputPending {
                player: pending.player,
                unit: pending.unit,
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("reactions", &self.reactions.len())
            .field("queue", &self.queue)
            .field("log_entries", &self.log.len())
            .finish_non_exhaustive()
    }
}
