//! Placement reactions.
//!
//! Reacting cards are registered with their owners in a
//! [`ReactionRegistry`]. Every tile placement is broadcast by the
//! [`PlacementDispatcher`] to all enabled reactions. The dispatcher applies
//! the gates below for each reaction and, if they pass, lets its card queue
//! grants.
//!
//! ## Gates
//!
//! Evaluated in order, first failure wins:
//! 1. The placement is on the designated board.
//! 2. The current phase is not the excluded phase.
//! 3. The card's owner placed the tile.
//!
//! ## Example Usage
//!
//! ```
//! use placement_rules::board::{BoardBuilder, BoardType, Space, SpaceBonus, SpaceType};
//! use placement_rules::cards::{GeologicalSurvey, SurveyContext};
//! use placement_rules::core::{Phase, Player, PlayerId, PlayerMap, SessionConfig};
//! use placement_rules::policy::PolicyState;
//! use placement_rules::queue::DeferredQueue;
//! use placement_rules::triggers::{PlacementDispatcher, PlacementEvent, ReactionRegistry};
//!
//! let board = BoardBuilder::new(BoardType::Mars)
//!     .space(Space::new("03", SpaceType::Land).with_bonus(SpaceBonus::Steel))
//!     .build()
//!     .unwrap();
//! let players = PlayerMap::new(2, |p| Player::new(format!("P{}", p.0)));
//! let policies = PolicyState::disabled();
//! let config = SessionConfig::new(2);
//! let mut queue = DeferredQueue::new();
//!
//! let mut registry = ReactionRegistry::new();
//! registry.register(PlayerId::new(0), Box::new(GeologicalSurvey));
//!
//! let mut ctx = SurveyContext {
//!     board: &board,
//!     players: &players,
//!     policies: &policies,
//!     phase: Phase::Action,
//!     config: &config,
//!     queue: &mut queue,
//! };
//! let event = PlacementEvent::new(PlayerId::new(0), "03", BoardType::Mars);
//! let report = PlacementDispatcher::dispatch(&registry, &mut ctx, &event).unwrap();
//! assert_eq!(report.queued, 1);
//! ```

mod placement;
mod registry;

pub use placement::{DispatchReport, GateRejection, PlacementDispatcher, PlacementEvent};
pub use registry::{Reaction, ReactionId, ReactionRegistry};
