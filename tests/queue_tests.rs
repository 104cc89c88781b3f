//! Deferred queue integration tests.
//!
//! These tests verify ordering under cascading grants, suspension on player
//! input, and custom units plugged in through the public traits.

use std::cell::RefCell;
use std::rc::Rc;

use placement_rules::board::{BoardBuilder, BoardType, Space, SpaceBonus, SpaceType, Tile, TileType};
use placement_rules::cards::{CardName, CardResource, PlayedCard, SurveyCard, SurveyContext};
use placement_rules::core::{PlayerId, Resource, SessionConfig};
use placement_rules::effects::{
    AddResourcesToCard, ApplyContext, DeferredAction, GainResources, InputRequest, InputResponse, Step,
};
use placement_rules::log::LogBuilder;
use placement_rules::queue::{QueueError, ResolutionStatus, UnitState};
use placement_rules::session::{GameSession, SessionError};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

type Trace = Rc<RefCell<Vec<&'static str>>>;

/// Records its name when it runs, then defers its children.
struct Traced {
    name: &'static str,
    trace: Trace,
    children: Vec<Traced>,
}

impl Traced {
    fn new(name: &'static str, trace: &Trace) -> Self {
        Self {
            name,
            trace: Rc::clone(trace),
            children: Vec::new(),
        }
    }

    fn spawning(mut self, child: Traced) -> Self {
        self.children.push(child);
        self
    }
}

impl DeferredAction for Traced {
    fn player(&self) -> PlayerId {
        P0
    }

    fn label(&self) -> &'static str {
        "Traced"
    }

    fn execute(&mut self, ctx: &mut ApplyContext<'_>) -> Step {
        self.trace.borrow_mut().push(self.name);
        for child in self.children.drain(..) {
            ctx.defer(Box::new(child));
        }
        Step::Resolved
    }
}

fn session() -> GameSession {
    let mars = BoardBuilder::new(BoardType::Mars)
        .space(
            Space::new("wild", SpaceType::Land)
                .with_bonus(SpaceBonus::Animal)
                .with_bonus(SpaceBonus::Steel),
        )
        .build()
        .unwrap();
    GameSession::new(SessionConfig::new(2), [mars])
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_fifo_order() {
    let trace: Trace = Rc::default();
    let mut s = session();

    for name in ["a", "b", "c"] {
        s.enqueue(Box::new(Traced::new(name, &trace)));
    }
    assert!(s.run_all().is_complete());

    assert_eq!(*trace.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn test_spawned_units_run_before_queued_siblings() {
    let trace: Trace = Rc::default();
    let mut s = session();

    let a = Traced::new("A", &trace)
        .spawning(Traced::new("X", &trace))
        .spawning(Traced::new("Y", &trace));
    s.enqueue(Box::new(a));
    s.enqueue(Box::new(Traced::new("B", &trace)));

    assert!(s.run_all().is_complete());
    assert_eq!(*trace.borrow(), vec!["A", "X", "Y", "B"]);
}

#[test]
fn test_nested_cascade_is_depth_first() {
    let trace: Trace = Rc::default();
    let mut s = session();

    let a = Traced::new("A", &trace)
        .spawning(Traced::new("X", &trace).spawning(Traced::new("X1", &trace)))
        .spawning(Traced::new("Y", &trace));
    s.enqueue(Box::new(a));
    s.enqueue(Box::new(Traced::new("B", &trace)));

    assert!(s.run_all().is_complete());
    assert_eq!(*trace.borrow(), vec!["A", "X", "X1", "Y", "B"]);
}

// ============================================================================
// Suspension
// ============================================================================

#[test]
fn test_suspended_unit_blocks_later_units() {
    let trace: Trace = Rc::default();
    let mut s = session();
    s.play_card(P1, PlayedCard::accumulating(CardName::Fish, CardResource::Animal)).unwrap();
    s.play_card(P1, PlayedCard::accumulating(CardName::Livestock, CardResource::Animal)).unwrap();

    s.enqueue(Box::new(Traced::new("before", &trace)));
    let ask = s.enqueue(Box::new(AddResourcesToCard::new(P1, CardResource::Animal).with_count(2)));
    let after = s.enqueue(Box::new(Traced::new("after", &trace)));

    let status = s.run_all();
    assert_eq!(
        status,
        ResolutionStatus::AwaitingInput {
            player: P1,
            unit: ask,
            request: InputRequest::SelectCard {
                title: "Select card to add 2 Animal(s)".to_string(),
                resource: CardResource::Animal,
                count: 2,
                candidates: vec![CardName::Fish, CardName::Livestock],
            },
        }
    );
    assert_eq!(*trace.borrow(), vec!["before"]);
    assert_eq!(s.queue().state_of(ask), Some(UnitState::AwaitingInput));
    assert_eq!(s.queue().state_of(after), Some(UnitState::Pending));

    // Running again is a no-op while suspended.
    assert!(!s.run_all().is_complete());
    assert_eq!(*trace.borrow(), vec!["before"]);

    let done = s.respond(P1, ask, InputResponse::SelectCard(CardName::Fish)).unwrap();
    assert!(done.is_complete());
    assert_eq!(*trace.borrow(), vec!["before", "after"]);
    assert_eq!(s.player(P1).played_card(CardName::Fish).unwrap().resource_count, 2);
    assert_eq!(s.queue().state_of(after), Some(UnitState::Resolved));
}

#[test]
fn test_wrong_responder_is_rejected() {
    let mut s = session();
    s.play_card(P1, PlayedCard::accumulating(CardName::Ants, CardResource::Microbe)).unwrap();
    s.play_card(P1, PlayedCard::accumulating(CardName::Decomposers, CardResource::Microbe)).unwrap();

    let ask = s.enqueue(Box::new(AddResourcesToCard::new(P1, CardResource::Microbe)));
    s.run_all();

    assert_eq!(
        s.respond(P0, ask, InputResponse::SelectCard(CardName::Ants)),
        Err(SessionError::Queue(QueueError::WrongPlayer { expected: P1, got: P0 }))
    );
    assert_eq!(
        s.respond(P1, ask, InputResponse::SelectCard(CardName::Fish)),
        Err(SessionError::Queue(QueueError::InvalidSelection(CardName::Fish)))
    );

    let pending = s.pending_input().unwrap();
    assert_eq!(pending.unit, ask);
    assert_eq!(pending.player, P1);

    assert!(s.respond(P1, ask, InputResponse::SelectCard(CardName::Decomposers)).is_ok());
    assert!(s.pending_input().is_none());
}

#[test]
fn test_candidate_removed_before_resolution() {
    let mut s = session();
    s.enqueue(Box::new(AddResourcesToCard::new(P0, CardResource::Floater)));

    // Nothing accumulates floaters when the unit runs.
    assert!(s.run_all().is_complete());
    assert!(s.log().is_empty());
}

// ============================================================================
// Cascading from reactions
// ============================================================================

/// A reaction whose steel grant, once applied, queues a follow-up heat grant.
struct Forge;

impl SurveyCard for Forge {
    fn name(&self) -> CardName {
        CardName::GeologicalSurvey
    }

    fn check_for_bonuses(&self, ctx: &mut SurveyContext<'_>, owner: PlayerId, space: &Space) {
        if space.grants_bonus_now(SpaceBonus::Steel) {
            let unit = GainResources::new(owner, Resource::Steel).on_applied(move |ctx| {
                let log = LogBuilder::new("${0} stoked the forge").player(owner).build();
                ctx.defer(Box::new(GainResources::new(owner, Resource::Heat).with_log(log)));
            });
            ctx.queue.enqueue(Box::new(unit));
        }
    }
}

#[test]
fn test_reaction_cascade_finishes_within_placement() {
    let mut s = session();
    s.register_reaction(P0, Box::new(Forge)).unwrap();
    s.play_card_named(P0, CardName::EcologicalSurvey).unwrap();
    s.play_card(P0, PlayedCard::accumulating(CardName::Birds, CardResource::Animal)).unwrap();

    let status = s.place_tile(BoardType::Mars, P0, "wild", Tile::new(TileType::Greenery)).unwrap();

    assert!(status.is_complete());
    assert_eq!(s.player(P0).resource(Resource::Steel), 1);
    assert_eq!(s.player(P0).resource(Resource::Heat), 1);
    assert_eq!(s.player(P0).played_card(CardName::Birds).unwrap().resource_count, 1);

    // Forge's follow-up runs before the Ecological Survey grant queued after it.
    assert_eq!(
        s.render_log(),
        vec![
            "Player 0 stoked the forge".to_string(),
            "Player 0 gained a bonus Animal because of Ecological Survey".to_string(),
        ]
    );
}
