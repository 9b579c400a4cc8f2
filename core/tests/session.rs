//! Session controller tests: action dispatch, autosave policy, tick wiring.

use neon_core::{
    error::StoreError,
    event::ClickerEvent,
    scheduler::TickState,
    Action, AutosavePolicy, ClickerState, EconomyError, HighScores, LoadError, ManualClock,
    MemoryStore, Outcome, SaveRecord, SaveStore, Session,
};
use std::cell::Cell;

/// Store that refuses every write, counting attempts.
#[derive(Default)]
struct BrokenStore {
    attempts: Cell<u32>,
}

impl SaveStore for BrokenStore {
    fn try_load(&self) -> Result<SaveRecord, LoadError> {
        Err(LoadError::Missing)
    }

    fn save(&self, _record: &SaveRecord) -> Result<(), StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Unavailable("disk full".into()))
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record(score: f64, multiplier: u64, buildings: [u64; 4]) -> SaveRecord {
    SaveRecord {
        clicker: ClickerState { score, multiplier, buildings },
        high_scores: HighScores::default(),
    }
}

fn session_with(rec: SaveRecord) -> (Session<MemoryStore, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::with_record(rec, MemoryStore::new(), clock.clone(), AutosavePolicy::default());
    (session, clock)
}

#[test]
fn start_loads_from_store_once() {
    let store = MemoryStore::new();
    store.save(&record(42.0, 2, [1, 0, 0, 0])).unwrap();

    let session = Session::start(store, ManualClock::new(), AutosavePolicy::default());

    assert_eq!(session.record().clicker.score, 42.0);
    assert_eq!(session.record().clicker.multiplier, 2);
}

#[test]
fn start_on_corrupt_store_uses_defaults() {
    init_logs();
    let store = MemoryStore::with_contents("not json at all");
    let session = Session::start(store, ManualClock::new(), AutosavePolicy::default());
    assert_eq!(session.record(), &SaveRecord::default());
}

#[test]
fn mine_does_not_save_by_default() {
    let (mut session, _clock) = session_with(SaveRecord::default());

    let outcome = session.handle(Action::Mine).unwrap();

    assert!(outcome.is_applied());
    assert_eq!(session.record().clicker.score, 1.0);
    assert!(session.store().contents().is_none());
    assert!(session.last_save().is_none());
}

#[test]
fn purchase_does_not_save_by_default() {
    let (mut session, _clock) = session_with(record(15.0, 1, [0; 4]));

    session.handle(Action::Purchase { index: 0 }).unwrap();

    assert_eq!(session.record().clicker.buildings, [1, 0, 0, 0]);
    assert!(session.store().contents().is_none());
}

#[test]
fn durable_policy_saves_every_mutation() {
    let clock = ManualClock::new();
    let mut session = Session::with_record(
        record(15.0, 1, [0; 4]),
        MemoryStore::new(),
        clock,
        AutosavePolicy::durable(),
    );

    session.handle(Action::Purchase { index: 0 }).unwrap();
    assert_eq!(session.store().try_load().unwrap().clicker.buildings, [1, 0, 0, 0]);

    session.handle(Action::Mine).unwrap();
    assert_eq!(session.store().try_load().unwrap().clicker.score, 1.0);
}

#[test]
fn rejected_purchase_is_a_no_op() {
    let (mut session, _clock) = session_with(record(14.0, 1, [0; 4]));
    let before = session.record().clone();

    let outcome = session.handle(Action::Purchase { index: 0 }).unwrap();

    match outcome {
        Outcome::Rejected { error, .. } => {
            assert_eq!(error, EconomyError::InsufficientFunds { cost: 15, score: 14.0 })
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(session.record(), &before);
}

#[test]
fn invalid_index_is_rejected_not_fatal() {
    let (mut session, _clock) = session_with(record(1e6, 1, [0; 4]));

    let outcome = session.handle(Action::Purchase { index: 7 }).unwrap();

    assert!(matches!(
        outcome,
        Outcome::Rejected { error: EconomyError::InvalidIndex { index: 7 }, .. }
    ));
}

#[test]
fn ascend_saves_immediately() {
    let (mut session, _clock) = session_with(record(150_000.0, 1, [10, 2, 0, 0]));

    let outcome = session.handle(Action::Ascend).unwrap();

    assert!(outcome.is_applied());
    let saved = session.store().try_load().unwrap();
    assert_eq!(saved.clicker, ClickerState { score: 0.0, multiplier: 2, buildings: [0; 4] });
}

#[test]
fn ascend_below_threshold_does_not_save() {
    let (mut session, _clock) = session_with(record(99_999.0, 1, [0; 4]));

    let outcome = session.handle(Action::Ascend).unwrap();

    assert!(!outcome.is_applied());
    assert!(session.store().contents().is_none());
}

#[test]
fn exit_writes_final_save() {
    let (mut session, _clock) = session_with(SaveRecord::default());
    for _ in 0..5 {
        session.handle(Action::Mine).unwrap();
    }

    let outcome = session.handle(Action::Exit).unwrap();

    assert_eq!(outcome, Outcome::Exited);
    assert_eq!(session.store().try_load().unwrap().clicker.score, 5.0);
}

#[test]
fn tick_accrues_and_saves() {
    let (mut session, clock) = session_with(record(0.0, 1, [1, 0, 0, 0]));

    clock.advance(0.5);
    assert_eq!(session.poll(), None);
    assert_eq!(session.tick_state(), TickState::Idle);

    clock.advance(0.5);
    let event = session.poll().unwrap();

    assert_eq!(event, ClickerEvent::Accrued { seconds: 1.0, gained: 1.0, score: 1.0 });
    assert_eq!(session.tick_state(), TickState::Accruing);
    assert_eq!(session.store().try_load().unwrap().clicker.score, 1.0);
}

/// The front end polls on a timer, not on input: with no actions at all,
/// each elapsed second is credited as it passes.
#[test]
fn polling_without_actions_accrues_every_second() {
    let (mut session, clock) = session_with(record(0.0, 1, [0, 1, 0, 0]));

    for _ in 0..3 {
        for _ in 0..8 {
            clock.advance(0.125);
            session.poll();
        }
    }

    assert_eq!(session.record().clicker.score, 15.0);
    assert_eq!(session.store().try_load().unwrap().clicker.score, 15.0);
}

#[test]
fn long_gap_credits_one_second_only() {
    let (mut session, clock) = session_with(record(0.0, 2, [0, 1, 0, 0]));

    clock.advance(600.0);
    session.poll();

    assert_eq!(session.record().clicker.score, 10.0);
}

#[test]
fn failed_saves_are_reported_but_state_survives() {
    init_logs();
    let clock = ManualClock::new();
    let mut session = Session::with_record(
        record(0.0, 1, [2, 0, 0, 0]),
        BrokenStore::default(),
        clock.clone(),
        AutosavePolicy::default(),
    );

    clock.advance(1.0);
    assert!(session.poll().is_some());

    assert_eq!(session.record().clicker.score, 2.0);
    assert_eq!(session.store().attempts.get(), 1);
    assert!(matches!(session.last_save(), Some(Err(_))));

    session.handle(Action::Mine).unwrap();
    assert_eq!(session.record().clicker.score, 3.0);

    assert!(session.on_exit().is_err());
    assert!(session.handle(Action::Exit).is_err());
}

#[test]
fn high_score_saves_only_when_improved() {
    let (mut session, _clock) = session_with(SaveRecord::default());

    assert!(!session.record_if_better(neon_core::Minigame::Runner, 0));
    assert!(session.store().contents().is_none());

    assert!(session.record_if_better(neon_core::Minigame::Runner, 12));
    assert_eq!(session.store().try_load().unwrap().high_scores.runner, 12);
}

#[test]
fn actions_parse_from_json() {
    let action: Action = serde_json::from_str(r#"{"action":"purchase","index":2}"#).unwrap();
    assert_eq!(action, Action::Purchase { index: 2 });

    let action: Action = serde_json::from_str(r#"{"action":"ascend"}"#).unwrap();
    assert_eq!(action, Action::Ascend);
}
