//! Tick scheduler tests: driven by a manual clock, no sleeping.

use neon_core::{
    scheduler::{TickScheduler, TickState},
    Clock, ManualClock,
};

#[test]
fn no_tick_before_a_full_second() {
    let clock = ManualClock::new();
    let mut scheduler = TickScheduler::new(clock.clone());

    for _ in 0..59 {
        clock.advance(1.0 / 60.0);
        assert_eq!(scheduler.poll(), None);
        assert_eq!(scheduler.state(), TickState::Idle);
    }
}

#[test]
fn tick_fires_at_one_second_and_restarts_interval() {
    let clock = ManualClock::starting_at(100.0);
    let mut scheduler = TickScheduler::new(clock.clone());

    clock.advance(1.0);
    assert_eq!(scheduler.poll(), Some(1.0));
    assert_eq!(scheduler.state(), TickState::Accruing);
    assert_eq!(scheduler.last_tick(), 101.0);

    clock.advance(0.5);
    assert_eq!(scheduler.poll(), None);
    assert_eq!(scheduler.state(), TickState::Idle);

    clock.advance(0.5);
    assert_eq!(scheduler.poll(), Some(1.0));
}

/// A long pause credits one nominal second, not the whole gap.
#[test]
fn long_pause_is_not_caught_up() {
    let clock = ManualClock::new();
    let mut scheduler = TickScheduler::new(clock.clone());

    clock.advance(3_600.0);
    assert_eq!(scheduler.poll(), Some(1.0));
    assert_eq!(scheduler.poll(), None, "missed seconds must not be replayed");
}

#[test]
fn polling_rate_does_not_change_tick_count() {
    let count_ticks = |steps: u32, step: f64| {
        let clock = ManualClock::new();
        let mut scheduler = TickScheduler::new(clock.clone());
        let mut ticks = 0;
        for _ in 0..steps {
            clock.advance(step);
            if scheduler.poll().is_some() {
                ticks += 1;
            }
        }
        ticks
    };

    // 10 seconds at 4 Hz and at 8 Hz (binary-exact steps).
    assert_eq!(count_ticks(40, 0.25), 10);
    assert_eq!(count_ticks(80, 0.125), 10);
}

/// Polling faster only re-checks the same interval; the tick lands once
/// the full second has passed since the previous one.
#[test]
fn interval_counts_from_previous_tick() {
    let clock = ManualClock::new();
    let mut scheduler = TickScheduler::new(clock.clone());

    clock.advance(1.5);
    assert_eq!(scheduler.poll(), Some(1.0));
    clock.advance(0.75);
    assert_eq!(scheduler.poll(), None);
    assert!(scheduler.clock().now() - scheduler.last_tick() < 1.0);

    clock.advance(0.25);
    assert_eq!(scheduler.poll(), Some(1.0));
}
