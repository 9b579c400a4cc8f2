//! Tick scheduler: wall-clock driven accrual, decoupled from frame rate.
//!
//! Two states: Idle (under a second since the last tick) and Accruing
//! (a tick fired on this poll). A tick always credits exactly one nominal
//! second, however long the gap was. Missed seconds are NOT caught up.
//!
//! The scheduler only decides WHEN; the session applies the accrual and saves.

use crate::{clock::Clock, types::TICK_SECONDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickState {
    Idle,
    Accruing,
}

pub struct TickScheduler<C: Clock> {
    clock:     C,
    last_tick: f64,
    state:     TickState,
}

impl<C: Clock> TickScheduler<C> {
    /// Start the interval at the clock's current reading.
    pub fn new(clock: C) -> Self {
        let last_tick = clock.now();
        Self {
            clock,
            last_tick,
            state: TickState::Idle,
        }
    }

    /// Poll once. Returns the nominal seconds to accrue when a tick fires.
    pub fn poll(&mut self) -> Option<f64> {
        let now = self.clock.now();
        if now - self.last_tick >= TICK_SECONDS {
            self.last_tick = now;
            self.state = TickState::Accruing;
            Some(TICK_SECONDS)
        } else {
            self.state = TickState::Idle;
            None
        }
    }

    pub fn state(&self) -> TickState {
        self.state
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
