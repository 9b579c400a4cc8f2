//! Time sources for the tick scheduler.
//!
//! The scheduler never reads wall-clock time directly; it asks a `Clock`.
//! Production uses `SystemClock`; tests drive a `ManualClock` by hand.

use std::{cell::Cell, rc::Rc, time::Instant};

/// Monotonic seconds since some fixed origin.
pub trait Clock {
    fn now(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-advanced clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    seconds: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    pub fn starting_at(seconds: f64) -> Self {
        Self { seconds: Rc::new(Cell::new(seconds)) }
    }

    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}
