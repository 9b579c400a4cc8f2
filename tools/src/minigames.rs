//! Stateless side games. They never touch the save record.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::time::{Duration, Instant};

const EIGHT_BALL_ANSWERS: [&str; 5] = ["Yes", "No", "Ask Later", "Definitely", "Impossible"];

/// Random wait before the GO signal, in milliseconds.
const REACTION_DELAY_MS: std::ops::RangeInclusive<u64> = 1_000..=3_000;

pub struct SideGames {
    rng: Pcg64Mcg,
}

impl SideGames {
    pub fn new(seed: u64) -> Self {
        Self { rng: Pcg64Mcg::seed_from_u64(seed) }
    }

    pub fn coin_flip(&mut self) -> &'static str {
        if self.rng.gen_bool(0.5) { "HEADS" } else { "TAILS" }
    }

    pub fn magic_8_ball(&mut self) -> &'static str {
        EIGHT_BALL_ANSWERS[self.rng.gen_range(0..EIGHT_BALL_ANSWERS.len())]
    }

    /// Arm a reaction test whose GO signal fires after a random delay.
    pub fn reaction_test(&mut self, now: Instant) -> ReactionTest {
        let delay = Duration::from_millis(self.rng.gen_range(REACTION_DELAY_MS));
        ReactionTest { go_at: now + delay, shown: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Pressed before GO was shown.
    TooSoon,
    /// Milliseconds between GO and the press.
    Reacted(u128),
}

/// Wait for GO, then time the next press.
#[derive(Debug)]
pub struct ReactionTest {
    go_at: Instant,
    shown: bool,
}

impl ReactionTest {
    /// True exactly once: on the first check at or after the GO instant.
    pub fn should_show_go(&mut self, now: Instant) -> bool {
        if !self.shown && now >= self.go_at {
            self.shown = true;
            return true;
        }
        false
    }

    pub fn press(&self, now: Instant) -> Reaction {
        if !self.shown {
            return Reaction::TooSoon;
        }
        Reaction::Reacted(now.saturating_duration_since(self.go_at).as_millis())
    }
}
