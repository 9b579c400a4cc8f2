//! Shared high-score ledger.
//!
//! Minigames report once per terminal (game-over) transition.
//! A stored score never decreases.

use crate::record::{HighScores, Minigame};

pub struct HighScoreLedger<'a> {
    scores: &'a mut HighScores,
}

impl<'a> HighScoreLedger<'a> {
    pub fn new(scores: &'a mut HighScores) -> Self {
        Self { scores }
    }

    pub fn best(&self, game: Minigame) -> u64 {
        self.scores.get(game)
    }

    /// Store `candidate` if it beats the current best. Returns whether it did.
    pub fn record_if_better(&mut self, game: Minigame, candidate: u64) -> bool {
        let slot = self.scores.slot_mut(game);
        if candidate > *slot {
            log::info!("ledger: new {game} high score {candidate} (was {slot})");
            *slot = candidate;
            true
        } else {
            false
        }
    }
}
