//! The save record: the complete persisted state of the hub.
//!
//! RULE: This is the only shape that reaches disk.
//! The `clicker` block belongs to the Session Controller;
//! the `high_scores` block is shared by every minigame through the ledger.

use crate::{
    error::LoadError,
    types::{Multiplier, Owned, Score, GENERATOR_COUNT},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub clicker:     ClickerState,
    #[serde(default)]
    pub high_scores: HighScores,
}

/// Economy sub-record for Neon Clicker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickerState {
    pub score:      Score,
    pub multiplier: Multiplier,
    pub buildings:  [Owned; GENERATOR_COUNT],
}

impl Default for ClickerState {
    fn default() -> Self {
        Self {
            score:      0.0,
            multiplier: 1,
            buildings:  [0; GENERATOR_COUNT],
        }
    }
}

/// Best score per minigame. Entries missing from an older save default to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub runner: u64,
    #[serde(default)]
    pub snake:  u64,
}

impl HighScores {
    pub fn get(&self, game: Minigame) -> u64 {
        match game {
            Minigame::Runner => self.runner,
            Minigame::Snake  => self.snake,
        }
    }

    pub(crate) fn slot_mut(&mut self, game: Minigame) -> &mut u64 {
        match game {
            Minigame::Runner => &mut self.runner,
            Minigame::Snake  => &mut self.snake,
        }
    }
}

/// Minigames that report into the shared high-score table.
/// Append only: the names are persisted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Minigame {
    Runner,
    Snake,
}

impl Minigame {
    pub const ALL: [Minigame; 2] = [Minigame::Runner, Minigame::Snake];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Runner => "runner",
            Self::Snake  => "snake",
        }
    }
}

impl fmt::Display for Minigame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Minigame {
    type Err = crate::error::HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == wanted)
            .ok_or_else(|| crate::error::HubError::UnknownMinigame { name: s.to_string() })
    }
}

impl SaveRecord {
    /// Parse and validate a serialized record.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let record: SaveRecord = serde_json::from_str(text)?;
        record.validate()?;
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Semantic checks the type system cannot express.
    pub fn validate(&self) -> Result<(), LoadError> {
        let c = &self.clicker;
        if c.multiplier < 1 {
            return Err(LoadError::Invalid(format!(
                "multiplier must be >= 1, got {}",
                c.multiplier
            )));
        }
        if !c.score.is_finite() || c.score < 0.0 {
            return Err(LoadError::Invalid(format!(
                "score must be finite and non-negative, got {}",
                c.score
            )));
        }
        Ok(())
    }
}
