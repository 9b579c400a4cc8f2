use thiserror::Error;

use crate::types::{Multiplier, Score};

/// A rejected economy transition. The record is untouched when one of these
/// is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomyError {
    #[error("Insufficient funds: cost {cost}, score {score}")]
    InsufficientFunds { cost: u64, score: Score },

    #[error("Invalid generator index {index}")]
    InvalidIndex { index: usize },

    #[error("Below ascend threshold: need {threshold} at x{multiplier}, have {score}")]
    BelowThreshold {
        threshold:  u64,
        multiplier: Multiplier,
        score:      Score,
    },

    #[error("Generator {index} is at its maximum count")]
    GeneratorMaxed { index: usize },

    #[error("Multiplier x{multiplier} cannot be raised further")]
    MultiplierMaxed { multiplier: Multiplier },
}

/// Why a save file could not be turned into a record.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No save data found")]
    Missing,

    #[error("Cannot read save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed save file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Save file failed validation: {0}")]
    Invalid(String),
}

/// Why a record could not be written.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot write save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error(transparent)]
    Economy(#[from] EconomyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Unknown minigame '{name}'")]
    UnknownMinigame { name: String },
}

pub type HubResult<T> = Result<T, HubError>;
