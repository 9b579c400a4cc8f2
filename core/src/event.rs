//! Events describing every economy transition that actually happened.
//!
//! Rejected transitions produce no event; they surface as `EconomyError`.

use crate::types::{Multiplier, Score};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClickerEvent {
    Mined {
        gained: Score,
        score:  Score,
    },
    Purchased {
        index: usize,
        cost:  u64,
        owned: u64,
        score: Score,
    },
    Ascended {
        spent:      Score,
        multiplier: Multiplier,
    },
    Accrued {
        seconds: f64,
        gained:  Score,
        score:   Score,
    },
}

impl ClickerEvent {
    /// Stable name for logs and IPC output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mined { .. }     => "mined",
            Self::Purchased { .. } => "purchased",
            Self::Ascended { .. }  => "ascended",
            Self::Accrued { .. }   => "accrued",
        }
    }
}
