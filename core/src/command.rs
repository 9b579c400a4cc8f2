use serde::{Deserialize, Serialize};

use crate::{error::EconomyError, event::ClickerEvent};

/// The four discrete UI intents the session accepts.
/// Each is one user action (a click), never a held signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Mine,
    Purchase { index: usize },
    Ascend,
    Exit,
}

/// What handling an action did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Applied { event: ClickerEvent },
    /// The action was a no-op; the record is unchanged.
    Rejected {
        reason: String,
        #[serde(skip)]
        error:  EconomyError,
    },
    Exited,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    pub fn rejected(error: EconomyError) -> Self {
        Outcome::Rejected { reason: error.to_string(), error }
    }
}
