//! Neon arcade hub core.
//!
//! Leaf to root:
//! - `store`:     atomic load/save of the single save record
//! - `economy`:   generator ledger, cost curve, accrual, prestige
//! - `scheduler`: wall-clock tick trigger with an injectable `clock`
//! - `session`:   maps UI actions to economy transitions and owns autosave
//! - `ledger`:    cross-minigame high scores

pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod economy;
pub mod error;
pub mod event;
pub mod ledger;
pub mod record;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{Action, Outcome};
pub use config::{AutosavePolicy, HubConfig};
pub use error::{EconomyError, HubError, HubResult, LoadError, StoreError};
pub use record::{ClickerState, HighScores, Minigame, SaveRecord};
pub use session::Session;
pub use store::{JsonFileStore, MemoryStore, SaveStore};
