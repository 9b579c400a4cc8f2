//! Session controller: the single owner of the save record.
//!
//! RULES:
//!   - Only the session mutates the clicker block, via economy.rs transitions.
//!   - The tick scheduler is polled through the session; it never touches
//!     the record itself.
//!   - Minigames reach the high-score table only through `record_if_better`.
//!   - A failed save is logged and reported; the in-memory record stays
//!     authoritative and the next successful save persists it.
//!
//! Durability (see `AutosavePolicy`):
//!   mine / purchase  -> in memory only by default
//!   tick / ascend    -> immediate save
//!   high score       -> immediate save
//!   exit             -> final save, always

use crate::{
    catalog::GENERATORS,
    clock::Clock,
    command::{Action, Outcome},
    config::AutosavePolicy,
    economy,
    error::{EconomyError, HubResult, StoreError},
    event::ClickerEvent,
    ledger::HighScoreLedger,
    record::{Minigame, SaveRecord},
    scheduler::{TickScheduler, TickState},
    store::SaveStore,
    view::ClickerView,
};

pub struct Session<S: SaveStore, C: Clock> {
    record:    SaveRecord,
    store:     S,
    scheduler: TickScheduler<C>,
    autosave:  AutosavePolicy,
    /// Result of the most recent save attempt, if any.
    last_save: Option<Result<(), String>>,
}

impl<S: SaveStore, C: Clock> Session<S, C> {
    /// Load the record once from `store` and start the tick interval now.
    pub fn start(store: S, clock: C, autosave: AutosavePolicy) -> Self {
        let record = store.load();
        log::info!(
            "clicker: session started at score {:.0}, x{}, buildings {:?}",
            record.clicker.score.trunc(),
            record.clicker.multiplier,
            record.clicker.buildings
        );
        Self::with_record(record, store, clock, autosave)
    }

    /// Start from an explicit record without reading the store.
    pub fn with_record(record: SaveRecord, store: S, clock: C, autosave: AutosavePolicy) -> Self {
        Self {
            record,
            store,
            scheduler: TickScheduler::new(clock),
            autosave,
            last_save: None,
        }
    }

    // ── Actions ────────────────────────────────────────────────

    /// Dispatch one UI intent.
    pub fn handle(&mut self, action: Action) -> HubResult<Outcome> {
        let outcome = match action {
            Action::Mine => Outcome::Applied { event: self.on_mine() },
            Action::Purchase { index } => match self.on_purchase(index) {
                Ok(event) => Outcome::Applied { event },
                Err(e) => Outcome::rejected(e),
            },
            Action::Ascend => match self.on_ascend() {
                Ok(event) => Outcome::Applied { event },
                Err(e) => Outcome::rejected(e),
            },
            Action::Exit => {
                self.on_exit()?;
                Outcome::Exited
            }
        };
        Ok(outcome)
    }

    pub fn on_mine(&mut self) -> ClickerEvent {
        let event = economy::mine(&mut self.record.clicker);
        if self.autosave.on_mine {
            self.autosave_now();
        }
        event
    }

    pub fn on_purchase(&mut self, index: usize) -> Result<ClickerEvent, EconomyError> {
        match economy::purchase(&mut self.record.clicker, index) {
            Ok(event) => {
                if let ClickerEvent::Purchased { cost, owned, .. } = &event {
                    let name = GENERATORS[index].name;
                    log::info!("clicker: purchased {name} #{owned} for {cost}");
                }
                if self.autosave.on_purchase {
                    self.autosave_now();
                }
                Ok(event)
            }
            Err(e) => {
                log::debug!("clicker: purchase rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn on_ascend(&mut self) -> Result<ClickerEvent, EconomyError> {
        match economy::ascend(&mut self.record.clicker) {
            Ok(event) => {
                log::info!("clicker: ascended to x{}", self.record.clicker.multiplier);
                if self.autosave.on_ascend {
                    self.autosave_now();
                }
                Ok(event)
            }
            Err(e) => {
                log::debug!("clicker: ascend rejected: {e}");
                Err(e)
            }
        }
    }

    /// Final save. Unlike autosaves, the failure is returned to the caller.
    pub fn on_exit(&mut self) -> Result<(), StoreError> {
        log::info!("clicker: exiting, writing final save");
        self.save_now()
    }

    // ── Ticking ────────────────────────────────────────────────

    /// Poll the scheduler; when a tick fires, accrue one nominal second and save.
    pub fn poll(&mut self) -> Option<ClickerEvent> {
        let seconds = self.scheduler.poll()?;
        let event = economy::apply_accrual(&mut self.record.clicker, seconds);
        if let ClickerEvent::Accrued { gained, score, .. } = &event {
            log::debug!("scheduler: accrued {gained} -> {score}");
        }
        if self.autosave.on_tick {
            self.autosave_now();
        }
        Some(event)
    }

    pub fn tick_state(&self) -> TickState {
        self.scheduler.state()
    }

    // ── Shared high-score ledger ───────────────────────────────

    /// Called by a minigame once at its game-over transition.
    pub fn record_if_better(&mut self, game: Minigame, candidate: u64) -> bool {
        let improved = HighScoreLedger::new(&mut self.record.high_scores)
            .record_if_better(game, candidate);
        if improved && self.autosave.on_high_score {
            self.autosave_now();
        }
        improved
    }

    pub fn high_score(&self, game: Minigame) -> u64 {
        self.record.high_scores.get(game)
    }

    // ── Persistence ────────────────────────────────────────────

    /// Save the current record, reporting any failure.
    pub fn save_now(&mut self) -> Result<(), StoreError> {
        let result = self.store.save(&self.record);
        self.last_save = Some(result.as_ref().map(|_| ()).map_err(|e| e.to_string()));
        result
    }

    fn autosave_now(&mut self) {
        if let Err(e) = self.save_now() {
            log::warn!("store: autosave failed, continuing in memory: {e}");
        }
    }

    /// Outcome of the latest save attempt: `None` before the first save.
    pub fn last_save(&self) -> Option<&Result<(), String>> {
        self.last_save.as_ref()
    }

    // ── Read access ────────────────────────────────────────────

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn view(&self) -> ClickerView {
        ClickerView::from_record(&self.record)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        self.scheduler.clock()
    }
}
