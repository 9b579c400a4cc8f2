//! Read-only projection of the clicker screen.

use crate::{
    catalog::GENERATORS,
    economy,
    record::SaveRecord,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorRow {
    pub name:       &'static str,
    pub owned:      u64,
    pub cost:       u64,
    pub affordable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickerView {
    /// Score truncated for display.
    pub score:          u64,
    pub income_per_sec: f64,
    pub multiplier:     u64,
    pub generators:     Vec<GeneratorRow>,
    pub ascend_cost:    u64,
    /// The ascend control is only offered while this is true.
    pub can_ascend:     bool,
    pub runner_best:    u64,
    pub snake_best:     u64,
}

impl ClickerView {
    pub fn from_record(record: &SaveRecord) -> Self {
        let state = &record.clicker;
        let generators = GENERATORS
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let owned = state.buildings[i];
                let cost = economy::cost_at(i, owned).unwrap_or(u64::MAX);
                GeneratorRow {
                    name: def.name,
                    owned,
                    cost,
                    affordable: state.score >= cost as f64,
                }
            })
            .collect();

        Self {
            score:          state.score.trunc() as u64,
            income_per_sec: economy::current_income_rate(state),
            multiplier:     state.multiplier,
            generators,
            ascend_cost:    economy::ascend_threshold(state),
            can_ascend:     economy::can_ascend(state),
            runner_best:    record.high_scores.runner,
            snake_best:     record.high_scores.snake,
        }
    }
}

impl GeneratorRow {
    /// Button label, e.g. `Cursor Bot (Lvl 3) - $23`.
    pub fn label(&self) -> String {
        format!("{} (Lvl {}) - ${}", self.name, self.owned, format_thousands(self.cost))
    }
}

/// `1234567` -> `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
