//! Economy model: generator ledger, cost curve, accrual, and prestige.
//!
//! Every function here is a pure transition over `ClickerState`.
//! A failed transition leaves the state exactly as it was.
//!
//! RULES:
//!   - cost(i, n)     = round(base_cost_i × 1.15^n)
//!   - income/sec     = multiplier × Σ(buildings[i] × base_rate_i)
//!   - ascend needs   score ≥ 100000 × multiplier (pre-ascend multiplier)

use crate::{
    catalog::GENERATORS,
    error::EconomyError,
    event::ClickerEvent,
    record::ClickerState,
    types::{Owned, Score, ASCEND_BASE_COST, COST_GROWTH, GENERATOR_COUNT},
};

/// Price of the next unit of generator `index` when `owned` are already held.
pub fn cost_at(index: usize, owned: Owned) -> Result<u64, EconomyError> {
    let def = GENERATORS
        .get(index)
        .ok_or(EconomyError::InvalidIndex { index })?;
    let exponent = i32::try_from(owned).unwrap_or(i32::MAX);
    Ok((def.base_cost * COST_GROWTH.powi(exponent)).round() as u64)
}

/// Price of the next unit of generator `index` for this state.
pub fn current_cost(state: &ClickerState, index: usize) -> Result<u64, EconomyError> {
    let owned = state
        .buildings
        .get(index)
        .copied()
        .ok_or(EconomyError::InvalidIndex { index })?;
    cost_at(index, owned)
}

/// Aggregate passive income per second, multiplier included.
pub fn current_income_rate(state: &ClickerState) -> Score {
    let base: f64 = state
        .buildings
        .iter()
        .zip(GENERATORS.iter())
        .map(|(&owned, def)| owned as f64 * def.base_rate)
        .sum();
    base * state.multiplier as f64
}

/// Score needed before the next ascend.
pub fn ascend_threshold(state: &ClickerState) -> u64 {
    ASCEND_BASE_COST.saturating_mul(state.multiplier)
}

pub fn can_ascend(state: &ClickerState) -> bool {
    state.score >= ascend_threshold(state) as f64
}

/// Linear accrual over `elapsed_seconds`. Negative or non-finite spans credit nothing.
pub fn apply_accrual(state: &mut ClickerState, elapsed_seconds: f64) -> ClickerEvent {
    let seconds = if elapsed_seconds.is_finite() {
        elapsed_seconds.max(0.0)
    } else {
        0.0
    };
    let gained = current_income_rate(state) * seconds;
    state.score += gained;
    ClickerEvent::Accrued {
        seconds,
        gained,
        score: state.score,
    }
}

/// Buy one unit of generator `index`. Cost is taken before the count changes.
pub fn purchase(state: &mut ClickerState, index: usize) -> Result<ClickerEvent, EconomyError> {
    if index >= GENERATOR_COUNT {
        return Err(EconomyError::InvalidIndex { index });
    }
    let cost = current_cost(state, index)?;
    let owned = state.buildings[index]
        .checked_add(1)
        .ok_or(EconomyError::GeneratorMaxed { index })?;
    if state.score < cost as f64 {
        return Err(EconomyError::InsufficientFunds {
            cost,
            score: state.score,
        });
    }

    state.score -= cost as f64;
    state.buildings[index] = owned;

    Ok(ClickerEvent::Purchased {
        index,
        cost,
        owned,
        score: state.score,
    })
}

/// Manual click. Always succeeds.
pub fn mine(state: &mut ClickerState) -> ClickerEvent {
    let gained = state.multiplier as f64;
    state.score += gained;
    ClickerEvent::Mined {
        gained,
        score: state.score,
    }
}

/// Prestige reset: wipes score and generators, raises the multiplier by one.
pub fn ascend(state: &mut ClickerState) -> Result<ClickerEvent, EconomyError> {
    let threshold = ascend_threshold(state);
    if state.score < threshold as f64 {
        return Err(EconomyError::BelowThreshold {
            threshold,
            multiplier: state.multiplier,
            score: state.score,
        });
    }
    let multiplier = state.multiplier.checked_add(1).ok_or(EconomyError::MultiplierMaxed {
        multiplier: state.multiplier,
    })?;

    let spent = state.score;
    state.score = 0.0;
    state.buildings = [0; GENERATOR_COUNT];
    state.multiplier = multiplier;

    Ok(ClickerEvent::Ascended {
        spent,
        multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rounds_rather_than_truncates() {
        // 15 × 1.15² = 19.8375
        assert_eq!(cost_at(0, 2).unwrap(), 20);
    }

    #[test]
    fn huge_counts_saturate_instead_of_panicking() {
        assert_eq!(cost_at(3, u64::MAX).unwrap(), u64::MAX);
    }
}
