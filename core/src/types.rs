//! Shared primitive types and constants used across the hub core.

/// Accumulated currency. Fractional-safe; displayed truncated.
pub type Score = f64;

/// Prestige rank. Starts at 1 and only ever grows.
pub type Multiplier = u64;

/// Count of owned units of one generator tier.
pub type Owned = u64;

/// Number of generator tiers in the catalog.
pub const GENERATOR_COUNT: usize = 4;

/// Growth ratio applied to a generator's cost for every unit owned.
pub const COST_GROWTH: f64 = 1.15;

/// Score required per multiplier rank before ascending.
pub const ASCEND_BASE_COST: u64 = 100_000;

/// Nominal seconds credited by one scheduler tick.
pub const TICK_SECONDS: f64 = 1.0;

/// Default location of the save file, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "game_save.json";
