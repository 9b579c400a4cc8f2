//! Static generator catalog. Not persisted; the save file only stores counts.

use crate::types::GENERATOR_COUNT;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorDef {
    pub name:      &'static str,
    pub base_cost: f64,
    /// Income per second per owned unit, before the multiplier.
    pub base_rate: f64,
}

/// Ordered cheapest to most expensive. Index is the persisted slot.
pub const GENERATORS: [GeneratorDef; GENERATOR_COUNT] = [
    GeneratorDef { name: "Cursor Bot",   base_cost: 15.0,     base_rate: 1.0   },
    GeneratorDef { name: "GPU Farm",     base_cost: 100.0,    base_rate: 5.0   },
    GeneratorDef { name: "AI Server",    base_cost: 1_000.0,  base_rate: 50.0  },
    GeneratorDef { name: "Quantum Core", base_cost: 10_000.0, base_rate: 200.0 },
];

pub fn generator(index: usize) -> Option<&'static GeneratorDef> {
    GENERATORS.get(index)
}
