use crate::types::DEFAULT_SAVE_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which transitions force an immediate save.
///
/// Defaults keep high-frequency actions (mine, purchase) in memory until the
/// next tick; state-destroying or record-setting actions save right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosavePolicy {
    pub on_mine:       bool,
    pub on_purchase:   bool,
    pub on_tick:       bool,
    pub on_ascend:     bool,
    pub on_high_score: bool,
}

impl Default for AutosavePolicy {
    fn default() -> Self {
        Self {
            on_mine:       false,
            on_purchase:   false,
            on_tick:       true,
            on_ascend:     true,
            on_high_score: true,
        }
    }
}

impl AutosavePolicy {
    /// Save after every mutation.
    pub fn durable() -> Self {
        Self {
            on_mine:       true,
            on_purchase:   true,
            on_tick:       true,
            on_ascend:     true,
            on_high_score: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub save_path: PathBuf,
    pub autosave:  AutosavePolicy,
    /// Scheduler polls per second in the runner's idle loop. Must exceed 1.
    pub poll_hz:   u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            autosave:  AutosavePolicy::default(),
            poll_hz:   60,
        }
    }
}

impl HubConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: HubConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        if config.poll_hz <= 1 {
            anyhow::bail!("poll_hz must be greater than 1, got {}", config.poll_hz);
        }
        Ok(config)
    }

    /// Seconds between scheduler polls.
    pub fn poll_interval(&self) -> f64 {
        1.0 / self.poll_hz.max(2) as f64
    }
}
