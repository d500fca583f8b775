//! Generation timing configuration from TOML (`[generation]` section)

use super::ConfigIssue;
use forge_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw progress-indicator configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// tick_interval_ms = 410   # delay between progress ticks
/// settle_delay_ms = 500    # how long 100% stays visible
/// max_increment = 5        # largest random step per tick
/// stall_at = 95            # ticker never goes past this value
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub tick_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub max_increment: u8,
    pub stall_at: u8,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            tick_interval_ms: params.tick_interval.as_millis() as u64,
            settle_delay_ms: params.settle_delay.as_millis() as u64,
            max_increment: params.max_increment,
            stall_at: params.stall_at,
        }
    }
}

impl FileGenerationConfig {
    /// Convert to [`GenerationParams`], replacing invalid values with defaults.
    ///
    /// Returns the params together with a warning for every replaced value.
    pub fn to_params(&self) -> (GenerationParams, Vec<ConfigIssue>) {
        let defaults = GenerationParams::default();
        let mut params = defaults.clone();
        let mut issues = Vec::new();

        if self.tick_interval_ms == 0 {
            issues.push(ConfigIssue::warning(
                "generation.tick_interval_ms",
                format!(
                    "generation.tick_interval_ms: must be greater than zero, using {}",
                    defaults.tick_interval.as_millis()
                ),
            ));
        } else {
            params.tick_interval = Duration::from_millis(self.tick_interval_ms);
        }

        params.settle_delay = Duration::from_millis(self.settle_delay_ms);

        if self.max_increment == 0 {
            issues.push(ConfigIssue::warning(
                "generation.max_increment",
                format!(
                    "generation.max_increment: must be at least 1, using {}",
                    defaults.max_increment
                ),
            ));
        } else {
            params.max_increment = self.max_increment;
        }

        if self.stall_at >= 100 {
            issues.push(ConfigIssue::warning(
                "generation.stall_at",
                format!(
                    "generation.stall_at: must be below 100, using {}",
                    defaults.stall_at
                ),
            ));
        } else {
            params.stall_at = self.stall_at;
        }

        (params, issues)
    }
}
