//! Generation parameters: workflow timing control.
//!
//! These control how the progress indicator behaves; they do not affect
//! the requests sent to the generation service.

use forge_domain::Progress;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and shape of the fake progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Delay between two progress ticks.
    pub tick_interval: Duration,
    /// Pause at 100% before the loading flag clears.
    pub settle_delay: Duration,
    /// Largest random increment per tick (smallest is 1).
    pub max_increment: u8,
    /// Value the ticker stalls at until the real work completes.
    pub stall_at: u8,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(410),
            settle_delay: Duration::from_millis(500),
            max_increment: 5,
            stall_at: Progress::DEFAULT_CEILING,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_max_increment(mut self, max: u8) -> Self {
        self.max_increment = max;
        self
    }

    pub fn with_stall_at(mut self, stall_at: u8) -> Self {
        self.stall_at = stall_at;
        self
    }
}
