//! Cosmetic progress ticker

use super::store::StateStore;
use crate::config::GenerationParams;
use forge_domain::{GenerationEvent, RandomSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// A running progress-advance task bound to one attempt.
///
/// Ticks every `tick_interval` with a random increment in
/// `[1, max_increment]`, stalling at `stall_at`. Cancelling is idempotent,
/// and dropping the ticker cancels it.
pub(crate) struct ProgressTicker {
    attempt: u64,
    token: CancellationToken,
}

impl ProgressTicker {
    pub(crate) fn spawn(
        store: Arc<StateStore>,
        rng: Arc<dyn RandomSource>,
        attempt: u64,
        params: &GenerationParams,
    ) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let period = params.tick_interval.max(Duration::from_millis(1));
        let max_increment = u32::from(params.max_increment.max(1));
        let ceiling = params.stall_at;

        tokio::spawn(async move {
            // first tick one period after start, like a repeating timer
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        let increment = rng.random_range(1, max_increment) as u8;
                        let state = store.dispatch(GenerationEvent::ProgressAdvanced {
                            attempt,
                            increment,
                            ceiling,
                        });
                        trace!("Progress tick for attempt {}: {}", attempt, state.progress);
                    }
                }
            }
            trace!("Progress ticker for attempt {} stopped", attempt);
        });

        Self { attempt, token }
    }

    pub(crate) fn attempt(&self) -> u64 {
        self.attempt
    }

    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
