//! Shared generation state behind a watch channel

use crate::ports::progress::GenerationProgressNotifier;
use forge_domain::{GenerationEvent, GenerationState};
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the current [`GenerationState`] and publishes every change.
///
/// All mutations go through [`StateStore::dispatch`] (or the lower-level
/// [`StateStore::modify`]) so the reducer stays the only place that
/// decides what an event does.
pub(crate) struct StateStore {
    tx: watch::Sender<GenerationState>,
    progress: Arc<dyn GenerationProgressNotifier>,
}

impl StateStore {
    pub(crate) fn new(
        initial: GenerationState,
        progress: Arc<dyn GenerationProgressNotifier>,
    ) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx, progress }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.tx.subscribe()
    }

    pub(crate) fn snapshot(&self) -> GenerationState {
        self.tx.borrow().clone()
    }

    pub(crate) fn progress_notifier(&self) -> &dyn GenerationProgressNotifier {
        self.progress.as_ref()
    }

    /// Run `f` against the state while holding the channel lock.
    pub(crate) fn modify<R>(&self, f: impl FnOnce(&mut GenerationState) -> R) -> R {
        let mut out = None;
        self.tx.send_modify(|state| out = Some(f(state)));
        // send_modify always runs the closure exactly once
        out.unwrap_or_else(|| unreachable!("watch::Sender::send_modify skipped its closure"))
    }

    /// Apply one event and return the resulting snapshot.
    pub(crate) fn dispatch(&self, event: GenerationEvent) -> GenerationState {
        let (previous, next) = self.modify(|state| {
            let previous = state.progress;
            *state = std::mem::take(state).apply(event);
            (previous, state.clone())
        });
        if next.progress != previous {
            self.progress.on_progress(next.progress);
        }
        next
    }
}
