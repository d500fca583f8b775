//! Generate Character use case
//!
//! Orchestrates one generation attempt end to end:
//!
//! 1. Entry guard (named draft, nothing loading) and state reset
//! 2. Start the cosmetic progress ticker
//! 3. Request the portrait and, when asked for, the traits concurrently
//! 4. Roll a fresh attribute block on success, capture a message on failure
//! 5. Stop the ticker, force progress to 100, and clear the loading flag
//!    after the settle delay
//!
//! Dropping the `generate` future early (a timeout, a lost `select!`
//! branch) abandons the attempt: the ticker stops and the loading flag is
//! cleared, so the next call is not skipped.
//!
//! State lives in a `watch` channel; front-ends render from
//! [`GenerateCharacterUseCase::subscribe`] or the progress notifier.

mod store;
mod ticker;

use crate::config::GenerationParams;
use crate::ports::character_generator::{CharacterGenerator, GeneratorError};
use crate::ports::generation_logger::{GenerationLogEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{GenerationProgressNotifier, NoProgress};
use forge_domain::{
    AttributeBlock, CharacterDraft, CharacterPromptTemplate, GenerationEvent, GenerationResult,
    GenerationState, RandomSource, Randomizer,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use store::StateStore;
use ticker::ProgressTicker;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// What happened to a call to [`GenerateCharacterUseCase::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationAttempt {
    /// The entry guard rejected the call; nothing changed.
    Skipped,
    /// The attempt ran to completion (successfully or not).
    Completed(GenerationResult),
    /// A reset or newer attempt replaced this one before it completed.
    Superseded,
}

impl GenerationAttempt {
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationAttempt::Completed(result) => Some(result),
            _ => None,
        }
    }
}

/// Use case for generating a character portrait, traits and attributes
pub struct GenerateCharacterUseCase {
    generator: Arc<dyn CharacterGenerator>,
    rng: Arc<dyn RandomSource>,
    progress_rng: Arc<dyn RandomSource>,
    store: Arc<StateStore>,
    ticker: Mutex<Option<ProgressTicker>>,
    params: GenerationParams,
    logger: Arc<dyn GenerationLogger>,
}

impl GenerateCharacterUseCase {
    /// `rng` drives the draft randomizer and the attribute dice.
    ///
    /// Progress increments draw from the same source until
    /// [`with_progress_rng`](Self::with_progress_rng) gives them their own.
    /// While shared, the number of ticks (and so the request latency) shifts
    /// which values the dice see.
    pub fn new(generator: Arc<dyn CharacterGenerator>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            generator,
            progress_rng: Arc::clone(&rng),
            rng,
            store: Arc::new(StateStore::new(
                GenerationState::default(),
                Arc::new(NoProgress),
            )),
            ticker: Mutex::new(None),
            params: GenerationParams::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Start from a specific draft instead of the default one.
    pub fn with_draft(self, draft: CharacterDraft) -> Self {
        self.store.dispatch(GenerationEvent::DraftReplaced(draft));
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Draw progress increments from their own source.
    pub fn with_progress_rng(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.progress_rng = rng;
        self
    }

    /// Create with a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn GenerationProgressNotifier>) -> Self {
        self.store = Arc::new(StateStore::new(self.store.snapshot(), progress));
        self
    }

    /// Create with a structured generation logger.
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== State access ====================

    /// Receive every state snapshot as it changes.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.store.subscribe()
    }

    pub fn snapshot(&self) -> GenerationState {
        self.store.snapshot()
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    // ==================== Draft editing ====================

    pub fn set_draft(&self, draft: CharacterDraft) {
        self.store.dispatch(GenerationEvent::DraftReplaced(draft));
    }

    /// Edit the current draft in place.
    pub fn update_draft(&self, edit: impl FnOnce(&mut CharacterDraft)) {
        let mut draft = self.store.snapshot().draft;
        edit(&mut draft);
        self.set_draft(draft);
    }

    /// Replace every draft field with a random pick.
    pub fn randomize_draft(&self) -> CharacterDraft {
        let draft = Randomizer::randomize(self.rng.as_ref());
        debug!(
            "Randomized draft: {} the {} {}",
            draft.name, draft.race, draft.class
        );
        self.set_draft(draft.clone());
        draft
    }

    // ==================== Workflow ====================

    /// Run one generation attempt with the current draft.
    ///
    /// Returns [`GenerationAttempt::Skipped`] without touching state when the
    /// draft has no name or another attempt is loading. Otherwise resolves
    /// after the settle delay, once the loading flag is cleared. Dropping
    /// the future before then abandons the attempt.
    pub async fn generate(&self) -> GenerationAttempt {
        let started = self.store.modify(|state| {
            if !state.can_start() {
                return None;
            }
            *state = std::mem::take(state).apply(GenerationEvent::Started);
            Some(state.clone())
        });
        let Some(state) = started else {
            debug!("Generation skipped: empty name or already loading");
            return GenerationAttempt::Skipped;
        };

        let attempt = state.attempt;
        let draft = state.draft;
        info!(
            "Starting generation #{} for {} the {} {}",
            attempt, draft.name, draft.race, draft.class
        );

        let progress = self.store.progress_notifier();
        progress.on_generation_start(&draft);
        progress.on_progress(state.progress);
        self.restart_ticker(attempt);
        let _abandon_on_drop = AttemptGuard {
            use_case: self,
            attempt,
        };

        let image_prompt = CharacterPromptTemplate::image_prompt(&draft);
        let traits_prompt = draft
            .include_random_traits
            .then(|| CharacterPromptTemplate::traits_prompt(&draft));

        self.logger.log(GenerationLogEvent::new(
            "generation_started",
            json!({
                "attempt": attempt,
                "draft": draft,
                "image_prompt": image_prompt,
                "traits_prompt": traits_prompt,
            }),
        ));

        let traits_requested = traits_prompt.is_some();
        let outcome = self.request(image_prompt, traits_prompt).await;

        self.stop_ticker(attempt);

        let (event, record) = match outcome {
            Ok((image_base64, traits)) => {
                let attributes = AttributeBlock::roll(self.rng.as_ref());
                let record = GenerationLogEvent::new(
                    "generation_succeeded",
                    json!({
                        "attempt": attempt,
                        "image_bytes": image_base64.len(),
                        "attributes": attributes,
                        "traits": traits,
                    }),
                );
                let event = GenerationEvent::Succeeded {
                    attempt,
                    image_base64,
                    attributes,
                    traits: traits_requested.then_some(traits),
                };
                (event, record)
            }
            Err(e) => {
                let record = GenerationLogEvent::new(
                    "generation_failed",
                    json!({
                        "attempt": attempt,
                        "error": e.to_string(),
                    }),
                );
                let event = GenerationEvent::Failed {
                    attempt,
                    detail: e.detail(),
                };
                (event, record)
            }
        };

        let state = self.store.dispatch(event);
        if state.attempt != attempt {
            debug!("Generation #{} completed after being superseded", attempt);
            self.logger.log(GenerationLogEvent::new(
                "generation_superseded",
                json!({
                    "attempt": attempt,
                    "current_attempt": state.attempt,
                }),
            ));
            return GenerationAttempt::Superseded;
        }
        match state.result.error() {
            None => info!(
                "Generation #{} succeeded ({} traits)",
                attempt,
                state.result.traits().map_or(0, <[String]>::len)
            ),
            Some(message) => warn!("Generation #{} failed: {}", attempt, message),
        }
        self.logger.log(record);
        progress.on_generation_complete(&state.result);

        // Leave 100% visible briefly before the form comes back
        tokio::time::sleep(self.params.settle_delay).await;

        let state = self.store.dispatch(GenerationEvent::Settled { attempt });
        if state.attempt != attempt {
            return GenerationAttempt::Superseded;
        }
        progress.on_settled();

        GenerationAttempt::Completed(state.result)
    }

    /// Clear the result, error and progress, and stop any running ticker.
    ///
    /// Requests already sent to the generator are not aborted; their late
    /// results are ignored.
    pub fn reset(&self) {
        self.cancel_ticker();
        let state = self.store.dispatch(GenerationEvent::Reset);
        debug!("Generation state reset (attempt counter {})", state.attempt);
        self.logger.log(GenerationLogEvent::new(
            "generation_reset",
            json!({ "attempt": state.attempt }),
        ));
    }

    /// Stop the ticker and release the loading flag of an attempt whose
    /// caller went away before it settled.
    fn abandon(&self, attempt: u64) {
        self.stop_ticker(attempt);
        let current = self.store.snapshot();
        if current.attempt != attempt || !current.loading {
            return;
        }
        let state = self.store.dispatch(GenerationEvent::Abandoned { attempt });
        warn!("Generation #{} abandoned before it settled", attempt);
        self.logger.log(GenerationLogEvent::new(
            "generation_abandoned",
            json!({
                "attempt": attempt,
                "phase": state.phase,
            }),
        ));
        self.store.progress_notifier().on_settled();
    }

    /// Request the image and (optionally) the traits concurrently.
    ///
    /// Both requests run as their own tasks. The join fails as soon as either
    /// fails; the other request is left to finish in the background.
    async fn request(
        &self,
        image_prompt: String,
        traits_prompt: Option<String>,
    ) -> Result<(String, Vec<String>), GeneratorError> {
        let generator = Arc::clone(&self.generator);
        let image_task =
            tokio::spawn(async move { generator.generate_character_image(&image_prompt).await });

        let traits_task = traits_prompt.map(|prompt| {
            let generator = Arc::clone(&self.generator);
            tokio::spawn(async move { generator.generate_character_traits(&prompt).await })
        });

        let image = async move {
            image_task
                .await
                .unwrap_or_else(|e| Err(GeneratorError::TaskFailed(e.to_string())))
        };
        let traits = async move {
            match traits_task {
                Some(task) => task
                    .await
                    .unwrap_or_else(|e| Err(GeneratorError::TaskFailed(e.to_string()))),
                None => Ok(Vec::new()),
            }
        };

        futures::future::try_join(image, traits).await
    }

    fn restart_ticker(&self, attempt: u64) {
        let ticker = ProgressTicker::spawn(
            Arc::clone(&self.store),
            Arc::clone(&self.progress_rng),
            attempt,
            &self.params,
        );
        let mut slot = self.ticker.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(ticker) {
            debug!("Cancelling leftover ticker of attempt {}", previous.attempt());
            previous.cancel();
        }
    }

    /// Stop the ticker only if it still belongs to `attempt`.
    fn stop_ticker(&self, attempt: u64) {
        let mut slot = self.ticker.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|t| t.attempt() == attempt)
            && let Some(ticker) = slot.take()
        {
            ticker.cancel();
        }
    }

    fn cancel_ticker(&self) {
        let mut slot = self.ticker.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ticker) = slot.take() {
            ticker.cancel();
        }
    }
}

/// Abandons its attempt when the `generate` future is dropped.
///
/// A no-op once the attempt has settled or been superseded.
struct AttemptGuard<'a> {
    use_case: &'a GenerateCharacterUseCase,
    attempt: u64,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        self.use_case.abandon(self.attempt);
    }
}

#[cfg(test)]
mod tests;
