//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation.

use forge_domain::{CharacterDraft, GenerationResult, Progress};

/// Callback for progress updates during a generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait GenerationProgressNotifier: Send + Sync {
    /// Called once the entry guard accepted the draft
    fn on_generation_start(&self, draft: &CharacterDraft);

    /// Called whenever the progress value changes
    fn on_progress(&self, progress: Progress);

    /// Called when both requests finished or either failed
    fn on_generation_complete(&self, result: &GenerationResult);

    /// Called after the settle delay, when the form is editable again
    fn on_settled(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgressNotifier for NoProgress {
    fn on_generation_start(&self, _draft: &CharacterDraft) {}
    fn on_progress(&self, _progress: Progress) {}
    fn on_generation_complete(&self, _result: &GenerationResult) {}
}
