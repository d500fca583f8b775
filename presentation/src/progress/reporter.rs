//! Progress reporting for character generation

use colored::Colorize;
use forge_application::GenerationProgressNotifier;
use forge_domain::{CharacterDraft, GenerationResult, Progress};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with an indicatif bar (0-100) and the progress message
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        let slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = slot.as_ref() {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgressNotifier for ProgressReporter {
    fn on_generation_start(&self, draft: &CharacterDraft) {
        let pb = ProgressBar::new(Progress::COMPLETE.value() as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(format!("Forging {}", draft.name));
        pb.set_message(Progress::ZERO.message());
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_progress(&self, progress: Progress) {
        self.with_bar(|pb| {
            pb.set_position(progress.value() as u64);
            pb.set_message(progress.message());
        });
    }

    fn on_generation_complete(&self, result: &GenerationResult) {
        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = slot.take() {
            pb.set_position(Progress::COMPLETE.value() as u64);
            if result.is_success() {
                pb.finish_with_message(Progress::COMPLETE.message().green().to_string());
            } else {
                pb.abandon_with_message("Generation failed".red().to_string());
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints a line to stderr whenever the progress message changes.
pub struct SimpleProgress {
    last_message: Mutex<Option<&'static str>>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            last_message: Mutex::new(None),
        }
    }

    /// Record `message`; returns true when it differs from the previous one.
    fn message_changed(&self, message: &'static str) -> bool {
        let mut last = self.last_message.lock().unwrap_or_else(|e| e.into_inner());
        if *last == Some(message) {
            return false;
        }
        *last = Some(message);
        true
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgressNotifier for SimpleProgress {
    fn on_generation_start(&self, draft: &CharacterDraft) {
        *self.last_message.lock().unwrap_or_else(|e| e.into_inner()) = None;
        eprintln!(
            "{} {} the {} {}",
            "->".cyan(),
            draft.name.bold(),
            draft.race,
            draft.class
        );
    }

    fn on_progress(&self, progress: Progress) {
        if progress.is_complete() {
            return;
        }
        let message = progress.message();
        if self.message_changed(message) {
            eprintln!("  {:>3}% {}", progress.value(), message);
        }
    }

    fn on_generation_complete(&self, result: &GenerationResult) {
        if result.is_success() {
            eprintln!("  {} {}", "v".green(), Progress::COMPLETE.message());
        } else {
            eprintln!("  {} generation failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_progress_reports_each_message_once() {
        let progress = SimpleProgress::new();
        assert!(progress.message_changed(Progress::new(0).message()));
        assert!(!progress.message_changed(Progress::new(10).message()));
        assert!(progress.message_changed(Progress::new(30).message()));
        assert!(!progress.message_changed(Progress::new(40).message()));
    }

    #[test]
    fn test_reporter_tolerates_updates_without_bar() {
        let reporter = ProgressReporter::new();
        reporter.on_progress(Progress::new(40));
        reporter.on_generation_complete(&GenerationResult::failure(None));
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_reporter_bar_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_generation_start(&CharacterDraft::default());
        reporter.on_progress(Progress::new(35));
        reporter.with_bar(|pb| assert_eq!(pb.position(), 35));
        reporter.on_generation_complete(&GenerationResult::failure(Some("boom")));
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
