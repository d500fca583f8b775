//! Presentation layer for character-forge
//!
//! This crate contains CLI definitions, output formatters,
//! portrait export, and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::image::{ImageExportError, save_image};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
