//! Infrastructure layer for character-forge
//!
//! This crate contains adapters that implement the ports defined
//! in the application and domain layers: the Gemini generation service,
//! `rand`-backed random sources, the JSONL generation log, and
//! configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig, FileGenerationConfig,
    FileLoggingConfig, FileOutputConfig, Severity,
};
pub use gemini::{GeminiCharacterGenerator, GeminiError};
pub use logging::JsonlGenerationLogger;
pub use random::{SeededRandom, ThreadRandom};
