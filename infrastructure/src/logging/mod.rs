//! Structured generation logging.
//!
//! Provides [`JsonlGenerationLogger`], an append-only JSONL writer that
//! implements the [`GenerationLogger`](forge_application::GenerationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGenerationLogger;
