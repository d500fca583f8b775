//! Port for structured generation logging.
//!
//! Defines the [`GenerationLogger`] trait for recording generation events
//! (start, success, failure, reset) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! attempt in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured generation event for logging.
pub struct GenerationLogEvent {
    /// Event type identifier (e.g., "generation_started", "generation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationLogEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events to a structured log.
///
/// `log` is synchronous and infallible; implementations swallow write errors.
pub trait GenerationLogger: Send + Sync {
    /// Record a generation event.
    fn log(&self, event: GenerationLogEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationLogEvent) {}
}
