//! Character generator port
//!
//! The generative-AI service that turns prompts into a portrait and a list
//! of personality traits. Adapters live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`CharacterGenerator`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("The request timed out")]
    Timeout,

    #[error("Generation task failed: {0}")]
    TaskFailed(String),

    #[error("Unknown error")]
    Unknown,
}

impl GeneratorError {
    /// Human-readable detail carried by the error, if any.
    ///
    /// [`GeneratorError::Unknown`] carries nothing, so callers fall back to
    /// a generic message.
    pub fn detail(&self) -> Option<String> {
        match self {
            GeneratorError::Unknown => None,
            other => Some(other.to_string()),
        }
    }
}

/// Generation service used by the workflow.
#[async_trait]
pub trait CharacterGenerator: Send + Sync {
    /// Generate a portrait, returned as a base64-encoded JPEG.
    async fn generate_character_image(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Generate an ordered list of short personality traits.
    async fn generate_character_traits(
        &self,
        prompt: &str,
    ) -> Result<Vec<String>, GeneratorError>;
}
