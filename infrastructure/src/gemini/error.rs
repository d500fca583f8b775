//! Error types for the Gemini adapter

use forge_application::GeneratorError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<GeminiError> for GeneratorError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey(_) => GeneratorError::ConnectionError(err.to_string()),
            GeminiError::Http(e) if e.is_timeout() => GeneratorError::Timeout,
            GeminiError::Http(e) if e.is_connect() => {
                GeneratorError::ConnectionError(e.to_string())
            }
            GeminiError::Http(e) => GeneratorError::RequestFailed(e.to_string()),
            GeminiError::Api { message, .. } => GeneratorError::RequestFailed(message),
            GeminiError::Json(e) => GeneratorError::InvalidResponse(e.to_string()),
            GeminiError::UnexpectedResponse(message) => GeneratorError::InvalidResponse(message),
        }
    }
}
