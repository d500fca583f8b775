//! Generation service configuration from TOML (`[gemini]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// image_model = "imagen-4.0-generate-001"
/// text_model = "gemini-2.5-flash"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub base_url: String,
    /// Imagen model used for portraits
    pub image_model: String,
    /// Text model used for personality traits
    pub text_model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

impl FileGeminiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("gemini.base_url", &self.base_url),
            ("gemini.image_model", &self.image_model),
            ("gemini.text_model", &self.text_model),
            ("gemini.api_key_env", &self.api_key_env),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    field,
                    format!("{}: value cannot be empty", field),
                ));
            }
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "gemini.timeout_secs",
                "gemini.timeout_secs: must be greater than zero",
            ));
        }
        issues
    }
}
