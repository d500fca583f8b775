//! Generation result value object

use crate::character::attributes::AttributeBlock;
use serde::{Deserialize, Serialize};

/// Media-type marker prepended to the base64 image payload.
pub const IMAGE_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Prefix of every user-visible failure message.
pub const FAILURE_PREFIX: &str = "Failed to generate character: ";

/// Detail used when the failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// Outcome of a generation attempt.
///
/// After an attempt completes exactly one of `{image + attributes}` or
/// `{error}` is populated; the constructors are the only way to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    image: Option<String>,
    attributes: Option<AttributeBlock>,
    traits: Option<Vec<String>>,
    error: Option<String>,
}

impl GenerationResult {
    /// Nothing generated yet (or cleared).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A successful generation.
    ///
    /// `image_base64` is the raw payload; it is stored as a data URL.
    /// Traits are kept only when present and non-empty.
    pub fn success(
        image_base64: &str,
        attributes: AttributeBlock,
        traits: Option<Vec<String>>,
    ) -> Self {
        Self {
            image: Some(format!("{}{}", IMAGE_DATA_URL_PREFIX, image_base64)),
            attributes: Some(attributes),
            traits: traits.filter(|t| !t.is_empty()),
            error: None,
        }
    }

    /// A failed generation, with `detail` taken from the underlying error.
    pub fn failure(detail: Option<&str>) -> Self {
        let detail = detail
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_ERROR_MESSAGE);
        Self {
            error: Some(format!("{}{}", FAILURE_PREFIX, detail)),
            ..Self::default()
        }
    }

    /// Data URL of the portrait.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The base64 payload without the data URL prefix.
    pub fn image_payload(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(|url| url.strip_prefix(IMAGE_DATA_URL_PREFIX).unwrap_or(url))
    }

    pub fn attributes(&self) -> Option<&AttributeBlock> {
        self.attributes.as_ref()
    }

    pub fn traits(&self) -> Option<&[String]> {
        self.traits.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.image.is_some()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.error.is_none()
    }
}
