//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Character name cannot be empty")]
    EmptyName,

    #[error("Unknown race: {0}")]
    UnknownRace(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

impl DomainError {
    /// Whether the draft can still be generated despite this error.
    ///
    /// Race and class are free text; unknown values only warrant a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, DomainError::UnknownRace(_) | DomainError::UnknownClass(_))
    }
}
