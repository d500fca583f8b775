//! Character draft entity

use super::fixtures::{canonical_class, canonical_race};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// User-editable character parameters, read when a generation starts.
///
/// Race and class are enum-like strings: the fixture lists are offered as
/// choices, but any text is accepted and passed through to the prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub race: String,
    pub class: String,
    pub special_elements: String,
    pub include_random_traits: bool,
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self {
            name: "Valerius".to_string(),
            race: "Human".to_string(),
            class: "Paladin".to_string(),
            special_elements: "Glowing golden eyes, ornate silver armor".to_string(),
            include_random_traits: false,
        }
    }
}

impl CharacterDraft {
    /// Whether the name is non-empty after trimming.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    // ==================== Builder Methods ====================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_special_elements(mut self, special_elements: impl Into<String>) -> Self {
        self.special_elements = special_elements.into();
        self
    }

    pub fn with_random_traits(mut self, include: bool) -> Self {
        self.include_random_traits = include;
        self
    }

    /// Check the draft, returning every issue found.
    ///
    /// An empty name blocks generation; unknown races or classes are
    /// reported as warnings (see [`DomainError::is_warning`]).
    pub fn validate(&self) -> Vec<DomainError> {
        let mut issues = Vec::new();
        if !self.has_name() {
            issues.push(DomainError::EmptyName);
        }
        if canonical_race(&self.race).is_none() {
            issues.push(DomainError::UnknownRace(self.race.clone()));
        }
        if canonical_class(&self.class).is_none() {
            issues.push(DomainError::UnknownClass(self.class.clone()));
        }
        issues
    }
}
