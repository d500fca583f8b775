//! Domain layer for character-forge
//!
//! This crate contains the core character logic: drafts, fixture
//! vocabularies, the randomizer, 3d6 ability scores, prompt templates and
//! the generation state machine. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Draft**: user-editable parameters read when a generation starts
//! - **Attribute Block**: six ability scores, each the sum of three d6
//! - **Generation State**: snapshot of the workflow, changed only by events

pub mod character;
pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod random;

// Re-export commonly used types
pub use character::{
    attributes::{Ability, AttributeBlock, roll_3d6},
    draft::CharacterDraft,
    fixtures::{CLASSES, RACES},
    randomizer::Randomizer,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use generation::{
    progress::Progress,
    result::{GenerationResult, IMAGE_DATA_URL_PREFIX},
    state::{GenerationEvent, GenerationPhase, GenerationState},
};
pub use prompt::CharacterPromptTemplate;
pub use random::RandomSource;
#[cfg(any(test, feature = "test-util"))]
pub use random::SequenceRandom;
