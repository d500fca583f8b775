//! Application layer for character-forge
//!
//! This crate contains the generation workflow, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    character_generator::{CharacterGenerator, GeneratorError},
    generation_logger::{GenerationLogEvent, GenerationLogger, NoGenerationLogger},
    progress::{GenerationProgressNotifier, NoProgress},
};
pub use use_cases::generate_character::{GenerateCharacterUseCase, GenerationAttempt};
