//! Prompt domain
//!
//! Templates that turn a character draft into instructions for the
//! generation service.

mod template;

pub use template::CharacterPromptTemplate;
