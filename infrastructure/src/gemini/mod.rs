//! Google Gemini adapter
//!
//! Portraits come from the Imagen `:predict` endpoint, personality traits
//! from a `:generateContent` call constrained by a JSON response schema.

pub mod error;
pub mod generator;
mod types;

pub use error::GeminiError;
pub use generator::GeminiCharacterGenerator;
