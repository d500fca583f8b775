//! Application-level configuration.
//!
//! - [`GenerationParams`]: timing of the cosmetic progress ticker and settle delay

pub mod generation_params;

pub use generation_params::GenerationParams;
