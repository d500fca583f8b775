//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod character_generator;
pub mod generation_logger;
pub mod progress;
