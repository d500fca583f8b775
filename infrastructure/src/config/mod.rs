//! Configuration file loading for character-forge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./forge.toml` or `./.forge.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/character-forge/config.toml`
//! 4. Fallback: `~/.config/character-forge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGeminiConfig, FileGenerationConfig, FileLoggingConfig,
    FileOutputConfig, Severity,
};
pub use loader::ConfigLoader;
