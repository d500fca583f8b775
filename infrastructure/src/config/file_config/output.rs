//! `[output]` section

use forge_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How results are printed when no `--output` flag is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// Colored terminal output; `--no-color` wins over `color = true`.
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Whether to color console output, given the `--no-color` flag.
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}
