//! CLI command definitions

use clap::Parser;
use forge_domain::{CharacterDraft, OutputFormat};
use std::path::PathBuf;

/// CLI arguments for character-forge
#[derive(Parser, Debug)]
#[command(name = "character-forge")]
#[command(author, version, about = "Fantasy character generator - portrait, attributes and traits")]
#[command(long_about = r#"
Character Forge turns a short character description into a portrait,
a rolled set of attributes (3d6 per ability) and, optionally, three
personality traits.

Unspecified fields keep their defaults (Valerius, Human Paladin with
glowing golden eyes and ornate silver armor), or are all re-rolled
with --randomize. Explicit flags are applied after randomizing.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./forge.toml        Project-level config
3. ~/.config/character-forge/config.toml   Global config

The API key is read from $GEMINI_API_KEY unless [gemini] api_key_env says otherwise.

Example:
  character-forge --name "Nia Winterfall" --race Elf --class Ranger --traits
  character-forge --randomize --seed 42 --save-image hero.jpg
  character-forge --list
"#)]
pub struct Cli {
    /// Character name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Race (free text; see --list for the usual ones)
    #[arg(long)]
    pub race: Option<String>,

    /// Class (free text; see --list for the usual ones)
    #[arg(long)]
    pub class: Option<String>,

    /// Special elements woven into the portrait prompt
    #[arg(short, long, value_name = "TEXT")]
    pub special: Option<String>,

    /// Also generate three personality traits
    #[arg(short, long)]
    pub traits: bool,

    /// Randomize every field before applying the flags above
    #[arg(short, long)]
    pub randomize: bool,

    /// Seed for reproducible randomization and dice rolls
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format: full, summary or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Write the generated portrait (JPEG) to this path
    #[arg(long, value_name = "PATH")]
    pub save_image: Option<PathBuf>,

    /// List the known races and classes and exit
    #[arg(long)]
    pub list: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append structured generation events (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily-rolling files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply the draft-related flags on top of `draft`.
    pub fn apply_to(&self, mut draft: CharacterDraft) -> CharacterDraft {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(race) = &self.race {
            draft.race = race.clone();
        }
        if let Some(class) = &self.class {
            draft.class = class.clone();
        }
        if let Some(special) = &self.special {
            draft.special_elements = special.clone();
        }
        if self.traits {
            draft.include_random_traits = true;
        }
        draft
    }
}
