//! Console output formatter for generated characters

use colored::Colorize;
use forge_domain::{AttributeBlock, CLASSES, CharacterDraft, GenerationResult, OutputFormat, RACES};
use serde::Serialize;

/// Machine-readable view of one generated character.
///
/// The portrait is summarized by its payload size; use `--save-image`
/// to get the JPEG itself.
#[derive(Debug, Serialize)]
struct CharacterSheet<'a> {
    name: &'a str,
    race: &'a str,
    class: &'a str,
    special_elements: &'a str,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<&'a AttributeBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    traits: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_base64_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the selected output format
    pub fn render(
        format: OutputFormat,
        draft: &CharacterDraft,
        result: &GenerationResult,
    ) -> String {
        match format {
            OutputFormat::Full => Self::format(draft, result),
            OutputFormat::Summary => Self::format_summary(draft, result),
            OutputFormat::Json => Self::format_json(draft, result),
        }
    }

    /// Format the complete character sheet
    pub fn format(draft: &CharacterDraft, result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&draft.name));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {}\n",
            "Hero:".cyan().bold(),
            draft.race,
            draft.class
        ));
        if !draft.special_elements.trim().is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Special:".cyan().bold(),
                draft.special_elements
            ));
        }

        if let Some(error) = result.error() {
            output.push_str(&format!("\n{}\n", error.red().bold()));
            output.push_str(&Self::footer());
            return output;
        }

        if let Some(attributes) = result.attributes() {
            output.push_str(&Self::section_header("Attributes"));
            for (ability, score) in attributes.iter() {
                output.push_str(&format!(
                    "  {}  {:>2}  ({})\n",
                    ability.abbreviation().bold(),
                    score,
                    Self::signed(AttributeBlock::modifier(score))
                ));
            }
            output.push_str(&format!(
                "  {}  {}\n",
                "Total".dimmed(),
                attributes.total()
            ));
        }

        if let Some(traits) = result.traits() {
            output.push_str(&Self::section_header("Personality Traits"));
            for t in traits {
                output.push_str(&format!("  * {}\n", t));
            }
        }

        if let Some(payload) = result.image_payload() {
            output.push_str(&Self::section_header("Portrait"));
            output.push_str(&format!(
                "  JPEG, {} bytes base64 (use --save-image to export)\n",
                payload.len()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(draft: &CharacterDraft, result: &GenerationResult) -> String {
        let sheet = CharacterSheet {
            name: &draft.name,
            race: &draft.race,
            class: &draft.class,
            special_elements: &draft.special_elements,
            success: result.is_success(),
            attributes: result.attributes(),
            traits: result.traits(),
            image_base64_len: result.image_payload().map(str::len),
            error: result.error(),
        };
        serde_json::to_string_pretty(&sheet).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format on a single line
    pub fn format_summary(draft: &CharacterDraft, result: &GenerationResult) -> String {
        let who = format!("{} ({} {})", draft.name.bold(), draft.race, draft.class);
        if let Some(error) = result.error() {
            return format!("{} {} {}", "x".red(), who, error.red());
        }

        let mut line = format!("{} {}", "v".green(), who);
        if let Some(attributes) = result.attributes() {
            let scores: Vec<String> = attributes
                .iter()
                .map(|(ability, score)| format!("{} {}", ability.abbreviation(), score))
                .collect();
            line.push_str(&format!(" | {}", scores.join(" ")));
        }
        if let Some(traits) = result.traits() {
            line.push_str(&format!(" | {}", traits.join(", ")));
        }
        line
    }

    /// Known races and classes, for `--list`
    pub fn format_catalog() -> String {
        format!(
            "{}\n  {}\n{}\n  {}\n",
            "Races:".cyan().bold(),
            RACES.join(", "),
            "Classes:".cyan().bold(),
            CLASSES.join(", ")
        )
    }

    /// Force colors on or off for everything formatted afterwards.
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    fn signed(modifier: i8) -> String {
        format!("{:+}", modifier)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
