//! Prompt templates for portrait and trait generation

use crate::character::draft::CharacterDraft;

/// Templates for generating prompts from a draft
pub struct CharacterPromptTemplate;

impl CharacterPromptTemplate {
    /// Instruction for the image model.
    pub fn image_prompt(draft: &CharacterDraft) -> String {
        format!(
            "High-quality, detailed fantasy character portrait of a majestic {} {}. \
             The character has {}. \
             Art style: digital painting, epic fantasy, D&D character art, high detail, \
             cinematic lighting, photorealistic.",
            draft.race, draft.class, draft.special_elements
        )
    }

    /// Instruction for the text model, asking for three one-word traits.
    pub fn traits_prompt(draft: &CharacterDraft) -> String {
        format!(
            r#"Generate an object with a "traits" property, which is an array of 3 distinct, one-word personality traits for a {} {}. Examples: Brave, Cautious, Greedy, Loyal, Impulsive."#,
            draft.race, draft.class
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_prompt_exact() {
        let draft = CharacterDraft::default();
        assert_eq!(
            CharacterPromptTemplate::image_prompt(&draft),
            "High-quality, detailed fantasy character portrait of a majestic Human Paladin. \
The character has Glowing golden eyes, ornate silver armor. Art style: digital painting, \
epic fantasy, D&D character art, high detail, cinematic lighting, photorealistic."
        );
    }

    #[test]
    fn test_traits_prompt_exact() {
        let draft = CharacterDraft::default()
            .with_race("Tiefling")
            .with_class("Warlock");
        assert_eq!(
            CharacterPromptTemplate::traits_prompt(&draft),
            "Generate an object with a \"traits\" property, which is an array of 3 distinct, \
one-word personality traits for a Tiefling Warlock. Examples: Brave, Cautious, Greedy, Loyal, Impulsive."
        );
    }

    #[test]
    fn test_traits_prompt_ignores_special_elements() {
        let a = CharacterDraft::default();
        let b = CharacterDraft::default().with_special_elements("a faint aura");
        assert_eq!(
            CharacterPromptTemplate::traits_prompt(&a),
            CharacterPromptTemplate::traits_prompt(&b)
        );
    }
}
