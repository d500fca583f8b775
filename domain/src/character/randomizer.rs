//! Randomizer for character drafts
//!
//! Every pick is a uniform draw over one of the fixed lists in
//! [`fixtures`](super::fixtures). Given a deterministic [`RandomSource`] the
//! output is fully reproducible.

use super::draft::CharacterDraft;
use super::fixtures::{
    CLASSES, FIRST_NAMES, LAST_NAMES, RACES, SPECIAL_ELEMENT_ADJECTIVES,
    SPECIAL_ELEMENT_FEATURES, SPECIAL_ELEMENT_ITEMS,
};
use crate::random::{RandomSource, choose};

/// Produces plausible random values for each draft field.
pub struct Randomizer;

impl Randomizer {
    pub fn pick_race(rng: &dyn RandomSource) -> &'static str {
        *choose(rng, RACES)
    }

    pub fn pick_class(rng: &dyn RandomSource) -> &'static str {
        *choose(rng, CLASSES)
    }

    /// `"<first> <last>"`
    pub fn pick_name(rng: &dyn RandomSource) -> String {
        let first = choose(rng, FIRST_NAMES);
        let last = choose(rng, LAST_NAMES);
        format!("{} {}", first, last)
    }

    /// `"<adjective> <feature>, <item>"`
    pub fn pick_special_elements(rng: &dyn RandomSource) -> String {
        let adjective = choose(rng, SPECIAL_ELEMENT_ADJECTIVES);
        let feature = choose(rng, SPECIAL_ELEMENT_FEATURES);
        let item = choose(rng, SPECIAL_ELEMENT_ITEMS);
        format!("{} {}, {}", adjective, feature, item)
    }

    /// True with probability 0.5.
    pub fn pick_include_traits(rng: &dyn RandomSource) -> bool {
        rng.random_f64() > 0.5
    }

    /// A fully randomized draft.
    ///
    /// Fields are drawn in a fixed order (race, class, name, special
    /// elements, traits flag) so a given sequence always yields the same draft.
    pub fn randomize(rng: &dyn RandomSource) -> CharacterDraft {
        let race = Self::pick_race(rng).to_string();
        let class = Self::pick_class(rng).to_string();
        let name = Self::pick_name(rng);
        let special_elements = Self::pick_special_elements(rng);
        let include_random_traits = Self::pick_include_traits(rng);

        CharacterDraft {
            name,
            race,
            class,
            special_elements,
            include_random_traits,
        }
    }
}
