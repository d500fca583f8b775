//! Ability scores rolled with 3d6

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// The six tabletop ability scores, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Sum of three independent d6 draws, always in `[3, 18]`.
pub fn roll_3d6(rng: &dyn RandomSource) -> u8 {
    (0..3).map(|_| rng.random_range(1, 6) as u8).sum()
}

/// Six independently rolled scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AttributeBlock {
    /// Roll every score in the fixed order strength → charisma.
    pub fn roll(rng: &dyn RandomSource) -> Self {
        Self {
            strength: roll_3d6(rng),
            dexterity: roll_3d6(rng),
            constitution: roll_3d6(rng),
            intelligence: roll_3d6(rng),
            wisdom: roll_3d6(rng),
            charisma: roll_3d6(rng),
        }
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// `(ability, score)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score as u32).sum()
    }

    /// Tabletop modifier: `floor((score - 10) / 2)`.
    pub fn modifier(score: u8) -> i8 {
        (score as i8 - 10).div_euclid(2)
    }
}
