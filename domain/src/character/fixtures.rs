//! Fixed vocabularies used by the form and the randomizer.

/// Selectable races.
pub const RACES: &[&str] = &[
    "Human",
    "Elf",
    "Dwarf",
    "Orc",
    "Halfling",
    "Dragonborn",
    "Tiefling",
    "Gnome",
];

/// Selectable classes.
pub const CLASSES: &[&str] = &[
    "Warrior", "Mage", "Rogue", "Cleric", "Paladin", "Ranger", "Warlock", "Bard", "Monk",
];

pub const FIRST_NAMES: &[&str] = &[
    "Aelar",
    "Bryn",
    "Caelan",
    "Darian",
    "Elara",
    "Fendrel",
    "Gareth",
    "Hadrian",
    "Ithil",
    "Joric",
    "Lyra",
    "Maeve",
    "Nia",
    "Orin",
    "Perrin",
    "Quinn",
    "Roric",
    "Seraphina",
    "Talon",
    "Urien",
    "Vael",
    "Wren",
    "Xylia",
    "Yara",
    "Zephyr",
];

pub const LAST_NAMES: &[&str] = &[
    "Stormwind",
    "Ironhand",
    "Shadowglen",
    "Brightwood",
    "Stoneforged",
    "Nightbreeze",
    "Fireheart",
    "Winterfall",
    "Sunstrider",
    "Blackwood",
    "Silvermoon",
    "Dragonfyre",
];

pub const SPECIAL_ELEMENT_ADJECTIVES: &[&str] = &[
    "glowing",
    "ancient",
    "runic",
    "shadowy",
    "ethereal",
    "ornate",
    "battle-scarred",
    "gleaming",
    "dark",
    "crystal",
    "fiery",
    "frost-touched",
];

pub const SPECIAL_ELEMENT_FEATURES: &[&str] = &[
    "tattoos on their face",
    "a mechanical arm",
    "heterochromia eyes",
    "long, braided hair",
    "a prominent scar",
    "pointed ears",
    "small horns",
    "a faint aura",
    "unusual skin color",
    "a prosthetic leg",
];

pub const SPECIAL_ELEMENT_ITEMS: &[&str] = &[
    "carrying a mystical orb",
    "wielding a crystal-edged sword",
    "wearing a cloak of raven feathers",
    "adorned with bone jewelry",
    "with a spirit animal companion",
    "holding a gnarled staff",
    "with a hovering arcane grimoire",
    "wearing an enchanted amulet",
];

/// Case-insensitive lookup of a known race, returning its canonical spelling.
pub fn canonical_race(value: &str) -> Option<&'static str> {
    canonical(RACES, value)
}

/// Case-insensitive lookup of a known class, returning its canonical spelling.
pub fn canonical_class(value: &str) -> Option<&'static str> {
    canonical(CLASSES, value)
}

fn canonical(list: &'static [&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    list.iter().copied().find(|item| item.eq_ignore_ascii_case(value))
}
