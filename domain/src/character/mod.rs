//! Character subdomain.
//!
//! - [`draft::CharacterDraft`]: user-editable parameters before generation
//! - [`fixtures`]: fixed vocabularies for races, classes, names and details
//! - [`randomizer::Randomizer`]: uniform picks from the fixtures
//! - [`attributes::AttributeBlock`]: six 3d6 ability scores

pub mod attributes;
pub mod draft;
pub mod fixtures;
pub mod randomizer;
