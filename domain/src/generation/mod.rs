//! Generation subdomain.
//!
//! The state of a character generation attempt, kept as an immutable
//! snapshot ([`state::GenerationState`]) that only changes through
//! [`state::GenerationEvent`]s.

pub mod progress;
pub mod result;
pub mod state;
