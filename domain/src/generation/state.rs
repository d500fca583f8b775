//! Generation state and its reducer
//!
//! [`GenerationState`] is the single snapshot a front-end renders. Every
//! change is a [`GenerationEvent`] applied by [`GenerationState::apply`],
//! which consumes the old snapshot and returns the next one.
//!
//! ```text
//! Idle ──Started──▶ Loading ──Succeeded──▶ Success ─┐
//!   ▲                  │                            │
//!   │                  └────Failed────▶ Failure ────┤
//!   └──────────────────────Reset────────────────────┘
//! ```
//!
//! Each `Started` and `Reset` bumps [`GenerationState::attempt`]. Ticks and
//! completions carry the attempt they belong to and are dropped when it is
//! no longer current.

use super::progress::Progress;
use super::result::GenerationResult;
use crate::character::attributes::AttributeBlock;
use crate::character::draft::CharacterDraft;
use serde::{Deserialize, Serialize};

/// Phase of the generation workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPhase {
    /// Editable form, nothing in flight
    #[default]
    Idle,
    /// Waiting on the generation service
    Loading,
    /// Portrait and attributes available
    Success,
    /// Error message available
    Failure,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Loading => "loading",
            GenerationPhase::Success => "success",
            GenerationPhase::Failure => "failure",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Success | GenerationPhase::Failure)
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every way the generation state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// The user (or the randomizer) replaced the draft.
    DraftReplaced(CharacterDraft),
    /// Start a new attempt. Ignored unless [`GenerationState::can_start`].
    Started,
    /// One tick of the cosmetic progress timer.
    ProgressAdvanced {
        attempt: u64,
        increment: u8,
        ceiling: u8,
    },
    /// Both service requests finished.
    ///
    /// `traits` is `None` when traits were not requested.
    Succeeded {
        attempt: u64,
        image_base64: String,
        attributes: AttributeBlock,
        traits: Option<Vec<String>>,
    },
    /// Either service request failed.
    Failed { attempt: u64, detail: Option<String> },
    /// The post-completion delay elapsed; the form becomes editable again.
    Settled { attempt: u64 },
    /// The caller stopped waiting on the attempt before it settled.
    ///
    /// An attempt still loading goes back to idle; a completed one keeps its
    /// result and settles immediately.
    Abandoned { attempt: u64 },
    /// Clear everything except the draft.
    Reset,
}

/// Snapshot of the whole generation workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationState {
    pub draft: CharacterDraft,
    pub phase: GenerationPhase,
    /// True from start until the settle delay after completion.
    pub loading: bool,
    pub progress: Progress,
    pub result: GenerationResult,
    /// Identifies the current attempt.
    pub attempt: u64,
}

impl GenerationState {
    pub fn new(draft: CharacterDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Entry guard: a named draft and nothing already loading.
    pub fn can_start(&self) -> bool {
        self.draft.has_name() && !self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Status line for the progress indicator.
    pub fn progress_message(&self) -> &'static str {
        self.progress.message()
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.attempt == attempt
    }

    /// Apply one event, producing the next snapshot.
    pub fn apply(self, event: GenerationEvent) -> Self {
        match event {
            GenerationEvent::DraftReplaced(draft) => Self { draft, ..self },

            GenerationEvent::Started => {
                if !self.can_start() {
                    return self;
                }
                Self {
                    phase: GenerationPhase::Loading,
                    loading: true,
                    progress: Progress::ZERO,
                    result: GenerationResult::empty(),
                    attempt: self.attempt + 1,
                    ..self
                }
            }

            GenerationEvent::ProgressAdvanced {
                attempt,
                increment,
                ceiling,
            } => {
                if !self.is_current(attempt) || self.phase != GenerationPhase::Loading {
                    return self;
                }
                Self {
                    progress: self.progress.advance(increment, ceiling),
                    ..self
                }
            }

            GenerationEvent::Succeeded {
                attempt,
                image_base64,
                attributes,
                traits,
            } => {
                if !self.is_current(attempt) || self.phase != GenerationPhase::Loading {
                    return self;
                }
                Self {
                    phase: GenerationPhase::Success,
                    progress: Progress::COMPLETE,
                    result: GenerationResult::success(&image_base64, attributes, traits),
                    ..self
                }
            }

            GenerationEvent::Failed { attempt, detail } => {
                if !self.is_current(attempt) || self.phase != GenerationPhase::Loading {
                    return self;
                }
                Self {
                    phase: GenerationPhase::Failure,
                    progress: Progress::COMPLETE,
                    result: GenerationResult::failure(detail.as_deref()),
                    ..self
                }
            }

            GenerationEvent::Settled { attempt } => {
                if !self.is_current(attempt) || !self.phase.is_terminal() {
                    return self;
                }
                Self {
                    loading: false,
                    ..self
                }
            }

            GenerationEvent::Abandoned { attempt } => {
                if !self.is_current(attempt) || !self.loading {
                    return self;
                }
                if self.phase.is_terminal() {
                    return Self {
                        loading: false,
                        ..self
                    };
                }
                Self {
                    phase: GenerationPhase::Idle,
                    loading: false,
                    progress: Progress::ZERO,
                    result: GenerationResult::empty(),
                    ..self
                }
            }

            GenerationEvent::Reset => Self {
                phase: GenerationPhase::Idle,
                loading: false,
                progress: Progress::ZERO,
                result: GenerationResult::empty(),
                attempt: self.attempt + 1,
                ..self
            },
        }
    }
}
