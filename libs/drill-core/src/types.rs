//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};

/// Stable identifier of a word for the lifetime of a session.
pub type WordId = i64;

/// Correct quiz answers needed before a word counts as mastered.
pub const MASTERY_TARGET: u8 = 3;

/// Cap on randomly scheduled study showings while a word is still at zero mastery.
pub const MAX_STUDY_EXPOSURES: u8 = 3;

/// Number of options on a quiz screen.
pub const OPTION_COUNT: usize = 4;

/// Number of wrong options on a quiz screen.
pub const WRONG_OPTION_COUNT: usize = OPTION_COUNT - 1;

/// Entry of the initial word list, as supplied at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
    pub meaning: String,
}

impl WordEntry {
    pub fn new(id: WordId, text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            meaning: meaning.into(),
        }
    }
}

/// A word with its learning state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub meaning: String,
    /// Correct answers so far, in `0..=MASTERY_TARGET`.
    pub mastery_count: u8,
    /// Set the first time the word reaches the study screen. Never reset.
    pub has_been_studied: bool,
    /// Randomly scheduled study showings while `mastery_count == 0`.
    pub study_exposures: u8,
    /// Set once `mastery_count` first rises above zero. Never reset, so a
    /// demoted word stays out of the learning set.
    #[serde(default)]
    pub has_left_learning: bool,
}

impl From<WordEntry> for Word {
    fn from(entry: WordEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            meaning: entry.meaning,
            mastery_count: 0,
            has_been_studied: false,
            study_exposures: 0,
            has_left_learning: false,
        }
    }
}

impl Word {
    /// Eligible for autonomous study-screen selection.
    pub fn is_learning_candidate(&self) -> bool {
        self.mastery_count == 0
            && !self.has_left_learning
            && self.study_exposures < MAX_STUDY_EXPOSURES
    }

    /// Eligible for autonomous quiz-screen selection.
    pub fn is_quiz_candidate(&self) -> bool {
        self.has_been_studied && self.mastery_count < MASTERY_TARGET
    }

    pub fn is_mastered(&self) -> bool {
        self.mastery_count >= MASTERY_TARGET
    }
}

/// Screen mode the planner can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Study,
    Quiz,
}

/// What the presentation layer should show next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NextAction {
    ShowStudy { word: Word },
    ShowQuiz { word: Word },
    SessionComplete,
    /// Words remain unmastered but neither candidate set has members.
    PlannerError,
}

impl NextAction {
    /// Mode and word carried by the action, if it targets a word.
    pub fn target(&self) -> Option<(StudyMode, &Word)> {
        match self {
            Self::ShowStudy { word } => Some((StudyMode::Study, word)),
            Self::ShowQuiz { word } => Some((StudyMode::Quiz, word)),
            Self::SessionComplete | Self::PlannerError => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::SessionComplete)
    }
}

/// Word counts for progress display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub mastered: usize,
    pub learning: usize,
    pub quizzable: usize,
    pub unseen: usize,
}

/// How the study screen advances.
///
/// Only the planner-driven flow is supported: every advance goes back through
/// the planner, which is the single place study exposures are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    Planner,
}

impl Default for AdvancePolicy {
    fn default() -> Self {
        Self::Planner
    }
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSettings {
    /// Pause after a quiz answer before the next screen.
    pub feedback_delay_ms: u64,
    pub advance_policy: AdvancePolicy,
    /// Seed for the session's random source. Entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            feedback_delay_ms: 1000,
            advance_policy: AdvancePolicy::default(),
            seed: None,
        }
    }
}
