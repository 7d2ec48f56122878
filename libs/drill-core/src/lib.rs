//! Core vocabulary drill library used by the terminal front end.
//!
//! Provides:
//! - Word state model and the in-memory word store
//! - Candidate selection for the study and quiz screens
//! - Progress tracking (mastery counter, study exposures)
//! - Multiple-choice option generation
//! - The next-step planner and an owned session context
//! - Parser for the line-oriented word-list format

pub mod candidates;
pub mod error;
pub mod options;
pub mod planner;
pub mod progress;
pub mod session;
pub mod store;
pub mod types;
pub mod wordlist;

pub use candidates::{learning_candidates, quiz_candidates};
pub use error::{DrillError, ParseError, Result};
pub use options::{build_options, QuizCard};
pub use planner::plan;
pub use progress::{mark_studied, record_quiz_outcome, record_study_exposure};
pub use session::{DrillSession, QuizOutcome};
pub use store::WordStore;
pub use types::{
    AdvancePolicy, DrillSettings, NextAction, ProgressSummary, StudyMode, Word, WordEntry, WordId,
    MASTERY_TARGET, MAX_STUDY_EXPOSURES, OPTION_COUNT, WRONG_OPTION_COUNT,
};
pub use wordlist::parse_word_list;
