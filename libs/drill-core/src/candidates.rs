//! Candidate sets for the study and quiz screens.
//!
//! Both sets are recomputed from the store on every call.

use crate::store::WordStore;
use crate::types::Word;

/// Words eligible for autonomous study selection, in list order.
pub fn learning_candidates(store: &WordStore) -> Vec<&Word> {
    store
        .words()
        .iter()
        .filter(|w| w.is_learning_candidate())
        .collect()
}

/// Words eligible for autonomous quiz selection, in list order.
pub fn quiz_candidates(store: &WordStore) -> Vec<&Word> {
    store
        .words()
        .iter()
        .filter(|w| w.is_quiz_candidate())
        .collect()
}
