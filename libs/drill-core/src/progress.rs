//! Mutators that record study and quiz outcomes on a word.

use crate::error::Result;
use crate::store::WordStore;
use crate::types::{Word, WordId, MASTERY_TARGET};

/// Record a study showing the planner picked on its own.
///
/// Always marks the word as studied. The exposure counter only moves while the
/// word is still a learning candidate; any other call is logged and ignored.
pub fn record_study_exposure(store: &mut WordStore, id: WordId) -> Result<()> {
    let word = store.get_mut(id)?;
    word.has_been_studied = true;

    if word.is_learning_candidate() {
        word.study_exposures += 1;
        tracing::debug!(id, text = %word.text, exposures = word.study_exposures, "study exposure recorded");
    } else {
        tracing::warn!(
            id,
            mastery_count = word.mastery_count,
            exposures = word.study_exposures,
            "study exposure recorded for a word that is not a learning candidate"
        );
    }
    Ok(())
}

/// Apply a quiz answer and return the updated word.
pub fn record_quiz_outcome(store: &mut WordStore, id: WordId, is_correct: bool) -> Result<Word> {
    let word = store.get_mut(id)?;
    word.mastery_count = if is_correct {
        (word.mastery_count + 1).min(MASTERY_TARGET)
    } else {
        word.mastery_count.saturating_sub(1)
    };
    word.has_been_studied = true;
    if word.mastery_count > 0 {
        word.has_left_learning = true;
    }

    tracing::debug!(id, is_correct, mastery_count = word.mastery_count, "quiz outcome recorded");
    Ok(word.clone())
}

/// Mark a word as studied without counting an exposure.
///
/// Used for forced restudy and other direct study presentations.
pub fn mark_studied(store: &mut WordStore, id: WordId) -> Result<()> {
    let word = store.get_mut(id)?;
    if !word.has_been_studied {
        word.has_been_studied = true;
        tracing::debug!(id, "word marked studied");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrillError;
    use crate::types::{WordEntry, MAX_STUDY_EXPOSURES};

    fn store() -> WordStore {
        WordStore::new([WordEntry::new(1, "apple", "사과")])
    }

    #[test]
    fn exposure_counts_up_to_cap() {
        let mut store = store();
        for _ in 0..5 {
            record_study_exposure(&mut store, 1).unwrap();
        }
        let word = store.get(1).unwrap();
        assert_eq!(word.study_exposures, MAX_STUDY_EXPOSURES);
        assert!(word.has_been_studied);
        assert!(!word.is_learning_candidate());
    }

    #[test]
    fn exposure_frozen_once_mastery_moves() {
        let mut store = store();
        record_study_exposure(&mut store, 1).unwrap();
        record_quiz_outcome(&mut store, 1, true).unwrap();
        record_study_exposure(&mut store, 1).unwrap();
        assert_eq!(store.get(1).unwrap().study_exposures, 1);
    }

    #[test]
    fn quiz_outcome_saturates() {
        let mut store = store();
        let outcomes = [true, true, true, true, true, false, false, false, false, false, true];
        for correct in outcomes {
            let word = record_quiz_outcome(&mut store, 1, correct).unwrap();
            assert!(word.mastery_count <= MASTERY_TARGET);
        }
        assert_eq!(store.get(1).unwrap().mastery_count, 1);
    }

    #[test]
    fn demoted_word_stays_out_of_learning() {
        let mut store = store();
        record_quiz_outcome(&mut store, 1, true).unwrap();
        let word = record_quiz_outcome(&mut store, 1, false).unwrap();
        assert_eq!(word.mastery_count, 0);
        assert!(word.has_left_learning);
        assert!(!word.is_learning_candidate());

        record_study_exposure(&mut store, 1).unwrap();
        assert_eq!(store.get(1).unwrap().study_exposures, 0);
    }

    #[test]
    fn quiz_outcome_marks_studied() {
        let mut store = store();
        let word = record_quiz_outcome(&mut store, 1, false).unwrap();
        assert!(word.has_been_studied);
        assert_eq!(word.mastery_count, 0);
        assert!(!word.has_left_learning);
    }

    #[test]
    fn mark_studied_leaves_exposures() {
        let mut store = store();
        mark_studied(&mut store, 1).unwrap();
        mark_studied(&mut store, 1).unwrap();
        let word = store.get(1).unwrap();
        assert!(word.has_been_studied);
        assert_eq!(word.study_exposures, 0);
    }

    #[test]
    fn unknown_word_is_not_found() {
        let mut store = store();
        assert_eq!(record_quiz_outcome(&mut store, 2, true), Err(DrillError::NotFound { id: 2 }));
        assert_eq!(mark_studied(&mut store, 2), Err(DrillError::NotFound { id: 2 }));
        assert_eq!(record_study_exposure(&mut store, 2), Err(DrillError::NotFound { id: 2 }));
    }
}
