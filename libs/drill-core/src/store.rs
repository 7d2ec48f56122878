//! In-memory word store owned by a session.

use crate::error::{DrillError, Result};
use std::collections::HashSet;
use crate::types::{ProgressSummary, Word, WordEntry, WordId, MASTERY_TARGET, MAX_STUDY_EXPOSURES};

/// Ordered set of words, mutated in place for the life of a session.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    /// Build a fresh store from the initial word list.
    ///
    /// Entries are copied; a repeated id keeps its first entry.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        Self::from_words(entries.into_iter().map(Word::from))
    }

    /// Restore a store from word snapshots, clamping counters into range.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut store = Self::default();
        let mut seen_ids = HashSet::new();
        for mut word in words {
            if !seen_ids.insert(word.id) {
                tracing::warn!(id = word.id, "duplicate word id ignored");
                continue;
            }
            word.mastery_count = word.mastery_count.min(MASTERY_TARGET);
            word.study_exposures = word.study_exposures.min(MAX_STUDY_EXPOSURES);
            word.has_left_learning |= word.mastery_count > 0;
            store.words.push(word);
        }
        store
    }

    pub fn get(&self, id: WordId) -> Result<&Word> {
        self.words
            .iter()
            .find(|w| w.id == id)
            .ok_or(DrillError::NotFound { id })
    }

    pub(crate) fn get_mut(&mut self, id: WordId) -> Result<&mut Word> {
        self.words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DrillError::NotFound { id })
    }

    /// All words in list order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True once the store is non-empty and every word is mastered.
    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(Word::is_mastered)
    }

    pub fn summary(&self) -> ProgressSummary {
        self.words
            .iter()
            .fold(ProgressSummary::default(), |mut summary, word| {
                summary.total += 1;
                if word.is_mastered() {
                    summary.mastered += 1;
                }
                if word.is_learning_candidate() {
                    summary.learning += 1;
                }
                if word.is_quiz_candidate() {
                    summary.quizzable += 1;
                }
                if !word.has_been_studied {
                    summary.unseen += 1;
                }
                summary
            })
    }
}
