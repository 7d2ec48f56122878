//! Owned session context: the word store, its random source and settings.

use crate::error::{DrillError, Result};
use crate::options::{build_options, QuizCard};
use crate::planner::plan;
use crate::progress::{mark_studied, record_quiz_outcome};
use crate::store::WordStore;
use crate::types::{DrillSettings, NextAction, ProgressSummary, Word, WordEntry, WordId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of answering a quiz card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub word: Word,
    pub correct: bool,
}

impl QuizOutcome {
    /// Word to pass back to `plan` as the forced restudy, if any.
    pub fn restudy(&self) -> Option<WordId> {
        (!self.correct).then_some(self.word.id)
    }
}

/// A single drill session. Dropping it discards all progress.
#[derive(Debug)]
pub struct DrillSession<R = StdRng> {
    store: WordStore,
    rng: R,
    settings: DrillSettings,
}

impl DrillSession<StdRng> {
    /// Start a session over `entries`, seeded from `settings.seed` when set.
    pub fn new<I>(entries: I, settings: DrillSettings) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(WordStore::new(entries), rng, settings)
    }
}

impl<R: Rng> DrillSession<R> {
    pub fn with_rng(store: WordStore, rng: R, settings: DrillSettings) -> Self {
        tracing::debug!(words = store.len(), "drill session started");
        Self {
            store,
            rng,
            settings,
        }
    }

    pub fn plan(&mut self, force: Option<WordId>) -> Result<NextAction> {
        plan(&mut self.store, force, &mut self.rng)
    }

    pub fn record_quiz_outcome(&mut self, id: WordId, is_correct: bool) -> Result<Word> {
        record_quiz_outcome(&mut self.store, id, is_correct)
    }

    pub fn mark_studied(&mut self, id: WordId) -> Result<()> {
        mark_studied(&mut self.store, id)
    }

    /// Shuffled options for word `id` against the whole list.
    pub fn build_options(&mut self, id: WordId) -> Result<Vec<String>> {
        let target = self.store.get(id)?;
        build_options(target, self.store.words(), &mut self.rng)
    }

    pub fn quiz_card(&mut self, id: WordId) -> Result<QuizCard> {
        let target = self.store.get(id)?;
        QuizCard::new(target, self.store.words(), &mut self.rng)
    }

    /// Check `choice` on `card` and record the outcome.
    pub fn answer(&mut self, card: &QuizCard, choice: usize) -> Result<QuizOutcome> {
        let correct = card.is_correct(choice);
        let word = self.record_quiz_outcome(card.word_id, correct)?;
        Ok(QuizOutcome { word, correct })
    }

    pub fn is_session_complete(&self) -> bool {
        self.store.is_complete()
    }

    pub fn summary(&self) -> ProgressSummary {
        self.store.summary()
    }

    pub fn word(&self, id: WordId) -> Result<&Word> {
        self.store.get(id)
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }
}

impl NextAction {
    /// Turn `PlannerError` into `DrillError::InconsistentState` for `?` callers.
    pub fn into_result(self, store: &WordStore) -> Result<NextAction> {
        match self {
            NextAction::PlannerError => Err(DrillError::InconsistentState {
                unmastered: store.words().iter().filter(|w| !w.is_mastered()).count(),
            }),
            action => Ok(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MASTERY_TARGET;
    use pretty_assertions::assert_eq;

    fn session(seed: u64) -> DrillSession {
        let entries = [
            WordEntry::new(1, "apple", "사과"),
            WordEntry::new(2, "banana", "바나나"),
            WordEntry::new(3, "cherry", "체리"),
        ];
        DrillSession::new(
            entries,
            DrillSettings {
                seed: Some(seed),
                ..DrillSettings::default()
            },
        )
    }

    #[test]
    fn same_seed_same_plan() {
        let mut a = session(17);
        let mut b = session(17);
        for _ in 0..10 {
            assert_eq!(a.plan(None).unwrap(), b.plan(None).unwrap());
        }
    }

    #[test]
    fn wrong_answer_requests_restudy() {
        let mut session = session(2);
        let card = session.quiz_card(2).unwrap();
        let wrong = (0..card.options.len()).find(|&i| !card.is_correct(i)).unwrap();

        let outcome = session.answer(&card, wrong).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.restudy(), Some(2));
        assert!(session.word(2).unwrap().has_been_studied);

        let action = session.plan(outcome.restudy()).unwrap();
        assert!(matches!(action, NextAction::ShowStudy { ref word } if word.id == 2));
    }

    #[test]
    fn right_answer_counts_up() {
        let mut session = session(3);
        let card = session.quiz_card(1).unwrap();
        let right = (0..card.options.len()).find(|&i| card.is_correct(i)).unwrap();

        let outcome = session.answer(&card, right).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.restudy(), None);
        assert_eq!(outcome.word.mastery_count, 1);
    }

    #[test]
    fn complete_after_all_mastered() {
        let mut session = session(4);
        for id in 1..=3 {
            for _ in 0..MASTERY_TARGET {
                session.record_quiz_outcome(id, true).unwrap();
            }
        }
        assert!(session.is_session_complete());
        assert_eq!(session.plan(Some(1)).unwrap(), NextAction::SessionComplete);
    }

    #[test]
    fn planner_error_into_result() {
        let store = WordStore::from_words([Word {
            study_exposures: 3,
            ..Word::from(WordEntry::new(1, "apple", "사과"))
        }]);
        assert_eq!(
            NextAction::PlannerError.into_result(&store),
            Err(DrillError::InconsistentState { unmastered: 1 })
        );
        assert_eq!(
            NextAction::SessionComplete.into_result(&store),
            Ok(NextAction::SessionComplete)
        );
    }
}
