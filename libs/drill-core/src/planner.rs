//! Next-step planner.
//!
//! Rules, first match wins:
//! 1. every word mastered: `SessionComplete`
//! 2. a forced word: `ShowStudy` for it, no exposure counted
//! 3. pick Study or Quiz 50/50 among the non-empty candidate sets
//! 4. pick a word uniformly from that set; a Study pick counts an exposure

use crate::candidates::{learning_candidates, quiz_candidates};
use crate::error::Result;
use crate::progress::{mark_studied, record_study_exposure};
use crate::store::WordStore;
use crate::types::{NextAction, StudyMode, WordId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Decide the next screen.
///
/// `force` is the word the user just answered wrong. Fails with `NotFound`
/// only when `force` names a word missing from the store.
pub fn plan<R>(store: &mut WordStore, force: Option<WordId>, rng: &mut R) -> Result<NextAction>
where
    R: Rng + ?Sized,
{
    if store.is_complete() {
        tracing::debug!("all words mastered");
        return Ok(NextAction::SessionComplete);
    }

    if let Some(id) = force {
        mark_studied(store, id)?;
        tracing::debug!(id, "forced restudy");
        return Ok(NextAction::ShowStudy {
            word: store.get(id)?.clone(),
        });
    }

    let learning: Vec<WordId> = learning_candidates(store).iter().map(|w| w.id).collect();
    let quiz: Vec<WordId> = quiz_candidates(store).iter().map(|w| w.id).collect();
    tracing::debug!(learning = learning.len(), quiz = quiz.len(), "candidates");

    let mut modes = Vec::with_capacity(2);
    if !learning.is_empty() {
        modes.push(StudyMode::Study);
    }
    if !quiz.is_empty() {
        modes.push(StudyMode::Quiz);
    }

    let Some(&mode) = modes.choose(rng) else {
        let unmastered = store.words().iter().filter(|w| !w.is_mastered()).count();
        tracing::error!(unmastered, "no study or quiz candidates while session is incomplete");
        return Ok(NextAction::PlannerError);
    };

    let pool = match mode {
        StudyMode::Study => &learning,
        StudyMode::Quiz => &quiz,
    };
    // `modes` only holds non-empty pools
    let Some(&id) = pool.choose(rng) else {
        return Ok(NextAction::PlannerError);
    };

    match mode {
        StudyMode::Study => {
            record_study_exposure(store, id)?;
            let word = store.get(id)?.clone();
            tracing::debug!(id, exposures = word.study_exposures, "next: study");
            Ok(NextAction::ShowStudy { word })
        }
        StudyMode::Quiz => {
            tracing::debug!(id, "next: quiz");
            Ok(NextAction::ShowQuiz {
                word: store.get(id)?.clone(),
            })
        }
    }
}
