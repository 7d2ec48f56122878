//! Multiple-choice option generation for quiz screens.

use crate::error::{DrillError, Result};
use crate::types::{Word, WordId, OPTION_COUNT, WRONG_OPTION_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Build the shuffled options for `target`: its meaning plus three wrong ones.
///
/// Wrong options are distinct meanings of the other words in `all_words`.
/// When the pool has fewer than three, `wrong-answer-{n}` placeholders fill the
/// gap. Fails with `InsufficientOptions` when no other word exists at all.
pub fn build_options<R>(target: &Word, all_words: &[Word], rng: &mut R) -> Result<Vec<String>>
where
    R: Rng + ?Sized,
{
    let others: Vec<&Word> = all_words.iter().filter(|w| w.id != target.id).collect();
    if others.is_empty() {
        return Err(DrillError::InsufficientOptions { available: 1 });
    }

    let mut seen = HashSet::new();
    let mut wrong: Vec<String> = others
        .iter()
        .map(|w| w.meaning.as_str())
        .filter(|m| *m != target.meaning && seen.insert(*m))
        .map(str::to_string)
        .collect();
    wrong.shuffle(rng);
    wrong.truncate(WRONG_OPTION_COUNT);

    let mut n = 1;
    while wrong.len() < WRONG_OPTION_COUNT {
        let placeholder = format!("wrong-answer-{n}");
        n += 1;
        if placeholder != target.meaning && !wrong.contains(&placeholder) {
            wrong.push(placeholder);
        }
    }

    let mut options = wrong;
    options.push(target.meaning.clone());
    if options.len() < OPTION_COUNT {
        return Err(DrillError::InsufficientOptions {
            available: options.len(),
        });
    }
    options.shuffle(rng);
    Ok(options)
}

/// A ready-to-render quiz screen.
///
/// Only built by [`QuizCard::new`], so the correct index always points into
/// `options`. Serialize-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizCard {
    pub word_id: WordId,
    pub prompt: String,
    pub options: Vec<String>,
    /// Mastery count at the time the card was built.
    pub mastery_count: u8,
    correct_index: usize,
}

impl QuizCard {
    pub fn new<R>(target: &Word, all_words: &[Word], rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let options = build_options(target, all_words, rng)?;
        let correct_index = options
            .iter()
            .position(|o| *o == target.meaning)
            .ok_or(DrillError::InsufficientOptions {
                available: options.len(),
            })?;

        Ok(Self {
            word_id: target.id,
            prompt: target.text.clone(),
            options,
            mastery_count: target.mastery_count,
            correct_index,
        })
    }

    /// Whether the option at `choice` is the word's meaning.
    /// Out-of-range choices are never correct.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}
