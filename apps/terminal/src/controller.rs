//! Screen state machine driving a drill session.
//!
//! The controller only talks to the core through the session API. It owns the
//! answer latch: once an interaction is accepted, further input is ignored
//! until the next screen is shown.

use drill_core::{DrillError, DrillSession, NextAction, QuizCard, Word, WordId};
use rand::Rng;
use std::time::Duration;

/// What the terminal currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Idle,
    Study { word: Word, forced: bool },
    Quiz { card: QuizCard },
    Feedback { word: Word, correct: bool },
    Complete,
    Failed { reason: String },
}

/// User input, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Advance,
    Choose(usize),
    Quit,
}

/// What the driver has to do after a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// A new screen is up; render it.
    Show,
    /// Render the feedback screen, then report back after the delay.
    AwaitFeedback(Duration),
    Exit,
}

pub struct Controller<R> {
    session: DrillSession<R>,
    screen: Screen,
    is_answerable: bool,
    restudy: Option<WordId>,
}

impl<R: Rng> Controller<R> {
    pub fn new(session: DrillSession<R>) -> Self {
        Self {
            session,
            screen: Screen::Idle,
            is_answerable: false,
            restudy: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> &DrillSession<R> {
        &self.session
    }

    pub fn is_answerable(&self) -> bool {
        self.is_answerable
    }

    /// Show the first screen.
    pub fn start(&mut self) -> Transition {
        self.advance(None)
    }

    pub fn handle(&mut self, input: Input) -> Transition {
        if input == Input::Quit {
            return Transition::Exit;
        }
        if !self.is_answerable {
            tracing::trace!(?input, "input while busy ignored");
            return Transition::Ignored;
        }

        match (&self.screen, input) {
            (Screen::Study { .. }, Input::Advance) => {
                self.is_answerable = false;
                self.advance(None)
            }
            (Screen::Quiz { card }, Input::Choose(choice)) if choice < card.options.len() => {
                self.is_answerable = false;
                let card = card.clone();
                self.answer(&card, choice)
            }
            (Screen::Complete | Screen::Failed { .. }, Input::Advance) => Transition::Exit,
            _ => Transition::Ignored,
        }
    }

    /// The feedback pause is over.
    pub fn feedback_elapsed(&mut self) -> Transition {
        if !matches!(self.screen, Screen::Feedback { .. }) {
            return Transition::Ignored;
        }
        let force = self.restudy.take();
        self.advance(force)
    }

    fn answer(&mut self, card: &QuizCard, choice: usize) -> Transition {
        match self.session.answer(card, choice) {
            Ok(outcome) => {
                self.restudy = outcome.restudy();
                self.screen = Screen::Feedback {
                    word: outcome.word,
                    correct: outcome.correct,
                };
                let delay = Duration::from_millis(self.session.settings().feedback_delay_ms);
                Transition::AwaitFeedback(delay)
            }
            Err(err) => self.fail(err),
        }
    }

    fn advance(&mut self, force: Option<WordId>) -> Transition {
        let forced = force.is_some();
        let screen = match self.session.plan(force) {
            Ok(NextAction::ShowStudy { word }) => Screen::Study { word, forced },
            Ok(NextAction::ShowQuiz { word }) => match self.session.quiz_card(word.id) {
                Ok(card) => Screen::Quiz { card },
                Err(err @ DrillError::InsufficientOptions { .. }) => {
                    tracing::warn!(id = word.id, %err, "quiz disabled");
                    Screen::Failed {
                        reason: format!("quiz for {:?} unavailable: {err}", word.text),
                    }
                }
                Err(err) => return self.fail(err),
            },
            Ok(NextAction::SessionComplete) => Screen::Complete,
            Ok(NextAction::PlannerError) => {
                let err = NextAction::PlannerError
                    .into_result(self.session.store())
                    .err();
                Screen::Failed {
                    reason: err.map_or_else(|| "planner error".to_string(), |e| e.to_string()),
                }
            }
            Err(err) => return self.fail(err),
        };
        self.show(screen)
    }

    fn fail(&mut self, err: DrillError) -> Transition {
        tracing::error!(%err, "screen aborted");
        self.show(Screen::Failed {
            reason: err.to_string(),
        })
    }

    fn show(&mut self, screen: Screen) -> Transition {
        self.screen = screen;
        self.is_answerable = true;
        Transition::Show
    }
}
