//! Plain-text rendering and input decoding.

use crate::controller::{Input, Screen};
use drill_core::{ProgressSummary, MASTERY_TARGET, MAX_STUDY_EXPOSURES};
use std::io::{self, Write};

/// Decode one input line. `None` for anything unrecognised.
pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim() {
        "" | "n" | "next" => Some(Input::Advance),
        "q" | "quit" => Some(Input::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .map(|n| Input::Choose(n - 1)),
    }
}

pub fn screen<W: Write>(out: &mut W, screen: &Screen, summary: &ProgressSummary) -> io::Result<()> {
    writeln!(out)?;
    match screen {
        Screen::Idle => {}
        Screen::Study { word, forced } => {
            if *forced {
                writeln!(out, "[review] once more:")?;
            } else {
                writeln!(
                    out,
                    "[study {}/{}]",
                    word.study_exposures, MAX_STUDY_EXPOSURES
                )?;
            }
            writeln!(out, "  {}  =  {}", word.text, word.meaning)?;
            writeln!(out, "(enter: next, q: quit)")?;
        }
        Screen::Quiz { card } => {
            writeln!(
                out,
                "[quiz] correct {}/{}   {}",
                card.mastery_count, MASTERY_TARGET, card.prompt
            )?;
            for (idx, option) in card.options.iter().enumerate() {
                writeln!(out, "  {}. {}", idx + 1, option)?;
            }
            writeln!(out, "(1-{}: answer, q: quit)", card.options.len())?;
        }
        Screen::Feedback { word, correct } => {
            let mark = if *correct { "O correct" } else { "X wrong" };
            writeln!(
                out,
                "{mark}: {} = {}   correct {}/{}",
                word.text, word.meaning, word.mastery_count, MASTERY_TARGET
            )?;
        }
        Screen::Complete => {
            writeln!(out, "All {} words mastered. Session complete!", summary.total)?;
        }
        Screen::Failed { reason } => {
            writeln!(out, "Session stopped: {reason}")?;
            writeln!(out, "(enter: exit)")?;
        }
    }
    if !matches!(screen, Screen::Complete | Screen::Idle) {
        writeln!(out, "-- mastered {}/{}", summary.mastered, summary.total)?;
    }
    out.flush()
}
