//! Parser for word-list files.
//!
//! # Format
//! ```text
//! ID: 1
//! W: apple
//! M: 사과
//!
//! ID: 2
//! W: banana
//! M: 바나나
//! ```
//!
//! Each entry starts at its `ID:` line and ends at the next blank line. Every
//! entry needs all three fields, each exactly once. Other lines are ignored.

use crate::error::ParseError;
use crate::types::{WordEntry, WordId};
use std::collections::HashSet;

/// Parse word-list content into entries, in file order.
pub fn parse_word_list(content: &str) -> Result<Vec<WordEntry>, ParseError> {
    let mut parser = Parser::default();
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    parser.finish()
}

struct EntryBuilder {
    id: Option<WordId>,
    text: Option<String>,
    meaning: Option<String>,
    start_line: usize,
}

impl EntryBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            id: None,
            text: None,
            meaning: None,
            start_line,
        }
    }

    fn build(self) -> Result<WordEntry, ParseError> {
        let line = self.start_line;
        Ok(WordEntry {
            id: self.id.ok_or(ParseError::MissingId { line })?,
            text: self.text.ok_or(ParseError::MissingText { line })?,
            meaning: self.meaning.ok_or(ParseError::MissingMeaning { line })?,
        })
    }
}

#[derive(Default)]
struct Parser {
    current: Option<EntryBuilder>,
    entries: Vec<WordEntry>,
    seen_ids: HashSet<WordId>,
}

impl Parser {
    fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), ParseError> {
        match LineType::parse(line) {
            LineType::Id(value) => {
                self.flush()?;
                let id = value.parse::<WordId>().map_err(|_| ParseError::InvalidId {
                    line: line_num,
                    value: value.to_string(),
                })?;
                if !self.seen_ids.insert(id) {
                    return Err(ParseError::DuplicateId { id, line: line_num });
                }
                let mut entry = EntryBuilder::new(line_num);
                entry.id = Some(id);
                self.current = Some(entry);
            }
            LineType::Word(text) => {
                let entry = self.current.get_or_insert_with(|| EntryBuilder::new(line_num));
                if entry.text.is_some() {
                    return Err(ParseError::RepeatedField { field: "W", line: line_num });
                }
                entry.text = Some(text.to_string());
            }
            LineType::Meaning(text) => {
                let entry = self.current.get_or_insert_with(|| EntryBuilder::new(line_num));
                if entry.meaning.is_some() {
                    return Err(ParseError::RepeatedField { field: "M", line: line_num });
                }
                entry.meaning = Some(text.to_string());
            }
            LineType::Empty => self.flush()?,
            LineType::Other => {}
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ParseError> {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry.build()?);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<WordEntry>, ParseError> {
        self.flush()?;
        Ok(self.entries)
    }
}

enum LineType<'a> {
    Id(&'a str),
    Word(&'a str),
    Meaning(&'a str),
    Empty,
    Other,
}

impl<'a> LineType<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if let Some(rest) = trimmed.strip_prefix("ID:") {
            Self::Id(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("W:") {
            Self::Word(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("M:") {
            Self::Meaning(rest.trim())
        } else {
            Self::Other
        }
    }
}
