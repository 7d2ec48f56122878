//! Environment configuration.

use anyhow::{Context, Result};
use drill_core::{parse_word_list, DrillSettings, WordEntry};
use std::path::PathBuf;

pub const WORDS_VAR: &str = "WORD_DRILL_WORDS";
pub const FEEDBACK_MS_VAR: &str = "WORD_DRILL_FEEDBACK_MS";
pub const SEED_VAR: &str = "WORD_DRILL_SEED";

/// Runtime configuration for the terminal drill.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Word-list file. The built-in list is used when unset.
    pub word_list: Option<PathBuf>,
    pub settings: DrillSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = DrillSettings::default();

        if let Some(value) = get(FEEDBACK_MS_VAR) {
            settings.feedback_delay_ms = value
                .trim()
                .parse()
                .with_context(|| format!("{FEEDBACK_MS_VAR} must be milliseconds, got {value:?}"))?;
        }
        if let Some(value) = get(SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {value:?}"))?;
            settings.seed = Some(seed);
        }

        Ok(Self {
            word_list: get(WORDS_VAR).map(PathBuf::from),
            settings,
        })
    }

    /// Read and parse the configured word list.
    pub fn load_words(&self) -> Result<Vec<WordEntry>> {
        let Some(path) = &self.word_list else {
            return Ok(builtin_words());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        let entries = parse_word_list(&content)
            .with_context(|| format!("parsing word list {}", path.display()))?;
        tracing::info!(path = %path.display(), words = entries.len(), "word list loaded");
        Ok(entries)
    }
}

/// Word list used when no file is configured.
pub fn builtin_words() -> Vec<WordEntry> {
    vec![
        WordEntry::new(1, "apple", "사과"),
        WordEntry::new(2, "banana", "바나나"),
        WordEntry::new(3, "cherry", "체리"),
        WordEntry::new(4, "orange", "오렌지"),
        WordEntry::new(5, "grape", "포도"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.word_list, None);
        assert_eq!(config.settings, DrillSettings::default());
        assert_eq!(config.load_words().unwrap(), builtin_words());
    }

    #[test]
    fn reads_env_values() {
        let config = Config::from_lookup(lookup(&[
            (WORDS_VAR, "words.txt"),
            (FEEDBACK_MS_VAR, "250"),
            (SEED_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(config.word_list, Some(PathBuf::from("words.txt")));
        assert_eq!(config.settings.feedback_delay_ms, 250);
        assert_eq!(config.settings.seed, Some(42));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(Config::from_lookup(lookup(&[(FEEDBACK_MS_VAR, "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[(SEED_VAR, "-1")])).is_err());
    }

    #[test]
    fn sample_word_list_parses() {
        let config = Config {
            word_list: Some(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/words.txt"))),
            ..Config::default()
        };
        assert_eq!(config.load_words().unwrap(), builtin_words());
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = Config {
            word_list: Some(PathBuf::from("/nonexistent/words.txt")),
            ..Config::default()
        };
        let err = config.load_words().unwrap_err();
        assert!(err.to_string().contains("reading word list"));
    }
}
