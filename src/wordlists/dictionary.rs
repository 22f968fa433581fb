//! Daily word selection and guess validation

use super::{ANSWERS, EXTRA_GUESSES};
use crate::core::{Word, WordError};
use chrono::Utc;
use rustc_hash::FxHashSet;
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// The game's vocabulary
///
/// Holds the ordered answer pool (the word-of-day rotation) and the set of
/// all acceptable guesses. Built once at startup; a malformed list entry is
/// a fatal error, not something to retry.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    valid_guesses: FxHashSet<Word>,
}

/// Error type for vocabulary loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    EmptyAnswerPool,
    BadEntry { entry: String, source: WordError },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswerPool => write!(f, "Answer pool contains no words"),
            Self::BadEntry { entry, source } => {
                write!(f, "Bad word list entry '{entry}': {source}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary from explicit word lists
    ///
    /// # Errors
    /// Returns `DictionaryError` if the answer pool is empty or any entry
    /// in either list is not a valid five-letter word.
    pub fn new(answers: &[&str], extra_guesses: &[&str]) -> Result<Self, DictionaryError> {
        let answers: Vec<Word> = answers
            .iter()
            .map(|&entry| parse_entry(entry))
            .collect::<Result<_, _>>()?;

        if answers.is_empty() {
            return Err(DictionaryError::EmptyAnswerPool);
        }

        let mut valid_guesses: FxHashSet<Word> = answers.iter().cloned().collect();
        for &entry in extra_guesses {
            valid_guesses.insert(parse_entry(entry)?);
        }

        Ok(Self {
            answers,
            valid_guesses,
        })
    }

    /// Build the dictionary from the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError` if the bundled lists are malformed.
    pub fn from_embedded() -> Result<Self, DictionaryError> {
        Self::new(ANSWERS, EXTRA_GUESSES)
    }

    /// Number of words in the answer pool
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Today's index into the answer pool
    ///
    /// Stable for the whole UTC calendar day and reproducible across runs:
    /// whole days since the Unix epoch, modulo the pool size.
    #[must_use]
    pub fn word_of_day_index(&self) -> usize {
        self.index_for_day(Utc::now().timestamp().div_euclid(SECONDS_PER_DAY))
    }

    /// Index for an arbitrary day number (days since the Unix epoch)
    #[must_use]
    pub fn index_for_day(&self, days_since_epoch: i64) -> usize {
        days_since_epoch.rem_euclid(self.answers.len() as i64) as usize
    }

    /// The answer at a pool index
    ///
    /// # Panics
    /// Panics if `index >= answer_count()`; word-of-day indices are always
    /// in range by construction.
    #[must_use]
    pub fn word_at(&self, index: usize) -> &Word {
        &self.answers[index]
    }

    /// True if the word may be submitted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid_guesses.contains(word)
    }
}

fn parse_entry(entry: &str) -> Result<Word, DictionaryError> {
    Word::new(entry).map_err(|source| DictionaryError::BadEntry {
        entry: entry.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> Dictionary {
        Dictionary::new(&["crane", "slate", "alloy"], &["aback", "abbey"]).unwrap()
    }

    #[test]
    fn embedded_lists_parse() {
        let dict = Dictionary::from_embedded().unwrap();
        assert_eq!(dict.answer_count(), ANSWERS.len());
    }

    #[test]
    fn word_of_day_cycles_through_pool() {
        let dict = small_dictionary();

        assert_eq!(dict.index_for_day(0), 0);
        assert_eq!(dict.index_for_day(1), 1);
        assert_eq!(dict.index_for_day(2), 2);
        assert_eq!(dict.index_for_day(3), 0);
        assert_eq!(dict.index_for_day(7), 1);
    }

    #[test]
    fn word_of_day_is_deterministic() {
        let dict = small_dictionary();

        for day in [0, 19_000, 20_500] {
            assert_eq!(dict.index_for_day(day), dict.index_for_day(day));
        }

        // Repeated calls within the same process and day agree
        assert_eq!(dict.word_of_day_index(), dict.word_of_day_index());
    }

    #[test]
    fn word_at_follows_pool_order() {
        let dict = small_dictionary();
        assert_eq!(dict.word_at(0).text(), "crane");
        assert_eq!(dict.word_at(2).text(), "alloy");
    }

    #[test]
    fn guess_validity_spans_both_pools() {
        let dict = small_dictionary();

        assert!(dict.is_valid_guess(&Word::new("crane").unwrap()));
        assert!(dict.is_valid_guess(&Word::new("aback").unwrap()));
        assert!(!dict.is_valid_guess(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn empty_answer_pool_rejected() {
        assert!(matches!(
            Dictionary::new(&[], &["aback"]),
            Err(DictionaryError::EmptyAnswerPool)
        ));
    }

    #[test]
    fn malformed_entry_rejected() {
        let result = Dictionary::new(&["crane", "toolong"], &[]);
        assert!(matches!(result, Err(DictionaryError::BadEntry { .. })));
    }
}
