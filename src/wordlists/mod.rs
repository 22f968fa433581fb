//! Word lists and the daily dictionary
//!
//! The answer pool and extra guess pool are compiled into the binary; the
//! `Dictionary` wraps them with word-of-day selection and guess validation.

mod dictionary;
mod embedded;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA_GUESSES, EXTRA_GUESSES_COUNT};
