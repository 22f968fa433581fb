//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod board;
mod feedback;
mod stats;
mod status;
mod word;

pub use board::Board;
pub use feedback::{Feedback, LetterTag};
pub use stats::Stats;
pub use status::GameStatus;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guess rows on the board
pub const MAX_ATTEMPTS: usize = 6;
