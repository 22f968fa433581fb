//! Wordle CLI
//!
//! A daily word-guessing game for the terminal: six attempts at a secret
//! five-letter word chosen from the calendar date, with per-letter feedback,
//! persistent streaks, and a guess-distribution table.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{Feedback, Word};
//!
//! let secret = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and word-of-day selection
pub mod wordlists;

// Durable user record
pub mod storage;

// Pure view construction
pub mod output;

// Terminal event loop
pub mod interactive;

// Command implementations
pub mod commands;
