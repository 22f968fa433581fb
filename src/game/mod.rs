//! Game state machine
//!
//! One `Session` per process run: it owns the board, status, stats, and
//! cursor, consumes one key at a time, and persists after every accepted
//! guess row.

mod session;

pub use session::{Effect, Key, Screen, Session};
