//! Game status for the current word-of-day

use std::fmt;

/// Where the current day's game stands
///
/// `Won` and `Lost` are terminal for the day; `Exiting` terminates the
/// process, not the game, and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
    Exiting,
}

impl GameStatus {
    /// Stable numeric code used in the durable record
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Playing => 0,
            Self::Won => 1,
            Self::Lost => 2,
            Self::Exiting => 3,
        }
    }

    /// Decode a persisted status code
    ///
    /// `Exiting` is rejected: it is a process state, never a stored one.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Playing),
            1 => Some(Self::Won),
            2 => Some(Self::Lost),
            _ => None,
        }
    }

    /// True once the day's board is frozen
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Exiting => "exiting",
        };
        write!(f, "{name}")
    }
}
