//! The per-run game session
//!
//! The session is the only mutable game state in the process: no globals,
//! just this object threaded through the event loop. Input arrives as one
//! decoded `Key` per call; every game-rule transition lives in `apply`.

use crate::core::{Board, Feedback, GameStatus, MAX_ATTEMPTS, Stats, WORD_LENGTH, Word};
use crate::storage::{Profile, RecordError, UserData};
use crate::wordlists::Dictionary;
use std::io;

/// One decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Delete,
    Enter,
    Quit,
    ShowPlay,
    ShowStats,
}

/// Which view is on screen
///
/// The set is closed: exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Play,
    Stats,
}

/// What the event loop should do after a key is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Input was ignored; the screen is already correct
    None,
    /// Repaint the active screen in place
    Redraw,
    /// The active screen changed; clear the old one and paint the new
    SwitchScreen { from: Screen },
    /// Quit was requested; the loop terminates, nothing else is written
    Exit,
}

/// Game state for today's word
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    profile: Profile,
    board: Board,
    status: GameStatus,
    stats: Stats,
    word_index: usize,
    secret: Word,
    row: usize,
    col: usize,
    screen: Screen,
}

impl<'a> Session<'a> {
    /// Start (or resume) today's game
    ///
    /// Loads the durable record reconciled against today's word index. A
    /// corrupt record is substituted with defaults and returned alongside
    /// the session so the caller can report it once.
    ///
    /// # Errors
    /// Returns an error only for real I/O failures while reading the record.
    pub fn start(
        dictionary: &'a Dictionary,
        profile: Profile,
    ) -> io::Result<(Self, Option<RecordError>)> {
        let index = dictionary.word_of_day_index();
        Self::start_at_index(dictionary, profile, index)
    }

    /// Start a session for a fixed answer-pool index
    ///
    /// Used by tests and anywhere the calendar lookup must be pinned.
    ///
    /// # Errors
    /// Same as [`Session::start`].
    pub fn start_at_index(
        dictionary: &'a Dictionary,
        profile: Profile,
        word_index: usize,
    ) -> io::Result<(Self, Option<RecordError>)> {
        let loaded = profile.load(word_index)?;
        let corruption = loaded.corruption;
        let UserData {
            stats,
            status,
            board,
            ..
        } = loaded.data;

        let session = Self {
            dictionary,
            profile,
            board,
            status,
            stats,
            word_index,
            secret: dictionary.word_at(word_index).clone(),
            row: board.next_row(),
            col: 0,
            screen: Screen::Play,
        };
        Ok((session, corruption))
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Returns an error if an accepted guess row cannot be persisted.
    pub fn apply(&mut self, key: Key) -> io::Result<Effect> {
        match key {
            Key::Quit => {
                self.status = GameStatus::Exiting;
                Ok(Effect::Exit)
            }
            Key::ShowPlay => Ok(self.switch_to(Screen::Play)),
            Key::ShowStats => Ok(self.switch_to(Screen::Stats)),
            // On the stats screen, and once the day is decided, everything
            // but quit/switch is ignored.
            _ if self.screen == Screen::Stats => Ok(Effect::None),
            _ if self.status.is_over() => Ok(Effect::None),
            // A restored record can claim Playing with a full board; there
            // is no row left to type into.
            _ if self.row >= MAX_ATTEMPTS => Ok(Effect::None),
            Key::Letter(letter) => Ok(self.type_letter(letter)),
            Key::Delete => Ok(self.delete_letter()),
            Key::Enter => self.submit_row(),
        }
    }

    fn switch_to(&mut self, screen: Screen) -> Effect {
        if self.screen == screen {
            // Re-selecting the active screen must not flicker
            return Effect::None;
        }
        let from = self.screen;
        self.screen = screen;
        Effect::SwitchScreen { from }
    }

    fn type_letter(&mut self, letter: char) -> Effect {
        if !letter.is_ascii_alphabetic() || self.col >= WORD_LENGTH {
            return Effect::None;
        }
        self.board.set(self.row, self.col, letter as u8);
        self.col += 1;
        Effect::Redraw
    }

    fn delete_letter(&mut self) -> Effect {
        if self.col == 0 {
            return Effect::None;
        }
        self.col -= 1;
        self.board.clear(self.row, self.col);
        Effect::Redraw
    }

    fn submit_row(&mut self) -> io::Result<Effect> {
        // An incomplete row assembles into a short word and fails validation
        // exactly like a misspelled one.
        let Ok(word) = self.board.row_word(self.row) else {
            return Ok(Effect::None);
        };
        if !self.dictionary.is_valid_guess(&word) {
            return Ok(Effect::None);
        }

        if Feedback::score(&word, &self.secret).is_win() {
            self.stats.record_win(self.row);
            self.status = GameStatus::Won;
        } else if self.row == MAX_ATTEMPTS - 1 {
            self.stats.record_loss();
            self.status = GameStatus::Lost;
        }

        self.row += 1;
        self.col = 0;
        self.persist()?;
        Ok(Effect::Redraw)
    }

    fn persist(&self) -> io::Result<()> {
        self.profile.save(&UserData {
            stats: self.stats,
            word_index: self.word_index,
            status: self.status,
            board: self.board,
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The word being guessed today
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Row currently being typed; once won or lost, one past the final guess
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }
}
