//! The guess board
//!
//! A fixed `MAX_ATTEMPTS x WORD_LENGTH` grid of cells, each empty or an
//! uppercase ASCII letter. Cells fill left to right within a row; completed
//! rows sit above the row being typed.

use super::{MAX_ATTEMPTS, WORD_LENGTH, Word, WordError};

/// The guess grid for one day's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<u8>; WORD_LENGTH]; MAX_ATTEMPTS],
}

impl Board {
    /// Cell contents: `None` when empty, else an uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    /// Place a letter, normalized to uppercase
    pub const fn set(&mut self, row: usize, col: usize, letter: u8) {
        self.cells[row][col] = Some(letter.to_ascii_uppercase());
    }

    /// Empty a cell
    pub const fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// True when every cell in the row holds a letter
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(Option::is_some)
    }

    /// First row with no letters at all, or `MAX_ATTEMPTS` if the board is full
    ///
    /// This is the derived resume point after loading a saved game: rows above
    /// it are complete guesses.
    #[must_use]
    pub fn next_row(&self) -> usize {
        self.cells
            .iter()
            .position(|row| row.iter().all(Option::is_none))
            .unwrap_or(MAX_ATTEMPTS)
    }

    /// Assemble a row into a validated `Word`
    ///
    /// # Errors
    /// An incomplete row comes out shorter than `WORD_LENGTH` and fails
    /// validation, so partial rows are rejected the same way misspelled
    /// ones are.
    pub fn row_word(&self, row: usize) -> Result<Word, WordError> {
        let letters: String = self.cells[row]
            .iter()
            .filter_map(|cell| cell.map(char::from))
            .collect();
        Word::new(letters)
    }
}
