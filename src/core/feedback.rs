//! Per-letter guess feedback
//!
//! Feedback tags every position of a guess against the secret word:
//! - `Correct` — right letter, right position (green)
//! - `Present` — letter is in the secret elsewhere (yellow)
//! - `Absent`  — letter not in the secret, or all copies already accounted for (red)
//!
//! Scoring is duplicate-aware: a letter can be tagged `Present` at most as many
//! times as it appears in the secret, after exact matches are taken out.

use super::{WORD_LENGTH, Word};

/// Color class for a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterTag {
    Correct,
    Present,
    Absent,
}

/// Feedback for one complete guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterTag; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's
    ///    per-letter pool.
    /// 2. Second pass: mark remaining positions `Present` while the pool for
    ///    that letter is non-empty, else `Absent`.
    ///
    /// The same function backs both guess evaluation and board redraw, so a
    /// row always recolors exactly as it was first scored.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Feedback, LetterTag, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let fb = Feedback::score(&guess, &secret);
    ///
    /// // C R A N E -> absent, absent, green, absent, green
    /// assert_eq!(fb.tag(2), LetterTag::Correct);
    /// assert_eq!(fb.tag(4), LetterTag::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut tags = [LetterTag::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact matches consume from the pool
        // Allow: index needed to compare guess[i] with secret[i] and set tags[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == secret.chars()[i] {
                tags[i] = LetterTag::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, bounded by what the pool has left
        // Allow: index needed to check tags[i] before overwriting it
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if tags[i] == LetterTag::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    tags[i] = LetterTag::Present;
                    *count -= 1;
                }
            }
        }

        Self(tags)
    }

    /// Tag at a board column
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn tag(self, position: usize) -> LetterTag {
        self.0[position]
    }

    /// All five tags, in board order
    #[inline]
    #[must_use]
    pub const fn tags(self) -> [LetterTag; WORD_LENGTH] {
        self.0
    }

    /// True when every position matched exactly
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&t| t == LetterTag::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterTag::{Absent, Correct, Present};

    fn score(guess: &str, secret: &str) -> [LetterTag; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::score(&guess, &secret).tags()
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn all_correct_is_win() {
        let word = Word::new("crane").unwrap();
        let fb = Feedback::score(&word, &word);
        assert_eq!(fb.tags(), [Correct; 5]);
        assert!(fb.is_win());
    }

    #[test]
    fn duplicate_letters_speed_vs_erase() {
        // ERASE has two E's: both E's in SPEED go yellow, S goes yellow,
        // P and D are absent.
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_llama_vs_alloy() {
        // L at 1 is green and consumes one of ALLOY's two L's; L at 0 takes
        // the other as yellow. First A is yellow; the second A over-counts
        // ALLOY's single A and falls back to absent.
        assert_eq!(
            score("llama", "alloy"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: second O is green at position 3, first O yellow,
        // R yellow, B and T absent.
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn classic_crane_vs_slate() {
        // SLATE has no C, R, or N; A and E line up exactly.
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn win_self_score_for_duplicates() {
        for word in ["crane", "slate", "aaaaa", "llama"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::score(&w, &w).is_win());
        }
    }
}
