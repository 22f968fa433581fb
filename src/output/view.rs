//! Board and stats views

use crate::core::{Board, Feedback, LetterTag, MAX_ATTEMPTS, Stats, WORD_LENGTH, Word};

/// One board cell, ready to draw
///
/// `letter` is `None` for an empty placeholder; `tag` is set only on rows
/// that have been scored against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub tag: Option<LetterTag>,
}

/// Build the full board view
///
/// Rows below `completed_rows` are recolored with the same duplicate-aware
/// scoring used when the guess was submitted, so a redraw can never disagree
/// with the evaluation at submission time. The row being typed and everything
/// below it
/// render as plain letters or blanks.
#[must_use]
pub fn board_rows(
    board: &Board,
    secret: &Word,
    completed_rows: usize,
) -> Vec<[CellView; WORD_LENGTH]> {
    (0..MAX_ATTEMPTS)
        .map(|row| {
            let feedback = if row < completed_rows {
                board.row_word(row).ok().map(|word| Feedback::score(&word, secret))
            } else {
                None
            };

            std::array::from_fn(|col| CellView {
                letter: board.cell(row, col).map(char::from),
                tag: feedback.map(|fb| fb.tag(col)),
            })
        })
        .collect()
}

/// Message appended under the board after a win
///
/// `attempts` is the number of guess rows used, 1-based.
#[must_use]
pub fn victory_message(attempts: usize) -> String {
    let noun = if attempts == 1 { "attempt" } else { "attempts" };
    format!("Congratulations, you've won in {attempts} {noun}!")
}

/// Message appended under the board after a loss
#[must_use]
pub fn defeat_message(secret: &Word) -> String {
    format!(
        "Sorry, you're out of attempts. The correct answer was {}.",
        secret.display()
    )
}

/// The stats screen, one entry per terminal line
#[must_use]
pub fn stats_lines(stats: &Stats) -> Vec<String> {
    let mut lines = Vec::with_capacity(5 + MAX_ATTEMPTS);

    lines.push(format!("Played: {}", stats.total_played()));
    match stats.win_percentage() {
        Some(pct) => lines.push(format!("Win %: {pct}")),
        None => lines.push("Win %: N/A".to_string()),
    }
    lines.push(format!("Current Streak: {}", stats.current_streak));
    lines.push(format!("Max Streak: {}", stats.max_streak));
    lines.push("Guess Distribution".to_string());

    for (attempt, count) in stats.distribution.iter().enumerate() {
        lines.push(format!(" {}: {count}", attempt + 1));
    }

    lines
}
