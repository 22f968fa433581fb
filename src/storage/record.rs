//! Durable record codec
//!
//! The user record is three comma-separated lines:
//!
//! 1. stats — wins, losses, current streak, max streak, then the guess
//!    distribution (`MAX_ATTEMPTS` entries)
//! 2. game meta — word-of-day index, status code
//! 3. board — `MAX_ATTEMPTS x WORD_LENGTH` cell codes, row-major,
//!    0 for empty else the uppercase ASCII code
//!
//! Encode and decode are exact inverses. Field-count mismatches and
//! non-numeric fields both decode to a `RecordError`, which is distinct
//! from the record simply not existing.

use crate::core::{Board, GameStatus, MAX_ATTEMPTS, Stats, WORD_LENGTH};
use std::fmt;

/// Fields on the stats line
pub const STATS_FIELDS: usize = MAX_ATTEMPTS + 4;

/// Fields on the game-meta line
pub const META_FIELDS: usize = 2;

/// Fields on the board line
pub const BOARD_FIELDS: usize = MAX_ATTEMPTS * WORD_LENGTH;

/// Everything the durable record holds for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserData {
    pub stats: Stats,
    pub word_index: usize,
    pub status: GameStatus,
    pub board: Board,
}

/// Error type for a present-but-unusable record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MissingLine { line: usize },
    FieldCount { line: usize, expected: usize, found: usize },
    BadNumber { line: usize, value: String },
    BadStatus { code: i64 },
    BadCell { field: usize, code: i64 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLine { line } => write!(f, "Record is truncated at line {line}"),
            Self::FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {line} has {found} fields, expected {expected}"
            ),
            Self::BadNumber { line, value } => {
                write!(f, "Line {line} has non-numeric field '{value}'")
            }
            Self::BadStatus { code } => write!(f, "Unknown game status code {code}"),
            Self::BadCell { field, code } => {
                write!(f, "Board field {field} has invalid cell code {code}")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Serialize a record to its three-line text form
#[must_use]
pub fn encode(data: &UserData) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(STATS_FIELDS);
    fields.push(data.stats.wins.to_string());
    fields.push(data.stats.losses.to_string());
    fields.push(data.stats.current_streak.to_string());
    fields.push(data.stats.max_streak.to_string());
    for count in data.stats.distribution {
        fields.push(count.to_string());
    }
    let stats_line = fields.join(",");

    let meta_line = format!("{},{}", data.word_index, data.status.code());

    let mut cells: Vec<String> = Vec::with_capacity(BOARD_FIELDS);
    for row in 0..MAX_ATTEMPTS {
        for col in 0..WORD_LENGTH {
            let code = data.board.cell(row, col).map_or(0, i64::from);
            cells.push(code.to_string());
        }
    }
    let board_line = cells.join(",");

    format!("{stats_line}\n{meta_line}\n{board_line}\n")
}

/// Parse a record from its three-line text form
///
/// # Errors
/// Returns `RecordError` for a truncated record, a wrong field count on any
/// line, a non-numeric field, an unknown status code, or an out-of-range
/// board cell.
pub fn decode(text: &str) -> Result<UserData, RecordError> {
    let mut lines = text.lines();

    let stats_fields = parse_line(lines.next(), 1, STATS_FIELDS)?;
    let meta_fields = parse_line(lines.next(), 2, META_FIELDS)?;
    let board_fields = parse_line(lines.next(), 3, BOARD_FIELDS)?;

    let mut stats = Stats {
        wins: counter(stats_fields[0], 1)?,
        losses: counter(stats_fields[1], 1)?,
        current_streak: counter(stats_fields[2], 1)?,
        max_streak: counter(stats_fields[3], 1)?,
        ..Stats::default()
    };
    for (i, &value) in stats_fields[4..].iter().enumerate() {
        stats.distribution[i] = counter(value, 1)?;
    }

    let word_index = counter(meta_fields[0], 2)? as usize;
    let status = GameStatus::from_code(meta_fields[1])
        .ok_or(RecordError::BadStatus {
            code: meta_fields[1],
        })?;

    let mut board = Board::default();
    for (field, &code) in board_fields.iter().enumerate() {
        let row = field / WORD_LENGTH;
        let col = field % WORD_LENGTH;
        match u8::try_from(code) {
            Ok(0) => {}
            Ok(letter) if letter.is_ascii_uppercase() => board.set(row, col, letter),
            _ => return Err(RecordError::BadCell { field, code }),
        }
    }

    Ok(UserData {
        stats,
        word_index,
        status,
        board,
    })
}

fn parse_line(
    line: Option<&str>,
    number: usize,
    expected: usize,
) -> Result<Vec<i64>, RecordError> {
    let line = line.ok_or(RecordError::MissingLine { line: number })?;
    let raw: Vec<&str> = line.split(',').collect();

    if raw.len() != expected {
        return Err(RecordError::FieldCount {
            line: number,
            expected,
            found: raw.len(),
        });
    }

    raw.iter()
        .map(|field| {
            field.trim().parse::<i64>().map_err(|_| RecordError::BadNumber {
                line: number,
                value: (*field).to_string(),
            })
        })
        .collect()
}

fn counter(value: i64, line: usize) -> Result<u32, RecordError> {
    u32::try_from(value).map_err(|_| RecordError::BadNumber {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> UserData {
        let mut data = UserData {
            word_index: 42,
            status: GameStatus::Won,
            ..UserData::default()
        };
        data.stats.record_win(1);
        data.stats.record_win(2);
        data.stats.record_loss();
        for (col, letter) in b"CRANE".iter().enumerate() {
            data.board.set(0, col, *letter);
        }
        for (col, letter) in b"SLATE".iter().enumerate() {
            data.board.set(1, col, *letter);
        }
        data
    }

    #[test]
    fn round_trip_is_exact() {
        let data = sample_data();
        let decoded = decode(&encode(&data)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn round_trip_preserves_derived_next_row() {
        let data = sample_data();
        let decoded = decode(&encode(&data)).unwrap();
        assert_eq!(decoded.board.next_row(), 2);
    }

    #[test]
    fn default_round_trip() {
        let data = UserData::default();
        let decoded = decode(&encode(&data)).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.board.next_row(), 0);
    }

    #[test]
    fn truncated_record_is_corrupt() {
        assert_eq!(
            decode("1,2,3"),
            Err(RecordError::FieldCount {
                line: 1,
                expected: STATS_FIELDS,
                found: 3
            })
        );
        assert_eq!(
            decode(""),
            Err(RecordError::MissingLine { line: 1 })
        );
    }

    #[test]
    fn missing_board_line_is_corrupt() {
        let text = "0,0,0,0,0,0,0,0,0,0\n5,0\n";
        assert_eq!(decode(text), Err(RecordError::MissingLine { line: 3 }));
    }

    #[test]
    fn wrong_meta_field_count_is_corrupt() {
        let text = "0,0,0,0,0,0,0,0,0,0\n5,0,9\n0\n";
        assert_eq!(
            decode(text),
            Err(RecordError::FieldCount {
                line: 2,
                expected: META_FIELDS,
                found: 3
            })
        );
    }

    #[test]
    fn non_numeric_field_is_corrupt() {
        let text = "0,zero,0,0,0,0,0,0,0,0\n5,0\n0\n";
        assert!(matches!(
            decode(text),
            Err(RecordError::BadNumber { line: 1, .. })
        ));
    }

    #[test]
    fn negative_counter_is_corrupt() {
        let text = "-1,0,0,0,0,0,0,0,0,0\n5,0\n0\n";
        assert!(matches!(
            decode(text),
            Err(RecordError::BadNumber { line: 1, .. })
        ));
    }

    #[test]
    fn unknown_status_code_is_corrupt() {
        let data = UserData::default();
        let text = encode(&data).replacen("\n0,0\n", "\n0,7\n", 1);
        assert_eq!(decode(&text), Err(RecordError::BadStatus { code: 7 }));
    }

    #[test]
    fn out_of_range_cell_is_corrupt() {
        let mut text = String::from("0,0,0,0,0,0,0,0,0,0\n0,0\n");
        let mut cells = vec!["0"; BOARD_FIELDS];
        cells[3] = "999";
        text.push_str(&cells.join(","));
        text.push('\n');

        assert_eq!(
            decode(&text),
            Err(RecordError::BadCell { field: 3, code: 999 })
        );
    }
}
