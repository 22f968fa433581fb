//! Pure view construction
//!
//! Functions from game state to display instructions. Nothing here touches
//! the terminal or mutates state; the interactive layer turns these views
//! into escape sequences.

mod view;

pub use view::{CellView, board_rows, defeat_message, stats_lines, victory_message};
