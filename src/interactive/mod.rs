//! Blocking terminal event loop
//!
//! Single-threaded: read one key, apply it to the session, repaint in place,
//! block again. The board stays in the normal screen buffer (no alternate
//! screen); repaints move the cursor back over the previous frame.

mod terminal;

pub use terminal::{Painter, RawModeGuard};

use crate::core::GameStatus;
use crate::game::{Effect, Key, Screen, Session};
use crate::output::{board_rows, defeat_message, stats_lines, victory_message};
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;

/// Run the game loop until the player quits
///
/// Raw mode is held by a guard for the whole loop and restored on every exit
/// path, early `?` returns included.
///
/// # Errors
/// Returns an error if terminal configuration fails or a save after an
/// accepted guess fails. Input read errors are not errors: they become a
/// forced quit.
pub fn run(session: &mut Session<'_>) -> io::Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut painter = Painter::new();

    painter.line("Welcome to Wordle")?;
    painter.line(&format!("Today is: {}", Local::now().format("%B %-d, %Y")))?;
    painter.menu(session.screen())?;
    painter.blank_line()?;
    let mut drawn = render(&mut painter, session)?;
    painter.flush()?;

    loop {
        // A failed read is a forced quit, not a crash; the guard still
        // restores the terminal.
        let key = match next_key() {
            Ok(key) => key,
            Err(_) => Key::Quit,
        };

        match session.apply(key)? {
            Effect::None => {}
            Effect::Redraw => {
                painter.move_up(drawn)?;
                drawn = render(&mut painter, session)?;
                painter.flush()?;
            }
            Effect::SwitchScreen { .. } => {
                painter.clear_rows(drawn)?;
                // Menu sits two lines above the screen area
                painter.move_up(2)?;
                painter.menu(session.screen())?;
                painter.blank_line()?;
                drawn = render(&mut painter, session)?;
                painter.flush()?;
            }
            Effect::Exit => break,
        }
    }

    Ok(())
}

/// Block until a key press we recognize
fn next_key() -> io::Result<Key> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(decoded) = decode_key(key.code, key.modifiers)
        {
            return Ok(decoded);
        }
    }
}

fn decode_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('1') => Some(Key::ShowPlay),
        KeyCode::Char('2') => Some(Key::ShowStats),
        KeyCode::Char('3') => Some(Key::Quit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c)),
        KeyCode::Backspace => Some(Key::Delete),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

/// Paint the active screen; returns how many lines it occupies
fn render(painter: &mut Painter, session: &Session<'_>) -> io::Result<u16> {
    match session.screen() {
        Screen::Play => render_play(painter, session),
        Screen::Stats => render_stats(painter, session),
    }
}

fn render_play(painter: &mut Painter, session: &Session<'_>) -> io::Result<u16> {
    let rows = board_rows(session.board(), session.secret(), session.current_row());
    let mut lines = 0u16;

    for row in &rows {
        painter.board_row(row)?;
        lines += 1;
    }

    match session.status() {
        GameStatus::Won => {
            painter.line(&victory_message(session.current_row()))?;
            lines += 1;
        }
        GameStatus::Lost => {
            painter.line(&defeat_message(session.secret()))?;
            lines += 1;
        }
        _ => {}
    }

    Ok(lines)
}

fn render_stats(painter: &mut Painter, session: &Session<'_>) -> io::Result<u16> {
    let lines = stats_lines(session.stats());
    for line in &lines {
        painter.line(line)?;
    }
    Ok(lines.len() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_digits_decode_to_commands() {
        assert_eq!(
            decode_key(KeyCode::Char('1'), KeyModifiers::NONE),
            Some(Key::ShowPlay)
        );
        assert_eq!(
            decode_key(KeyCode::Char('2'), KeyModifiers::NONE),
            Some(Key::ShowStats)
        );
        assert_eq!(
            decode_key(KeyCode::Char('3'), KeyModifiers::NONE),
            Some(Key::Quit)
        );
    }

    #[test]
    fn letters_and_editing_keys_decode() {
        assert_eq!(
            decode_key(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Key::Letter('a'))
        );
        assert_eq!(
            decode_key(KeyCode::Char('Z'), KeyModifiers::SHIFT),
            Some(Key::Letter('Z'))
        );
        assert_eq!(
            decode_key(KeyCode::Backspace, KeyModifiers::NONE),
            Some(Key::Delete)
        );
        assert_eq!(
            decode_key(KeyCode::Enter, KeyModifiers::NONE),
            Some(Key::Enter)
        );
    }

    #[test]
    fn ctrl_c_is_quit() {
        assert_eq!(
            decode_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::Quit)
        );
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        assert_eq!(decode_key(KeyCode::Char('7'), KeyModifiers::NONE), None);
        assert_eq!(decode_key(KeyCode::Esc, KeyModifiers::NONE), None);
        assert_eq!(decode_key(KeyCode::Tab, KeyModifiers::NONE), None);
    }
}
