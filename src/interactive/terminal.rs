//! Raw-mode lifetime and escape-sequence emission
//!
//! The guard owns raw mode: acquired once at startup and released in `Drop`,
//! so the terminal is restored on every exit path, including panics.
//! The painter batches queued commands into a buffered writer and flushes
//! once per render pass.

use crate::core::LetterTag;
use crate::game::Screen;
use crate::output::CellView;
use crossterm::{
    cursor::MoveUp,
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, BufWriter, Stdout, Write};

/// Scoped raw-mode handle
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Put the terminal into raw mode
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be configured; fatal at
    /// startup.
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

const fn tag_color(tag: LetterTag) -> Color {
    match tag {
        LetterTag::Correct => Color::Green,
        LetterTag::Present => Color::Yellow,
        LetterTag::Absent => Color::Red,
    }
}

/// Buffered escape-sequence writer
pub struct Painter {
    out: BufWriter<Stdout>,
}

impl Painter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }

    /// Write a line; raw mode needs the explicit carriage return
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}\r\n")
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// Draw one board row of `[X]` cells with their feedback colors
    pub fn board_row(&mut self, cells: &[CellView]) -> io::Result<()> {
        for cell in cells {
            match (cell.letter, cell.tag) {
                (None, _) => write!(self.out, " [ ]")?,
                (Some(letter), None) => write!(self.out, " [{letter}]")?,
                (Some(letter), Some(tag)) => {
                    queue!(self.out, SetForegroundColor(tag_color(tag)))?;
                    write!(self.out, " [{letter}]")?;
                    queue!(self.out, ResetColor)?;
                }
            }
        }
        write!(self.out, "\r\n")
    }

    /// The menu line, with the active screen underlined
    pub fn menu(&mut self, active: Screen) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::CurrentLine))?;
        write!(self.out, "Menu {{ 1: ")?;
        self.menu_entry("Play", active == Screen::Play)?;
        write!(self.out, ", 2: ")?;
        self.menu_entry("Stats", active == Screen::Stats)?;
        write!(self.out, ", 3: Quit }}\r\n")
    }

    fn menu_entry(&mut self, label: &str, active: bool) -> io::Result<()> {
        if active {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
            write!(self.out, "{label}")?;
            queue!(self.out, SetAttribute(Attribute::NoUnderline))
        } else {
            write!(self.out, "{label}")
        }
    }

    pub fn move_up(&mut self, rows: u16) -> io::Result<()> {
        if rows > 0 {
            queue!(self.out, MoveUp(rows))?;
        }
        Ok(())
    }

    /// Erase the last `rows` lines and leave the cursor where they began
    pub fn clear_rows(&mut self, rows: u16) -> io::Result<()> {
        self.move_up(rows)?;
        for _ in 0..rows {
            queue!(self.out, Clear(ClearType::CurrentLine))?;
            write!(self.out, "\r\n")?;
        }
        self.move_up(rows)
    }

    /// Push everything queued this render pass to the terminal
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}
