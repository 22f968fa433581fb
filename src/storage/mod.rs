//! Durable user record
//!
//! One flat file per user profile holds cumulative stats plus the current
//! day's board. The record is rewritten whole on every save; a half-written
//! file can never be read back as valid because the replacement is staged to
//! a temp file and renamed over the target.

mod record;

pub use record::{BOARD_FIELDS, META_FIELDS, RecordError, STATS_FIELDS, UserData, decode, encode};

use crate::core::{Board, GameStatus};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment override for the record's base directory
pub const DATA_DIR_ENV: &str = "WORDLE_CLI_DATA_DIR";

const APP_DIR: &str = "wordle_cli";
const RECORD_FILE: &str = "user_data.csv";
const STAGING_FILE: &str = "user_data.csv.tmp";

/// What came back from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGame {
    pub data: UserData,
    /// Present when the record existed but could not be parsed; the caller
    /// reports it and plays on with the substituted defaults in `data`.
    pub corruption: Option<RecordError>,
}

/// Handle to the on-disk user record
#[derive(Debug, Clone)]
pub struct Profile {
    dir: PathBuf,
}

impl Profile {
    /// Open the profile at the resolved data directory, creating it if needed
    ///
    /// The base is `$WORDLE_CLI_DATA_DIR` when set, else the platform data
    /// directory; the record lives in a `wordle_cli` subdirectory of it.
    ///
    /// # Errors
    /// Returns an error if no data directory can be resolved or the
    /// directory cannot be created. Both are fatal at startup.
    pub fn open() -> io::Result<Self> {
        let profile = Self::locate()?;
        fs::create_dir_all(&profile.dir)?;
        Ok(profile)
    }

    /// Resolve the profile directory without creating anything
    ///
    /// Used by `clean`, which must not create the directory it is about to
    /// delete.
    ///
    /// # Errors
    /// Returns an error if no data directory can be resolved.
    pub fn locate() -> io::Result<Self> {
        let base = resolve_base_dir()?;
        Ok(Self {
            dir: base.join(APP_DIR),
        })
    }

    /// Open a profile rooted at an explicit directory
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open_at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the record file
    #[must_use]
    pub fn record_path(&self) -> PathBuf {
        self.dir.join(RECORD_FILE)
    }

    /// Read the record and reconcile it with today's word index
    ///
    /// - Missing or empty file: a fresh game, not an error.
    /// - Parse failure: defaults plus the `RecordError` for reporting.
    /// - Stored index differs from `today_index`: the previous day's game is
    ///   abandoned — board and status reset, stats kept untouched.
    ///
    /// # Errors
    /// Only I/O failures other than the file being absent surface here.
    pub fn load(&self, today_index: usize) -> io::Result<LoadedGame> {
        let fresh = UserData {
            word_index: today_index,
            ..UserData::default()
        };

        let text = match fs::read_to_string(self.record_path()) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(LoadedGame {
                    data: fresh,
                    corruption: None,
                });
            }
            Err(err) => return Err(err),
        };

        if text.trim().is_empty() {
            return Ok(LoadedGame {
                data: fresh,
                corruption: None,
            });
        }

        match record::decode(&text) {
            Ok(data) if data.word_index == today_index => Ok(LoadedGame {
                data,
                corruption: None,
            }),
            Ok(stale) => Ok(LoadedGame {
                // Yesterday's unfinished board is dropped without counting
                // as a loss; lifetime stats carry over.
                data: UserData {
                    stats: stale.stats,
                    word_index: today_index,
                    status: GameStatus::default(),
                    board: Board::default(),
                },
                corruption: None,
            }),
            Err(err) => Ok(LoadedGame {
                data: fresh,
                corruption: Some(err),
            }),
        }
    }

    /// Replace the durable record with `data`
    ///
    /// The full encoding is written to a staging file in the same directory
    /// and renamed over the record, so readers see either the old record or
    /// the new one, never a partial write.
    ///
    /// # Errors
    /// Returns an error if the staging write or the rename fails.
    pub fn save(&self, data: &UserData) -> io::Result<()> {
        let staging = self.dir.join(STAGING_FILE);
        fs::write(&staging, record::encode(data))?;
        fs::rename(&staging, self.record_path())
    }

    /// Delete the record and its containing directory
    ///
    /// # Errors
    /// Returns an error if the directory exists but cannot be removed.
    pub fn clean(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }

    /// Directory holding the record
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn resolve_base_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir().ok_or_else(|| io::Error::other("No data directory for this platform"))
}
