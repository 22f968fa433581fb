//! The default command: play today's word
//!
//! Startup order matters: vocabulary and user data must both be ready before
//! the terminal is reconfigured, so a fatal error never leaves the terminal
//! in raw mode with nothing running.

use crate::game::Session;
use crate::interactive;
use crate::storage::Profile;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;

/// Load everything, then hand control to the event loop
///
/// # Errors
/// Returns an error for any fatal startup failure: malformed bundled word
/// lists, an unusable data directory, or terminal configuration failure.
pub fn run_play() -> Result<()> {
    let dictionary = Dictionary::from_embedded().context("Failed to load word lists")?;
    let profile = Profile::open().context("Failed to open user data directory")?;

    let (mut session, corruption) =
        Session::start(&dictionary, profile).context("Failed to read user data")?;

    if let Some(err) = corruption {
        println!(
            "{} {err}",
            "User data was corrupt and has been reset:".yellow()
        );
    }

    interactive::run(&mut session).context("Game terminated unexpectedly")?;
    Ok(())
}
