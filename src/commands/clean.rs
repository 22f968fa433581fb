//! Destructive reset of the user record
//!
//! Deletes the record file and its containing directory, gated by an
//! explicit confirmation read in cooked mode.

use crate::storage::Profile;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Prompt, then delete the user data directory on an explicit yes
///
/// # Errors
/// Returns an error if the prompt cannot be read or the directory exists
/// but cannot be removed.
pub fn run_clean() -> Result<()> {
    print!("Are you sure you want to delete user data [y/n] (default no): ");
    io::stdout().flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    match answer.trim() {
        "y" | "Y" => {
            let profile = Profile::locate().context("Failed to resolve user data directory")?;
            profile.clean().context("Failed to delete user data")?;
            println!("{}", "Deleted user data.".green());
        }
        _ => println!("Did not delete user data."),
    }

    Ok(())
}
