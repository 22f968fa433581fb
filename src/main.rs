//! Wordle CLI
//!
//! Daily word-guessing game for the terminal. Run with no arguments to play
//! today's word; `clean` deletes the stored user data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_cli::commands::{run_clean, run_play};

const DATA_DIR_HELP: &str = "\
User data is stored in the platform data directory:
    Linux   -> $XDG_DATA_HOME or $HOME/.local/share
    macOS   -> $HOME/Library/Application Support
    Windows -> %LOCALAPPDATA%

Set the WORDLE_CLI_DATA_DIR environment variable to override the base
directory. Run `clean` before changing it, or the old data is orphaned.";

#[derive(Parser)]
#[command(
    name = "wordle_cli",
    about = "Daily word-guessing game for the terminal",
    version,
    after_help = DATA_DIR_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's word (the default when no command is given)
    Play,

    /// Delete user data and the directory that holds it
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(),
        Commands::Clean => run_clean(),
    }
}
