//! CLI definitions

use clap::Parser;
use std::path::PathBuf;

/// Weekly done-list maintenance for Trello boards
///
/// A run performs the weekly rotation first and the monthly consolidation
/// second; there are no subcommands.
#[derive(Parser)]
#[command(
    name = "dk",
    about = "Rotates a board's weekly done list and consolidates dated ones into monthly archives",
    version,
    after_help = "Logs are written to: ~/.local/share/donekeeper/logs/donekeeper.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
