//! Command-line interface for strictly_checkers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Checkers - inspect positions and replay recorded games
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "Checkers rule engine: render positions and replay game records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a starting position
    Show {
        /// Use the example study position instead of the configured opening
        #[arg(long)]
        example: bool,

        /// Emit the position as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a game record, one round per line
    Replay {
        /// File holding the record
        file: PathBuf,

        /// Emit the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
