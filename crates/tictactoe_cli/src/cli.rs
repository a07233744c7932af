//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game as X against the computer
    Play(PlayArgs),

    /// Replay a sequence of moves and show the search's verdict
    Analyze {
        /// Squares played so far (1-9, comma-separated, X moves first)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for `play`.
#[derive(clap::Args, Debug, Clone)]
pub struct PlayArgs {
    /// Path to the pacing configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Skip all pauses (instructions, countdown, computer "thinking")
    #[arg(long)]
    pub fast: bool,

    /// Do not clear the terminal between moves
    #[arg(long)]
    pub no_clear: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("tictactoe.toml"),
            fast: false,
            no_clear: false,
        }
    }
}
