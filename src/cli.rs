//! Command-line interface for tictactoe_plus.

use clap::{Parser, Subcommand};

/// Tic-Tac-Toe + - two-variant tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_plus")]
#[command(about = "Tic-tac-toe with an optional three-second turn timer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play classic tic-tac-toe
    Normal,

    /// Play Plus Mode: move within three seconds or lose your turn
    Plus,
}
