//! Tic-Tac-Toe + terminal front-end.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_plus::GameMode;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.command {
        Command::Normal => GameMode::Normal,
        Command::Plus => GameMode::Plus,
    };

    tui::run(mode).await
}
