//! Console tic-tac-toe.
//!
//! Reads moves line by line from stdin and plays until a win or draw.

#![warn(missing_docs)]

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use tictactoe::{ConsoleInput, GameLoop, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    // Diagnostics on stderr so the game text stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let player_x = Player::new(cli.x_symbol)?;
    let player_o = Player::new(cli.o_symbol)?;
    info!(x = %player_x, o = %player_o, "starting session");

    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock(), io::stdout());
    let game = GameLoop::new(player_x, player_o, input, io::stdout())?;

    let state = game.run()?;
    info!(?state, "session finished");
    Ok(())
}
