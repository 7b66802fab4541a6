//! Command-line interface for tictactoe.

use clap::Parser;

/// Tic-tac-toe - two-player console game
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Symbol for the first player (moves first)
    #[arg(long, default_value = "X", value_parser = parse_symbol)]
    pub x_symbol: char,

    /// Symbol for the second player
    #[arg(long, default_value = "O", value_parser = parse_symbol)]
    pub o_symbol: char,
}

/// Rejects blank or multi-character symbols before the game starts.
fn parse_symbol(raw: &str) -> Result<char, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(c),
        (Some(_), None) => Err("symbol must be a visible character".to_string()),
        _ => Err("symbol must be exactly one character".to_string()),
    }
}
