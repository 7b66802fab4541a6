//! Tic-tac-toe - rule engine and console game loop.
//!
//! # Architecture
//!
//! - **Game**: board storage, domain types, and pure win/draw rules
//! - **Console**: line-based input boundary and the blocking game loop
//!
//! The session is single-threaded and fully synchronous: one board,
//! exclusively owned by the loop, mutated one move at a time.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{ConsoleInput, GameLoop, GameState, Player};
//!
//! # fn main() -> anyhow::Result<()> {
//! let x = Player::new('X')?;
//! let o = Player::new('O')?;
//!
//! // X takes the top row while O fills the middle.
//! let lines = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
//! let input = ConsoleInput::new(Cursor::new(lines), std::io::sink());
//! let game = GameLoop::new(x, o, input, std::io::sink())?;
//!
//! assert_eq!(game.run()?, GameState::Win(x));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod game;

// Crate-level exports - console boundary
pub use console::{ConsoleInput, GameLoop, MoveSource};

// Crate-level exports - game engine
pub use game::{BOARD_SIZE, Board, Cell, GameState, Player, PlayerError};
