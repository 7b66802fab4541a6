//! Game engine: board storage, domain types, and pure rules.

mod rules;
mod types;

pub use types::{BOARD_SIZE, Board, Cell, GameState, Player, PlayerError};
