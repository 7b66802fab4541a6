//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Errors that can occur when configuring players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayerError {
    /// The symbol is whitespace or a control character.
    #[display("player symbol must be a visible character")]
    BlankSymbol,
    /// Both players were given the same symbol.
    #[display("both players share the symbol '{_0}'")]
    DuplicateSymbol(char),
}

impl std::error::Error for PlayerError {}

/// Player in the game: an immutable identity holding one display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    symbol: char,
}

impl Player {
    /// Creates a player from a display symbol.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::BlankSymbol`] for whitespace or control
    /// characters, which would be invisible on the rendered board.
    pub fn new(symbol: char) -> Result<Self, PlayerError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(PlayerError::BlankSymbol);
        }
        Ok(Self { symbol })
    }

    /// Returns the player's display symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// An occupied cell never changes for the rest of the session:
/// [`Board::place_move`] refuses to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in `[row][col]` order.
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given coordinates, or `None` out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// Places the player's symbol at `(row, col)`.
    ///
    /// Returns `false` and leaves the board unchanged when the coordinates
    /// are out of range or the cell is already occupied. Failure is the
    /// boolean, not an error: the caller retries.
    pub fn place_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        match self.cell(row, col) {
            Some(Cell::Empty) => {
                self.grid[row][col] = Cell::Occupied(player);
                debug!(row, col, symbol = %player.symbol(), "placed mark");
                true
            }
            _ => false,
        }
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the player owns all three cells of some row, column,
    /// or diagonal.
    pub fn has_player_won(&self, player: Player) -> bool {
        rules::has_player_won(self, player)
    }

    /// Formats the board as display lines, one per grid row plus
    /// separators. Never consulted by the rules.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 * BOARD_SIZE - 1);
        for (i, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(player) => player.symbol().to_string(),
                })
                .collect();
            lines.push(cells.join(" | "));
            if i + 1 < BOARD_SIZE {
                lines.push("-".repeat(9));
            }
        }
        lines
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Game is ongoing; more moves are accepted.
    Ongoing,
    /// Game ended with a winner.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameState {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true for [`GameState::Win`] and [`GameState::Draw`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_symbol_rejected() {
        assert_eq!(Player::new(' '), Err(PlayerError::BlankSymbol));
        assert_eq!(Player::new('\t'), Err(PlayerError::BlankSymbol));
        assert!(Player::new('#').is_ok());
    }

    #[test]
    fn test_place_on_empty_cell() {
        let x = Player::new('X').unwrap();
        let mut board = Board::new();
        assert!(board.place_move(1, 2, x));
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(x)));
    }

    #[test]
    fn test_place_out_of_range() {
        let x = Player::new('X').unwrap();
        let mut board = Board::new();
        assert!(!board.place_move(3, 0, x));
        assert!(!board.place_move(0, 9, x));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_keeps_first_owner() {
        let x = Player::new('X').unwrap();
        let o = Player::new('O').unwrap();
        let mut board = Board::new();
        assert!(board.place_move(0, 0, x));
        assert!(!board.place_move(0, 0, o));
        assert_eq!(board.cell(0, 0), Some(Cell::Occupied(x)));
    }

    #[test]
    fn test_render_shape() {
        let board = Board::new();
        let lines = board.render();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  |   |  ");
        assert_eq!(lines[1], "---------");
    }

    #[test]
    fn test_terminal_states() {
        let x = Player::new('X').unwrap();
        assert!(!GameState::Ongoing.is_terminal());
        assert!(GameState::Draw.is_terminal());
        assert_eq!(GameState::Win(x).winner(), Some(x));
        assert_eq!(GameState::Draw.winner(), None);
    }
}
