//! Win detection logic for tic-tac-toe.

use crate::game::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if the player owns all three cells of some line.
///
/// Pure predicate; check order is irrelevant.
#[instrument(skip(board))]
pub fn has_player_won(board: &Board, player: Player) -> bool {
    let owned = |row: usize, col: usize| board.cell(row, col) == Some(Cell::Occupied(player));
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| owned(row, col)))
}
