//! Draw detection logic for tic-tac-toe.

use crate::game::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::has_player_won;
    use super::*;
    use crate::game::Player;

    fn fill(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            assert!(board.place_move(row, col, player));
        }
    }

    fn is_draw(board: &Board, x: Player, o: Player) -> bool {
        is_full(board) && !has_player_won(board, x) && !has_player_won(board, o)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_move(1, 1, Player::new('X').unwrap());
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let x = Player::new('X').unwrap();
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                board.place_move(row, col, x);
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let x = Player::new('X').unwrap();
        let o = Player::new('O').unwrap();
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, x, &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)]);
        fill(&mut board, o, &[(0, 1), (1, 0), (2, 0), (2, 2)]);

        assert!(is_draw(&board, x, o));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let x = Player::new('X').unwrap();
        let o = Player::new('O').unwrap();
        let mut board = Board::new();
        // X wins the top row
        fill(&mut board, x, &[(0, 0), (0, 1), (0, 2)]);
        fill(&mut board, o, &[(1, 0), (1, 1)]);

        assert!(!is_draw(&board, x, o));
    }
}
