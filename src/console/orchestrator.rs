//! Blocking game loop over a board and two players.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::console::MoveSource;
use crate::game::{Board, GameState, Player, PlayerError};

/// Turn-based game loop: one board, two players, blocking input.
///
/// The loop exclusively owns the board; moves are applied one at a time
/// in program order. X (the first player) always moves first; players
/// strictly alternate on every successful placement.
pub struct GameLoop<S, W> {
    board: Board,
    players: [Player; 2],
    current: usize,
    source: S,
    out: W,
}

impl<S: MoveSource, W: Write> GameLoop<S, W> {
    /// Creates a loop for two players over a move source and output sink.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::DuplicateSymbol`] if both players share
    /// a symbol, which would make the board unreadable.
    pub fn new(player_x: Player, player_o: Player, source: S, out: W) -> Result<Self, PlayerError> {
        if player_x.symbol() == player_o.symbol() {
            return Err(PlayerError::DuplicateSymbol(player_x.symbol()));
        }
        Ok(Self {
            board: Board::new(),
            players: [player_x, player_o],
            current: 0,
            source,
            out,
        })
    }

    /// Runs the session to a terminal state.
    ///
    /// Rejected moves keep the same active player. The loop only returns
    /// once the game is won or drawn, or an I/O boundary fails.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameState> {
        loop {
            let player = self.players[self.current];
            self.show_board()?;
            writeln!(self.out, "Player {}'s turn.", player.symbol())?;

            let (row, col) = self.source.next_move(player, &self.board)?;

            if !self.board.place_move(row, col, player) {
                writeln!(
                    self.out,
                    "Invalid move, the cell is already occupied. Try again."
                )?;
                continue;
            }
            debug!(row, col, symbol = %player.symbol(), "move accepted");

            match self.evaluate(player) {
                GameState::Ongoing => {
                    self.current = 1 - self.current;
                }
                state @ GameState::Win(winner) => {
                    self.show_board()?;
                    writeln!(self.out, "Player {} wins!", winner.symbol())?;
                    info!(symbol = %winner.symbol(), "game over: win");
                    return Ok(state);
                }
                state @ GameState::Draw => {
                    self.show_board()?;
                    writeln!(self.out, "It's a draw!")?;
                    info!("game over: draw");
                    return Ok(state);
                }
            }
        }
    }

    /// Evaluates the state after the given player's placement.
    ///
    /// Only the mover is win-checked: a single placement cannot complete
    /// a line for the opponent.
    fn evaluate(&self, mover: Player) -> GameState {
        if self.board.has_player_won(mover) {
            GameState::Win(mover)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.out, "Current board:")?;
        for line in self.board.render() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
