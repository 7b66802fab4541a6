//! Line-based console input for moves.

use std::io::{BufRead, Write};
use std::num::ParseIntError;

use anyhow::Result;
use tracing::debug;

use crate::game::{BOARD_SIZE, Board, Player};

/// Trait for sources that supply moves for the active player.
///
/// Implementations return coordinates already confined to the board
/// range; occupied cells are the loop's problem, not the source's.
pub trait MoveSource {
    /// Gets the next candidate `(row, col)` for the player.
    fn next_move(&mut self, player: Player, board: &Board) -> Result<(usize, usize)>;
}

/// Error parsing a single coordinate line.
///
/// Never escapes the input boundary; it only picks the retry message.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CoordError {
    /// The line is not an integer.
    #[display("not a number")]
    Malformed(ParseIntError),
    /// The value is outside the board range.
    #[display("{_0} is outside the 0-2 range")]
    #[from(ignore)]
    OutOfRange(#[error(not(source))] i64),
}

/// Parses one coordinate line, accepting surrounding whitespace.
fn parse_coordinate(line: &str) -> Result<usize, CoordError> {
    let value: i64 = line.trim().parse()?;
    if (0..BOARD_SIZE as i64).contains(&value) {
        Ok(value as usize)
    } else {
        Err(CoordError::OutOfRange(value))
    }
}

/// Console move source: prompts for row and column on separate lines.
///
/// Malformed or out-of-range input is re-prompted indefinitely; only end
/// of input aborts the session.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input boundary over a line reader and a prompt sink.
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    fn read_coordinate(&mut self, label: &str) -> Result<usize> {
        loop {
            write!(self.prompt, "Enter {label} (0-2): ")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before the game finished");
            }

            match parse_coordinate(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, input = line.trim(), "rejected coordinate");
                    writeln!(
                        self.prompt,
                        "Invalid input ({err}). Please enter a number between 0 and 2."
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_move(&mut self, _player: Player, _board: &Board) -> Result<(usize, usize)> {
        let row = self.read_coordinate("row")?;
        let col = self.read_coordinate("column")?;
        Ok((row, col))
    }
}
