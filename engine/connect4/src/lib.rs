//! Connect Four game engine.
//!
//! Connect Four is a two-player connection game where players drop colored
//! discs into a 7-column, 6-row vertically suspended grid. The first player
//! to form a horizontal, vertical, or diagonal line of four discs wins.
//!
//! # Board layout
//!
//! The board is stored column-major, with row 0 at the bottom of each column:
//!
//! ```text
//! Row 5: . . . . . . .  <- Top
//! Row 4: . . . . . . .
//! Row 3: . . . . . . .
//! Row 2: . . . . . . .
//! Row 1: . . . . . . .
//! Row 0: . . . . . . .  <- Bottom (pieces land here first)
//!   Col: 0 1 2 3 4 5 6
//! ```
//!
//! `heights[c]` counts the occupied cells in column `c` and doubles as the
//! row index where the next piece in that column lands.
//!
//! # Usage
//!
//! ```rust
//! use connect4::{Position, Status};
//!
//! let mut pos = Position::new();
//! pos.make(3).unwrap(); // Red drops in the center column
//! assert_eq!(pos.status(), Status::Ongoing);
//! ```

use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;

/// One of the two players. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opponent of this player.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves remain and nobody has won.
    Ongoing,
    /// The given player completed four in a row.
    Won(Player),
    /// Board full, no winning line.
    Draw,
}

impl Status {
    /// Whether the game has ended.
    #[inline]
    pub fn is_over(self) -> bool {
        self != Status::Ongoing
    }
}

/// Errors raised by [`Position::make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already decided")]
    GameOver,
}

/// A Connect Four position: board contents, column fill heights, side to
/// move, and terminal status.
///
/// Positions are mutated in place by [`make`](Position::make) and
/// [`unmake`](Position::unmake); `Clone` yields a fully independent deep
/// copy (the search tree relies on this to keep one snapshot per node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Cell contents, column-major with row 0 at the bottom.
    board: [[Option<Player>; ROWS]; COLS],
    /// Occupied cells per column; also the next free row index.
    heights: [usize; COLS],
    /// Player who drops the next piece.
    side_to_move: Player,
    /// Terminal status; once decided it is never reset by `make`.
    status: Status,
}

impl Position {
    /// Fresh empty board, Red to move.
    pub fn new() -> Self {
        Self {
            board: [[None; ROWS]; COLS],
            heights: [0; COLS],
            side_to_move: Player::Red,
            status: Status::Ongoing,
        }
    }

    /// The player who moves next.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Terminal status of this position.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Cell contents at `(col, row)`, row 0 at the bottom.
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Option<Player> {
        self.board[col][row]
    }

    /// Number of occupied cells in `col`.
    #[inline]
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// All columns a piece can be dropped into, in ascending order.
    ///
    /// Empty when the game is decided or the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_over() {
            return Vec::new();
        }

        (0..COLS).filter(|&c| self.heights[c] < ROWS).collect()
    }

    /// Drop the side-to-move's piece into `column`.
    ///
    /// Evaluates terminal conditions in order: win by the placed piece,
    /// then draw on a full board, otherwise the turn passes to the
    /// opponent. Rejected moves leave the position untouched.
    pub fn make(&mut self, column: usize) -> Result<(), MoveError> {
        if column >= COLS {
            return Err(MoveError::OutOfRange(column));
        }
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.heights[column] == ROWS {
            return Err(MoveError::ColumnFull(column));
        }

        self.board[column][self.heights[column]] = Some(self.side_to_move);
        self.heights[column] += 1;

        if self.winning_move(column) {
            self.status = Status::Won(self.side_to_move);
        } else if self.heights.iter().all(|&h| h == ROWS) {
            self.status = Status::Draw;
        } else {
            self.side_to_move = self.side_to_move.other();
        }

        Ok(())
    }

    /// Reverse the most recent [`make`](Position::make) on `column`.
    ///
    /// The caller must only undo the last move made; the engine keeps no
    /// move stack of its own. The side to move is restored (a decisive
    /// move never flipped it) and the status returns to `Ongoing`.
    pub fn unmake(&mut self, column: usize) {
        if self.status == Status::Ongoing {
            self.side_to_move = self.side_to_move.other();
        }
        self.status = Status::Ongoing;
        self.heights[column] -= 1;
        self.board[column][self.heights[column]] = None;
    }

    /// Whether the piece just placed in `column` completed a line of four.
    ///
    /// Only the most recent placement needs checking: a move can only
    /// complete a line through its own cell. Counts contiguous same-player
    /// cells in both directions along each of the four axes.
    fn winning_move(&self, column: usize) -> bool {
        let col = column as i32;
        let row = self.heights[column] as i32 - 1;
        let player = self.board[column][row as usize];

        // Horizontal, vertical, diagonal /, diagonal \
        let directions: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for (dc, dr) in directions {
            let mut count = 0;

            let (mut c, mut r) = (col + dc, row + dr);
            while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
                if self.board[c as usize][r as usize] != player {
                    break;
                }
                count += 1;
                c += dc;
                r += dr;
            }

            let (mut c, mut r) = (col - dc, row - dr);
            while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
                if self.board[c as usize][r as usize] != player {
                    break;
                }
                count += 1;
                c -= dc;
                r -= dr;
            }

            // Three neighbors plus the placed piece make four in a row.
            if count >= 3 {
                return true;
            }
        }

        false
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Textual rendering, top row first: `R`, `Y`, `.` per cell.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.board[col][row] {
                    Some(Player::Red) => write!(f, "R")?,
                    Some(Player::Yellow) => write!(f, "Y")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
