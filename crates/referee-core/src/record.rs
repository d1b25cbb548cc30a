//! Move records: the logged delta of one applied move.

use crate::{Board, Piece, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move that has been applied to a board.
///
/// The record carries everything needed to invert the move: the moving piece
/// goes back to `from` and `captured` (or nothing) goes back to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl MoveRecord {
    /// Builds the record for moving the piece on `from` to `to`.
    ///
    /// Returns `None` if `from` is empty.
    pub fn capture_from(board: &Board, from: Square, to: Square) -> Option<Self> {
        let moved = board.get(from)?;
        Some(MoveRecord {
            from,
            to,
            moved,
            captured: board.get(to),
        })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Performs the move on `board`.
    pub fn apply(&self, board: &mut Board) {
        board.set(self.from, None);
        board.set(self.to, Some(self.moved));
    }

    /// Reverses the move on `board`.
    pub fn revert(&self, board: &mut Board) {
        board.set(self.from, Some(self.moved));
        board.set(self.to, self.captured);
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}{}", self.moved.to_char(), self.from, sep, self.to)
    }
}
