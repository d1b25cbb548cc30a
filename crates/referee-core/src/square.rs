//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when coordinates fall outside the 8x8 board.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("square ({row}, {col}) is off the board")]
pub struct SquareError {
    pub row: u8,
    pub col: u8,
}

/// A square on the board as a `(row, col)` pair, each in 0-7.
///
/// Row 0 is Black's back row and row 7 is White's, so algebraic rank 8
/// maps to row 0 and file `a` maps to column 0:
/// - a8 = (0, 0), h8 = (0, 7)
/// - a1 = (7, 0), e1 = (7, 4)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    /// Panics if either coordinate is outside 0-7. Callers pass coordinates
    /// they already know are on the board; untrusted input goes through
    /// [`Square::try_new`].
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square { row, col }
    }

    /// Creates a square, returning `None` if it is off the board.
    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: 7 - (rank - b'1'),
            col: file - b'a',
        })
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }

    /// Returns the square displaced by `(d_row, d_col)`, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let (row, col) = match (
            (self.row as i8).checked_add(d_row),
            (self.col as i8).checked_add(d_col),
        ) {
            (Some(row), Some(col)) if row >= 0 && col >= 0 => (row, col),
            _ => return None,
        };
        Square::try_new(row as u8, col as u8)
    }

    /// Signed row and column distance from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_new(row, col).ok_or(SquareError { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row, self.col, self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
