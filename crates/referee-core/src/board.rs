//! The 8x8 grid of optional pieces.

use crate::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the board.
///
/// Pure data: the board knows nothing about whose turn it is or which moves
/// are legal. Squares are always in range because [`Square`] cannot be built
/// off the board.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting setup.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.set(
                    Square::new(color.back_row(), col as u8),
                    Some(Piece::new(*kind, color)),
                );
                board.set(
                    Square::new(color.pawn_home_row(), col as u8),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Places `piece` on `sq`, or clears it with `None`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Removes and returns the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is_some_and(|p| p.color == color)
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Returns the rows as a nested array, row 0 first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|sq| sq.map_or('.', |p| p.to_char()))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
