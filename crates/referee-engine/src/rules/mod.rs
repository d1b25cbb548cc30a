//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam between the game
//! controller and the movement rules it enforces. The controller never
//! encodes piece geometry itself; it asks the active rule set.

mod standard;

pub use standard::{
    is_legal_bishop_move, is_legal_king_move, is_legal_knight_move, is_legal_pawn_move,
    is_legal_queen_move, is_legal_rook_move, StandardRules,
};

use referee_core::{Board, Color, Square};

/// Trait for a set of movement rules.
///
/// Implementations must be pure: they read the board and never mutate it,
/// and they answer every question (an unknown situation is an illegal move,
/// never a panic).
///
/// # Example
///
/// ```
/// use referee_core::{Color, Square};
/// use referee_engine::rules::{RuleSet, StandardRules};
///
/// let board = StandardRules.initial_board();
/// let e2 = Square::new(6, 4);
/// let e4 = Square::new(4, 4);
/// assert!(StandardRules.is_legal(&board, Color::White, e2, e4));
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the side that moves first.
    fn first_turn(&self) -> Color {
        Color::White
    }

    /// Returns true if `turn` may move the piece on `from` to `to`.
    fn is_legal(&self, board: &Board, turn: Color, from: Square, to: Square) -> bool;

    /// Returns every square the piece on `from` may move to, in row-major order.
    fn legal_destinations(&self, board: &Board, turn: Color, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal(board, turn, from, to))
            .collect()
    }
}

/// Checks a move against the standard rules.
///
/// Shorthand for [`StandardRules`]`.is_legal(..)`.
#[inline]
pub fn is_legal_move(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    StandardRules.is_legal(board, turn, from, to)
}
