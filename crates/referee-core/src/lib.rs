//! Core types for the move referee.
//!
//! This crate provides the plain data the referee works with:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Board`] for piece placement
//! - [`MoveRecord`] for applied, invertible moves
//! - Layout text parsing and formatting

mod board;
mod color;
mod layout;
mod piece;
mod record;
mod square;

pub use board::Board;
pub use color::Color;
pub use layout::{format_layout, parse_layout, LayoutError, STANDARD_LAYOUT};
pub use piece::{Piece, PieceKind};
pub use record::MoveRecord;
pub use square::{Square, SquareError};
