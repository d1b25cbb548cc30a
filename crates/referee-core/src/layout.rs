//! Layout text: piece placement plus the side to move.
//!
//! A layout looks like `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.
//! The placement lists the rows from row 0 to row 7, uppercase letters are
//! White, lowercase are Black, and digits count consecutive empty squares.

use crate::{Board, Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// The standard starting layout, White to move.
pub const STANDARD_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Parses a full layout string into a board and the side to move.
pub fn parse_layout(layout: &str) -> Result<(Board, Color), LayoutError> {
    let parts: Vec<&str> = layout.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(LayoutError::InvalidPartCount(parts.len()));
    }

    let board = Board::from_placement(parts[0])?;

    let mut chars = parts[1].chars();
    let turn = match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => color,
        _ => return Err(LayoutError::InvalidActiveColor(parts[1].to_string())),
    };

    Ok((board, turn))
}

/// Formats a board and side to move as a layout string.
pub fn format_layout(board: &Board, turn: Color) -> String {
    format!("{} {}", board.to_placement(), turn.to_char())
}

impl Board {
    /// Parses the placement field of a layout.
    pub fn from_placement(placement: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidPiecePlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0u32;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(LayoutError::InvalidPiecePlacement(format!(
                            "empty run of zero in row {}",
                            row
                        )));
                    }
                    col += run;
                } else if let Some(piece) = Piece::from_char(c) {
                    if col < 8 {
                        board.set(Square::new(row as u8, col as u8), Some(piece));
                    }
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row
                    )));
                }
                if col > 8 {
                    break;
                }
            }
            if col != 8 {
                return Err(LayoutError::InvalidPiecePlacement(format!(
                    "row {} has {} squares, expected 8",
                    row, col
                )));
            }
        }

        Ok(board)
    }

    /// Converts the board to the placement field of a layout.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, squares) in self.rows().iter().enumerate() {
            let mut empty_count = 0;
            for sq in squares {
                match sq {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_standard() {
        let (board, turn) = parse_layout(STANDARD_LAYOUT).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(turn, Color::White);
    }

    #[test]
    fn standard_board_formats_to_standard_layout() {
        assert_eq!(
            format_layout(&Board::standard(), Color::White),
            STANDARD_LAYOUT
        );
    }

    #[test]
    fn parse_custom_layout() {
        let (board, turn) = parse_layout("4k3/8/8/3p4/4P3/8/8/R3K3 b").unwrap();
        assert_eq!(turn, Color::Black);
        assert_eq!(
            board.get(Square::new(3, 3)),
            Some(Piece::black(PieceKind::Pawn))
        );
        assert_eq!(
            board.get(Square::new(4, 4)),
            Some(Piece::white(PieceKind::Pawn))
        );
        assert_eq!(
            board.get(Square::new(7, 0)),
            Some(Piece::white(PieceKind::Rook))
        );
        assert_eq!(board.pieces().count(), 5);
    }

    #[test]
    fn placement_roundtrip() {
        let placement = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.to_placement(), placement);
    }

    #[test]
    fn invalid_part_count() {
        assert!(matches!(
            parse_layout("invalid"),
            Err(LayoutError::InvalidPartCount(1))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/8 w extra"),
            Err(LayoutError::InvalidPartCount(3))
        ));
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/8 x"),
            Err(LayoutError::InvalidActiveColor(_))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/8 wb"),
            Err(LayoutError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_row_count() {
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(LayoutError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn wrong_square_count() {
        assert!(matches!(
            Board::from_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(LayoutError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::InvalidPartCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = LayoutError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = LayoutError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
