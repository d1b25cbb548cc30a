//! Standard piece movement rules.

use super::RuleSet;
use crate::path::is_path_clear;
use referee_core::{Board, Color, PieceKind, Square};

/// Standard movement rules.
///
/// Covers the movement geometry of all six piece kinds, turn ownership and
/// same-color capture. It deliberately stops there:
/// - No check, checkmate, or stalemate detection
/// - No castling or en passant
/// - No promotion (a pawn on the last row simply has no forward moves)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn initial_board(&self) -> Board {
        Board::standard()
    }

    fn is_legal(&self, board: &Board, turn: Color, from: Square, to: Square) -> bool {
        let piece = match board.get(from) {
            Some(p) if p.color == turn => p,
            _ => return false,
        };

        // Selecting the same square again cancels rather than moves.
        if from == to {
            return false;
        }

        if board.is_occupied_by(to, turn) {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => is_legal_pawn_move(board, piece.color, from, to),
            PieceKind::Rook => is_legal_rook_move(board, from, to),
            PieceKind::Knight => is_legal_knight_move(from, to),
            PieceKind::Bishop => is_legal_bishop_move(board, from, to),
            PieceKind::Queen => is_legal_queen_move(board, from, to),
            PieceKind::King => is_legal_king_move(from, to),
        }
    }
}

// The per-kind checks below assume the caller already rejected empty
// sources, zero-distance moves, and destinations held by the mover.

/// Pawn geometry for a pawn of `color`.
pub fn is_legal_pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let (dr, dc) = from.delta(to);

    if dc == 0 && board.is_empty(to) {
        if dr == direction {
            return true;
        }
        if dr == 2 * direction && from.row() == color.pawn_home_row() {
            return from
                .offset(direction, 0)
                .is_some_and(|mid| board.is_empty(mid));
        }
        return false;
    }

    dc.abs() == 1 && dr == direction && !board.is_empty(to)
}

/// Rook geometry: a clear row or column.
pub fn is_legal_rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    (dr == 0 || dc == 0) && is_path_clear(board, from, to)
}

/// Knight geometry: an L-shaped jump. Occupancy in between is irrelevant.
pub fn is_legal_knight_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}

/// Bishop geometry: a clear diagonal.
pub fn is_legal_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    dr != 0 && dr.abs() == dc.abs() && is_path_clear(board, from, to)
}

/// Queen geometry: either a rook move or a bishop move.
pub fn is_legal_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_legal_rook_move(board, from, to) || is_legal_bishop_move(board, from, to)
}

/// King geometry: one square in any direction.
pub fn is_legal_king_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    dr.abs() <= 1 && dc.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::Piece;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn legal(board: &Board, turn: Color, from: &str, to: &str) -> bool {
        StandardRules.is_legal(board, turn, sq(from), sq(to))
    }

    #[test]
    fn initial_board() {
        assert_eq!(StandardRules.initial_board(), Board::standard());
        assert_eq!(StandardRules.first_turn(), Color::White);
    }

    #[test]
    fn empty_source_is_illegal() {
        let b = Board::standard();
        assert!(!legal(&b, Color::White, "e4", "e5"));
    }

    #[test]
    fn moving_opponent_piece_is_illegal() {
        let b = Board::standard();
        assert!(!legal(&b, Color::White, "e7", "e5"));
        assert!(legal(&b, Color::Black, "e7", "e5"));
    }

    #[test]
    fn zero_distance_is_illegal() {
        let b = board("8/8/8/8/4K3/8/8/8");
        assert!(!legal(&b, Color::White, "e4", "e4"));
    }

    #[test]
    fn same_color_capture_is_illegal() {
        let b = Board::standard();
        assert!(!legal(&b, Color::White, "d1", "d2"));
        assert!(!legal(&b, Color::White, "g1", "e2"));
        assert!(!legal(&b, Color::White, "e1", "f1"));
    }

    #[test]
    fn pawn_single_and_double_step() {
        let b = Board::standard();
        assert!(legal(&b, Color::White, "e2", "e3"));
        assert!(legal(&b, Color::White, "e2", "e4"));
        assert!(!legal(&b, Color::White, "e2", "e5"));
        assert!(legal(&b, Color::Black, "d7", "d6"));
        assert!(legal(&b, Color::Black, "d7", "d5"));
        assert!(!legal(&b, Color::Black, "d7", "d4"));
    }

    #[test]
    fn pawn_never_moves_backward_or_sideways() {
        let b = board("8/8/8/8/4P3/8/8/8");
        assert!(!legal(&b, Color::White, "e4", "e3"));
        assert!(!legal(&b, Color::White, "e4", "d4"));
    }

    #[test]
    fn pawn_double_step_only_from_home_row() {
        let b = board("8/8/8/8/8/4P3/8/8");
        assert!(legal(&b, Color::White, "e3", "e4"));
        assert!(!legal(&b, Color::White, "e3", "e5"));

        let b = board("8/8/3p4/8/8/8/8/8");
        assert!(!legal(&b, Color::Black, "d6", "d4"));
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let blocked_mid = board("8/8/8/8/8/4n3/4P3/8");
        assert!(!legal(&blocked_mid, Color::White, "e2", "e4"));

        let blocked_end = board("8/8/8/8/4n3/8/4P3/8");
        assert!(!legal(&blocked_end, Color::White, "e2", "e4"));
        assert!(legal(&blocked_end, Color::White, "e2", "e3"));
    }

    #[test]
    fn pawn_cannot_capture_forward() {
        let b = board("8/8/8/8/4p3/4P3/8/8");
        assert!(!legal(&b, Color::White, "e3", "e4"));
        assert!(!legal(&b, Color::Black, "e4", "e3"));
    }

    #[test]
    fn pawn_diagonal_capture() {
        let b = board("8/8/8/3p1p2/4P3/8/8/8");
        assert!(legal(&b, Color::White, "e4", "d5"));
        assert!(legal(&b, Color::White, "e4", "f5"));
        assert!(legal(&b, Color::Black, "d5", "e4"));
        assert!(legal(&b, Color::Black, "f5", "e4"));
    }

    #[test]
    fn pawn_diagonal_needs_a_victim() {
        let b = board("8/8/8/8/4P3/8/8/8");
        assert!(!legal(&b, Color::White, "e4", "d5"));
        assert!(!legal(&b, Color::White, "e4", "f5"));
    }

    #[test]
    fn pawn_diagonal_only_forward_one() {
        let b = board("8/8/2p5/8/4P3/3p4/8/8");
        assert!(!legal(&b, Color::White, "e4", "c6"));
        assert!(!legal(&b, Color::White, "e4", "d3"));
    }

    #[test]
    fn pawn_on_last_row_is_stuck() {
        let b = board("4P3/8/8/8/8/8/8/8");
        assert!(StandardRules
            .legal_destinations(&b, Color::White, sq("e8"))
            .is_empty());
    }

    #[test]
    fn rook_moves_along_clear_lines() {
        let b = board("8/8/8/8/3R4/8/8/8");
        assert!(legal(&b, Color::White, "d4", "d8"));
        assert!(legal(&b, Color::White, "d4", "a4"));
        assert!(legal(&b, Color::White, "d4", "h4"));
        assert!(legal(&b, Color::White, "d4", "d1"));
        assert!(!legal(&b, Color::White, "d4", "e5"));
        assert!(!legal(&b, Color::White, "d4", "e6"));
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("d4"))
                .len(),
            14
        );
    }

    #[test]
    fn rook_is_blocked_in_starting_position() {
        let b = Board::standard();
        assert!(!legal(&b, Color::White, "a1", "e1"));
        assert!(!legal(&b, Color::White, "a1", "a3"));

        let mut open = b.clone();
        for name in ["b1", "c1", "d1"] {
            open.set(sq(name), None);
        }
        assert!(legal(&open, Color::White, "a1", "d1"));
        assert!(!legal(&open, Color::White, "a1", "e1"));
        open.set(sq("e1"), None);
        assert!(legal(&open, Color::White, "a1", "e1"));
    }

    #[test]
    fn rook_captures_first_piece_only() {
        let b = board("8/8/8/8/R2pp3/8/8/8");
        assert!(legal(&b, Color::White, "a4", "d4"));
        assert!(!legal(&b, Color::White, "a4", "e4"));
    }

    #[test]
    fn knight_jumps() {
        let b = Board::standard();
        assert!(legal(&b, Color::White, "g1", "f3"));
        assert!(legal(&b, Color::White, "g1", "h3"));
        assert!(legal(&b, Color::White, "b1", "c3"));
        assert!(!legal(&b, Color::White, "g1", "g3"));
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("b1"))
                .len(),
            2
        );
    }

    #[test]
    fn knight_in_center_has_eight_targets() {
        let b = board("8/8/8/8/3N4/8/8/8");
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("d4"))
                .len(),
            8
        );
    }

    #[test]
    fn bishop_moves_along_clear_diagonals() {
        let b = board("8/8/8/8/3B4/8/8/8");
        assert!(legal(&b, Color::White, "d4", "a7"));
        assert!(legal(&b, Color::White, "d4", "h8"));
        assert!(legal(&b, Color::White, "d4", "a1"));
        assert!(legal(&b, Color::White, "d4", "g1"));
        assert!(!legal(&b, Color::White, "d4", "d5"));
        assert!(!legal(&b, Color::White, "d4", "e6"));
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("d4"))
                .len(),
            13
        );
    }

    #[test]
    fn bishop_is_blocked() {
        let b = Board::standard();
        assert!(!legal(&b, Color::White, "c1", "e3"));
        let mut open = b.clone();
        open.set(sq("d2"), None);
        assert!(legal(&open, Color::White, "c1", "e3"));
        assert!(legal(&open, Color::White, "c1", "h6"));
        assert!(!legal(&open, Color::White, "c1", "b2"));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let b = board("8/8/8/8/3Q4/8/8/8");
        assert!(legal(&b, Color::White, "d4", "d8"));
        assert!(legal(&b, Color::White, "d4", "h8"));
        assert!(legal(&b, Color::White, "d4", "a4"));
        assert!(!legal(&b, Color::White, "d4", "e6"));
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("d4"))
                .len(),
            27
        );
    }

    #[test]
    fn queen_is_blocked() {
        let b = board("8/8/5p2/8/3Q4/8/8/8");
        assert!(legal(&b, Color::White, "d4", "f6"));
        assert!(!legal(&b, Color::White, "d4", "g7"));
    }

    #[test]
    fn king_steps_one_square() {
        let b = board("8/8/8/8/4K3/8/8/8");
        assert_eq!(
            StandardRules
                .legal_destinations(&b, Color::White, sq("e4"))
                .len(),
            8
        );
        assert!(!legal(&b, Color::White, "e4", "e6"));
        assert!(!legal(&b, Color::White, "e4", "g4"));
    }

    #[test]
    fn king_may_capture_adjacent_enemy() {
        let b = board("8/8/8/4q3/4K3/8/8/8");
        assert!(legal(&b, Color::White, "e4", "e5"));
    }

    #[test]
    fn per_kind_helpers_match_geometry() {
        let b = Board::empty();
        let d4 = sq("d4");
        assert!(is_legal_knight_move(d4, sq("e6")));
        assert!(is_legal_king_move(d4, sq("c3")));
        assert!(is_legal_rook_move(&b, d4, sq("d1")));
        assert!(is_legal_bishop_move(&b, d4, sq("f6")));
        assert!(is_legal_queen_move(&b, d4, sq("b2")));
        assert!(is_legal_pawn_move(&b, Color::Black, sq("d7"), sq("d5")));
        assert!(!is_legal_pawn_move(&b, Color::White, sq("d7"), sq("d5")));
    }

    #[test]
    fn opposing_piece_on_destination_is_capturable() {
        let mut b = Board::empty();
        b.set(sq("a1"), Some(Piece::white(PieceKind::Rook)));
        b.set(sq("a8"), Some(Piece::black(PieceKind::Rook)));
        assert!(legal(&b, Color::White, "a1", "a8"));
        assert!(legal(&b, Color::Black, "a8", "a1"));
    }
}
