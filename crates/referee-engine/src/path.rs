//! Line obstruction checks for sliding pieces.

use referee_core::{Board, Square};

/// Returns true if `from` and `to` share a row, a column, or a diagonal.
///
/// A square is aligned with itself.
#[inline]
pub fn is_aligned(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    dr == 0 || dc == 0 || dr.abs() == dc.abs()
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// Adjacent squares have nothing between them and are always clear.
///
/// # Panics
/// Panics if the squares are not aligned; callers check the geometry first.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    assert!(
        is_aligned(from, to),
        "path check between unaligned squares {} and {}",
        from,
        to
    );

    let (dr, dc) = from.delta(to);
    let step = (dr.signum(), dc.signum());

    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(sq) => sq,
            None => return true,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}
