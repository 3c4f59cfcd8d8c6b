//! Piece geometry and attack detection.
//!
//! The same predicates answer "can this piece move there" for the legality
//! rules and "does this piece attack that square" for king safety. A piece
//! attacks a square exactly when it could capture on it, so the attack test
//! ignores what stands on the target.

use crate::Board;
use chessrules_core::{Color, Piece, Square};

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file_index() - from.file_index(),
        to.row() - from.row(),
    )
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The two squares must share a rank, file, or diagonal.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    let (step_file, step_row) = (df.signum(), dr.signum());

    let mut current = from.offset(step_file, step_row);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_file, step_row);
    }
    false
}

/// Knight geometry: one of the eight L-shaped offsets.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

/// King geometry: one step in any direction.
#[inline]
pub fn king_reaches(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() <= 1 && dr.abs() <= 1 && from != to
}

/// Bishop geometry: a diagonal with nothing in between.
pub fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df != 0 && df.abs() == dr.abs() && path_clear(board, from, to)
}

/// Rook geometry: a rank or file with nothing in between.
pub fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    (df == 0) != (dr == 0) && path_clear(board, from, to)
}

/// Queen geometry: rook or bishop geometry.
#[inline]
pub fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    rook_reaches(board, from, to) || bishop_reaches(board, from, to)
}

/// Pawn capture geometry: one step diagonally forward for `color`.
#[inline]
pub fn pawn_attacks(from: Square, to: Square, color: Color) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() == 1 && dr == color.pawn_direction()
}

/// Returns true if a `piece` of `color` on `from` attacks `target`.
pub fn piece_attacks(
    board: &Board,
    from: Square,
    (piece, color): (Piece, Color),
    target: Square,
) -> bool {
    match piece {
        Piece::Pawn => pawn_attacks(from, target, color),
        Piece::Knight => knight_reaches(from, target),
        Piece::Bishop => bishop_reaches(board, from, target),
        Piece::Rook => rook_reaches(board, from, target),
        Piece::Queen => queen_reaches(board, from, target),
        Piece::King => king_reaches(from, target),
    }
}

/// Returns true if any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|&(_, _, color)| color == by)
        .any(|(sq, piece, color)| piece_attacks(board, sq, (piece, color), target))
}

/// Returns true if the king of `color` is attacked.
///
/// A board without a king of that color is outside the engine's contract and
/// reports `false`.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}
