//! Per-piece movement rules.
//!
//! [`piece_move`] decides whether a piece may travel from one square to
//! another on a given board, ignoring whose turn it is and whether the move
//! exposes the mover's king. Those gates belong to
//! [`validate_move`](crate::validate_move).

mod pieces;

use crate::board::CastleSide;
use crate::Board;
use chessrules_core::{Color, Piece, Square};

/// What a piece-shaped move does beyond relocating the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Plain move or capture.
    Normal,
    /// Pawn advance of two squares from its starting row.
    DoublePush,
    /// Pawn capture onto the en passant target.
    EnPassant,
    /// King move of two files that also relocates a rook.
    Castle(CastleSide),
}

/// Returns the kind of move if a `piece` of `color` on `from` may move to `to`.
///
/// The caller guarantees `to` does not hold a piece of `color`.
pub fn piece_move(
    board: &Board,
    from: Square,
    to: Square,
    (piece, color): (Piece, Color),
) -> Option<MoveKind> {
    match piece {
        Piece::Pawn => pieces::pawn_move(board, from, to, color),
        Piece::Knight => pieces::knight_move(from, to),
        Piece::Bishop => pieces::bishop_move(board, from, to),
        Piece::Rook => pieces::rook_move(board, from, to),
        Piece::Queen => pieces::queen_move(board, from, to),
        Piece::King => pieces::king_move(board, from, to, color),
    }
}
