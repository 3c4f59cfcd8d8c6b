//! Applying an already-validated move to a board.

use crate::rules::MoveKind;
use crate::Board;
use chessrules_core::{Color, Piece, Square};

/// Returns the board after `moving` travels from `from` to `to`.
///
/// `moving` is the piece that ends up on `to`, so a promotion passes the
/// promoted piece. The input board is left untouched.
///
/// Bookkeeping:
/// - the en passant target lasts exactly one move and is only set by a
///   double push;
/// - an en passant capture removes the passed pawn, a castle relocates the
///   rook;
/// - castling rights drop when the king moves, when a rook leaves its corner,
///   and when anything lands on a rook corner;
/// - the side to move flips.
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    moving: (Piece, Color),
    kind: MoveKind,
) -> Board {
    let (piece, color) = moving;
    let mut next = board.clone();
    next.en_passant = None;

    next.set(from, None);
    next.set(to, Some(moving));

    match kind {
        MoveKind::Normal => {}
        MoveKind::DoublePush => {
            next.en_passant = from.offset(0, color.pawn_direction());
        }
        MoveKind::EnPassant => {
            if let Some(passed) = to.offset(0, -color.pawn_direction()) {
                next.set(passed, None);
            }
        }
        MoveKind::Castle(side) => {
            let (rook_from, rook_to) = side.rook_squares(color);
            let rook = next.piece_at(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook);
        }
    }

    if piece == Piece::King {
        next.castling.remove_color(color);
    }
    next.castling.remove_corner(from);
    next.castling.remove_corner(to);

    next.turn = board.turn.opposite();
    next
}
