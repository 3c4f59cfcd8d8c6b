//! Movement predicates for each piece type.

use super::MoveKind;
use crate::attacks::{
    bishop_reaches, is_square_attacked, king_reaches, knight_reaches, path_clear, queen_reaches,
    rook_reaches,
};
use crate::board::CastleSide;
use crate::Board;
use chessrules_core::{Color, Piece, Square};

fn normal_if(legal: bool) -> Option<MoveKind> {
    legal.then_some(MoveKind::Normal)
}

pub(super) fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> Option<MoveKind> {
    let dir = color.pawn_direction();
    let df = to.file_index() - from.file_index();
    let dr = to.row() - from.row();
    let target = board.piece_at(to);

    if df == 0 && target.is_none() {
        if dr == dir {
            return Some(MoveKind::Normal);
        }
        let skipped_empty = from.offset(0, dir).is_some_and(|sq| board.is_empty(sq));
        if dr == 2 * dir && from.row() == color.pawn_row() && skipped_empty {
            return Some(MoveKind::DoublePush);
        }
        return None;
    }

    if df.abs() != 1 || dr != dir {
        return None;
    }

    match target {
        Some((_, target_color)) if target_color != color => Some(MoveKind::Normal),
        Some(_) => None,
        None if board.en_passant == Some(to) => {
            // The double-pushed pawn sits beside the mover, behind the target.
            let passed = to.offset(0, -dir)?;
            (board.piece_at(passed) == Some((Piece::Pawn, color.opposite())))
                .then_some(MoveKind::EnPassant)
        }
        None => None,
    }
}

pub(super) fn knight_move(from: Square, to: Square) -> Option<MoveKind> {
    normal_if(knight_reaches(from, to))
}

pub(super) fn bishop_move(board: &Board, from: Square, to: Square) -> Option<MoveKind> {
    normal_if(bishop_reaches(board, from, to))
}

pub(super) fn rook_move(board: &Board, from: Square, to: Square) -> Option<MoveKind> {
    normal_if(rook_reaches(board, from, to))
}

pub(super) fn queen_move(board: &Board, from: Square, to: Square) -> Option<MoveKind> {
    normal_if(queen_reaches(board, from, to))
}

pub(super) fn king_move(board: &Board, from: Square, to: Square, color: Color) -> Option<MoveKind> {
    if king_reaches(from, to) {
        return Some(MoveKind::Normal);
    }
    castle(board, from, to, color).map(MoveKind::Castle)
}

/// Castling: the king moves two files towards a rook that has not moved.
///
/// Requires the matching right, the rook on its corner, an empty path between
/// king and rook, and a king that is neither in check nor crossing an
/// attacked square. The landing square is left to the self-check gate.
fn castle(board: &Board, from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let king_origin = Square::from_coords(4, color.back_row())?;
    if from != king_origin || to.row() != from.row() {
        return None;
    }

    let side = match to.file_index() {
        f if f == CastleSide::Kingside.king_target_file() => CastleSide::Kingside,
        f if f == CastleSide::Queenside.king_target_file() => CastleSide::Queenside,
        _ => return None,
    };
    if !board.castling.has(color, side) {
        return None;
    }

    let (rook_square, _) = side.rook_squares(color);
    if board.piece_at(rook_square) != Some((Piece::Rook, color)) {
        return None;
    }
    if !path_clear(board, from, rook_square) {
        return None;
    }

    let enemy = color.opposite();
    let crossed = from.offset((to.file_index() - from.file_index()).signum(), 0)?;
    if is_square_attacked(board, from, enemy) || is_square_attacked(board, crossed, enemy) {
        return None;
    }

    Some(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn pawn_single_and_double_push() {
        let b = Board::startpos();
        assert_eq!(pawn_move(&b, sq("e2"), sq("e3"), Color::White), Some(MoveKind::Normal));
        assert_eq!(pawn_move(&b, sq("e2"), sq("e4"), Color::White), Some(MoveKind::DoublePush));
        assert_eq!(pawn_move(&b, sq("e7"), sq("e5"), Color::Black), Some(MoveKind::DoublePush));
        assert_eq!(pawn_move(&b, sq("e2"), sq("e5"), Color::White), None);
    }

    #[test]
    fn pawn_double_push_only_from_start_row() {
        let b = board("4k3/8/8/8/8/4P3/8/4K3 w - -");
        assert_eq!(pawn_move(&b, sq("e3"), sq("e5"), Color::White), None);
    }

    #[test]
    fn pawn_blocked() {
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3 w - -");
        assert_eq!(pawn_move(&b, sq("e2"), sq("e3"), Color::White), None);
        assert_eq!(pawn_move(&b, sq("e2"), sq("e4"), Color::White), None);
    }

    #[test]
    fn pawn_never_moves_backward_or_sideways() {
        let b = board("4k3/8/8/8/4P3/8/8/4K3 w - -");
        assert_eq!(pawn_move(&b, sq("e4"), sq("e3"), Color::White), None);
        assert_eq!(pawn_move(&b, sq("e4"), sq("d4"), Color::White), None);
        assert_eq!(pawn_move(&b, sq("e4"), sq("d3"), Color::White), None);
    }

    #[test]
    fn pawn_captures_diagonally() {
        let b = board("4k3/8/8/3p4/4P3/8/8/4K3 w - -");
        assert_eq!(pawn_move(&b, sq("e4"), sq("d5"), Color::White), Some(MoveKind::Normal));
        assert_eq!(pawn_move(&b, sq("e4"), sq("f5"), Color::White), None);
        assert_eq!(pawn_move(&b, sq("d5"), sq("e4"), Color::Black), Some(MoveKind::Normal));
    }

    #[test]
    fn pawn_en_passant_needs_target_and_passed_pawn() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6");
        assert_eq!(pawn_move(&b, sq("e5"), sq("d6"), Color::White), Some(MoveKind::EnPassant));

        let stale = board("4k3/8/8/3pP3/8/8/8/4K3 w - -");
        assert_eq!(pawn_move(&stale, sq("e5"), sq("d6"), Color::White), None);

        let no_pawn = board("4k3/8/8/4P3/8/8/8/4K3 w - d6");
        assert_eq!(pawn_move(&no_pawn, sq("e5"), sq("d6"), Color::White), None);
    }

    #[test]
    fn knight_jumps() {
        assert_eq!(knight_move(sq("g1"), sq("f3")), Some(MoveKind::Normal));
        assert_eq!(knight_move(sq("g1"), sq("g3")), None);
    }

    #[test]
    fn sliders_respect_blockers() {
        let b = Board::startpos();
        assert_eq!(bishop_move(&b, sq("f1"), sq("d3")), None);
        assert_eq!(rook_move(&b, sq("a1"), sq("a3")), None);
        assert_eq!(queen_move(&b, sq("d1"), sq("d3")), None);

        let open = board("4k3/8/8/8/8/8/8/R2QKB2 w - -");
        assert_eq!(bishop_move(&open, sq("f1"), sq("a6")), Some(MoveKind::Normal));
        assert_eq!(rook_move(&open, sq("a1"), sq("a8")), Some(MoveKind::Normal));
        assert_eq!(rook_move(&open, sq("a1"), sq("e1")), None);
        assert_eq!(queen_move(&open, sq("d1"), sq("h5")), Some(MoveKind::Normal));
    }

    #[test]
    fn king_steps_and_castles() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
        assert_eq!(king_move(&b, sq("e1"), sq("f1"), Color::White), Some(MoveKind::Normal));
        assert_eq!(
            king_move(&b, sq("e1"), sq("g1"), Color::White),
            Some(MoveKind::Castle(CastleSide::Kingside))
        );
        assert_eq!(
            king_move(&b, sq("e1"), sq("c1"), Color::White),
            Some(MoveKind::Castle(CastleSide::Queenside))
        );
        assert_eq!(
            king_move(&b, sq("e8"), sq("g8"), Color::Black),
            Some(MoveKind::Castle(CastleSide::Kingside))
        );
        assert_eq!(king_move(&b, sq("e1"), sq("e3"), Color::White), None);
    }

    #[test]
    fn castling_requires_right() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w Qkq -");
        assert_eq!(king_move(&b, sq("e1"), sq("g1"), Color::White), None);
        assert!(king_move(&b, sq("e1"), sq("c1"), Color::White).is_some());
    }

    #[test]
    fn castling_requires_empty_path_and_rook() {
        let blocked = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq -");
        assert_eq!(king_move(&blocked, sq("e1"), sq("c1"), Color::White), None);

        let no_rook = board("r3k2r/8/8/8/8/8/8/R3K3 w KQkq -");
        assert_eq!(king_move(&no_rook, sq("e1"), sq("g1"), Color::White), None);
    }

    #[test]
    fn castling_not_out_of_or_through_check() {
        let in_check = board("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ -");
        assert_eq!(king_move(&in_check, sq("e1"), sq("g1"), Color::White), None);

        let through = board("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ -");
        assert_eq!(king_move(&through, sq("e1"), sq("g1"), Color::White), None);
        assert!(king_move(&through, sq("e1"), sq("c1"), Color::White).is_some());
    }

    #[test]
    fn castling_only_from_king_origin() {
        let b = board("4k3/8/8/8/8/4K3/8/7R w K -");
        assert_eq!(king_move(&b, sq("e3"), sq("g3"), Color::White), None);
    }
}
