//! Text rendering of a board.

use chessrules::{Board, Color, Piece, Square};

fn glyph(piece: Piece, color: Color) -> char {
    match (color, piece) {
        (Color::White, Piece::King) => '♔',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Pawn) => '♙',
        (Color::Black, Piece::King) => '♚',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Pawn) => '♟',
    }
}

/// Draws the board from White's side, rank 8 at the top.
///
/// With `unicode` unset, pieces use their FEN letters and empty squares a dot.
pub fn render_board(board: &Board, unicode: bool) -> String {
    let mut out = String::with_capacity(200);
    for row in 0..8i8 {
        out.push(char::from(b'8' - row as u8));
        for file in 0..8i8 {
            out.push(' ');
            let cell = Square::from_coords(file, row).and_then(|sq| board.piece_at(sq));
            out.push(match cell {
                Some((piece, color)) if unicode => glyph(piece, color),
                Some((piece, color)) => piece.to_fen_char(color),
                None if unicode => '·',
                None => '.',
            });
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("{} to move\n", board.turn));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_startpos() {
        let text = render_board(&Board::startpos(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_unicode_glyphs() {
        let text = render_board(&Board::startpos(), true);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert!(text.contains("♔"));
    }
}
