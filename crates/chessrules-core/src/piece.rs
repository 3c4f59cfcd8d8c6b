//! Piece kinds.

use crate::Color;

/// The kind of a chess piece, without its color.
///
/// An occupied square holds the pair `(Piece, Color)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Lowercase letter used in FEN and coordinate notation.
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.to_char().to_ascii_uppercase(),
            Color::Black => self.to_char(),
        }
    }

    /// Reads a FEN placement letter. The case carries the color.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let piece = match Self::from_letter(c.to_ascii_lowercase()) {
            Some(piece) => piece,
            None => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    /// Reads a promotion letter (`q`, `r`, `b`, `n`, either case).
    pub const fn from_promotion_char(c: char) -> Option<Piece> {
        match Self::from_letter(c.to_ascii_lowercase()) {
            Some(piece) if piece.is_promotion_target() => Some(piece),
            _ => None,
        }
    }

    const fn from_letter(c: char) -> Option<Piece> {
        Some(match c {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        })
    }

    /// Returns true for the four kinds a pawn may become.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }
}
