//! Move representation.

use crate::{Piece, Square, SquareError};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a move from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error(transparent)]
    Square(#[from] SquareError),

    #[error("invalid promotion piece '{0}': expected one of q, r, b, n")]
    InvalidPromotion(String),
}

/// A proposed move: source, destination, and the piece a pawn promotes to.
///
/// A `Move` carries no legality information; the rules engine decides what
/// kind of move it is against a concrete board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    /// Creates a move without a promotion piece.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move that promotes to `piece`.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Parses a promotion letter given as text (`q`, `R`, ...).
    pub fn parse_promotion(s: &str) -> Result<Piece, MoveParseError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_promotion_char(c)
                .ok_or_else(|| MoveParseError::InvalidPromotion(s.to_string())),
            _ => Err(MoveParseError::InvalidPromotion(s.to_string())),
        }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(piece) => format!("{}{}{}", self.from, self.to, piece.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn coordinate_notation() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(Move::new(e2, e4).to_uci(), "e2e4");

        let e7 = Square::new(File::E, Rank::R7);
        let e8 = Square::new(File::E, Rank::R8);
        let promo = Move::with_promotion(e7, e8, Piece::Queen);
        assert_eq!(promo.to_string(), "e7e8q");
    }

    #[test]
    fn promotion_letters() {
        assert_eq!(Move::parse_promotion("n"), Ok(Piece::Knight));
        assert_eq!(Move::parse_promotion("Q"), Ok(Piece::Queen));
        for bad in ["k", "p", "qq", ""] {
            assert_eq!(
                Move::parse_promotion(bad),
                Err(MoveParseError::InvalidPromotion(bad.to_string()))
            );
        }
    }
}
