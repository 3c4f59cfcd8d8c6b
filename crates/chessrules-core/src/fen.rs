//! FEN (Forsyth-Edwards Notation) field parsing and validation.
//!
//! The positions exchanged with storage carry four fields: placement, side to
//! move, castling availability, and en passant target. The halfmove clock and
//! fullmove number of full FEN are tolerated on input but carry no meaning here.

use crate::{Color, Piece, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// This struct holds the validated FEN components. The rules engine is
/// responsible for turning them into a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Side to move
    pub active_color: Color,
    /// Castling availability (e.g., "KQkq", "-")
    pub castling: String,
    /// En passant target square
    pub en_passant: Option<Square>,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let mut color_chars = parts[1].chars();
        let active_color = match (color_chars.next(), color_chars.next()) {
            (Some(c), None) => Color::from_fen_char(c),
            _ => None,
        }
        .ok_or_else(|| FenError::InvalidActiveColor(parts[1].to_string()))?;

        let castling = parts[2];
        Self::validate_castling(castling)?;

        let en_passant = Self::parse_en_passant(parts[3])?;

        check_counter(parts.get(4), FenError::InvalidHalfmoveClock)?;
        check_counter(parts.get(5), FenError::InvalidFullmoveNumber)?;

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
            castling: castling.to_string(),
            en_passant,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                match c.to_digit(10) {
                    Some(run @ 1..=8) => squares += run,
                    Some(_) => {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "empty run '{}' out of range in rank {}",
                            c,
                            8 - i
                        )))
                    }
                    None if Piece::from_fen_char(c).is_some() => squares += 1,
                    None => {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "invalid character '{}' in rank {}",
                            c,
                            8 - i
                        )))
                    }
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        let mut seen = String::with_capacity(4);
        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
            if seen.contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "duplicate right '{}'",
                    c
                )));
            }
            seen.push(c);
        }

        Ok(())
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            Some(sq) if matches!(sq.rank(), Rank::R3 | Rank::R6) => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}

/// Checks an optional move counter; present but non-numeric is an error.
fn check_counter(field: Option<&&str>, err: fn(String) -> FenError) -> Result<(), FenError> {
    match field {
        Some(s) if s.parse::<u32>().is_err() => Err(err(s.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "8/8/8/8/8/8/8/8";

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.castling, "KQkq");
        assert_eq!(fen.en_passant, None);
    }

    #[test]
    fn counters_are_accepted_and_dropped() {
        let six = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let four = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3";
        assert_eq!(FenParser::parse(six), FenParser::parse(four));
        assert!(FenParser::parse(&format!("{} w - - 12", EMPTY)).is_ok());
    }

    #[test]
    fn field_count_must_be_four_to_six() {
        for (fen, count) in [
            ("invalid".to_string(), 1),
            (format!("{} w KQkq", EMPTY), 3),
            (format!("{} w - - 0 1 extra", EMPTY), 7),
        ] {
            assert_eq!(FenParser::parse(&fen), Err(FenError::InvalidPartCount(count)));
        }
    }

    #[test]
    fn rejects_bad_placement() {
        for placement in [
            "8/8/8/8/8/8/8",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        ] {
            let result = FenParser::parse(&format!("{} w - -", placement));
            assert!(
                matches!(result, Err(FenError::InvalidPiecePlacement(_))),
                "{} accepted",
                placement
            );
        }
    }

    #[test]
    fn rejects_bad_side_to_move() {
        for side in ["x", "white", "W"] {
            let result = FenParser::parse(&format!("{} {} - -", EMPTY, side));
            assert_eq!(result, Err(FenError::InvalidActiveColor(side.to_string())));
        }
    }

    #[test]
    fn castling_field() {
        assert_eq!(FenParser::parse(&format!("{} w Kq -", EMPTY)).unwrap().castling, "Kq");
        for field in ["XYZ", "KKq", "K-"] {
            let result = FenParser::parse(&format!("{} w {} -", EMPTY, field));
            assert!(matches!(result, Err(FenError::InvalidCastlingRights(_))));
        }
    }

    #[test]
    fn en_passant_only_on_third_or_sixth_rank() {
        let black = FenParser::parse(&format!("{} b - d6", EMPTY)).unwrap();
        assert_eq!(black.en_passant.map(|sq| sq.to_algebraic()), Some("d6".to_string()));

        for ep in ["abc", "x3", "e4", "e9"] {
            let result = FenParser::parse(&format!("{} w - {}", EMPTY, ep));
            assert_eq!(result, Err(FenError::InvalidEnPassantSquare(ep.to_string())));
        }
    }

    #[test]
    fn rejects_non_numeric_counters() {
        assert_eq!(
            FenParser::parse(&format!("{} w - - abc 1", EMPTY)),
            Err(FenError::InvalidHalfmoveClock("abc".to_string()))
        );
        assert_eq!(
            FenParser::parse(&format!("{} w - - 0 xyz", EMPTY)),
            Err(FenError::InvalidFullmoveNumber("xyz".to_string()))
        );
    }
}
