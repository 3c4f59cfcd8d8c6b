//! Core types for chess move validation.
//!
//! This crate provides the value types shared by the rules engine and its callers:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for a from/to pair with an optional promotion piece
//! - FEN field parsing and validation

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::{Move, MoveParseError};
pub use piece::Piece;
pub use square::{File, Rank, Square, SquareError};
