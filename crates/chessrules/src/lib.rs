//! Chess move validation engine.
//!
//! This crate provides:
//! - [`Board`] - position state: placement, side to move, castling rights, en passant target
//! - [`validate_move`] - the legality pipeline, returning a [`MoveValidation`]
//! - [`is_king_in_check`] and [`has_legal_moves`] - king-safety queries
//! - [`apply_move`] - the move executor
//! - [`decode`] / [`encode`] - FEN conversion
//!
//! Every operation takes a board by reference and returns new values; nothing
//! is cached between calls.
//!
//! # Example
//!
//! ```
//! use chessrules::{validate_move_str, Board};
//!
//! let board = Board::startpos();
//! let result = validate_move_str(&board, "e2", "e4", None).unwrap();
//! assert!(result.valid);
//! assert_eq!(
//!     result.next_board_state.as_deref(),
//!     Some("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3")
//! );
//! ```

pub mod attacks;
mod board;
mod executor;
pub mod rules;
mod validate;

pub use attacks::{is_king_in_check, is_square_attacked};
pub use board::{decode, encode, Board, CastleSide, CastlingRights};
pub use executor::apply_move;
pub use rules::MoveKind;
pub use validate::{
    game_status, has_legal_moves, legal_moves, validate, validate_move, validate_move_str,
    GameStatus, MoveValidation, Rejection,
};

pub use chessrules_core::{Color, FenError, FenParser, File, Move, MoveParseError, Piece, Rank, Square};
