//! Move validation pipeline, legal-move enumeration, and game status.

use crate::attacks::is_king_in_check;
use crate::executor::apply_move;
use crate::rules::{piece_move, MoveKind};
use crate::Board;
use chessrules_core::{Color, Move, MoveParseError, Piece, Square, SquareError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a proposed move was refused.
///
/// Rejections are ordinary results, not errors: they are reported through
/// [`MoveValidation::reason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidSquare,
    NoPiece,
    NotYourPiece,
    OwnPieceCapture,
    IllegalForPiece,
    LeavesKingInCheck,
    PromotionRequired,
    InvalidPromotion,
}

impl Rejection {
    /// Returns the human-readable reason.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rejection::InvalidSquare => "Invalid square",
            Rejection::NoPiece => "No piece on source square",
            Rejection::NotYourPiece => "Piece does not belong to current player",
            Rejection::OwnPieceCapture => "Cannot capture own piece",
            Rejection::IllegalForPiece => "Illegal move for piece",
            Rejection::LeavesKingInCheck => "Move leaves king in check",
            Rejection::PromotionRequired => "Promotion piece required",
            Rejection::InvalidPromotion => "Invalid promotion piece",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of validating one move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveValidation {
    pub valid: bool,
    /// Set exactly when `valid` is false.
    pub reason: Option<Rejection>,
    pub is_capture: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub requires_promotion: bool,
    /// FEN of the resulting position, present only when `valid`.
    pub next_board_state: Option<String>,
}

impl MoveValidation {
    fn rejected(reason: Rejection) -> Self {
        MoveValidation {
            reason: Some(reason),
            ..Default::default()
        }
    }

    /// Returns the rejection reason, or an empty string for a valid move.
    pub fn reason_str(&self) -> &'static str {
        self.reason.map_or("", Rejection::as_str)
    }

    /// Decodes the resulting position, if the move was valid.
    pub fn next_board(&self) -> Option<Board> {
        self.next_board_state
            .as_deref()
            .and_then(|fen| Board::from_fen(fen).ok())
    }
}

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// A move that passed every gate, with the board it produces.
struct Accepted {
    next: Board,
    is_capture: bool,
    is_check: bool,
    kind: MoveKind,
    requires_promotion: bool,
}

/// Runs the gates in order and returns the first failure.
///
/// A promoting move with a missing or unusable promotion piece is reported
/// as accepted with `requires_promotion` set; the caller decides what that
/// means.
fn run_gates(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> Result<Accepted, Rejection> {
    let (piece, color) = board.piece_at(from).ok_or(Rejection::NoPiece)?;
    if color != board.turn {
        return Err(Rejection::NotYourPiece);
    }

    let target = board.piece_at(to);
    if matches!(target, Some((_, target_color)) if target_color == color) {
        return Err(Rejection::OwnPieceCapture);
    }

    let kind = piece_move(board, from, to, (piece, color)).ok_or(Rejection::IllegalForPiece)?;

    let requires_promotion = piece == Piece::Pawn && to.row() == color.promotion_row();
    let landing = match promotion {
        Some(promoted) if requires_promotion && promoted.is_promotion_target() => promoted,
        _ => piece,
    };

    let next = apply_move(board, from, to, (landing, color), kind);
    if is_king_in_check(&next, color) {
        return Err(Rejection::LeavesKingInCheck);
    }

    Ok(Accepted {
        is_capture: target.is_some() || kind == MoveKind::EnPassant,
        is_check: is_king_in_check(&next, color.opposite()),
        next,
        kind,
        requires_promotion,
    })
}

fn promotion_rejection(requires_promotion: bool, promotion: Option<Piece>) -> Option<Rejection> {
    if !requires_promotion {
        return None;
    }
    match promotion {
        None => Some(Rejection::PromotionRequired),
        Some(piece) if !piece.is_promotion_target() => Some(Rejection::InvalidPromotion),
        Some(_) => None,
    }
}

/// Validation without game-status detection, used for enumeration.
fn is_legal(board: &Board, from: Square, to: Square, promotion: Option<Piece>) -> bool {
    match run_gates(board, from, to, promotion) {
        Ok(accepted) => promotion_rejection(accepted.requires_promotion, promotion).is_none(),
        Err(_) => false,
    }
}

/// Validates a move of the side to move.
///
/// Gates, first failure wins: source occupied, source belongs to the side to
/// move, destination not occupied by the mover, piece geometry, mover's king
/// safe afterwards, promotion piece supplied when a pawn reaches the last
/// row. On success the result carries the resulting FEN, the capture, check,
/// castle and en passant flags, and checkmate or stalemate of the opponent.
///
/// A promotion piece supplied for a move that does not promote is ignored.
pub fn validate_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> MoveValidation {
    let accepted = match run_gates(board, from, to, promotion) {
        Ok(accepted) => accepted,
        Err(reason) => {
            tracing::debug!("rejected {}{}: {}", from, to, reason);
            return MoveValidation::rejected(reason);
        }
    };

    let mut result = MoveValidation {
        is_capture: accepted.is_capture,
        is_check: accepted.is_check,
        is_castle: matches!(accepted.kind, MoveKind::Castle(_)),
        is_en_passant: accepted.kind == MoveKind::EnPassant,
        requires_promotion: accepted.requires_promotion,
        ..Default::default()
    };

    if let Some(reason) = promotion_rejection(accepted.requires_promotion, promotion) {
        tracing::debug!("rejected {}{}: {}", from, to, reason);
        result.reason = Some(reason);
        return result;
    }

    let opponent = accepted.next.turn;
    if !has_legal_moves(&accepted.next, opponent) {
        result.is_checkmate = accepted.is_check;
        result.is_stalemate = !accepted.is_check;
    }

    result.valid = true;
    let fen = accepted.next.to_fen();
    tracing::trace!("accepted {}{} -> {}", from, to, fen);
    result.next_board_state = Some(fen);
    result
}

/// Validates a [`Move`].
pub fn validate(board: &Board, m: Move) -> MoveValidation {
    validate_move(board, m.from, m.to, m.promotion)
}

/// Validates a move given as text.
///
/// Text that is not square-shaped, or a promotion letter other than
/// `q`, `r`, `b`, `n`, is a caller error. A square-shaped name off the board
/// (`i2`, `a9`) is an ordinary rejection with reason "Invalid square".
pub fn validate_move_str(
    board: &Board,
    from: &str,
    to: &str,
    promotion: Option<&str>,
) -> Result<MoveValidation, MoveParseError> {
    let from = Square::parse(from);
    let to = Square::parse(to);
    let promotion = promotion.map(Move::parse_promotion).transpose()?;

    match (from, to) {
        (Ok(from), Ok(to)) => Ok(validate_move(board, from, to, promotion)),
        (Err(SquareError::Malformed(s)), _) | (_, Err(SquareError::Malformed(s))) => {
            Err(SquareError::Malformed(s).into())
        }
        _ => {
            tracing::debug!("rejected move with off-board square");
            Ok(MoveValidation::rejected(Rejection::InvalidSquare))
        }
    }
}

/// Returns every legal move for the side to move.
///
/// Each promoting pawn move is listed once per promotion piece.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece, color) in board.pieces() {
        if color != board.turn {
            continue;
        }
        for to in Square::all() {
            if !is_legal(board, from, to, Some(Piece::Queen)) {
                continue;
            }
            if piece == Piece::Pawn && to.row() == color.promotion_row() {
                for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
                    moves.push(Move::with_promotion(from, to, piece));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Returns true if `color` has at least one legal move.
///
/// Every piece of `color` is tried against every destination through the
/// full validation gates, with `color` treated as the side to move.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    let mut board = board.clone();
    board.turn = color;
    let found = board
        .pieces()
        .filter(|&(_, _, c)| c == color)
        .any(|(from, _, _)| {
            Square::all().any(|to| is_legal(&board, from, to, Some(Piece::Queen)))
        });
    found
}

/// Classifies the position for the side to move.
pub fn game_status(board: &Board) -> GameStatus {
    let in_check = is_king_in_check(board, board.turn);
    match (in_check, has_legal_moves(board, board.turn)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}
