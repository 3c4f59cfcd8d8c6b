//! Board state and its FEN encoding.

use chessrules_core::{Color, FenError, FenParser, Piece, Square};

/// Which side of the board a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Returns the file the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Returns the rook's corner square and the square it lands on.
    pub const fn rook_squares(self, color: Color) -> (Square, Square) {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => (Square::H1, Square::F1),
            (CastleSide::Queenside, Color::White) => (Square::A1, Square::D1),
            (CastleSide::Kingside, Color::Black) => (Square::H8, Square::F8),
            (CastleSide::Queenside, Color::Black) => (Square::A8, Square::D8),
        }
    }
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` may still castle to `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// Removes one castling right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes the right tied to a rook corner, if `sq` is one.
    ///
    /// Called for both the source and destination of every move, which covers
    /// a rook leaving its corner and a rook being captured on it.
    pub fn remove_corner(&mut self, sq: Square) {
        match sq {
            Square::H1 => self.remove(Color::White, CastleSide::Kingside),
            Square::A1 => self.remove(Color::White, CastleSide::Queenside),
            Square::H8 => self.remove(Color::Black, CastleSide::Kingside),
            Square::A8 => self.remove(Color::Black, CastleSide::Queenside),
            _ => {}
        }
    }

    /// Parses the FEN castling field. Unknown characters are ignored; the
    /// field has already been validated by [`FenParser`].
    fn from_fen_field(field: &str) -> Self {
        let mut flags = 0u8;
        for c in field.chars() {
            match c {
                'K' => flags |= Self::WHITE_KINGSIDE,
                'Q' => flags |= Self::WHITE_QUEENSIDE,
                'k' => flags |= Self::BLACK_KINGSIDE,
                'q' => flags |= Self::BLACK_QUEENSIDE,
                _ => {}
            }
        }
        CastlingRights(flags)
    }

    /// Renders the FEN castling field (`KQkq` order, `-` when empty).
    fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut field = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.has(color, side) {
                field.push(c);
            }
        }
        field
    }
}

/// A chess position as seen by the rules engine.
///
/// The 64 cells are stored in [`Square`] order (a8 first, h1 last). Every cell
/// is either `Some((piece, color))` or `None` for an empty square.
///
/// Engine operations never modify a board they are given; each validated move
/// produces a new `Board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],

    /// The side to move.
    pub turn: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// Square a pawn skipped with a double push on the previous move.
    pub en_passant: Option<Square>,
}

impl Board {
    /// Creates a board with no pieces, White to move, and no rights.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            turn: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            for color in [Color::White, Color::Black] {
                board.put(file, color.back_row(), Some((*piece, color)));
                board.put(file, color.pawn_row(), Some((Piece::Pawn, color)));
            }
        }
        board.castling = CastlingRights::ALL;
        board
    }

    fn put(&mut self, file: i8, row: i8, cell: Option<(Piece, Color)>) {
        if let Some(sq) = Square::from_coords(file, row) {
            self.set(sq, cell);
        }
    }

    /// Creates a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = Board::empty();

        // Placement ranks arrive in storage-row order (rank 8 first).
        for (row, rank_str) in parsed.piece_placement.split('/').enumerate() {
            let mut file = 0i8;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as i8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.put(file, row as i8, Some(piece));
                    file += 1;
                }
            }
        }

        board.turn = parsed.active_color;
        board.castling = CastlingRights::from_fen_field(&parsed.castling);
        board.en_passant = parsed.en_passant;

        Ok(board)
    }

    /// Converts the board to a four-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(72);

        for row in 0..8 {
            let mut empty_count = 0;
            for file in 0..8 {
                match Square::from_coords(file, row).and_then(|sq| self.piece_at(sq)) {
                    Some((piece, color)) => {
                        if empty_count > 0 {
                            placement.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic());

        format!(
            "{} {} {} {}",
            placement,
            self.turn.to_fen_char(),
            self.castling.to_fen_field(),
            en_passant
        )
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Places a piece on (or clears) a square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<(Piece, Color)>) {
        self.squares[sq.index() as usize] = cell;
    }

    /// Returns a copy of the board with `sq` set to `cell`.
    pub fn with(mut self, sq: Square, cell: Option<(Piece, Color)>) -> Self {
        self.set(sq, cell);
        self
    }

    /// Returns true if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns the square of the king of `color`, if there is one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find_map(|(sq, piece, c)| (piece == Piece::King && c == color).then_some(sq))
    }

    /// Iterates over occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .map(|(piece, color)| (sq, piece, color))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Decodes a FEN string into a board.
pub fn decode(fen: &str) -> Result<Board, FenError> {
    Board::from_fen(fen)
}

/// Encodes a board as a four-field FEN string.
pub fn encode(board: &Board) -> String {
    board.to_fen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessrules_core::{File, Rank};

    #[test]
    fn startpos_matches_fen() {
        let board = Board::startpos();
        assert_eq!(board.to_fen(), FenParser::STARTPOS);
        assert_eq!(Board::from_fen(FenParser::STARTPOS).unwrap(), board);
    }

    #[test]
    fn custom_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b Kq e3";
        let board = decode(fen).unwrap();
        assert_eq!(encode(&board), fen);
    }

    #[test]
    fn six_field_fen_encodes_as_four() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board.to_fen(), FenParser::STARTPOS);
    }

    #[test]
    fn decode_rejects_short_fen() {
        assert!(matches!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq"),
            Err(FenError::InvalidPartCount(3))
        ));
    }

    #[test]
    fn piece_at() {
        let board = Board::startpos();
        assert_eq!(board.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(board.piece_at(Square::E8), Some((Piece::King, Color::Black)));
        assert_eq!(board.piece_at(Square::new(File::E, Rank::R4)), None);
        assert_eq!(
            board.piece_at(Square::new(File::A, Rank::R2)),
            Some((Piece::Pawn, Color::White))
        );
    }

    #[test]
    fn startpos_has_32_pieces_and_both_kings() {
        let board = Board::startpos();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn castling_rights() {
        let mut rights = CastlingRights::ALL;
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));

        rights.remove(Color::White, CastleSide::Kingside);
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn castling_rights_remove_color() {
        let mut rights = CastlingRights::ALL;
        rights.remove_color(Color::White);
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn castling_rights_remove_corner() {
        let mut rights = CastlingRights::ALL;
        rights.remove_corner(Square::A8);
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        rights.remove_corner(Square::E1);
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn castling_field() {
        assert_eq!(CastlingRights::NONE.to_fen_field(), "-");
        assert_eq!(CastlingRights::ALL.to_fen_field(), "KQkq");
        assert_eq!(CastlingRights::from_fen_field("qK").to_fen_field(), "Kq");
    }

    #[test]
    fn board_with_en_passant() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.en_passant, Some(Square::new(File::E, Rank::R3)));
        assert_eq!(board.turn, Color::Black);
        assert_eq!(board.to_fen(), fen);
    }
}
