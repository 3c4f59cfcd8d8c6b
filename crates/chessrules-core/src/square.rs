//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a square from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SquareError {
    /// Not a lowercase letter followed by a digit.
    #[error("malformed square '{0}': expected a file letter followed by a rank digit")]
    Malformed(String),

    /// A letter and a digit, but not one of the 64 board squares.
    #[error("square '{0}' is off the board")]
    OutOfRange(String),
}

/// A file (column), `a` through `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    const ORDER: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Returns the file with index 0-7 (a = 0).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ORDER[index as usize])
        } else {
            None
        }
    }

    /// Reads a lowercase file letter.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Self::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.index()) as char)
    }
}

/// A rank (row as a player reads it), `1` through `8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Rank {
    const ORDER: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Returns the rank with index 0-7 (rank 1 = 0).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ORDER[index as usize])
        } else {
            None
        }
    }

    /// Reads a rank digit.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Self::from_index(c as u8 - b'1'),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are stored rank-major starting from the black side, matching the
/// order in which FEN lists them:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// [`Square::row`] is the storage row (0 holds rank 8); [`Square::rank`] is the
/// algebraic rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square((7 - rank.index()) * 8 + file.index())
    }

    /// Creates a square from a file index and storage row, both signed so
    /// callers can step off the board and get `None` back.
    #[inline]
    pub const fn from_coords(file: i8, row: i8) -> Option<Self> {
        if file < 0 || file > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Square((row * 8 + file) as u8))
        }
    }

    /// Reads a square name such as `e4`; `None` for anything else.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[f, r] => Some(Square::new(
                File::from_char(f as char)?,
                Rank::from_char(r as char)?,
            )),
            _ => None,
        }
    }

    /// Parses a square, separating text that is not square-shaped at all from
    /// square-shaped text that names a square off the board.
    pub fn parse(s: &str) -> Result<Self, SquareError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes[0].is_ascii_lowercase() || !bytes[1].is_ascii_digit() {
            return Err(SquareError::Malformed(s.to_string()));
        }
        Self::from_algebraic(s).ok_or_else(|| SquareError::OutOfRange(s.to_string()))
    }

    /// Returns an iterator over all 64 squares in storage order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file index (0-7).
    #[inline]
    pub const fn file_index(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Returns the storage row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ORDER[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ORDER[(7 - self.0 / 8) as usize]
    }

    /// Returns the square offset by the given file and row deltas, if on the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, row_delta: i8) -> Option<Self> {
        Self::from_coords(self.file_index() + file_delta, self.row() + row_delta)
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    // Back-row squares used by castling.
    pub const A1: Square = Square(56);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
    pub const A8: Square = Square(0);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl std::str::FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
