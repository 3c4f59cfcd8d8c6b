//! REPL command parsing.

use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Commands accepted by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate and, if legal, play a move.
    Move {
        from: String,
        to: String,
        promotion: Option<String>,
    },
    /// Print the board.
    Board,
    /// List the moves played so far.
    Moves,
    /// List legal moves for the side to move.
    Legal,
    /// Print check, checkmate, or stalemate for the side to move.
    Status,
    /// Print the current position as FEN.
    Fen,
    /// Replace the current position.
    Load(String),
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Empty,
}

const MOVE_USAGE: &str = "move <from> <to> [q|r|b|n]";
const LOAD_USAGE: &str = "load <fen>";

impl Command {
    /// Parses one line of input.
    ///
    /// Input is case-insensitive except for the FEN after `load`. A single
    /// token shaped like coordinate notation (`e2e4`, `e7e8q`) is read as a
    /// move.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match cmd.as_str() {
            "" => Ok(Command::Empty),
            "move" | "m" => Self::parse_move(&args),
            "board" | "b" => Ok(Command::Board),
            "moves" | "history" => Ok(Command::Moves),
            "legal" => Ok(Command::Legal),
            "status" => Ok(Command::Status),
            "fen" => Ok(Command::Fen),
            "load" if args.is_empty() => Err(CommandError::Usage(LOAD_USAGE)),
            "load" => Ok(Command::Load(args.join(" "))),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            token if args.is_empty() => Self::parse_coordinate(token),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }

    fn parse_move(args: &[&str]) -> Result<Self, CommandError> {
        match args {
            [from, to] => Ok(Command::Move {
                from: from.to_ascii_lowercase(),
                to: to.to_ascii_lowercase(),
                promotion: None,
            }),
            [from, to, promotion] => Ok(Command::Move {
                from: from.to_ascii_lowercase(),
                to: to.to_ascii_lowercase(),
                promotion: Some(promotion.to_ascii_lowercase()),
            }),
            _ => Err(CommandError::Usage(MOVE_USAGE)),
        }
    }

    /// Splits `e2e4` / `e7e8q` into squares; the engine judges the squares.
    fn parse_coordinate(token: &str) -> Result<Self, CommandError> {
        let bytes = token.as_bytes();
        let shaped = token.is_ascii()
            && (4..=5).contains(&bytes.len())
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit();
        if !shaped {
            return Err(CommandError::Unknown(token.to_string()));
        }
        Ok(Command::Move {
            from: token[0..2].to_string(),
            to: token[2..4].to_string(),
            promotion: (token.len() == 5).then(|| token[4..].to_string()),
        })
    }
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  move <from> <to> [q|r|b|n]   play a move (also: e2e4, e7e8q)
  board                        show the board
  moves                        list moves played
  legal                        list legal moves
  status                       show check, checkmate or stalemate
  fen                          print the position as FEN
  load <fen>                   set up a position
  help                         show this text
  quit | exit                  leave";
