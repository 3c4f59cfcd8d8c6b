//! Interactive session over a reader and a writer.

use crate::command::{Command, HELP};
use crate::render::render_board;
use chessrules::{
    decode, game_status, legal_moves, validate_move_str, Board, File, MoveValidation, Square,
};
use std::io::{BufRead, Write};

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game in progress: the current board and the moves that led to it.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    board: Board,
    history: Vec<String>,
    unicode: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, board: Board, unicode: bool) -> Self {
        Self {
            reader,
            writer,
            board,
            history: Vec::new(),
            unicode,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played since the last `load`.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Consumes the session, returning the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> std::io::Result<()> {
        write!(self.writer, "{}", render_board(&self.board, self.unicode))?;
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Ok(());
            }

            let flow = match Command::parse(&line) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    writeln!(self.writer, "{}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Executes one command, writing its output.
    pub fn execute(&mut self, command: Command) -> std::io::Result<Flow> {
        tracing::debug!("command: {:?}", command);
        match command {
            Command::Move {
                from,
                to,
                promotion,
            } => self.play(&from, &to, promotion.as_deref())?,
            Command::Board => {
                write!(self.writer, "{}", render_board(&self.board, self.unicode))?;
            }
            Command::Moves => {
                if self.history.is_empty() {
                    writeln!(self.writer, "No moves yet")?;
                } else {
                    writeln!(self.writer, "{}", self.numbered_history())?;
                }
            }
            Command::Legal => {
                let moves: Vec<String> = legal_moves(&self.board)
                    .into_iter()
                    .map(|m| m.to_uci())
                    .collect();
                writeln!(self.writer, "{} legal moves: {}", moves.len(), moves.join(" "))?;
            }
            Command::Status => {
                writeln!(
                    self.writer,
                    "{} to move: {}",
                    self.board.turn,
                    game_status(&self.board)
                )?;
            }
            Command::Fen => writeln!(self.writer, "{}", self.board.to_fen())?,
            Command::Load(fen) => match decode(&fen) {
                Ok(board) => {
                    tracing::info!("loaded position {}", fen);
                    self.board = board;
                    self.history.clear();
                    write!(self.writer, "{}", render_board(&self.board, self.unicode))?;
                }
                Err(e) => writeln!(self.writer, "error: {}", e)?,
            },
            Command::Help => writeln!(self.writer, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, from: &str, to: &str, promotion: Option<&str>) -> std::io::Result<()> {
        let result = match validate_move_str(&self.board, from, to, promotion) {
            Ok(result) => result,
            Err(e) => return writeln!(self.writer, "error: {}", e),
        };

        let next = match result.next_board() {
            Some(next) if result.valid => next,
            _ => return writeln!(self.writer, "illegal: {}", result.reason_str()),
        };

        self.history
            .push(history_entry(&result, from, to, promotion));
        self.board = next;

        let note = outcome(&result);
        if note.is_empty() {
            writeln!(self.writer, "ok")
        } else {
            writeln!(self.writer, "ok ({})", note)
        }
    }

    /// Formats the history in move pairs: `1. e2e4 e7e5 2. O-O`.
    fn numbered_history(&self) -> String {
        self.history
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Castles are recorded as `O-O` / `O-O-O`, everything else as coordinates.
fn history_entry(result: &MoveValidation, from: &str, to: &str, promotion: Option<&str>) -> String {
    if result.is_castle {
        let kingside = Square::parse(to).is_ok_and(|sq| sq.file() == File::G);
        return if kingside { "O-O" } else { "O-O-O" }.to_string();
    }
    format!("{}{}{}", from, to, promotion.unwrap_or(""))
}

fn outcome(result: &MoveValidation) -> String {
    let mut notes = Vec::new();
    if result.is_capture {
        notes.push("capture");
    }
    if result.is_en_passant {
        notes.push("en passant");
    }
    if result.is_castle {
        notes.push("castle");
    }
    if result.is_checkmate {
        notes.push("checkmate");
    } else if result.is_stalemate {
        notes.push("stalemate");
    } else if result.is_check {
        notes.push("check");
    }
    notes.join(", ")
}
