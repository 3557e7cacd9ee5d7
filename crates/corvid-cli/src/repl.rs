//! A minimal line-oriented driver over a `Board`.
//!
//! Not a protocol: just enough to move pieces, ask for a search, and look
//! at the board from a terminal. Command-line drivers are explicitly out
//! of scope for where this crate's design lives; this exists so the engine
//! is reachable by hand at all.

use std::io::{BufRead, Write};

use corvid_core::{Board, Square};
use corvid_engine::search_within;
use tracing::info;

use crate::error::CliError;

/// Interactive session state: the current position and the search budget
/// applied to `think`.
pub struct Repl {
    board: Board,
    think_budget_ms: u64,
}

impl Repl {
    pub fn new(think_budget_ms: u64) -> Repl {
        Repl {
            board: Board::starting_position(),
            think_budget_ms,
        }
    }

    /// Run the read-eval-print loop until input is exhausted or `quit` is
    /// entered.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" {
                return Ok(());
            }
            match self.dispatch(line) {
                Ok(Some(text)) => writeln!(output, "{text}")?,
                Ok(None) => {}
                Err(err) => writeln!(output, "error: {err}")?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<Option<String>, CliError> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("show") => Ok(Some(self.board.to_string())),
            Some("move") => {
                let (from, to) = match (parts.next(), parts.next()) {
                    (Some(from), Some(to)) => (parse_square(from)?, parse_square(to)?),
                    _ => return Err(CliError::UnknownCommand(line.to_string())),
                };
                self.board = self.board.make_move(from, to)?;
                Ok(Some(self.board.to_string()))
            }
            Some("think") => {
                info!(budget_ms = self.think_budget_ms, "searching");
                self.board = search_within(&self.board, self.think_budget_ms);
                Ok(Some(self.board.to_string()))
            }
            _ => Err(CliError::UnknownCommand(line.to_string())),
        }
    }
}

fn parse_square(text: &str) -> Result<Square, CliError> {
    let mut chars = text.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CliError::BadSquare(text.to_string()));
    };
    if !file_char.is_ascii_lowercase() || !rank_char.is_ascii_digit() {
        return Err(CliError::BadSquare(text.to_string()));
    }
    let file = file_char as i8 - b'a' as i8;
    let rank = rank_char as i8 - b'1' as i8;
    Square::new(file, rank).map_err(|_| CliError::BadSquare(text.to_string()))
}
