//! Errors surfaced to a REPL user.

use thiserror::Error;

/// Something the REPL could not do on the caller's behalf.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("not a square in algebraic notation: {0:?}")]
    BadSquare(String),
    #[error("don't understand command: {0:?}")]
    UnknownCommand(String),
    #[error(transparent)]
    Move(#[from] corvid_core::MoveError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
