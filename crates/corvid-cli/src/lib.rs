//! A thin, non-protocol line interface over the chess engine.
//!
//! Deliberately minimal: command-line drivers are an external collaborator
//! to the engine's design, not part of it.

mod error;
mod repl;

pub use error::CliError;
pub use repl::Repl;
