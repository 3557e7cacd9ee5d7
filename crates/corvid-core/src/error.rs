//! Error taxonomy for board construction and move application.

use thiserror::Error;

use crate::square::Square;

/// A file or rank fell outside `0..=7`.
///
/// This is a programming error: callers are expected to supply coordinates
/// already validated against the board's own 0-7 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate out of range: file={file}, rank={rank}")]
pub struct IndexOutOfRange {
    pub file: i8,
    pub rank: i8,
}

/// Why a requested move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// No piece of the side to move sits on the source square.
    NoPieceAtSource,
    /// The destination is not in the Legality-purpose move set from the
    /// source.
    UnreachableDestination,
    /// The move would leave (or keep) the mover's own king in check.
    LeavesKingInCheck,
    /// A castling move passes through or lands on an attacked square.
    CastlingThroughCheck,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidMoveReason::NoPieceAtSource => "no piece of the side to move at source",
            InvalidMoveReason::UnreachableDestination => {
                "destination is not reachable by the piece's movement rules"
            }
            InvalidMoveReason::LeavesKingInCheck => "move leaves the mover's king in check",
            InvalidMoveReason::CastlingThroughCheck => "castling path is attacked",
        };
        write!(f, "{text}")
    }
}

/// A requested move was rejected by [`crate::Board::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move {from} -> {to}: {reason}")]
pub struct MoveError {
    pub from: Square,
    pub to: Square,
    pub reason: InvalidMoveReason,
}
