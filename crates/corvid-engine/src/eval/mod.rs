//! Position evaluation: material, mobility, phase, and pawn-advance terms.
//!
//! Every term is additive and returns a score from the side-to-move's
//! viewpoint, larger is better. [`evaluate`] is a free function rather than
//! a method on [`Board`] because evaluation is a policy layered on top of
//! the board representation, not a property the board itself carries.

mod material;
mod mobility;
mod pawns;
mod phase;

use corvid_core::{Board, Color, PieceKind};

/// Half-moves since the last capture beyond which the position is a
/// fifty-move draw, mirrored from [`corvid_core::Board::is_draw`]'s own
/// threshold so the evaluator can short-circuit before summing terms.
const FIFTY_MOVE_LIMIT: u32 = 49;

/// Score `board` from its side to move's perspective.
///
/// A fifty-move-rule draw returns `0.0` unconditionally; checkmate at the
/// root is the search's concern, not the evaluator's (see
/// [`crate::search::negamax`]).
pub fn evaluate(board: &Board) -> f64 {
    if board.halfmove_clock() > FIFTY_MOVE_LIMIT {
        return 0.0;
    }
    material::material_balance(board)
        + mobility::mobility_and_attack(board)
        + phase::phase_terms(board)
        + pawns::pawn_advance(board)
}

/// Sum of `color`'s piece values, excluding the king.
fn material_sum(board: &Board, color: Color) -> i64 {
    board
        .occupied()
        .filter(|(_, p)| p.color() == color && p.kind() != PieceKind::King)
        .map(|(_, p)| p.value())
        .sum()
}
