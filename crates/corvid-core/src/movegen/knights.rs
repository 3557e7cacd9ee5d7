//! Knight generation: eight fixed jump offsets, one square each.

use crate::board::Board;
use crate::direction::Direction;
use crate::square::Square;

use super::{occupant_outcome, MoveList, Purpose};

pub(super) fn generate(board: &Board, square: Square, purpose: Purpose, out: &mut MoveList) {
    let mover = board
        .piece_on(square)
        .expect("generate is only called on an occupied square")
        .color();
    for &delta in &Direction::KNIGHT_OFFSETS {
        let target = square.offset_by(delta);
        if !target.on_board() {
            continue;
        }
        let (keep, _stop) = occupant_outcome(purpose, board.piece_on(target), mover);
        if keep {
            out.push(crate::chess_move::Move::new(square, target));
        }
    }
}
