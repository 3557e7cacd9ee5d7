//! Rook/bishop/queen generation: sliding in a direction set until blocked.

use crate::board::Board;
use crate::direction::Direction;
use crate::square::Square;

use super::{slide, MoveList, Purpose};

pub(super) fn generate(
    board: &Board,
    square: Square,
    directions: &[Direction],
    purpose: Purpose,
    out: &mut MoveList,
) {
    for &direction in directions {
        slide(board, square, direction, purpose, u8::MAX, out);
    }
}
