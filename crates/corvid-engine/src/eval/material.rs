//! Material balance: own piece values minus the opponent's, king excluded.

use corvid_core::Board;

use super::material_sum;

pub(super) fn material_balance(board: &Board) -> f64 {
    let mover = board.side_to_move();
    let own = material_sum(board, mover);
    let opponent = material_sum(board, mover.opponent());
    (own - opponent) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_core::{Board, Square};

    #[test]
    fn starting_position_has_zero_material_balance() {
        assert_eq!(material_balance(&Board::starting_position()), 0.0);
    }

    #[test]
    fn losing_a_piece_moves_the_balance() {
        let board = Board::starting_position();
        let after_push = board.make_move(Square::new(4, 1).unwrap(), Square::new(4, 3).unwrap()).unwrap();
        let after_reply = after_push.make_move(Square::new(3, 6).unwrap(), Square::new(3, 4).unwrap()).unwrap();
        let after_capture = after_reply.make_move(Square::new(4, 3).unwrap(), Square::new(3, 4).unwrap()).unwrap();
        assert_eq!(material_balance(&after_capture), -1.0);
    }
}
