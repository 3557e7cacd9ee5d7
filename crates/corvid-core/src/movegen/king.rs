//! King generation: one step in any direction, plus castling candidates.
//!
//! Castling legality is only partly decided here: this module checks that
//! the right still stands and that the squares the king and rook must pass
//! through are empty. Whether the king's origin, transit, or destination
//! square is *attacked* is checked at the move-application gate, because
//! that check itself requires generating the opponent's moves on a
//! side-swapped board — a concern the generator has no need to know about.

use crate::board::Board;
use crate::castle_rights::CastlingDirection;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::square::Square;

use super::{occupant_outcome, MoveList, Purpose};

pub(super) fn generate(board: &Board, square: Square, purpose: Purpose, out: &mut MoveList) {
    let mover = board
        .piece_on(square)
        .expect("generate is only called on an occupied square")
        .color();
    for direction in Direction::ALL {
        let target = square.step(direction);
        if !target.on_board() {
            continue;
        }
        let (keep, _stop) = occupant_outcome(purpose, board.piece_on(target), mover);
        if keep {
            out.push(Move::new(square, target));
        }
    }

    if purpose == Purpose::Legality {
        generate_castling(board, square, mover, out);
    }
}

fn generate_castling(board: &Board, king_square: Square, mover: crate::color::Color, out: &mut MoveList) {
    let rank = king_square.rank();
    let king_file = king_square.file();

    if board.has_castling_right(mover, CastlingDirection::East) {
        let empty = (king_file + 1..=king_file + 2)
            .all(|file| board.piece_on(Square::new(file, rank).unwrap()).is_none());
        if empty {
            out.push(Move::new(king_square, Square::new(king_file + 2, rank).unwrap()));
        }
    }

    if board.has_castling_right(mover, CastlingDirection::West) {
        let empty = (king_file - 3..=king_file - 1)
            .all(|file| board.piece_on(Square::new(file, rank).unwrap()).is_none());
        if empty {
            out.push(Move::new(king_square, Square::new(king_file - 2, rank).unwrap()));
        }
    }
}
