//! Pawn generation: forward pushes and diagonal captures/attacks.
//!
//! Pawns are the one piece whose move set genuinely differs across
//! [`Purpose`]: a diagonal step is a capture under [`Purpose::Legality`], an
//! attack square under [`Purpose::Check`] regardless of occupancy, and
//! always counted under [`Purpose::Evaluation`]; a forward push is a move
//! under `Legality`/`Evaluation` but never an attack, so it is excluded
//! entirely under `Check`.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::square::Square;

use super::{MoveList, Purpose};

pub(super) fn generate(board: &Board, square: Square, purpose: Purpose, out: &mut MoveList) {
    let mover = board
        .piece_on(square)
        .expect("generate is only called on an occupied square")
        .color();
    let (push, diagonals, start_rank) = match mover {
        Color::White => (Direction::N, [Direction::NE, Direction::NW], 1),
        Color::Black => (Direction::S, [Direction::SE, Direction::SW], 6),
    };

    if purpose != Purpose::Check {
        generate_pushes(board, square, push, start_rank, out);
    }

    for diagonal in diagonals {
        let target = square.step(diagonal);
        if !target.on_board() {
            continue;
        }
        let occupant = board.piece_on(target);
        let keep = match purpose {
            Purpose::Legality => occupant.is_some_and(|p| p.color() != mover),
            Purpose::Check | Purpose::Evaluation => true,
        };
        if keep {
            out.push(Move::new(square, target));
        }
    }
}

fn generate_pushes(board: &Board, square: Square, push: Direction, start_rank: i8, out: &mut MoveList) {
    let one = square.step(push);
    if !one.on_board() || board.piece_on(one).is_some() {
        return;
    }
    out.push(Move::new(square, one));

    if square.rank() == start_rank {
        let two = one.step(push);
        if two.on_board() && board.piece_on(two).is_none() {
            out.push(Move::new(square, two));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    #[test]
    fn pawn_on_start_rank_has_two_pushes() {
        let mut board = Board::empty_no_rights();
        let from = Square::new(4, 1).unwrap();
        board.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Legality, &mut out);
        assert!(out.contains_to(Square::new(4, 2).unwrap()));
        assert!(out.contains_to(Square::new(4, 3).unwrap()));
    }

    #[test]
    fn pawn_double_push_blocked_if_intermediate_occupied() {
        let mut board = Board::empty_no_rights();
        let from = Square::new(4, 1).unwrap();
        board.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(4, 2).unwrap(), Some(Piece::new(PieceKind::Knight, Color::Black)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Legality, &mut out);
        assert!(!out.contains_to(Square::new(4, 2).unwrap()));
        assert!(!out.contains_to(Square::new(4, 3).unwrap()));
    }

    #[test]
    fn diagonal_requires_enemy_under_legality() {
        let mut board = Board::empty_no_rights();
        let from = Square::new(4, 1).unwrap();
        board.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Legality, &mut out);
        assert!(!out.contains_to(Square::new(5, 2).unwrap()));

        board.set(Square::new(5, 2).unwrap(), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Legality, &mut out);
        assert!(out.contains_to(Square::new(5, 2).unwrap()));
    }

    #[test]
    fn diagonal_counts_under_check_even_if_empty() {
        let mut board = Board::empty_no_rights();
        let from = Square::new(4, 1).unwrap();
        board.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Check, &mut out);
        assert!(out.contains_to(Square::new(5, 2).unwrap()));
        assert!(out.contains_to(Square::new(3, 2).unwrap()));
    }

    #[test]
    fn forward_push_excluded_under_check() {
        let mut board = Board::empty_no_rights();
        let from = Square::new(4, 1).unwrap();
        board.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        let mut out = MoveList::new();
        generate(&board, from, Purpose::Check, &mut out);
        assert!(!out.contains_to(Square::new(4, 2).unwrap()));
    }
}
