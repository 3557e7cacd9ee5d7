//! Pawn-advance term: reward pawns for marching toward promotion.

use corvid_core::{Board, Color, PieceKind, Square};

const ADVANCE_WEIGHT: f64 = 0.001;

pub(super) fn pawn_advance(board: &Board) -> f64 {
    let mover = board.side_to_move();
    board
        .occupied()
        .filter(|(_, p)| p.color() == mover && p.kind() == PieceKind::Pawn)
        .map(|(sq, _)| {
            let r = offsides_rank(sq, mover) as f64;
            r * r * ADVANCE_WEIGHT
        })
        .sum()
}

fn offsides_rank(square: Square, color: Color) -> i8 {
    match color {
        Color::White => square.rank(),
        Color::Black => 7 - square.rank(),
    }
}
