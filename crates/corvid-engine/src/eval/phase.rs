//! Phase-dependent terms, driven by the mover's own remaining material.

use corvid_core::{Board, CastlingDirection, CastlingRight, Color, Direction, PieceKind};

use super::material_sum;

/// Above this own-material threshold the position counts as the opening.
const OPENING_MATERIAL_THRESHOLD: i64 = 35;
/// Below this own-material threshold the position counts as the endgame.
const ENDGAME_MATERIAL_THRESHOLD: i64 = 8;

const QUEEN_ADVANCE_PENALTY_PER_RANK: f64 = 0.01;
const CASTLING_RIGHT_BONUS: f64 = 0.005;
const KING_MOBILITY_BONUS_PER_MOVE: f64 = 0.01;

pub(super) fn phase_terms(board: &Board) -> f64 {
    let mover = board.side_to_move();
    let own_material = material_sum(board, mover);

    if own_material > OPENING_MATERIAL_THRESHOLD {
        opening_terms(board, mover)
    } else if own_material < ENDGAME_MATERIAL_THRESHOLD {
        endgame_terms(board, mover)
    } else {
        0.0
    }
}

fn opening_terms(board: &Board, mover: Color) -> f64 {
    let queen_penalty: f64 = board
        .occupied()
        .filter(|(_, p)| p.color() == mover && p.kind() == PieceKind::Queen)
        .map(|(sq, _)| offsides_rank(sq, mover) as f64 * QUEEN_ADVANCE_PENALTY_PER_RANK)
        .sum();

    let rights_held = [CastlingDirection::East, CastlingDirection::West]
        .into_iter()
        .filter(|&direction| board.castling_rights().has(CastlingRight::new(mover, direction)))
        .count();

    -queen_penalty + rights_held as f64 * CASTLING_RIGHT_BONUS
}

fn endgame_terms(board: &Board, mover: Color) -> f64 {
    let Some(king_square) = board.king_square(mover) else {
        return 0.0;
    };
    let mobility = Direction::ALL
        .into_iter()
        .filter(|&direction| king_square.step(direction).on_board())
        .count();
    mobility as f64 * KING_MOBILITY_BONUS_PER_MOVE
}

fn offsides_rank(square: corvid_core::Square, color: Color) -> i8 {
    match color {
        Color::White => square.rank(),
        Color::Black => 7 - square.rank(),
    }
}
