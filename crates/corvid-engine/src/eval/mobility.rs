//! Mobility, attack, and center-control term.

use corvid_core::{generate_moves, Board, Purpose};

use super::material_sum;

/// Flat per-move bonus for a mobility target, split so the components read
/// the way the source does: a base move-availability credit, a small
/// attack-availability credit, and an occupied-target credit capped so a
/// queen "attacking" a pawn doesn't dwarf everything else.
const BASE_MOVE_CREDIT: f64 = 0.01;
const ATTACK_AVAILABILITY_CREDIT: f64 = 0.001;
const OCCUPIED_TARGET_CAP: i64 = 50;
const EMPTY_TARGET_CREDIT: f64 = 0.011;

pub(super) fn mobility_and_attack(board: &Board) -> f64 {
    let mover = board.side_to_move();
    let opponent_material = material_sum(board, mover.opponent()) as f64;

    let mut total = 0.0;
    for mv in generate_moves(board, Purpose::Evaluation).iter() {
        let target = mv.to();
        total += match board.piece_on(target) {
            Some(piece) => {
                BASE_MOVE_CREDIT
                    + ATTACK_AVAILABILITY_CREDIT
                    + (piece.value().min(OCCUPIED_TARGET_CAP) as f64) / 100.0
            }
            None => EMPTY_TARGET_CREDIT,
        };
        total += target.distance_from_edge() as f64 * (opponent_material / 1000.0);
    }
    total
}
