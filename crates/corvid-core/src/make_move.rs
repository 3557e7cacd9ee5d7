//! Move validation and board mutation: the legality gate.

use crate::board::Board;
use crate::castle_rights::{CastlingDirection, CastlingRight};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{InvalidMoveReason, MoveError};
use crate::movegen::{generate_moves, Purpose};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const KING_HOME_FILE: i8 = 4;

/// Validate and apply a move, producing the successor board.
///
/// Validation, in order: a piece of the side to move sits at `from`; `to`
/// is in the Legality-purpose move set from `from`; if the move is a
/// castle, none of the king's origin, transit, or destination squares are
/// attacked; and the resulting position does not leave the mover's own
/// king in check.
pub(crate) fn make_move(board: &Board, from: Square, to: Square) -> Result<Board, MoveError> {
    let mover = board.side_to_move();
    let piece = match board.piece_on(from) {
        Some(p) if p.color() == mover => p,
        _ => {
            return Err(MoveError {
                from,
                to,
                reason: InvalidMoveReason::NoPieceAtSource,
            })
        }
    };

    let pseudo_legal = generate_moves(board, Purpose::Legality);
    if !pseudo_legal.iter().any(|m| m.from() == from && m.to() == to) {
        return Err(MoveError {
            from,
            to,
            reason: InvalidMoveReason::UnreachableDestination,
        });
    }

    let candidate = Move::new(from, to);
    let is_castle = piece.kind() == PieceKind::King && candidate.is_two_square_king_step(KING_HOME_FILE);

    if is_castle {
        let rank = from.rank();
        let step: i8 = if to.file() > from.file() { 1 } else { -1 };
        let transit = Square::new(from.file() + step, rank).unwrap();
        for square in [from, transit, to] {
            if is_attacked(board, square, mover.opponent()) {
                return Err(MoveError {
                    from,
                    to,
                    reason: InvalidMoveReason::CastlingThroughCheck,
                });
            }
        }
    }

    let successor = apply(board, from, to, piece, is_castle);

    let king_square = successor
        .king_square(mover)
        .expect("a side with a pseudo-legal move always still has a king");
    if generate_moves(&successor, Purpose::Check).contains_to(king_square) {
        return Err(MoveError {
            from,
            to,
            reason: InvalidMoveReason::LeavesKingInCheck,
        });
    }

    Ok(successor)
}

/// Whether `square` is attacked by `by`, tested on `board` as it currently
/// stands (side-to-move is overridden for the probe and discarded).
pub(crate) fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let mut probe = board.clone();
    probe.set_side_to_move(by);
    generate_moves(&probe, Purpose::Check).contains_to(square)
}

fn last_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

fn apply(board: &Board, from: Square, to: Square, piece: Piece, is_castle: bool) -> Board {
    let mut next = board.clone();
    let is_capture = next.piece_on(to).is_some();

    next.set(from, None);
    let placed = if piece.kind() == PieceKind::Pawn && to.rank() == last_rank(piece.color()) {
        Piece::new(board.pending_promotion(), piece.color())
    } else {
        piece
    };
    next.set(to, Some(placed));

    if is_castle {
        let rank = from.rank();
        if to.file() > from.file() {
            let rook_from = Square::new(7, rank).unwrap();
            let rook_to = Square::new(5, rank).unwrap();
            let rook = next.piece_on(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook);
        } else {
            let rook_from = Square::new(0, rank).unwrap();
            let rook_to = Square::new(3, rank).unwrap();
            let rook = next.piece_on(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook);
        }
    }

    let mut rights = next.castling_rights();
    if piece.kind() == PieceKind::King {
        rights = rights.revoke_color(piece.color());
    }
    for color in Color::ALL {
        let home_rank = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        let west_rook_home = Square::new(0, home_rank).unwrap();
        let east_rook_home = Square::new(7, home_rank).unwrap();
        if from == west_rook_home || to == west_rook_home {
            rights = rights.revoke(CastlingRight::new(color, CastlingDirection::West));
        }
        if from == east_rook_home || to == east_rook_home {
            rights = rights.revoke(CastlingRight::new(color, CastlingDirection::East));
        }
    }
    next.set_castling_rights(rights);

    next.set_side_to_move(board.side_to_move().opponent());
    next.bump_ply();
    if is_capture {
        next.reset_halfmove_clock();
    } else {
        next.bump_halfmove_clock();
    }
    next
}
