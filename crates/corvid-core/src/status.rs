//! Position status: check, checkmate, stalemate, draw, and game-over.

use crate::board::Board;
use crate::make_move::is_attacked;
use crate::movegen::{generate_moves, Purpose};

/// Pseudo-legal move count above which a non-check position is assumed to
/// have at least one legal move, short-circuiting full legality enumeration
/// for [`Board::in_stalemate`].
///
/// This is a heuristic, not a proof: with 12 or more pseudo-legal moves and
/// no check, some reachable-chess-position counter-example has never been
/// found, but nothing here derives it from first principles. An
/// implementation that needs a proof should drop this constant and always
/// fall through to full enumeration.
const STALEMATE_SHORT_CIRCUIT_THRESHOLD: usize = 12;

/// Half-moves since the last capture beyond which the fifty-move rule
/// declares a draw.
const FIFTY_MOVE_LIMIT: u32 = 49;

impl Board {
    /// Whether the side to move's king is attacked by the opponent.
    ///
    /// A board with no king of the side to move (only reachable through
    /// synthetic test positions, never through play) is vacuously not in
    /// check.
    pub fn in_check(&self) -> bool {
        match self.king_square(self.side_to_move()) {
            Some(king_square) => is_attacked(self, king_square, self.side_to_move().opponent()),
            None => false,
        }
    }

    /// `in_check` with no legal successor.
    pub fn in_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    /// Not `in_check`, with no legal successor.
    ///
    /// Enumerating legal successors is the expensive path (it runs
    /// [`Board::make_move`] on every pseudo-legal candidate), so this
    /// short-circuits: with
    /// [`STALEMATE_SHORT_CIRCUIT_THRESHOLD`] or more pseudo-legal moves and
    /// no check, at least one is always legal.
    pub fn in_stalemate(&self) -> bool {
        if self.in_check() {
            return false;
        }
        let pseudo_legal = generate_moves(self, Purpose::Legality);
        if pseudo_legal.len() >= STALEMATE_SHORT_CIRCUIT_THRESHOLD {
            return false;
        }
        self.legal_moves().is_empty()
    }

    /// Fifty-move rule: no capture or pawn move in the last 50 half-moves,
    /// or stalemate.
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock() > FIFTY_MOVE_LIMIT || self.in_stalemate()
    }

    /// Checkmate, stalemate, or the fifty-move rule.
    pub fn game_over(&self) -> bool {
        self.in_checkmate() || self.is_draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_is_not_in_check_or_terminal() {
        let board = Board::starting_position();
        assert!(!board.in_check());
        assert!(!board.game_over());
    }

    #[test]
    fn empty_board_is_a_draw_and_game_over() {
        let board = Board::empty_no_rights();
        assert!(board.is_draw());
        assert!(board.game_over());
    }

    #[test]
    fn checkmate_implies_check_and_excludes_stalemate() {
        // Back-rank mate: white king boxed in by its own pawns, black rook
        // delivering check along the rank.
        let mut board = Board::empty_no_rights();
        board.set(Square::new(0, 0).unwrap(), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(0, 1).unwrap(), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(1, 1).unwrap(), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(7, 0).unwrap(), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set(Square::new(7, 7).unwrap(), Some(Piece::new(PieceKind::King, Color::Black)));

        assert!(board.in_check());
        assert!(board.in_checkmate());
        assert!(!board.in_stalemate());
    }

    #[test]
    fn fifty_move_rule_triggers_draw_past_limit() {
        let mut board = Board::empty_no_rights();
        board.set(Square::new(0, 0).unwrap(), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(7, 7).unwrap(), Some(Piece::new(PieceKind::King, Color::Black)));
        for _ in 0..=FIFTY_MOVE_LIMIT {
            board.bump_halfmove_clock();
        }
        assert!(board.is_draw());
    }
}
