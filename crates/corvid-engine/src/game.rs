//! The generic contract the search core is built against.
//!
//! Chess, via [`corvid_core::Board`], is the principal instance; Tic-Tac-Toe
//! and Connect Four implementations living under this crate's `tests/`
//! directory exist only to prove the search core is actually generic, not
//! chess-specific in disguise.

use corvid_core::Board;

/// A two-player, zero-sum, perfect-information game state, viewed from its
/// own side to move.
///
/// `successors` need not distinguish *which* move produced each child —
/// the search core only ever compares and returns whole states, never
/// moves, which is also why [`Game`] requires [`PartialEq`]: move-ordering
/// hints are matched by state equality, not by a move identifier.
pub trait Game: Clone + PartialEq {
    /// Every state reachable by one legal move of the side to move, with no
    /// move left leaving the mover in check (or its analogue).
    fn successors(&self) -> Vec<Self>;

    /// Static evaluation from this state's own side-to-move viewpoint,
    /// larger is better.
    fn evaluate(&self) -> f64;

    /// Whether the side to move has already won outright with no further
    /// moves available. Unreachable for chess (the side to move is always
    /// the loser in a terminal position with no legal moves), but kept for
    /// game families where the position itself can be won before the mover
    /// runs out of moves.
    fn is_winner(&self) -> bool;

    /// Whether the side to move has lost with no legal moves available
    /// (checkmate, in chess).
    fn is_loser(&self) -> bool;

    /// Whether the game is a tie with no legal moves available
    /// (stalemate, in chess).
    fn is_tie(&self) -> bool;

    /// Warm any caches this state's deep (multi-ply) successors will need.
    /// A no-op in this single-threaded search core; exists so a future
    /// parallel search has somewhere to prime work before scoring children.
    fn prefetch_deep(&self) {}

    /// Warm any caches this state's immediate successors will need. Same
    /// rationale as [`Game::prefetch_deep`], one ply shallower.
    fn prefetch_shallow(&self) {}
}

impl Game for Board {
    fn successors(&self) -> Vec<Board> {
        self.legal_moves()
            .iter()
            .map(|m| {
                self.make_move(m.from(), m.to())
                    .expect("legal_moves only yields moves make_move accepts")
            })
            .collect()
    }

    fn evaluate(&self) -> f64 {
        crate::eval::evaluate(self)
    }

    fn is_winner(&self) -> bool {
        false
    }

    fn is_loser(&self) -> bool {
        self.in_check()
    }

    fn is_tie(&self) -> bool {
        !self.in_check()
    }
}
