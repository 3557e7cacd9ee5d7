//! Successor ordering: hint first, then descending static evaluation.
//!
//! Good ordering is what makes alpha-beta pruning effective: a strong move
//! explored first raises alpha early and lets every sibling after it be
//! refuted cheaply instead of fully searched.

use crate::game::Game;

/// Order `successors` for exploration: `hint`, if present and equal to one
/// of them, goes first; the rest follow in descending order of how good
/// they look for the side that is about to move into them (the negation of
/// each successor's own static evaluation, since a [`Game::evaluate`] score
/// is always from its own side-to-move viewpoint).
pub(super) fn order_successors<G: Game>(mut successors: Vec<G>, hint: Option<&G>) -> Vec<G> {
    successors.sort_by(|a, b| {
        let score_a = -a.evaluate();
        let score_b = -b.evaluate();
        score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(hint) = hint {
        if let Some(pos) = successors.iter().position(|s| s == hint) {
            let hinted = successors.remove(pos);
            successors.insert(0, hinted);
        }
    }

    successors
}
