//! Iterative-deepening driver: depth 1, 2, 3, … under a wall-clock budget.
//!
//! A completed depth-`d-1` result is always preferable to a
//! partially-explored depth-`d` one, because alpha-beta's incumbent best
//! move at a partial search is not guaranteed optimal at that depth. So
//! each depth runs to completion or is abandoned outright; its partial
//! result is never adopted.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::game::Game;
use crate::search::control::SearchControl;
use crate::search::negamax::{negamax, CANCELLED_SENTINEL};
use crate::time::Budget;

use tracing::debug;

/// Once this fraction of the budget has elapsed after a depth completes,
/// stop rather than launch one more (likely unfinishable) depth.
const STOP_AFTER_BUDGET_FRACTION: f64 = 0.85;

/// Search `game` to exactly `depth` and return the chosen successor.
///
/// Runs synchronously to completion; has no time budget of its own.
pub fn search_best<G: Game>(game: &G, depth: u32) -> G {
    let control = SearchControl::new();
    let (_, best) = negamax(game, depth, f64::NEG_INFINITY, f64::INFINITY, None, &control);
    best
}

/// Search `game` under a `budget_ms` wall-clock budget, deepening one ply
/// at a time, and return the deepest fully-completed result.
///
/// Depth 1 always runs synchronously. Each subsequent depth runs in a
/// worker that can be cancelled; the driver polls it against the budget
/// and, on exhaustion, cancels the worker and returns the previous depth's
/// (complete) result rather than the worker's unfinished one. A budget of
/// zero or less returns the depth-1 result.
pub fn search_within<G>(game: &G, budget_ms: u64) -> G
where
    G: Game + Send + 'static,
{
    if budget_ms == 0 {
        return search_best(game, 1);
    }

    let budget = Budget::from_millis(budget_ms);

    let mut current_best = search_best(game, 1);
    let mut depth = 2u32;

    loop {
        if budget.is_expired() {
            return current_best;
        }

        let control = SearchControl::new();
        let worker_control = control.clone();
        let worker_game = game.clone();
        let hint = current_best.clone();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = negamax(
                &worker_game,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                Some(&hint),
                &worker_control,
            );
            let _ = tx.send(result);
        });

        let outcome = loop {
            match rx.try_recv() {
                Ok(result) => break Some(result),
                Err(mpsc::TryRecvError::Empty) => {
                    if budget.is_expired() {
                        control.cancel();
                        break None;
                    }
                    thread::sleep(Duration::from_millis(1));
                }
                Err(mpsc::TryRecvError::Disconnected) => break None,
            }
        };
        let _ = handle.join();

        match outcome {
            Some((score, successor)) if score != CANCELLED_SENTINEL => {
                debug!(depth, score, elapsed_fraction = budget.elapsed_fraction(), "depth completed");
                current_best = successor;
                if budget.elapsed_fraction() >= STOP_AFTER_BUDGET_FRACTION {
                    return current_best;
                }
                depth += 1;
            }
            _ => {
                debug!(depth, "search cancelled, keeping previous depth's result");
                return current_best;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_core::Board;

    #[test]
    fn search_best_returns_a_legal_successor() {
        let board = Board::starting_position();
        let best = search_best(&board, 1);
        assert!(Game::successors(&board).contains(&best));
    }

    #[test]
    fn search_within_returns_a_legal_successor() {
        let board = Board::starting_position();
        let best = search_within(&board, 200);
        assert!(Game::successors(&board).contains(&best));
    }

    #[test]
    fn zero_budget_returns_depth_one_result() {
        let board = Board::starting_position();
        assert_eq!(search_within(&board, 0), search_best(&board, 1));
    }
}
