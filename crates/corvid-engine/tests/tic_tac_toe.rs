//! Tic-Tac-Toe: a toy [`Game`] instance that exercises the search core
//! without any chess-specific code, proving the core is actually generic.

use corvid_engine::{search_best, Game};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    X,
    O,
}

impl Mark {
    fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn has_line(cells: &[Option<Mark>; 9], mark: Mark) -> bool {
    LINES.iter().any(|line| line.iter().all(|&i| cells[i] == Some(mark)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TicTacToe {
    cells: [Option<Mark>; 9],
    to_move: Mark,
}

impl TicTacToe {
    fn new() -> TicTacToe {
        TicTacToe {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }
}

impl Game for TicTacToe {
    fn successors(&self) -> Vec<TicTacToe> {
        if has_line(&self.cells, Mark::X) || has_line(&self.cells, Mark::O) {
            return Vec::new();
        }
        (0..9)
            .filter(|&i| self.cells[i].is_none())
            .map(|i| {
                let mut next = self.clone();
                next.cells[i] = Some(self.to_move);
                next.to_move = self.to_move.other();
                next
            })
            .collect()
    }

    fn evaluate(&self) -> f64 {
        0.0
    }

    fn is_winner(&self) -> bool {
        false
    }

    fn is_loser(&self) -> bool {
        has_line(&self.cells, self.to_move.other())
    }

    fn is_tie(&self) -> bool {
        !self.is_loser()
    }
}

#[test]
fn search_completes_a_winning_line_when_one_move_away() {
    // X has two in the top row and an open third cell; it is X to move.
    let mut game = TicTacToe::new();
    game.cells[0] = Some(Mark::X);
    game.cells[1] = Some(Mark::X);
    game.cells[3] = Some(Mark::O);
    game.cells[4] = Some(Mark::O);
    game.to_move = Mark::X;

    let best = search_best(&game, 1);
    assert_eq!(best.cells[2], Some(Mark::X));
}

#[test]
fn full_depth_search_from_empty_board_never_loses_to_itself() {
    let game = TicTacToe::new();
    // Perfect play from both sides draws; searching to the full 9-ply depth
    // must not crash and must return a legal successor at every step.
    let mut state = game;
    for _ in 0..9 {
        if state.successors().is_empty() {
            break;
        }
        state = search_best(&state, 9 - state.cells.iter().filter(|c| c.is_some()).count() as u32);
    }
    assert!(!has_line(&state.cells, Mark::X) || !has_line(&state.cells, Mark::O));
}
