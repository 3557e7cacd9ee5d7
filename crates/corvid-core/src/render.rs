//! ASCII board rendering: debugging and regression-test input, non-normative.

use std::fmt;

use crate::board::Board;
use crate::square::Square;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut cells = Vec::with_capacity(8);
            for file in 0..8 {
                let square = Square::new(file, rank).unwrap();
                let cell = match self.piece_on(square) {
                    Some(piece) => piece.label(),
                    None => "   ".to_string(),
                };
                cells.push(cell);
            }
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_renders_eight_ranks() {
        let board = Board::starting_position();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().next().unwrap().contains("bRo"));
        assert!(text.lines().last().unwrap().contains("wRo"));
    }

    #[test]
    fn empty_cells_render_as_blanks() {
        let board = Board::empty_no_rights();
        let text = board.to_string();
        assert!(text.lines().all(|line| line == "   |   |   |   |   |   |   |   "));
    }
}
