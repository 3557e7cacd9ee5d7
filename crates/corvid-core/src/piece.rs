//! A colored chess piece: a [`PieceKind`] paired with a [`Color`].

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board: its kind and which side it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece's color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Material value, see [`PieceKind::value`].
    #[inline]
    pub const fn value(self) -> i64 {
        self.kind.value()
    }

    /// Return the textual rendering prefix: `"w"` or `"b"` followed by the
    /// kind label, e.g. `"wPa"`.
    pub fn label(self) -> String {
        format!("{}{}", self.color, self.kind.label())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn accessors() {
        let p = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(p.kind(), PieceKind::Knight);
        assert_eq!(p.color(), Color::Black);
        assert_eq!(p.value(), 3);
    }

    #[test]
    fn label_format() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).label(), "wPa");
        assert_eq!(Piece::new(PieceKind::King, Color::Black).label(), "bKi");
    }

    #[test]
    fn display_matches_label() {
        let p = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(format!("{p}"), p.label());
    }
}
