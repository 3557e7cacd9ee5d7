//! Castling rights bookkeeping.

use std::fmt;

use crate::color::Color;

/// Which side of the board a castling move slides the king toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingDirection {
    /// Toward the a-file rook (queenside).
    West,
    /// Toward the h-file rook (kingside).
    East,
}

/// A single castling privilege: one color, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRight {
    pub color: Color,
    pub direction: CastlingDirection,
}

impl CastlingRight {
    #[inline]
    pub const fn new(color: Color, direction: CastlingDirection) -> CastlingRight {
        CastlingRight { color, direction }
    }

    #[inline]
    const fn bit(self) -> u8 {
        let color_shift = match self.color {
            Color::White => 0,
            Color::Black => 2,
        };
        let dir_shift = match self.direction {
            CastlingDirection::East => 0,
            CastlingDirection::West => 1,
        };
        1 << (color_shift + dir_shift)
    }
}

impl fmt::Display for CastlingRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match (self.color, self.direction) {
            (Color::White, CastlingDirection::East) => 'K',
            (Color::White, CastlingDirection::West) => 'Q',
            (Color::Black, CastlingDirection::East) => 'k',
            (Color::Black, CastlingDirection::West) => 'q',
        };
        write!(f, "{ch}")
    }
}

/// The set of still-available castling rights, packed into four bits.
///
/// Rights are monotonically non-increasing along any line of play: they are
/// revoked when a king or rook moves, or when a rook's home square is
/// vacated for any reason, and are never granted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No rights remain.
    pub const NONE: CastlingRights = CastlingRights(0);

    /// All four rights, as held by the starting position.
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Whether `right` is currently held.
    #[inline]
    pub const fn has(self, right: CastlingRight) -> bool {
        self.0 & right.bit() != 0
    }

    /// Return a copy with `right` revoked.
    #[inline]
    pub const fn revoke(self, right: CastlingRight) -> CastlingRights {
        CastlingRights(self.0 & !right.bit())
    }

    /// Revoke both rights belonging to `color` (used when its king moves).
    #[inline]
    pub const fn revoke_color(self, color: Color) -> CastlingRights {
        self.revoke(CastlingRight::new(color, CastlingDirection::East))
            .revoke(CastlingRight::new(color, CastlingDirection::West))
    }

    /// Iterate the rights currently held, in a fixed order.
    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        const ORDER: [CastlingRight; 4] = [
            CastlingRight::new(Color::White, CastlingDirection::East),
            CastlingRight::new(Color::White, CastlingDirection::West),
            CastlingRight::new(Color::Black, CastlingDirection::East),
            CastlingRight::new(Color::Black, CastlingDirection::West),
        ];
        ORDER.into_iter().filter(move |r| self.has(*r))
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for right in self.iter() {
            write!(f, "{right}")?;
        }
        Ok(())
    }
}
