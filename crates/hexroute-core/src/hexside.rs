//! The six edge directions of a hex cell, and compact sets of them.
//!
//! Hexes are flat-topped and laid out in columns; odd columns sit half a
//! hex higher than even columns.

use std::fmt;

use crate::vector::IntVector2D;

/// One of the six sides of a hex, named by the direction it faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hexside {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Hexside {
    /// All hexsides, clockwise from north.
    pub const ALL: [Hexside; 6] = [
        Hexside::North,
        Hexside::NorthEast,
        Hexside::SouthEast,
        Hexside::South,
        Hexside::SouthWest,
        Hexside::NorthWest,
    ];

    /// Canonical-basis offset to the neighbor across each hexside.
    const CANON_OFFSETS: [IntVector2D; 6] = [
        IntVector2D::new(0, -1),
        IntVector2D::new(1, 0),
        IntVector2D::new(1, 1),
        IntVector2D::new(0, 1),
        IntVector2D::new(-1, 0),
        IntVector2D::new(-1, -1),
    ];

    /// User-basis offsets from an even column.
    const USER_OFFSETS_EVEN: [IntVector2D; 6] = [
        IntVector2D::new(0, -1),
        IntVector2D::new(1, 0),
        IntVector2D::new(1, 1),
        IntVector2D::new(0, 1),
        IntVector2D::new(-1, 1),
        IntVector2D::new(-1, 0),
    ];

    /// User-basis offsets from an odd column.
    const USER_OFFSETS_ODD: [IntVector2D; 6] = [
        IntVector2D::new(0, -1),
        IntVector2D::new(1, -1),
        IntVector2D::new(1, 0),
        IntVector2D::new(0, 1),
        IntVector2D::new(-1, 0),
        IntVector2D::new(-1, -1),
    ];

    /// Position of this hexside in [`Hexside::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Hexside::index`]; `None` for indices above 5.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Hexside> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The hexside on the far side of the shared edge.
    #[inline]
    pub const fn reverse(self) -> Hexside {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Offset to the neighbor in the canonical basis (parity-free).
    #[inline]
    pub const fn canon_offset(self) -> IntVector2D {
        Self::CANON_OFFSETS[self.index()]
    }

    /// Offset to the neighbor in the user basis for a cell in column `x`.
    #[inline]
    pub const fn user_offset(self, x: i32) -> IntVector2D {
        if x & 1 == 0 {
            Self::USER_OFFSETS_EVEN[self.index()]
        } else {
            Self::USER_OFFSETS_ODD[self.index()]
        }
    }

    /// Short compass label.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Hexside::North => "N",
            Hexside::NorthEast => "NE",
            Hexside::SouthEast => "SE",
            Hexside::South => "S",
            Hexside::SouthWest => "SW",
            Hexside::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Hexside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

// ---------------------------------------------------------------------------
// HexsideSet
// ---------------------------------------------------------------------------

/// A set of hexsides packed into one byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexsideSet(u8);

impl HexsideSet {
    /// No hexsides.
    pub const EMPTY: Self = Self(0);
    /// All six hexsides.
    pub const ALL: Self = Self(0b11_1111);

    /// Set containing just `side`.
    #[inline]
    pub const fn only(side: Hexside) -> Self {
        Self(1 << side.index())
    }

    #[inline]
    pub const fn contains(self, side: Hexside) -> bool {
        self.0 & (1 << side.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, side: Hexside) {
        self.0 |= 1 << side.index();
    }

    #[inline]
    pub fn remove(&mut self, side: Hexside) {
        self.0 &= !(1 << side.index());
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the members in [`Hexside::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Hexside> {
        Hexside::ALL.into_iter().filter(move |&h| self.contains(h))
    }
}

impl FromIterator<Hexside> for HexsideSet {
    fn from_iter<I: IntoIterator<Item = Hexside>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for h in iter {
            set.insert(h);
        }
        set
    }
}
