//! [`HexCoords`]: a hex cell held in both the rectangular (user) basis and
//! the oblique 120° (canonical) basis.
//!
//! The user basis is what boards store and display: `x` is the column and
//! `y` the row. In the canonical basis adjacency is a fixed vector per
//! hexside and the range between two cells is a closed formula.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hexside::Hexside;
use crate::vector::{IntMatrix2D, IntVector2D};

/// An immutable hex cell identifier.
///
/// Equality, hashing and ordering look at the user basis only, so a cell has
/// one identity however it was constructed.
#[derive(Copy, Clone, Debug, Default)]
pub struct HexCoords {
    user: IntVector2D,
    canon: IntVector2D,
}

impl HexCoords {
    /// The cell at user (0, 0).
    pub const ORIGIN: Self = Self {
        user: IntVector2D::ZERO,
        canon: IntVector2D::ZERO,
    };

    /// Construct from user (column, row) coordinates.
    #[inline]
    pub fn from_user(x: i32, y: i32) -> Self {
        let user = IntVector2D::new(x, y);
        Self {
            user,
            canon: IntMatrix2D::USER_TO_CANON.apply(user),
        }
    }

    /// Construct from canonical coordinates.
    #[inline]
    pub fn from_canon(x: i32, y: i32) -> Self {
        let canon = IntVector2D::new(x, y);
        Self {
            user: IntMatrix2D::CANON_TO_USER.apply(canon),
            canon,
        }
    }

    /// User-basis vector.
    #[inline]
    pub const fn user(self) -> IntVector2D {
        self.user
    }

    /// Canonical-basis vector.
    #[inline]
    pub const fn canon(self) -> IntVector2D {
        self.canon
    }

    /// The adjacent cell across `side`.
    #[inline]
    pub fn neighbor(self, side: Hexside) -> Self {
        let canon = self.canon + side.canon_offset();
        Self {
            user: self.user + side.user_offset(self.user.x),
            canon,
        }
    }

    /// All six neighbors with the hexside leading to each.
    pub fn neighbors(self) -> impl Iterator<Item = (Hexside, HexCoords)> {
        Hexside::ALL.into_iter().map(move |h| (h, self.neighbor(h)))
    }

    /// Number of steps between two cells: `(|dx| + |dy| + |dx - dy|) / 2`
    /// over the canonical components.
    #[inline]
    pub fn range_to(self, other: HexCoords) -> i32 {
        let d = other.canon - self.canon;
        (d.x.abs() + d.y.abs() + (d.x - d.y).abs()) / 2
    }

    /// The hexside leading from `self` to an adjacent `other`.
    pub fn hexside_to(self, other: HexCoords) -> Option<Hexside> {
        let d = other.canon - self.canon;
        Hexside::ALL.into_iter().find(|h| h.canon_offset() == d)
    }
}

impl PartialEq for HexCoords {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl Eq for HexCoords {}

impl Hash for HexCoords {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user.hash(state);
    }
}

impl PartialOrd for HexCoords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.user
            .y
            .cmp(&other.user.y)
            .then(self.user.x.cmp(&other.user.x))
    }
}

impl fmt::Display for HexCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.user.x, self.user.y)
    }
}

impl From<IntVector2D> for HexCoords {
    /// Interprets the vector in the user basis.
    fn from(user: IntVector2D) -> Self {
        Self::from_user(user.x, user.y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexCoords {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.user.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexCoords {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let user = IntVector2D::deserialize(deserializer)?;
        Ok(HexCoords::from(user))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coords_serialize_user_basis() {
        let c = HexCoords::from_user(7, -2);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":7,"y":-2}"#);
        let back: HexCoords = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.canon(), c.canon());
    }
}
