//! Integer vectors and the change-of-basis matrices between the two hex
//! coordinate bases.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// IntVector2D
// ---------------------------------------------------------------------------

/// A 2D integer vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntVector2D {
    pub x: i32,
    pub y: i32,
}

impl IntVector2D {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Z-component of the cross product `self × rhs`.
    #[inline]
    pub const fn cross(self, rhs: Self) -> i64 {
        self.x as i64 * rhs.y as i64 - self.y as i64 * rhs.x as i64
    }
}

impl fmt::Display for IntVector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for IntVector2D {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntVector2D {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for IntVector2D {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for IntVector2D {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// IntMatrix2D
// ---------------------------------------------------------------------------

/// An affine 2D integer matrix with a common divisor `norm`.
///
/// Applied to a row vector `(x, y)`:
///
/// ```text
/// x' = (x*m11 + y*m21 + m31) / norm
/// y' = (x*m12 + y*m22 + m32) / norm
/// ```
///
/// Division floors, so the result is exact integer arithmetic for negative
/// inputs as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntMatrix2D {
    pub m11: i32,
    pub m12: i32,
    pub m21: i32,
    pub m22: i32,
    pub m31: i32,
    pub m32: i32,
    pub norm: i32,
}

impl IntMatrix2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1, 0, 0, 1, 0, 0, 1);

    /// Rectangular (user) basis to oblique (canonical) basis.
    pub const USER_TO_CANON: Self = Self::new(2, 1, 0, 2, 0, 0, 2);

    /// Oblique (canonical) basis to rectangular (user) basis.
    pub const CANON_TO_USER: Self = Self::new(2, -1, 0, 2, 0, 1, 2);

    /// Create a new matrix. `norm` must be positive.
    #[inline]
    pub const fn new(m11: i32, m12: i32, m21: i32, m22: i32, m31: i32, m32: i32, norm: i32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
            norm,
        }
    }

    /// Apply the transform to `v`.
    #[inline]
    pub fn apply(&self, v: IntVector2D) -> IntVector2D {
        let x = v.x * self.m11 + v.y * self.m21 + self.m31;
        let y = v.x * self.m12 + v.y * self.m22 + self.m32;
        IntVector2D::new(x.div_euclid(self.norm), y.div_euclid(self.norm))
    }
}
