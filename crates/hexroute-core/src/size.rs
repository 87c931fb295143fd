//! [`MapSize`]: the extent of a board in hexes, with flat indexing.

use std::fmt;

use crate::coords::HexCoords;

/// Width × height of a board in the user basis. Valid cells are
/// `0 <= x < width`, `0 <= y < height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSize {
    pub width: i32,
    pub height: i32,
}

impl MapSize {
    /// Create a new extent. Negative dimensions are clamped to zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the board has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `c` lies on the board.
    #[inline]
    pub fn contains(self, c: HexCoords) -> bool {
        let u = c.user();
        u.x >= 0 && u.x < self.width && u.y >= 0 && u.y < self.height
    }

    /// Row-major flat index of `c`, or `None` if it is off the board.
    #[inline]
    pub fn index(self, c: HexCoords) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let u = c.user();
        Some(u.y as usize * self.width as usize + u.x as usize)
    }

    /// Inverse of [`MapSize::index`]. `idx` must be below [`MapSize::len`].
    #[inline]
    pub fn coords_at(self, idx: usize) -> HexCoords {
        let w = self.width.max(1) as usize;
        HexCoords::from_user((idx % w) as i32, (idx / w) as i32)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> MapSizeIter {
        MapSizeIter {
            size: self,
            next: 0,
        }
    }

    /// The four corners and four edge midpoints, without duplicates.
    ///
    /// These are spread around the perimeter, which is where landmarks give
    /// the tightest bounds for most queries.
    pub fn landmark_seeds(self) -> Vec<HexCoords> {
        if self.is_empty() {
            return Vec::new();
        }
        let (w, h) = (self.width - 1, self.height - 1);
        let (mw, mh) = (w / 2, h / 2);
        let candidates = [
            (0, 0),
            (mw, 0),
            (w, 0),
            (w, mh),
            (w, h),
            (mw, h),
            (0, h),
            (0, mh),
        ];
        let mut seeds: Vec<HexCoords> = Vec::with_capacity(candidates.len());
        for (x, y) in candidates {
            let c = HexCoords::from_user(x, y);
            if !seeds.contains(&c) {
                seeds.push(c);
            }
        }
        seeds
    }
}

impl IntoIterator for MapSize {
    type Item = HexCoords;
    type IntoIter = MapSizeIter;
    #[inline]
    fn into_iter(self) -> MapSizeIter {
        self.iter()
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// MapSizeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`MapSize`].
#[derive(Clone, Debug)]
pub struct MapSizeIter {
    size: MapSize,
    next: usize,
}

impl Iterator for MapSizeIter {
    type Item = HexCoords;

    #[inline]
    fn next(&mut self) -> Option<HexCoords> {
        if self.next >= self.size.len() {
            return None;
        }
        let c = self.size.coords_at(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MapSizeIter {}
