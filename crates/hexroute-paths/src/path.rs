//! Immutable, structurally shared paths.
//!
//! A [`DirectedPath`] is built backwards from its destination: each
//! [`add_step`](DirectedPath::add_step) puts a new first step in front of
//! the existing path, which stays shared and untouched as the new path's
//! [`path_so_far`](DirectedPath::path_so_far). Walking a path from its head
//! therefore visits the steps in travel order.

use std::fmt;
use std::sync::Arc;

use hexroute_core::{HexCoords, Hexside};

use crate::traits::StepCost;

/// A cell on a path and the hexside it is left by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub coords: HexCoords,
    /// Exit toward the next step; `None` at the destination.
    pub hexside: Option<Hexside>,
}

/// A step together with the totals of the path that starts there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub coords: HexCoords,
    pub hexside: Option<Hexside>,
    /// Cost from this step to the destination.
    pub total_cost: i32,
    /// Moves from this step to the destination.
    pub total_steps: u32,
}

struct PathLink {
    step: PathStep,
    total_cost: i32,
    total_steps: u32,
    rest: Option<Arc<PathLink>>,
}

impl Drop for PathLink {
    // Unlink iteratively so long paths cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.rest.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.rest.take(),
                Err(_) => break,
            }
        }
    }
}

/// A path from its head step to a destination.
#[derive(Clone)]
pub struct DirectedPath {
    head: Arc<PathLink>,
}

impl DirectedPath {
    /// The zero-length path that is already at `destination`.
    pub fn new(destination: HexCoords) -> Self {
        Self {
            head: Arc::new(PathLink {
                step: PathStep {
                    coords: destination,
                    hexside: None,
                },
                total_cost: 0,
                total_steps: 0,
                rest: None,
            }),
        }
    }

    /// A new path that starts at `coords`, leaves it across `hexside` into
    /// this path's first cell at a cost of `cost`, then follows this path.
    pub fn add_step(&self, coords: HexCoords, hexside: Hexside, cost: StepCost) -> DirectedPath {
        debug_assert_eq!(coords.neighbor(hexside), self.coords());
        DirectedPath {
            head: Arc::new(PathLink {
                step: PathStep {
                    coords,
                    hexside: Some(hexside),
                },
                total_cost: self.total_cost() + cost.get(),
                total_steps: self.total_steps() + 1,
                rest: Some(Arc::clone(&self.head)),
            }),
        }
    }

    /// First step of the path.
    #[inline]
    pub fn step(&self) -> PathStep {
        self.head.step
    }

    /// Cell of the first step.
    #[inline]
    pub fn coords(&self) -> HexCoords {
        self.head.step.coords
    }

    /// Exit of the first step; `None` for a zero-length path.
    #[inline]
    pub fn hexside(&self) -> Option<Hexside> {
        self.head.step.hexside
    }

    /// Cost of the whole path.
    #[inline]
    pub fn total_cost(&self) -> i32 {
        self.head.total_cost
    }

    /// Number of moves in the whole path.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.head.total_steps
    }

    /// The path this one was extended from, i.e. everything after the
    /// first step.
    pub fn path_so_far(&self) -> Option<DirectedPath> {
        self.head
            .rest
            .as_ref()
            .map(|rest| DirectedPath { head: Arc::clone(rest) })
    }

    /// Cell the path starts from.
    #[inline]
    pub fn source(&self) -> HexCoords {
        self.coords()
    }

    /// Cell the path ends at.
    pub fn destination(&self) -> HexCoords {
        let mut destination = self.coords();
        for node in self.iter() {
            destination = node.coords;
        }
        destination
    }

    /// Steps in travel order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            link: Some(&self.head),
        }
    }

    /// Cells in travel order.
    pub fn coords_vec(&self) -> Vec<HexCoords> {
        self.iter().map(|n| n.coords).collect()
    }
}

impl fmt::Debug for DirectedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedPath")
            .field("total_cost", &self.total_cost())
            .field("total_steps", &self.total_steps())
            .field("cells", &self.coords_vec())
            .finish()
    }
}

impl fmt::Display for DirectedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            match node.hexside {
                Some(h) => write!(f, "{} {} ", node.coords, h)?,
                None => write!(f, "{}", node.coords)?,
            }
        }
        write!(f, " [cost {}]", self.total_cost())
    }
}

impl<'a> IntoIterator for &'a DirectedPath {
    type Item = PathNode;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the steps of a [`DirectedPath`].
pub struct Iter<'a> {
    link: Option<&'a Arc<PathLink>>,
}

impl Iterator for Iter<'_> {
    type Item = PathNode;

    fn next(&mut self) -> Option<PathNode> {
        let link = self.link?;
        self.link = link.rest.as_ref();
        Some(PathNode {
            coords: link.step.coords,
            hexside: link.step.hexside,
            total_cost: link.total_cost,
            total_steps: link.total_steps,
        })
    }
}
