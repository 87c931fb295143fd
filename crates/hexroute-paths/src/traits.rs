use std::fmt;
use std::num::NonZeroU16;

use hexroute_core::{HexCoords, Hexside, MapSize};

use crate::landmarks::LandmarkSet;

/// Cost of a single step between adjacent hexes. Always positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepCost(NonZeroU16);

impl StepCost {
    /// The cheapest possible step.
    pub const ONE: Self = Self(NonZeroU16::MIN);

    /// The dearest possible step.
    pub const MAX: Self = Self(NonZeroU16::MAX);

    /// `None` for zero, which is not a valid step cost.
    #[inline]
    pub const fn new(cost: u16) -> Option<Self> {
        match NonZeroU16::new(cost) {
            Some(c) => Some(Self(c)),
            None => None,
        }
    }

    /// The cost widened for accumulation.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }
}

impl fmt::Display for StepCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The board contract consumed by landmark construction and path queries.
///
/// Costs are directed: stepping from `a` into its neighbor `b` may cost
/// something different from stepping from `b` into `a`. The two lookups
/// describe the same steps from opposite ends and must agree:
///
/// ```text
/// try_entry_cost(c, h) == try_exit_cost(c.neighbor(h), h.reverse())
/// ```
///
/// Coordinates passed in are on the board; implementations need not check.
pub trait HexBoard {
    /// Extent of the board.
    fn map_size(&self) -> MapSize;

    /// Cost of leaving `coords` across `hexside` into the neighbor there, or
    /// `None` if that step is impossible.
    fn try_exit_cost(&self, coords: HexCoords, hexside: Hexside) -> Option<StepCost>;

    /// Cost of entering `coords` across `hexside` from the neighbor there,
    /// or `None` if that step is impossible.
    fn try_entry_cost(&self, coords: HexCoords, hexside: Hexside) -> Option<StepCost> {
        let from = coords.neighbor(hexside);
        if !self.map_size().contains(from) {
            return None;
        }
        self.try_exit_cost(from, hexside.reverse())
    }

    /// A lower bound on every step cost of the board.
    fn min_step_cost(&self) -> StepCost {
        StepCost::ONE
    }

    /// An upper bound on every step cost of the board.
    fn max_step_cost(&self) -> StepCost {
        StepCost::MAX
    }

    /// Precomputed landmarks, if the board has any.
    fn landmarks(&self) -> Option<&LandmarkSet> {
        None
    }
}

impl<B: HexBoard + ?Sized> HexBoard for &B {
    fn map_size(&self) -> MapSize {
        (**self).map_size()
    }

    fn try_exit_cost(&self, coords: HexCoords, hexside: Hexside) -> Option<StepCost> {
        (**self).try_exit_cost(coords, hexside)
    }

    fn try_entry_cost(&self, coords: HexCoords, hexside: Hexside) -> Option<StepCost> {
        (**self).try_entry_cost(coords, hexside)
    }

    fn min_step_cost(&self) -> StepCost {
        (**self).min_step_cost()
    }

    fn max_step_cost(&self) -> StepCost {
        (**self).max_step_cost()
    }

    fn landmarks(&self) -> Option<&LandmarkSet> {
        (**self).landmarks()
    }
}

/// Which way a search walks the board's directed costs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchDirection {
    /// Away from a source, paying exit costs.
    Forward,
    /// Back from a target, paying entry costs.
    Reverse,
}

impl SearchDirection {
    /// The opposite direction.
    #[inline]
    pub const fn partner(self) -> SearchDirection {
        match self {
            SearchDirection::Forward => SearchDirection::Reverse,
            SearchDirection::Reverse => SearchDirection::Forward,
        }
    }

    /// Cost of the step between `here` and its neighbor across `hexside`,
    /// walked in this direction.
    #[inline]
    pub fn step_cost<B: HexBoard + ?Sized>(
        self,
        board: &B,
        here: HexCoords,
        hexside: Hexside,
    ) -> Option<StepCost> {
        match self {
            SearchDirection::Forward => board.try_exit_cost(here, hexside),
            SearchDirection::Reverse => board.try_entry_cost(here, hexside),
        }
    }
}
