//! Single-landmark precomputation: exhaustive cheapest-cost flood fills.

use hexroute_core::{HexCoords, Hexside, MapSize};

use crate::config::QueueConfig;
use crate::queue::{HotPriorityQueue, PriorityQueue};
use crate::traits::{HexBoard, SearchDirection};

/// Sentinel value meaning "unreachable" in a [`DistanceTable`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Dense per-cell table of directed path costs to or from one seed cell.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    size: MapSize,
    costs: Vec<i32>,
}

impl DistanceTable {
    /// Cheapest cost between `seed` and every cell of `board`.
    ///
    /// With [`SearchDirection::Forward`] the table holds the cost of
    /// travelling *from* `seed` to each cell (exit costs); with
    /// [`SearchDirection::Reverse`] it holds the cost of travelling from each
    /// cell *to* `seed` (entry costs). Cells that cannot be connected keep
    /// no value.
    pub fn compute<B: HexBoard + ?Sized>(
        board: &B,
        seed: HexCoords,
        direction: SearchDirection,
        queue: QueueConfig,
    ) -> Self {
        let size = board.map_size();
        let mut costs = vec![UNREACHABLE; size.len()];
        let Some(si) = size.index(seed) else {
            return Self { size, costs };
        };

        let mut done = vec![false; size.len()];
        let mut open: HotPriorityQueue<usize> = HotPriorityQueue::new(queue);
        costs[si] = 0;
        open.enqueue(0, si);

        while let Some((cost, ci)) = open.try_dequeue() {
            // Superseded by a cheaper entry that was dequeued earlier.
            if done[ci] || cost > costs[ci] {
                continue;
            }
            done[ci] = true;
            let here = size.coords_at(ci);

            for hexside in Hexside::ALL {
                let there = here.neighbor(hexside);
                let Some(ni) = size.index(there) else {
                    continue;
                };
                if done[ni] {
                    continue;
                }
                let Some(step) = direction.step_cost(board, here, hexside) else {
                    continue;
                };
                let candidate = cost + step.get();
                if candidate < costs[ni] {
                    costs[ni] = candidate;
                    open.enqueue(candidate, ni);
                }
            }
        }

        Self { size, costs }
    }

    /// Extent of the board the table covers.
    #[inline]
    pub fn map_size(&self) -> MapSize {
        self.size
    }

    /// Cost recorded for `coords`, or `None` if it is unreachable or off
    /// the board.
    #[inline]
    pub fn get(&self, coords: HexCoords) -> Option<i32> {
        let i = self.size.index(coords)?;
        match self.costs[i] {
            UNREACHABLE => None,
            c => Some(c),
        }
    }

    /// Number of cells with a value.
    pub fn reached(&self) -> usize {
        self.costs.iter().filter(|&&c| c != UNREACHABLE).count()
    }
}

/// A fixed cell with exact directed distances to and from every cell.
#[derive(Clone, Debug)]
pub struct Landmark {
    coords: HexCoords,
    to: DistanceTable,
    from: DistanceTable,
}

impl Landmark {
    /// Run both flood fills for a landmark at `coords`.
    pub fn new<B: HexBoard + ?Sized>(board: &B, coords: HexCoords, queue: QueueConfig) -> Self {
        Self {
            coords,
            to: DistanceTable::compute(board, coords, SearchDirection::Reverse, queue),
            from: DistanceTable::compute(board, coords, SearchDirection::Forward, queue),
        }
    }

    /// Cell of the landmark.
    #[inline]
    pub fn coords(&self) -> HexCoords {
        self.coords
    }

    /// Cost of the cheapest path from `coords` to the landmark.
    #[inline]
    pub fn distance_to(&self, coords: HexCoords) -> Option<i32> {
        self.to.get(coords)
    }

    /// Cost of the cheapest path from the landmark to `coords`.
    #[inline]
    pub fn distance_from(&self, coords: HexCoords) -> Option<i32> {
        self.from.get(coords)
    }

    /// Table behind [`Landmark::distance_to`].
    pub fn to_table(&self) -> &DistanceTable {
        &self.to
    }

    /// Table behind [`Landmark::distance_from`].
    pub fn from_table(&self) -> &DistanceTable {
        &self.from
    }
}
