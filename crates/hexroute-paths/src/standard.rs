//! Single-direction search for boards without landmarks.
//!
//! Runs from the target back to the source over entry costs, so the nodes
//! popped at the end already chain in travel order. The heuristic is the
//! hex range to the source scaled by the board's cheapest step. Ties on
//! estimated cost prefer cells closest to the straight line between the
//! endpoints, which keeps routes over open ground looking natural.

use hexroute_core::{HexCoords, Hexside, IntVector2D, MapSize};

use crate::arena::{NodeId, PathArena};
use crate::bidirectional::SearchStats;
use crate::config::{PathfinderConfig, QueueConfig};
use crate::path::DirectedPath;
use crate::queue::{HotPriorityQueue, PriorityQueue};
use crate::traits::{HexBoard, SearchDirection, StepCost};

const MAX_TIE_BITS: u32 = 16;

/// Low key bits left for the tie-break once the dearest estimate possible
/// on the board fits above them.
///
/// No estimate exceeds `max_step * (cells + width + height)`: a popped cost
/// is that of a simple route plus one step, and the range to the source is
/// below `width + height`.
fn tie_bits(size: MapSize, max_step: StepCost) -> u32 {
    let span = size.len() as u64 + size.width.max(0) as u64 + size.height.max(0) as u64;
    let bound = span.saturating_mul(max_step.get() as u64);
    let needed = u64::BITS - bound.leading_zeros();
    (i32::BITS - 1).saturating_sub(needed).min(MAX_TIE_BITS)
}

/// Range-heuristic search from target to source.
pub struct StandardPathfinder<'b, B: ?Sized> {
    board: &'b B,
    queue: QueueConfig,
    stats: SearchStats,
}

impl<'b, B: HexBoard + ?Sized> StandardPathfinder<'b, B> {
    pub fn new(board: &'b B, config: &PathfinderConfig) -> Self {
        Self {
            board,
            queue: config.queue,
            stats: SearchStats::default(),
        }
    }

    /// Work done by the last [`find`](Self::find).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cheapest path from `source` to `target`, or `None` if there is none.
    pub fn find(&mut self, source: HexCoords, target: HexCoords) -> Option<DirectedPath> {
        self.stats = SearchStats::default();
        let size = self.board.map_size();
        let ti = size.index(target)?;
        if !size.contains(source) {
            return None;
        }
        if source == target {
            return Some(DirectedPath::new(source));
        }

        let min_step = self.board.min_step_cost().get();
        let bits = tie_bits(size, self.board.max_step_cost());
        let max_tie = (1i64 << bits) - 1;
        let bearing = target.canon() - source.canon();
        // The estimate sits above the tie-break, so keys order by estimate
        // first and it can never be shifted out of range.
        let key = |coords: HexCoords, cost: i32| -> i32 {
            let estimate = cost.saturating_add(coords.range_to(source).saturating_mul(min_step));
            let offset: IntVector2D = coords.canon() - source.canon();
            let tie = offset.cross(bearing).abs().min(max_tie) as i32;
            (estimate << bits) | tie
        };

        let mut arena = PathArena::new();
        let mut best: Vec<Option<NodeId>> = vec![None; size.len()];
        let mut closed = vec![false; size.len()];
        // Bucket on the estimate, not the tie-break.
        let mut open: HotPriorityQueue<NodeId> = HotPriorityQueue::new(QueueConfig {
            pool_size: self.queue.pool_size,
            preference_shift: self.queue.preference_shift + bits,
        });

        let root = arena.push_root(target);
        best[ti] = Some(root);
        open.enqueue(key(target, 0), root);
        self.stats.pushes += 1;

        while let Some((_, id)) = open.try_dequeue() {
            let node = *arena.get(id);
            let Some(ci) = size.index(node.coords) else {
                continue;
            };
            if closed[ci] || best[ci] != Some(id) {
                continue;
            }
            closed[ci] = true;
            if node.coords == source {
                return Some(arena.reverse_path(id));
            }
            self.stats.expanded += 1;

            for hexside in Hexside::ALL {
                let there = node.coords.neighbor(hexside);
                let Some(ni) = size.index(there) else {
                    continue;
                };
                if closed[ni] {
                    continue;
                }
                let Some(step) = SearchDirection::Reverse.step_cost(self.board, node.coords, hexside)
                else {
                    continue;
                };
                let cost = node.cost + step.get();
                if best[ni].is_some_and(|prev| arena.get(prev).cost <= cost) {
                    continue;
                }
                let child = arena.push(id, hexside, step);
                best[ni] = Some(child);
                open.enqueue(key(there, cost), child);
                self.stats.pushes += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::DistanceTable;
    use crate::terrain::TerrainBoard;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn c(x: i32, y: i32) -> HexCoords {
        HexCoords::from_user(x, y)
    }

    fn find(board: &TerrainBoard, s: HexCoords, t: HexCoords) -> Option<DirectedPath> {
        StandardPathfinder::new(board, &PathfinderConfig::default()).find(s, t)
    }

    #[test]
    fn uniform_board_route_is_range_long() {
        let board = TerrainBoard::uniform(8, 8, StepCost::ONE);
        for (s, t) in [(c(0, 0), c(7, 7)), (c(7, 0), c(0, 5)), (c(3, 3), c(3, 0))] {
            let path = find(&board, s, t).unwrap();
            assert_eq!(path.total_cost(), s.range_to(t));
            assert_eq!(path.source(), s);
            assert_eq!(path.destination(), t);
        }
    }

    #[test]
    fn straight_column_prefers_the_bearing() {
        let board = TerrainBoard::uniform(5, 6, StepCost::ONE);
        let path = find(&board, c(2, 0), c(2, 5)).unwrap();
        assert!(path.iter().all(|n| n.coords.user().x == 2));
    }

    #[test]
    fn matches_exact_distances() {
        let board = TerrainBoard::parse(
            "\
..3..#..
.#3.1#..
..3..#2.
.9...1..
..2.#...
.....##.",
        )
        .unwrap();
        let source = c(0, 5);
        let exact =
            DistanceTable::compute(&board, source, SearchDirection::Forward, QueueConfig::default());
        for target in board.map_size().iter() {
            let found = find(&board, source, target);
            assert_eq!(found.map(|p| p.total_cost()), exact.get(target), "{target}");
        }
    }

    #[test]
    fn tie_bits_shrink_as_steps_grow() {
        let size = MapSize::new(8, 8);
        assert_eq!(tie_bits(size, StepCost::ONE), 16);
        // 80 * 9000 needs 20 bits, leaving 11.
        assert_eq!(tie_bits(size, StepCost::new(9000).unwrap()), 11);
        assert_eq!(tie_bits(MapSize::new(2000, 2000), StepCost::MAX), 0);
    }

    #[test]
    fn dear_steps_stay_exact() {
        let mut rng = StdRng::seed_from_u64(0xC057);
        for _ in 0..20 {
            let mut board = TerrainBoard::uniform(8, 8, StepCost::ONE);
            for coords in board.map_size().iter() {
                board.set_terrain(coords, StepCost::new(rng.random_range(1000..=9000)));
            }
            for _ in 0..4 {
                let source = c(rng.random_range(0..8), rng.random_range(0..8));
                let exact = DistanceTable::compute(
                    &board,
                    source,
                    SearchDirection::Forward,
                    QueueConfig::default(),
                );
                for target in board.map_size().iter() {
                    let found = find(&board, source, target);
                    assert_eq!(
                        found.map(|p| p.total_cost()),
                        exact.get(target),
                        "{source} -> {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn higher_minimum_step_scales_the_estimate() {
        let board = TerrainBoard::uniform(6, 6, StepCost::new(3).unwrap());
        let mut finder = StandardPathfinder::new(&board, &PathfinderConfig::default());
        let path = finder.find(c(0, 0), c(5, 5)).unwrap();
        assert_eq!(path.total_cost(), 3 * c(0, 0).range_to(c(5, 5)));
        // The estimate is exact here, so only cells on some cheapest route
        // are ever expanded.
        assert!(finder.stats().expanded < board.map_size().len());
    }

    #[test]
    fn unreachable_and_degenerate() {
        let mut board = TerrainBoard::uniform(3, 3, StepCost::ONE);
        board.set_impassable(c(2, 2));
        assert!(find(&board, c(0, 0), c(2, 2)).is_none());
        assert!(find(&board, c(0, 0), c(3, 3)).is_none());
        assert_eq!(find(&board, c(1, 1), c(1, 1)).map(|p| p.total_steps()), Some(0));
    }
}
