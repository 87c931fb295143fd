//! Landmark-guided bidirectional search.
//!
//! A forward half-search grows from the source over exit costs while a
//! reverse half-search grows from the target over entry costs. The two are
//! stepped alternately and share one [`SharedState`]: the node arena, the
//! closed set, each side's best open node per cell, and the cheapest
//! meeting found so far. Each side is guided by landmark bounds toward its
//! own goal and pruned with its partner's bound, so the search stops as
//! soon as neither frontier can still improve the best meeting.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use hexroute_core::{HexCoords, Hexside, MapSize};

use crate::arena::{NodeId, PathArena};
use crate::config::{PathfinderConfig, QueueConfig};
use crate::landmarks::LandmarkSet;
use crate::path::DirectedPath;
use crate::queue::{HotPriorityQueue, PriorityQueue};
use crate::traits::{HexBoard, SearchDirection};

/// Work done by one query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells whose neighbors were examined.
    pub expanded: usize,
    /// Items added to the priority queues.
    pub pushes: usize,
    /// Times the best meeting of the two half-searches improved.
    pub meetings: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expanded, {} pushed, {} meetings",
            self.expanded, self.pushes, self.meetings
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Meeting {
    cost: i32,
    forward: NodeId,
    reverse: NodeId,
}

/// State both half-searches of one query read and write.
struct SharedState {
    size: MapSize,
    arena: PathArena,
    closed: Vec<bool>,
    /// Cheapest node per cell, indexed by [`slot`].
    open: [Vec<Option<NodeId>>; 2],
    best: Option<Meeting>,
    stats: SearchStats,
}

#[inline]
fn slot(direction: SearchDirection) -> usize {
    match direction {
        SearchDirection::Forward => 0,
        SearchDirection::Reverse => 1,
    }
}

impl SharedState {
    fn new(size: MapSize) -> Self {
        Self {
            size,
            arena: PathArena::new(),
            closed: vec![false; size.len()],
            open: [vec![None; size.len()], vec![None; size.len()]],
            best: None,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn best_cost(&self) -> i32 {
        self.best.map_or(i32::MAX, |m| m.cost)
    }

    /// Record `id` as a candidate meeting point if the other direction has
    /// a node on the same cell and the joined route beats the best so far.
    fn try_meet(&mut self, direction: SearchDirection, id: NodeId, cell: usize) {
        let Some(other) = self.open[slot(direction.partner())][cell] else {
            return;
        };
        let cost = self.arena.get(id).cost + self.arena.get(other).cost;
        if cost >= self.best_cost() {
            return;
        }
        let (forward, reverse) = match direction {
            SearchDirection::Forward => (id, other),
            SearchDirection::Reverse => (other, id),
        };
        log::trace!(
            "meeting at {} improved to {cost}",
            self.arena.get(id).coords
        );
        self.best = Some(Meeting {
            cost,
            forward,
            reverse,
        });
        self.stats.meetings += 1;
    }
}

/// One direction of a bidirectional query.
struct HalfSearch<'b, B: ?Sized> {
    board: &'b B,
    landmarks: &'b LandmarkSet,
    direction: SearchDirection,
    /// Where this side started.
    start: HexCoords,
    /// Where this side is heading.
    goal: HexCoords,
    queue: HotPriorityQueue<NodeId>,
    shared: Rc<RefCell<SharedState>>,
}

impl<'b, B: HexBoard + ?Sized> HalfSearch<'b, B> {
    fn new(
        board: &'b B,
        landmarks: &'b LandmarkSet,
        direction: SearchDirection,
        start: HexCoords,
        goal: HexCoords,
        queue: QueueConfig,
        shared: Rc<RefCell<SharedState>>,
    ) -> Self {
        let mut half = Self {
            board,
            landmarks,
            direction,
            start,
            goal,
            queue: HotPriorityQueue::new(queue),
            shared,
        };
        half.seed();
        half
    }

    fn seed(&mut self) {
        let key = self.heuristic(self.start);
        let mut shared = self.shared.borrow_mut();
        let Some(cell) = shared.size.index(self.start) else {
            return;
        };
        let root = shared.arena.push_root(self.start);
        shared.open[slot(self.direction)][cell] = Some(root);
        shared.stats.pushes += 1;
        self.queue.enqueue(key, root);
    }

    /// Lower bound on the rest of this side's route from `here`.
    fn heuristic(&self, here: HexCoords) -> i32 {
        match self.direction {
            SearchDirection::Forward => self.landmarks.forward_bound(here, self.goal),
            SearchDirection::Reverse => self.landmarks.reverse_bound(here, self.goal),
        }
    }

    /// The partner's heuristic at `here`: a lower bound on the cost from
    /// this side's start to `here`.
    fn partner_heuristic(&self, here: HexCoords) -> i32 {
        match self.direction {
            SearchDirection::Forward => self.landmarks.reverse_bound(here, self.start),
            SearchDirection::Reverse => self.landmarks.forward_bound(here, self.start),
        }
    }

    /// Smallest pending key, if anything is pending.
    fn frontier_min(&self) -> Option<i32> {
        self.queue.try_peek().map(|(key, _)| key)
    }

    fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop one item and, unless it is stale or pruned, expand and close
    /// its cell.
    fn step(&mut self, partner_min: Option<i32>) {
        let Some((key, id)) = self.queue.try_dequeue() else {
            return;
        };
        let here = self.shared.borrow().arena.get(id).coords;
        let partner_h = self.partner_heuristic(here);

        let mut shared = self.shared.borrow_mut();
        let Some(cell) = shared.size.index(here) else {
            return;
        };
        if shared.closed[cell] || shared.open[slot(self.direction)][cell] != Some(id) {
            return;
        }
        let best = shared.best_cost();
        if key >= best {
            return;
        }

        let cost = shared.arena.get(id).cost;
        let promising = partner_min
            .is_some_and(|min| cost.saturating_add(min).saturating_sub(partner_h) < best);
        if promising {
            drop(shared);
            self.expand(id, here);
            shared = self.shared.borrow_mut();
        }

        shared.closed[cell] = true;
        shared.try_meet(self.direction, id, cell);
    }

    fn expand(&mut self, id: NodeId, here: HexCoords) {
        let mut pushed = Vec::with_capacity(Hexside::ALL.len());
        {
            let mut shared = self.shared.borrow_mut();
            shared.stats.expanded += 1;
            let own = slot(self.direction);
            let base = shared.arena.get(id).cost;
            for hexside in Hexside::ALL {
                let there = here.neighbor(hexside);
                let Some(ncell) = shared.size.index(there) else {
                    continue;
                };
                let Some(step) = self.direction.step_cost(self.board, here, hexside) else {
                    continue;
                };
                let candidate = base + step.get();
                if shared.closed[ncell] {
                    // The partner may have settled this cell already; the
                    // route through it can still be the best meeting.
                    let improves = shared.open[slot(self.direction.partner())][ncell]
                        .is_some_and(|other| candidate + shared.arena.get(other).cost < shared.best_cost());
                    if improves {
                        let child = shared.arena.push(id, hexside, step);
                        shared.try_meet(self.direction, child, ncell);
                    }
                    continue;
                }
                let cheaper = shared.open[own][ncell]
                    .is_none_or(|prev| candidate < shared.arena.get(prev).cost);
                if !cheaper {
                    continue;
                }
                let child = shared.arena.push(id, hexside, step);
                shared.open[own][ncell] = Some(child);
                shared.stats.pushes += 1;
                shared.try_meet(self.direction, child, ncell);
                pushed.push((candidate, there, child));
            }
        }
        for (candidate, there, child) in pushed {
            let key = candidate + self.heuristic(there);
            self.queue.enqueue(key, child);
        }
    }
}

/// Bidirectional search guided by a board's [`LandmarkSet`].
pub struct BidirectionalPathfinder<'b, B: ?Sized> {
    board: &'b B,
    landmarks: &'b LandmarkSet,
    queue: QueueConfig,
    stats: SearchStats,
}

impl<'b, B: HexBoard + ?Sized> BidirectionalPathfinder<'b, B> {
    pub fn new(board: &'b B, landmarks: &'b LandmarkSet, config: &PathfinderConfig) -> Self {
        Self {
            board,
            landmarks,
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
        if !size.contains(source) || !size.contains(target) {
            return None;
        }
        if source == target {
            return Some(DirectedPath::new(source));
        }

        let shared = Rc::new(RefCell::new(SharedState::new(size)));
        let mut forward = HalfSearch::new(
            self.board,
            self.landmarks,
            SearchDirection::Forward,
            source,
            target,
            self.queue,
            Rc::clone(&shared),
        );
        let mut reverse = HalfSearch::new(
            self.board,
            self.landmarks,
            SearchDirection::Reverse,
            target,
            source,
            self.queue,
            Rc::clone(&shared),
        );

        while !(forward.is_done() && reverse.is_done()) {
            forward.step(reverse.frontier_min());
            reverse.step(forward.frontier_min());
        }
        drop((forward, reverse));

        let shared = shared.borrow();
        self.stats = shared.stats;
        log::trace!("query {source} -> {target} allocated {} nodes", shared.arena.len());
        let meeting = shared.best?;
        let tail = shared.arena.reverse_path(meeting.reverse);
        Some(shared.arena.restack_forward(meeting.forward, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandmarkConfig;
    use crate::landmark::DistanceTable;
    use crate::terrain::TerrainBoard;
    use crate::traits::StepCost;

    const HILLS: &str = "\
..3..#....
.#3.1#.22.
..3..#2...
.9...1..#.
..2.#.....
.....##.3.
...4......";

    fn c(x: i32, y: i32) -> HexCoords {
        HexCoords::from_user(x, y)
    }

    fn with_landmarks(mut board: TerrainBoard) -> TerrainBoard {
        board.build_landmarks(&LandmarkConfig {
            parallel: false,
            ..LandmarkConfig::default()
        });
        board
    }

    /// Walk `path` on `board`, checking every step is legal, and return
    /// its cost.
    fn walk(board: &TerrainBoard, path: &DirectedPath) -> i32 {
        let nodes: Vec<_> = path.iter().collect();
        let mut total = 0;
        for pair in nodes.windows(2) {
            let h = pair[0].hexside.expect("exit on every step but the last");
            assert_eq!(pair[0].coords.neighbor(h), pair[1].coords);
            let step = board.try_exit_cost(pair[0].coords, h).expect("legal step");
            assert_eq!(pair[0].total_cost - pair[1].total_cost, step.get());
            total += step.get();
        }
        assert_eq!(nodes.last().and_then(|n| n.hexside), None);
        total
    }

    fn find(board: &TerrainBoard, s: HexCoords, t: HexCoords) -> Option<DirectedPath> {
        let landmarks = board.landmarks().expect("landmarks built");
        BidirectionalPathfinder::new(board, landmarks, &PathfinderConfig::default()).find(s, t)
    }

    #[test]
    fn matches_exact_distances_on_hills() {
        let board = with_landmarks(TerrainBoard::parse(HILLS).unwrap());
        let size = board.map_size();
        for source in [c(0, 0), c(9, 6), c(3, 3), c(6, 0)] {
            let exact = DistanceTable::compute(
                &board,
                source,
                SearchDirection::Forward,
                QueueConfig::default(),
            );
            for target in size.iter() {
                let found = find(&board, source, target);
                match exact.get(target) {
                    Some(d) => {
                        let path = found.unwrap_or_else(|| panic!("no path {source} -> {target}"));
                        assert_eq!(path.total_cost(), d, "{source} -> {target}");
                        assert_eq!(walk(&board, &path), d);
                        assert_eq!(path.source(), source);
                        assert_eq!(path.destination(), target);
                    }
                    None => assert!(found.is_none(), "{source} -> {target}"),
                }
            }
        }
    }

    #[test]
    fn uniform_cost_equals_range() {
        let board = with_landmarks(TerrainBoard::uniform(12, 9, StepCost::ONE));
        let (s, t) = (c(1, 7), c(10, 2));
        let path = find(&board, s, t).unwrap();
        assert_eq!(path.total_cost(), s.range_to(t));
        assert_eq!(path.total_steps() as i32, s.range_to(t));
    }

    #[test]
    fn directed_costs_differ_by_direction() {
        // Hills are dear to climb and cheap to leave, and one exit is closed,
        // so the two directions see different edges.
        let mut board = TerrainBoard::parse("....\n.99.\n....").unwrap();
        board.block_exit(c(1, 1), Hexside::SouthEast);
        let board = with_landmarks(board);
        for (s, t) in [(c(0, 1), c(3, 1)), (c(3, 1), c(0, 1))] {
            let exact =
                DistanceTable::compute(&board, s, SearchDirection::Forward, QueueConfig::default());
            let path = find(&board, s, t).unwrap();
            assert_eq!(Some(path.total_cost()), exact.get(t));
        }
    }

    #[test]
    fn trivial_and_off_board_queries() {
        let board = with_landmarks(TerrainBoard::uniform(4, 4, StepCost::ONE));
        let landmarks = board.landmarks().unwrap();
        let mut finder = BidirectionalPathfinder::new(&board, landmarks, &PathfinderConfig::default());
        let same = finder.find(c(2, 2), c(2, 2)).unwrap();
        assert_eq!(same.total_cost(), 0);
        assert_eq!(same.total_steps(), 0);
        assert!(finder.find(c(0, 0), c(4, 0)).is_none());
        assert!(finder.find(c(-1, 0), c(1, 1)).is_none());
    }

    #[test]
    fn stats_are_recorded() {
        let board = with_landmarks(TerrainBoard::parse(HILLS).unwrap());
        let landmarks = board.landmarks().unwrap();
        let mut finder = BidirectionalPathfinder::new(&board, landmarks, &PathfinderConfig::default());
        finder.find(c(0, 0), c(9, 6)).unwrap();
        let stats = finder.stats();
        assert!(stats.expanded > 0);
        assert!(stats.meetings >= 1);
        assert!(stats.pushes > 2);
        assert!(!stats.to_string().is_empty());
    }
}
