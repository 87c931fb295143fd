//! [`LandmarkSet`]: every landmark of a board, and the lower bounds they
//! provide.
//!
//! For any landmark `L` the triangle inequality gives
//!
//! ```text
//! d(here, goal) >= d(here, L) - d(goal, L)
//! d(goal, here) >= d(L, here) - d(L, goal)
//! ```
//!
//! Taking the maximum over all landmarks keeps the bound admissible and
//! consistent while tightening it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use hexroute_core::HexCoords;
use rayon::prelude::*;

use crate::config::LandmarkConfig;
use crate::landmark::Landmark;
use crate::task::Pending;
use crate::traits::HexBoard;

/// The read-only landmark collection of one board.
#[derive(Clone, Debug, Default)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Build a landmark at each of `seeds`.
    ///
    /// Seeds that are off the board or impassable are skipped, as are
    /// repeats. With `config.parallel` the flood fills run on the rayon pool;
    /// the result is ordered like `seeds` either way.
    pub fn build<B: HexBoard + Sync + ?Sized>(
        board: &B,
        seeds: &[HexCoords],
        config: &LandmarkConfig,
    ) -> Self {
        let started = Instant::now();
        let seeds = usable_seeds(board, seeds);
        let queue = config.queue;

        let landmarks = if config.parallel {
            let built: Mutex<Vec<(usize, Landmark)>> = Mutex::new(Vec::with_capacity(seeds.len()));
            seeds.par_iter().enumerate().for_each(|(i, &seed)| {
                let landmark = Landmark::new(board, seed, queue);
                built
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push((i, landmark));
            });
            let mut built = built.into_inner().unwrap_or_else(PoisonError::into_inner);
            built.sort_by_key(|&(i, _)| i);
            built.into_iter().map(|(_, landmark)| landmark).collect()
        } else {
            seeds
                .iter()
                .map(|&seed| Landmark::new(board, seed, queue))
                .collect()
        };

        log::debug!(
            "built {} landmarks on a {} board in {:?}",
            seeds.len(),
            board.map_size(),
            started.elapsed()
        );
        Self { landmarks }
    }

    /// Build landmarks at the board's corners and edge midpoints.
    pub fn build_default<B: HexBoard + Sync + ?Sized>(board: &B, config: &LandmarkConfig) -> Self {
        Self::build(board, &board.map_size().landmark_seeds(), config)
    }

    /// Build on the rayon pool and hand the set back when it is ready.
    pub fn build_async<B>(board: Arc<B>, seeds: Vec<HexCoords>, config: LandmarkConfig) -> Pending<Self>
    where
        B: HexBoard + Send + Sync + ?Sized + 'static,
    {
        Pending::spawn(move || Self::build(&*board, &seeds, &config))
    }

    /// Number of landmarks.
    #[inline]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmarks in seed order.
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    /// The landmark at `coords`, if there is one.
    pub fn get(&self, coords: HexCoords) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.coords() == coords)
    }

    /// Lower bound on the cost of travelling from `here` to `goal`.
    pub fn forward_bound(&self, here: HexCoords, goal: HexCoords) -> i32 {
        self.landmarks.iter().fold(0, |best, l| {
            match (l.distance_to(here), l.distance_to(goal)) {
                (Some(h), Some(g)) => best.max(h - g),
                _ => best,
            }
        })
    }

    /// Lower bound on the cost of travelling from `goal` to `here`.
    pub fn reverse_bound(&self, here: HexCoords, goal: HexCoords) -> i32 {
        self.landmarks.iter().fold(0, |best, l| {
            match (l.distance_from(here), l.distance_from(goal)) {
                (Some(h), Some(g)) => best.max(h - g),
                _ => best,
            }
        })
    }
}

impl<'a> IntoIterator for &'a LandmarkSet {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn usable_seeds<B: HexBoard + ?Sized>(board: &B, seeds: &[HexCoords]) -> Vec<HexCoords> {
    let size = board.map_size();
    let mut usable: Vec<HexCoords> = Vec::with_capacity(seeds.len());
    for &seed in seeds {
        if !size.contains(seed) {
            log::warn!("landmark seed {seed} is off the {size} board, skipping");
            continue;
        }
        if is_impassable(board, seed) {
            log::warn!("landmark seed {seed} cannot be entered, skipping");
            continue;
        }
        if !usable.contains(&seed) {
            usable.push(seed);
        }
    }
    usable
}

fn is_impassable<B: HexBoard + ?Sized>(board: &B, coords: HexCoords) -> bool {
    let size = board.map_size();
    coords
        .neighbors()
        .all(|(h, n)| !size.contains(n) || board.try_entry_cost(coords, h).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueConfig;
    use crate::terrain::TerrainBoard;
    use crate::traits::StepCost;

    const MAP: &str = "\
....2...
.##.2.#.
..#.2.#.
..#...#.
.3333...
........";

    fn sequential() -> LandmarkConfig {
        LandmarkConfig {
            parallel: false,
            ..LandmarkConfig::default()
        }
    }

    #[test]
    fn default_seeds_build_one_landmark_each() {
        let board = TerrainBoard::parse(MAP).unwrap();
        let set = LandmarkSet::build_default(&board, &LandmarkConfig::default());
        assert_eq!(set.len(), 8);
        for l in &set {
            assert_eq!(l.distance_to(l.coords()), Some(0));
            assert_eq!(l.distance_from(l.coords()), Some(0));
        }
        assert!(set.get(HexCoords::from_user(7, 5)).is_some());
        assert!(set.get(HexCoords::from_user(3, 3)).is_none());
    }

    #[test]
    fn parallel_and_sequential_builds_agree() {
        let board = TerrainBoard::parse(MAP).unwrap();
        let seeds = board.map_size().landmark_seeds();
        let a = LandmarkSet::build(&board, &seeds, &LandmarkConfig::default());
        let b = LandmarkSet::build(&board, &seeds, &sequential());
        assert_eq!(a.len(), b.len());
        for (la, lb) in a.iter().zip(b.iter()) {
            assert_eq!(la.coords(), lb.coords());
            for c in board.map_size().iter() {
                assert_eq!(la.distance_to(c), lb.distance_to(c));
                assert_eq!(la.distance_from(c), lb.distance_from(c));
            }
        }
    }

    #[test]
    fn bad_seeds_are_skipped() {
        let mut board = TerrainBoard::uniform(5, 5, StepCost::ONE);
        let walled = HexCoords::from_user(2, 2);
        for h in hexroute_core::Hexside::ALL {
            board.block_hexside(walled, h);
        }
        let rock = HexCoords::from_user(4, 4);
        board.set_impassable(rock);
        let seeds = [
            rock,
            HexCoords::from_user(0, 0),
            HexCoords::from_user(9, 9),
            walled,
            HexCoords::from_user(0, 0),
        ];
        let set = LandmarkSet::build(&board, &seeds, &sequential());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn bounds_are_admissible() {
        let board = TerrainBoard::parse(MAP).unwrap();
        let set = LandmarkSet::build_default(&board, &sequential());
        let size = board.map_size();
        for goal in [HexCoords::from_user(3, 2), HexCoords::from_user(7, 0)] {
            let exact = Landmark::new(&board, goal, QueueConfig::default());
            for here in size.iter() {
                if let Some(d) = exact.distance_to(here) {
                    assert!(set.forward_bound(here, goal) <= d, "{here} -> {goal}");
                }
                if let Some(d) = exact.distance_from(here) {
                    assert!(set.reverse_bound(here, goal) <= d, "{goal} -> {here}");
                }
            }
        }
    }

    #[test]
    fn bound_is_exact_toward_a_landmark() {
        let board = TerrainBoard::parse(MAP).unwrap();
        let set = LandmarkSet::build_default(&board, &sequential());
        let corner = HexCoords::from_user(0, 0);
        let lm = set.get(corner).unwrap();
        let here = HexCoords::from_user(7, 5);
        assert_eq!(Some(set.forward_bound(here, corner)), lm.distance_to(here));
        assert_eq!(Some(set.reverse_bound(here, corner)), lm.distance_from(here));
    }

    #[test]
    fn empty_set_bounds_are_zero() {
        let set = LandmarkSet::default();
        assert!(set.is_empty());
        let a = HexCoords::from_user(1, 1);
        let b = HexCoords::from_user(4, 2);
        assert_eq!(set.forward_bound(a, b), 0);
        assert_eq!(set.reverse_bound(a, b), 0);
    }

    #[test]
    fn async_build_delivers() {
        let board = Arc::new(TerrainBoard::uniform(6, 6, StepCost::ONE));
        let seeds = board.map_size().landmark_seeds();
        let pending = LandmarkSet::build_async(Arc::clone(&board), seeds.clone(), LandmarkConfig::default());
        let set = pending.wait().unwrap();
        assert_eq!(set.len(), seeds.len());
    }
}
