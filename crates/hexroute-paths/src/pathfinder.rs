//! Query entry points.

use std::sync::Arc;
use std::time::Instant;

use hexroute_core::HexCoords;

use crate::bidirectional::{BidirectionalPathfinder, SearchStats};
use crate::config::PathfinderConfig;
use crate::path::DirectedPath;
use crate::standard::StandardPathfinder;
use crate::task::Pending;
use crate::traits::HexBoard;

/// Cheapest path from `source` to `target` with the default configuration.
///
/// Returns `None` when either endpoint is off the board or no route
/// exists. A query from a cell to itself yields a zero-step path.
///
/// ```
/// use hexroute_core::HexCoords;
/// use hexroute_paths::{find_path, StepCost, TerrainBoard};
///
/// let board = TerrainBoard::uniform(5, 5, StepCost::ONE);
/// let path = find_path(&board, HexCoords::from_user(0, 0), HexCoords::from_user(4, 4)).unwrap();
/// assert_eq!(path.total_cost(), 6);
/// ```
pub fn find_path<B: HexBoard + ?Sized>(
    board: &B,
    source: HexCoords,
    target: HexCoords,
) -> Option<DirectedPath> {
    find_path_with(board, source, target, &PathfinderConfig::default())
}

/// Cheapest path from `source` to `target`.
///
/// Uses the bidirectional landmark search when the board has a non-empty
/// landmark set and `config.use_landmarks` is set, the single-direction
/// range search otherwise. Both return paths of equal cost.
pub fn find_path_with<B: HexBoard + ?Sized>(
    board: &B,
    source: HexCoords,
    target: HexCoords,
    config: &PathfinderConfig,
) -> Option<DirectedPath> {
    let size = board.map_size();
    if !size.contains(source) || !size.contains(target) {
        log::debug!("query {source} -> {target} leaves the {size} board");
        return None;
    }
    if source == target {
        return Some(DirectedPath::new(source));
    }

    let started = Instant::now();
    let landmarks = board
        .landmarks()
        .filter(|set| config.use_landmarks && !set.is_empty());
    let (path, stats, method): (_, SearchStats, _) = match landmarks {
        Some(landmarks) => {
            let mut finder = BidirectionalPathfinder::new(board, landmarks, config);
            let path = finder.find(source, target);
            (path, finder.stats(), "bidirectional")
        }
        None => {
            let mut finder = StandardPathfinder::new(board, config);
            let path = finder.find(source, target);
            (path, finder.stats(), "standard")
        }
    };

    match &path {
        Some(p) => log::debug!(
            "{method} query {source} -> {target}: cost {} in {} steps, {stats}, {:?}",
            p.total_cost(),
            p.total_steps(),
            started.elapsed()
        ),
        None => log::debug!(
            "{method} query {source} -> {target}: no path, {stats}, {:?}",
            started.elapsed()
        ),
    }
    path
}

/// Run [`find_path_with`] on the rayon pool.
pub fn find_path_async<B>(
    board: Arc<B>,
    source: HexCoords,
    target: HexCoords,
    config: PathfinderConfig,
) -> Pending<Option<DirectedPath>>
where
    B: HexBoard + Send + Sync + ?Sized + 'static,
{
    Pending::spawn(move || find_path_with(&*board, source, target, &config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandmarkConfig;
    use crate::terrain::TerrainBoard;
    use crate::traits::StepCost;

    fn c(x: i32, y: i32) -> HexCoords {
        HexCoords::from_user(x, y)
    }

    #[test]
    fn both_methods_agree() {
        let mut board = TerrainBoard::parse(
            "\
.....2....
.###.2.##.
...#.2..#.
.5.#....#.
.5...3....",
        )
        .unwrap();
        board.build_landmarks(&LandmarkConfig::default());
        let without = PathfinderConfig {
            use_landmarks: false,
            ..PathfinderConfig::default()
        };
        for (s, t) in [(c(0, 0), c(9, 4)), (c(2, 2), c(9, 0)), (c(9, 3), c(0, 4))] {
            let a = find_path(&board, s, t).map(|p| p.total_cost());
            let b = find_path_with(&board, s, t, &without).map(|p| p.total_cost());
            assert!(a.is_some());
            assert_eq!(a, b, "{s} -> {t}");
        }
    }

    #[test]
    fn endpoints_are_checked() {
        let board = TerrainBoard::uniform(3, 3, StepCost::ONE);
        assert!(find_path(&board, c(0, 0), c(0, 3)).is_none());
        assert!(find_path(&board, c(-1, 0), c(0, 0)).is_none());
        let same = find_path(&board, c(1, 2), c(1, 2)).unwrap();
        assert_eq!(same.source(), c(1, 2));
        assert_eq!(same.total_cost(), 0);
    }

    #[test]
    fn async_query_matches_sync() {
        let mut board = TerrainBoard::uniform(7, 7, StepCost::ONE);
        board.set_impassable(c(3, 3));
        board.build_landmarks(&LandmarkConfig::default());
        let board = Arc::new(board);
        let expected = find_path(&*board, c(0, 3), c(6, 3)).map(|p| p.total_cost());
        let pending = find_path_async(Arc::clone(&board), c(0, 3), c(6, 3), PathfinderConfig::default());
        let got = pending.wait().unwrap().map(|p| p.total_cost());
        assert_eq!(got, expected);
    }
}
