//! Route queries over a built-in terrain map.
//!
//! Builds landmarks off-thread, then answers a few fixed and a few random
//! queries with both the landmark search and the plain search.
//!
//! Run: cargo run --bin hexroute-demo

use std::sync::Arc;
use std::time::Instant;

use hexroute_core::HexCoords;
use hexroute_demos::{render, valley};
use hexroute_paths::{
    find_path_async, find_path_with, HexBoard, LandmarkConfig, LandmarkSet, PathfinderConfig,
    Result,
};
use rand::{RngExt, SeedableRng};

fn run() -> Result<()> {
    let mut board = valley()?;
    let size = board.map_size();

    let started = Instant::now();
    let pending = LandmarkSet::build_async(
        Arc::new(board.clone()),
        size.landmark_seeds(),
        LandmarkConfig::default(),
    );
    let landmarks = pending.wait()?;
    println!(
        "{} landmarks on a {size} board in {:?}",
        landmarks.len(),
        started.elapsed()
    );
    board.set_landmarks(landmarks);
    let board = Arc::new(board);

    let mut queries = vec![
        (HexCoords::from_user(0, 0), HexCoords::from_user(21, 13)),
        (HexCoords::from_user(12, 3), HexCoords::from_user(2, 12)),
    ];
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..3 {
        let s = HexCoords::from_user(rng.random_range(0..size.width), rng.random_range(0..size.height));
        let t = HexCoords::from_user(rng.random_range(0..size.width), rng.random_range(0..size.height));
        queries.push((s, t));
    }

    let plain = PathfinderConfig {
        use_landmarks: false,
        ..PathfinderConfig::default()
    };
    for (source, target) in queries {
        let path = find_path_async(Arc::clone(&board), source, target, PathfinderConfig::default())
            .wait()?;
        let check = find_path_with(&*board, source, target, &plain);
        match &path {
            Some(p) => println!(
                "{source} -> {target}: cost {} in {} steps (plain search: {:?})",
                p.total_cost(),
                p.total_steps(),
                check.as_ref().map(|c| c.total_cost())
            ),
            None => println!("{source} -> {target}: no path"),
        }
        println!("{}", render(&board, path.as_ref()));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
