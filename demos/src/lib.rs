//! Shared terrain map and rendering used by the demo binaries.
//!
//! The map is drawn one text row per board row. Each cell is two
//! characters wide and odd columns are shifted right by a space, which is
//! enough to read a route off it.

use hexroute_core::HexCoords;
use hexroute_paths::{DirectedPath, HexBoard, Result, TerrainBoard};

/// A river valley with a ridge, one ford and a couple of hills.
pub const VALLEY: &str = "\
......................
..222......####.......
..2#2......#..#...33..
..222..........#..33..
.......####....#......
......##..#....####...
99999.#...#..........9
9999999#.....#.99999.9
....999999.#.99999....
........9999999.......
..3.......#...........
.333.....###......22..
..3.......#.......22..
......................";

/// Parse [`VALLEY`].
pub fn valley() -> Result<TerrainBoard> {
    TerrainBoard::parse(VALLEY)
}

/// Render `board` with `path` drawn over it.
///
/// Route cells show `*`, the endpoints `S` and `T`.
pub fn render(board: &TerrainBoard, path: Option<&DirectedPath>) -> String {
    let size = board.map_size();
    let route: Vec<HexCoords> = path.map(DirectedPath::coords_vec).unwrap_or_default();
    let mut out = String::new();
    for y in 0..size.height {
        for x in 0..size.width {
            let c = HexCoords::from_user(x, y);
            let glyph = if path.is_some_and(|p| p.source() == c) {
                'S'
            } else if path.is_some_and(|p| p.destination() == c) {
                'T'
            } else if route.contains(&c) {
                '*'
            } else {
                match board.terrain(c).map(|cost| cost.get()) {
                    None => '#',
                    Some(1) => '.',
                    Some(n) => char::from_digit(n as u32, 10).unwrap_or('?'),
                }
            };
            if x % 2 == 1 {
                out.push(' ');
            }
            out.push(glyph);
            if x % 2 == 0 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
