//! **hexroute-core** — hexagonal grid geometry.
//!
//! This crate provides the value types the pathfinding crate is built on:
//! dual-basis hex coordinates, the six hexsides, and board extents with flat
//! indexing.
//!
//! Cells live in two mutually convertible bases. The rectangular *user*
//! basis (column, row) is what boards store and display; the oblique
//! *canonical* basis makes adjacency a constant vector per hexside and the
//! range between cells a closed formula. Conversion is exact integer
//! arithmetic through [`IntMatrix2D`].

pub mod coords;
pub mod hexside;
pub mod size;
pub mod vector;

pub use coords::HexCoords;
pub use hexside::{Hexside, HexsideSet};
pub use size::{MapSize, MapSizeIter};
pub use vector::{IntMatrix2D, IntVector2D};
