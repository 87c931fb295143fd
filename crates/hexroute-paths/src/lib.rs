//! Cheapest-path search over hex boards with directed step costs.
//!
//! Boards describe themselves through [`HexBoard`]: an extent, and for each
//! cell and [`Hexside`](hexroute_core::Hexside) the cost of leaving or
//! entering across it. Costs may differ by direction, so every distance
//! and every search comes in a forward (exit cost) and a reverse (entry
//! cost) flavor.
//!
//! - **Landmarks** ([`LandmarkSet`]) are cells with exact distances to and
//!   from every other cell, computed once per board (optionally in parallel
//!   or off-thread). They give tight lower bounds on any remaining route.
//! - **Bidirectional search** ([`BidirectionalPathfinder`]) grows from both
//!   endpoints at once, guided by those bounds, and joins the halves where
//!   they meet most cheaply.
//! - **Standard search** ([`StandardPathfinder`]) is the fallback for
//!   boards without landmarks: a range-guided search from target to source.
//!
//! [`find_path`] picks between them. Results are immutable, structurally
//! shared [`DirectedPath`]s.
//!
//! # Queues
//!
//! | Type | Ordering of equal keys |
//! |---|---|
//! | [`HotPriorityQueue`] | unspecified; heap + overflow buckets |
//! | [`FifoPriorityQueue`] | first in, first out |

mod arena;
mod bidirectional;
mod config;
mod error;
mod landmark;
mod landmarks;
mod path;
mod pathfinder;
mod queue;
mod standard;
mod task;
mod terrain;
mod traits;

pub use bidirectional::{BidirectionalPathfinder, SearchStats};
pub use config::{LandmarkConfig, PathfinderConfig, QueueConfig};
pub use error::{Error, Result};
pub use landmark::{DistanceTable, Landmark, UNREACHABLE};
pub use landmarks::LandmarkSet;
pub use path::{DirectedPath, Iter, PathNode, PathStep};
pub use pathfinder::{find_path, find_path_async, find_path_with};
pub use queue::{FifoPriorityQueue, HotPriorityQueue, PriorityQueue};
pub use standard::StandardPathfinder;
pub use task::Pending;
pub use terrain::TerrainBoard;
pub use traits::{HexBoard, SearchDirection, StepCost};
