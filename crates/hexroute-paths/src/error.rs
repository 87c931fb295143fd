//! Error types for hexroute-paths.
//!
//! Untraversable hexsides and unreachable targets are ordinary outcomes and
//! are reported as `None`, not through this type.

use thiserror::Error;

/// Result type for hexroute-paths operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building boards or collecting off-thread results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A textual map had no rows.
    #[error("map is empty")]
    EmptyMap,

    /// A row of a textual map differs in width from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A textual map contains a character with no terrain meaning.
    #[error("invalid terrain {ch:?} at column {column}, row {row}")]
    InvalidTerrain { ch: char, row: usize, column: usize },

    /// The worker running an off-thread task stopped before producing a
    /// result.
    #[error("worker thread exited without producing a result")]
    WorkerLost,
}
