//! Tuning knobs for queues, landmark construction and queries.

/// Sizing of a [`HotPriorityQueue`](crate::HotPriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Number of items the heap may hold before keys above its current
    /// ceiling are sent to overflow buckets instead.
    pub pool_size: usize,
    /// Right shift applied to a key to choose its overflow bucket.
    pub preference_shift: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            pool_size: 64,
            preference_shift: 2,
        }
    }
}

/// Options for building a [`LandmarkSet`](crate::LandmarkSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LandmarkConfig {
    /// Queue used by each flood fill.
    pub queue: QueueConfig,
    /// Build landmarks on the rayon thread pool.
    pub parallel: bool,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            queue: QueueConfig {
                pool_size: 256,
                preference_shift: 2,
            },
            parallel: true,
        }
    }
}

/// Options for a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// Queue used by each half-search.
    pub queue: QueueConfig,
    /// Use the bidirectional landmark search when the board has landmarks.
    /// When `false`, or when no landmarks exist, the single-direction search
    /// runs instead.
    pub use_landmarks: bool,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            queue: QueueConfig::default(),
            use_landmarks: true,
        }
    }
}
