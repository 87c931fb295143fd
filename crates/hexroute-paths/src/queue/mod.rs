//! Integer-keyed min-priority queues.
//!
//! [`HotPriorityQueue`] is the one the searches use. [`FifoPriorityQueue`] is
//! slower but orders equal keys first-in first-out, which makes it a handy
//! reference in tests.

mod fifo;
mod hot;

pub use fifo::FifoPriorityQueue;
pub use hot::HotPriorityQueue;

/// A min-priority queue keyed by `i32`.
pub trait PriorityQueue<T> {
    /// Add `value` with priority `key`.
    fn enqueue(&mut self, key: i32, value: T);

    /// Remove and return an item with the smallest key.
    fn try_dequeue(&mut self) -> Option<(i32, T)>;

    /// An item with the smallest key, without removing it.
    fn try_peek(&self) -> Option<(i32, &T)>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
