//! Heap-On-Top priority queue.
//!
//! A small binary heap (the *pool*) holds the items with the lowest coarse
//! priorities; everything above the pool's ceiling waits in overflow
//! buckets keyed by `key >> preference_shift`. When the pool drains, the
//! lowest bucket is promoted wholesale into a fresh heap.
//!
//! Invariant: every pooled item has preference `<= base` and every bucket
//! has preference `> base`, so the pool minimum is the global minimum.

use std::collections::{BTreeMap, BinaryHeap};

use super::PriorityQueue;
use crate::config::QueueConfig;

/// Heap entry ordered by `key` alone, reversed so `BinaryHeap` pops the
/// smallest key first.
struct HeapItem<T> {
    key: i32,
    value: T,
}

impl<T> PartialEq for HeapItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for HeapItem<T> {}

impl<T> Ord for HeapItem<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key.cmp(&self.key)
    }
}

impl<T> PartialOrd for HeapItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Hybrid heap + bucket min-priority queue. Equal keys leave in no
/// particular order.
pub struct HotPriorityQueue<T> {
    pool: BinaryHeap<HeapItem<T>>,
    buckets: BTreeMap<i32, Vec<HeapItem<T>>>,
    bucketed: usize,
    base: i32,
    pool_size: usize,
    shift: u32,
}

impl<T> Default for HotPriorityQueue<T> {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

impl<T> HotPriorityQueue<T> {
    /// Create an empty queue.
    pub fn new(config: QueueConfig) -> Self {
        let pool_size = config.pool_size.max(1);
        Self {
            pool: BinaryHeap::with_capacity(pool_size),
            buckets: BTreeMap::new(),
            bucketed: 0,
            base: i32::MIN,
            pool_size,
            shift: config.preference_shift.min(31),
        }
    }

    /// Drop every pending item.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.buckets.clear();
        self.bucketed = 0;
        self.base = i32::MIN;
    }

    /// Number of overflow buckets currently holding items.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn preference(&self, key: i32) -> i32 {
        key >> self.shift
    }

    fn promote(&mut self) {
        if let Some((preference, items)) = self.buckets.pop_first() {
            self.bucketed -= items.len();
            self.base = preference;
            self.pool = BinaryHeap::from(items);
        }
    }
}

impl<T> PriorityQueue<T> for HotPriorityQueue<T> {
    fn enqueue(&mut self, key: i32, value: T) {
        let item = HeapItem { key, value };
        let preference = self.preference(key);
        if preference <= self.base {
            self.pool.push(item);
        } else if self.buckets.is_empty() && self.pool.len() < self.pool_size {
            self.base = preference;
            self.pool.push(item);
        } else {
            self.buckets.entry(preference).or_default().push(item);
            self.bucketed += 1;
        }
    }

    fn try_dequeue(&mut self) -> Option<(i32, T)> {
        if self.pool.is_empty() {
            self.promote();
        }
        self.pool.pop().map(|item| (item.key, item.value))
    }

    fn try_peek(&self) -> Option<(i32, &T)> {
        if let Some(item) = self.pool.peek() {
            return Some((item.key, &item.value));
        }
        let (_, items) = self.buckets.first_key_value()?;
        items
            .iter()
            .min_by_key(|item| item.key)
            .map(|item| (item.key, &item.value))
    }

    fn len(&self) -> usize {
        self.pool.len() + self.bucketed
    }
}
