use std::collections::{BTreeMap, VecDeque};

use super::PriorityQueue;

/// Map-backed min-priority queue that releases equal keys in insertion
/// order.
#[derive(Debug, Clone)]
pub struct FifoPriorityQueue<T> {
    lists: BTreeMap<i32, VecDeque<T>>,
    len: usize,
}

impl<T> Default for FifoPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoPriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            lists: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<T> PriorityQueue<T> for FifoPriorityQueue<T> {
    fn enqueue(&mut self, key: i32, value: T) {
        self.lists.entry(key).or_default().push_back(value);
        self.len += 1;
    }

    fn try_dequeue(&mut self) -> Option<(i32, T)> {
        let mut entry = self.lists.first_entry()?;
        let key = *entry.key();
        let value = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if value.is_some() {
            self.len -= 1;
        }
        value.map(|v| (key, v))
    }

    fn try_peek(&self) -> Option<(i32, &T)> {
        let (&key, list) = self.lists.first_key_value()?;
        list.front().map(|v| (key, v))
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_leave_in_insertion_order() {
        let mut q = FifoPriorityQueue::new();
        q.enqueue(5, "a");
        q.enqueue(1, "b");
        q.enqueue(5, "c");
        q.enqueue(1, "d");
        q.enqueue(3, "e");
        assert_eq!(q.len(), 5);
        assert_eq!(q.try_peek(), Some((1, &"b")));
        let out: Vec<_> = std::iter::from_fn(|| q.try_dequeue()).collect();
        assert_eq!(out, vec![(1, "b"), (1, "d"), (3, "e"), (5, "a"), (5, "c")]);
        assert!(q.is_empty());
        assert_eq!(q.try_dequeue(), None);
    }

    #[test]
    fn agrees_with_hot_queue_on_keys() {
        use crate::queue::HotPriorityQueue;

        let mut fifo = FifoPriorityQueue::new();
        let mut hot = HotPriorityQueue::default();
        let keys = [9, 2, 2, 400, 31, 7, 1200, 0, 31, 65];
        for (i, k) in keys.into_iter().enumerate() {
            fifo.enqueue(k, i);
            hot.enqueue(k, i);
        }
        while let Some((k, _)) = fifo.try_dequeue() {
            assert_eq!(hot.try_dequeue().map(|(hk, _)| hk), Some(k));
        }
        assert!(hot.is_empty());
    }
}
