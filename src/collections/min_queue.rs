//! Min-priority queue with `f64` priorities
//!
//! Thin wrapper over [`BinaryHeap`] with a reversed entry ordering. Duplicate
//! items are allowed, there is no decrease-key: traversals push a fresh entry
//! and drop stale ones when they surface. Entries with equal priority pop in
//! insertion order. Priorities follow [`f64::total_cmp`], so NaN sorts after
//! positive infinity and pops last.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue
///
/// # Example
///
/// ```
/// use trueno_routes::MinQueue;
///
/// let mut queue = MinQueue::new();
/// queue.push("slow", 9.0);
/// queue.push("fast", 1.5);
/// queue.push("fast-again", 1.5);
///
/// assert_eq!(queue.peek_priority(), Some(1.5));
/// assert_eq!(queue.pop(), Some(("fast", 1.5)));
/// assert_eq!(queue.pop(), Some(("fast-again", 1.5)));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> MinQueue<T> {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert an item
    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove the item with minimum priority
    pub fn pop(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    /// Item with minimum priority, without removing it
    #[must_use]
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.peek().map(|entry| (&entry.item, entry.priority))
    }

    /// Minimum priority currently queued
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Number of queued entries (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = MinQueue::new();
        for (item, priority) in [('c', 3.0), ('a', 1.0), ('d', 4.0), ('b', 2.0)] {
            queue.push(item, priority);
        }

        let mut popped = Vec::new();
        while let Some((item, _)) = queue.pop() {
            popped.push(item);
        }
        assert_eq!(popped, vec!['a', 'b', 'c', 'd']);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut queue = MinQueue::new();
        queue.push(7, 5.0);
        queue.push(7, 2.0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((7, 2.0)));
        assert_eq!(queue.pop(), Some((7, 5.0)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut queue = MinQueue::new();
        queue.push("first", 1.0);
        queue.push("second", 1.0);
        queue.push("third", 1.0);
        assert_eq!(queue.peek(), Some((&"first", 1.0)));
        assert_eq!(queue.pop().map(|(item, _)| item), Some("first"));
        assert_eq!(queue.pop().map(|(item, _)| item), Some("second"));
    }

    #[test]
    fn test_nan_priority_pops_last() {
        let mut queue = MinQueue::new();
        for (item, priority) in [("nan", f64::NAN), ("b", 2.0), ("inf", f64::INFINITY), ("a", 1.0)] {
            queue.push(item, priority);
        }
        queue.push("nan-again", f64::NAN);
        queue.push("c", 3.0);

        let mut popped = Vec::new();
        while let Some((item, _)) = queue.pop() {
            popped.push(item);
        }
        assert_eq!(popped, vec!["a", "b", "c", "inf", "nan", "nan-again"]);
    }

    #[test]
    fn test_empty_queue() {
        let queue: MinQueue<u32> = MinQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_priority(), None);
    }
}
