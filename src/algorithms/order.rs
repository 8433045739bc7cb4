//! Order statistics: bounded top-n selection and a stable merge sort

use crate::collections::MinQueue;
use std::cmp::Ordering;

/// Direction of a ranked result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Lowest score first
    Ascending,
    /// Highest score first
    #[default]
    Descending,
}

/// The `n` highest-scoring keys
///
/// Keeps at most `n` candidates in a min-priority queue. A candidate enters
/// when the queue is not full or when its score is greater than or equal to
/// the current minimum, so among equal scores the most recently seen key
/// wins and the oldest held one is evicted.
///
/// O(|scores| · log n).
///
/// # Example
///
/// ```
/// use trueno_routes::{top_n, Order};
///
/// let scores = vec![("a", 5.0), ("b", 1.0), ("c", 9.0), ("d", 3.0)];
/// assert_eq!(top_n(scores.clone(), 3, Order::Descending), vec!["c", "a", "d"]);
/// assert_eq!(top_n(scores, 2, Order::Ascending), vec!["a", "c"]);
/// ```
#[must_use]
pub fn top_n<K, I>(scores: I, n: usize, order: Order) -> Vec<K>
where
    I: IntoIterator<Item = (K, f64)>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut queue = MinQueue::with_capacity(n);
    for (key, score) in scores {
        if queue.len() < n {
            queue.push(key, score);
        } else if queue.peek_priority().is_some_and(|min| score >= min) {
            queue.pop();
            queue.push(key, score);
        }
    }

    let mut ranked = Vec::with_capacity(queue.len());
    while let Some((key, _)) = queue.pop() {
        ranked.push(key);
    }
    if order == Order::Descending {
        ranked.reverse();
    }
    ranked
}

/// Stable merge sort by natural order
///
/// # Example
///
/// ```
/// use trueno_routes::merge_sort;
///
/// assert_eq!(merge_sort(vec![3, 1, 2]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Stable merge sort with a comparator
///
/// Elements that compare equal keep their input order.
#[must_use]
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_split(items, &mut compare)
}

fn sort_split<T>(mut items: Vec<T>, compare: &mut dyn FnMut(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_split(items, compare);
    let right = sort_split(right, compare);
    merge(left, right, compare)
}

fn merge<T>(
    left: Vec<T>,
    right: Vec<T>,
    compare: &mut dyn FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Right only overtakes on strictly less: equal elements stay left-first
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}
