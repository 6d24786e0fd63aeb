//! Entry points taking an optional queue.
//!
//! These mirror the methods on [`Queue`] for callers that may hold no queue at
//! all. An absent queue is treated as degenerately empty: operations with a
//! boolean result return `false`, [`size`] returns `0`, and the rest do
//! nothing.

use super::list::Queue;

/// Creates an empty queue.
pub fn new() -> Queue {
    Queue::new()
}

/// Releases every node of `queue` in list order, then the queue itself.
pub fn destroy(queue: Option<Queue>) {
    if let Some(mut queue) = queue {
        queue.clear();
    }
}

/// Inserts a copy of `value` at the head. `false` for an absent queue.
pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_head(value))
}

/// Inserts a copy of `value` at the tail. `false` for an absent queue.
pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_tail(value))
}

/// Removes the head of `queue`, copying it into `out` as
/// [`Queue::remove_head`] does.
pub fn remove_head(queue: Option<&mut Queue>, out: Option<&mut [u8]>) -> bool {
    queue.is_some_and(|queue| queue.remove_head(out))
}

/// Number of queued values, `0` for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

/// Reverses the queue in place.
pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sorts the queue in ascending byte order, keeping equal values in order.
pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
