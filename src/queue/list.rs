use alloc::string::String;
use core::fmt;

use tracing::{debug, trace};

use super::{
    iter::Iter,
    node::{Node, NodeArena, NodeId},
    sort,
};
use crate::error::{QueueError, Result};

/// A queue of owned strings backed by a singly linked list.
///
/// The queue keeps a reference to both ends of the chain and a cached element
/// count:
///
/// - `count == 0` exactly when both `head` and `tail` are absent.
/// - Otherwise following `count - 1` links from `head` ends at `tail`, whose
///   link is absent.
pub struct Queue {
    nodes: NodeArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    count: usize,
}

impl Queue {
    /// Creates a new, empty queue. Nothing is allocated until the first insert.
    pub const fn new() -> Self {
        Queue {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` nodes.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Queue {
            nodes: NodeArena::try_with_capacity(capacity)?,
            head: None,
            tail: None,
            count: 0,
        })
    }

    /// Number of nodes the queue can hold without growing its node storage.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Copies `value` into a new node linked in front of the head.
    ///
    /// On error the queue is left exactly as it was.
    pub fn try_insert_head(&mut self, value: &str) -> Result<()> {
        let mut node = Node::try_new(value)?;
        node.set_next(self.head);
        let id = self.nodes.try_insert(node)?;

        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.count += 1;
        Ok(())
    }

    /// Copies `value` into a new node linked after the tail.
    ///
    /// On error the queue is left exactly as it was.
    pub fn try_insert_tail(&mut self, value: &str) -> Result<()> {
        let node = Node::try_new(value)?;
        let id = self.nodes.try_insert(node)?;

        match self.tail {
            Some(tail) => self.nodes[tail].set_next(Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.count += 1;
        Ok(())
    }

    /// Inserts a copy of `value` at the head. Returns `false` if storage could
    /// not be allocated.
    pub fn insert_head(&mut self, value: &str) -> bool {
        self.try_insert_head(value)
            .inspect_err(|err| debug!(%err, len = value.len(), "insert_head rejected"))
            .is_ok()
    }

    /// Inserts a copy of `value` at the tail. Returns `false` if storage could
    /// not be allocated.
    pub fn insert_tail(&mut self, value: &str) -> bool {
        self.try_insert_tail(value)
            .inspect_err(|err| debug!(%err, len = value.len(), "insert_tail rejected"))
            .is_ok()
    }

    /// Detaches the head node and returns its value.
    pub fn pop_head(&mut self) -> Option<String> {
        let head = self.head?;
        let node = self.nodes.remove(head);
        self.head = node.next();
        self.count -= 1;

        if self.head.is_none() {
            self.tail = None;
            self.nodes.clear();
        }
        Some(node.into_value())
    }

    /// Removes the head and copies its value into `out`.
    ///
    /// At most `out.len() - 1` bytes are copied and the rest of `out` is
    /// zero-filled, so the copy is always terminated inside the buffer. Longer
    /// values are truncated silently. Returns the number of value bytes copied.
    pub fn remove_head_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let value = self.pop_head().ok_or(QueueError::Empty)?;
        Ok(copy_truncated(value.as_bytes(), out))
    }

    /// Removes the head, copying its value into `out` when a buffer is given.
    ///
    /// Returns `false` if the queue is empty. See [`Queue::remove_head_into`]
    /// for how the buffer is filled.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> bool {
        match out {
            Some(out) => self.remove_head_into(out).is_ok(),
            None => self.pop_head().is_some(),
        }
    }

    /// Number of queued values.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Same as [`Queue::size`].
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The value at the head of the queue.
    pub fn head(&self) -> Option<&str> {
        self.head.map(|id| self.nodes[id].value())
    }

    /// The value at the tail of the queue.
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|id| self.nodes[id].value())
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.head, self.count)
    }

    /// Releases every value, head first.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Reverses the queue in place by flipping every link.
    pub fn reverse(&mut self) {
        if self.count < 2 {
            return;
        }

        let mut done: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &mut self.nodes[id];
            cursor = node.next();
            node.set_next(done);
            done = Some(id);
        }

        self.tail = self.head;
        self.head = done;
        trace!(count = self.count, "reversed queue");
    }

    /// Sorts the values in ascending byte order. Equal values keep their
    /// relative order.
    pub fn sort(&mut self) {
        if self.count < 2 {
            return;
        }

        self.head = sort::merge_sort(&mut self.nodes, self.head);
        self.tail = sort::find_tail(&self.nodes, self.head);
        trace!(count = self.count, "sorted queue");
    }

    #[cfg(test)]
    pub(crate) fn node_ids(&self) -> alloc::vec::Vec<NodeId> {
        let mut ids = alloc::vec::Vec::new();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            ids.push(id);
            cursor = self.nodes[id].next();
        }
        ids
    }

    #[cfg(test)]
    pub(crate) fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }
}

fn copy_truncated(value: &[u8], out: &mut [u8]) -> usize {
    let Some(limit) = out.len().checked_sub(1) else {
        return 0;
    };
    let copied = value.len().min(limit);
    out[..copied].copy_from_slice(&value[..copied]);
    out[copied..].fill(0);
    copied
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
