use alloc::{string::String, vec::Vec};
use core::{
    mem,
    ops::{Index, IndexMut},
};

use crate::error::{QueueError, Result};

/// Index of a node slot inside a [`NodeArena`].
pub(crate) type NodeId = usize;

/// A single cell of the queue: one owned value and the forward link.
#[derive(Debug)]
pub(crate) struct Node {
    value: String,
    next: Option<NodeId>,
}

impl Node {
    /// Copies `value` into freshly reserved storage.
    pub(crate) fn try_new(value: &str) -> Result<Self> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|source| QueueError::ValueAlloc {
                len: value.len(),
                source,
            })?;
        owned.push_str(value);
        Ok(Self {
            value: owned,
            next: None,
        })
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }

    pub(crate) fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeId> },
}

/// Slot table holding every node of a queue.
///
/// Vacant slots form a free list threaded through `next_free`, so a removal
/// followed by an insertion reuses storage instead of growing the table.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free: Option<NodeId>,
}

impl NodeArena {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
        }
    }

    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(QueueError::NodeAlloc)?;
        Ok(Self { slots, free: None })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node` and returns its slot. On failure `node` is dropped and
    /// the arena is unchanged.
    pub(crate) fn try_insert(&mut self, node: Node) -> Result<NodeId> {
        if let Some(id) = self.free {
            if let Slot::Vacant { next_free } = self.slots[id] {
                self.free = next_free;
            }
            self.slots[id] = Slot::Occupied(node);
            return Ok(id);
        }

        self.slots.try_reserve(1).map_err(QueueError::NodeAlloc)?;
        self.slots.push(Slot::Occupied(node));
        Ok(self.slots.len() - 1)
    }

    /// Takes the node out of slot `id` and puts the slot on the free list.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node {
        assert!(
            matches!(self.slots[id], Slot::Occupied(_)),
            "Trying to remove a vacant node slot"
        );
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Drops every slot but keeps the allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("Node {id} is not linked"),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("Node {id} is not linked"),
        }
    }
}
