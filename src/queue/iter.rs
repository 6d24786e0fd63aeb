use core::iter::FusedIterator;

use super::node::{NodeArena, NodeId};

/// An iterator over the values of a [`Queue`](super::list::Queue), head first.
pub struct Iter<'a> {
    nodes: &'a NodeArena,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(nodes: &'a NodeArena, head: Option<NodeId>, count: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: count,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
