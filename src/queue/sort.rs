//! Merge sort over the node chain.
//!
//! The chain is split and relinked in place. While a sort is in progress the
//! queue's tail reference is stale; [`find_tail`] restores it afterwards.

use super::node::{NodeArena, NodeId};

/// Sorts the chain starting at `head` and returns its new head.
pub(crate) fn merge_sort(nodes: &mut NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let head = head?;
    if nodes[head].next().is_none() {
        return Some(head);
    }

    let right = split(nodes, head);
    let left = merge_sort(nodes, Some(head));
    let right = merge_sort(nodes, right);
    merge(nodes, left, right)
}

/// Walks to the last node of the chain starting at `head`.
pub(crate) fn find_tail(nodes: &NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let mut cursor = head?;
    while let Some(next) = nodes[cursor].next() {
        cursor = next;
    }
    Some(cursor)
}

/// Cuts the chain after its middle node and returns the head of the second
/// half. The first half keeps `head` and holds `len / 2` nodes.
fn split(nodes: &mut NodeArena, head: NodeId) -> Option<NodeId> {
    let mut slow = head;
    let mut fast = nodes[head].next()?;

    while let Some(ahead) = nodes[fast].next().and_then(|next| nodes[next].next()) {
        fast = ahead;
        if let Some(next) = nodes[slow].next() {
            slow = next;
        }
    }

    let right = nodes[slow].next();
    nodes[slow].set_next(None);
    right
}

/// Merges two sorted chains. On equal values the node from `left` goes first.
fn merge(
    nodes: &mut NodeArena,
    mut left: Option<NodeId>,
    mut right: Option<NodeId>,
) -> Option<NodeId> {
    let mut head = None;
    let mut last: Option<NodeId> = None;

    while let (Some(l), Some(r)) = (left, right) {
        let taken = if nodes[l].value() <= nodes[r].value() {
            left = nodes[l].next();
            l
        } else {
            right = nodes[r].next();
            r
        };
        link_after(nodes, &mut head, last, Some(taken));
        last = Some(taken);
    }

    link_after(nodes, &mut head, last, left.or(right));
    head
}

/// Links `node` after `last`, or makes it the head when nothing is merged yet.
fn link_after(
    nodes: &mut NodeArena,
    head: &mut Option<NodeId>,
    last: Option<NodeId>,
    node: Option<NodeId>,
) {
    match last {
        Some(last) => nodes[last].set_next(node),
        None => *head = node,
    }
}
