#![allow(dead_code)] // Complete API module, not all methods used by the binary
//! Arena-backed doubly linked list
//!
//! [`DoublyLinkedList`] owns every node in an id-keyed arena and tracks
//! `head`, `tail`, and `len`. All structural mutation goes through the
//! crate-internal mutators used by the mutation engine; consumers only read.
//!
//! # Invariants
//!
//! Between operations the following always hold (checked by [`validate`]):
//! - `len == 0` exactly when `head` and `tail` are both `None`
//! - following `next` from `head` exactly `len` times visits every linked
//!   node and ends at `tail`, whose `next` is `None`
//! - `a.next == Some(b)` exactly when `b.prev == Some(a)`
//! - `head.prev == None` and `tail.next == None`
//! - tombstoned nodes are never reachable from `head`
//!
//! [`validate`]: DoublyLinkedList::validate

use rustc_hash::FxHashMap;

use super::node::{Node, NodeId, NodeState};

/// The doubly linked list under visualization.
///
/// Cloning performs a full structural snapshot (the arena owns every node),
/// which is what makes side-effect-free trace previews possible.
#[derive(Debug, Clone)]
pub struct DoublyLinkedList {
    nodes: FxHashMap<NodeId, Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    next_id: u64,
}

impl DoublyLinkedList {
    /// Create an empty list.
    pub fn new() -> Self {
        DoublyLinkedList {
            nodes: FxHashMap::default(),
            head: None,
            tail: None,
            len: 0,
            next_id: 0,
        }
    }

    /// Create a list seeded with the given values, head to tail.
    ///
    /// Seeding does not produce steps; it is the construction-time
    /// configuration of a visualizer session.
    pub fn from_values(values: &[i64]) -> Self {
        let mut list = Self::new();
        for &value in values {
            let id = list.alloc(value);
            match list.tail {
                None => {
                    list.head = Some(id);
                    list.tail = Some(id);
                }
                Some(tail_id) => {
                    list.node_mut(id).prev = Some(tail_id);
                    list.node_mut(tail_id).next = Some(id);
                    list.tail = Some(id);
                }
            }
            list.len += 1;
        }
        list
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up a node by id. Resolves tombstones as well as linked nodes.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterate the live chain head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Values head to tail.
    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|n| n.value).collect()
    }

    /// Values tail to head, following `prev` links.
    pub fn values_rev(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            let node = self.node(id);
            out.push(node.value);
            cursor = node.prev;
        }
        out
    }

    /// Check every structural invariant, returning a message naming the
    /// first violation found.
    ///
    /// A violation here is a defect in the mutation engine, not a condition
    /// callers are expected to handle.
    pub fn validate(&self) -> Result<(), String> {
        if (self.len == 0) != self.head.is_none() || (self.len == 0) != self.tail.is_none() {
            return Err(format!(
                "len/head/tail disagree: len={}, head={:?}, tail={:?}",
                self.len, self.head, self.tail
            ));
        }

        let mut visited = 0usize;
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = match self.nodes.get(&id) {
                Some(n) => n,
                None => return Err(format!("chain references {} which is not in the arena", id)),
            };
            if node.state == NodeState::Tombstone {
                return Err(format!("tombstoned node {} is reachable from head", id));
            }
            if node.prev != prev {
                return Err(format!(
                    "{}.prev is {:?}, expected {:?}",
                    id, node.prev, prev
                ));
            }
            visited += 1;
            if visited > self.len {
                return Err(format!(
                    "chain is longer than len={} (cycle or stale len)",
                    self.len
                ));
            }
            prev = Some(id);
            cursor = node.next;
        }
        if visited != self.len {
            return Err(format!("chain has {} nodes but len={}", visited, self.len));
        }
        if prev != self.tail {
            return Err(format!(
                "chain ends at {:?} but tail is {:?}",
                prev, self.tail
            ));
        }
        Ok(())
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(&id)
            .unwrap_or_else(|| panic!("node {} missing from arena", id))
    }

    /// Allocate a detached node. The caller is responsible for linking it.
    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id, value));
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("node {} missing from arena", id))
    }

    pub(crate) fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    pub(crate) fn set_tail(&mut self, tail: Option<NodeId>) {
        self.tail = tail;
    }

    pub(crate) fn inc_len(&mut self) {
        self.len += 1;
    }

    pub(crate) fn dec_len(&mut self) {
        self.len -= 1;
    }

    /// Mark a node as deleted. The node must already be unlinked.
    pub(crate) fn tombstone(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.prev = None;
        node.next = None;
        node.state = NodeState::Tombstone;
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the live chain, head to tail.
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let id = self.cursor?;
        let node = self.list.get(id)?;
        self.cursor = node.next;
        Some(node)
    }
}
