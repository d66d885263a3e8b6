#![allow(dead_code)] // Complete API module, not all methods used by the binary
//! Node payloads and identifiers

use std::fmt;

/// Stable, opaque identifier for a node.
///
/// Identity is always by id, never by value — duplicate values are legal and
/// common in the lists users build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Whether a node is part of the live chain or has been deleted.
///
/// Deleted nodes are tombstoned rather than removed from the arena so that
/// any id recorded in an earlier step still resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Linked,
    Tombstone,
}

/// A single list element.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub value: i64,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub(crate) state: NodeState,
}

impl Node {
    pub(crate) fn new(id: NodeId, value: i64) -> Self {
        Node {
            id,
            value,
            prev: None,
            next: None,
            state: NodeState::Linked,
        }
    }

    /// True if this node has been deleted and only remains for id resolution.
    pub fn is_tombstone(&self) -> bool {
        self.state == NodeState::Tombstone
    }
}
