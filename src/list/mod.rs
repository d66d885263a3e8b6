//! The doubly linked list model
//!
//! This module provides the data structure the mutation engine operates on:
//! - [`node`]: node payloads and their stable identifiers
//! - [`model`]: the arena-backed [`DoublyLinkedList`]
//!
//! # Arena representation
//!
//! Nodes live in a single id-keyed arena owned by the list; `prev`/`next` are
//! stored as [`NodeId`]s, never as direct references. This keeps the structure
//! trivially cloneable (a clone is a full structural snapshot) and lets step
//! records refer to nodes by id without borrowing the live list.
//!
//! Deleted nodes are kept in the arena as tombstones so that ids recorded in
//! earlier steps always resolve. Tombstones are unreachable from `head` and
//! invisible to [`DoublyLinkedList::values`] and [`DoublyLinkedList::len`].

pub mod model;
pub mod node;

pub use model::DoublyLinkedList;
pub use node::{Node, NodeId, NodeState};
