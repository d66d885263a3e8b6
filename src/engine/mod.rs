#![allow(dead_code)] // Complete API module, not all methods used by the binary
//! The mutation engine
//!
//! Four operations on the list — insert at the beginning, insert at the end,
//! insert at a position, delete by value — each mutating the list and, in
//! lock-step with every pointer write, appending a [`Step`] to a
//! [`StepTrace`]. Replaying steps `0..k` therefore always corresponds to a
//! structurally valid intermediate state.
//!
//! - [`insert`]: the three insertion variants
//! - [`delete`]: search plus the four deletion cases
//! - [`step`]: the step and trace types
//!
//! # Error policy
//!
//! Expected failures (position out of range, value not found, delete on an
//! empty list) never return an error and never mutate the list; they are
//! reported purely through step content, and the caller inspects the final
//! step's kind. Only programming defects panic.

pub mod delete;
pub mod insert;
pub mod step;

pub use step::{Edge, EdgeDir, Step, StepKind, StepTrace};

use crate::list::DoublyLinkedList;

/// An operation request, as it arrives from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InsertAtBeginning { value: i64 },
    InsertAtEnd { value: i64 },
    InsertAtPosition { value: i64, position: usize },
    Delete { value: i64 },
}

impl Operation {
    fn describe(&self) -> (String, String) {
        match *self {
            Operation::InsertAtBeginning { value } => (
                format!("Insert {} at beginning", value),
                format!("Inserting {} before the current head", value),
            ),
            Operation::InsertAtEnd { value } => (
                format!("Insert {} at end", value),
                format!("Inserting {} after the current tail", value),
            ),
            Operation::InsertAtPosition { value, position } => (
                format!("Insert {} at position {}", value, position),
                format!("Inserting {} so that it occupies position {}", value, position),
            ),
            Operation::Delete { value } => (
                format!("Delete {}", value),
                format!("Searching for the first node with value {}", value),
            ),
        }
    }
}

/// Run an operation against the list, mutating it, and return the trace.
///
/// The trace always begins with a [`StepKind::Start`] step describing the
/// request; the per-branch step sequence follows. Because `Start` is emitted
/// here rather than inside the branches, delegated cases (`position == 0`,
/// `position == len`) produce exactly the delegate's body sequence.
pub fn run_operation(list: &mut DoublyLinkedList, op: Operation) -> StepTrace {
    let mut trace = StepTrace::new();
    let (message, description) = op.describe();
    trace.push(Step::new(StepKind::Start, message, description));

    match op {
        Operation::InsertAtBeginning { value } => {
            insert::insert_at_beginning(list, value, &mut trace)
        }
        Operation::InsertAtEnd { value } => insert::insert_at_end(list, value, &mut trace),
        Operation::InsertAtPosition { value, position } => {
            insert::insert_at_position(list, value, position, &mut trace)
        }
        Operation::Delete { value } => delete::delete(list, value, &mut trace),
    }

    trace
}

/// Run an operation against a structural snapshot of the list, leaving the
/// original untouched.
///
/// Returns the mutated snapshot together with its trace. This is the safe
/// way to generate a trace for inspection before committing: the arena owns
/// every node, so the clone shares nothing with the live list.
pub fn preview_operation(list: &DoublyLinkedList, op: Operation) -> (DoublyLinkedList, StepTrace) {
    let mut snapshot = list.clone();
    let trace = run_operation(&mut snapshot, op);
    (snapshot, trace)
}
