//! Delete by value
//!
//! Searches from the head for the first node holding the target value and
//! removes it, dispatching on where the match sits: only node, head, tail,
//! or middle. Each case performs different pointer writes and is recorded
//! with its own step kind. Duplicates after the first match are untouched.

use crate::list::DoublyLinkedList;

use super::step::{Edge, Step, StepKind, StepTrace};

/// Delete the first node whose value equals `value`. O(n).
///
/// An empty list or an absent value is reported through the trace and leaves
/// the list untouched. The removed node is tombstoned, not dropped, so the
/// ids recorded in this trace keep resolving.
pub fn delete(list: &mut DoublyLinkedList, value: i64, trace: &mut StepTrace) {
    if list.is_empty() {
        trace.push(Step::new(
            StepKind::EmptyList,
            "The list is empty",
            "There are no nodes to delete",
        ));
        return;
    }

    let mut cursor = list.head();
    let mut target = None;
    while let Some(id) = cursor {
        let node = list.node(id);
        if node.value == value {
            trace.push(
                Step::new(
                    StepKind::Found,
                    format!("Found {}", value),
                    format!("This node holds {}; it will be unlinked", value),
                )
                .focus(id)
                .nodes([id]),
            );
            target = Some(id);
            break;
        }
        trace.push(
            Step::new(
                StepKind::Search,
                format!("Checked {}, no match", node.value),
                format!("This node holds {}, not {}; moving to next", node.value, value),
            )
            .focus(id)
            .nodes([id])
            .edges([Edge::next(id)]),
        );
        cursor = node.next;
    }

    let Some(id) = target else {
        trace.push(Step::new(
            StepKind::NotFound,
            format!("{} is not in the list", value),
            "The traversal reached the end without a match; the list was not changed",
        ));
        return;
    };

    let (prev, next) = {
        let node = list.node(id);
        (node.prev, node.next)
    };

    match (prev, next) {
        (None, None) => {
            list.set_head(None);
            list.set_tail(None);
            trace.push(
                Step::new(
                    StepKind::DeleteOnlyNode,
                    "Deleted the only node",
                    "The match was the only node, so head and tail are both null again",
                )
                .focus(id),
            );
        }
        (None, Some(next_id)) => {
            list.set_head(Some(next_id));
            list.node_mut(next_id).prev = None;
            trace.push(
                Step::new(
                    StepKind::DeleteHead,
                    "Deleted the head",
                    format!(
                        "Head advanced to {} and its prev pointer was cleared",
                        list.node(next_id).value
                    ),
                )
                .focus(id)
                .nodes([id, next_id])
                .edges([Edge::prev(next_id)]),
            );
        }
        (Some(prev_id), None) => {
            list.set_tail(Some(prev_id));
            list.node_mut(prev_id).next = None;
            trace.push(
                Step::new(
                    StepKind::DeleteTail,
                    "Deleted the tail",
                    format!(
                        "Tail retreated to {} and its next pointer was cleared",
                        list.node(prev_id).value
                    ),
                )
                .focus(id)
                .nodes([id, prev_id])
                .edges([Edge::next(prev_id)]),
            );
        }
        (Some(prev_id), Some(next_id)) => {
            list.node_mut(prev_id).next = Some(next_id);
            list.node_mut(next_id).prev = Some(prev_id);
            trace.push(
                Step::new(
                    StepKind::DeleteMiddle,
                    "Deleted a middle node",
                    format!(
                        "Spliced {} and {} together around the removed node",
                        list.node(prev_id).value,
                        list.node(next_id).value
                    ),
                )
                .focus(id)
                .nodes([prev_id, next_id])
                .edges([Edge::next(prev_id), Edge::prev(next_id)]),
            );
        }
    }

    list.tombstone(id);
    list.dec_len();
    trace.push(Step::new(
        StepKind::Complete,
        format!("Deletion complete, size is now {}", list.len()),
        "All pointers are settled and the list invariants hold again",
    ));
}
