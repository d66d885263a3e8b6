//! The three insertion variants
//!
//! Each function appends its steps in the exact order the pointer writes are
//! performed. `insert_at_position` validates the position first and reports
//! an out-of-range request with a single error step, leaving the list
//! untouched.

use crate::list::{DoublyLinkedList, NodeId};

use super::step::{Edge, Step, StepKind, StepTrace};

/// Insert `value` before the current head. O(1).
pub fn insert_at_beginning(list: &mut DoublyLinkedList, value: i64, trace: &mut StepTrace) {
    let id = create_node(list, value, trace);

    match list.head() {
        None => {
            list.set_head(Some(id));
            list.set_tail(Some(id));
            trace.push(
                Step::new(
                    StepKind::SetHeadTail,
                    "List was empty: head and tail are the new node",
                    "The list had no nodes, so head and tail both point at the new node",
                )
                .focus(id)
                .nodes([id]),
            );
        }
        Some(old_head) => {
            list.node_mut(id).next = Some(old_head);
            trace.push(
                Step::new(
                    StepKind::LinkNext,
                    "New node's next points at the old head",
                    format!(
                        "Set the new node's next pointer to the old head ({})",
                        list.node(old_head).value
                    ),
                )
                .focus(id)
                .nodes([id, old_head])
                .edges([Edge::next(id)]),
            );

            list.node_mut(old_head).prev = Some(id);
            trace.push(
                Step::new(
                    StepKind::LinkPrev,
                    "Old head's prev points back at the new node",
                    "Set the old head's prev pointer to the new node, closing the back link",
                )
                .focus(old_head)
                .nodes([id, old_head])
                .edges([Edge::prev(old_head)]),
            );

            list.set_head(Some(id));
            trace.push(
                Step::new(
                    StepKind::UpdateHead,
                    "Head moved to the new node",
                    "The new node is now the first element of the list",
                )
                .focus(id)
                .nodes([id]),
            );
        }
    }

    list.inc_len();
    complete(list, trace);
}

/// Insert `value` after the current tail. O(1).
pub fn insert_at_end(list: &mut DoublyLinkedList, value: i64, trace: &mut StepTrace) {
    let id = create_node(list, value, trace);

    match list.tail() {
        None => {
            list.set_head(Some(id));
            list.set_tail(Some(id));
            trace.push(
                Step::new(
                    StepKind::SetHeadTail,
                    "List was empty: head and tail are the new node",
                    "The list had no nodes, so head and tail both point at the new node",
                )
                .focus(id)
                .nodes([id]),
            );
        }
        Some(old_tail) => {
            list.node_mut(id).prev = Some(old_tail);
            trace.push(
                Step::new(
                    StepKind::LinkPrevTail,
                    "New node's prev points at the old tail",
                    format!(
                        "Set the new node's prev pointer to the old tail ({})",
                        list.node(old_tail).value
                    ),
                )
                .focus(id)
                .nodes([id, old_tail])
                .edges([Edge::prev(id)]),
            );

            list.node_mut(old_tail).next = Some(id);
            trace.push(
                Step::new(
                    StepKind::LinkNextTail,
                    "Old tail's next points at the new node",
                    "Set the old tail's next pointer to the new node, extending the chain",
                )
                .focus(old_tail)
                .nodes([id, old_tail])
                .edges([Edge::next(old_tail)]),
            );

            list.set_tail(Some(id));
            trace.push(
                Step::new(
                    StepKind::UpdateTail,
                    "Tail moved to the new node",
                    "The new node is now the last element of the list",
                )
                .focus(id)
                .nodes([id]),
            );
        }
    }

    list.inc_len();
    complete(list, trace);
}

/// Insert `value` so it occupies `position`. O(n) due to the traversal.
///
/// `position` must be in `0..=len`; out of range appends an error step and
/// returns without mutating. The boundary positions delegate to the O(1)
/// variants, so their traces carry the delegate's step sequence.
pub fn insert_at_position(
    list: &mut DoublyLinkedList,
    value: i64,
    position: usize,
    trace: &mut StepTrace,
) {
    if position > list.len() {
        trace.push(Step::new(
            StepKind::Error,
            format!("Position {} is out of range", position),
            format!(
                "Valid positions are 0 through {}; the list was not changed",
                list.len()
            ),
        ));
        return;
    }
    if position == 0 {
        return insert_at_beginning(list, value, trace);
    }
    if position == list.len() {
        return insert_at_end(list, value, trace);
    }

    let id = create_node(list, value, trace);

    // 0 < position < len, so the list has at least two nodes.
    let mut current = match list.head() {
        Some(head) => head,
        None => unreachable!("interior position on an empty list"),
    };
    for index in 0..position {
        trace.push(
            Step::new(
                StepKind::Traverse,
                format!("At position {}, moving to next", index),
                format!(
                    "Position {} holds {}; the target position is further along",
                    index,
                    list.node(current).value
                ),
            )
            .focus(current)
            .nodes([current])
            .edges([Edge::next(current)]),
        );
        current = match list.node(current).next {
            Some(next) => next,
            None => unreachable!("chain ended before position {}", position),
        };
    }
    trace.push(
        Step::new(
            StepKind::FoundPosition,
            format!("Reached position {}", position),
            format!(
                "Node {} currently occupies position {}; the new node goes in front of it",
                list.node(current).value,
                position
            ),
        )
        .focus(current)
        .nodes([current]),
    );

    let prev = match list.node(current).prev {
        Some(prev) => prev,
        None => unreachable!("interior node without a predecessor"),
    };

    list.node_mut(id).next = Some(current);
    list.node_mut(id).prev = Some(prev);
    trace.push(
        Step::new(
            StepKind::LinkNewNode,
            "New node linked between the neighbors",
            "Set the new node's next to the occupant and its prev to the occupant's predecessor",
        )
        .focus(id)
        .nodes([prev, id, current])
        .edges([Edge::next(id), Edge::prev(id)]),
    );

    list.node_mut(prev).next = Some(id);
    list.node_mut(current).prev = Some(id);
    trace.push(
        Step::new(
            StepKind::UpdateLinks,
            "Neighbors rewired around the new node",
            "The predecessor's next and the occupant's prev both point at the new node now",
        )
        .focus(id)
        .nodes([prev, current])
        .edges([Edge::next(prev), Edge::prev(current)]),
    );

    list.inc_len();
    complete(list, trace);
}

fn create_node(list: &mut DoublyLinkedList, value: i64, trace: &mut StepTrace) -> NodeId {
    let id = list.alloc(value);
    trace.push(
        Step::new(
            StepKind::CreateNode,
            format!("Created node {}", value),
            format!(
                "Allocated a new node holding {}; both of its links start out null",
                value
            ),
        )
        .focus(id)
        .nodes([id]),
    );
    id
}

fn complete(list: &DoublyLinkedList, trace: &mut StepTrace) {
    trace.push(Step::new(
        StepKind::Complete,
        format!("Insertion complete, size is now {}", list.len()),
        "All pointers are settled and the list invariants hold again",
    ));
}
