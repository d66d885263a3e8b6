// Mutation engine tests: exact step sequences per branch, failure
// idempotence, and the pointer wiring each deletion case leaves behind

use listty::engine::{preview_operation, run_operation, Operation, StepKind};
use listty::list::DoublyLinkedList;

fn seeded(values: &[i64]) -> DoublyLinkedList {
    DoublyLinkedList::from_values(values)
}

#[test]
fn insert_at_beginning_into_empty_list() {
    let mut list = DoublyLinkedList::new();
    let trace = run_operation(&mut list, Operation::InsertAtBeginning { value: 10 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::CreateNode,
            StepKind::SetHeadTail,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![10]);
    assert_eq!(list.head(), list.tail());
    assert!(list.validate().is_ok());
}

#[test]
fn insert_at_beginning_links_before_old_head() {
    let mut list = seeded(&[20, 30, 40]);
    let old_head = list.head().unwrap();

    let trace = run_operation(&mut list, Operation::InsertAtBeginning { value: 10 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::CreateNode,
            StepKind::LinkNext,
            StepKind::LinkPrev,
            StepKind::UpdateHead,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![10, 20, 30, 40]);
    assert_eq!(list.len(), 4);

    let new_head = list.head().unwrap();
    assert_eq!(list.get(new_head).unwrap().value, 10);
    // The old head's prev must point back at the new node
    assert_eq!(list.get(old_head).unwrap().prev, Some(new_head));
    assert!(list.validate().is_ok());
}

#[test]
fn insert_at_end_links_after_old_tail() {
    let mut list = seeded(&[20, 30]);
    let old_tail = list.tail().unwrap();

    let trace = run_operation(&mut list, Operation::InsertAtEnd { value: 40 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::CreateNode,
            StepKind::LinkPrevTail,
            StepKind::LinkNextTail,
            StepKind::UpdateTail,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![20, 30, 40]);

    let new_tail = list.tail().unwrap();
    assert_eq!(list.get(new_tail).unwrap().value, 40);
    assert_eq!(list.get(old_tail).unwrap().next, Some(new_tail));
    assert!(list.validate().is_ok());
}

#[test]
fn building_a_list_via_repeated_insert_at_end() {
    let mut list = DoublyLinkedList::new();
    for value in [20, 30, 40] {
        run_operation(&mut list, Operation::InsertAtEnd { value });
    }
    assert_eq!(list.values(), vec![20, 30, 40]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(list.head().unwrap()).unwrap().value, 20);
    assert_eq!(list.get(list.tail().unwrap()).unwrap().value, 40);
}

#[test]
fn insert_at_position_traverses_then_splices() {
    let mut list = seeded(&[10, 20, 30, 40]);
    let trace = run_operation(
        &mut list,
        Operation::InsertAtPosition { value: 25, position: 2 },
    );

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::CreateNode,
            StepKind::Traverse,
            StepKind::Traverse,
            StepKind::FoundPosition,
            StepKind::LinkNewNode,
            StepKind::UpdateLinks,
            StepKind::Complete,
        ]
    );

    // One traverse step per hop over positions 0 and 1
    let traversals = trace
        .iter()
        .filter(|s| s.kind == StepKind::Traverse)
        .count();
    assert_eq!(traversals, 2);

    assert_eq!(list.values(), vec![10, 20, 25, 30, 40]);
    assert!(list.validate().is_ok());
}

#[test]
fn insert_at_position_zero_emits_the_beginning_sequence() {
    let mut direct = seeded(&[1, 2, 3]);
    let direct_trace = run_operation(&mut direct, Operation::InsertAtBeginning { value: 0 });

    let mut positional = seeded(&[1, 2, 3]);
    let positional_trace = run_operation(
        &mut positional,
        Operation::InsertAtPosition { value: 0, position: 0 },
    );

    assert_eq!(positional_trace.kinds(), direct_trace.kinds());
    assert_eq!(positional.values(), vec![0, 1, 2, 3]);
}

#[test]
fn insert_at_position_len_emits_the_end_sequence() {
    let mut direct = seeded(&[1, 2, 3]);
    let direct_trace = run_operation(&mut direct, Operation::InsertAtEnd { value: 4 });

    let mut positional = seeded(&[1, 2, 3]);
    let positional_trace = run_operation(
        &mut positional,
        Operation::InsertAtPosition { value: 4, position: 3 },
    );

    assert_eq!(positional_trace.kinds(), direct_trace.kinds());
    assert_eq!(positional.values(), vec![1, 2, 3, 4]);
}

#[test]
fn insert_at_invalid_position_reports_error_and_leaves_list_alone() {
    let mut list = seeded(&[1, 2, 3, 4]);
    let before = list.values();

    let trace = run_operation(
        &mut list,
        Operation::InsertAtPosition { value: 5, position: 10 },
    );

    assert_eq!(trace.kinds(), vec![StepKind::Start, StepKind::Error]);
    assert!(trace.last().unwrap().kind.is_failure());
    assert_eq!(list.values(), before);
    assert_eq!(list.len(), 4);
    assert!(list.validate().is_ok());
}

#[test]
fn delete_head_advances_head() {
    let mut list = seeded(&[10, 25, 30, 40]);
    let trace = run_operation(&mut list, Operation::Delete { value: 10 });

    // Head matches immediately: no search steps
    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::Found,
            StepKind::DeleteHead,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![25, 30, 40]);

    let head = list.get(list.head().unwrap()).unwrap();
    assert_eq!(head.value, 25);
    assert!(head.prev.is_none());
    assert!(list.validate().is_ok());
}

#[test]
fn delete_tail_retreats_tail() {
    let mut list = seeded(&[10, 20, 30]);
    let trace = run_operation(&mut list, Operation::Delete { value: 30 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::Search,
            StepKind::Search,
            StepKind::Found,
            StepKind::DeleteTail,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![10, 20]);

    let tail = list.get(list.tail().unwrap()).unwrap();
    assert_eq!(tail.value, 20);
    assert!(tail.next.is_none());
    assert!(list.validate().is_ok());
}

#[test]
fn delete_middle_splices_the_neighbors_together() {
    let mut list = seeded(&[10, 25, 30, 40]);
    let trace = run_operation(&mut list, Operation::Delete { value: 30 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::Search,
            StepKind::Search,
            StepKind::Found,
            StepKind::DeleteMiddle,
            StepKind::Complete,
        ]
    );
    assert_eq!(list.values(), vec![10, 25, 40]);

    // The neighbors must reference each other directly now
    let prev = list.iter().find(|n| n.value == 25).unwrap();
    let next = list.iter().find(|n| n.value == 40).unwrap();
    assert_eq!(prev.next, Some(next.id));
    assert_eq!(next.prev, Some(prev.id));
    assert!(list.validate().is_ok());
}

#[test]
fn delete_only_node_clears_head_and_tail() {
    let mut list = seeded(&[42]);
    let trace = run_operation(&mut list, Operation::Delete { value: 42 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::Found,
            StepKind::DeleteOnlyNode,
            StepKind::Complete,
        ]
    );
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert!(list.validate().is_ok());
}

#[test]
fn delete_absent_value_reports_not_found() {
    let mut list = seeded(&[1, 2, 3]);
    let before = list.values();

    let trace = run_operation(&mut list, Operation::Delete { value: 999 });

    assert_eq!(
        trace.kinds(),
        vec![
            StepKind::Start,
            StepKind::Search,
            StepKind::Search,
            StepKind::Search,
            StepKind::NotFound,
        ]
    );
    assert_eq!(list.values(), before);
    assert!(list.validate().is_ok());
}

#[test]
fn delete_on_empty_list_reports_empty() {
    let mut list = DoublyLinkedList::new();
    let trace = run_operation(&mut list, Operation::Delete { value: 1 });

    assert_eq!(trace.kinds(), vec![StepKind::Start, StepKind::EmptyList]);
    assert!(list.is_empty());
}

#[test]
fn delete_removes_only_the_first_duplicate() {
    let mut list = seeded(&[5, 9, 5, 5]);
    run_operation(&mut list, Operation::Delete { value: 5 });

    assert_eq!(list.values(), vec![9, 5, 5]);
    assert_eq!(list.len(), 3);
    assert!(list.validate().is_ok());
}

#[test]
fn step_ids_still_resolve_after_deletion() {
    let mut list = seeded(&[10, 20, 30]);
    let trace = run_operation(&mut list, Operation::Delete { value: 20 });

    for step in trace.iter() {
        for id in step
            .focus
            .iter()
            .chain(step.highlighted_nodes.iter())
            .copied()
        {
            assert!(
                list.get(id).is_some(),
                "step {:?} references {} which no longer resolves",
                step.kind,
                id
            );
        }
    }

    // The removed node is a tombstone, invisible to traversal
    let deleted = trace
        .iter()
        .find(|s| s.kind == StepKind::Found)
        .and_then(|s| s.focus)
        .unwrap();
    assert!(list.get(deleted).unwrap().is_tombstone());
    assert!(!list.values().contains(&20));
}

#[test]
fn preview_leaves_the_source_list_untouched() {
    let list = seeded(&[10, 20, 30]);

    let (snapshot, trace) = preview_operation(&list, Operation::Delete { value: 20 });

    assert_eq!(list.values(), vec![10, 20, 30]);
    assert_eq!(snapshot.values(), vec![10, 30]);
    assert_eq!(trace.last().unwrap().kind, StepKind::Complete);
    assert!(list.validate().is_ok());
    assert!(snapshot.validate().is_ok());
}

#[test]
fn every_trace_starts_with_a_start_step() {
    let ops = [
        Operation::InsertAtBeginning { value: 1 },
        Operation::InsertAtEnd { value: 2 },
        Operation::InsertAtPosition { value: 3, position: 0 },
        Operation::Delete { value: 1 },
    ];
    for op in ops {
        let mut list = seeded(&[1, 2]);
        let trace = run_operation(&mut list, op);
        assert_eq!(trace.get(0).unwrap().kind, StepKind::Start, "for {:?}", op);
    }
}
