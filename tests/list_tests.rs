// Model-level tests: invariants, traversal, seeding

use listty::engine::{run_operation, Operation};
use listty::list::DoublyLinkedList;

#[test]
fn empty_list_is_consistent() {
    let list = DoublyLinkedList::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert!(list.values().is_empty());
    assert!(list.values_rev().is_empty());
    assert!(list.validate().is_ok());
}

#[test]
fn seeded_list_matches_seed_order() {
    let list = DoublyLinkedList::from_values(&[20, 30, 40]);
    assert_eq!(list.values(), vec![20, 30, 40]);
    assert_eq!(list.len(), 3);

    let head = list.get(list.head().unwrap()).unwrap();
    let tail = list.get(list.tail().unwrap()).unwrap();
    assert_eq!(head.value, 20);
    assert_eq!(tail.value, 40);
    assert!(head.prev.is_none());
    assert!(tail.next.is_none());

    assert!(list.validate().is_ok());
}

#[test]
fn reverse_traversal_mirrors_forward() {
    let list = DoublyLinkedList::from_values(&[1, 2, 3, 4, 5]);
    let mut forward = list.values();
    forward.reverse();
    assert_eq!(list.values_rev(), forward);
}

#[test]
fn single_node_list_head_equals_tail() {
    let list = DoublyLinkedList::from_values(&[7]);
    assert_eq!(list.head(), list.tail());
    assert_eq!(list.values(), vec![7]);
    assert_eq!(list.values_rev(), vec![7]);
    assert!(list.validate().is_ok());
}

#[test]
fn back_pointers_are_symmetric_after_seeding() {
    let list = DoublyLinkedList::from_values(&[10, 20, 30]);
    for node in list.iter() {
        if let Some(next_id) = node.next {
            let next = list.get(next_id).unwrap();
            assert_eq!(next.prev, Some(node.id), "back pointer of {} is wrong", next_id);
        }
        if let Some(prev_id) = node.prev {
            let prev = list.get(prev_id).unwrap();
            assert_eq!(prev.next, Some(node.id), "forward pointer of {} is wrong", prev_id);
        }
    }
}

#[test]
fn invariants_hold_across_a_mixed_workout() {
    let mut list = DoublyLinkedList::from_values(&[5, 10, 15]);
    let ops = [
        Operation::InsertAtBeginning { value: 1 },
        Operation::InsertAtEnd { value: 20 },
        Operation::InsertAtPosition { value: 12, position: 3 },
        Operation::Delete { value: 10 },
        Operation::Delete { value: 1 },
        Operation::InsertAtPosition { value: 7, position: 1 },
        Operation::Delete { value: 20 },
        Operation::Delete { value: 999 },
    ];

    for op in ops {
        run_operation(&mut list, op);
        assert!(
            list.validate().is_ok(),
            "invariants broken after {:?}: {:?}",
            op,
            list.validate()
        );
        let mut forward = list.values();
        forward.reverse();
        assert_eq!(list.values_rev(), forward, "reverse walk diverged after {:?}", op);
    }

    assert_eq!(list.values(), vec![5, 7, 12, 15]);
}

#[test]
fn clone_is_a_deep_snapshot() {
    let mut original = DoublyLinkedList::from_values(&[1, 2, 3]);
    let snapshot = original.clone();

    run_operation(&mut original, Operation::Delete { value: 2 });
    run_operation(&mut original, Operation::InsertAtEnd { value: 4 });

    assert_eq!(original.values(), vec![1, 3, 4]);
    assert_eq!(snapshot.values(), vec![1, 2, 3]);
    assert!(snapshot.validate().is_ok());
}
