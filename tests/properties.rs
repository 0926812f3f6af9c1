use std::collections::{BTreeSet, VecDeque};

use basic_collections::collections::binary_tree::BinarySearchTree;
use basic_collections::collections::circ::ArrayQueue;
use basic_collections::collections::contiguous::{ArrayStack, Vector};
use basic_collections::collections::linked::{LinkedList, LinkedQueue, LinkedStack, SinglyLinkedList};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Take,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<i32>().prop_map(Op::Add),
            2 => Just(Op::Take),
        ],
        0..200,
    )
}

fn queue_contents(queue: &ArrayQueue<i32>) -> Vec<i32> {
    let mut seen = Vec::new();
    queue.for_each(|v| seen.push(*v));
    seen
}

proptest! {
    #[test]
    fn array_queue_matches_model(ops in ops(), cap in 0_usize..8) {
        let mut queue = ArrayQueue::with_cap(cap);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                },
                Op::Take => prop_assert_eq!(queue.try_dequeue().ok(), model.pop_front()),
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert!(queue.len() <= queue.cap());
        }

        prop_assert_eq!(queue_contents(&queue), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn linked_queue_matches_model(ops in ops()) {
        let mut queue = LinkedQueue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                },
                Op::Take => prop_assert_eq!(queue.try_dequeue().ok(), model.pop_front()),
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.try_front().ok(), model.front());
            prop_assert_eq!(queue.try_back().ok(), model.back());
        }
    }

    #[test]
    fn stacks_match_model(ops in ops()) {
        let mut array = ArrayStack::new();
        let mut linked = LinkedStack::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    array.push(v);
                    linked.push(v);
                    model.push(v);
                },
                Op::Take => {
                    let expected = model.pop();
                    prop_assert_eq!(array.try_pop().ok(), expected);
                    prop_assert_eq!(linked.try_pop().ok(), expected);
                },
            }
            prop_assert_eq!(array.len(), model.len());
            prop_assert_eq!(linked.len(), model.len());
            prop_assert_eq!(array.try_top().ok(), model.last());
        }
    }

    #[test]
    fn vector_matches_model(ops in ops()) {
        let mut vector = Vector::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    let index = v.unsigned_abs() as usize % (model.len() + 1);
                    vector.insert(index, v);
                    model.insert(index, v);
                },
                Op::Take => prop_assert_eq!(vector.try_pop_back().ok(), model.pop()),
            }
        }

        prop_assert_eq!(&*vector, model.as_slice());
        prop_assert_eq!(vector.clone(), vector);
    }

    #[test]
    fn lists_match_model(ops in ops()) {
        let mut doubly = LinkedList::new();
        let mut singly = SinglyLinkedList::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Add(v) if v % 2 == 0 => {
                    let index = v.unsigned_abs() as usize % (model.len() + 1);
                    doubly.insert_at(index, v);
                    singly.insert_at(index, v);
                    model.insert(index, v);
                },
                Op::Add(v) => {
                    doubly.push_front(v);
                    singly.push_front(v);
                    model.push_front(v);
                },
                Op::Take => {
                    let expected = model.pop_back();
                    prop_assert_eq!(doubly.try_pop_back().ok(), expected);
                    prop_assert_eq!(singly.try_pop_back().ok(), expected);
                },
            }
            prop_assert_eq!(doubly.len(), model.len());
            prop_assert_eq!(singly.len(), model.len());
        }

        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(doubly.get(i), expected);
            prop_assert_eq!(singly.get(i), expected);
        }
        prop_assert_eq!(doubly.clone(), doubly);
        prop_assert_eq!(singly.clone(), singly);
    }

    #[test]
    fn tree_matches_model(values in prop::collection::vec(-50_i32..50, 0..100), removals in prop::collection::vec(-50_i32..50, 0..50)) {
        let mut tree = BinarySearchTree::new();
        let mut model = BTreeSet::new();

        for v in values {
            prop_assert_eq!(tree.insert(v), model.insert(v));
        }
        for v in removals {
            let before = tree.len();
            let removed = tree.remove(&v);
            prop_assert_eq!(removed, model.remove(&v));
            prop_assert_eq!(tree.len(), before - usize::from(removed));
        }

        let mut in_order = Vec::new();
        tree.in_order_traversal(|v| in_order.push(*v));
        prop_assert_eq!(in_order, model.iter().copied().collect::<Vec<_>>());

        for v in -50..50 {
            prop_assert_eq!(tree.contains(&v), model.contains(&v));
        }
        prop_assert_eq!(tree.try_find_min().ok(), model.first());
        prop_assert_eq!(tree.try_find_max().ok(), model.last());
        prop_assert!(tree.height() <= tree.len());
    }
}
