#![cfg(test)]

use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.push_front(0);
    list.verify_double_links();
    assert_eq!(list.len(), 4);
    assert_eq!((*list.front(), *list.back()), (0, 3));

    assert_eq!(list.pop_back(), 3);
    assert_eq!(list.pop_front(), 0);
    list.verify_double_links();
    assert_eq!(list.pop_back(), 2);
    assert_eq!(list.pop_back(), 1);

    assert!(list.is_empty());
    assert!(matches!(list.state, ListState::Empty), "An empty list should hold no pointers.");
    assert_eq!(list.try_pop_front(), Err(EmptyContainer));
    assert_eq!(list.try_pop_back(), Err(EmptyContainer));
    assert_eq!(list.try_front(), Err(EmptyContainer));
    assert_eq!(list.try_back(), Err(EmptyContainer));
    assert_eq!(list.len(), 0);

    assert_panics!({
        LinkedList::<u8>::new().pop_back();
    });
}

#[test]
fn test_insert_at_every_position() {
    for index in 0..=6 {
        let mut list: LinkedList<_> = (0..6).collect();
        list.insert_at(index, 100);
        list.verify_double_links();

        assert_eq!(list.len(), 7);
        assert_eq!(
            *list.get(index),
            100,
            "Inserting at {index} should place the value at {index}."
        );

        let mut expected: Vec<_> = (0..6).collect();
        expected.insert(index, 100);
        let mut seen = Vec::new();
        list.for_each(|v| seen.push(*v));
        assert_eq!(seen, expected);
    }
}

#[test]
fn test_insert_at_clamps() {
    let mut list = LinkedList::new();
    list.insert_at(5, 'b');
    list.insert_at(0, 'a');
    list.insert_at(usize::MAX, 'c');
    list.verify_double_links();

    assert_eq!(list, ['a', 'b', 'c'].into_iter().collect());
}

#[test]
fn test_indexed_access() {
    let mut list: LinkedList<_> = (0..5).collect();

    for i in 0..5 {
        assert_eq!(*list.get(i), i);
    }
    *list.get_mut(3) = 30;
    assert_eq!(*list.get(3), 30);

    assert_eq!(list.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(list.try_get_mut(7).err(), Some(IndexOutOfBounds { index: 7, len: 5 }));
    assert_eq!(
        LinkedList::<u8>::new().try_get(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_panics!({
        let list: LinkedList<_> = (0..5).collect();
        list.get(5);
    });
}

#[test]
fn test_contains() {
    let list: LinkedList<_> = ["x", "y", "z"].into_iter().collect();
    assert!(list.contains(&"y"));
    assert!(!list.contains(&"w"));
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    list.clear();
    assert_eq!(counter.dropped(), 6);
    assert!(list.is_empty());

    list.extend(iter::repeat_with(|| counter.clone()).take(4));
    list.insert_at(2, counter.clone());
    drop(list);
    assert_eq!(counter.dropped(), 11, "Every node should be released exactly once.");
}

#[test]
fn test_long_list_drop() {
    let list: LinkedList<_> = (0..200_000).collect();
    drop(list);
}

#[test]
fn test_clone_and_take() {
    let original: LinkedList<_> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let mut copy = original.clone();
    copy.verify_double_links();
    assert_eq!(copy, original);

    copy.get_mut(1).push('!');
    copy.push_back(String::from("d"));
    assert_eq!(original.get(1), "b", "Mutating a copy shouldn't affect the original.");
    assert_eq!(original.len(), 3);

    let mut source = original;
    let moved = mem::take(&mut source);
    assert_eq!(moved.len(), 3);
    assert!(source.is_empty());
    source.push_back(String::from("e"));
    assert_eq!(source.front(), "e");
}

#[test]
fn test_formatting() {
    let list: LinkedList<_> = (1..=3).collect();
    assert_eq!(format!("{list}"), "1 -> 2 -> 3");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "");
}
