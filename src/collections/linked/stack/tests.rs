#![cfg(test)]

use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyContainer;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(stack: &LinkedStack<T>) -> Vec<T> {
    let mut seen = Vec::new();
    stack.for_each(|v| seen.push(v.clone()));
    seen
}

#[test]
fn test_lifo_order() {
    let mut stack = LinkedStack::new();
    for i in 0..10 {
        stack.push(i);
        assert_eq!(*stack.top(), i);
    }
    assert_eq!(stack.len(), 10);

    for i in (0..10).rev() {
        assert_eq!(stack.pop(), i);
    }
    assert!(stack.is_empty());
}

#[test]
fn test_top_mut() {
    let mut stack: LinkedStack<_> = (1..=3).collect();
    *stack.top_mut() *= 10;
    assert_eq!(contents(&stack), [30, 2, 1]);
}

#[test]
fn test_empty_errors() {
    let mut stack = LinkedStack::<u8>::new();
    assert_eq!(stack.try_pop(), Err(EmptyContainer));
    assert_eq!(stack.try_top(), Err(EmptyContainer));
    assert_eq!(stack.try_top_mut(), Err(EmptyContainer));
    assert_panics!({
        stack.pop();
    });
    assert_panics!({
        LinkedStack::<u8>::new().top();
    });
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut stack: LinkedStack<_> = iter::repeat_with(|| counter.clone()).take(4).collect();

    drop(stack.pop());
    assert_eq!(counter.dropped(), 1);

    stack.clear();
    assert_eq!(counter.dropped(), 4);
    assert_eq!(stack.len(), 0);

    stack.push(counter.clone());
    drop(stack);
    assert_eq!(counter.dropped(), 5);

    let long: LinkedStack<_> = (0..200_000).collect();
    drop(long);
}

#[test]
fn test_clone_and_take() {
    let original: LinkedStack<_> = (1..=4).collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(contents(&copy), [4, 3, 2, 1], "Copying should preserve the order.");

    copy.pop();
    assert_ne!(copy, original);
    assert_eq!(original.len(), 4, "Mutating a copy shouldn't affect the original.");

    let mut source = original;
    let moved = mem::take(&mut source);
    assert_eq!(*moved.top(), 4);
    assert!(source.is_empty());
}

#[test]
fn test_formatting() {
    let stack: LinkedStack<_> = (1..=3).collect();
    assert_eq!(format!("{stack}"), "3 | 2 | 1");
    assert_eq!(format!("{stack:?}"), "LinkedStack { contents: [3, 2, 1], len: 3 }");
}
