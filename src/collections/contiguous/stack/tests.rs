#![cfg(test)]

use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyContainer;
use crate::util::panic::assert_panics;

#[test]
fn test_lifo_order() {
    let mut stack = ArrayStack::new();
    for i in 0..25 {
        stack.push(i);
    }

    assert_eq!(*stack.top(), 24);
    for i in (0..25).rev() {
        assert_eq!(stack.pop(), i, "Pops should come out in reverse push order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_empty_stack_errors() {
    let mut stack = ArrayStack::<u8>::new();

    assert_eq!(stack.try_pop(), Err(EmptyContainer));
    assert_eq!(stack.try_top(), Err(EmptyContainer));
    assert_eq!(stack.try_top_mut(), Err(EmptyContainer));
    assert_eq!(stack.len(), 0, "A failed pop should leave the stack unchanged.");

    assert_panics!({
        ArrayStack::<u8>::new().pop();
    });
    assert_panics!({
        ArrayStack::<u8>::new().top();
    });
}

#[test]
fn test_growth_and_shrink() {
    let mut stack = ArrayStack::with_cap(4);
    for i in 0..100 {
        stack.push(i);
    }
    assert_eq!(stack.cap(), 128, "Capacity should double each time the stack is full.");

    for i in (10..100).rev() {
        assert_eq!(stack.pop(), i);
    }
    assert_eq!(stack.len(), 10);
    assert!(stack.cap() < 128, "Capacity should shrink after most elements are popped.");
    assert!(stack.cap() >= stack.len());

    for i in 10..20 {
        stack.push(i);
    }
    for i in (0..20).rev() {
        assert_eq!(stack.pop(), i, "Shrinking shouldn't corrupt any live elements.");
    }
}

#[test]
fn test_shrink_threshold() {
    let mut stack = ArrayStack::with_cap(16);
    stack.extend(0..5);

    stack.pop();
    assert_eq!(stack.cap(), 16, "4 elements aren't below a quarter of 16.");
    stack.pop();
    assert_eq!(stack.cap(), 8, "3 elements are below a quarter of 16.");

    stack.pop();
    stack.pop();
    assert_eq!(stack.cap(), 4);
    stack.pop();
    assert_eq!(stack.cap(), 4, "Popping the last element should never shrink.");
}

#[test]
fn test_zero_capacity_can_grow() {
    let mut stack = ArrayStack::with_cap(0);
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.cap(), 2);
    assert_eq!(*stack.top(), "b");
}

#[test]
fn test_clear_keeps_buffer() {
    let counter = CountedDrop::new();
    let mut stack: ArrayStack<_> = iter::repeat_with(|| counter.clone()).take(8).collect();
    let cap = stack.cap();

    stack.clear();
    assert_eq!(counter.dropped(), 8);
    assert_eq!(stack.cap(), cap, "Clearing shouldn't reallocate.");
    assert!(stack.is_empty());

    stack.push(counter.clone());
    stack.push(counter.clone());
    drop(stack);
    assert_eq!(counter.dropped(), 10);
}

#[test]
fn test_clone_and_take() {
    let original: ArrayStack<_> = (0..5).collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    *copy.top_mut() = 40;
    copy.push(5);
    assert_eq!(*original.top(), 4, "Mutating a copy shouldn't affect the original.");

    let mut source = original;
    let moved = mem::take(&mut source);
    assert_eq!(moved.len(), 5);
    assert_eq!(source.len(), 0);
    source.push(1);
    assert_eq!(*source.top(), 1);
}

#[test]
fn test_traversal_and_formatting() {
    let stack: ArrayStack<_> = (1..=3).collect();

    let mut seen = Vec::new();
    stack.for_each(|v| seen.push(*v));
    assert_eq!(seen, [3, 2, 1], "Traversal should go from top to bottom.");

    assert_eq!(format!("{stack}"), "3 | 2 | 1");
    assert_eq!(format!("{stack:?}"), "ArrayStack { contents: [3, 2, 1], len: 3, cap: 10 }");
}
