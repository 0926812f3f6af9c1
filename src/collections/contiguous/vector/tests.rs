#![cfg(test)]

use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyContainer, IndexOrEmpty, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_geometric_growth() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();

    for i in 0..15 {
        vec.push_back(i);
        if caps.try_back() != Ok(&vec.cap()) {
            caps.push_back(vec.cap());
        }
    }

    assert_eq!(&*caps, &[1, 3, 7, 15], "Capacity should grow to 2 * cap + 1 when full.");
    assert_eq!(&*vec, &(0..15).collect::<Vector<_>>()[..]);
}

#[test]
fn test_pop_back_keeps_capacity() {
    let mut vec: Vector<_> = (0..10).collect();
    let cap = vec.cap();

    for i in (0..10).rev() {
        assert_eq!(vec.pop_back(), i);
    }

    assert_eq!(vec.try_pop_back(), Err(EmptyContainer));
    assert_eq!(vec.cap(), cap, "Popping should never shrink the allocation.");
    assert_panics!({
        Vector::<u8>::new().pop_back();
    });
}

#[test]
fn test_front_and_back() {
    let mut vec = Vector::new();
    assert_eq!(vec.try_front(), Err(EmptyContainer));
    assert_eq!(vec.try_back(), Err(EmptyContainer));

    vec.extend([3, 4, 5]);
    assert_eq!(*vec.front(), 3);
    assert_eq!(*vec.back(), 5);

    vec[0] = 30;
    assert_eq!(*vec.front(), 30, "Writes through indexing should be visible.");
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 10);
    vec.insert(3, 20);
    vec.insert(vec.len(), 30);
    assert_eq!(&*vec, &[10, 0, 1, 20, 2, 3, 4, 30]);

    assert_eq!(
        vec.try_insert(9, 40),
        Err(IndexOutOfBounds { index: 9, len: 8 }),
        "Inserting more than one past the end should fail."
    );

    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(2), 20);
    assert_eq!(vec.remove(vec.len() - 1), 30);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    assert_eq!(vec.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(vec.len(), 5, "A failed removal should leave the Vector unchanged.");
    assert_panics!({
        let mut vec: Vector<_> = (0..2).collect();
        vec.remove(2);
    });
}

#[test]
fn test_errors_combine() {
    fn front_plus_removed(vec: &mut Vector<u8>, index: usize) -> Result<u8, IndexOrEmpty> {
        let front = *vec.try_front()?;
        Ok(front + vec.try_remove(index)?)
    }

    let mut vec = Vector::new();
    assert!(front_plus_removed(&mut vec, 0).is_err_and(|e| e.is_empty_container()));

    vec.push_back(1);
    vec.push_back(2);
    assert_eq!(
        front_plus_removed(&mut vec, 4),
        Err(IndexOrEmpty::IndexOutOfBounds(IndexOutOfBounds { index: 4, len: 2 }))
    );
    assert_eq!(front_plus_removed(&mut vec, 1), Ok(3));
    assert_eq!(
        IndexOrEmpty::from(EmptyContainer).to_string(),
        EmptyContainer.to_string(),
        "The combined error should display the message of the error it holds."
    );
}

#[test]
fn test_insert_grows_when_full() {
    let mut vec = Vector::with_cap(2);
    vec.push_back('a');
    vec.push_back('c');
    vec.insert(1, 'b');

    assert_eq!(vec.cap(), 5);
    assert_eq!(&*vec, &['a', 'b', 'c']);
}

#[test]
fn test_reserve() {
    let mut vec: Vector<_> = (0..6).collect();

    vec.reserve(3);
    assert_eq!(vec.cap(), 6, "Reserving less than the length should be a no-op.");

    vec.reserve(100);
    assert_eq!(vec.cap(), 100);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5], "Reallocation should preserve indices.");

    vec.reserve(6);
    assert_eq!(vec.cap(), 6);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = vec.cap();

    vec.clear();
    assert_eq!(counter.dropped(), 10, "Clearing should drop every element.");
    assert_eq!(vec.cap(), cap);
    assert!(vec.is_empty());

    vec.extend(iter::repeat_with(|| counter.clone()).take(5));
    drop(vec.remove(2));
    assert_eq!(counter.dropped(), 11);

    drop(vec);
    assert_eq!(counter.dropped(), 15, "Dropping should release the remaining elements once.");
}

#[test]
fn test_clone_is_deep() {
    let original: Vector<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let mut copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.cap(), original.cap(), "A copy should keep the same capacity.");

    copy[0].push('!');
    copy.push_back(String::from("d"));
    assert_eq!(&*original, &["a", "b", "c"], "Mutating a copy shouldn't affect the original.");
}

#[test]
fn test_take_leaves_empty() {
    let mut a: Vector<_> = (0..4).collect();
    let b = mem::take(&mut a);

    assert_eq!(&*b, &[0, 1, 2, 3]);
    assert_eq!(a.len(), 0);
    assert_eq!(a.cap(), 0);

    a.push_back(9);
    assert_eq!(&*a, &[9], "A moved-from Vector should be reusable.");
}

#[test]
fn test_formatting() {
    let vec: Vector<_> = (1..=3).collect();
    assert_eq!(format!("{vec}"), "[1, 2, 3]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2, 3], len: 3, cap: 3 }");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push_back(());
    }
    vec.insert(50, ());
    assert_eq!(vec.len(), 101);
    assert_eq!(vec.remove(0), ());
}
