#![cfg(test)]

use std::ptr::NonNull;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_realloc_preserves_prefix() {
    let mut buf = Buffer::<usize>::with_cap(4);
    for i in 0..4 {
        // SAFETY: i < cap.
        unsafe { buf.write(i, i * 10); }
    }

    buf.realloc(16);
    assert_eq!(buf.cap(), 16);
    // SAFETY: The first 4 slots were initialized and preserved by realloc.
    assert_eq!(
        unsafe { buf.as_slice(4) },
        &[0, 10, 20, 30],
        "Growing should keep every initialized slot."
    );

    buf.realloc(2);
    // SAFETY: The first 2 slots are still initialized.
    assert_eq!(unsafe { buf.as_slice(2) }, &[0, 10], "Shrinking should keep the prefix.");

    buf.realloc(0);
    assert_eq!(buf.cap(), 0);
    assert_eq!(buf.ptr, NonNull::dangling(), "A zero capacity Buffer should be dangling.");
}

#[test]
fn test_zst_never_allocates() {
    let mut buf = Buffer::<()>::with_cap(5);
    let old_ptr = buf.ptr;

    buf.realloc(300);
    assert_eq!(buf.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(buf.cap(), 300);
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        let _ = Buffer::<u64>::with_cap(isize::MAX as usize);
    });

    assert_panics!({
        let mut buf = Buffer::<u64>::with_cap(2);
        buf.realloc(isize::MAX as usize);
    });
}
