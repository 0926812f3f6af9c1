use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ptr;

use crate::collections::buffer::Buffer;
use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 10;
const MIN_CAP: usize = 1;
const GROWTH_FACTOR: usize = 2;
const SHRINK_THRESHOLD: usize = 4;

/// A last-in, first-out stack stored in a contiguous buffer.
///
/// The buffer doubles when full and halves when, after a pop, the stack is non-empty but uses
/// less than a quarter of its capacity. Both [`push`](ArrayStack::push) and
/// [`pop`](ArrayStack::pop) are amortized `O(1)`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `top` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* Unless the push or pop triggers a reallocation.
pub struct ArrayStack<T> {
    pub(crate) buf: Buffer<T>,
    /// The index one past the top element, which is also the number of elements.
    pub(crate) top: usize,
}

impl<T> ArrayStack<T> {
    /// Creates a new, empty ArrayStack with a capacity of 10.
    pub fn new() -> ArrayStack<T> {
        ArrayStack::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArrayStack with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            buf: Buffer::with_cap(cap),
            top: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Pushes `value` onto the top of the stack, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the stack would have a size that exceeds [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        if self.top >= self.cap() {
            let new_cap = cmp::max(
                self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
                MIN_CAP,
            );
            self.resize(new_cap);
        }

        // SAFETY: top < cap after the resize above.
        unsafe { self.buf.write(self.top, value); }
        self.top += 1;
    }

    /// Removes and returns the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes and returns the top element of the stack, or returns an [`Err`] if the stack is
    /// empty rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::ArrayStack;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut stack = ArrayStack::new();
    /// stack.push('a');
    /// stack.push('b');
    /// assert_eq!(stack.try_pop(), Ok('b'));
    /// assert_eq!(stack.try_pop(), Ok('a'));
    /// assert_eq!(stack.try_pop(), Err(EmptyContainer));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        if self.top == 0 {
            return Err(EmptyContainer);
        }

        self.top -= 1;
        // SAFETY: The old top slot is initialized and now lies outside of the stack.
        let value = unsafe { self.buf.read(self.top) };

        if self.top > 0 && self.top < self.cap() / SHRINK_THRESHOLD {
            self.resize(self.cap() / GROWTH_FACTOR);
        }

        Ok(value)
    }

    /// Returns a reference to the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a reference to the top element of the stack, or an [`Err`] if the stack is empty.
    pub fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.as_slice().last().ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut T {
        self.try_top_mut().throw()
    }

    /// Returns a mutable reference to the top element of the stack, or an [`Err`] if the stack is
    /// empty.
    pub fn try_top_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        // SAFETY: The first top values are initialized.
        unsafe { self.buf.as_mut_slice(self.top) }.last_mut().ok_or(EmptyContainer)
    }

    /// Drops every element, resetting the stack to empty without reallocating the buffer.
    pub fn clear(&mut self) {
        let len = self.top;
        self.top = 0;

        // SAFETY: The first len values were initialized and are no longer reachable through self.
        unsafe { ptr::drop_in_place(self.buf.as_mut_slice(len)); }
    }

    /// Visits every element from the top of the stack to the bottom.
    pub fn for_each<F: FnMut(&T)>(&self, visit: F) {
        self.as_slice().iter().rev().for_each(visit);
    }

    /// The elements from the bottom of the stack to the top.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: The first top values are initialized and top <= cap.
        unsafe { self.buf.as_slice(self.top) }
    }

    /// Moves the buffer to a new allocation of exactly `new_cap` slots.
    pub(crate) fn resize(&mut self, new_cap: usize) {
        log::trace!("resizing ArrayStack from {} to {} slots", self.cap(), new_cap);
        self.buf.realloc(new_cap);
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = ArrayStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        let mut stack = ArrayStack::with_cap(self.cap());

        for value in self.as_slice() {
            // SAFETY: stack has the same capacity as self, so it can hold every value.
            unsafe { stack.buf.write(stack.top, value.clone()); }
            stack.top += 1;
        }

        stack
    }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayStack<T> {}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field(
                "contents",
                &debug_with(|f| f.debug_list().entries(self.as_slice().iter().rev()).finish()),
            )
            .field("len", &self.top)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.as_slice().iter().rev().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
