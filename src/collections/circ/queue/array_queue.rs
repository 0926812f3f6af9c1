use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::buffer::Buffer;
use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 10;
const MIN_CAP: usize = 1;
const GROWTH_FACTOR: usize = 2;
const SHRINK_THRESHOLD: usize = 4;

/// A first-in, first-out queue stored in a circular buffer.
///
/// The logical element `i` lives in the physical slot `(front + i) % cap`, while `rear` points at
/// the last occupied slot rather than one past it. Enqueuing into an empty queue writes to the
/// slot at `rear` without advancing it, so a queue with one element has `front == rear`.
///
/// The buffer doubles when full and halves when, after a dequeue, the queue is non-empty but uses
/// less than a quarter of its capacity. Every resize re-linearizes the ring, moving the front
/// element to slot 0.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)`*, `O(n)` |
/// | `front` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* Unless the operation triggers a resize.
pub struct ArrayQueue<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates a new, empty ArrayQueue with a capacity of 10.
    pub fn new() -> ArrayQueue<T> {
        ArrayQueue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArrayQueue with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayQueue<T> {
        ArrayQueue {
            buf: Buffer::with_cap(cap),
            front: 0,
            rear: 0,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Adds `value` to the rear of the queue, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the queue would have a size that exceeds [`isize::MAX`].
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.cap() {
            let new_cap = cmp::max(
                self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
                MIN_CAP,
            );
            self.resize(new_cap);
        }

        if !self.is_empty() {
            self.rear = self.wrap(self.rear + 1);
        }

        // SAFETY: rear < cap, and the slot is free because the queue isn't full.
        unsafe { self.buf.write(self.rear, value); }
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    /// Removes and returns the element at the front of the queue, or returns an [`Err`] if the
    /// queue is empty rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::circ::ArrayQueue;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut queue = ArrayQueue::with_cap(2);
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// queue.enqueue(3);
    /// assert_eq!(queue.try_dequeue(), Ok(1));
    /// assert_eq!(queue.try_dequeue(), Ok(2));
    /// assert_eq!(queue.try_dequeue(), Ok(3));
    /// assert_eq!(queue.try_dequeue(), Err(EmptyContainer));
    /// ```
    pub fn try_dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        // SAFETY: The queue isn't empty, so the front slot is initialized. It is no longer
        // considered part of the queue once front moves past it.
        let value = unsafe { self.buf.read(self.front) };
        self.len -= 1;

        if self.is_empty() {
            // The next enqueue writes to rear without advancing it, so front has to meet it there.
            self.front = self.rear;
        } else {
            self.front = self.wrap(self.front + 1);

            if self.len < self.cap() / SHRINK_THRESHOLD {
                self.resize(self.cap() / GROWTH_FACTOR);
            }
        }

        Ok(value)
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the element at the front of the queue, or an [`Err`] if the queue
    /// is empty.
    pub fn try_front(&self) -> Result<&T, EmptyContainer> {
        if self.is_empty() {
            Err(EmptyContainer)
        } else {
            // SAFETY: The queue isn't empty, so the front slot is initialized.
            Ok(unsafe { self.buf.slot(self.front).as_ref() })
        }
    }

    /// Returns a mutable reference to the element at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the element at the front of the queue, or an [`Err`] if the
    /// queue is empty.
    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        if self.is_empty() {
            Err(EmptyContainer)
        } else {
            // SAFETY: The queue isn't empty, so the front slot is initialized. The mutable borrow
            // of self guarantees exclusive access.
            Ok(unsafe { self.buf.slot(self.front).as_mut() })
        }
    }

    /// Drops every element, keeping the current allocation and resetting both indices.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            // SAFETY: The queue isn't empty, so the front slot is initialized.
            let value = unsafe { self.buf.read(self.front) };
            self.front = self.wrap(self.front + 1);
            self.len -= 1;
            drop(value);
        }

        self.front = 0;
        self.rear = 0;
    }

    /// Visits every element from the front of the queue to the rear.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        for i in 0..self.len {
            visit(self.get_logical(i));
        }
    }

    /// Returns the element `index` places behind the front.
    pub(crate) fn get_logical(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: index < len, so the wrapped slot holds one of the initialized elements.
        unsafe { self.buf.slot(self.wrap(self.front + index)).as_ref() }
    }

    /// Moves every element into a new allocation of `new_cap` slots, in logical order starting
    /// at slot 0.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        log::trace!(
            "resizing ArrayQueue from {} to {} slots, re-linearizing {} elements",
            self.cap(),
            new_cap,
            self.len,
        );

        let mut new_buf = Buffer::with_cap(new_cap);
        for i in 0..self.len {
            // SAFETY: Each logical element is initialized and is read exactly once, then written
            // into an in bounds slot of the new Buffer. The old Buffer only deallocates on drop.
            unsafe {
                let value = self.buf.read(self.wrap(self.front + i));
                new_buf.write(i, value);
            }
        }

        self.buf = new_buf;
        self.front = 0;
        self.rear = self.len.saturating_sub(1);
    }

    /// Wraps a physical index around the capacity of the ring.
    const fn wrap(&self, index: usize) -> usize {
        index % self.buf.cap
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = ArrayQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone> Clone for ArrayQueue<T> {
    /// Copies every element in logical order into a new queue with the same capacity. The copy
    /// starts at slot 0 regardless of where the original's front was.
    fn clone(&self) -> Self {
        let mut queue = ArrayQueue::with_cap(self.cap());
        self.for_each(|value| queue.enqueue(value.clone()));
        queue
    }
}

impl<T: PartialEq> PartialEq for ArrayQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (0..self.len).all(|i| self.get_logical(i) == other.get_logical(i))
    }
}

impl<T: Eq> Eq for ArrayQueue<T> {}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field(
                "contents",
                &debug_with(|f| {
                    f.debug_list().entries((0..self.len).map(|i| self.get_logical(i))).finish()
                }),
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish()
    }
}

impl<T: Display> Display for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{}", self.get_logical(i))?;
        }
        Ok(())
    }
}
