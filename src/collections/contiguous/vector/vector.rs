use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::collections::buffer::Buffer;
use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, backed by a single exclusively owned allocation.
///
/// When full, the capacity grows geometrically to `2 * cap + 1`, so that [`push_back`] is
/// amortized `O(1)`. Removing elements never shrinks the allocation, use [`reserve`] to do so
/// explicitly.
///
/// Indexing goes through the slice returned by [`Deref`], so `vec[i]` with `i >= len` panics
/// rather than reading past the initialized elements.
///
/// # Time Complexity
/// Here `n` is the length and `i` the index being accessed.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* `O(n)` when the push has to reallocate.
///
/// [`push_back`]: Vector::push_back
/// [`reserve`]: Vector::reserve
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector. Nothing is allocated until the first element arrives.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector that holds up to `cap` elements before its first reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the current allocation has room for.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Appends `value`, growing the allocation to `2 * cap + 1` slots first when it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: len < cap after the grow above, and the slot at len is uninitialized.
        unsafe { self.buf.write(self.len, value); }
        self.len += 1;
    }

    /// Removes and returns the last element. The allocation is kept.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes and returns the last element, or an [`Err`] if there is none.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.try_pop_back(), Ok(2));
    /// assert_eq!(vec.try_pop_back(), Ok(1));
    /// assert_eq!(vec.try_pop_back(), Ok(0));
    /// assert_eq!(vec.try_pop_back(), Err(EmptyContainer));
    /// ```
    pub fn try_pop_back(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        self.len -= 1;

        // SAFETY: The slot at the old last index is initialized and is no longer considered part
        // of the Vector, so moving out of it can't cause a double drop.
        Ok(unsafe { self.buf.read(self.len) })
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element, or an [`Err`] if the Vector is empty.
    pub fn try_front(&self) -> Result<&T, EmptyContainer> {
        self.deref().first().ok_or(EmptyContainer)
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element, or an [`Err`] if the Vector is empty.
    pub fn try_back(&self) -> Result<&T, EmptyContainer> {
        self.deref().last().ok_or(EmptyContainer)
    }

    /// Places `value` at `index`, shifting the tail right by one slot. `insert(len, v)` appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Fallible [`insert`](Vector::insert). On an out of range `index` the value is dropped and
    /// the Vector is left as it was.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) are within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Takes out the element at `index` and closes the gap by shifting the tail left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Fallible [`remove`](Vector::remove).
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        // SAFETY: index < len, so the slot is initialized. Once the value is moved out, the
        // following len - index - 1 values are shifted over it, leaving the old last slot as a
        // stale copy which falls outside of len.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Reallocates the Vector so that its capacity is exactly `new_cap`, moving every element over
    /// in order. If `new_cap` is less than the current length, nothing happens.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..4).collect();
    /// vec.reserve(32);
    /// assert_eq!(vec.cap(), 32);
    /// vec.reserve(2);
    /// assert_eq!(vec.cap(), 32);
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap < self.len { return; }

        self.buf.realloc(new_cap);
    }

    /// Drops the elements in place. The allocation is kept for reuse.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero len first so a panicking element drop can't reach these slots again.
        self.len = 0;

        // SAFETY: The first len values were initialized and are no longer reachable through self.
        unsafe { ptr::drop_in_place(self.buf.as_mut_slice(len)); }
    }

    /// Moves to an allocation of `2 * cap + 1` slots, which always leaves room for one more.
    ///
    /// # Panics
    /// Panics if the new capacity can't be represented, or if the memory layout of the Vector would
    /// have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(2)
            .and_then(|cap| cap.checked_add(1))
            .ok_or(CapacityOverflow)
            .throw();

        self.buf.realloc(new_cap);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Buffer only frees memory, the elements are dropped here.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Slots [0, len) hold the elements.
        unsafe { self.buf.as_slice(self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Slots [0, len) hold the elements, and self is borrowed mutably.
        unsafe { self.buf.as_mut_slice(self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep-copies every element into a new allocation with the same capacity.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push_back(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &debug_with(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
