use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A raw, exclusively owned allocation with room for `cap` values of `T`, similar to the storage
/// half of a [`Box<[MaybeUninit<T>]>`](Box).
///
/// A Buffer doesn't track which slots are initialized. The owning container is responsible for
/// writing, reading and dropping values, while the Buffer only ever deallocates its memory. This
/// means that dropping a Buffer never drops any `T`.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0. Nothing is allocated.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with room for exactly `cap` values, all of which are uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        Buffer {
            ptr: Buffer::<T>::alloc(cap),
            cap,
            _phantom: PhantomData,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the Buffer.
    pub unsafe fn slot(&self, index: usize) -> NonNull<T> {
        // SAFETY: The caller guarantees that index is at most one past the end of the allocation,
        // and the allocation size never exceeds isize::MAX.
        unsafe { self.ptr.add(index) }
    }

    /// Moves the value out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// `index` must be within the capacity of the Buffer and the slot must be initialized. The
    /// caller must treat the slot as uninitialized afterwards.
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.slot(index).read() }
    }

    /// Writes `value` into the slot at `index` without dropping any previous value.
    ///
    /// # Safety
    /// `index` must be within the capacity of the Buffer. Any value previously held in the slot is
    /// leaked, so it should be uninitialized or already moved out.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that the slot is in bounds.
        unsafe { self.slot(index).write(value) }
    }

    /// Views the first `len` slots as a slice.
    ///
    /// # Safety
    /// `len` must be within the capacity of the Buffer and the first `len` slots must be
    /// initialized.
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: The pointer is nonnull and aligned, the caller guarantees that the range is
        // initialized and within the allocation, and the borrow of self prevents mutation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Views the first `len` slots as a mutable slice.
    ///
    /// # Safety
    /// See [`Buffer::as_slice`].
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: As for as_slice, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Reallocates the Buffer to hold exactly `new_cap` values. The contents of the slots below
    /// `min(cap, new_cap)` are preserved bit for bit. Slots above `new_cap` are released without
    /// being dropped, so the caller must move or drop them first.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never need an allocation, the dangling pointer is valid for any
            // number of them.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, new) => Buffer::<T>::alloc(new),
            (old, 0) => {
                // SAFETY: ptr was allocated by the global allocator with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Buffer::<T>::layout(old)) }
                NonNull::dangling()
            },
            (old, new) => {
                let old_layout = Buffer::<T>::layout(old);
                let new_layout = Buffer::<T>::layout(new);

                // SAFETY: ptr was allocated by the global allocator with old_layout, both layouts
                // have non-zero size and new_layout has already been checked against isize::MAX.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };

                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        log::trace!(
            "reallocated buffer of {} from {} to {} slots",
            std::any::type_name::<T>(),
            self.cap,
            new_cap,
        );

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates a [`Layout`] for `cap` values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates room for `cap` values of `T`, returning a dangling pointer for zero-sized
    /// layouts.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn alloc(cap: usize) -> NonNull<T> {
        let layout = Buffer::<T>::layout(cap);

        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Buffer::<T>::layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it can be sent between threads when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Shared access to a Buffer only ever produces shared access to its values.
unsafe impl<T: Sync> Sync for Buffer<T> {}
