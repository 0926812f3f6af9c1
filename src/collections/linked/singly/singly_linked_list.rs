use std::fmt::{self, Debug, Display, Formatter};

use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A list with links in only the forward direction.
///
/// Each node is owned by the node before it, and the head is owned by the list. Without a link
/// back from the tail, anything that touches the end of the list has to walk there from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back/pop_back` | `O(n)` |
/// | `insert_at` | `O(i)` |
/// | `get` | `O(i)` |
/// | `remove` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element in the list, or an [`Err`] if it is empty.
    pub fn try_front(&self) -> Result<&T, EmptyContainer> {
        self.head.as_deref().map(|node| &node.value).ok_or(EmptyContainer)
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Add the provided element to the back of the list, walking there from the head.
    pub fn push_back(&mut self, value: T) {
        let tail = Self::seek_link(&mut self.head, self.len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the first element from the list and returns it, or returns an [`Err`] if the list is
    /// empty rather than panicking.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyContainer> {
        let node = self.head.take().ok_or(EmptyContainer)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the last element from the list and returns it. Finding the second-to-last node means
    /// walking the whole list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes the last element from the list and returns it, or returns an [`Err`] if the list is
    /// empty rather than panicking.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyContainer> {
        let last_index = self.len.checked_sub(1).ok_or(EmptyContainer)?;
        // For a list of length one, this is the list's own head link.
        let link = Self::seek_link(&mut self.head, last_index);
        let node = link.take().ok_or(EmptyContainer)?;
        self.len -= 1;
        Ok(node.value)
    }

    /// Inserts `value` so that it ends up at position `index`, directly before the element which
    /// is currently there. An `index` of zero pushes to the front, while any `index` at or beyond
    /// the length pushes to the back, so this method never fails.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [1, 2, 4].into_iter().collect();
    /// list.insert_at(2, 3);
    /// list.insert_at(0, 0);
    /// list.insert_at(99, 5);
    /// assert_eq!(list, (0..=5).collect());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) {
        let link = Self::seek_link(&mut self.head, index.min(self.len));
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        if index >= self.len {
            return Err(err);
        }

        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref());
        }
        node.map(|n| &n.value).ok_or(err)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let err = IndexOutOfBounds { index, len: self.len };
        if index >= self.len {
            return Err(err);
        }

        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        node.map(|n| &mut n.value).ok_or(err)
    }

    /// Removes every element, freeing the nodes one at a time from the front.
    pub fn clear(&mut self) {
        while self.try_pop_front().is_ok() {}
    }

    /// Visits every element from the front of the list to the back.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            visit(&n.value);
            node = n.next.as_deref();
        }
    }

    /// Walks `steps` links forward from `link`, stopping early at the end of the chain, and
    /// returns the link reached. Taking the head link directly, rather than `&mut self`, leaves the
    /// length free to be updated while the returned link is held.
    fn seek_link(mut link: &mut Link<T>, steps: usize) -> &mut Link<T> {
        for _ in 0..steps {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first element equal to `item`, returning whether one was found.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert!(list.remove(&2));
    /// assert!(!list.remove(&5));
    /// assert_eq!(list, [1, 3, 2].into_iter().collect());
    /// ```
    pub fn remove(&mut self, item: &T) -> bool {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value != *item) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                self.len -= 1;
                true
            },
            None => false,
        }
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if n.value == *item { return true; }
            node = n.next.as_deref();
        }
        false
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends every item in order, walking to the end of the list only once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = Self::seek_link(&mut self.head, self.len);
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    /// Re-inserts each element, in order, into a new list.
    fn clone(&self) -> Self {
        let mut list = SinglyLinkedList::new();
        let mut tail = &mut list.head;

        let mut node = self.head.as_deref();
        while let Some(n) = node {
            tail = &mut tail.insert(Box::new(Node { value: n.value.clone(), next: None })).next;
            list.len += 1;
            node = n.next.as_deref();
        }

        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }

        let (mut a, mut b) = (self.head.as_deref(), other.head.as_deref());
        while let (Some(node_a), Some(node_b)) = (a, b) {
            if node_a.value != node_b.value {
                return false;
            }
            a = node_a.next.as_deref();
            b = node_b.next.as_deref();
        }
        true
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &debug_with(|f| {
                let mut list = f.debug_list();
                self.for_each(|value| { list.entry(value); });
                list.finish()
            }))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            write!(f, "{}", n.value)?;
            if n.next.is_some() {
                write!(f, " -> ")?;
            }
            node = n.next.as_deref();
        }
        Ok(())
    }
}
