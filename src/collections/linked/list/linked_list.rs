use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Length, Node, NodePtr, ONE};
use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// An empty list holds no pointers at all, rather than a null head and tail, so every non-empty
/// list has a head with no `prev` and a tail with no `next`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `insert_at` | `O(min(i, n-i))` |
/// | `get` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Indexed access always walks forward from the head, while [`insert_at`](LinkedList::insert_at)
/// starts from whichever end is closer.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
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
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(contents) => Ok(contents.head.value()),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element in the list, or an [`Err`] if it is empty.
    pub fn try_back(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(contents) => Ok(contents.tail.value()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
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
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked from the list below, before anything else can
                // reach it.
                let node = unsafe { head.take_node() };

                match (len.decrement(), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        new_head.set_prev(None);
                        *head = new_head;
                        *len = new_len;
                    },
                    // A list of length one has no node after its head.
                    _ => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes the last element from the list and returns it, or returns an [`Err`] if the list is
    /// empty rather than panicking.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked from the list below, before anything else can
                // reach it.
                let node = unsafe { tail.take_node() };

                match (len.decrement(), node.prev) {
                    (Some(new_len), Some(new_tail)) => {
                        new_tail.set_next(None);
                        *tail = new_tail;
                        *len = new_len;
                    },
                    // A list of length one has no node before its tail.
                    _ => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Inserts `value` so that it ends up at position `index`, directly before the element which
    /// is currently there. An `index` of zero pushes to the front, while any `index` at or beyond
    /// the length pushes to the back, so this method never fails.
    ///
    /// The list is traversed from the head if `index` lies in the first half and from the tail
    /// otherwise.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 2, 4].into_iter().collect();
    /// list.insert_at(2, 3);
    /// list.insert_at(0, 0);
    /// list.insert_at(99, 5);
    /// assert_eq!(list, (0..=5).collect());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => match index {
                0 => contents.push_front(value),
                val if val >= contents.len.get() => contents.push_back(value),
                val => {
                    let next_node = contents.seek(val);
                    // SAFETY: val > 0, so the node at val isn't the head and has a previous node.
                    let prev_node = unsafe { next_node.prev().unwrap_unchecked() };

                    let node = NodePtr::from_node(Node {
                        value,
                        prev: Some(prev_node),
                        next: Some(next_node),
                    });

                    prev_node.set_next(Some(node));
                    next_node.set_prev(Some(node));
                    contents.len = contents.len.increment();
                },
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Removes every element, freeing the nodes one at a time from the front.
    pub fn clear(&mut self) {
        while self.try_pop_front().is_ok() {}
    }

    /// Visits every element from the front of the list to the back.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        if let Full(contents) = &self.state {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                visit(node.value());
                curr = node.next();
            }
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => {
                Ok(contents.seek_fwd(index, contents.head))
            },
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    /// Checks that every `next` link is mirrored by a `prev` link and that the tail and length
    /// agree with the chain.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none());
                let mut curr = *head;
                let mut count = 1;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        if let Full(contents) = &self.state {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                if node.value() == item { return true; }
                curr = node.next();
            }
        }
        false
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end of the list is closer.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index <= self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.len.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: Callers never seek past the tail.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: Callers never seek past the head.
            node = unsafe { node.prev().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.increment();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.increment();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        self.for_each(|value| list.push_back(value.clone()));
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() { return false; }

        match (&self.state, &other.state) {
            (Full(a), Full(b)) => {
                let (mut node_a, mut node_b) = (Some(a.head), Some(b.head));
                while let (Some(a), Some(b)) = (node_a, node_b) {
                    if a.value() != b.value() {
                        return false;
                    }
                    node_a = a.next();
                    node_b = b.next();
                }
                true
            },
            _ => true,
        }
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &debug_with(|f| {
                let mut list = f.debug_list();
                self.for_each(|value| { list.entry(value); });
                list.finish()
            }))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Full(contents) = &self.state {
            write!(f, "{}", contents.head.value())?;

            let mut curr = contents.head.next();
            while let Some(node) = curr {
                write!(f, " -> {}", node.value())?;
                curr = node.next();
            }
        }
        Ok(())
    }
}

// SAFETY: The list uniquely owns every one of its nodes, so it can be sent between threads when the
// values can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to the list only ever produces shared access to its values.
unsafe impl<T: Sync> Sync for LinkedList<T> {}
