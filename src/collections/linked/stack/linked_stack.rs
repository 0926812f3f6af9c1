use std::fmt::{self, Debug, Display, Formatter};

use crate::util::error::EmptyContainer;
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A last-in, first-out stack built from a chain of nodes, where the top of the stack is the head
/// of the chain.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty LinkedStack.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack { top: None, len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the value on the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes and returns the value on the top of the stack, or returns an [`Err`] if the stack
    /// is empty rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedStack;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut stack = LinkedStack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.try_pop(), Ok(2));
    /// assert_eq!(stack.try_pop(), Ok(1));
    /// assert_eq!(stack.try_pop(), Err(EmptyContainer));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        let node = self.top.take().ok_or(EmptyContainer)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the value on the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a reference to the value on the top of the stack, or an [`Err`] if the stack is
    /// empty.
    pub fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.top.as_ref().map(|node| &node.value).ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the value on the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut T {
        self.try_top_mut().throw()
    }

    /// Returns a mutable reference to the value on the top of the stack, or an [`Err`] if the
    /// stack is empty.
    pub fn try_top_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.top.as_mut().map(|node| &mut node.value).ok_or(EmptyContainer)
    }

    /// Removes every element. Nodes are unlinked one at a time so that dropping a long stack
    /// can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut curr = self.top.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    /// Visits every element from the top of the stack to the bottom.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        let mut curr = self.top.as_deref();
        while let Some(node) = curr {
            visit(&node.value);
            curr = node.next.as_deref();
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes each item in turn, so the last item produced ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    /// Copies the chain from the top down, so the copy pops in the same order as the original.
    fn clone(&self) -> Self {
        let mut stack = LinkedStack::new();
        let mut tail = &mut stack.top;

        let mut node = self.top.as_deref();
        while let Some(n) = node {
            tail = &mut tail.insert(Box::new(Node { value: n.value.clone(), next: None })).next;
            stack.len += 1;
            node = n.next.as_deref();
        }

        stack
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }

        let (mut a, mut b) = (self.top.as_deref(), other.top.as_deref());
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

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("contents", &debug_with(|f| {
                let mut list = f.debug_list();
                self.for_each(|value| { list.entry(value); });
                list.finish()
            }))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut curr = self.top.as_deref();
        while let Some(node) = curr {
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, " | ")?;
            }
            curr = node.next.as_deref();
        }
        Ok(())
    }
}
