use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::EmptyContainer;
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A first-in, first-out queue built from a chain of nodes.
///
/// The queue owns the chain through `front`, each node owns the next, and `rear` is a second,
/// non-owning pointer to the last node so that both ends can be reached in `O(1)`. Unlike
/// [`ArrayQueue`](crate::collections::circ::ArrayQueue), there is never anything to resize.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct LinkedQueue<T> {
    front: Link<T>,
    rear: Link<T>,
    len: usize,
    _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty LinkedQueue.
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            front: None,
            rear: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Adds `value` to the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));

        match self.rear {
            // SAFETY: rear points to the last live node of this queue, which has no next node yet.
            Some(rear) => unsafe { (*rear.as_ptr()).next = Some(node); },
            None => self.front = Some(node),
        }

        self.rear = Some(node);
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
    /// # use basic_collections::collections::linked::LinkedQueue;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue("first");
    /// queue.enqueue("second");
    /// assert_eq!(queue.try_dequeue(), Ok("first"));
    /// assert_eq!(queue.try_dequeue(), Ok("second"));
    /// assert_eq!(queue.try_dequeue(), Err(EmptyContainer));
    /// ```
    pub fn try_dequeue(&mut self) -> Result<T, EmptyContainer> {
        let front = self.front.ok_or(EmptyContainer)?;
        // SAFETY: front came from Box::leak in enqueue and is unlinked from the queue here, so this
        // is the only place it is freed.
        let node = unsafe { Box::from_raw(front.as_ptr()) };

        self.front = node.next;
        if self.front.is_none() {
            // The queue held a single node, which rear also pointed to.
            self.rear = None;
        }
        self.len -= 1;

        Ok(node.value)
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
        // SAFETY: front points to a live node owned by this queue, borrowed for as long as self.
        self.front.map(|node| unsafe { &(*node.as_ptr()).value }).ok_or(EmptyContainer)
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
        // SAFETY: front points to a live node owned by this queue, and the mutable borrow of self
        // guarantees exclusive access.
        self.front.map(|node| unsafe { &mut (*node.as_ptr()).value }).ok_or(EmptyContainer)
    }

    /// Returns a reference to the element at the rear of the queue, the one most recently
    /// enqueued.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the element at the rear of the queue, or an [`Err`] if the queue is
    /// empty.
    pub fn try_back(&self) -> Result<&T, EmptyContainer> {
        // SAFETY: rear points to a live node owned by this queue, borrowed for as long as self.
        self.rear.map(|node| unsafe { &(*node.as_ptr()).value }).ok_or(EmptyContainer)
    }

    /// Removes every element, freeing the nodes one at a time from the front.
    pub fn clear(&mut self) {
        while self.try_dequeue().is_ok() {}
    }

    /// Visits every element from the front of the queue to the rear.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        let mut curr = self.front;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from front is alive while self is borrowed.
            let node = unsafe { &*node.as_ptr() };
            visit(&node.value);
            curr = node.next;
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    /// Enqueues a copy of every element, front to rear, into a new queue.
    fn clone(&self) -> Self {
        let mut queue = LinkedQueue::new();
        self.for_each(|value| queue.enqueue(value.clone()));
        queue
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }

        let (mut a, mut b) = (self.front, other.front);
        while let (Some(node_a), Some(node_b)) = (a, b) {
            // SAFETY: Both nodes are alive while their queues are borrowed.
            let (node_a, node_b) = unsafe { (&*node_a.as_ptr(), &*node_b.as_ptr()) };
            if node_a.value != node_b.value {
                return false;
            }
            a = node_a.next;
            b = node_b.next;
        }
        true
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("contents", &debug_with(|f| {
                let mut list = f.debug_list();
                self.for_each(|value| { list.entry(value); });
                list.finish()
            }))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut curr = self.front;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from front is alive while self is borrowed.
            let node = unsafe { &*node.as_ptr() };
            write!(f, "{}", node.value)?;
            if node.next.is_some() {
                write!(f, " <- ")?;
            }
            curr = node.next;
        }
        Ok(())
    }
}

// SAFETY: The queue uniquely owns every one of its nodes, so it can be sent between threads when
// the values can.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: Shared access to the queue only ever produces shared access to its values.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}
