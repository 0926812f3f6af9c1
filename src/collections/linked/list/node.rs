use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A pointer to a heap allocated [`Node`].
///
/// NodePtrs are only ever created by [`NodePtr::from_node`] and only ever held by the list that
/// owns the node, so every accessor may assume that the node is alive. The list is responsible for
/// freeing each node exactly once, through [`NodePtr::take_node`].
///
/// Accessors return references with an unbounded lifetime. Callers tie that lifetime back to a
/// borrow of the owning list.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodePtr<T> {
    /// Moves `node` onto the heap. Box is used here, rather than alloc, because dereferencing a
    /// Box allows the node to be moved back out again.
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning it by value.
    ///
    /// # Safety
    /// The node must not be accessed through this or any other NodePtr afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that
        // this is the last use of the node.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is alive for as long as the owning list holds this pointer.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is alive, and callers only use this behind a mutable borrow of the
        // owning list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is alive.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is alive.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: The node is alive and no references into its links are held.
        unsafe { (*self.0.as_ptr()).prev = prev; }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is alive and no references into its links are held.
        unsafe { (*self.0.as_ptr()).next = next; }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
