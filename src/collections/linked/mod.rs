//! Linked collection types, built from individually allocated nodes.
//!
//! Every node is owned by exactly one predecessor: the previous node, or the collection itself for
//! the first node. Links in the other direction, such as [`LinkedList`]'s `prev` pointers or
//! [`LinkedQueue`]'s rear pointer, never own anything. Teardown is always iterative, so dropping a
//! very long chain doesn't recurse once per node.

pub mod list;
pub mod queue;
pub mod singly;
pub mod stack;

#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use queue::LinkedQueue;
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use stack::LinkedStack;
