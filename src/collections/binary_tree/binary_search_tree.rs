use std::fmt::{self, Debug, Display, Formatter};

use super::Branch;
use crate::util::error::EmptyContainer;
use crate::util::fmt::debug_with;
use crate::util::result::ResultExtension;

/// An ordered set of values stored in an unbalanced binary search tree.
///
/// Every value in a node's left subtree is less than the node's value, and every value in its
/// right subtree is greater. Equal values are never stored twice. The tree performs no
/// rebalancing, so its shape depends on insertion order: inserting already sorted values
/// produces a tree as deep as it is long.
///
/// Structural operations are recursive and so use call stack proportional to the height of the
/// tree. [`clear`](BinarySearchTree::clear) and dropping are the exception, and run in constant
/// stack space regardless of shape.
///
/// # Time Complexity
/// For a tree of height `h`, which is `O(log n)` when the tree is balanced and `O(n)` at worst.
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `find_min/find_max` | `O(h)` |
/// | `len` | `O(n)` |
/// | `height` | `O(n)` |
/// | `in_order_traversal` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
        }
    }

    /// Counts the nodes in the tree. The count isn't stored, so this visits every node.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, so an empty tree
    /// has a height of 0 and a tree with a single node has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Adds `value` to the tree, returning `true` if it was added or `false` if an equal value
    /// was already present, in which case the tree is left untouched and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.root.insert(value)
    }

    /// Removes the value equal to `value` from the tree, returning whether one was found.
    ///
    /// When the node holding the value has two children it is kept in place and given the value
    /// of its in-order successor, the smallest value in its right subtree, and the successor's
    /// node is removed instead.
    pub fn remove(&mut self, value: &T) -> bool {
        self.root.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Returns a reference to the smallest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn find_min(&self) -> &T {
        self.try_find_min().throw()
    }

    /// Returns a reference to the smallest value in the tree, or an [`Err`] if the tree is empty.
    pub fn try_find_min(&self) -> Result<&T, EmptyContainer> {
        self.root.first().ok_or(EmptyContainer)
    }

    /// Returns a reference to the largest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn find_max(&self) -> &T {
        self.try_find_max().throw()
    }

    /// Returns a reference to the largest value in the tree, or an [`Err`] if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinarySearchTree;
    /// # use basic_collections::error::EmptyContainer;
    /// let mut tree: BinarySearchTree<_> = [4, 9, 1].into_iter().collect();
    /// assert_eq!(tree.try_find_max(), Ok(&9));
    /// tree.clear();
    /// assert_eq!(tree.try_find_max(), Err(EmptyContainer));
    /// ```
    pub fn try_find_max(&self) -> Result<&T, EmptyContainer> {
        self.root.last().ok_or(EmptyContainer)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Visits every value in ascending order.
    pub fn in_order_traversal<'a, F: FnMut(&'a T)>(&'a self, mut visit: F) {
        self.root.in_order(&mut visit);
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    /// Copies every node, producing a tree with the same shape as this one.
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
        }
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    /// Two trees are equal when they hold the same values, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        let mut values = Vec::new();
        self.in_order_traversal(|value| values.push(value));

        let mut values = values.into_iter();
        let mut equal = true;
        other.in_order_traversal(|value| {
            equal &= values.next() == Some(value);
        });
        equal && values.next().is_none()
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &debug_with(|f| write!(f, "\n{:?}\n", &self.root)))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Ord + Display> Display for BinarySearchTree<T> {
    /// Writes the values in ascending order, as a set.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut result = write!(f, "{{");
        let mut first = true;
        self.in_order_traversal(|value| {
            if result.is_err() { return; }
            result = if first {
                write!(f, "{value}")
            } else {
                write!(f, ", {value}")
            };
            first = false;
        });
        result?;
        write!(f, "}}")
    }
}
