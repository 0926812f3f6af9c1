use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(value)));
                true
            },
        }
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let Some(node) = &mut self.0 else {
            return false;
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left.remove(value),
            Ordering::Greater => node.right.remove(value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // The node stays where it is and takes on the value of its in-order
                    // successor, whose own node is unlinked from the right subtree instead.
                    if let Some(successor) = node.right.take_first() {
                        node.value = successor;
                    }
                } else {
                    let child = node.left.0.take().or_else(|| node.right.0.take());
                    self.0 = child;
                }
                true
            },
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Greater => node.right.contains(value),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(e) => Some(e),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    /// Unlinks the leftmost node of this branch, splicing its right child into its place, and
    /// returns its value.
    pub fn take_first(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.is_some() {
            return node.left.take_first();
        }

        let node = self.0.take()?;
        let Node { right, value, .. } = *node;
        self.0 = right.0;
        Some(value)
    }

    pub fn last(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(e) => Some(e),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn count(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + node.left.count() + node.right.count(),
            None => 0,
        }
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + node.left.height().max(node.right.height()),
            None => 0,
        }
    }

    pub fn in_order<'a, F: FnMut(&'a T)>(&'a self, visit: &mut F) {
        if let Some(node) = &self.0 {
            node.left.in_order(visit);
            visit(&node.value);
            node.right.in_order(visit);
        }
    }

    /// Frees every node below this branch without recursing. Each left child is rotated up
    /// into its parent's place until the current node has no left child, at which point it can
    /// be dropped on its own and its right child takes over.
    pub fn clear(&mut self) {
        let mut curr = self.0.take();
        while let Some(mut node) = curr {
            curr = match node.left.0.take() {
                Some(mut left) => {
                    node.left.0 = left.right.0.take();
                    left.right.0 = Some(node);
                    Some(left)
                },
                None => node.right.0.take(),
            };
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord + Clone> Clone for Branch<T> {
    fn clone(&self) -> Self {
        Branch(self.0.as_ref().map(|node| Box::new(Node {
            left: node.left.clone(),
            right: node.right.clone(),
            value: node.value.clone(),
        })))
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n{:?}\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
