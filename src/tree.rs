//! An unbalanced BST that owns its nodes through `Box`es.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.find_min().is_err());
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert!(tree.contains(&3));
//!
//! // Inserting a value that is already present does nothing.
//! tree.insert(3);
//! assert_eq!(tree.node_count(), 3);
//!
//! tree.remove(&5);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 8]);
//! ```

use std::fmt;

use log::trace;

use crate::error::{Error, Result};
use crate::node::{self, Link, Node};

/// An unbalanced Binary Search Tree. Values are ordered by their [`Ord`] implementation and each
/// value is stored at most once.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.make_empty();
    }
}

/// Shows the values level by level, the same grouping as [`Tree::levels`].
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("levels", &self.levels()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node, leaving the tree empty.
    ///
    /// Nodes are released from an explicit stack rather than by recursive `Box` drops so that a
    /// degenerate tree can't overflow the call stack.
    pub fn make_empty(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find_min(), Err(Error::Underflow));
    ///
    /// tree.extend([4, 2, 9]);
    /// assert_eq!(tree.find_min(), Ok(&2));
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        self.root().map(Node::min).ok_or(Error::Underflow)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        self.root().map(Node::max).ok_or(Error::Underflow)
    }

    /// The number of values stored in the tree.
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// The number of edges on the longest path from the root to a leaf. A single node has height
    /// `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts `value` into the tree. Inserting a value that is already present leaves the tree
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        trace!("insert");
        node::insert(&mut self.root, value);
    }

    /// Removes `value` from the tree. Nothing happens if the tree does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    /// tree.remove(&42);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.node_count(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) {
        trace!("remove");
        node::remove(&mut self.root, value);
    }

    /// Returns `true` if the tree contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root().map_or(false, |root| root.contains(value))
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting the values in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
