//! Lazy traversals over the values of a [`Tree`].
//!
//! Each traversal borrows the tree and keeps its own explicit stack or queue, so walking a
//! degenerate tree costs heap memory rather than call stack. Calling the producing method again
//! starts a fresh traversal.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree<_> = [100, 50, 40, 45, 150].into_iter().collect();
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [40, 45, 50, 100, 150]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [100, 50, 40, 45, 150]);
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [100, 50, 150, 40, 45]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

/// Sorted traversal: left subtree, node, right subtree. Created by [`Tree::in_order`].
#[derive(Debug)]
pub struct InOrder<'a, T> {
    // Nodes whose left subtree has been pushed but whose value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Node, left subtree, right subtree. Created by [`Tree::pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Left subtree, right subtree, node. Created by [`Tree::post_order`].
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    // The flag is set once a node's children have been pushed above it.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Breadth first, top to bottom and left to right within a level. Created by
/// [`Tree::level_order`].
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

impl<T> Tree<T> {
    /// Iterates over the values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates over the values visiting each node before its left and then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the values visiting each node after its left and then its right subtree.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Iterates over the values level by level starting at the root. An empty tree yields
    /// nothing.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// Collects the values level by level, one `Vec` per depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [100, 50, 40, 45, 150].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.levels(),
    ///     vec![vec![&100], vec![&50, &150], vec![&40], vec![&45]],
    /// );
    /// ```
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut current: Vec<&Node<T>> = self.root().into_iter().collect();
        while !current.is_empty() {
            levels.push(current.iter().map(|&node| &node.value).collect());
            current = current
                .iter()
                .flat_map(|&node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        levels
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
