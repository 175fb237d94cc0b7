//! Single rotations centered on the node holding a given value.
//!
//! Unlike the rotations a self-balancing tree performs on its own, these are driven by the
//! caller: find the node holding the value and rotate *that* node, promoting one of its children
//! into its slot. The in-order sequence of the tree never changes.

use log::{debug, trace};

use crate::node::{self, Node};
use crate::tree::Tree;

/// Rotate `node` to the right. This moves the left child up vertically and `node` down
/// vertically. Without a left child there is nothing to promote and `node` is handed back as is.
///
/// # Diagram
///
/// ```text
///     Option<parent>            Option<parent>
///       /                         /
///    old_root (i.e. "node")    new_root
///     /     \                  /     \
///  new_root  z     rotate ->  x    old_root
///   / \                               /  \
///  x   y                             y    z
/// ```
fn pivot_right<T>(mut old_root: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    match old_root.left.take() {
        None => (old_root, false),
        Some(mut new_root) => {
            old_root.left = new_root.right.take();
            new_root.right = Some(old_root);
            (new_root, true)
        }
    }
}

/// The mirror image of [`pivot_right`]: the right child moves up and takes `node` as its left
/// child, while its own left subtree becomes `node`'s right subtree.
fn pivot_left<T>(mut old_root: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    match old_root.right.take() {
        None => (old_root, false),
        Some(mut new_root) => {
            old_root.right = new_root.left.take();
            new_root.left = Some(old_root);
            (new_root, true)
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Rotates right around the node holding `value`: its left child takes its place, it becomes
    /// that child's right child and inherits the child's old right subtree as its left subtree.
    ///
    /// Returns `false` and leaves the tree untouched if `value` isn't in the tree or its node has
    /// no left child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [100, 50, 40, 45, 150].into_iter().collect();
    ///
    /// assert!(tree.rotate_right(&50));
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [100, 40, 50, 45, 150]);
    ///
    /// // 150 has no left child to promote.
    /// assert!(!tree.rotate_right(&150));
    /// ```
    pub fn rotate_right(&mut self, value: &T) -> bool {
        self.rotate(value, pivot_right)
    }

    /// Rotates left around the node holding `value`: its right child takes its place, it becomes
    /// that child's left child and inherits the child's old left subtree as its right subtree.
    ///
    /// Returns `false` and leaves the tree untouched if `value` isn't in the tree or its node has
    /// no right child.
    pub fn rotate_left(&mut self, value: &T) -> bool {
        self.rotate(value, pivot_left)
    }

    fn rotate<F>(&mut self, value: &T, pivot: F) -> bool
    where
        F: FnOnce(Box<Node<T>>) -> (Box<Node<T>>, bool),
    {
        let slot = node::find_slot(&mut self.root, value);
        let Some(target) = slot.take() else {
            debug!("rotation target is not in the tree");
            return false;
        };

        let (target, rotated) = pivot(target);
        *slot = Some(target);
        if rotated {
            trace!("rotated subtree");
        } else {
            debug!("rotation target has no child to promote");
        }
        rotated
    }
}
