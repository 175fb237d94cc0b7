//! Structural comparisons and transformations of whole trees.
//!
//! Every comparison here walks two trees in lock step and splits on all four combinations of
//! empty and non-empty subtrees, so they are total: any pair of trees, empty ones included,
//! gets a plain `true` or `false`. The walks and copies keep their own stack of pending nodes,
//! so a degenerate tree is no harder on the call stack than a balanced one.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let a: Tree<_> = [5, 3, 8, 30].into_iter().collect();
//! let b: Tree<_> = [15, 13, 18, 130].into_iter().collect();
//!
//! // Same shape, different values.
//! assert!(a.compare_structure(&b));
//! assert!(!a.equals(&b));
//!
//! let mirrored = a.mirror();
//! assert!(a.is_mirror(&mirrored));
//! assert_eq!(mirrored.mirror(), a);
//! ```

use crate::node::{Link, Node};
use crate::tree::Tree;
use crate::util::Children;

/// How the children of two nodes are lined up when walking or rebuilding trees in lock step.
#[derive(Clone, Copy)]
enum Pairing {
    /// Left with left, right with right.
    Same,
    /// Left with right, right with left.
    Opposite,
}

/// A tree is full when every node has either no children or two.
fn is_full<T>(root: &Node<T>) -> bool {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.children() {
            Children::Neither => {}
            Children::Both(left, right) => {
                stack.push(left);
                stack.push(right);
            }
            Children::Left(_) | Children::Right(_) => return false,
        }
    }
    true
}

/// Walks both trees together, pairing children according to `pairing`. Returns `false` as soon
/// as a pair of nodes differs in shape or `same_value` rejects their values.
fn walk_pairs<T, U, F>(
    a: Option<&Node<T>>,
    b: Option<&Node<U>>,
    pairing: Pairing,
    same_value: F,
) -> bool
where
    F: Fn(&T, &U) -> bool,
{
    let mut stack = match (a, b) {
        (None, None) => return true,
        (None, Some(_)) | (Some(_), None) => return false,
        (Some(a), Some(b)) => vec![(a, b)],
    };

    while let Some((a, b)) = stack.pop() {
        if !same_value(&a.value, &b.value) {
            return false;
        }
        match (pairing, a.children(), b.children()) {
            (_, Children::Neither, Children::Neither) => {}
            (Pairing::Same, Children::Left(a), Children::Left(b))
            | (Pairing::Same, Children::Right(a), Children::Right(b))
            | (Pairing::Opposite, Children::Left(a), Children::Right(b))
            | (Pairing::Opposite, Children::Right(a), Children::Left(b)) => stack.push((a, b)),
            (Pairing::Same, Children::Both(a_left, a_right), Children::Both(b_left, b_right)) => {
                stack.push((a_left, b_left));
                stack.push((a_right, b_right));
            }
            (
                Pairing::Opposite,
                Children::Both(a_left, a_right),
                Children::Both(b_left, b_right),
            ) => {
                stack.push((a_left, b_right));
                stack.push((a_right, b_left));
            }
            _ => return false,
        }
    }
    true
}

/// Clones every node of `source` into a fresh node graph, swapping the children of each node
/// when `pairing` is [`Pairing::Opposite`].
fn rebuild<T: Clone>(source: Option<&Node<T>>, pairing: Pairing) -> Link<T> {
    let mut root = None;
    {
        let mut stack = Vec::new();
        if let Some(source) = source {
            stack.push((source, &mut root));
        }

        while let Some((source, slot)) = stack.pop() {
            let copy = slot.insert(Node::new_boxed(source.value.clone()));
            let Node { left, right, .. } = &mut **copy;
            let (into_left, into_right) = match pairing {
                Pairing::Same => (source.left(), source.right()),
                Pairing::Opposite => (source.right(), source.left()),
            };
            stack.extend(into_left.map(|child| (child, left)));
            stack.extend(into_right.map(|child| (child, right)));
        }
    }
    root
}

impl<T> Tree<T> {
    /// Returns `true` if no node has exactly one child. An empty tree is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    /// assert!(tree.is_full());
    ///
    /// // 8 now has a single child.
    /// tree.insert(30);
    /// assert!(!tree.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        self.root().map_or(true, is_full)
    }

    /// Returns `true` if both trees have the same shape. The values stored in the nodes are
    /// ignored, so the trees don't even need to hold the same type.
    pub fn compare_structure<U>(&self, other: &Tree<U>) -> bool {
        walk_pairs(self.root(), other.root(), Pairing::Same, |_, _| true)
    }

    /// Returns `true` if both trees have the same shape and equal values at every position.
    ///
    /// Two trees holding the same set of values are not necessarily equal: the order they were
    /// inserted in decides their shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let a: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let b: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let c: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&c));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        walk_pairs(self.root(), other.root(), Pairing::Same, T::eq)
    }

    /// Returns `true` if `other` is this tree reflected left to right at every level, with equal
    /// values in the reflected positions. Two empty trees are mirrors of each other.
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        walk_pairs(self.root(), other.root(), Pairing::Opposite, T::eq)
    }

    /// Returns a deep copy of this tree. The copy shares no nodes with the original.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: rebuild(self.root(), Pairing::Same),
        }
    }

    /// Returns a new tree that is this tree reflected left to right at every level.
    ///
    /// The values of a mirrored tree are in descending order from left to right, so it no
    /// longer satisfies the search order that [`insert`][Self::insert],
    /// [`remove`][Self::remove] and [`contains`][Self::contains] rely on. Mirror it again to get
    /// a searchable tree back.
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: rebuild(self.root(), Pairing::Opposite),
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Tree<T> {}
