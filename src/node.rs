//! The owned node graph underneath [`Tree`][crate::Tree].
//!
//! Every mutating routine here works on a slot (a `&mut Link<T>`): it walks a cursor down to the
//! slot it needs, takes the subtree out of it, and writes back whatever should now sit there.
//! Nodes are only ever moved between slots, never shared, so no node can end up with two
//! parents.
//!
//! Nothing here recurses. Walks follow a single path with a cursor, and whole-subtree work keeps
//! its own stack, so a degenerate (list-shaped) tree costs heap rather than call stack.

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::util::Children;

/// An owned, possibly empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Only the node's own value is shown. Formatting the children would recurse once per level.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn children(&self) -> Children<'_, T> {
        Children::of(self)
    }

    /// Follows left children to the smallest value of this subtree.
    pub(crate) fn min(&self) -> &T {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.value
    }

    /// Follows right children to the largest value of this subtree.
    pub(crate) fn max(&self) -> &T {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.value
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    pub(crate) fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of edges on the longest path from this node down to a leaf, found by walking the
    /// subtree one level at a time.
    pub(crate) fn height(&self) -> isize {
        let mut height = -1;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }
}

/// Walks down from `slot` and returns the slot holding `value`, or the empty slot where `value`
/// would be attached.
pub(crate) fn find_slot<'a, T: Ord>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = slot.as_deref().map(|node| value.cmp(&node.value));
        slot = match (ordering, slot) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, slot) => return slot,
        };
    }
}

/// Unlinks the smallest node below `slot` and returns its value. The node's right subtree takes
/// its place. Returns `None` if `slot` is empty.
fn take_min<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let node = slot.take()?;
    let Node { value, right, .. } = *node;
    *slot = right;
    Some(value)
}

/// Inserts `value` below `root`. An empty slot becomes a new leaf. A value that is already
/// present leaves the subtree as it was.
pub(crate) fn insert<T: Ord>(root: &mut Link<T>, value: T) {
    let slot = find_slot(root, &value);
    if slot.is_some() {
        debug!("ignoring duplicate insert");
    } else {
        trace!("attaching new leaf");
        *slot = Some(Node::new_boxed(value));
    }
}

/// Removes `value` from below `root`. Missing values leave the subtree as it was.
///
/// A node with two children keeps its place in the tree. Its value is replaced by its in-order
/// successor (the smallest value of its right subtree) and the successor's node is unlinked
/// from the right subtree instead.
pub(crate) fn remove<T: Ord>(root: &mut Link<T>, value: &T) {
    let slot = find_slot(root, value);
    let Some(mut node) = slot.take() else {
        debug!("value to remove is not in the tree");
        return;
    };

    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => {
            trace!("removing leaf");
            None
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!("splicing only child into removed node's slot");
            Some(child)
        }
        (Some(left), Some(right)) => {
            trace!("replacing removed value with its successor");
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.value = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
}

/// Builds a list of `len` nodes hanging off right children without going through `insert`.
#[cfg(test)]
pub(crate) fn right_spine(len: u32) -> Link<u32> {
    let mut spine = None;
    for value in (0..len).rev() {
        let mut node = Node::new_boxed(value);
        node.right = spine;
        spine = Some(node);
    }
    spine
}
