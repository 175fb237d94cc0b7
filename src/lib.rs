//! An unbalanced Binary Search Tree (BST) with operations for comparing, copying, mirroring and
//! rotating whole trees.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The [`Tree`] in this crate never rebalances itself, so its shape is entirely decided by the
//! order values are inserted and removed in. That makes the shape itself something worth
//! looking at: [`Tree::compare_structure`], [`Tree::is_full`], [`Tree::mirror`] and friends all
//! work on shapes, and [`Tree::rotate_left`] / [`Tree::rotate_right`] change a shape by hand
//! without changing the sorted order of the values.
//!
//! ## Recursion depth
//!
//! No operation recurses. Single-path operations (inserting, removing, searching, rotating) walk
//! a cursor down the tree, and whole-tree operations keep an explicit stack or queue on the heap.
//! A degenerate tree (e.g. one built from already sorted values) is slow to work with but never
//! exhausts the call stack.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let tree: Tree<_> = [5, 3, 8, 30].into_iter().collect();
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 5, 8, 30]);
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.height(), 2);
//!
//! // 8 has a single child, so the tree isn't full.
//! assert!(!tree.is_full());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod node;
mod rotate;
mod shape;
pub mod traversal;
pub mod tree;
mod util;


pub use error::{Error, Result};
pub use tree::Tree;
