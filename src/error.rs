//! The error type returned by [`Tree`][crate::Tree] operations that can fail.
//!
//! Most "not found" outcomes are not errors: removing or rotating around a missing value leaves
//! the tree untouched and [`contains`][crate::Tree::contains] just says `false`. The only failure
//! is asking an empty tree for an extreme value.

/// Errors produced by [`Tree`][crate::Tree] queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// [`find_min`][crate::Tree::find_min] or [`find_max`][crate::Tree::find_max] was called on
    /// an empty tree.
    #[error("underflow: the tree is empty")]
    Underflow,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
