use crate::node::Node;

/// Which of a node's two child slots are occupied. The shape checks match on this so that all
/// four shapes a node can have are handled explicitly.
pub(crate) enum Children<'a, T> {
    /// No children, the node is a leaf.
    Neither,
    /// Only the left child is present.
    Left(&'a Node<T>),
    /// Only the right child is present.
    Right(&'a Node<T>),
    /// Both children are present.
    Both(&'a Node<T>, &'a Node<T>),
}

impl<'a, T> Children<'a, T> {
    pub(crate) fn of(node: &'a Node<T>) -> Self {
        match (node.left(), node.right()) {
            (None, None) => Self::Neither,
            (Some(left), None) => Self::Left(left),
            (None, Some(right)) => Self::Right(right),
            (Some(left), Some(right)) => Self::Both(left, right),
        }
    }
}
