use thiserror::Error;

/// Failures reported by [`SplayTree`](crate::SplayTree).
///
/// All of them are local: the tree is left exactly as it was before the
/// failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplayError {
    #[error("position {pos} is out of range for a tree of size {size}")]
    OutOfRange { pos: usize, size: usize },
    #[error("tree is empty")]
    Empty,
    #[error("merged tree must hold only values greater than the receiver's")]
    MergeOrder,
    #[error("node handle no longer refers to a member of this tree")]
    StaleHandle,
}
