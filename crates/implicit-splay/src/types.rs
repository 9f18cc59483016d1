//! Node trait definitions.
//!
//! Nodes live in a caller-owned arena (`Vec<N>`); every "pointer" is an
//! `Option<u32>` index into that arena. All tree-manipulation functions take
//! the arena as `&mut [N]` and work with indices.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that also counts the nodes of its subtree, itself included.
///
/// The counter is what makes positional (implicit index) lookups possible.
pub trait SizedNode: Node {
    fn size(&self) -> usize;
    fn set_size(&mut self, size: usize);
}
