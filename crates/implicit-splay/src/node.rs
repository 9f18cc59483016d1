use crate::types::{Node, SizedNode};

/// Arena cell of a [`SplayTree`](crate::SplayTree).
#[derive(Clone, Debug)]
pub struct SplayNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    /// Number of nodes in the subtree rooted here, including this one.
    pub size: usize,
    pub v: T,
    /// Bumped every time the slot is retired, so that handles issued for an
    /// earlier occupant stop resolving.
    pub generation: u32,
}

impl<T> SplayNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            size: 1,
            v,
            generation: 0,
        }
    }

    /// Drops every link and resets the counter, keeping only the value.
    ///
    /// Used to retire a removed node in place. The generation is advanced so
    /// stale [`NodeRef`]s to this slot are detectable.
    pub fn reset_to_fresh(&mut self) {
        self.p = None;
        self.l = None;
        self.r = None;
        self.size = 1;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Reuses a retired slot for a new value, keeping the current generation.
    pub(crate) fn reoccupy(&mut self, v: T) {
        self.p = None;
        self.l = None;
        self.r = None;
        self.size = 1;
        self.v = v;
    }
}

impl<T> Node for SplayNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> SizedNode for SplayNode<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

/// Generational handle to a node of a [`SplayTree`](crate::SplayTree).
///
/// A handle stays valid while its node is a member of the tree that issued
/// it, or of the tree that inherited that tree's arena through `split` or
/// `merge`. Removal, or relocation into another arena, invalidates it: the
/// tree then reports [`SplayError::StaleHandle`](crate::SplayError) instead
/// of resolving to whatever occupies the slot now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) arena: u64,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeRef {
    pub(crate) fn new(arena: u64, index: u32, generation: u32) -> Self {
        Self {
            arena,
            index,
            generation,
        }
    }

    /// Arena slot this handle points to.
    pub fn index(&self) -> u32 {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_to_fresh_keeps_value_and_bumps_generation() {
        let mut n = SplayNode::new(7);
        n.p = Some(1);
        n.l = Some(2);
        n.r = Some(3);
        n.size = 3;
        n.reset_to_fresh();
        assert_eq!((n.p, n.l, n.r, n.size, n.v), (None, None, None, 1, 7));
        assert_eq!(n.generation, 1);

        n.reoccupy(9);
        assert_eq!((n.v, n.generation), (9, 1));
    }
}
