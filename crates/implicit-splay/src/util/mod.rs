//! Arena-level utility functions.
//!
//! - link helpers that keep subtree counters exact (`set_left`, `set_right`)
//! - traversal (`first`, `last`, `next`, `prev`)
//! - lookups by value, by position, and rank of a node
//!
//! Structural operations built on splaying live in [`split`](mod@split); the invariant
//! checker lives in [`validate`].
//!
//! Key-based helpers accept a `key_of` accessor closure so callers can use
//! any arena-backed node layout.

pub mod split;
pub mod validate;

use crate::types::{Node, SizedNode};

pub use split::{insert, merge, remove, split};
pub use validate::assert_splay_tree;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn get_size<N: SizedNode>(arena: &[N], idx: u32) -> usize {
    arena[idx as usize].size()
}

#[inline]
pub(crate) fn put_size<N: SizedNode>(arena: &mut [N], idx: u32, size: usize) {
    arena[idx as usize].set_size(size);
}

/// Counter of the subtree at `node`, `0` for an absent subtree.
#[inline]
pub fn size_of<N: SizedNode>(arena: &[N], node: Option<u32>) -> usize {
    node.map_or(0, |i| get_size(arena, i))
}

/// Replaces the left child of `node`.
///
/// The counter of `node` loses the old child's count and gains the new one;
/// the new child (if any) gets `node` as parent. The old child's parent link
/// is left untouched.
pub fn set_left<N: SizedNode>(arena: &mut [N], node: u32, child: Option<u32>) {
    let old = get_l(arena, node);
    let size = get_size(arena, node) - size_of(arena, old) + size_of(arena, child);
    put_size(arena, node, size);
    arena[node as usize].set_l(child);
    if let Some(c) = child {
        set_p(arena, c, Some(node));
    }
}

/// Replaces the right child of `node`. Mirror of [`set_left`].
pub fn set_right<N: SizedNode>(arena: &mut [N], node: u32, child: Option<u32>) {
    let old = get_r(arena, node);
    let size = get_size(arena, node) - size_of(arena, old) + size_of(arena, child);
    put_size(arena, node, size);
    arena[node as usize].set_r(child);
    if let Some(c) = child {
        set_p(arena, c, Some(node));
    }
}

/// `true` iff `node` is the left child of its parent. `false` for a root.
#[inline]
pub fn is_left_child<N: Node>(arena: &[N], node: u32) -> bool {
    get_p(arena, node).is_some_and(|p| get_l(arena, p) == Some(node))
}

/// `true` iff `node` is the right child of its parent. `false` for a root.
#[inline]
pub fn is_right_child<N: Node>(arena: &[N], node: u32) -> bool {
    get_p(arena, node).is_some_and(|p| get_r(arena, p) == Some(node))
}

/// Leftmost (smallest) node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost (largest) node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds a node holding `key` without restructuring the tree.
///
/// Goes right while the visited key is smaller, left otherwise, and returns
/// the first equal node met on the way down.
pub fn find_by_value<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: PartialOrd,
    F: Fn(&N) -> &K,
{
    let mut curr = root;
    while let Some(i) = curr {
        let k = key_of(&arena[i as usize]);
        if k == key {
            return Some(i);
        }
        curr = if k < key {
            get_r(arena, i)
        } else {
            get_l(arena, i)
        };
    }
    None
}

/// Finds the node at rank `pos`, where rank `0` is the largest element.
///
/// Returns `None` when `pos` is not below the size of the tree.
pub fn find_by_position<N: SizedNode>(
    arena: &[N],
    root: Option<u32>,
    mut pos: usize,
) -> Option<u32> {
    if pos >= size_of(arena, root) {
        return None;
    }
    let mut curr = root;
    while let Some(i) = curr {
        let right = size_of(arena, get_r(arena, i));
        if pos < right {
            curr = get_r(arena, i);
            continue;
        }
        pos -= right;
        if pos == 0 {
            return Some(i);
        }
        pos -= 1;
        curr = get_l(arena, i);
    }
    None
}

/// Rank of `node` within its tree: the number of nodes ordered after it.
pub fn position_of<N: SizedNode>(arena: &[N], node: u32) -> usize {
    let mut pos = size_of(arena, get_r(arena, node));
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            pos += 1 + size_of(arena, get_r(arena, p));
        }
        curr = p;
    }
    pos
}
