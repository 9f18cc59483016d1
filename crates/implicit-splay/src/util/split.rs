//! Split, merge, insert and remove over an arena.
//!
//! A tree is identified by its root index; every function returns the new
//! root(s). None of them recurse, so a degenerate (chain-shaped) tree is
//! handled in constant stack space.

use crate::splay::splay;
use crate::types::SizedNode;
use crate::util::{find_by_position, get_l, get_r, last, set_left, set_p, set_right, size_of};

/// Splits the tree at `root` into nodes with keys `<= boundary` and nodes
/// with keys `> boundary`, returned as `(left, right)`.
///
/// The last node visited on the way down is splayed to the root, so it ends
/// up at the top of one of the halves.
pub fn split<N, K, F>(
    arena: &mut [N],
    root: Option<u32>,
    boundary: &K,
    key_of: F,
) -> (Option<u32>, Option<u32>)
where
    N: SizedNode,
    K: PartialOrd,
    F: Fn(&N) -> &K,
{
    let Some(mut node) = root else {
        return (None, None);
    };
    loop {
        let next = if key_of(&arena[node as usize]) > boundary {
            get_l(arena, node)
        } else {
            get_r(arena, node)
        };
        match next {
            Some(n) => node = n,
            None => break,
        }
    }

    let node = splay(arena, node);
    if key_of(&arena[node as usize]) <= boundary {
        let right = get_r(arena, node);
        set_right(arena, node, None);
        if let Some(r) = right {
            set_p(arena, r, None);
        }
        (Some(node), right)
    } else {
        let left = get_l(arena, node);
        set_left(arena, node, None);
        if let Some(l) = left {
            set_p(arena, l, None);
        }
        (left, Some(node))
    }
}

/// Joins two trees where every key under `right` is greater than every key
/// under `left`. The ordering is not checked here.
///
/// The maximum of `left` is splayed to its root and `right` is hung off it.
pub fn merge<N: SizedNode>(arena: &mut [N], left: Option<u32>, right: Option<u32>) -> Option<u32> {
    let Some(max) = last(arena, left) else {
        return right;
    };
    let max = splay(arena, max);
    set_right(arena, max, right);
    Some(max)
}

/// Inserts the detached node `node` into the tree at `root`.
///
/// Returns the new root (always `node`) and the position of `node`, which is
/// the number of keys strictly greater than its own.
pub fn insert<N, K, F>(arena: &mut [N], root: Option<u32>, node: u32, key_of: F) -> (u32, usize)
where
    N: SizedNode,
    K: PartialOrd + Clone,
    F: Fn(&N) -> &K,
{
    let boundary = key_of(&arena[node as usize]).clone();
    let (left, right) = split(arena, root, &boundary, key_of);
    set_left(arena, node, left);
    set_right(arena, node, right);
    (node, size_of(arena, right))
}

/// Detaches the node at position `pos` from the tree at `root`.
///
/// Returns `None` (leaving the tree untouched) when `pos` is out of range,
/// otherwise the new root and the detached node index. The detached node's
/// links are cleared and its counter reset to one.
pub fn remove<N: SizedNode>(
    arena: &mut [N],
    root: Option<u32>,
    pos: usize,
) -> Option<(Option<u32>, u32)> {
    let node = find_by_position(arena, root, pos)?;
    let node = splay(arena, node);
    let left = get_l(arena, node);
    let right = get_r(arena, node);
    if let Some(l) = left {
        set_p(arena, l, None);
    }
    if let Some(r) = right {
        set_p(arena, r, None);
    }
    let root = merge(arena, left, right);

    let n = &mut arena[node as usize];
    n.set_l(None);
    n.set_r(None);
    n.set_p(None);
    n.set_size(1);
    Some((root, node))
}
