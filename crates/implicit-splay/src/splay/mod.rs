//! Rotations and the bottom-up splay procedure.
//!
//! Both rotations keep subtree counters exact in O(1): only the demoted node
//! and the promoted child change their counts, and the count of the parent
//! above them stays what it was.

use crate::types::SizedNode;
use crate::util::{get_l, get_p, get_r, get_size, is_left_child, put_size, set_p, size_of};

/// Re-points whichever child link of `p` referred to `old` at `new`.
///
/// Bypasses the counter bookkeeping of `set_left` / `set_right` on purpose:
/// a rotation below `p` never changes how many nodes `p` holds.
fn replace_child<N: SizedNode>(arena: &mut [N], p: u32, old: u32, new: u32) {
    if get_l(arena, p) == Some(old) {
        arena[p as usize].set_l(Some(new));
    } else {
        arena[p as usize].set_r(Some(new));
    }
}

/// Promotes the right child `c` of `node` above it.
///
/// ```text
///   node              c
///  /    \           /   \
/// a      c   →   node    d
///       / \      /  \
///      b   d    a    b
/// ```
///
/// No-op when `node` has no right child.
pub fn rotate_left<N: SizedNode>(arena: &mut [N], node: u32) {
    let Some(c) = get_r(arena, node) else {
        return;
    };
    let node_size = get_size(arena, node);
    let c_size = get_size(arena, c);
    let p = get_p(arena, node);
    if let Some(p) = p {
        replace_child(arena, p, node, c);
    }
    set_p(arena, c, p);

    let b = get_l(arena, c);
    arena[c as usize].set_l(Some(node));
    set_p(arena, node, Some(c));
    arena[node as usize].set_r(b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }

    let b_size = size_of(arena, b);
    put_size(arena, node, node_size - c_size + b_size);
    put_size(arena, c, node_size);
}

/// Promotes the left child `c` of `node` above it. Mirror of [`rotate_left`].
pub fn rotate_right<N: SizedNode>(arena: &mut [N], node: u32) {
    let Some(c) = get_l(arena, node) else {
        return;
    };
    let node_size = get_size(arena, node);
    let c_size = get_size(arena, c);
    let p = get_p(arena, node);
    if let Some(p) = p {
        replace_child(arena, p, node, c);
    }
    set_p(arena, c, p);

    let b = get_r(arena, c);
    arena[c as usize].set_r(Some(node));
    set_p(arena, node, Some(c));
    arena[node as usize].set_l(b);
    if let Some(b) = b {
        set_p(arena, b, Some(node));
    }

    let b_size = size_of(arena, b);
    put_size(arena, node, node_size - c_size + b_size);
    put_size(arena, c, node_size);
}

/// Splays `node` up until it has no parent and returns it as the new root.
///
/// - zig: the parent is the root, a single rotation finishes;
/// - zig-zig: `node` and its parent lean the same way, rotate the
///   grandparent first, then the parent;
/// - zig-zag: they lean opposite ways, rotate the parent first, then the
///   grandparent.
pub fn splay<N: SizedNode>(arena: &mut [N], node: u32) -> u32 {
    while let Some(p) = get_p(arena, node) {
        let node_left = is_left_child(arena, node);
        let Some(g) = get_p(arena, p) else {
            if node_left {
                rotate_right(arena, p);
            } else {
                rotate_left(arena, p);
            }
            break;
        };
        let p_left = is_left_child(arena, p);
        match (p_left, node_left) {
            (true, true) => {
                rotate_right(arena, g);
                rotate_right(arena, p);
            }
            (false, false) => {
                rotate_left(arena, g);
                rotate_left(arena, p);
            }
            (true, false) => {
                rotate_left(arena, p);
                rotate_right(arena, g);
            }
            (false, true) => {
                rotate_right(arena, p);
                rotate_left(arena, g);
            }
        }
    }
    node
}
