use std::cmp::Ordering;

use crate::types::SizedNode;
use crate::util::{first, get_l, get_p, get_r, get_size, next, size_of};

/// Checks every structural invariant of the tree at `root`:
///
/// - the root has no parent and every child points back to its parent;
/// - each counter equals one plus the counters of its children;
/// - keys read in order never decrease.
///
/// Equal keys may sit on either side of each other: a rotation over two
/// equal nodes turns a left child into a parent with an equal right child.
///
/// Walks with an explicit stack, so chain-shaped trees of any depth are fine.
pub fn assert_splay_tree<N, K, F>(arena: &[N], root: Option<u32>, key_of: F) -> Result<(), String>
where
    N: SizedNode,
    K: PartialOrd,
    F: Fn(&N) -> &K,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if order.len() >= arena.len() {
            return Err("Cycle in child links".to_string());
        }
        order.push(node);
        for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(format!("Broken parent link on child {child} of {node}"));
            }
            stack.push(child);
        }
    }

    // Children always come after their parent in `order`.
    let mut counted = vec![0usize; arena.len()];
    for &node in order.iter().rev() {
        let l = get_l(arena, node).map_or(0, |i| counted[i as usize]);
        let r = get_r(arena, node).map_or(0, |i| counted[i as usize]);
        counted[node as usize] = 1 + l + r;
        let actual = get_size(arena, node);
        if actual != counted[node as usize] {
            return Err(format!(
                "Size mismatch at {node}: expected {}, got {actual}",
                counted[node as usize]
            ));
        }
    }

    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        let succ = next(arena, i);
        if let Some(s) = succ {
            let (a, b) = (key_of(&arena[i as usize]), key_of(&arena[s as usize]));
            if !matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal)) {
                return Err(format!("Node order violated between {i} and {s}"));
            }
        }
        curr = succ;
    }

    if size_of(arena, Some(root)) != order.len() {
        return Err("Root size does not match reachable node count".to_string());
    }
    Ok(())
}
