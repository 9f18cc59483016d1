//! Debug rendering of a tree shape.

use std::fmt::Display;

use crate::node::SplayNode;

/// Renders the subtree at `root`, one node per line as `value [size]`.
///
/// Left children are marked `←`, right children `→`. Walks with an explicit
/// stack so chain-shaped trees do not exhaust the call stack.
pub fn print<T: Display>(arena: &[SplayNode<T>], root: Option<u32>, tab: &str) -> String {
    let mut out = String::new();
    let Some(root) = root else {
        return out;
    };
    let mut stack = vec![(root, tab.to_string(), "└─")];
    while let Some((idx, tab, side)) = stack.pop() {
        let n = &arena[idx as usize];
        out.push_str(&format!("\n{tab}{side} {} [{}]", n.v, n.size));
        let child_tab = format!("{tab}  ");
        if let Some(r) = n.r {
            stack.push((r, child_tab.clone(), "→"));
        }
        if let Some(l) = n.l {
            stack.push((l, child_tab, "←"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::SplayTree;

    #[test]
    fn prints_left_before_right() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(3);
        tree.insert(2);
        assert_eq!(tree.to_string(""), "SplayTree\n└─ 2 [3]\n  ← 1 [1]\n  → 3 [1]");
        assert_eq!(SplayTree::<i32>::new().to_string(""), "SplayTree ∅");
    }
}
