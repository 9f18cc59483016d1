//! Property-based checks of the tree invariants.

use implicit_splay::SplayTree;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Remove(usize),
    FindValue(i32),
    FindPosition(usize),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-50..50i32).prop_map(Op::Insert),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (-50..50i32).prop_map(Op::FindValue),
        1 => (0..300usize).prop_map(Op::FindPosition),
    ]
}

fn inorder(tree: &SplayTree<i32>) -> Vec<i32> {
    (0..tree.len())
        .rev()
        .map(|p| *tree.get(tree.peek_by_position(p).unwrap()).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn invariants_hold_after_every_op(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let mut tree = SplayTree::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let pos = tree.insert(v);
                    prop_assert_eq!(pos, model.iter().filter(|&&m| m > v).count());
                    let node = tree.find_by_position(pos).unwrap();
                    prop_assert_eq!(tree.get(node), Ok(&v));
                    let at = model.partition_point(|&m| m <= v);
                    model.insert(at, v);
                }
                Op::Remove(p) if !model.is_empty() => {
                    let p = p % model.len();
                    let expected = model.remove(model.len() - 1 - p);
                    prop_assert_eq!(tree.remove(p), Ok(expected));
                }
                Op::Remove(p) => prop_assert!(tree.remove(p).is_err()),
                Op::FindValue(v) => {
                    let found = tree.find_by_value(&v).map(|n| *tree.get(n).unwrap());
                    prop_assert_eq!(found, model.contains(&v).then_some(v));
                }
                Op::FindPosition(p) => {
                    let res = tree.find_by_position(p).map(|n| *tree.get(n).unwrap());
                    match model.len().checked_sub(1 + p) {
                        Some(i) => prop_assert_eq!(res, Ok(model[i])),
                        None => prop_assert!(res.is_err()),
                    }
                }
            }
            prop_assert_eq!(tree.len(), model.len());
            prop_assert!(tree.assert_valid().is_ok());
        }
        prop_assert_eq!(inorder(&tree), model);
    }

    #[test]
    fn split_then_merge_restores_sequence(
        values in prop::collection::vec(-100..100i32, 0..150),
        boundary in -110..110i32,
    ) {
        let mut tree: SplayTree<i32> = values.iter().copied().collect();
        let before = inorder(&tree);

        let (mut left, mut right) = tree.split(&boundary);
        prop_assert!(tree.is_empty());
        prop_assert!(left.assert_valid().is_ok());
        prop_assert!(right.assert_valid().is_ok());
        prop_assert!(inorder(&left).iter().all(|&v| v <= boundary));
        prop_assert!(inorder(&right).iter().all(|&v| v > boundary));

        left.merge(&mut right).unwrap();
        prop_assert!(right.is_empty());
        prop_assert!(left.assert_valid().is_ok());
        prop_assert_eq!(inorder(&left), before);
    }

    #[test]
    fn remove_conserves_the_rest(values in prop::collection::vec(0..20i32, 1..100), pick in any::<usize>()) {
        let mut tree: SplayTree<i32> = values.iter().copied().collect();
        let mut expected = inorder(&tree);
        let pos = pick % tree.len();
        let removed = tree.remove(pos).unwrap();
        prop_assert_eq!(removed, expected.remove(expected.len() - 1 - pos));
        prop_assert_eq!(tree.len(), values.len() - 1);
        prop_assert_eq!(inorder(&tree), expected);
        prop_assert!(tree.assert_valid().is_ok());
    }
}
