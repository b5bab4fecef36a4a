use std::fmt::Debug;

use proptest::prelude::*;

use crate::{
    node::{balance, height},
    AvlTree,
};

/// The upper bound of values generated by [`arbitrary_op()`].
const VALUE_MAX: usize = 20;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(usize),
    Contains(usize),
    Remove(usize),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    // A small value domain encourages multiple operations to act on the
    // same value.
    prop_oneof![
        (0..VALUE_MAX).prop_map(Op::Insert),
        (0..VALUE_MAX).prop_map(Op::Contains),
        (0..VALUE_MAX).prop_map(Op::Remove),
    ]
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<T>(t: &AvlTree<T>)
where
    T: Ord + Debug,
{
    let root = match t.root_node() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a value strictly less
        // than this node.
        assert!(n.left().map(|v| v.value() < n.value()).unwrap_or(true));

        // Invariant 2: the right child always contains a value strictly
        // greater than this node.
        assert!(n.right().map(|v| v.value() > n.value()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, with an absent child having a height of 0.
        let want_height = 1 + height(n.left()).max(height(n.right()));

        assert_eq!(
            n.height(),
            want_height,
            "expect node with value {:?} to have height {}, has {}",
            n.value(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance(n).abs();
        assert!(
            balance <= 1,
            "balance={balance}, node={n:?}, stack={stack:?}"
        );
    }

    assert_eq!(n_nodes, t.len());

    // Invariants 1 & 2 are local to each parent/child edge - the in-order
    // traversal asserts the ordering holds across the whole tree, which also
    // implies no value appears twice.
    let values = t.iter().collect::<Vec<_>>();
    for window in values.windows(2) {
        assert!(window[0] < window[1], "{:?} >= {:?}", window[0], window[1]);
    }
}
