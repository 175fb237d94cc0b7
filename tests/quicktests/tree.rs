use bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// removes and rotations we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
            Op::RotateLeft(x) => {
                bst.rotate_left(x);
            }
            Op::RotateRight(x) => {
                bst.rotate_right(x);
            }
        }
    }
}

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().eq(set.iter()) && tree.node_count() == set.len()
}

#[quickcheck]
fn in_order_is_strictly_increasing(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let values: Vec<_> = tree.in_order().collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn node_count_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.node_count() == distinct.len()
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = tree.copy();
    for x in &xs {
        tree.insert(*x);
    }

    tree == before
}

#[quickcheck]
fn mirror_is_an_involution(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mirrored = tree.mirror();

    mirrored.mirror() == tree && tree.is_mirror(&mirrored) && mirrored.is_mirror(&tree)
}

#[quickcheck]
fn mirror_keeps_size_and_height(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mirrored = tree.mirror();

    let mut reversed: Vec<_> = tree.in_order().collect();
    reversed.reverse();

    mirrored.node_count() == tree.node_count()
        && mirrored.height() == tree.height()
        && mirrored.in_order().eq(reversed)
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let tree = build(&xs);
    let before: Vec<_> = tree.pre_order().copied().collect();

    let mut copy = tree.copy();
    for x in &extra {
        copy.insert(*x);
    }
    for x in &xs {
        copy.remove(x);
    }

    tree.pre_order().copied().eq(before)
}

#[quickcheck]
fn same_shape_for_shifted_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let shifted: Tree<i16> = xs.iter().map(|&x| i16::from(x) + 1000).collect();

    tree.compare_structure(&shifted)
}

#[quickcheck]
fn rotation_round_trip(xs: Vec<i8>, target: i8) -> bool {
    let mut tree = build(&xs);
    let original = tree.copy();

    // A node's left child, if it has one, directly follows it in pre-order. Anything else that
    // follows it is larger.
    let pre_order: Vec<_> = tree.pre_order().copied().collect();
    let promoted = pre_order
        .iter()
        .position(|&x| x == target)
        .and_then(|i| pre_order.get(i + 1))
        .copied()
        .filter(|&x| x < target);

    match (tree.rotate_right(&target), promoted) {
        (true, Some(promoted)) => {
            if !tree.rotate_left(&promoted) {
                return false;
            }
        }
        (false, None) => {}
        _ => return false,
    }

    tree == original
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted = |values: Vec<i8>| {
        let mut values = values;
        values.sort_unstable();
        values
    };
    let in_order: Vec<_> = tree.in_order().copied().collect();

    sorted(tree.pre_order().copied().collect()) == in_order
        && sorted(tree.post_order().copied().collect()) == in_order
        && sorted(tree.level_order().copied().collect()) == in_order
        && tree.levels().len() as isize == tree.height() + 1
}
