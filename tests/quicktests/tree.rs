use std::collections::{BTreeSet, HashSet};

use bstree::tree::Tree;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(*k), set.insert(*k));
            }
            Op::Remove(k) => {
                assert_eq!(tree.remove(k), set.remove(k));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|key| tree.find(key) == Some(key)) && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let deleted: HashSet<_> = deletes.into_iter().collect();

        deleted.iter().all(|x| tree.find(x).is_none())
            && xs
                .iter()
                .filter(|x| !deleted.contains(x))
                .all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn min_agrees_with_in_order_head(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        tree.min() == tree.iter().next()
    }
}
