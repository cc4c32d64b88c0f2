use crate::util::collect_ordered;
use crate::util::set::{assert_empty, stress_sequential, stress_sequential_with};
use treecmp::bst::BinarySearchTree;
use treecmp::{BinaryNode, SequentialSet};

fn build(keys: &[i32]) -> BinarySearchTree<i32> {
    let mut bst: BinarySearchTree<i32> = BinarySearchTree::new();
    for key in keys {
        assert!(bst.insert(key));
    }
    bst
}

#[test]
fn test_insert_lookup_bst() {
    let keys = [50, 30, 70, 20, 40, 60, 80];
    let bst = build(&keys);

    for key in keys.iter() {
        assert_eq!(bst.find(key).map(|node| node.key()), Some(key));
    }
    assert!(bst.find(&45).is_none());
    assert_eq!(bst.height(), 3);
    assert_eq!(bst.root().map(|node| *node.key()), Some(50));
}

#[test]
fn test_sorted_insert_makes_chain() {
    let bst = build(&[10, 20, 30, 40, 50]);

    assert_eq!(bst.height(), 5);

    // every node only has a right child
    let mut node = bst.root();
    let mut keys = Vec::new();
    while let Some(current) = node {
        assert!(current.left().is_none());
        keys.push(*current.key());
        node = current.right();
    }
    assert_eq!(keys, vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_remove_bst() {
    /* make tree like this
     *
     *     10
     *        20
     *           30
     *        25     40
     *                  50
     */
    let mut bst = build(&[10, 20, 30, 40, 50, 25]);

    assert!(bst.remove(&40)); // remove when the node has only right node
    assert!(bst.remove(&10)); // remove the root that has only right node
    assert!(!bst.remove(&10));

    assert_eq!(bst.root().map(|node| *node.key()), Some(20));
    assert_eq!(bst.structure().to_string(), "    50\n  30\n    25\n20\n");
    assert_eq!(bst.iter().copied().collect::<Vec<_>>(), vec![20, 25, 30, 50]);

    assert!(bst.remove(&30)); // remove when the node has two nodes
    assert_eq!(bst.structure().to_string(), "  50\n    25\n20\n");

    assert!(bst.remove(&50)); // remove when the node has only left node
    assert_eq!(bst.iter().copied().collect::<Vec<_>>(), vec![20, 25]);
}

#[test]
fn test_remove_successor_with_right_child() {
    /*       5                 6
     *    2     8     ->    2     8
     *        6   9             7   9
     *          7
     */
    let mut bst = build(&[5, 2, 8, 6, 9, 7]);

    assert!(bst.remove(&5));
    assert_eq!(bst.root().map(|node| *node.key()), Some(6));
    assert_eq!(
        collect_ordered(bst.root())
            .into_iter()
            .copied()
            .collect::<Vec<_>>(),
        vec![2, 6, 7, 8, 9]
    );
}

#[test]
fn test_empty_bst() {
    let mut bst: BinarySearchTree<i32> = BinarySearchTree::new();
    assert_empty(&bst);
    assert!(bst.is_empty());
    assert!(!bst.remove(&3));
    assert!(bst.find(&3).is_none());
    assert_eq!(bst.iter().count(), 0);

    assert!(bst.insert(&3));
    assert!(bst.remove(&3));
    assert_empty(&bst);
}

#[test]
fn test_duplicate_insert() {
    let mut bst = build(&[20, 10, 25]);

    assert!(!bst.insert(&25));
    assert_eq!(bst.iter().copied().collect::<Vec<_>>(), vec![10, 20, 25]);
    assert_eq!(bst.height(), 2);
}

#[test]
fn test_min_max() {
    let bst = build(&[10, 20, 30, 40, 50, 25]);

    assert_eq!(bst.find_min(), Ok(&10));
    assert_eq!(bst.find_max(), Ok(&50));
}

#[test]
fn test_drop_long_chain() {
    let mut bst: BinarySearchTree<i32> = BinarySearchTree::new();

    // descending keys make a chain leaning to the left
    for i in (0..1000).rev() {
        assert!(bst.insert(&i));
    }

    assert_eq!(bst.root().map(|root| *root.key()), Some(999));
    assert_eq!(bst.height(), 1000);
    assert_eq!(bst.find_min(), Ok(&0));
    drop(bst);
}

const CHAIN: i32 = 10_000;

#[test]
fn test_long_chain_insert_remove() {
    // a chain this deep must be walked by loops, not one call frame per node
    let mut bst: BinarySearchTree<i32> = BinarySearchTree::new();
    for i in 0..CHAIN {
        assert!(bst.insert(&i));
    }
    assert!(!bst.insert(&(CHAIN - 1)));

    assert_eq!(bst.height(), CHAIN as usize);
    assert_eq!(bst.find_min(), Ok(&0));
    assert_eq!(bst.find_max(), Ok(&(CHAIN - 1)));
    assert!(bst.contains(&(CHAIN / 2)));
    assert!(bst.iter().copied().eq(0..CHAIN));

    let debug = format!("{:?}", bst);
    assert!(debug.starts_with("{0, 1, 2"));
    assert!(debug.ends_with(&format!("{}}}", CHAIN - 1)));

    // from the deep end first, then from the root
    for i in (CHAIN / 2..CHAIN).rev() {
        assert!(bst.remove(&i));
    }
    assert_eq!(bst.height(), (CHAIN / 2) as usize);
    for i in 0..CHAIN / 2 {
        assert!(bst.remove(&i));
        assert!(!bst.remove(&i));
    }
    assert_empty(&bst);
}

#[test]
fn test_long_chain_remove_two_childs() {
    let mut bst: BinarySearchTree<i32> = BinarySearchTree::new();
    for i in 0..CHAIN {
        assert!(bst.insert(&(2 * i)));
    }

    // odd keys give the bottom of the chain a left child to keep
    assert!(bst.insert(&(2 * CHAIN - 3)));
    assert!(bst.remove(&(2 * CHAIN - 2)));
    assert!(bst.remove(&(2 * CHAIN - 4)));
    assert_eq!(bst.find_max(), Ok(&(2 * CHAIN - 3)));

    // the deep node has both childs, its successor comes from the right
    let deep = 2 * CHAIN - 8;
    assert!(bst.insert(&(deep - 1)));
    assert!(bst.remove(&deep));
    let node = bst.find(&(deep + 2)).map(|node| {
        (node.left().map(|left| *left.key()), node.right().map(|right| *right.key()))
    });
    assert_eq!(node, Some((Some(deep - 1), Some(deep + 5))));

    let keys = bst.iter().copied().collect::<Vec<_>>();
    assert_eq!(keys.len(), (CHAIN - 1) as usize);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!bst.contains(&deep));

    for key in keys.iter().rev() {
        assert!(bst.remove(key));
    }
    assert_empty(&bst);
}

#[test]
fn stress_bst() {
    stress_sequential::<String, BinarySearchTree<_>>(100_000);
}

#[test]
fn stress_bst_order() {
    stress_sequential_with::<i32, BinarySearchTree<_>, _>(20_000, |bst, reference| {
        let keys = collect_ordered(bst.root());
        assert!(keys.into_iter().eq(reference.iter()));
        assert!(bst.iter().eq(reference.iter()));
    });
}
