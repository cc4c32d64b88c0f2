//! Walk-throughs of both trees printed by the `avl-demo` and `bst-demo` commands.

use crate::avltree::AVLTree;
use crate::bst::BinarySearchTree;
use crate::set::SequentialSet;
use anyhow::Result;
use std::io::Write;

const AVL_INSERTS: [i32; 7] = [30, 20, 40, 10, 25, 35, 50];
const AVL_REMOVES: [i32; 3] = [20, 30, 40];

const BST_INSERTS: [i32; 6] = [10, 20, 30, 40, 50, 25];
const BST_REMOVES: [i32; 2] = [40, 10];

fn write_balance_factors<W: Write>(out: &mut W, tree: &AVLTree<i32>) -> Result<()> {
    for (key, factor) in tree.balance_factors() {
        writeln!(out, "Node {} has Balance Factor = {}", key, factor)?;
    }
    Ok(())
}

fn write_in_order<W: Write>(out: &mut W, keys: impl Iterator<Item = i32>) -> Result<()> {
    let keys: Vec<String> = keys.map(|key| key.to_string()).collect();
    writeln!(out, "{}", keys.join(" "))?;
    Ok(())
}

pub fn avl_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut tree: AVLTree<i32> = AVLTree::new();

    writeln!(out, "=== AVL Tree Operations ===")?;

    writeln!(out, "\n--- Insertions ---")?;
    for key in AVL_INSERTS.iter() {
        writeln!(out, "\nInserting {}...", key)?;
        tree.insert(key);
        write!(out, "{}", tree.structure())?;
        writeln!(out, "Balance Factors after insertion:")?;
        write_balance_factors(out, &tree)?;
    }

    writeln!(out, "\n--- Search Tests ---")?;
    writeln!(out, "Find 25: {}", tree.contains(&25))?;
    writeln!(out, "Find 15: {}", tree.contains(&15))?;

    writeln!(out, "\n--- Min and Max Tests ---")?;
    writeln!(out, "Min value: {}", tree.find_min()?)?;
    writeln!(out, "Max value: {}", tree.find_max()?)?;

    writeln!(out, "\n--- Deletion Tests ---")?;
    for key in AVL_REMOVES.iter() {
        writeln!(out, "\nRemoving {}...", key)?;
        tree.remove(key);
        write!(out, "{}", tree.structure())?;
        writeln!(out, "Balance Factors after removal:")?;
        write_balance_factors(out, &tree)?;
    }

    writeln!(out, "\n--- In-Order Traversal ---")?;
    write!(out, "Tree in-order: ")?;
    write_in_order(out, tree.iter().copied())?;

    Ok(())
}

pub fn bst_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();

    for key in BST_INSERTS.iter() {
        tree.insert(key);
    }

    writeln!(out, "BST structure after inserts:")?;
    write!(out, "{}", tree.structure())?;

    writeln!(out, "\nFind 30: {}", tree.contains(&30))?;
    writeln!(out, "Find 15: {}", tree.contains(&15))?;

    writeln!(out, "\nMin value: {}", tree.find_min()?)?;
    writeln!(out, "Max value: {}", tree.find_max()?)?;

    for key in BST_REMOVES.iter() {
        tree.remove(key);
    }

    writeln!(out, "\nBST structure after removals:")?;
    write!(out, "{}", tree.structure())?;
    write!(out, "In-order: ")?;
    write_in_order(out, tree.iter().copied())?;

    Ok(())
}
