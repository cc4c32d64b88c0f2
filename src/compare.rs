//! Timing of the AVL tree against the unbalanced BST.
//!
//! Every phase runs on freshly built trees so that one phase never pays for the
//! shape another phase left behind.

use crate::avltree::AVLTree;
use crate::bst::BinarySearchTree;
use crate::set::SequentialSet;
use crate::util::random::Random;
use log::{debug, info};
use rand::Rng;
use std::{
    convert::TryFrom,
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};

pub const DEFAULT_SIZES: [usize; 3] = [1000, 5000, 10000];

/// the most keys `sorted_keys` can produce without repeating an `i32`
pub const MAX_SIZE: usize = i32::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InsertSorted,
    InsertRandom,
    SearchRandom,
    RemoveRandom,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::InsertSorted,
        Phase::InsertRandom,
        Phase::SearchRandom,
        Phase::RemoveRandom,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::InsertSorted => "Insertion (sorted data)",
            Phase::InsertRandom => "Insertion (random data)",
            Phase::SearchRandom => "Search (random data)",
            Phase::RemoveRandom => "Removal (random data)",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub phase: Phase,
    pub avl: Duration,
    pub bst: Duration,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub size: usize,
    pub timings: Vec<Timing>,
    /// heights after inserting the sorted keys
    pub avl_height: usize,
    pub bst_height: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Testing with n = {} ---", self.size)?;

        for timing in &self.timings {
            writeln!(f, "{}:", timing.phase)?;
            writeln!(f, "  AVL   : {} ns", timing.avl.as_nanos())?;
            writeln!(f, "  BST   : {} ns", timing.bst.as_nanos())?;
        }

        writeln!(f, "Height after sorted insertion:")?;
        writeln!(f, "  AVL   : {}", self.avl_height)?;
        write!(f, "  BST   : {}", self.bst_height)
    }
}

/// parse a number of keys from the command line, rejecting more than `MAX_SIZE`
pub fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|err| format!("{}", err))?;

    if size > MAX_SIZE {
        return Err(format!("at most {} keys are supported", MAX_SIZE));
    }
    Ok(size)
}

fn key_bound(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// keys 0, 1, ..., n - 1
///
/// `n` is capped at `MAX_SIZE`.
pub fn sorted_keys(n: usize) -> Vec<i32> {
    (0..key_bound(n)).collect()
}

/// n keys drawn uniformly from [0, i32::MAX). The keys may repeat.
pub fn random_keys<R: Rng>(n: usize, rng: &mut R) -> Vec<i32> {
    (0..n).map(|_| i32::gen(rng)).collect()
}

fn fill<M: SequentialSet<i32>>(keys: &[i32]) -> M {
    let mut tree = M::new();
    for key in keys {
        tree.insert(key);
    }
    tree
}

/// time inserting the keys into an empty tree, then return the tree as well
pub fn time_insert<M: SequentialSet<i32>>(keys: &[i32]) -> (Duration, M) {
    let mut tree = M::new();

    let start = Instant::now();
    for key in keys {
        black_box(tree.insert(key));
    }
    let duration = start.elapsed();

    (duration, tree)
}

/// time looking up each key in a tree already holding all of them
pub fn time_search<M: SequentialSet<i32>>(keys: &[i32]) -> Duration {
    let tree: M = fill(keys);

    let start = Instant::now();
    for key in keys {
        black_box(tree.contains(key));
    }
    start.elapsed()
}

/// time removing each key from a tree already holding all of them
pub fn time_remove<M: SequentialSet<i32>>(keys: &[i32]) -> Duration {
    let mut tree: M = fill(keys);

    let start = Instant::now();
    for key in keys {
        black_box(tree.remove(key));
    }
    start.elapsed()
}

/// run every phase for both trees on `size` keys
pub fn compare<R: Rng>(size: usize, rng: &mut R) -> Report {
    info!("comparing AVL tree and BST with {} keys", size);

    let sorted = sorted_keys(size);
    let random = random_keys(size, rng);

    let mut timings = Vec::with_capacity(Phase::ALL.len());
    let mut heights = (0, 0);

    for phase in Phase::ALL.iter().copied() {
        let (avl, bst) = match phase {
            Phase::InsertSorted => {
                let (avl, avl_tree) = time_insert::<AVLTree<i32>>(&sorted);
                let (bst, bst_tree) = time_insert::<BinarySearchTree<i32>>(&sorted);
                heights = (avl_tree.height(), bst_tree.height());

                (avl, bst)
            }
            Phase::InsertRandom => (
                time_insert::<AVLTree<i32>>(&random).0,
                time_insert::<BinarySearchTree<i32>>(&random).0,
            ),
            Phase::SearchRandom => (
                time_search::<AVLTree<i32>>(&random),
                time_search::<BinarySearchTree<i32>>(&random),
            ),
            Phase::RemoveRandom => (
                time_remove::<AVLTree<i32>>(&random),
                time_remove::<BinarySearchTree<i32>>(&random),
            ),
        };

        debug!("{}: AVL {:?}, BST {:?}", phase, avl, bst);
        timings.push(Timing { phase, avl, bst });
    }

    Report {
        size,
        timings,
        avl_height: heights.0,
        bst_height: heights.1,
    }
}
