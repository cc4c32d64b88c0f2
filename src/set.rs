use crate::error::EmptyTree;

pub trait SequentialSet<K: Ord + Clone> {
    fn new() -> Self;

    /// Insert the key into the set.
    ///
    /// If the key was not there, return true.
    /// If the key already exists, the set is left unchanged and return false.
    fn insert(&mut self, key: &K) -> bool;

    /// Lookup the key from the set.
    fn contains(&self, key: &K) -> bool;

    /// Remove the key from the set.
    ///
    /// If success, return true.
    /// If the key does not exist, the set is left unchanged and return false.
    fn remove(&mut self, key: &K) -> bool;

    /// Get the smallest key, or Err(EmptyTree) if the set has no keys.
    fn find_min(&self) -> Result<&K, EmptyTree>;

    /// Get the greatest key, or Err(EmptyTree) if the set has no keys.
    fn find_max(&self) -> Result<&K, EmptyTree>;

    /// Get the height of the underlying tree. An empty tree has height 0.
    fn height(&self) -> usize;
}
