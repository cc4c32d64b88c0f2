use thiserror::Error;

/// Returned by `find_min` and `find_max` when the tree has no nodes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tree is empty")]
pub struct EmptyTree;
