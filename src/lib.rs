pub mod avltree;
pub mod bst;
pub mod compare;
pub mod demo;
pub mod error;
pub mod set;
pub mod traverse;
pub mod util;

pub use avltree::AVLTree;
pub use bst::BinarySearchTree;
pub use error::EmptyTree;
pub use set::SequentialSet;
pub use traverse::BinaryNode;
