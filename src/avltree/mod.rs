use crate::error::EmptyTree;
use crate::set::SequentialSet;
use crate::some_or;
use crate::traverse::{BinaryNode, InOrder, Nodes, Structure};
use log::trace;
use std::{
    cmp::{max, Ordering},
    fmt::{self, Debug},
};

/// Height-balanced binary search tree.
///
/// After every insert and remove, each node on the visited path renews its
/// height and is rebalanced by rotations, so the height stays O(log n).
pub struct AVLTree<K> {
    root: Option<Box<Node<K>>>,
}

impl<K: Debug> Debug for AVLTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AVLTree").field("root", &self.root).finish()
    }
}

#[derive(Debug)]
pub struct Node<K> {
    key: K,
    height: isize,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

/// height of the subtree, 0 if absent
fn height_of<K>(node: &Option<Box<Node<K>>>) -> isize {
    if let Some(node) = node {
        node.height
    } else {
        0
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Node<K> {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// get the height of the subtree rooted at the node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// get difference of the heights from the childs (left - right)
    pub fn balance_factor(&self) -> isize {
        self.get_factor()
    }

    /// renew the height of the node from the childs
    fn renew_height(&mut self) {
        self.height = max(height_of(&self.left), height_of(&self.right)) + 1;
    }

    fn get_factor(&self) -> isize {
        height_of(&self.left) - height_of(&self.right)
    }

    fn leftmost(&self) -> &Node<K> {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Node<K> {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// rotate left the node
    ///
    /// Change Parent-Right Child to Left Child-Parent, then return new parent(old right child).
    /// The old parent's height is renewed first since the new parent's height depends on it.
    fn rotate_left(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut new_parent = some_or!(node.right.take(), return node);
        node.right = new_parent.left.take();
        node.renew_height();

        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    /// rotate right the node
    ///
    /// Change Left Child-Parent to Parent-Right Child, then return new parent(old left child).
    fn rotate_right(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut new_parent = some_or!(node.left.take(), return node);
        node.left = new_parent.right.take();
        node.renew_height();

        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }
}

impl<K: Debug> Node<K> {
    /// rebalance the node by the rule of AVL, then return the new root of the subtree
    ///
    /// The node's height must be renewed before. A left-right (or right-left) shape is
    /// first turned into left-left (right-right) by rotating the child.
    fn balance(mut node: Box<Node<K>>) -> Box<Node<K>> {
        match node.get_factor() {
            factor if factor > 1 => {
                let child_factor = node.left.as_ref().map_or(0, |left| left.get_factor());

                if child_factor < 0 {
                    trace!("rotate left at {:?} (left-right)", node.left.as_ref().map(|left| &left.key));
                    node.left = node.left.take().map(Node::rotate_left);
                }

                trace!("rotate right at {:?}", node.key);
                Node::rotate_right(node)
            }
            factor if factor < -1 => {
                let child_factor = node.right.as_ref().map_or(0, |right| right.get_factor());

                if child_factor > 0 {
                    trace!("rotate right at {:?} (right-left)", node.right.as_ref().map(|right| &right.key));
                    node.right = node.right.take().map(Node::rotate_right);
                }

                trace!("rotate left at {:?}", node.key);
                Node::rotate_left(node)
            }
            _ => node,
        }
    }
}

impl<K> BinaryNode for Node<K> {
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn annotate(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " (h={})", self.height)
    }
}

impl<K> AVLTree<K>
where
    K: Ord + Clone + Debug,
{
    /// insert the key under the node, then return the new root of the subtree
    fn insert_node(node: Option<Box<Node<K>>>, key: &K, inserted: &mut bool) -> Box<Node<K>> {
        let mut node = some_or!(node, {
            *inserted = true;
            return Box::new(Node::new(key.clone()));
        });

        match key.cmp(&node.key) {
            Ordering::Less => node.left = Some(Self::insert_node(node.left.take(), key, inserted)),
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), key, inserted))
            }
            Ordering::Equal => return node,
        }

        node.renew_height();
        Node::balance(node)
    }

    /// remove the key under the node, then return the new root of the subtree
    ///
    /// The node that has two childs takes the key of its in-order successor, and the
    /// successor is removed from the right subtree instead.
    fn remove_node(
        node: Option<Box<Node<K>>>,
        key: &K,
        removed: &mut bool,
    ) -> Option<Box<Node<K>>> {
        let mut node = node?;

        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), key, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), key, removed),
            Ordering::Equal => {
                *removed = true;

                match (node.left.take(), node.right.take()) {
                    (None, right) => return right,
                    (left, None) => return left,
                    (Some(left), Some(right)) => {
                        let successor = right.leftmost().key.clone();
                        trace!("replace {:?} with successor {:?}", node.key, successor);

                        node.left = Some(left);
                        node.right = Self::remove_node(Some(right), &successor, removed);
                        node.key = successor;
                    }
                }
            }
        }

        node.renew_height();
        Some(Node::balance(node))
    }

    fn find_node<'a>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>> {
        let node = node?;

        match key.cmp(&node.key) {
            Ordering::Less => Self::find_node(node.left.as_deref(), key),
            Ordering::Greater => Self::find_node(node.right.as_deref(), key),
            Ordering::Equal => Some(node),
        }
    }

    /// find the node that has the key
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        Self::find_node(self.root.as_deref(), key)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// get the root node, if any
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// iterate the keys in ascending order
    pub fn iter(&self) -> InOrder<'_, Node<K>> {
        InOrder::new(self.root.as_deref())
    }

    /// iterate the keys in ascending order with the balance factor of their node
    pub fn balance_factors(&self) -> impl Iterator<Item = (&K, isize)> + Clone + '_ {
        Nodes::new(self.root.as_deref()).map(|node| (&node.key, node.get_factor()))
    }

    /// printable sideways dump of the tree, each key followed by its height
    pub fn structure(&self) -> Structure<'_, Node<K>> {
        Structure::new(self.root.as_deref())
    }
}

impl<K> SequentialSet<K> for AVLTree<K>
where
    K: Ord + Clone + Debug,
{
    fn new() -> Self {
        AVLTree { root: None }
    }

    fn insert(&mut self, key: &K) -> bool {
        let mut inserted = false;
        self.root = Some(Self::insert_node(self.root.take(), key, &mut inserted));

        inserted
    }

    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn remove(&mut self, key: &K) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), key, &mut removed);

        removed
    }

    fn find_min(&self) -> Result<&K, EmptyTree> {
        let root = self.root.as_deref().ok_or(EmptyTree)?;
        Ok(&root.leftmost().key)
    }

    fn find_max(&self) -> Result<&K, EmptyTree> {
        let root = self.root.as_deref().ok_or(EmptyTree)?;
        Ok(&root.rightmost().key)
    }

    fn height(&self) -> usize {
        height_of(&self.root) as usize
    }
}

impl<K> Default for AVLTree<K>
where
    K: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for &'a AVLTree<K>
where
    K: Ord + Clone + Debug,
{
    type Item = &'a K;
    type IntoIter = InOrder<'a, Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
