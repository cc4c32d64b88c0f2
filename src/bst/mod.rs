use crate::error::EmptyTree;
use crate::set::SequentialSet;
use crate::some_or;
use crate::traverse::{BinaryNode, InOrder, Structure};
use log::trace;
use std::{
    cmp::{max, Ordering},
    fmt::{self, Debug},
};

/// Unbalanced binary search tree.
///
/// There is no rebalancing: inserting sorted keys makes a chain whose height is the
/// number of keys.
pub struct BinarySearchTree<K> {
    root: Option<Box<Node<K>>>,
}

impl<K: Ord + Clone + Debug> Debug for BinarySearchTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // keys in order rather than nested nodes, a chain would recurse once per key
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K: Debug> Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left.as_ref().map(|left| &left.key))
            .field("right", &self.right.as_ref().map(|right| &right.key))
            .finish()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Node<K> {
        Node {
            key,
            left: None,
            right: None,
        }
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
}

impl<K> BinarySearchTree<K>
where
    K: Ord + Clone + Debug,
{
    /// walk down from the root to the link that holds the key, or to the empty link
    /// where the key belongs
    ///
    /// The order is decided on a shared borrow first, so the mutable borrow of the link
    /// is only taken when the walk goes on.
    fn search_link<'a>(
        mut link: &'a mut Option<Box<Node<K>>>,
        key: &K,
    ) -> &'a mut Option<Box<Node<K>>> {
        loop {
            let ordering = some_or!(link.as_deref().map(|node| key.cmp(&node.key)), return link);

            match ordering {
                Ordering::Less => link = &mut some_or!(link, return link).left,
                Ordering::Greater => link = &mut some_or!(link, return link).right,
                Ordering::Equal => return link,
            }
        }
    }

    /// detach the node that has the smallest key under the link, relinking its right child
    fn take_min(mut link: &mut Option<Box<Node<K>>>) -> Option<Box<Node<K>>> {
        while link.as_deref().map_or(false, |node| node.left.is_some()) {
            link = &mut some_or!(link, return None).left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    fn height_node(root: Option<&Node<K>>) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = root.into_iter().map(|node| (node, 1)).collect();

        while let Some((node, depth)) = stack.pop() {
            height = max(height, depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// find the node that has the key
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }

        None
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

    /// printable sideways dump of the tree
    pub fn structure(&self) -> Structure<'_, Node<K>> {
        Structure::new(self.root.as_deref())
    }
}

impl<K> SequentialSet<K> for BinarySearchTree<K>
where
    K: Ord + Clone + Debug,
{
    fn new() -> Self {
        BinarySearchTree { root: None }
    }

    fn insert(&mut self, key: &K) -> bool {
        let link = Self::search_link(&mut self.root, key);
        if link.is_some() {
            return false;
        }

        *link = Some(Box::new(Node::new(key.clone())));
        true
    }

    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn remove(&mut self, key: &K) -> bool {
        let link = Self::search_link(&mut self.root, key);
        let mut node = some_or!(link.take(), return false);

        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => {
                // take over the in-order successor's key, then drop the successor
                let mut right = Some(right);
                let successor = some_or!(Self::take_min(&mut right), return false);
                trace!("replace {:?} with successor {:?}", node.key, successor.key);

                node.key = successor.key;
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };

        true
    }

    fn find_min(&self) -> Result<&K, EmptyTree> {
        let root = self.root.as_deref().ok_or(EmptyTree)?;
        Ok(&root.leftmost().key)
    }

    fn find_max(&self) -> Result<&K, EmptyTree> {
        let root = self.root.as_deref().ok_or(EmptyTree)?;
        Ok(&root.rightmost().key)
    }

    /// The height is not stored, so this walks the whole tree.
    fn height(&self) -> usize {
        Self::height_node(self.root.as_deref())
    }
}

impl<K> Default for BinarySearchTree<K>
where
    K: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for &'a BinarySearchTree<K>
where
    K: Ord + Clone + Debug,
{
    type Item = &'a K;
    type IntoIter = InOrder<'a, Node<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Drop for BinarySearchTree<K> {
    fn drop(&mut self) {
        // a chain from sorted inserts is as deep as the tree is large, so unlink the
        // nodes one by one instead of letting the boxes drop recursively.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
