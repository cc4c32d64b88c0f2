use std::fmt;

/// Read-only view of a tree node, shared by the AVL tree and the plain BST.
pub trait BinaryNode {
    type Key;

    fn key(&self) -> &Self::Key;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    /// write the per-node suffix of the structure dump (nothing by default)
    fn annotate(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Lazy in-order walk over the nodes of a tree.
///
/// The stack holds the left edge of the subtree still to be visited, so the
/// walk never holds more than `height` nodes at once.
pub struct Nodes<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode + 'a> Nodes<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut nodes = Nodes { stack: Vec::new() };
        nodes.push_left_edge(root);
        nodes
    }

    fn push_left_edge(&mut self, mut node: Option<&'a N>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, N> Clone for Nodes<'a, N> {
    fn clone(&self) -> Self {
        Nodes {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, N: BinaryNode + 'a> Iterator for Nodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());

        Some(node)
    }
}

/// Lazy in-order walk over the keys of a tree, in ascending order.
pub struct InOrder<'a, N> {
    nodes: Nodes<'a, N>,
}

impl<'a, N: BinaryNode + 'a> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        InOrder {
            nodes: Nodes::new(root),
        }
    }
}

impl<'a, N> Clone for InOrder<'a, N> {
    fn clone(&self) -> Self {
        InOrder {
            nodes: self.nodes.clone(),
        }
    }
}

impl<'a, N: BinaryNode + 'a> Iterator for InOrder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.key())
    }
}

/// Sideways dump of a tree: right subtree first, one node per line, indented
/// by two spaces per level.
///
/// ```text
///     50
///   40
/// 30
///   20
/// ```
pub struct Structure<'a, N> {
    root: Option<&'a N>,
}

impl<'a, N> Structure<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        Structure { root }
    }
}

impl<'a, N> Structure<'a, N>
where
    N: BinaryNode,
    N::Key: fmt::Display,
{
    fn write_node(f: &mut fmt::Formatter<'_>, node: &N, level: usize) -> fmt::Result {
        if let Some(right) = node.right() {
            Self::write_node(f, right, level + 1)?;
        }

        write!(f, "{:indent$}{}", "", node.key(), indent = level * 2)?;
        node.annotate(f)?;
        writeln!(f)?;

        if let Some(left) = node.left() {
            Self::write_node(f, left, level + 1)?;
        }

        Ok(())
    }
}

impl<'a, N> fmt::Display for Structure<'a, N>
where
    N: BinaryNode,
    N::Key: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => Self::write_node(f, root, 0),
            None => Ok(()),
        }
    }
}
