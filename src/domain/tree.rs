//! Binary search tree built by sequential insertion.
//!
//! Insertion order fully determines the shape: there is no rebalancing, so
//! ascending input degenerates into a right-leaning chain and descending input
//! into a left-leaning one. Equal values are silently discarded.

use std::cmp::Ordering;

use tracing::{instrument, trace};

/// One position in the tree.
///
/// Children are owned, so every node except the root has exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i32,
    /// Subtree holding values strictly less than `value`
    left: Option<Box<Node>>,
    /// Subtree holding values strictly greater than `value`
    right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Insert `value` below `node` and return the (possibly new) subtree root.
    ///
    /// An absent position becomes a new leaf. Smaller values descend left,
    /// greater values descend right, and an equal value leaves the subtree
    /// unchanged.
    pub fn insert(node: Option<Box<Node>>, value: i32) -> Box<Node> {
        let Some(mut node) = node else {
            return Box::new(Node::leaf(value));
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left = Some(Node::insert(node.left.take(), value)),
            Ordering::Greater => node.right = Some(Node::insert(node.right.take(), value)),
            Ordering::Equal => trace!(value, "duplicate discarded"),
        }
        node
    }

    fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }

    fn depth(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Node::depth)
            .max(self.right().map_or(0, Node::depth))
    }

    fn collect_in_order(&self, values: &mut Vec<i32>) {
        if let Some(left) = self.left() {
            left.collect_in_order(values);
        }
        values.push(self.value);
        if let Some(right) = self.right() {
            right.collect_in_order(values);
        }
    }

    fn within(&self, lower: Option<i32>, upper: Option<i32>) -> bool {
        if lower.is_some_and(|lo| self.value <= lo) || upper.is_some_and(|hi| self.value >= hi) {
            return false;
        }
        self.left()
            .map_or(true, |left| left.within(lower, Some(self.value)))
            && self
                .right()
                .map_or(true, |right| right.within(Some(self.value), upper))
    }
}

/// A binary search tree, empty until the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, value: i32) {
        self.root = Some(Node::insert(self.root.take(), value));
    }

    /// Number of nodes, i.e. distinct values inserted.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.collect_in_order(&mut values);
        }
        values
    }

    /// Check the ordering invariant over the whole tree: everything left of a
    /// node is strictly smaller, everything right of it strictly greater.
    pub fn is_valid_bst(&self) -> bool {
        self.root().map_or(true, |root| root.within(None, None))
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Build a tree by inserting `values` in order. An empty slice yields an empty tree.
#[instrument(level = "debug", skip(values), fields(count = values.len()))]
pub fn build_tree(values: &[i32]) -> Tree {
    let tree: Tree = values.iter().copied().collect();
    trace!(nodes = tree.len(), depth = tree.depth(), "tree built");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_into_absent_position_creates_leaf() {
        let node = Node::insert(None, 5);
        assert_eq!(node.value(), 5);
        assert!(node.is_leaf());
    }

    #[test]
    fn insert_equal_value_returns_subtree_unchanged() {
        let node = Node::insert(Some(Box::new(Node::leaf(5))), 5);
        assert_eq!(*node, Node::leaf(5));
    }

    #[test]
    fn insert_smaller_and_greater_attach_on_correct_side() {
        let node = Node::insert(Node::insert(Some(Box::new(Node::leaf(5))), 3).into(), 8);
        assert_eq!(node.left().map(Node::value), Some(3));
        assert_eq!(node.right().map(Node::value), Some(8));
    }

    #[test]
    fn empty_tree_has_no_depth_and_is_valid() {
        let tree = Tree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.is_valid_bst());
        assert!(tree.in_order().is_empty());
    }

    #[test]
    fn validity_check_rejects_misplaced_grandchild() {
        // 6 is greater than the root but sits in its left subtree
        let bad = Tree {
            root: Some(Box::new(Node {
                value: 5,
                left: Some(Box::new(Node {
                    value: 3,
                    left: None,
                    right: Some(Box::new(Node::leaf(6))),
                })),
                right: None,
            })),
        };
        assert!(!bad.is_valid_bst());
    }
}
