/*! Owned binary tree node. The root node is the tree. */

use crate::{balance, BalanceError, Nodelike};
use core::fmt;

/// A node in a binary tree. Children are owned by their parent, so a tree
/// built from these nodes is always finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<Load> {
    /// The user-defined load that the node owns. Not inspected by any algorithm.
    data: Load,
    left: Option<Box<BinaryNode<Load>>>,
    right: Option<Box<BinaryNode<Load>>>,
}

impl<Load> BinaryNode<Load> {
    /// Creates a leaf
    pub fn new(data: Load) -> Self {
        BinaryNode {
            data,
            left: None,
            right: None,
        }
    }

    /// Creates a node with zero, one or two children
    pub fn with_children(
        data: Load,
        left: Option<BinaryNode<Load>>,
        right: Option<BinaryNode<Load>>,
    ) -> Self {
        BinaryNode {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replaces the left child
    pub fn with_left(mut self, child: BinaryNode<Load>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Replaces the right child
    pub fn with_right(mut self, child: BinaryNode<Load>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn data(&self) -> &Load {
        &self.data
    }

    pub fn left_child(&self) -> Option<&BinaryNode<Load>> {
        self.left.as_deref()
    }

    pub fn right_child(&self) -> Option<&BinaryNode<Load>> {
        self.right.as_deref()
    }

    /// Is the tree at this node balanced? Uses the default [crate::Strategy].
    pub fn is_balanced(&self) -> bool {
        balance::is_balanced(Some(self))
    }

    /// Number of nodes on the longest path from this node down to a leaf
    pub fn height(&self) -> usize {
        balance::height(Some(self))
    }

    /// Height of the tree at this node, or the first imbalance found
    pub fn checked_height(&self) -> Result<usize, BalanceError> {
        balance::checked_height(Some(self))
    }
}

impl<Load> Nodelike<Load> for BinaryNode<Load> {
    fn get(&self) -> &Load {
        &self.data
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

// The default drop glue recurses once per level and overflows on list-like trees
impl<Load> Drop for BinaryNode<Load> {
    fn drop(&mut self) {
        let mut stack = self.left.take().into_iter().chain(self.right.take()).collect::<Vec<_>>();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<Load> From<Load> for BinaryNode<Load> {
    fn from(data: Load) -> Self {
        BinaryNode::new(data)
    }
}

/// Draws the tree top-down, one node per line, children indented below
/// their parent and tagged with their side.
impl<Load> fmt::Display for BinaryNode<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self, 0usize, "")];
        while let Some((node, depth, side)) = stack.pop() {
            writeln!(f, "{:indent$}{}{}", "", side, node.data, indent = 2 * depth)?;
            // right first so that the left child is drawn first
            if let Some(right) = node.right_child() {
                stack.push((right, depth + 1, "R: "));
            }
            if let Some(left) = node.left_child() {
                stack.push((left, depth + 1, "L: "));
            }
        }
        Ok(())
    }
}
