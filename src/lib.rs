//! ## About
//!
//! This crate answers a single question about a binary tree: is it *height-balanced*? That is,
//! do the heights of the left and right subtrees differ by at most one for every node (the
//! balance property of [AVL trees](https://en.wikipedia.org/wiki/AVL_tree))?
//!
//! It is not a tree library. Trees are built once from [BinaryNode]s (or any type implementing
//! [Nodelike]) and only read afterwards.
//!
//! ```
//! use balanced_tree::BinaryNode as N;
//!
//! //     1
//! //    / \
//! //   2   4
//! //  /
//! // 3
//! let tree = N::with_children(1, Some(N::new(2).with_left(N::new(3))), Some(N::new(4)));
//! assert!(tree.is_balanced());
//!
//! //   1
//! //  /
//! // 2
//! //  \
//! //   3
//! let tree = N::new(1).with_left(N::new(2).with_right(N::new(3)));
//! assert!(!tree.is_balanced());
//! ```
//!
//! The default check walks the tree with an explicit stack, so arbitrarily deep trees are fine.
//! See [BalanceChecker] for choosing one of the recursive strategies instead.

pub mod balance;
pub mod errors;
pub mod node;
pub mod tree;

pub use balance::{checked_height, height, is_balanced, BalanceChecker};
pub use errors::BalanceError;
pub use node::BinaryNode;
pub use tree::{Nodelike, Strategy};
