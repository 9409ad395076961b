//! Height computations that follow the shape of the tree on the call stack.
//! Recursion depth equals the tree height; see [super::worklist] for deep trees.

use crate::{BalanceError, Nodelike};
use tracing::debug;

/// Height of the subtree or `None` if any node in it is imbalanced.
///
/// The left subtree is evaluated completely before the result is checked, the
/// right subtree is skipped if the left one already failed.
pub(crate) fn sentinel_height<Load, N>(node: Option<&N>) -> Option<usize>
where
    N: Nodelike<Load>,
{
    let node = match node {
        Some(node) => node,
        None => return Some(0),
    };

    let left = sentinel_height::<Load, N>(node.left())?;
    let right = sentinel_height::<Load, N>(node.right())?;

    if left.abs_diff(right) > 1 {
        debug!(left, right, "imbalanced node");
        return None;
    }
    Some(left.max(right) + 1)
}

/// Height of the subtree or the first imbalance found in post-order
pub(crate) fn tagged_height<Load, N>(node: Option<&N>) -> Result<usize, BalanceError>
where
    N: Nodelike<Load>,
{
    match node {
        None => Ok(0),
        Some(node) => {
            let left = tagged_height::<Load, N>(node.left())?;
            let right = tagged_height::<Load, N>(node.right())?;
            BalanceError::combine(left, right).map_err(|err| {
                debug!(%err, "imbalanced node");
                err
            })
        }
    }
}
