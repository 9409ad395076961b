//! Post-order traversal with an explicit stack. Memory for the traversal lives
//! on the heap, so arbitrarily deep (e.g., list-like) trees can be checked.

use crate::{BalanceError, Nodelike};
use tracing::{debug, trace};

/// Upper bound of the depth hint used for preallocation
pub(crate) const MAX_PREALLOCATED_DEPTH: usize = 1 << 16;

/// Work item of the traversal
enum Frame<'a, N> {
    /// Descend into a (possibly absent) subtree
    Enter(Option<&'a N>),
    /// Both subtrees are done, their heights are on top of the height stack
    Combine,
}

/// Computes the height of the tree at `root` in post-order (left before right).
///
/// If `fail_fast` is set, the traversal stops at the first node whose subtree
/// heights differ by more than one and returns that imbalance. Otherwise the plain
/// height is returned and the result is never an error.
///
/// `max_depth` is only a capacity hint for the stacks, clamped to
/// [MAX_PREALLOCATED_DEPTH]. The stacks grow past it as needed.
pub(crate) fn post_order_height<Load, N>(
    root: Option<&N>,
    max_depth: usize,
    fail_fast: bool,
) -> Result<usize, BalanceError>
where
    N: Nodelike<Load>,
{
    let depth = max_depth.min(MAX_PREALLOCATED_DEPTH);
    let mut frames = Vec::with_capacity(2 * depth + 1);
    let mut heights: Vec<usize> = Vec::with_capacity(depth + 1);
    frames.push(Frame::Enter(root));

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(None) => heights.push(0),
            Frame::Enter(Some(node)) => {
                trace!(pending = frames.len(), leaf = node.is_leaf(), "enter");
                frames.push(Frame::Combine);
                frames.push(Frame::Enter(node.right()));
                frames.push(Frame::Enter(node.left()));
            }
            Frame::Combine => {
                let right = heights.pop().expect("Internal error. Missing right subtree height!");
                let left = heights.pop().expect("Internal error. Missing left subtree height!");
                let height = if fail_fast {
                    BalanceError::combine(left, right).map_err(|err| {
                        debug!(%err, skipped = frames.len(), "imbalanced node");
                        err
                    })?
                } else {
                    left.max(right) + 1
                };
                heights.push(height);
            }
        }
    }
    Ok(heights.pop().expect("Internal error. Missing root height!"))
}
