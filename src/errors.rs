//! Provides the error type returned by the tagged height computation.

use thiserror::Error;

/// Failure of a height computation. Being imbalanced is a regular
/// outcome of [crate::is_balanced]; this type only shows up when the
/// heights themselves are requested via [crate::checked_height].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceError {
    /// The first node (in post-order) whose subtrees differ in height by more than one
    #[error("Subtree heights differ by more than one (left: {left}, right: {right})")]
    Imbalanced { left: usize, right: usize },
}

impl BalanceError {
    /// Checks two sibling heights, returns the parent's height if they are balanced
    pub(crate) fn combine(left: usize, right: usize) -> Result<usize, Self> {
        if left.abs_diff(right) > 1 {
            Err(BalanceError::Imbalanced { left, right })
        } else {
            Ok(left.max(right) + 1)
        }
    }
}
