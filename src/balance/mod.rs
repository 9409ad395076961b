//! Height-balance check for binary trees.
//!
//! A tree is balanced if, for **every** node, the heights of its left and right subtrees
//! differ by at most one. The height of an empty subtree is 0. All checks are a single
//! post-order pass in O(n) time that stops as soon as an imbalanced node is found.
//!
//! The [Strategy] only changes how that stop is signalled and how much stack is used,
//! never the result.

pub(crate) mod recursive;
pub(crate) mod worklist;

use crate::{BalanceError, Nodelike, Strategy};
use tracing_attributes::instrument;

/// Default capacity hint for the worklist stacks
const MAX_DEPTH: usize = 42;

/// Configurable balance check. The default uses [Strategy::Worklist], which is safe on trees
/// of any depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChecker {
    strategy: Strategy,
    max_depth: usize,
}

impl BalanceChecker {
    pub fn new(strategy: Strategy) -> Self {
        BalanceChecker {
            strategy,
            max_depth: MAX_DEPTH,
        }
    }

    /// Expected tree height. Only preallocates memory for [Strategy::Worklist].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Is the tree at `root` balanced? `None` is the empty tree, which is balanced.
    #[instrument(level = "debug", skip_all, fields(strategy = ?self.strategy))]
    pub fn check<Load, N>(&self, root: Option<&N>) -> bool
    where
        N: Nodelike<Load>,
    {
        match self.strategy {
            Strategy::Sentinel => recursive::sentinel_height::<Load, N>(root).is_some(),
            Strategy::Tagged | Strategy::Worklist => self.checked_height::<Load, N>(root).is_ok(),
        }
    }

    /// Height of the tree at `root` if it is balanced, the first imbalance (in post-order)
    /// otherwise
    #[instrument(level = "debug", skip_all, fields(strategy = ?self.strategy))]
    pub fn checked_height<Load, N>(&self, root: Option<&N>) -> Result<usize, BalanceError>
    where
        N: Nodelike<Load>,
    {
        match self.strategy {
            // the sentinel carries no heights to report
            Strategy::Sentinel | Strategy::Tagged => recursive::tagged_height::<Load, N>(root),
            Strategy::Worklist => {
                worklist::post_order_height::<Load, N>(root, self.max_depth, true)
            }
        }
    }
}

impl Default for BalanceChecker {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

/// Is the tree at `root` balanced? Uses the default [BalanceChecker].
pub fn is_balanced<Load, N>(root: Option<&N>) -> bool
where
    N: Nodelike<Load>,
{
    BalanceChecker::default().check::<Load, N>(root)
}

/// Height of the tree at `root` if it is balanced, the first imbalance otherwise
pub fn checked_height<Load, N>(root: Option<&N>) -> Result<usize, BalanceError>
where
    N: Nodelike<Load>,
{
    BalanceChecker::default().checked_height::<Load, N>(root)
}

/// Number of nodes on the longest path from `root` down to a leaf, 0 for the empty tree.
/// Does not recurse, so it is safe on trees of any depth.
#[instrument(level = "debug", skip_all)]
pub fn height<Load, N>(root: Option<&N>) -> usize
where
    N: Nodelike<Load>,
{
    // without fail-fast the traversal cannot fail
    worklist::post_order_height::<Load, N>(root, MAX_DEPTH, false).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryNode;
    use itertools::Itertools;

    type N = BinaryNode<i32>;

    fn leaf(data: i32) -> Option<N> {
        Some(N::new(data))
    }

    fn perfect(height: usize, data: i32) -> Option<N> {
        (height > 0).then(|| {
            N::with_children(
                data,
                perfect(height - 1, 2 * data),
                perfect(height - 1, 2 * data + 1),
            )
        })
    }

    /// Removes the rightmost leaf unless the tree is a single node
    fn prune_rightmost(node: N) -> N {
        let data = *node.data();
        let left = node.left_child().cloned();
        match node.right_child().cloned() {
            Some(right) if !right.is_leaf() => {
                N::with_children(data, left, Some(prune_rightmost(right)))
            }
            _ => N::with_children(data, left, None),
        }
    }

    #[test_log::test]
    fn test_empty_tree() {
        for strategy in Strategy::ALL {
            let checker = BalanceChecker::new(strategy);
            assert!(checker.check::<i32, N>(None));
            assert_eq!(checker.checked_height::<i32, N>(None), Ok(0));
        }
        assert!(is_balanced::<i32, N>(None));
        assert_eq!(height::<i32, N>(None), 0);
    }

    #[test_log::test]
    fn test_local_balance_is_not_enough() {
        // The root has subtrees of equal height but both are imbalanced
        //         1
        //       /   \
        //      2     5
        //     /     /
        //    3     6
        //   /     /
        //  4     7
        let tree = N::with_children(
            1,
            Some(N::new(2).with_left(N::new(3).with_left(N::new(4)))),
            Some(N::new(5).with_left(N::new(6).with_left(N::new(7)))),
        );
        assert_eq!(height(Some(&tree)), 4);
        let results = Strategy::ALL
            .iter()
            .map(|s| BalanceChecker::new(*s).check(Some(&tree)))
            .collect_vec();
        assert_eq!(results, &[false, false, false]);
    }

    #[test_log::test]
    fn test_almost_perfect_trees() {
        for h in 1..=8 {
            let tree = perfect(h, 1).map(prune_rightmost);
            assert_eq!(height(tree.as_ref()), h);
            for strategy in Strategy::ALL {
                let checker = BalanceChecker::new(strategy).with_max_depth(h);
                assert!(checker.check(tree.as_ref()), "height {h}, {strategy:?}");
                assert_eq!(checker.checked_height(tree.as_ref()), Ok(h));
            }
        }
    }

    #[test_log::test]
    fn test_idempotent() {
        let tree = N::with_children(1, Some(N::with_children(2, leaf(3), leaf(4))), None);
        let checker = BalanceChecker::default();
        let first = checker.check(Some(&tree));
        assert!(!first);
        assert!((0..10).all(|_| checker.check(Some(&tree)) == first));
    }

    #[test_log::test]
    fn test_unbounded_depth_hint() {
        let tree = N::new(1).with_right(N::new(2));
        for strategy in Strategy::ALL {
            let checker = BalanceChecker::new(strategy).with_max_depth(usize::MAX);
            assert!(checker.check(Some(&tree)));
            assert!(checker.check(Some(&N::new(1))));
            assert_eq!(checker.checked_height(Some(&tree)), Ok(2));
        }
    }

    #[test]
    fn test_checker_config() {
        let checker = BalanceChecker::default();
        assert_eq!(checker.strategy(), Strategy::Worklist);
        assert_eq!(checker.max_depth(), MAX_DEPTH);

        let checker = BalanceChecker::new(Strategy::Tagged).with_max_depth(7);
        assert_eq!(checker.strategy(), Strategy::Tagged);
        assert_eq!(checker.max_depth(), 7);
    }
}
