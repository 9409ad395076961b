//! Definition of the interfaces shared by the balance algorithms

/// How a height computation signals that it found an imbalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Recursion returning `None` once an imbalance is found. The left subtree is
    /// always evaluated before deciding whether to descend right.
    Sentinel,
    /// Recursion returning a [crate::BalanceError], propagated with `?`
    Tagged,
    /// Post-order traversal with an explicit stack instead of the call stack.
    /// Safe for deep or skewed trees.
    #[default]
    Worklist,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 3] = [Strategy::Sentinel, Strategy::Tagged, Strategy::Worklist];

    /// Whether the strategy's stack usage grows with the tree height
    pub fn is_recursive(&self) -> bool {
        match self {
            Strategy::Sentinel | Strategy::Tagged => true,
            Strategy::Worklist => false,
        }
    }
}

/// Read-only access to a node of a binary tree holding a `Load`.
///
/// Absent children are `None`. Implementors must form a finite tree; cycles
/// are not detected.
pub trait Nodelike<Load> {
    fn get(&self) -> &Load;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}
