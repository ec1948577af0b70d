use thiserror::Error;

/// A broken structural invariant, reported by [`RbTree::check_invariants`].
///
/// Slots identify nodes by their position in the tree's internal storage;
/// ranks are one-based positions in sorted order.
///
/// [`RbTree::check_invariants`]: crate::RbTree::check_invariants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node is colored red.
    #[error("root node is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("red node at slot {slot} has a red child")]
    RedChildOfRed {
        /// The red parent.
        slot: usize,
    },

    /// Two paths below a node cross a different number of black nodes.
    #[error("black height differs below slot {slot}: left {left}, right {right}")]
    BlackHeightMismatch {
        /// The node whose subtrees disagree.
        slot: usize,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// A node's stored subtree size is not one plus its children's sizes.
    #[error("size mismatch at slot {slot}: stored {stored}, counted {counted}")]
    SizeMismatch {
        /// The node carrying the stale size.
        slot: usize,
        /// The size stored in the node.
        stored: usize,
        /// The size computed from its children.
        counted: usize,
    },

    /// A child's parent link does not point back at its parent.
    #[error("parent link of slot {slot} does not point at its parent")]
    BrokenParentLink {
        /// The child whose back-reference is wrong.
        slot: usize,
    },

    /// A key compares less than the key before it in order.
    #[error("key at rank {rank} is less than its predecessor")]
    OutOfOrder {
        /// Rank of the misplaced key.
        rank: usize,
    },

    /// The node count disagrees with the number of allocated nodes.
    #[error("tree reports {len} keys but holds {allocated} nodes")]
    LenMismatch {
        /// Size recorded at the root.
        len: usize,
        /// Live nodes in storage.
        allocated: usize,
    },
}
