/// A one-based rank into the sorted order of an [`RbTree`](crate::RbTree).
///
/// `Rank(1)` is the smallest key and `Rank(tree.len())` the largest.
///
/// # Examples
///
/// ```
/// use rbos_tree::{RbTree, Rank};
///
/// let tree = RbTree::from([30, 10, 20]);
///
/// assert_eq!(tree[Rank(1)], 10);
/// assert_eq!(tree[Rank(3)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
