use core::borrow::Borrow;
use core::ops::Index;

use super::{NodeRef, RbTree};
use crate::Rank;

impl<K> RbTree<K> {
    /// Returns the node at one-based position `rank` in sorted order.
    ///
    /// Returns `None` unless `1 <= rank <= self.len()`; in particular an empty
    /// tree has no rank 1. Equal keys occupy consecutive ranks.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([10, 20, 30]);
    /// assert_eq!(*tree.select(2).unwrap().key(), 20);
    /// assert!(tree.select(0).is_none());
    /// assert!(tree.select(4).is_none());
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<NodeRef<'_, K>> {
        self.raw.select(rank).map(|h| NodeRef::new(&self.raw, h))
    }
}

impl<K: Ord> RbTree<K> {
    /// Returns the one-based rank of the first key equal to `key` in sorted
    /// order, or `None` if no such key is present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([10, 20, 20, 30]);
    ///
    /// assert_eq!(tree.rank_of(&20), Some(2));
    /// assert_eq!(tree.rank_of(&30), Some(4));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is zero or greater than the tree's length.
///
/// # Examples
///
/// ```
/// use rbos_tree::{RbTree, Rank};
///
/// let tree = RbTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(2)], 20);
/// ```
impl<K> Index<Rank> for RbTree<K> {
    type Output = K;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).map(|node| node.key()).expect("rank out of bounds")
    }
}
