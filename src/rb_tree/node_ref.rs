use core::fmt;
use core::ptr;

use crate::raw::{Handle, RawRbTree};

/// A shared handle to one node of an [`RbTree`](crate::RbTree).
///
/// A `NodeRef` borrows the tree, so it stays valid for as long as it exists:
/// the tree cannot be modified while any node handle is alive. From a node you
/// can read its key, the size of its subtree, its rank, and step to its
/// in-order neighbors.
///
/// Two `NodeRef`s are equal when they refer to the same node of the same tree,
/// regardless of key equality.
///
/// # Examples
///
/// ```
/// use rbos_tree::RbTree;
///
/// let tree = RbTree::from([10, 20, 30]);
/// let middle = tree.search(&20).unwrap();
///
/// assert_eq!(middle.to_string(), "20");
/// assert_eq!(middle.predecessor().map(|n| *n.key()), Some(10));
/// assert_eq!(middle.successor().unwrap().predecessor(), Some(middle));
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a RawRbTree<K>,
    handle: Handle,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a RawRbTree<K>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    /// Returns the node's key.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.tree.key(self.handle)
    }

    /// Returns the number of nodes in the subtree rooted at this node,
    /// including itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree: RbTree<u32> = (1..=7).collect();
    /// let smallest = tree.minimum().unwrap();
    /// assert_eq!(smallest.size(), 1);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        self.tree.size(Some(self.handle))
    }

    /// Returns the node that follows this one in order, or `None` if this is
    /// the last node.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case; O(1) amortized over a full walk.
    #[must_use]
    pub fn successor(&self) -> Option<NodeRef<'a, K>> {
        self.tree.successor(self.handle).map(|h| NodeRef::new(self.tree, h))
    }

    /// Returns the node that precedes this one in order, or `None` if this is
    /// the first node.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case; O(1) amortized over a full walk.
    #[must_use]
    pub fn predecessor(&self) -> Option<NodeRef<'a, K>> {
        self.tree.predecessor(self.handle).map(|h| NodeRef::new(self.tree, h))
    }

    /// Returns the one-based position of this node in sorted order.
    ///
    /// This is the inverse of [`RbTree::select`](crate::RbTree::select).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from(['c', 'a', 'b']);
    /// let node = tree.search(&'c').unwrap();
    /// assert_eq!(node.rank(), 3);
    /// assert_eq!(tree.select(node.rank()), Some(node));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn rank(&self) -> usize {
        self.tree.rank(self.handle)
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Display> fmt::Display for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.key(), f)
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("size", &self.size())
            .finish()
    }
}
