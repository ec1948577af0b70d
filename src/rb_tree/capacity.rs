use super::RbTree;
use crate::raw::RawRbTree;

impl<K> RbTree<K> {
    /// Creates an empty tree with room for at least `capacity` keys before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = RbTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RbTree {
            raw: RawRbTree::with_capacity(capacity),
        }
    }

    /// Returns the number of keys the tree can hold without reallocating its
    /// node storage.
    ///
    /// Slots freed by removals are reused by later insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::with_capacity(32);
    /// tree.insert(1);
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
