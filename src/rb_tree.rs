//! The [`RbTree`] sorted multiset and its iterators.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use crate::InvariantViolation;
use crate::raw::{Link, RawRbTree};

mod capacity;
mod node_ref;
mod order_statistic;

pub use node_ref::NodeRef;

/// An ordered multiset based on a red-black tree with subtree sizes.
///
/// Keys are kept in ascending order as determined by [`Ord`]. Equal keys may be
/// inserted any number of times; they sit next to each other in iteration order
/// and [`remove`](RbTree::remove) takes out one of them at a time.
///
/// Every node records how many nodes its subtree holds, so positional queries
/// ([`select`](RbTree::select), [`rank_of`](RbTree::rank_of), [`NodeRef::rank`])
/// run in O(log n) alongside the usual lookups.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key changes while it is in the tree. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated
/// to the `RbTree` that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use rbos_tree::RbTree;
///
/// let mut tree = RbTree::new();
/// tree.insert("pear");
/// tree.insert("apple");
/// tree.insert("fig");
/// tree.insert("apple");
///
/// assert_eq!(tree.len(), 4);
/// assert!(tree.contains("fig"));
///
/// // The smallest key and its neighbor.
/// let first = tree.minimum().unwrap();
/// assert_eq!(*first.key(), "apple");
/// assert_eq!(first.successor().map(|n| *n.key()), Some("apple"));
///
/// // Remove both apples.
/// assert!(tree.remove_all("apple"));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["fig", "pear"]);
/// ```
#[derive(Clone)]
pub struct RbTree<K> {
    raw: RawRbTree<K>,
}

/// An iterator over the keys of an `RbTree` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`RbTree`].
///
/// # Examples
///
/// ```
/// use rbos_tree::RbTree;
///
/// let tree = RbTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: RbTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    span: Span<'a, K>,
}

/// An iterator over a sub-range of keys in an `RbTree`.
///
/// This `struct` is created by the [`range`] method on [`RbTree`].
///
/// # Examples
///
/// ```
/// use rbos_tree::RbTree;
///
/// let tree = RbTree::from([1, 2, 3, 4]);
/// let mut range = tree.range(2..=3);
/// assert_eq!(range.next(), Some(&2));
/// assert_eq!(range.next_back(), Some(&3));
/// assert_eq!(range.next(), None);
/// ```
///
/// [`range`]: RbTree::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K: 'a> {
    span: Span<'a, K>,
}

/// An owning iterator over the keys of an `RbTree` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`RbTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: RbTree#method.into_iter
pub struct IntoIter<K> {
    inner: alloc::vec::IntoIter<K>,
}

// The in-order stretch between two nodes, walked from both ends.
struct Span<'a, K> {
    tree: &'a RawRbTree<K>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, K> Span<'a, K> {
    fn between(tree: &'a RawRbTree<K>, front: Link, back: Link) -> Self {
        let remaining = match (front, back) {
            (Some(f), Some(b)) => (tree.rank(b) + 1).saturating_sub(tree.rank(f)),
            _ => 0,
        };
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(h);
        Some(self.tree.key(h))
    }

    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(h);
        Some(self.tree.key(h))
    }
}

impl<K> Clone for Span<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K> RbTree<K> {
    /// Makes a new, empty `RbTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    ///
    /// // keys can now be inserted into the empty tree
    /// tree.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> RbTree<K> {
        RbTree { raw: RawRbTree::new() }
    }

    /// Returns the number of keys in the tree, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.root().is_none()
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([1, 2]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the node holding the smallest key, or `None` if the tree is empty.
    ///
    /// Among equal smallest keys, the first in iteration order is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.minimum().is_none());
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(*tree.minimum().unwrap().key(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn minimum(&self) -> Option<NodeRef<'_, K>> {
        let root = self.raw.root()?;
        Some(NodeRef::new(&self.raw, self.raw.minimum(root)))
    }

    /// Returns the node holding the largest key, or `None` if the tree is empty.
    ///
    /// Among equal largest keys, the last in iteration order is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([1, 3, 2]);
    /// assert_eq!(*tree.maximum().unwrap().key(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn maximum(&self) -> Option<NodeRef<'_, K>> {
        let root = self.raw.root()?;
        Some(NodeRef::new(&self.raw, self.raw.maximum(root)))
    }

    /// Removes and returns the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([2, 1, 1]);
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(2));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<K> {
        let root = self.raw.root()?;
        let min = self.raw.minimum(root);
        Some(self.raw.remove_handle(min))
    }

    /// Removes and returns the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([1, 3]);
    /// assert_eq!(tree.pop_last(), Some(3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<K> {
        let root = self.raw.root()?;
        let max = self.raw.maximum(root);
        Some(self.raw.remove_handle(max))
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// Reverse it with [`Iterator::rev`] to walk in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([3, 1, 2]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, K> {
        let (front, back) = match self.raw.root() {
            Some(root) => (Some(self.raw.minimum(root)), Some(self.raw.maximum(root))),
            None => (None, None),
        };
        Iter {
            span: Span {
                tree: &self.raw,
                front,
                back,
                remaining: self.len(),
            },
        }
    }

    /// Calls `visit` on every node, each before either of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([1, 2, 3]);
    /// let mut keys = Vec::new();
    /// tree.walk_preorder(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn walk_preorder<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        self.raw.walk_preorder(|h| visit(NodeRef::new(&self.raw, h)));
    }

    /// Calls `visit` on every node, each after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([1, 2, 3]);
    /// let mut keys = Vec::new();
    /// tree.walk_postorder(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn walk_postorder<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        self.raw.walk_postorder(|h| visit(NodeRef::new(&self.raw, h)));
    }
}

impl<K: Ord> RbTree<K> {
    /// Adds a key to the tree. Equal keys already present are kept; the new
    /// one is placed after them in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds the maximum number of nodes its handle
    /// width can address.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K) {
        self.raw.insert(key);
    }

    /// Removes one key equal to `key`. Returns whether such a key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([10, 20, 20]);
    /// assert!(tree.remove(&20));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.remove(&30));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.take(key).is_some()
    }

    /// Removes every key equal to `key`. Returns whether any was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([1, 5, 5, 5, 9]);
    /// assert!(tree.remove_all(&5));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 9]);
    /// assert!(!tree.remove_all(&5));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k log n) for k matching keys.
    pub fn remove_all<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut removed = false;
        while self.remove(key) {
            removed = true;
        }
        removed
    }

    /// Removes one key equal to `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let mut tree = RbTree::from([String::from("a"), String::from("b")]);
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        Some(self.raw.remove_handle(handle))
    }

    /// Finds a node whose key is equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([10, 20, 30]);
    /// let node = tree.search(&20).unwrap();
    /// assert_eq!(*node.key(), 20);
    /// assert_eq!(node.rank(), 2);
    /// assert!(tree.search(&25).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns `true` if the tree contains a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([1, 2, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns a reference to a stored key equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([String::from("x")]);
    /// assert_eq!(tree.get("x").map(String::as_str), Some("x"));
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).map(|h| self.raw.key(h))
    }

    /// Constructs a double-ended iterator over the keys within `range`.
    ///
    /// The range may be written with range syntax (`a..b`, `a..=b`, `a..`, ...)
    /// or as a `(Bound<&Q>, Bound<&Q>)` pair. A range whose start lies after its
    /// end yields nothing. To walk a range in descending order, reverse it.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound::{Excluded, Included};
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([3, 5, 8, 8, 13]);
    /// assert_eq!(tree.range(4..=8).copied().collect::<Vec<_>>(), [5, 8, 8]);
    /// assert_eq!(tree.range(..5).rev().copied().collect::<Vec<_>>(), [3]);
    /// assert_eq!(tree.range((Excluded(&5), Included(&13))).len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; O(1) amortized per step.
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        let front = self.raw.lower_bound(range.start_bound());
        let back = self.raw.upper_bound(range.end_bound());
        Range {
            span: Span::between(&self.raw, front, back),
        }
    }

    /// Audits the tree's structural invariants: in-order keys are
    /// non-decreasing, the root is black, no red node has a red child, every
    /// root-to-leaf path crosses the same number of black nodes, and every
    /// subtree size and parent link is exact.
    ///
    /// A tree built only through this API always passes; the check exists for
    /// tests and debugging.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree: RbTree<u32> = (0..1000).collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.raw.check()
    }
}

impl<K: Hash> Hash for RbTree<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for key in self {
            key.hash(state);
        }
    }
}

impl<K: PartialEq> PartialEq for RbTree<K> {
    fn eq(&self, other: &RbTree<K>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for RbTree<K> {}

impl<K: PartialOrd> PartialOrd for RbTree<K> {
    fn partial_cmp(&self, other: &RbTree<K>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord> Ord for RbTree<K> {
    fn cmp(&self, other: &RbTree<K>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Default for RbTree<K> {
    /// Creates an empty `RbTree`.
    fn default() -> RbTree<K> {
        RbTree::new()
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> RbTree<K> {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: 'a + Ord + Copy> Extend<&'a K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for RbTree<K> {
    /// Converts a `[K; N]` into an `RbTree<K>`.
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree1 = RbTree::from([1, 2, 3, 4]);
    /// let tree2: RbTree<_> = [1, 2, 3, 4].into();
    /// assert_eq!(tree1, tree2);
    /// ```
    fn from(arr: [K; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K> IntoIterator for RbTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Gets an iterator for moving out the `RbTree`'s keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::RbTree;
    ///
    /// let tree = RbTree::from([4, 1, 3, 1]);
    /// let v: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(v, [1, 1, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.span.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.span.next_back()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.span.remaining
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter { span: self.span.clone() }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Range<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.span.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K> DoubleEndedIterator for Range<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.span.next_back()
    }
}

impl<K> ExactSizeIterator for Range<'_, K> {
    fn len(&self) -> usize {
        self.span.remaining
    }
}

impl<K> FusedIterator for Range<'_, K> {}

impl<K> Clone for Range<'_, K> {
    fn clone(&self) -> Self {
        Range { span: self.span.clone() }
    }
}

impl<K: fmt::Debug> fmt::Debug for Range<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K: fmt::Debug> fmt::Debug for IntoIter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
