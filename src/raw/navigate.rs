use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::Bound;

use super::handle::Handle;
use super::node::{Link, Side};
use super::raw_rb_tree::RawRbTree;

impl<K> RawRbTree<K> {
    /// Leftmost node of the subtree rooted at `subtree`.
    pub(crate) fn minimum(&self, subtree: Handle) -> Handle {
        self.extreme(subtree, Side::Left)
    }

    /// Rightmost node of the subtree rooted at `subtree`.
    pub(crate) fn maximum(&self, subtree: Handle) -> Handle {
        self.extreme(subtree, Side::Right)
    }

    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(next) = self.node(handle).child(side) {
            handle = next;
        }
        handle
    }

    /// Next node in order, or `NIL` after the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Link {
        self.step(handle, Side::Right)
    }

    /// Previous node in order, or `NIL` before the minimum.
    pub(crate) fn predecessor(&self, handle: Handle) -> Link {
        self.step(handle, Side::Left)
    }

    // Successor when `side` is `Right`, predecessor when `Left`.
    fn step(&self, mut handle: Handle, side: Side) -> Link {
        if let Some(child) = self.node(handle).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            if self.node(p).child(side) != Some(handle) {
                return Some(p);
            }
            handle = p;
            parent = self.node(p).parent();
        }
        None
    }

    /// The `rank`-th smallest node, counting from 1.
    pub(crate) fn select(&self, mut rank: usize) -> Link {
        if rank == 0 || rank > self.len() {
            return None;
        }
        let mut cursor = self.root();
        while let Some(h) = cursor {
            let here = self.size(self.left(cursor)) + 1;
            match rank.cmp(&here) {
                Ordering::Equal => return cursor,
                Ordering::Less => cursor = self.left(cursor),
                Ordering::Greater => {
                    rank -= here;
                    cursor = self.node(h).right();
                }
            }
        }
        debug_assert!(false, "`RawRbTree::select()` - size invariant violated!");
        None
    }

    /// One-based position of `handle` in order.
    pub(crate) fn rank(&self, handle: Handle) -> usize {
        let mut rank = self.size(self.node(handle).left()) + 1;
        let mut child = handle;
        while let Some(parent) = self.node(child).parent() {
            if self.node(parent).right() == Some(child) {
                rank += self.size(self.node(parent).left()) + 1;
            }
            child = parent;
        }
        rank
    }
}

impl<K: Ord> RawRbTree<K> {
    /// First node equal to `key` met on the way down from the root.
    pub(crate) fn search<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.root();
        while let Some(h) = cursor {
            cursor = match key.cmp(self.key(h).borrow()) {
                Ordering::Equal => return cursor,
                Ordering::Less => self.node(h).left(),
                Ordering::Greater => self.node(h).right(),
            };
        }
        None
    }

    /// One-based rank of the leftmost node equal to `key`.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.root();
        let mut before = 0;
        let mut found = None;
        while let Some(h) = cursor {
            let here = before + self.size(self.node(h).left()) + 1;
            match key.cmp(self.key(h).borrow()) {
                Ordering::Equal => {
                    found = Some(here);
                    cursor = self.node(h).left();
                }
                Ordering::Less => cursor = self.node(h).left(),
                Ordering::Greater => {
                    before = here;
                    cursor = self.node(h).right();
                }
            }
        }
        found
    }

    /// Leftmost node whose key lies at or after `bound`.
    pub(crate) fn lower_bound<Q>(&self, bound: Bound<&Q>) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let root = self.root()?;
        let inside = |key: &K| {
            let key: &Q = key.borrow();
            match bound {
                Bound::Included(b) => key >= b,
                Bound::Excluded(b) => key > b,
                Bound::Unbounded => true,
            }
        };
        self.boundary(root, Side::Left, inside)
    }

    /// Rightmost node whose key lies at or before `bound`.
    pub(crate) fn upper_bound<Q>(&self, bound: Bound<&Q>) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let root = self.root()?;
        let inside = |key: &K| {
            let key: &Q = key.borrow();
            match bound {
                Bound::Included(b) => key <= b,
                Bound::Excluded(b) => key < b,
                Bound::Unbounded => true,
            }
        };
        self.boundary(root, Side::Right, inside)
    }

    // The extreme node toward `side` among those for which `inside` holds, given
    // that `inside` is monotone along the in-order sequence.
    fn boundary(&self, root: Handle, side: Side, inside: impl Fn(&K) -> bool) -> Link {
        let mut cursor = Some(root);
        let mut best = None;
        while let Some(h) = cursor {
            if inside(self.key(h)) {
                best = Some(h);
                cursor = self.node(h).child(side);
            } else {
                cursor = self.node(h).child(side.opposite());
            }
        }
        best
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawRbTree<i32> {
        let mut tree = RawRbTree::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let tree: RawRbTree<i32> = RawRbTree::new();
        assert_eq!(tree.search(&1), None);
        assert_eq!(tree.select(1), None);
        assert_eq!(tree.select(0), None);
        assert_eq!(tree.rank_of(&1), None);
        assert_eq!(tree.lower_bound(Bound::<&i32>::Unbounded), None);
    }

    #[test]
    fn successor_and_predecessor_stop_at_the_ends() {
        let tree = tree_of(&[3, 1, 2]);
        let root = tree.root().unwrap();
        let min = tree.minimum(root);
        let max = tree.maximum(root);
        assert_eq!(*tree.key(min), 1);
        assert_eq!(*tree.key(max), 3);
        assert_eq!(tree.predecessor(min), None);
        assert_eq!(tree.successor(max), None);
    }

    #[test]
    fn rank_of_duplicates_is_leftmost() {
        let tree = tree_of(&[4, 4, 1, 4, 9, 4]);
        assert_eq!(tree.rank_of(&4), Some(2));
        assert_eq!(tree.rank_of(&9), Some(6));
        assert_eq!(tree.rank_of(&5), None);
    }

    #[test]
    fn bounds_respect_inclusion() {
        let tree = tree_of(&[10, 20, 30, 40]);
        let key = |link: Link| link.map(|h| *tree.key(h));
        assert_eq!(key(tree.lower_bound(Bound::Included(&20))), Some(20));
        assert_eq!(key(tree.lower_bound(Bound::Excluded(&20))), Some(30));
        assert_eq!(key(tree.lower_bound(Bound::Included(&41))), None);
        assert_eq!(key(tree.upper_bound(Bound::Included(&30))), Some(30));
        assert_eq!(key(tree.upper_bound(Bound::Excluded(&30))), Some(20));
        assert_eq!(key(tree.upper_bound(Bound::Excluded(&10))), None);
    }

    proptest! {
        #[test]
        fn select_and_rank_agree_with_sorted_order(mut keys in prop::collection::vec(-100i32..100, 0..300)) {
            let tree = tree_of(&keys);
            keys.sort_unstable();

            prop_assert_eq!(tree.select(keys.len() + 1), None);
            for (i, expected) in keys.iter().enumerate() {
                let h = tree.select(i + 1).unwrap();
                prop_assert_eq!(tree.key(h), expected);
                prop_assert_eq!(tree.rank(h), i + 1);
            }
        }

        #[test]
        fn successor_walk_visits_every_node(keys in prop::collection::vec(any::<i16>(), 1..300)) {
            let tree = tree_of(&keys.iter().map(|&k| i32::from(k)).collect::<Vec<_>>());
            let root = tree.root().unwrap();

            let mut forward = Vec::new();
            let mut cursor = Some(tree.minimum(root));
            while let Some(h) = cursor {
                if let Some(next) = tree.successor(h) {
                    prop_assert_eq!(tree.predecessor(next), Some(h));
                }
                forward.push(*tree.key(h));
                cursor = tree.successor(h);
            }

            let mut sorted: Vec<i32> = keys.iter().map(|&k| i32::from(k)).collect();
            sorted.sort_unstable();
            prop_assert_eq!(forward, sorted);
        }
    }
}
