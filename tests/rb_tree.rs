use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rbos_tree::{NodeRef, RbTree, Rank, rb_tree};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Keys drawn from a narrow range so duplicates are common.
fn key_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

fn keys_of<K: Copy>(tree: &RbTree<K>) -> Vec<K> {
    tree.iter().copied().collect()
}

fn assert_valid<K: Ord>(tree: &RbTree<K>) {
    if let Err(violation) = tree.check_invariants() {
        panic!("tree invariant violated: {violation}");
    }
}

// ─── Sorted-vector model of a multiset ──────────────────────────────────────

#[derive(Default)]
struct Model(Vec<i64>);

impl Model {
    fn insert(&mut self, key: i64) {
        let at = self.0.partition_point(|&k| k <= key);
        self.0.insert(at, key);
    }

    fn remove(&mut self, key: i64) -> bool {
        match self.0.binary_search(&key) {
            Ok(at) => {
                self.0.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    fn remove_all(&mut self, key: i64) -> bool {
        let before = self.0.len();
        self.0.retain(|&k| k != key);
        self.0.len() != before
    }

    fn rank_of(&self, key: i64) -> Option<usize> {
        let at = self.0.partition_point(|&k| k < key);
        (self.0.get(at) == Some(&key)).then_some(at + 1)
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Remove(i64),
    RemoveAll(i64),
    Search(i64),
    Select(usize),
    RankOf(i64),
    Minimum,
    Maximum,
    PopFirst,
    PopLast,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        8 => key_strategy().prop_map(TreeOp::Insert),
        4 => key_strategy().prop_map(TreeOp::Remove),
        1 => key_strategy().prop_map(TreeOp::RemoveAll),
        2 => key_strategy().prop_map(TreeOp::Search),
        2 => (0usize..1_200).prop_map(TreeOp::Select),
        2 => key_strategy().prop_map(TreeOp::RankOf),
        1 => Just(TreeOp::Minimum),
        1 => Just(TreeOp::Maximum),
        1 => Just(TreeOp::PopFirst),
        1 => Just(TreeOp::PopLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Replays a random sequence of operations on both the tree and a sorted
    /// vector, comparing results and re-auditing the tree at every step.
    #[test]
    fn ops_match_sorted_vec_model(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: RbTree<i64> = RbTree::new();
        let mut model = Model::default();

        for op in &ops {
            match *op {
                TreeOp::Insert(k) => {
                    tree.insert(k);
                    model.insert(k);
                }
                TreeOp::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(k), "remove({})", k);
                }
                TreeOp::RemoveAll(k) => {
                    prop_assert_eq!(tree.remove_all(&k), model.remove_all(k), "remove_all({})", k);
                }
                TreeOp::Search(k) => {
                    let found = tree.search(&k).map(|n| *n.key());
                    let expected = model.0.binary_search(&k).ok().map(|_| k);
                    prop_assert_eq!(found, expected, "search({})", k);
                }
                TreeOp::Select(i) => {
                    let selected = tree.select(i).map(|n| *n.key());
                    let expected = i.checked_sub(1).and_then(|at| model.0.get(at)).copied();
                    prop_assert_eq!(selected, expected, "select({})", i);
                }
                TreeOp::RankOf(k) => {
                    prop_assert_eq!(tree.rank_of(&k), model.rank_of(k), "rank_of({})", k);
                }
                TreeOp::Minimum => {
                    prop_assert_eq!(tree.minimum().map(|n| *n.key()), model.0.first().copied());
                }
                TreeOp::Maximum => {
                    prop_assert_eq!(tree.maximum().map(|n| *n.key()), model.0.last().copied());
                }
                TreeOp::PopFirst => {
                    let expected = (!model.0.is_empty()).then(|| model.0.remove(0));
                    prop_assert_eq!(tree.pop_first(), expected);
                }
                TreeOp::PopLast => {
                    prop_assert_eq!(tree.pop_last(), model.0.pop());
                }
            }
            prop_assert_eq!(tree.len(), model.0.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model.0.is_empty());
            prop_assert_eq!(tree.check_invariants(), Ok(()), "invariants after {:?}", op);
        }

        prop_assert_eq!(keys_of(&tree), model.0);
    }

    /// Every in-order position agrees between `select`, `rank` and iteration.
    #[test]
    fn select_matches_inorder_position(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: RbTree<i64> = keys.iter().copied().collect();
        let inorder = keys_of(&tree);

        for (i, key) in inorder.iter().enumerate() {
            let node = tree.select(i + 1).unwrap();
            prop_assert_eq!(node.key(), key);
            prop_assert_eq!(node.rank(), i + 1);
        }
        prop_assert!(tree.select(0).is_none());
        prop_assert!(tree.select(inorder.len() + 1).is_none());
    }

    /// `successor` undoes `predecessor` and vice versa on every interior node.
    #[test]
    fn neighbors_are_inverse(keys in proptest::collection::vec(key_strategy(), 1..TEST_SIZE)) {
        let tree: RbTree<i64> = keys.iter().copied().collect();

        let mut node = tree.minimum();
        while let Some(n) = node {
            if let Some(prev) = n.predecessor() {
                prop_assert_eq!(prev.successor(), Some(n));
            }
            if let Some(next) = n.successor() {
                prop_assert_eq!(next.predecessor(), Some(n));
            }
            node = n.successor();
        }

        prop_assert!(tree.minimum().unwrap().predecessor().is_none());
        prop_assert!(tree.maximum().unwrap().successor().is_none());
    }

    /// Both walks visit every node exactly once and agree on the root.
    #[test]
    fn walks_visit_every_node_once(keys in proptest::collection::vec(key_strategy(), 0..500)) {
        let tree: RbTree<i64> = keys.iter().copied().collect();

        let mut pre = Vec::new();
        tree.walk_preorder(|n| pre.push(*n.key()));
        let mut post = Vec::new();
        tree.walk_postorder(|n| post.push(*n.key()));

        if let Some(first) = pre.first() {
            prop_assert_eq!(Some(first), post.last(), "preorder starts and postorder ends at the root");
        }
        pre.sort_unstable();
        post.sort_unstable();
        prop_assert_eq!(&pre, &keys_of(&tree));
        prop_assert_eq!(&post, &keys_of(&tree));

        let mut root_size = 0;
        tree.walk_preorder(|n| root_size = root_size.max(n.size()));
        prop_assert_eq!(root_size, tree.len());
    }

    /// Ranges agree with filtering the sorted sequence, in both directions.
    #[test]
    fn range_matches_filter(
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
        lo in key_strategy(),
        hi in key_strategy(),
    ) {
        let tree: RbTree<i64> = keys.iter().copied().collect();
        let sorted = keys_of(&tree);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        let expected: Vec<i64> = sorted.iter().copied().filter(|k| (lo..=hi).contains(k)).collect();
        prop_assert_eq!(tree.range(lo..=hi).copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(tree.range(lo..=hi).len(), expected.len());

        let mut descending = expected;
        descending.reverse();
        prop_assert_eq!(tree.range(lo..=hi).rev().copied().collect::<Vec<_>>(), descending);

        let expected: Vec<i64> = sorted.iter().copied().filter(|k| (lo..hi).contains(k)).collect();
        prop_assert_eq!(tree.range(lo..hi).copied().collect::<Vec<_>>(), expected);

        let expected: Vec<i64> = sorted.iter().copied().filter(|&k| k >= lo).collect();
        prop_assert_eq!(tree.range(lo..).copied().collect::<Vec<_>>(), expected);

        let expected: Vec<i64> = sorted.iter().copied().filter(|&k| k <= hi).collect();
        prop_assert_eq!(tree.range(..=hi).copied().collect::<Vec<_>>(), expected);

        prop_assert_eq!(tree.range::<i64, _>(..).copied().collect::<Vec<_>>(), sorted);
    }

    /// Insert 500 random keys, then remove 250 of them in random order,
    /// auditing after every removal.
    #[test]
    fn random_removals_keep_invariants(
        keys in proptest::collection::vec(any::<i64>(), 500),
        picks in proptest::collection::vec(any::<usize>(), 250),
    ) {
        let mut tree: RbTree<i64> = keys.iter().copied().collect();
        let mut remaining = keys;
        assert_valid(&tree);

        for pick in picks {
            let key = remaining.swap_remove(pick % remaining.len());
            let before = tree.len();
            prop_assert!(tree.remove(&key));
            prop_assert_eq!(tree.len(), before - 1);
            assert_valid(&tree);
        }
        prop_assert_eq!(tree.len(), 250);
    }

    /// A key just inserted can always be found again.
    #[test]
    fn search_finds_inserted_keys(keys in proptest::collection::vec(any::<u32>(), 1..TEST_SIZE)) {
        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert(key);
            let node = tree.search(&key);
            prop_assert_eq!(node.map(|n| *n.key()), Some(key));
        }
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn ascending_inserts_then_order_statistics() {
    let mut tree = RbTree::new();
    for key in 1..=200 {
        tree.insert(key);
    }

    assert_eq!(tree.len(), 200);
    assert_eq!(tree.select(100).map(|n| *n.key()), Some(100));
    assert_eq!(tree.maximum().map(|n| *n.key()), Some(200));
    assert_eq!(tree.minimum().map(|n| *n.key()), Some(1));
    assert_eq!(tree[Rank(200)], 200);
    assert_valid(&tree);
}

#[test]
fn remove_from_the_middle() {
    let mut tree = RbTree::from([10, 20, 30, 40, 50]);

    assert!(tree.remove(&30));
    assert_eq!(tree.len(), 4);
    assert!(tree.search(&30).is_none());
    assert_eq!(keys_of(&tree), [10, 20, 40, 50]);
    assert_valid(&tree);
}

#[test]
fn empty_tree_reports_nothing() {
    let tree: RbTree<i64> = RbTree::new();

    assert!(tree.search(&42).is_none());
    assert!(tree.minimum().is_none());
    assert!(tree.maximum().is_none());
    assert!(tree.select(1).is_none());
    assert_eq!(tree.rank_of(&42), None);
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.range(0..10).next(), None);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn remove_missing_key_leaves_tree_untouched() {
    let mut tree = RbTree::from([1, 2, 3]);
    assert!(!tree.remove(&4));
    assert!(!tree.remove_all(&0));
    assert_eq!(keys_of(&tree), [1, 2, 3]);
}

#[test]
fn duplicates_are_kept_and_removed_one_at_a_time() {
    let mut tree = RbTree::from([7, 7, 7, 3]);

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.rank_of(&7), Some(2));
    assert!(tree.remove(&7));
    assert_eq!(keys_of(&tree), [3, 7, 7]);
    assert!(tree.remove_all(&7));
    assert_eq!(keys_of(&tree), [3]);
    assert_valid(&tree);
}

/// Keeps the `size` largest keys seen so far by evicting the minimum.
fn offer_bounded(tree: &mut RbTree<i64>, size: usize, key: i64) {
    if tree.len() < size {
        tree.insert(key);
        return;
    }
    let smallest = tree.minimum().map(|n| *n.key());
    if smallest.is_some_and(|min| min < key) {
        tree.pop_first();
        tree.insert(key);
    }
}

#[test]
fn bounded_tree_keeps_the_largest_keys() {
    let source: RbTree<i64> = (1..=200).collect();
    let mut top = RbTree::new();
    for &key in &source {
        offer_bounded(&mut top, 5, key);
    }

    assert_eq!(top.len(), 5);
    assert_eq!(top.iter().rev().copied().collect::<Vec<_>>(), [200, 199, 198, 197, 196]);
    assert_valid(&top);
}

#[test]
fn string_keys_descend_through_predecessors() {
    let words = ["kiwi", "apple", "mango", "fig", "banana", "cherry", "date", "lime"];
    let tree: RbTree<String> = words.iter().map(|w| (*w).to_string()).collect();

    let max = tree.maximum().unwrap();
    let mut descending = vec![max.to_string()];
    let mut node = max.predecessor();
    while let Some(n) = node {
        descending.push(n.to_string());
        node = n.predecessor();
    }

    let mut expected: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    expected.sort();
    expected.reverse();
    assert_eq!(descending, expected);
    assert!(tree.contains("fig"));
    assert_eq!(tree.get("lime").map(String::as_str), Some("lime"));
}

#[test]
fn node_refs_compare_by_identity() {
    let tree = RbTree::from([5, 5]);
    let first: NodeRef<'_, i32> = tree.select(1).unwrap();
    let second = tree.select(2).unwrap();

    assert_eq!(first.key(), second.key());
    assert_ne!(first, second);
    assert_eq!(first.successor(), Some(second));
    assert_eq!(format!("{first}"), "5");
}

#[test]
fn into_iter_drains_in_order() {
    let tree = RbTree::from([3, 1, 2, 1]);
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 1, 2]);
}

#[test]
fn iterators_are_exact_size() {
    let tree: RbTree<u16> = (0..100).collect();
    let iter: rb_tree::Iter<'_, u16> = tree.iter();
    assert_eq!(iter.len(), 100);
    let range: rb_tree::Range<'_, u16> = tree.range(10..20);
    assert_eq!(range.len(), 10);
    assert_eq!(range.last(), Some(&19));
}

#[test]
fn clear_then_reuse() {
    let mut tree: RbTree<i32> = (0..50).collect();
    tree.clear();
    assert!(tree.is_empty());
    tree.insert(9);
    assert_eq!(keys_of(&tree), [9]);
    assert_valid(&tree);
}

#[test]
#[should_panic(expected = "rank out of bounds")]
fn index_by_rank_zero_panics() {
    let tree = RbTree::from([1]);
    let _ = std::hint::black_box(tree[Rank(0)]);
}
