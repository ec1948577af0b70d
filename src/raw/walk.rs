use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_rb_tree::RawRbTree;

// Red-black height stays below 2·log2(n + 1), so this rarely spills to the heap.
type Stack<T> = SmallVec<[T; 64]>;

impl<K> RawRbTree<K> {
    /// Visits each node before either of its subtrees.
    pub(crate) fn walk_preorder(&self, mut visit: impl FnMut(Handle)) {
        let mut stack: Stack<Handle> = self.root().into_iter().collect();
        while let Some(h) = stack.pop() {
            visit(h);
            let node = self.node(h);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Visits each node after both of its subtrees.
    pub(crate) fn walk_postorder(&self, mut visit: impl FnMut(Handle)) {
        // `true` marks a node whose children have already been pushed.
        let mut stack: Stack<(Handle, bool)> = self.root().map(|h| (h, false)).into_iter().collect();
        while let Some((h, expanded)) = stack.pop() {
            if expanded {
                visit(h);
                continue;
            }
            let node = self.node(h);
            stack.push((h, true));
            stack.extend(node.right().map(|r| (r, false)));
            stack.extend(node.left().map(|l| (l, false)));
        }
    }
}
