use alloc::vec::Vec;

use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Link, NIL, Node, Side};
use super::size::Size;

/// The red-black engine backing `RbTree`.
///
/// Nodes live in an arena and refer to each other by [`Handle`]. A `NIL` link
/// plays the sentinel: every accessor below reads it as a black node of size 0.
#[derive(Clone)]
pub(crate) struct RawRbTree<K> {
    nodes: Arena<Node<K>>,
    root: Link,
}

impl<K> RawRbTree<K> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: NIL,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: NIL,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of keys, read from the root's subtree size.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.size(self.root)
    }

    #[inline]
    pub(crate) const fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn clear(&mut self) {
        tracing::debug!(len = self.len(), "clearing tree");
        self.nodes.clear();
        self.root = NIL;
    }

    /// Number of occupied arena slots; equals `len` unless the tree is corrupt.
    pub(crate) fn allocated(&self) -> usize {
        self.nodes.len()
    }

    // ─── Sentinel-aware accessors ───────────────────────────────────────────

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<K> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.node(handle).key()
    }

    #[inline]
    pub(crate) fn color(&self, link: Link) -> Color {
        link.map_or(Color::Black, |h| self.node(h).color())
    }

    #[inline]
    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(h) = link {
            self.node_mut(h).set_color(color);
        }
    }

    #[inline]
    pub(crate) fn size(&self, link: Link) -> usize {
        self.size_of(link).to_usize()
    }

    #[inline]
    fn size_of(&self, link: Link) -> Size {
        link.map_or(Size::ZERO, |h| self.node(h).size())
    }

    #[inline]
    pub(crate) fn parent(&self, link: Link) -> Link {
        link.and_then(|h| self.node(h).parent())
    }

    #[inline]
    pub(crate) fn child(&self, link: Link, side: Side) -> Link {
        link.and_then(|h| self.node(h).child(side))
    }

    #[inline]
    pub(crate) fn left(&self, link: Link) -> Link {
        self.child(link, Side::Left)
    }

    #[inline]
    pub(crate) fn right(&self, link: Link) -> Link {
        self.child(link, Side::Right)
    }

    /// Which child of its parent `handle` is. The root reports `Left`.
    #[inline]
    fn side_of(&self, handle: Handle) -> Side {
        let parent = self.node(handle).parent();
        if self.right(parent) == Some(handle) { Side::Right } else { Side::Left }
    }

    /// Recomputes `handle`'s size from its children.
    #[inline]
    fn update_size(&mut self, handle: Handle) {
        let node = self.node(handle);
        let size = Size::joining(self.size_of(node.left()), self.size_of(node.right()));
        self.node_mut(handle).set_size(size);
    }

    // ─── Rotation ───────────────────────────────────────────────────────────

    /// Rotates at `x` toward `side`: `Side::Left` is a left rotation.
    ///
    /// `x`'s child on the opposite side (`y`) takes `x`'s place, `x` becomes
    /// `y`'s `side` child, and `y`'s former `side` subtree moves under `x`.
    /// Sizes of `x` then `y` are recomputed; colors are untouched.
    fn rotate(&mut self, x: Handle, side: Side) {
        let Some(y) = self.node(x).child(side.opposite()) else {
            debug_assert!(false, "`RawRbTree::rotate()` - promoted child is NIL!");
            return;
        };
        trace!(x = x.slot(), y = y.slot(), ?side, "rotate");

        let inner = self.node(y).child(side);
        self.node_mut(x).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(x));
        }

        let parent = self.node(x).parent();
        self.node_mut(y).set_parent(parent);
        self.replace_child(parent, x, Some(y));

        self.node_mut(y).set_child(side, Some(x));
        self.node_mut(x).set_parent(Some(y));

        // `y`'s size depends on the updated `x`.
        self.update_size(x);
        self.update_size(y);
    }

    /// Points `parent`'s link to `old` at `new` instead, or the root if `parent` is `NIL`.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = if self.node(p).left() == Some(old) { Side::Left } else { Side::Right };
                self.node_mut(p).set_child(side, new);
            }
        }
    }

    /// Replaces the subtree rooted at `old` with the one rooted at `new` in `old`'s parent.
    fn transplant(&mut self, old: Handle, new: Link) {
        let parent = self.node(old).parent();
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.node_mut(new).set_parent(parent);
        }
    }

    /// Grows (or shrinks) by one the size of `link` and of every ancestor above it.
    fn adjust_sizes_upward(&mut self, mut link: Link, grow: bool) {
        while let Some(h) = link {
            let node = self.node_mut(h);
            let size = if grow { node.size().incremented() } else { node.size().decremented() };
            node.set_size(size);
            link = node.parent();
        }
    }

    // ─── Insertion ──────────────────────────────────────────────────────────

    /// Inserts `key` as a new node and rebalances. Keys not less than a
    /// visited node go right, so equal keys follow their earlier copies.
    pub(crate) fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(h) = cursor {
            parent = cursor;
            side = if key < *self.key(h) { Side::Left } else { Side::Right };
            cursor = self.node(h).child(side);
        }

        let handle = self.nodes.alloc(Node::leaf(key, parent));
        match parent {
            None => self.root = Some(handle),
            Some(p) => self.node_mut(p).set_child(side, Some(handle)),
        }
        self.adjust_sizes_upward(parent, true);

        self.insert_fixup(handle);
    }

    fn insert_fixup(&mut self, mut z: Handle) {
        while let Some(parent) = self.node(z).parent()
            && self.color(Some(parent)) == Color::Red
        {
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.node(parent).parent() else {
                break;
            };
            let side = self.side_of(parent);
            let uncle = self.node(grandparent).child(side.opposite());

            if self.color(uncle) == Color::Red {
                trace!(z = z.slot(), "insert fixup: red uncle");
                self.set_color(Some(parent), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                z = grandparent;
                continue;
            }

            if self.side_of(z) != side {
                trace!(z = z.slot(), "insert fixup: zig-zag");
                z = parent;
                self.rotate(z, side);
            }

            trace!(z = z.slot(), "insert fixup: zig-zig");
            let parent = self.parent(Some(z));
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if let Some(grandparent) = grandparent {
                self.rotate(grandparent, side.opposite());
            }
        }

        self.set_color(self.root, Color::Black);
    }

    // ─── Deletion ───────────────────────────────────────────────────────────

    /// Splices `z` out of the tree, rebalances, and returns its key.
    pub(crate) fn remove_handle(&mut self, z: Handle) -> K {
        let (z_left, z_right, z_parent, z_color) = {
            let node = self.node(z);
            (node.left(), node.right(), node.parent(), node.color())
        };

        let removed_color;
        let x: Link;
        let x_parent: Link;

        match (z_left, z_right) {
            (None, _) | (_, None) => {
                removed_color = z_color;
                x = z_left.or(z_right);
                x_parent = z_parent;
                self.transplant(z, x);
                self.adjust_sizes_upward(x_parent, false);
            }
            (Some(z_left), Some(z_right)) => {
                let y = self.minimum(z_right);
                removed_color = self.node(y).color();
                x = self.node(y).right();

                if self.node(y).parent() == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.node(y).parent();
                    self.transplant(y, x);
                    self.node_mut(y).set_child(Side::Right, Some(z_right));
                    self.node_mut(z_right).set_parent(Some(y));
                }

                self.transplant(z, Some(y));
                self.node_mut(y).set_child(Side::Left, Some(z_left));
                self.node_mut(z_left).set_parent(Some(y));

                let z_size = self.node(z).size();
                let y_node = self.node_mut(y);
                y_node.set_color(z_color);
                // `y` stands in for `z`; the walk below takes the one removed node off.
                y_node.set_size(z_size);
                self.adjust_sizes_upward(x_parent, false);
            }
        }

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }

        self.nodes.take(z).into_key()
    }

    /// Restores black-height after a black node was removed above `x`.
    ///
    /// `x` may be `NIL`, so its parent is carried alongside.
    fn remove_fixup(&mut self, mut x: Link, mut parent: Link) {
        while x != self.root && self.color(x) == Color::Black {
            let Some(p) = parent else {
                break;
            };
            let side = if self.node(p).left() == x { Side::Left } else { Side::Right };
            let mut w = self.node(p).child(side.opposite());

            if self.color(w) == Color::Red {
                trace!(parent = p.slot(), "remove fixup: red sibling");
                self.set_color(w, Color::Black);
                self.set_color(Some(p), Color::Red);
                self.rotate(p, side);
                w = self.node(p).child(side.opposite());
            }

            let Some(sibling) = w else {
                // Unreachable with a consistent black height; push the deficit up.
                x = Some(p);
                parent = self.node(p).parent();
                continue;
            };

            let near = self.node(sibling).child(side);
            let far = self.node(sibling).child(side.opposite());

            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!(parent = p.slot(), "remove fixup: black nephews");
                self.set_color(Some(sibling), Color::Red);
                x = Some(p);
                parent = self.node(p).parent();
                continue;
            }

            let mut sibling = sibling;
            if self.color(far) == Color::Black {
                trace!(parent = p.slot(), "remove fixup: red near nephew");
                self.set_color(near, Color::Black);
                self.set_color(Some(sibling), Color::Red);
                self.rotate(sibling, side.opposite());
                match self.node(p).child(side.opposite()) {
                    Some(w) => sibling = w,
                    None => break,
                }
            }

            trace!(parent = p.slot(), "remove fixup: red far nephew");
            let parent_color = self.node(p).color();
            self.set_color(Some(sibling), parent_color);
            self.set_color(Some(p), Color::Black);
            let far = self.node(sibling).child(side.opposite());
            self.set_color(far, Color::Black);
            self.rotate(p, side);
            x = self.root;
            parent = NIL;
        }

        self.set_color(x, Color::Black);
    }

    /// Moves every key out in ascending order and leaves the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<K> {
        let mut order = Vec::with_capacity(self.len());
        let mut cursor = self.root.map(|root| self.minimum(root));
        while let Some(h) = cursor {
            order.push(h);
            cursor = self.successor(h);
        }

        let keys: Vec<K> = order.into_iter().map(|h| self.nodes.take(h).into_key()).collect();
        self.nodes.clear();
        self.root = NIL;
        keys
    }
}
