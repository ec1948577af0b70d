use super::handle::Handle;
use super::size::Size;

/// A child or parent reference. `NIL` terminates every leaf edge.
pub(crate) type Link = Option<Handle>;

/// The sentinel: black, size zero, keyless. Never allocated.
pub(crate) const NIL: Link = None;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node. Rotation and fixup code is written once against a
/// `Side` and its opposite instead of twice as mirror images.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    color: Color,
    // Nodes in the subtree rooted here, including this one.
    size: Size,
    parent: Link,
    left: Link,
    right: Link,
}

impl<K> Node<K> {
    /// A fresh red leaf of size one hanging from `parent`.
    pub(crate) const fn leaf(key: K, parent: Link) -> Self {
        Self {
            key,
            color: Color::Red,
            size: Size::ONE,
            parent,
            left: NIL,
            right: NIL,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) const fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Link {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Link) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
