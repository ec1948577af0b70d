use super::handle::{Handle, RawHandle};

/// Number of nodes in a subtree, counting its root.
///
/// Kept at handle width; a subtree can never hold more nodes than the arena
/// has slots, so [`Handle::MAX`] bounds it too.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "subtree size is beyond the node limit");
        #[allow(clippy::cast_possible_truncation)]
        Self(size as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Size of a subtree whose root has children of sizes `left` and `right`.
    #[inline]
    pub(crate) const fn joining(left: Self, right: Self) -> Self {
        Self::from_usize(1 + left.to_usize() + right.to_usize())
    }

    #[inline]
    pub(crate) const fn incremented(self) -> Self {
        Self::from_usize(self.to_usize() + 1)
    }

    #[inline]
    pub(crate) const fn decremented(self) -> Self {
        debug_assert!(self.0 > 0, "subtree size would drop below zero");
        Self(self.0.saturating_sub(1))
    }
}
