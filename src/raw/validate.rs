use super::handle::Handle;
use super::node::{Color, Link};
use super::raw_rb_tree::RawRbTree;
use crate::InvariantViolation;

impl<K: Ord> RawRbTree<K> {
    /// Audits ordering, coloring, sizes and parent links.
    pub(crate) fn check(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root() else {
            return match self.allocated() {
                0 => Ok(()),
                allocated => Err(InvariantViolation::LenMismatch { len: 0, allocated }),
            };
        };

        if self.color(Some(root)) == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        if self.node(root).parent().is_some() {
            return Err(InvariantViolation::BrokenParentLink { slot: root.slot() });
        }
        self.check_subtree(root)?;

        if self.len() != self.allocated() {
            return Err(InvariantViolation::LenMismatch {
                len: self.len(),
                allocated: self.allocated(),
            });
        }

        self.check_order(root)
    }

    // Returns the black height of the subtree at `handle`, counting `NIL` as one.
    fn check_subtree(&self, handle: Handle) -> Result<usize, InvariantViolation> {
        let node = self.node(handle);
        let slot = handle.slot();

        for child in [node.left(), node.right()].into_iter().flatten() {
            if self.node(child).parent() != Some(handle) {
                return Err(InvariantViolation::BrokenParentLink { slot: child.slot() });
            }
            if node.color() == Color::Red && self.color(Some(child)) == Color::Red {
                return Err(InvariantViolation::RedChildOfRed { slot });
            }
        }

        let stored = node.size().to_usize();
        let counted = 1 + self.size(node.left()) + self.size(node.right());
        if stored != counted {
            return Err(InvariantViolation::SizeMismatch { slot, stored, counted });
        }

        let left = self.black_height(node.left())?;
        let right = self.black_height(node.right())?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { slot, left, right });
        }

        Ok(left + usize::from(node.color() == Color::Black))
    }

    fn black_height(&self, link: Link) -> Result<usize, InvariantViolation> {
        link.map_or(Ok(1), |h| self.check_subtree(h))
    }

    fn check_order(&self, root: Handle) -> Result<(), InvariantViolation> {
        let mut previous = self.minimum(root);
        let mut rank = 1;
        while let Some(next) = self.successor(previous) {
            rank += 1;
            if self.key(next) < self.key(previous) {
                return Err(InvariantViolation::OutOfOrder { rank });
            }
            previous = next;
        }
        Ok(())
    }
}
