use alloc::vec::Vec;

use super::handle::Handle;
use super::node::Link;

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    /// Next vacant slot in the free chain.
    Vacant(Link),
}

/// Slot storage for tree nodes.
///
/// Vacant slots form a chain through the storage itself, most recently freed
/// first, and `alloc` fills the head of that chain before growing.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    vacant: Link,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: None,
            occupied: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        self.occupied += 1;
        if let Some(handle) = self.vacant {
            let slot = core::mem::replace(&mut self.slots[handle.slot()], Slot::Occupied(element));
            self.vacant = match slot {
                Slot::Vacant(next) => next,
                Slot::Occupied(_) => unreachable!("free chain points at a live node"),
            };
            return handle;
        }

        assert!(
            self.slots.len() < Handle::MAX,
            "node arena is full ({} nodes)",
            Handle::MAX
        );
        self.slots.push(Slot::Occupied(element));
        Handle::from_slot(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("stale node handle {handle:?}"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("stale node handle {handle:?}"),
        }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        match core::mem::replace(&mut self.slots[handle.slot()], Slot::Vacant(self.vacant)) {
            Slot::Occupied(element) => {
                self.vacant = Some(handle);
                self.occupied -= 1;
                element
            }
            Slot::Vacant(next) => {
                self.slots[handle.slot()] = Slot::Vacant(next);
                panic!("stale node handle {handle:?}")
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant = None;
        self.occupied = 0;
    }
}
