//! Element types for exercising the ownership behaviour of the contiguous collections.

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element, used to check that no allocation is made on its behalf.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Zst;

/// An element that increments a shared counter each time an instance is dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Returns the number of drops recorded so far by this counter and all of its clones.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
