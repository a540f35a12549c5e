//! Element fixtures and pre-populated arrays.

use std::cell::Cell;
use std::rc::Rc;

use dynarr_array::DynamicArray;

/// Build an array of the given capacity holding `0..n`.
///
/// # Panics
///
/// Panics if `capacity` cannot be allocated.
pub fn filled(n: i32, capacity: usize) -> DynamicArray<i32> {
    let mut arr = DynamicArray::with_capacity(capacity).expect("test capacity is allocatable");
    for i in 0..n {
        arr.push(i);
    }
    arr
}

/// Shared counter of how many [`Tracked`] values have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    drops: Rc<Cell<usize>>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked element reporting its drop to this ledger.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked elements dropped so far.
    pub fn dropped(&self) -> usize {
        self.drops.get()
    }
}

/// An element that increments its ledger when dropped.
///
/// Equality compares `id` only.
#[derive(Clone, Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
