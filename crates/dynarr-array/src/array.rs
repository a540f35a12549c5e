//! The [`DynamicArray`] container: construction, indexed access, and the
//! capacity controller.
//!
//! Mutators live in `mutate.rs`, searches in `query.rs`, and iteration in
//! [`iter`](crate::iter); all of them share the private state defined here.

use std::fmt;
use std::ops::{Index, IndexMut};

use dynarr_core::{ArrayConfig, ArrayError, CapacityPolicy};

use crate::buffer::Buffer;
use crate::metrics::ArrayMetrics;

/// A contiguous, resizable sequence of `T`.
///
/// Live elements occupy buffer positions `[0, len)` in order. Capacity is
/// changed only by the capacity controller, following the
/// [`CapacityPolicy`] derived from the array's [`ArrayConfig`]:
///
/// - appending to a full array grows it by one policy step;
/// - bulk inserts grow step by step until the incoming elements fit;
/// - removals shrink the buffer once occupancy drops to a third.
///
/// The backing buffer is never exposed. Reads hand out references that
/// borrow the array, so no reference can outlive a reallocation.
///
/// # Example
///
/// ```
/// use dynarr_array::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// for i in 0..9 {
///     arr.push(i);
/// }
/// assert_eq!(arr.len(), 9);
/// assert_eq!(arr.capacity(), 16);
/// assert_eq!(arr.get(8), Ok(&8));
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    pub(crate) buffer: Buffer<T>,
    pub(crate) len: usize,
    pub(crate) config: ArrayConfig,
    pub(crate) policy: CapacityPolicy,
    pub(crate) metrics: ArrayMetrics,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of 8.
    pub fn new() -> Self {
        Self::build(ArrayConfig::default())
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if a buffer of `capacity`
    /// slots could never be allocated for this element type.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        ArrayConfig::check_capacity(capacity, Self::slot_bytes()).map_err(|e| {
            ArrayError::InvalidArgument {
                reason: e.to_string(),
            }
        })?;
        Ok(Self::build(ArrayConfig::new(capacity)))
    }

    /// Create an empty array from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Config`] if the growth curve is invalid or
    /// either the initial or reset capacity is unallocatable.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        ArrayConfig::check_capacity(config.initial_capacity, Self::slot_bytes())?;
        ArrayConfig::check_capacity(config.reset_capacity, Self::slot_bytes())?;
        Ok(Self::build(config))
    }

    fn build(config: ArrayConfig) -> Self {
        Self {
            buffer: Buffer::new(config.initial_capacity),
            len: 0,
            policy: CapacityPolicy::from_config(&config),
            config,
            metrics: ArrayMetrics::default(),
        }
    }

    fn slot_bytes() -> usize {
        std::mem::size_of::<Option<T>>()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The configuration this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The capacity policy derived from the configuration.
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Counters accumulated since construction or the last
    /// [`reset_metrics`](Self::reset_metrics).
    pub fn metrics(&self) -> &ArrayMetrics {
        &self.metrics
    }

    /// Zero all metric counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = ArrayMetrics::default();
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// Shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let err = ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(err);
        }
        self.buffer.get(index).ok_or(err)
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let err = ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(err);
        }
        self.buffer.get_mut(index).ok_or(err)
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`; the
    /// array is unchanged and `item` is dropped.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ArrayError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    // ── Capacity controller ─────────────────────────────────────────

    /// Grow by one policy step. Called when `len == capacity` and a
    /// single element is about to be appended.
    pub(crate) fn grow(&mut self) {
        let target = self.policy.grow_step(self.capacity());
        if self.reallocate(target) {
            self.metrics.grow_events += 1;
        }
    }

    /// Grow step by step until at least `minimum` slots exist.
    pub(crate) fn grow_to(&mut self, minimum: usize) {
        let target = self.policy.grow_to(self.capacity(), minimum);
        if self.reallocate(target) {
            self.metrics.grow_events += 1;
        }
    }

    /// Halve the capacity. Called after a single removal once
    /// `len == capacity / 3`.
    pub(crate) fn shrink(&mut self) {
        let target = self.policy.shrink_step(self.capacity());
        if self.reallocate(target) {
            self.metrics.shrink_events += 1;
        }
    }

    /// Shrink towards `minimum`, keeping one doubling of headroom.
    pub(crate) fn shrink_to(&mut self, minimum: usize) {
        let target = self.policy.shrink_to(self.capacity(), minimum);
        if self.reallocate(target) {
            self.metrics.shrink_events += 1;
        }
    }

    /// The only place the buffer is replaced for a capacity change.
    /// Returns whether the capacity changed.
    fn reallocate(&mut self, new_capacity: usize) -> bool {
        if new_capacity == self.capacity() {
            return false;
        }
        let moved = self.buffer.relocate(self.len, new_capacity);
        self.metrics.reallocations += 1;
        self.metrics.elements_relocated += moved as u64;
        true
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Arrays are equal when their live elements are; capacity and
    /// metrics are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`get`](DynamicArray::get) for a
    /// checked lookup.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}
