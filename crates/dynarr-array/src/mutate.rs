//! Core mutators: append, insert, remove, clear.
//!
//! Each mutator validates its arguments before touching the buffer, so an
//! `Err` return leaves the array exactly as it was.

use dynarr_core::ArrayError;
use smallvec::SmallVec;

use crate::array::DynamicArray;
use crate::buffer::Buffer;
use crate::shift;

/// Incoming elements for bulk operations, materialized so their count is
/// known before any capacity decision.
type Staged<T> = SmallVec<[T; 8]>;

impl<T> DynamicArray<T> {
    /// Append `item` at the end, growing by one policy step if full.
    pub fn push(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buffer.put(self.len, item);
        self.len += 1;
    }

    /// Append every element of `items` in iteration order.
    ///
    /// The items are collected first, then the buffer grows once (along
    /// the same curve repeated pushes would follow) to fit them all.
    pub fn append_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Staged<T> = items.into_iter().collect();
        let incoming = staged.len();
        if incoming == 0 {
            return;
        }
        let required = self.len + incoming;
        if required > self.capacity() {
            self.grow_to(required);
        }
        for item in staged {
            self.buffer.put(self.len, item);
            self.len += 1;
        }
    }

    /// Insert `item` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.push(item);
            return Ok(());
        }
        if self.len == self.capacity() {
            self.grow();
        }
        let moved = shift::open_gap(self.buffer.slots_mut(), index, self.len, 1);
        self.metrics.elements_shifted += moved as u64;
        self.buffer.put(index, item);
        self.len += 1;
        Ok(())
    }

    /// Insert every element of `items` starting at `index`, preserving
    /// their iteration order and shifting later elements right.
    ///
    /// `index == len()` appends, matching [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len()`. The
    /// check runs before `items` is consumed.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let staged: Staged<T> = items.into_iter().collect();
        let incoming = staged.len();
        if incoming == 0 {
            return Ok(());
        }
        let required = self.len + incoming;
        if required > self.capacity() {
            self.grow_to(required);
        }
        let moved = shift::open_gap(self.buffer.slots_mut(), index, self.len, incoming);
        self.metrics.elements_shifted += moved as u64;
        for (offset, item) in staged.into_iter().enumerate() {
            self.buffer.put(index + offset, item);
        }
        self.len += incoming;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// Halves the capacity if the array is left exactly one third full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        let err = ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(err);
        }
        let item = self.buffer.take(index).ok_or(err)?;
        let moved = shift::close_gap(self.buffer.slots_mut(), index, self.len, 1);
        self.metrics.elements_shifted += moved as u64;
        self.len -= 1;
        if self.policy.should_shrink_after_remove(self.len, self.capacity()) {
            self.shrink();
        }
        Ok(item)
    }

    /// Remove `count` elements starting at `index`.
    ///
    /// A suffix range is truncated in place and the capacity is left
    /// alone. Otherwise the tail is shifted left over the gap, and if less
    /// than a third of the capacity remains occupied the buffer shrinks
    /// towards `len() * 3 / 2`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    /// - [`ArrayError::InvalidArgument`] if `count == 0`.
    /// - [`ArrayError::RangeOutOfBounds`] if `index + count > len()`.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if count < 1 {
            return Err(ArrayError::InvalidArgument {
                reason: "remove count must be at least 1".to_string(),
            });
        }
        let end = match index.checked_add(count) {
            Some(end) if end <= self.len => end,
            _ => {
                return Err(ArrayError::RangeOutOfBounds {
                    index,
                    count,
                    len: self.len,
                })
            }
        };

        self.buffer.clear_range(index, end);
        if end == self.len {
            self.len = index;
            return Ok(());
        }
        let moved = shift::close_gap(self.buffer.slots_mut(), index, self.len, count);
        self.metrics.elements_shifted += moved as u64;
        self.len -= count;

        if self.policy.should_shrink_after_range(self.len, self.capacity()) {
            let minimum = self.policy.range_shrink_minimum(self.len);
            self.shrink_to(minimum);
        }
        Ok(())
    }

    /// Drop every element and reset the buffer to the configured reset
    /// capacity.
    pub fn clear(&mut self) {
        self.buffer = Buffer::new(self.config.reset_capacity);
        self.len = 0;
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Remove the first element equal to `item`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}
