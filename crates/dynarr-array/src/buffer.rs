//! Fixed-capacity slot storage backing a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Buffer`] is a boxed slice of exactly `capacity` slots. Slots are
//! `Option<T>` so that positions past the live length hold nothing at all:
//! no stale element is kept alive, and no `T: Default` bound is needed.
//! The buffer never changes size in place; [`Buffer::relocate`] replaces
//! it wholesale.

/// Contiguous slot storage of a fixed capacity.
#[derive(Clone)]
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Buffer<T> {
    /// Allocate a buffer of `capacity` empty slots.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Total number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared reference to the element in slot `index`, if occupied.
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable reference to the element in slot `index`, if occupied.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Store `item` in slot `index`, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`. Callers grow the buffer first.
    pub(crate) fn put(&mut self, index: usize, item: T) -> Option<T> {
        self.slots[index].replace(item)
    }

    /// Move the element out of slot `index`, leaving it empty.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Empty every slot in `start..end`, dropping the elements.
    pub(crate) fn clear_range(&mut self, start: usize, end: usize) {
        for slot in &mut self.slots[start..end] {
            *slot = None;
        }
    }

    /// The first `len` slots.
    pub(crate) fn live(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }

    /// The whole slot slice, for the shift engine.
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Replace this buffer with a fresh one of `new_capacity` slots,
    /// moving the first `len` elements across in order.
    ///
    /// The old allocation is released when this returns. Returns the
    /// number of elements moved.
    ///
    /// # Panics
    ///
    /// Panics if `len > new_capacity`; the capacity policy never asks for
    /// a buffer smaller than the live length.
    pub(crate) fn relocate(&mut self, len: usize, new_capacity: usize) -> usize {
        assert!(
            len <= new_capacity,
            "relocate would lose elements: len {len} > capacity {new_capacity}"
        );
        let mut fresh = Self::new(new_capacity);
        for (dst, src) in fresh.slots.iter_mut().zip(self.slots[..len].iter_mut()) {
            *dst = src.take();
        }
        *self = fresh;
        len
    }

    /// Consume the buffer, keeping only the first `len` slots.
    pub(crate) fn into_live(self, len: usize) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(len);
        slots
    }

    /// Memory usage of the slot storage in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Option<T>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buf: Buffer<u32> = Buffer::new(4);
        assert_eq!(buf.capacity(), 4);
        assert!((0..4).all(|i| buf.get(i).is_none()));
    }

    #[test]
    fn zero_capacity_buffer() {
        let buf: Buffer<u32> = Buffer::new(0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.get(0).is_none());
        assert_eq!(buf.memory_bytes(), 0);
    }

    #[test]
    fn put_and_take() {
        let mut buf = Buffer::new(2);
        assert!(buf.put(1, "b").is_none());
        assert_eq!(buf.get(1), Some(&"b"));
        assert_eq!(buf.put(1, "c"), Some("b"));
        assert_eq!(buf.take(1), Some("c"));
        assert!(buf.get(1).is_none());
        assert!(buf.take(5).is_none());
    }

    #[test]
    fn relocate_moves_live_prefix() {
        let mut buf = Buffer::new(4);
        for i in 0..3 {
            buf.put(i, i * 10);
        }
        let moved = buf.relocate(3, 8);
        assert_eq!(moved, 3);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.get(0), Some(&0));
        assert_eq!(buf.get(2), Some(&20));
        assert!(buf.get(3).is_none());
    }

    #[test]
    fn relocate_can_shrink() {
        let mut buf = Buffer::new(16);
        buf.put(0, 'x');
        buf.relocate(1, 2);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.get(0), Some(&'x'));
    }

    #[test]
    #[should_panic(expected = "relocate would lose elements")]
    fn relocate_below_len_panics() {
        let mut buf = Buffer::new(4);
        buf.put(0, 1);
        buf.put(1, 2);
        buf.relocate(2, 1);
    }

    #[test]
    fn into_live_truncates() {
        let mut buf = Buffer::new(4);
        buf.put(0, 'a');
        buf.put(1, 'b');
        assert_eq!(buf.into_live(2), vec![Some('a'), Some('b')]);
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let buf: Buffer<u64> = Buffer::new(10);
        assert_eq!(buf.memory_bytes(), 10 * std::mem::size_of::<Option<u64>>());
    }
}
