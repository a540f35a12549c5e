//! Index-shift engine: moves a contiguous run of slots to open or close a
//! gap for insertion or removal.
//!
//! Both functions operate on the raw slot slice and leave the slots they
//! vacate empty. They do not touch the live length; the caller updates it
//! after the shift.

/// Shift the live run `[index, len)` right by `width` slots, iterating
/// from the end backward so no unshifted element is overwritten.
///
/// On return, slots `[index, index + width)` are empty. Returns the
/// number of elements moved.
///
/// # Panics
///
/// Panics if `len + width` exceeds the slice length.
pub(crate) fn open_gap<T>(slots: &mut [Option<T>], index: usize, len: usize, width: usize) -> usize {
    assert!(
        len + width <= slots.len(),
        "open_gap past capacity: len {len} + width {width} > {}",
        slots.len()
    );
    if width == 0 {
        return 0;
    }
    for i in (index..len).rev() {
        slots[i + width] = slots[i].take();
    }
    len - index
}

/// Shift the live run `[index + width, len)` left by `width` slots,
/// iterating from the front so the gap at `[index, index + width)` is
/// filled in order.
///
/// The gap slots must already be empty (their elements taken or dropped).
/// On return, slots `[len - width, len)` are empty. Returns the number
/// of elements moved.
pub(crate) fn close_gap<T>(slots: &mut [Option<T>], index: usize, len: usize, width: usize) -> usize {
    let start = index + width;
    if width == 0 || start >= len {
        return 0;
    }
    for i in start..len {
        slots[i - width] = slots[i].take();
    }
    len - start
}
