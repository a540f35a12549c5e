//! Iteration and export.
//!
//! [`Iter`] borrows the array, so the borrow checker rejects any mutation
//! while an iteration is in progress. Each call to
//! [`iter`](DynamicArray::iter) starts from the array's current state.
//! [`to_array`](DynamicArray::to_array) and
//! [`to_vec`](DynamicArray::to_vec) copy the live elements out; the copies
//! share nothing with the buffer.

use std::iter::FusedIterator;

use crate::array::DynamicArray;

/// Borrowing iterator over the live elements, in index order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the live elements, in index order.
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> DynamicArray<T> {
    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.buffer.live(self.len).iter(),
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copy the live elements into a new fixed-size slice.
    pub fn to_array(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }

    /// Copy the live elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            slots: self.buffer.into_live(self.len).into_iter(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.append_range(iter);
        arr
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_range(iter);
    }
}
