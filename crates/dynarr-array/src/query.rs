//! Linear searches by equality.

use crate::array::DynamicArray;

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `item`, scanning forward.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    /// Index of the last element equal to `item`, scanning backward.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|x| x == item)
    }

    /// Whether any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }
}
