//! Capacity and shift counters for a dynamic array.
//!
//! [`ArrayMetrics`] records how often the capacity controller ran and how
//! much data the array moved, so callers can profile growth behaviour
//! without instrumenting the container themselves.

/// Counters accumulated by a [`DynamicArray`](crate::DynamicArray).
///
/// All counters start at zero and only increase until
/// [`reset_metrics`](crate::DynamicArray::reset_metrics) is called.
/// `clear()` does not touch them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetrics {
    /// Number of times the capacity controller grew the buffer.
    pub grow_events: u64,
    /// Number of times the capacity controller shrank the buffer.
    pub shrink_events: u64,
    /// Number of buffer reallocations performed by the capacity controller.
    pub reallocations: u64,
    /// Elements moved into a new buffer by reallocation.
    pub elements_relocated: u64,
    /// Elements moved within the buffer by insert/remove shifts.
    pub elements_shifted: u64,
}

impl ArrayMetrics {
    /// Total elements moved by reallocation and shifting combined.
    pub fn elements_moved(&self) -> u64 {
        self.elements_relocated + self.elements_shifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ArrayMetrics::default();
        assert_eq!(m.grow_events, 0);
        assert_eq!(m.shrink_events, 0);
        assert_eq!(m.reallocations, 0);
        assert_eq!(m.elements_relocated, 0);
        assert_eq!(m.elements_shifted, 0);
    }

    #[test]
    fn elements_moved_sums_both_sources() {
        let m = ArrayMetrics {
            elements_relocated: 12,
            elements_shifted: 30,
            ..ArrayMetrics::default()
        };
        assert_eq!(m.elements_moved(), 42);
    }
}
