//! Capacity policy: how a dynamic array's buffer grows and shrinks.
//!
//! [`CapacityPolicy`] is pure arithmetic over capacities and counts. It
//! never allocates; the container asks it for a new capacity and then
//! performs the reallocation itself.
//!
//! # Growth curve
//!
//! ```text
//! capacity < doubling_limit   →  capacity * 2   (0 becomes 1)
//! capacity ≥ doubling_limit   →  capacity + linear_increment
//! ```
//!
//! # Shrink triggers
//!
//! - single removal: shrink once occupancy falls to exactly `capacity / 3`
//! - range removal: shrink once occupancy falls below `capacity / 3`,
//!   towards a minimum of `count * 3 / 2`

use crate::config::ArrayConfig;

/// Growth and shrink arithmetic for a dynamic array buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityPolicy {
    doubling_limit: usize,
    linear_increment: usize,
}

impl CapacityPolicy {
    /// Build a policy from a validated config.
    pub fn from_config(config: &ArrayConfig) -> Self {
        Self {
            doubling_limit: config.doubling_limit,
            linear_increment: config.linear_increment,
        }
    }

    /// One growth step from `capacity`.
    ///
    /// Saturates at `usize::MAX`; callers treat an unchanged result as
    /// "cannot grow further".
    pub fn grow_step(&self, capacity: usize) -> usize {
        if capacity == 0 {
            1
        } else if capacity < self.doubling_limit {
            capacity.saturating_mul(2)
        } else {
            capacity.saturating_add(self.linear_increment)
        }
    }

    /// Apply [`grow_step`](Self::grow_step) until the capacity reaches
    /// `minimum`.
    ///
    /// Produces the same capacity a sequence of single appends would have
    /// reached, rather than jumping straight to `minimum`. Returns
    /// `capacity` unchanged when it already satisfies `minimum`.
    pub fn grow_to(&self, capacity: usize, minimum: usize) -> usize {
        let mut cap = capacity;
        while cap < minimum {
            let next = self.grow_step(cap);
            if next == cap {
                break;
            }
            cap = next;
        }
        cap
    }

    /// One shrink step from `capacity`: halve it.
    pub fn shrink_step(&self, capacity: usize) -> usize {
        capacity / 2
    }

    /// Halve `capacity` while it exceeds `minimum`, then double once.
    ///
    /// The final doubling leaves headroom above `minimum` so a remove
    /// followed by a few re-adds does not immediately reallocate again.
    /// Since the last halving started above `minimum`, the result is
    /// always at least `minimum`.
    pub fn shrink_to(&self, capacity: usize, minimum: usize) -> usize {
        let mut cap = capacity;
        while cap > minimum {
            cap = self.shrink_step(cap);
        }
        if cap == 0 {
            1
        } else {
            cap.saturating_mul(2)
        }
    }

    /// Whether a single-element removal leaving `count` live elements
    /// should halve `capacity`.
    pub fn should_shrink_after_remove(&self, count: usize, capacity: usize) -> bool {
        count == capacity / 3
    }

    /// Whether a range removal leaving `count` live elements should
    /// shrink `capacity`.
    pub fn should_shrink_after_range(&self, count: usize, capacity: usize) -> bool {
        count < capacity / 3
    }

    /// Capacity floor requested when shrinking after a range removal,
    /// giving roughly two-thirds occupancy.
    pub fn range_shrink_minimum(&self, count: usize) -> usize {
        count.saturating_mul(3) / 2
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::from_config(&ArrayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CapacityPolicy {
        CapacityPolicy::default()
    }

    #[test]
    fn zero_grows_to_one() {
        assert_eq!(policy().grow_step(0), 1);
    }

    #[test]
    fn doubles_below_limit() {
        let p = policy();
        assert_eq!(p.grow_step(1), 2);
        assert_eq!(p.grow_step(8), 16);
        assert_eq!(p.grow_step(1024), 2048);
        assert_eq!(p.grow_step(2047), 4094);
    }

    #[test]
    fn linear_at_and_above_limit() {
        let p = policy();
        assert_eq!(p.grow_step(2048), 2304);
        assert_eq!(p.grow_step(4094), 4350);
    }

    #[test]
    fn grow_step_saturates() {
        let p = policy();
        assert_eq!(p.grow_step(usize::MAX), usize::MAX);
    }

    #[test]
    fn grow_to_follows_single_step_curve() {
        let p = policy();
        // 8 → 16 → 32 → 64, not straight to 40.
        assert_eq!(p.grow_to(8, 40), 64);
        // Already large enough: unchanged.
        assert_eq!(p.grow_to(64, 40), 64);
        // 0 → 1 → 2 → 4.
        assert_eq!(p.grow_to(0, 3), 4);
        // Crosses the doubling limit: 1024 → 2048 → 2304 → 2560.
        assert_eq!(p.grow_to(1024, 2500), 2560);
    }

    #[test]
    fn grow_to_terminates_at_saturation() {
        let p = policy();
        assert_eq!(p.grow_to(usize::MAX - 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn shrink_to_overshoots_by_one_doubling() {
        let p = policy();
        // 30 → 15 → 7, then doubled.
        assert_eq!(p.shrink_to(30, 10), 14);
        // 64 → 32 → 16 → 8 → 4, then doubled.
        assert_eq!(p.shrink_to(64, 4), 8);
    }

    #[test]
    fn shrink_to_zero_minimum_leaves_one_slot() {
        assert_eq!(policy().shrink_to(30, 0), 1);
    }

    #[test]
    fn shrink_triggers() {
        let p = policy();
        assert!(p.should_shrink_after_remove(2, 8));
        assert!(!p.should_shrink_after_remove(3, 8));
        assert!(!p.should_shrink_after_remove(1, 8));
        assert!(p.should_shrink_after_range(7, 30));
        assert!(!p.should_shrink_after_range(10, 30));
        assert_eq!(p.range_shrink_minimum(7), 10);
    }

    #[test]
    fn custom_curve() {
        let config = ArrayConfig {
            doubling_limit: 4,
            linear_increment: 3,
            ..ArrayConfig::default()
        };
        let p = CapacityPolicy::from_config(&config);
        assert_eq!(p.grow_step(2), 4);
        assert_eq!(p.grow_step(4), 7);
        assert_eq!(p.grow_to(4, 12), 13);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grow_to_reaches_minimum(
                capacity in 0usize..10_000,
                minimum in 0usize..100_000,
            ) {
                let grown = policy().grow_to(capacity, minimum);
                prop_assert!(grown >= minimum);
                prop_assert!(grown >= capacity);
            }

            #[test]
            fn grow_to_matches_repeated_steps(
                capacity in 0usize..5_000,
                extra in 1usize..20_000,
            ) {
                let p = policy();
                let minimum = capacity + extra;
                let mut cap = capacity;
                while cap < minimum {
                    cap = p.grow_step(cap);
                }
                prop_assert_eq!(p.grow_to(capacity, minimum), cap);
            }

            #[test]
            fn range_shrink_never_drops_below_count(
                (capacity, count) in (3usize..100_000)
                    .prop_flat_map(|capacity| (Just(capacity), 0..capacity / 3)),
            ) {
                let p = policy();
                prop_assert!(p.should_shrink_after_range(count, capacity));
                let minimum = p.range_shrink_minimum(count);
                let shrunk = p.shrink_to(capacity, minimum);
                prop_assert!(shrunk >= minimum);
                prop_assert!(shrunk >= count);
                prop_assert!(shrunk <= capacity);
            }

            #[test]
            fn single_shrink_keeps_live_elements(capacity in 0usize..100_000) {
                let p = policy();
                let count = capacity / 3;
                prop_assert!(p.should_shrink_after_remove(count, capacity));
                prop_assert!(p.shrink_step(capacity) >= count);
            }
        }
    }
}
