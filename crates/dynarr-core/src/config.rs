//! Dynamic array configuration parameters.

use crate::error::ConfigError;

/// Configuration for a dynamic array's capacity management.
///
/// Controls the initial and reset capacities and the shape of the growth
/// curve. Validated at construction; all values are immutable after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Capacity of the buffer allocated at construction.
    ///
    /// Default: 8.
    pub initial_capacity: usize,

    /// Capacity the buffer is reset to by `clear()`.
    ///
    /// Default: 8, the same as `initial_capacity`, so a cleared array is
    /// indistinguishable from a freshly constructed one.
    pub reset_capacity: usize,

    /// Capacities strictly below this value double on growth.
    ///
    /// Default: 2048. Must be at least 1.
    pub doubling_limit: usize,

    /// Fixed step added on growth once capacity reaches `doubling_limit`.
    ///
    /// Default: 256. Must be at least 1. Caps the overshoot of large arrays
    /// at the cost of slightly worse amortized append cost.
    pub linear_increment: usize,
}

impl ArrayConfig {
    /// Default capacity for new and cleared arrays.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Default capacity below which growth doubles.
    pub const DEFAULT_DOUBLING_LIMIT: usize = 2048;

    /// Default fixed growth step above the doubling limit.
    pub const DEFAULT_LINEAR_INCREMENT: usize = 256;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            reset_capacity: Self::DEFAULT_CAPACITY,
            doubling_limit: Self::DEFAULT_DOUBLING_LIMIT,
            linear_increment: Self::DEFAULT_LINEAR_INCREMENT,
        }
    }

    /// Check structural invariants of the growth curve.
    ///
    /// Capacity limits depend on the element type and are checked
    /// separately by [`check_capacity`](Self::check_capacity).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.doubling_limit == 0 {
            return Err(ConfigError::ZeroDoublingLimit);
        }
        if self.linear_increment == 0 {
            return Err(ConfigError::ZeroLinearIncrement);
        }
        Ok(())
    }

    /// Largest capacity whose buffer stays within `isize::MAX` bytes
    /// for slots of `slot_bytes` bytes each.
    ///
    /// Zero-sized slots never allocate, so every capacity is allowed.
    pub fn max_capacity(slot_bytes: usize) -> usize {
        if slot_bytes == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / slot_bytes
        }
    }

    /// Reject a `requested` capacity that could never be allocated for
    /// slots of `slot_bytes` bytes.
    pub fn check_capacity(requested: usize, slot_bytes: usize) -> Result<(), ConfigError> {
        let max = Self::max_capacity(slot_bytes);
        if requested > max {
            return Err(ConfigError::CapacityOverflow { requested, max });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_eight() {
        let config = ArrayConfig::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.reset_capacity, 8);
    }

    #[test]
    fn default_growth_curve() {
        let config = ArrayConfig::new(0);
        assert_eq!(config.doubling_limit, 2048);
        assert_eq!(config.linear_increment, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_increment_rejected() {
        let config = ArrayConfig {
            linear_increment: 0,
            ..ArrayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLinearIncrement));
    }

    #[test]
    fn zero_doubling_limit_rejected() {
        let config = ArrayConfig {
            doubling_limit: 0,
            ..ArrayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDoublingLimit));
    }

    #[test]
    fn capacity_limit_scales_with_slot_size() {
        assert_eq!(ArrayConfig::max_capacity(0), usize::MAX);
        assert_eq!(ArrayConfig::max_capacity(1), isize::MAX as usize);
        assert_eq!(ArrayConfig::max_capacity(8), isize::MAX as usize / 8);
    }

    #[test]
    fn oversized_capacity_rejected() {
        let result = ArrayConfig::check_capacity(usize::MAX, 4);
        assert!(matches!(result, Err(ConfigError::CapacityOverflow { .. })));
        assert!(ArrayConfig::check_capacity(1024, 4).is_ok());
    }
}
