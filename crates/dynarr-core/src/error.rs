//! Error types for dynamic array operations.
//!
//! Every error is raised before the container is touched: an `Err`
//! return always leaves the array exactly as it was before the call.

use std::error::Error;
use std::fmt;

/// Errors returned by dynamic array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index lies outside the valid range for the operation.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A range `[index, index + count)` extends past the live elements.
    RangeOutOfBounds {
        /// Start of the requested range.
        index: usize,
        /// Number of elements requested.
        count: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A parameter is malformed (e.g. an empty removal range).
    InvalidArgument {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The supplied configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::RangeOutOfBounds { index, count, len } => {
                write!(
                    f,
                    "range of {count} elements starting at {index} exceeds length {len}"
                )
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ArrayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Errors detected during [`ArrayConfig::validate()`](crate::ArrayConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The doubling limit is zero, so growth would never double.
    ZeroDoublingLimit,
    /// The linear increment is zero, so growth past the doubling limit
    /// would never make progress.
    ZeroLinearIncrement,
    /// A capacity exceeds the largest buffer that can be allocated.
    CapacityOverflow {
        /// The capacity that was requested.
        requested: usize,
        /// The largest capacity allowed for this element type.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDoublingLimit => write!(f, "doubling limit must be at least 1"),
            Self::ZeroLinearIncrement => write!(f, "linear increment must be at least 1"),
            Self::CapacityOverflow { requested, max } => {
                write!(f, "capacity {requested} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}
