//! dynarr: a contiguous, resizable dynamic array with an explicit
//! capacity policy.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut arr = DynamicArray::new();
//! arr.append_range(0..8);
//! assert_eq!(arr.capacity(), 8);
//!
//! // A ninth element doubles the buffer.
//! arr.push(8);
//! assert_eq!(arr.capacity(), 16);
//!
//! arr.insert(0, -1).unwrap();
//! assert_eq!(arr.index_of(&-1), Some(0));
//!
//! // Removing most of the elements shrinks it again.
//! arr.remove_range(1, 8).unwrap();
//! assert_eq!(arr.to_vec(), vec![-1, 8]);
//! assert!(arr.capacity() < 16);
//!
//! assert!(matches!(
//!     arr.remove_at(2),
//!     Err(ArrayError::IndexOutOfRange { index: 2, len: 2 })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `dynarr-array` | `DynamicArray`, iterators, metrics |
//! | [`types`] | `dynarr-core` | Errors, configuration, capacity policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The dynamic array container, its iterators, and metrics.
pub mod array {
    pub use dynarr_array::*;
}

/// Errors, configuration, and capacity-policy arithmetic.
pub mod types {
    pub use dynarr_core::*;
}

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use dynarr_array::{ArrayMetrics, DynamicArray};
    pub use dynarr_core::{ArrayConfig, ArrayError, CapacityPolicy, ConfigError};
}
