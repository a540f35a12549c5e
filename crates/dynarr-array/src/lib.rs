//! Contiguous, resizable dynamic array with an explicit capacity policy.
//!
//! [`DynamicArray`] stores an ordered sequence of elements in a single
//! buffer whose capacity is managed by a
//! [`CapacityPolicy`](dynarr_core::CapacityPolicy) rather than left to the
//! allocator. Every capacity change goes through one reallocation path,
//! and every insert or removal goes through the shift engine.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── Buffer<T>          exactly `capacity` slots, live elements in [0, len)
//! ├── shift              open_gap / close_gap over the slot slice
//! ├── CapacityPolicy     grow / shrink arithmetic (dynarr-core)
//! └── ArrayMetrics       reallocation and shift counters
//! ```
//!
//! # Capacity lifecycle
//!
//! - **Grow:** a full array doubles below 2048 slots, then grows by 256.
//!   Bulk inserts follow the same curve up to the required minimum.
//! - **Shrink:** a single removal that leaves exactly a third of the
//!   capacity occupied halves the buffer; a range removal that shifts
//!   the tail and leaves less than a third shrinks towards `len * 3 / 2`
//!   plus headroom. Truncating a suffix never reallocates.
//! - **Clear:** drops every element and resets to the configured
//!   reset capacity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod iter;
pub mod metrics;
mod mutate;
mod query;
mod shift;

pub use array::DynamicArray;
pub use dynarr_core::{ArrayConfig, ArrayError, CapacityPolicy, ConfigError};
pub use iter::{IntoIter, Iter};
pub use metrics::ArrayMetrics;
