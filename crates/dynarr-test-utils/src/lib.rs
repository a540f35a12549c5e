//! Test utilities and fixtures for dynarr development.
//!
//! Provides a drop-tracking element type ([`Tracked`]) for checking that
//! shifts, reallocations, and truncations never lose or duplicate an
//! element, and a `Vec`-backed reference model ([`model`]) for driving a
//! [`DynamicArray`](dynarr_array::DynamicArray) through random operation
//! scripts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use fixtures::{filled, DropLedger, Tracked};
pub use model::{apply, assert_matches_model, op_strategy, Op};
