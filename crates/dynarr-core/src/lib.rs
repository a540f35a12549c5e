//! Core types for the dynarr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy, the validated [`ArrayConfig`], and the pure
//! [`CapacityPolicy`] arithmetic that decides how a dynamic array's
//! backing buffer grows and shrinks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod policy;

pub use config::ArrayConfig;
pub use error::{ArrayError, ConfigError};
pub use policy::CapacityPolicy;
