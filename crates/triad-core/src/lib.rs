//! Core types for the Triad vector pool.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`VecId`] handle that names a pooled vector slot and the [`PoolError`]
//! type shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::PoolError;
pub use id::VecId;
