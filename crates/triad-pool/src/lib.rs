//! Fixed-layout pooled storage for 3-component vectors.
//!
//! Callers work with [`VecId`](triad_core::VecId) handles instead of
//! references; all component data lives in one flat buffer, so allocating
//! and freeing vectors in a hot loop produces no per-vector heap traffic.
//!
//! # Architecture
//!
//! ```text
//! VecPool (allocator)
//! ├── Storage        — flat Vec<f64>, 3 components per slot, append-only
//! ├── CursorMap      — handle → offset, optionally memoized
//! ├── FreeLedger     — freed handles: contiguous-run floor + tracked entries
//! └── high_water     — largest handle ever issued
//! ```
//!
//! `alloc` recycles a freed slot when the ledger has one, otherwise grows
//! the buffer by a single slot. `free` zeroes the slot and returns its
//! handle to the ledger. The reclaim policy and cursor strategy are chosen
//! once in [`PoolConfig`] and fixed for the pool's lifetime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod convert;
pub mod cursor;
pub mod ledger;
mod ops;
pub mod pool;
pub mod storage;

// Public re-exports for the primary API surface.
pub use config::{CursorMode, FreePolicy, PoolConfig};
pub use pool::{VecDisplay, VecPool};
