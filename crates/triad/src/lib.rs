//! Triad: a fixed-layout handle pool for 3-component vectors.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Triad sub-crates. For most users, adding `triad` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use triad::prelude::*;
//!
//! let mut pool = VecPool::new(PoolConfig::default());
//!
//! let velocity = pool.alloc(3.0, 4.0, 0.0);
//! assert_eq!(pool.magnitude(velocity), 5.0);
//!
//! // In-place math through handles; no per-vector heap traffic.
//! let axis = pool.unit_z();
//! pool.cross(velocity, axis);
//! assert_eq!(pool.components(velocity), [4.0, -3.0, 0.0]);
//!
//! // Freed slots are recycled by later allocations.
//! pool.free(axis).unwrap();
//! pool.free(velocity).unwrap();
//! let reused = pool.alloc(1.0, 0.0, 0.0);
//! assert_eq!(pool.slot_count(), 2);
//! # let _ = reused;
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `triad-core` | The `VecId` handle and `PoolError` |
//! | [`pool`] | `triad-pool` | `VecPool`, configuration, storage internals |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core handle and error types (`triad-core`).
pub use triad_core as types;

/// Pool allocator, configuration, and storage internals (`triad-pool`).
///
/// Most users only need [`pool::VecPool`] and [`pool::PoolConfig`] from
/// this module — they are also available in the [`prelude`].
pub use triad_pool as pool;

/// Common imports for typical Triad usage.
///
/// ```rust
/// use triad::prelude::*;
/// ```
pub mod prelude {
    // Handles and errors
    pub use triad_core::{PoolError, VecId};

    // Pool and configuration
    pub use triad_pool::{CursorMode, FreePolicy, PoolConfig, VecDisplay, VecPool};
}
