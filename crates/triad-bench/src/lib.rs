//! Benchmark profiles and utilities for the Triad vector pool.
//!
//! Provides pre-built [`PoolConfig`] profiles and a deterministic churn
//! script generator shared by the criterion benches:
//!
//! - [`reference_config`]: default policies (unordered frees, direct cursors)
//! - [`ordered_config`]: sorted free ledger
//! - [`memoized_config`]: cursor memoization up to a handle limit
//! - [`churn_script`]: seeded alloc/free decision sequence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use triad_pool::{CursorMode, FreePolicy, PoolConfig};

/// Default benchmark profile: unordered frees, direct cursor lookup,
/// storage preallocated for the working set.
pub fn reference_config(initial_slots: usize) -> PoolConfig {
    PoolConfig {
        initial_slots,
        ..PoolConfig::default()
    }
}

/// Like [`reference_config`] but with the sorted free ledger.
pub fn ordered_config(initial_slots: usize) -> PoolConfig {
    PoolConfig {
        initial_slots,
        free_policy: FreePolicy::Ordered,
        ..PoolConfig::default()
    }
}

/// Like [`reference_config`] but with cursor memoization up to `limit`.
pub fn memoized_config(initial_slots: usize, limit: u32) -> PoolConfig {
    PoolConfig {
        initial_slots,
        cursor_memo: CursorMode::Memoized { limit },
        ..PoolConfig::default()
    }
}

/// Generate a deterministic alloc/free decision sequence.
///
/// `true` means allocate, `false` means free. Decisions come from a simple
/// multiplicative hash of the seed, biased roughly 60/40 toward allocation
/// so the pool's working set grows while still exercising the free ledger.
pub fn churn_script(seed: u64, ops: usize) -> Vec<bool> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut script = Vec::with_capacity(ops);
    for _ in 0..ops {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top bits are the well-mixed ones in an LCG.
        script.push((state >> 56) < 154); // 154/256 ≈ 0.6
    }
    script
}
