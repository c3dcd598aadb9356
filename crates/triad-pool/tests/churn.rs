//! Integration test: seeded allocation churn against a mirror model.
//!
//! Drives a pool through thousands of interleaved alloc/free operations
//! with a deterministic RNG, mirroring every live handle and its expected
//! components in a map. Catches double-issued handles, slots that alias,
//! values that leak between slots, and counter drift, under every
//! combination of reclaim policy and cursor strategy.

use std::collections::HashMap;

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use triad_core::VecId;
use triad_pool::{CursorMode, FreePolicy, PoolConfig, VecPool};

fn churn(config: PoolConfig, seed: u64, ops: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pool = VecPool::new(config);
    let mut live: HashMap<VecId, [f64; 3]> = HashMap::new();
    let mut order: Vec<VecId> = Vec::new();

    for _ in 0..ops {
        if live.is_empty() || rng.random_bool(0.6) {
            let xyz = [
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            ];
            let id = pool.alloc(xyz[0], xyz[1], xyz[2]);
            let previous = live.insert(id, xyz);
            assert!(previous.is_none(), "handle {id} issued while still live");
            order.push(id);
        } else {
            let at = rng.random_range(0..order.len());
            let id = order.swap_remove(at);
            let expected = live.remove(&id).expect("freeing a tracked handle");
            assert_eq!(pool.components(id), expected, "handle {id} read back wrong");
            pool.free(id).expect("freeing a live handle");
        }

        assert_eq!(pool.live_count() as usize, live.len());
        assert_eq!(
            pool.high_water(),
            pool.live_count() + pool.free_count(),
            "every issued handle is either live or free"
        );
    }

    // Slots never alias: every surviving handle still reads back exactly
    // what was last written through it.
    for (&id, expected) in &live {
        assert_eq!(pool.components(id), *expected, "handle {id} corrupted");
    }
}

#[test]
fn unordered_direct_churn() {
    churn(PoolConfig::default(), 0x5eed, 4000);
}

#[test]
fn ordered_direct_churn() {
    churn(
        PoolConfig {
            free_policy: FreePolicy::Ordered,
            ..PoolConfig::default()
        },
        0x5eed,
        4000,
    );
}

#[test]
fn unordered_memoized_churn() {
    churn(
        PoolConfig {
            cursor_memo: CursorMode::Memoized { limit: 256 },
            ..PoolConfig::default()
        },
        0xfeed,
        4000,
    );
}

#[test]
fn ordered_memoized_churn_with_prealloc() {
    churn(
        PoolConfig {
            initial_slots: 64,
            free_policy: FreePolicy::Ordered,
            cursor_memo: CursorMode::Memoized { limit: 64 },
        },
        0xbeef,
        4000,
    );
}

#[test]
fn mass_free_then_reallocate_stays_in_place() {
    let mut pool = VecPool::default();
    let ids: Vec<VecId> = (0..100).map(|_| pool.alloc_zero()).collect();

    // Free everything in descending order: the whole free set collapses
    // into the ledger's contiguous run.
    for &id in ids.iter().rev() {
        pool.free(id).unwrap();
    }
    assert_eq!(pool.free_count(), 100);

    // Reallocation drains the run without growing the buffer.
    for _ in 0..100 {
        pool.alloc(1.0, 1.0, 1.0);
    }
    assert_eq!(pool.slot_count(), 100);
    assert_eq!(pool.high_water(), 100);
    assert_eq!(pool.free_count(), 0);
}
