//! Pool configuration parameters.

/// Configuration for a [`VecPool`](crate::VecPool).
///
/// All values are consulted once at construction and immutable afterwards.
/// The reclaim and cursor strategies are stored in the pool as plain enum
/// state, not swapped function pointers, so a pool's behavior is fully
/// determined by the config it was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of vector slots to reserve backing storage for up front.
    ///
    /// This is a capacity reservation, not a set of live slots: the pool
    /// starts empty either way, but the first `initial_slots` allocations
    /// will not reallocate the buffer.
    pub initial_slots: usize,

    /// How freed handles are recorded in the free ledger.
    pub free_policy: FreePolicy,

    /// Whether handle-to-offset translation is memoized.
    pub cursor_memo: CursorMode,
}

impl PoolConfig {
    /// Default slot reservation: none. Callers with a known working set
    /// should set [`PoolConfig::initial_slots`] to avoid growth churn.
    pub const DEFAULT_INITIAL_SLOTS: usize = 0;

    /// Default memo table limit for [`CursorMode::Memoized`].
    ///
    /// Beyond a few thousand handles the table's memory outweighs the lookup
    /// saving, so memoization stops recording above this id by default.
    pub const DEFAULT_MEMO_LIMIT: u32 = 4096;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_slots: Self::DEFAULT_INITIAL_SLOTS,
            free_policy: FreePolicy::Unordered,
            cursor_memo: CursorMode::Direct,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How freed handles are inserted into the free ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FreePolicy {
    /// Append freed handles in arrival order. O(1) per free.
    #[default]
    Unordered,
    /// Keep the ledger sorted ascending via binary search. O(log n) per
    /// free, which makes contiguous-run detection cheaper later.
    Ordered,
}

/// How handle-to-offset translation is performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    /// Always compute the offset arithmetically.
    #[default]
    Direct,
    /// Cache offsets in a side table for handles at or below `limit`.
    ///
    /// The table is populated when a handle is issued and never
    /// invalidated — the mapping is stable because handles are never
    /// renumbered. Handles above `limit` fall back to arithmetic.
    Memoized {
        /// Largest handle value recorded in the table.
        limit: u32,
    },
}
