//! Handle-to-offset translation.
//!
//! A handle's slot starts at element offset `(id - 1) * 3` in the component
//! buffer. The mapping is a pure function of the handle and stable for the
//! pool's lifetime, which is what makes memoizing it safe: the side table
//! never needs invalidation because handles are never renumbered.

use indexmap::IndexMap;
use triad_core::VecId;

use crate::config::CursorMode;

/// Compute the storage offset for a handle.
///
/// Handles are 1-based; the first slot lives at offset 0.
#[inline]
pub fn slot_offset(id: VecId) -> usize {
    debug_assert!(id.0 != 0, "VecId(0) is never issued");
    (id.0 as usize - 1) * 3
}

/// Offset lookup with optional memoization.
///
/// The strategy is fixed at construction from [`CursorMode`]. Under
/// [`CursorMode::Memoized`] the table records handles as they are issued,
/// up to the configured limit; lookups above the limit (or before a handle
/// was recorded) fall back to [`slot_offset`].
pub struct CursorMap {
    mode: CursorMode,
    table: IndexMap<VecId, usize>,
}

impl CursorMap {
    /// Create a cursor map with the given strategy.
    pub fn new(mode: CursorMode) -> Self {
        Self {
            mode,
            table: IndexMap::new(),
        }
    }

    /// Record a newly-issued handle in the memo table.
    ///
    /// No-op under [`CursorMode::Direct`] or for handles above the limit.
    /// Recording an already-known handle is harmless; the mapping cannot
    /// change.
    pub fn record(&mut self, id: VecId) {
        if let CursorMode::Memoized { limit } = self.mode {
            if id.0 <= limit {
                self.table.insert(id, slot_offset(id));
            }
        }
    }

    /// Resolve a handle to its storage offset.
    #[inline]
    pub fn offset(&self, id: VecId) -> usize {
        if let Some(&offset) = self.table.get(&id) {
            return offset;
        }
        slot_offset(id)
    }

    /// Number of handles currently memoized.
    pub fn memoized_count(&self) -> usize {
        self.table.len()
    }
}
