//! The free-slot ledger.
//!
//! [`FreeLedger`] tracks which handles are free using a compact encoding:
//! entry 0 is the *floor* of a contiguous run of free handles, and every
//! later entry tracks one free handle individually. The run's length is
//! implicit (the logical free count minus the individually-tracked entries),
//! so freeing downward from the floor and reusing upward from it both move
//! entry 0 in place instead of inserting or removing entries.
//!
//! Two insert policies are supported, fixed at construction:
//! [`FreePolicy::Unordered`] appends in O(1); [`FreePolicy::Ordered`] keeps
//! the entries sorted ascending via [`floor_search`] in O(log n).

use smallvec::SmallVec;

use crate::config::FreePolicy;

/// Inline capacity for ledger entries. Pools whose free set stays this
/// small never heap-allocate the ledger.
const INLINE_ENTRIES: usize = 8;

/// The set of free handles, compactly encoded.
///
/// Invariants:
/// - entries are empty exactly when the logical free count is zero;
/// - entry 0 encodes the run `floor..floor + run_len` where
///   `run_len = free_count - (entries.len() - 1)`;
/// - under [`FreePolicy::Ordered`], entries are sorted ascending.
///
/// The run always carries at least the floor itself, so `run_len >= 1`
/// whenever the ledger is non-empty.
pub struct FreeLedger {
    entries: SmallVec<[u32; INLINE_ENTRIES]>,
    free_count: u32,
    policy: FreePolicy,
}

impl FreeLedger {
    /// Create an empty ledger with the given insert policy.
    pub fn new(policy: FreePolicy) -> Self {
        Self {
            entries: SmallVec::new(),
            free_count: 0,
            policy,
        }
    }

    /// Logical number of free handles.
    pub fn len(&self) -> u32 {
        self.free_count
    }

    /// Whether the free set is empty.
    pub fn is_empty(&self) -> bool {
        self.free_count == 0
    }

    /// Take a handle out of the free set for reuse.
    ///
    /// Selection rule: when more than one entry exists, or the floor has
    /// caught up to `high_water` (nothing contiguous remains above it), the
    /// *last* entry is popped; otherwise the floor itself is reused and
    /// advanced in place, shrinking the contiguous run from its low end.
    /// Which physical slot a given call sequence recycles depends on this
    /// rule, so callers relying on slot locality get a stable answer.
    ///
    /// Returns `None` when the free set is empty (the caller grows storage
    /// instead).
    pub fn acquire(&mut self, high_water: u32) -> Option<u32> {
        debug_assert_eq!(self.entries.is_empty(), self.free_count == 0);
        let &floor = self.entries.first()?;
        let id = if self.entries.len() > 1 || floor == high_water {
            self.entries.pop()?
        } else {
            self.entries[0] += 1;
            floor
        };
        self.free_count -= 1;
        if self.free_count == 0 {
            // A drained run may leave its advanced floor behind; dropping it
            // keeps "no entries" and "no free handles" in lockstep.
            self.entries.clear();
        }
        Some(id)
    }

    /// Add a freed handle to the free set.
    ///
    /// If the handle sits immediately below the floor, the floor moves down
    /// in place and the contiguous run grows by one; otherwise the handle is
    /// recorded individually per the configured [`FreePolicy`].
    ///
    /// The caller must not release a handle that is already free: the
    /// ledger cannot detect it and the encoding degrades.
    pub fn release(&mut self, id: u32) {
        if let Some(floor) = self.entries.first_mut() {
            if *floor == id + 1 {
                *floor = id;
                self.free_count += 1;
                return;
            }
        }
        match self.policy {
            FreePolicy::Unordered => self.entries.push(id),
            FreePolicy::Ordered => {
                if self.entries.first().is_some_and(|&floor| id < floor) {
                    // The floor is about to lose index 0. Its run members
                    // are implicit, so write them out as tracked entries
                    // first; otherwise the run would re-anchor on `id` and
                    // swallow handles that are still live.
                    let floor = self.entries[0];
                    let run = self.free_count - (self.entries.len() as u32 - 1);
                    self.entries.insert_many(1, (floor + 1)..(floor + run));
                }
                let at = floor_search(&self.entries, id);
                self.entries.insert(at, id);
            }
        }
        self.free_count += 1;
    }

    #[cfg(test)]
    fn entries(&self) -> &[u32] {
        &self.entries
    }
}

/// Binary search for the insertion point of `target` in an ascending slice.
///
/// Returns the index of the first entry not strictly less than `target` —
/// equivalently, the count of entries below it. `0` when `target` is below
/// every entry, `entries.len()` when it is above every entry.
pub fn floor_search(entries: &[u32], target: u32) -> usize {
    let mut lo = 0;
    let mut hi = entries.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if entries[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
