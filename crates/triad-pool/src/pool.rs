//! The pool allocator.
//!
//! [`VecPool`] ties the pieces together: it owns the component buffer, the
//! free ledger, the cursor map, and the high-water mark, and decides on each
//! allocation whether to grow storage or recycle a freed slot.

use std::fmt;

use triad_core::{PoolError, VecId};

use crate::config::PoolConfig;
use crate::cursor::CursorMap;
use crate::ledger::FreeLedger;
use crate::storage::Storage;

/// A fixed-layout pool of 3-component vectors addressed by [`VecId`] handles.
///
/// All vector data lives in one contiguous buffer; handles are small
/// integers, so callers can store and copy them freely without touching the
/// heap. The pool is single-threaded: every mutating operation takes
/// `&mut self`, and a single owner drives all calls.
///
/// Freed slots are recycled by later allocations. A handle is never reused
/// while it is live, and the buffer never shrinks.
pub struct VecPool {
    storage: Storage,
    ledger: FreeLedger,
    cursors: CursorMap,
    /// Largest handle value ever issued.
    high_water: u32,
}

impl VecPool {
    /// Create a pool from a configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            storage: Storage::with_slot_capacity(config.initial_slots),
            ledger: FreeLedger::new(config.free_policy),
            cursors: CursorMap::new(config.cursor_memo),
            high_water: 0,
        }
    }

    /// Allocate a vector holding `(x, y, z)`.
    ///
    /// Recycles a freed slot when one exists, otherwise grows the buffer by
    /// one slot. The returned handle is unique among live handles.
    pub fn alloc(&mut self, x: f64, y: f64, z: f64) -> VecId {
        let id = match self.ledger.acquire(self.high_water) {
            Some(raw) => {
                let id = VecId(raw);
                self.storage.set(self.cursors.offset(id), [x, y, z]);
                id
            }
            None => {
                self.storage.grow(x, y, z);
                self.high_water += 1;
                VecId(self.high_water)
            }
        };
        self.cursors.record(id);
        id
    }

    /// Allocate a vector with all components zero.
    pub fn alloc_zero(&mut self) -> VecId {
        self.alloc(0.0, 0.0, 0.0)
    }

    /// Return a handle's slot to the pool.
    ///
    /// The slot's components are zeroed and the handle becomes eligible for
    /// reuse by a later [`alloc`](Self::alloc). Fails with
    /// [`PoolError::OutOfRange`] for handles the pool never issued, with no
    /// state touched.
    ///
    /// Known gap: freeing an in-range handle that is *already* free is not
    /// detected. It corrupts the free ledger and later allocations may hand
    /// out a handle twice. Callers own handle lifetimes, as with any manual
    /// allocator.
    pub fn free(&mut self, id: VecId) -> Result<(), PoolError> {
        if id.0 == 0 || id.0 > self.high_water {
            return Err(PoolError::OutOfRange {
                id,
                high_water: self.high_water,
            });
        }
        self.storage.set(self.cursors.offset(id), [0.0; 3]);
        self.ledger.release(id.0);
        Ok(())
    }

    /// Read a handle's components.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never issued by this pool. Reads of freed (but
    /// in-range) handles return the zeroed slot; handle validity is the
    /// caller's contract, as everywhere in this API.
    pub fn components(&self, id: VecId) -> [f64; 3] {
        self.storage.get(self.cursors.offset(id))
    }

    /// Overwrite a handle's components.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never issued by this pool.
    pub fn set_components(&mut self, id: VecId, x: f64, y: f64, z: f64) {
        self.storage.set(self.cursors.offset(id), [x, y, z]);
    }

    /// Largest handle value ever issued.
    pub fn high_water(&self) -> u32 {
        self.high_water
    }

    /// Number of handles currently free.
    pub fn free_count(&self) -> u32 {
        self.ledger.len()
    }

    /// Number of handles currently live.
    pub fn live_count(&self) -> u32 {
        self.high_water - self.ledger.len()
    }

    /// Total slots in the buffer, live and free alike.
    pub fn slot_count(&self) -> usize {
        self.storage.slot_count()
    }

    /// Memory usage of the component buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    /// A [`fmt::Display`] view of a handle's value, for diagnostics.
    ///
    /// ```
    /// # use triad_pool::VecPool;
    /// let mut pool = VecPool::default();
    /// let v = pool.alloc(1.0, 2.5, -3.0);
    /// assert_eq!(pool.display(v).to_string(), "(1, 2.5, -3)");
    /// ```
    pub fn display(&self, id: VecId) -> VecDisplay<'_> {
        VecDisplay { pool: self, id }
    }
}

impl Default for VecPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

/// Borrowed display adapter returned by [`VecPool::display`].
pub struct VecDisplay<'a> {
    pool: &'a VecPool,
    id: VecId,
}

impl fmt::Display for VecDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.pool.components(self.id);
        write!(f, "({x}, {y}, {z})")
    }
}
