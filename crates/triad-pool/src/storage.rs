//! The flat component buffer.
//!
//! [`Storage`] holds every slot's 3 components in one contiguous `Vec<f64>`.
//! It grows by exactly one slot at a time and never shrinks or compacts, so
//! a slot's offset is stable for the life of the pool.

/// Contiguous backing storage for vector components.
///
/// Offsets are element indices into the buffer; a slot occupies the three
/// elements starting at its offset. Storage performs no validity tracking of
/// its own — the allocator guarantees that every offset it hands out points
/// at a real slot.
pub struct Storage {
    /// Backing buffer. Length is always a multiple of 3.
    data: Vec<f64>,
}

impl Storage {
    /// Create storage with capacity reserved for `initial_slots` slots.
    ///
    /// The buffer starts empty; the reservation only pre-sizes the
    /// allocation so early growth does not reallocate.
    pub fn with_slot_capacity(initial_slots: usize) -> Self {
        Self {
            data: Vec::with_capacity(initial_slots * 3),
        }
    }

    /// Append one slot holding `(x, y, z)` and return its offset.
    pub fn grow(&mut self, x: f64, y: f64, z: f64) -> usize {
        let offset = self.data.len();
        self.data.extend_from_slice(&[x, y, z]);
        offset
    }

    /// Read the three components at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not the start of an existing slot.
    pub fn get(&self, offset: usize) -> [f64; 3] {
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Overwrite the three components at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not the start of an existing slot.
    pub fn set(&mut self, offset: usize, components: [f64; 3]) {
        self.data[offset..offset + 3].copy_from_slice(&components);
    }

    /// Number of slots the buffer currently holds (live and free alike).
    pub fn slot_count(&self) -> usize {
        self.data.len() / 3
    }

    /// Total component count (always `3 * slot_count`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no slot has ever been created.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_appends_three_components() {
        let mut storage = Storage::with_slot_capacity(0);
        let off = storage.grow(1.0, 2.0, 3.0);
        assert_eq!(off, 0);
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.get(0), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn offsets_advance_by_slot_width() {
        let mut storage = Storage::with_slot_capacity(4);
        assert_eq!(storage.grow(0.0, 0.0, 0.0), 0);
        assert_eq!(storage.grow(0.0, 0.0, 0.0), 3);
        assert_eq!(storage.grow(0.0, 0.0, 0.0), 6);
        assert_eq!(storage.slot_count(), 3);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut storage = Storage::with_slot_capacity(1);
        let off = storage.grow(1.0, 1.0, 1.0);
        storage.set(off, [4.0, 5.0, 6.0]);
        assert_eq!(storage.get(off), [4.0, 5.0, 6.0]);
        assert_eq!(storage.len(), 3);
    }

    #[test]
    fn capacity_reservation_covers_initial_slots() {
        let storage = Storage::with_slot_capacity(16);
        assert!(storage.memory_bytes() >= 16 * 3 * std::mem::size_of::<f64>());
        assert!(storage.is_empty());
    }

    #[test]
    #[should_panic]
    fn get_past_end_panics() {
        let storage = Storage::with_slot_capacity(0);
        storage.get(0);
    }
}
