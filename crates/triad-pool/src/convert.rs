//! Conversion to the host engine's vector type.
//!
//! The pool itself never traffics in `glam` types; this adapter is the one
//! place a handle's value is materialized into a [`DVec3`] for code that
//! speaks the host math library.

use glam::DVec3;
use triad_core::VecId;

use crate::pool::VecPool;

impl VecPool {
    /// Materialize a handle's value as a host [`DVec3`].
    ///
    /// The conversion is one-way: host vectors go back into the pool
    /// through [`alloc`](Self::alloc) or
    /// [`set_components`](Self::set_components) like any other data.
    pub fn to_host(&self, id: VecId) -> DVec3 {
        DVec3::from_array(self.components(id))
    }
}
