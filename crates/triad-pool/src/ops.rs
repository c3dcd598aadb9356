//! Arithmetic and query operations over pooled vectors.
//!
//! Every operation resolves its handles through the pool's cursor map and
//! touches the slot directly, so all of these are O(1). In-place binary ops
//! write their result into the first operand.

use triad_core::{PoolError, VecId};

use crate::pool::VecPool;

impl VecPool {
    /// Euclidean length of the vector.
    pub fn magnitude(&self, id: VecId) -> f64 {
        let [x, y, z] = self.components(id);
        (x * x + y * y + z * z).sqrt()
    }

    /// Scale the vector to unit length, in place.
    ///
    /// Fails with [`PoolError::DegenerateVector`] when the magnitude is
    /// zero; the components are left untouched in that case.
    pub fn normalize(&mut self, id: VecId) -> Result<(), PoolError> {
        let magnitude = self.magnitude(id);
        if magnitude == 0.0 {
            return Err(PoolError::DegenerateVector { id });
        }
        self.normalize_with_magnitude(id, magnitude);
        Ok(())
    }

    /// Scale the vector by `1 / magnitude`, in place, with no zero check.
    ///
    /// For callers that already computed the magnitude and know it is
    /// non-zero. Passing zero divides by zero and produces infinities;
    /// that contract stays with the caller.
    pub fn normalize_with_magnitude(&mut self, id: VecId, magnitude: f64) {
        let [x, y, z] = self.components(id);
        self.set_components(id, x / magnitude, y / magnitude, z / magnitude);
    }

    /// `a += b`, component-wise.
    pub fn add(&mut self, a: VecId, b: VecId) {
        let [bx, by, bz] = self.components(b);
        let [ax, ay, az] = self.components(a);
        self.set_components(a, ax + bx, ay + by, az + bz);
    }

    /// `a -= b`, component-wise.
    pub fn sub(&mut self, a: VecId, b: VecId) {
        let [bx, by, bz] = self.components(b);
        let [ax, ay, az] = self.components(a);
        self.set_components(a, ax - bx, ay - by, az - bz);
    }

    /// Multiply every component by `factor`, in place.
    pub fn scale(&mut self, id: VecId, factor: f64) {
        let [x, y, z] = self.components(id);
        self.set_components(id, x * factor, y * factor, z * factor);
    }

    /// Divide every component by `divisor`, in place.
    pub fn div(&mut self, id: VecId, divisor: f64) {
        let [x, y, z] = self.components(id);
        self.set_components(id, x / divisor, y / divisor, z / divisor);
    }

    /// Divide every component by `divisor` and round toward negative
    /// infinity, in place.
    pub fn div_floor(&mut self, id: VecId, divisor: f64) {
        let [x, y, z] = self.components(id);
        self.set_components(
            id,
            (x / divisor).floor(),
            (y / divisor).floor(),
            (z / divisor).floor(),
        );
    }

    /// Dot product of two vectors.
    pub fn dot(&self, a: VecId, b: VecId) -> f64 {
        let [ax, ay, az] = self.components(a);
        let [bx, by, bz] = self.components(b);
        ax * bx + ay * by + az * bz
    }

    /// Cross product `a × b`, written into `a`.
    pub fn cross(&mut self, a: VecId, b: VecId) {
        let [ax, ay, az] = self.components(a);
        let [bx, by, bz] = self.components(b);
        self.set_components(
            a,
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        );
    }

    /// Overwrite `dst`'s components with `src`'s.
    pub fn copy_from(&mut self, dst: VecId, src: VecId) {
        let [x, y, z] = self.components(src);
        self.set_components(dst, x, y, z);
    }

    /// Clamp every component to `[min, max]`, in place.
    ///
    /// Returns the same handle so calls can be chained into an allocation:
    /// `let v = pool.clamp(v, 0.0, 1.0);`.
    pub fn clamp(&mut self, id: VecId, min: f64, max: f64) -> VecId {
        let [x, y, z] = self.components(id);
        self.set_components(id, x.clamp(min, max), y.clamp(min, max), z.clamp(min, max));
        id
    }

    /// Allocate `(0, 0, 0)`.
    pub fn zero(&mut self) -> VecId {
        self.alloc(0.0, 0.0, 0.0)
    }

    /// Allocate `(1, 1, 1)`.
    pub fn one(&mut self) -> VecId {
        self.alloc(1.0, 1.0, 1.0)
    }

    /// Allocate the x axis `(1, 0, 0)`.
    pub fn unit_x(&mut self) -> VecId {
        self.alloc(1.0, 0.0, 0.0)
    }

    /// Allocate the y axis `(0, 1, 0)`.
    pub fn unit_y(&mut self) -> VecId {
        self.alloc(0.0, 1.0, 0.0)
    }

    /// Allocate the z axis `(0, 0, 1)`.
    pub fn unit_z(&mut self) -> VecId {
        self.alloc(0.0, 0.0, 1.0)
    }
}
