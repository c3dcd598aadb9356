//! The strongly-typed vector handle.

use std::fmt;

/// Names a vector slot inside a pool.
///
/// Handles are 1-based: the first slot ever created is `VecId(1)`, and
/// `VecId(0)` is never issued. A handle stays valid for the lifetime of the
/// pool that issued it; slots are recycled, but a handle's storage offset
/// never changes while it is live. Handles from different pools are not
/// interchangeable; nothing ties a `VecId` to the pool that issued it, so
/// keeping them straight is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VecId(pub u32);

impl fmt::Display for VecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VecId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(VecId(7).to_string(), "7");
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(VecId(1) < VecId(2));
        assert_eq!(VecId(3), VecId::from(3));
    }
}
