//! Target Identity
//!
//! The opaque key a scheduled callback is bound to. The scheduler only ever
//! compares and hashes these; it never looks through them, so embedders are
//! free to mint them from a [`crate::director::Director`] or derive them from
//! their own object identity scheme via [`TargetId::from_raw`].

use serde::{Deserialize, Serialize};

/// Opaque identity of a scheduling target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(u64);

impl TargetId {
    /// Wrap a raw identity value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identity value.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "target({})", self.0)
    }
}
