//! The tick-generation counter.
//!
//! The host scheduler advances time in discrete steps; this engine only ever
//! compares ticks for equality (cache invalidation) and records them in
//! per-agent memory.  Stored as `u64` to avoid overflow concerns entirely.

use std::fmt;

/// An absolute scheduling-step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
