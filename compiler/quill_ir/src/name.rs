//! Identifier handles handed out by [`StringInterner`](crate::StringInterner).

use std::fmt;

const SHARD_BITS: u32 = 4;
const LOCAL_BITS: u32 = u32::BITS - SHARD_BITS;

/// An interned identifier: simple names, package segments, file names.
///
/// The high four bits select the interner shard and the rest index into
/// it, so lookup never has to hash. `Default` is the empty name, which every
/// interner reserves at index zero of shard zero.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    pub const EMPTY: Name = Name(0);

    /// Largest index a single shard can hand out.
    pub const MAX_LOCAL: u32 = (1 << LOCAL_BITS) - 1;

    pub const NUM_SHARDS: usize = 1 << SHARD_BITS;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << LOCAL_BITS) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> LOCAL_BITS) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Name(<empty>)")
        } else {
            write!(f, "Name({}:{})", self.shard(), self.local())
        }
    }
}
