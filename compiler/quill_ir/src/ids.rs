//! Index handles into the IR arena and the type pool.
//!
//! - [`ElementId`]: an element owned by an [`IrArena`](crate::IrArena)
//! - [`Symbol`]: a non-owning reference to a declaration element
//! - [`TypeId`]: a resolved type stored in the type pool

use std::fmt;

/// Index of an element in the IR arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ElementId(u32);

impl ElementId {
    /// Sentinel for "no element".
    pub const INVALID: ElementId = ElementId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ElementId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ElementId({})", self.0)
        } else {
            write!(f, "ElementId::INVALID")
        }
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Non-owning reference to a declaration (call target, read variable,
/// jump target). Symbols are never traversed as children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Symbol(pub ElementId);

impl Symbol {
    #[inline]
    pub const fn owner(self) -> ElementId {
        self.0
    }
}

/// Index of a resolved type in the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Sentinel for "type not computed".
    pub const NONE: TypeId = TypeId(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            write!(f, "TypeId::NONE")
        } else {
            write!(f, "TypeId({})", self.0)
        }
    }
}

/// Convert a collection length into a `u32` handle index.
///
/// # Panics
/// Panics when the collection outgrows `u32`, which would silently alias
/// handles otherwise.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}
