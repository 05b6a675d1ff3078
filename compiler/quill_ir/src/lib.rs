//! Quill IR - typed intermediate representation tree
//!
//! This crate contains the IR data structures shared by the Quill middle end:
//! - Spans for source offsets
//! - Names and qualified names for interned identifiers
//! - IR elements (declarations, expressions, bodies) in an ownership-checked arena
//! - Two visitor protocols: [`IrVisitor`] (may transform) and [`IrThinVisitor`] (read-only)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No Box<Element>, children are ElementId(u32) handles
//! - **One Variant List**: the element enum, its kind tag and both visitor
//!   traits are generated from a single list, so they cannot drift apart
//!
//! Types that contain floats store them as bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod builtins;
pub mod element;
mod fq_name;
mod ids;
mod interner;
mod name;
mod span;
pub mod thin_visitor;
pub mod visitor;

#[cfg(test)]
mod test_fixtures;

pub use arena::{ChildList, IrArena};
pub use builtins::{IrBuiltIns, ModuleDescriptor};
pub use element::{Element, ElementKind, ElementVariant, SlotKind, StatementContainer};
pub use fq_name::{CallableId, ClassId, FqName};
pub use ids::{ElementId, Symbol, TypeId};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError, UNDEFINED_OFFSET};
pub use thin_visitor::{accept_children_thin, accept_thin, IrThinVisitor};
pub use visitor::{
    accept, accept_children, transform, transform_children, walk_transform, IrVisitor,
};

static_assert_size!(Span, 8);
static_assert_size!(ElementId, 4);
static_assert_size!(TypeId, 4);
static_assert_size!(Name, 4);
