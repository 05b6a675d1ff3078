//! Result-producing IR visitor and transformer protocol.
//!
//! [`IrVisitor`] has one method per element variant. Every method defaults
//! to a more general one: `visit_element` for most variants,
//! `visit_branch` for `visit_else_branch`, and `visit_error_expression` for
//! `visit_error_call_expression`. Only `visit_element` must be implemented.
//!
//! The visitor receives `&mut IrArena`, so it can allocate and rewrite.
//! A transformer is an `IrVisitor<ElementId, D>`: each method returns the
//! element that replaces the visited one. [`transform_children`] replaces
//! every owned child slot of a node with the transformed result, and
//! [`walk_transform`] is the usual "transform my children, keep me" body.
//!
//! # Example
//!
//! ```text
//! struct DropComposites;
//!
//! impl IrVisitor<ElementId, ()> for DropComposites {
//!     fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
//!         walk_transform(self, arena, id, ())
//!     }
//! }
//! ```

use smallvec::SmallVec;

use crate::element::{for_each_element, ElementKind};
use crate::{ElementId, IrArena};

macro_rules! define_visitor {
    ($($variant:ident => $visit:ident, $fallback:ident;)*) => {
        /// Visitor over IR elements with mutable access to the arena.
        pub trait IrVisitor<R, D: Copy> {
            /// Fallback for every variant without a dedicated override.
            fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, data: D) -> R;

            $(
                #[doc = concat!(
                    "Visit a [`",
                    stringify!($variant),
                    "`](crate::element::",
                    stringify!($variant),
                    ")."
                )]
                fn $visit(&mut self, arena: &mut IrArena, id: ElementId, data: D) -> R {
                    self.$fallback(arena, id, data)
                }
            )*
        }

        /// Per-variant method names of [`IrVisitor`], in declaration order.
        pub const VISIT_METHODS: &[&str] = &[$(stringify!($visit),)*];

        /// Dispatch `id` to the visitor method for its variant.
        pub fn accept<R, D, V>(visitor: &mut V, arena: &mut IrArena, id: ElementId, data: D) -> R
        where
            D: Copy,
            V: IrVisitor<R, D> + ?Sized,
        {
            match arena.kind(id) {
                $(ElementKind::$variant => visitor.$visit(arena, id, data),)*
            }
        }
    };
}

for_each_element!(define_visitor);

/// Accept every owned child of `id`, in slot order. Results are discarded.
pub fn accept_children<R, D, V>(visitor: &mut V, arena: &mut IrArena, id: ElementId, data: D)
where
    D: Copy,
    V: IrVisitor<R, D> + ?Sized,
{
    for child in arena.children(id) {
        accept(visitor, arena, child, data);
    }
}

/// Transform `id`: the element returned replaces it in its parent's slot.
pub fn transform<D, V>(
    transformer: &mut V,
    arena: &mut IrArena,
    id: ElementId,
    data: D,
) -> ElementId
where
    D: Copy,
    V: IrVisitor<ElementId, D> + ?Sized,
{
    accept(transformer, arena, id, data)
}

/// Replace every owned child slot of `id` with its transformed element.
///
/// Slots are read first, each child is transformed, then the results are
/// written back with ownership and slot-kind checks. Single, optional and
/// list slots are handled alike; absent optional slots are skipped.
///
/// # Panics
/// Panics if a replacement is already owned elsewhere, does not fit the
/// slot it is written to, or the transformer changed the slot layout of `id`.
pub fn transform_children<D, V>(transformer: &mut V, arena: &mut IrArena, id: ElementId, data: D)
where
    D: Copy,
    V: IrVisitor<ElementId, D> + ?Sized,
{
    let slots = arena.child_slots(id);
    if slots.is_empty() {
        return;
    }
    let mut replacements: SmallVec<[ElementId; 8]> = SmallVec::with_capacity(slots.len());
    for &(_, child) in &slots {
        replacements.push(transform(transformer, arena, child, data));
    }
    arena.replace_child_slots(id, &slots, &replacements);
}

/// Transform the children of `id` and keep `id` itself.
pub fn walk_transform<D, V>(
    transformer: &mut V,
    arena: &mut IrArena,
    id: ElementId,
    data: D,
) -> ElementId
where
    D: Copy,
    V: IrVisitor<ElementId, D> + ?Sized,
{
    transform_children(transformer, arena, id, data);
    id
}

#[cfg(test)]
mod tests;
