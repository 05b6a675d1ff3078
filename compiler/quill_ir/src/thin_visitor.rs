//! Read-only IR visitor protocol.
//!
//! [`IrThinVisitor`] mirrors [`IrVisitor`](crate::IrVisitor) method for
//! method, with the same defaults, but only receives `&IrArena`. It cannot
//! rewrite the tree, which lets several thin visitors walk disjoint
//! subtrees of one arena on different threads.

use crate::element::{for_each_element, Children, ElementKind};
use crate::{ElementId, IrArena};

macro_rules! define_thin_visitor {
    ($($variant:ident => $visit:ident, $fallback:ident;)*) => {
        /// Visitor over IR elements with shared access to the arena.
        pub trait IrThinVisitor<R, D: Copy> {
            fn visit_element(&mut self, arena: &IrArena, id: ElementId, data: D) -> R;

            $(
                fn $visit(&mut self, arena: &IrArena, id: ElementId, data: D) -> R {
                    self.$fallback(arena, id, data)
                }
            )*
        }

        /// Per-variant method names of [`IrThinVisitor`], in declaration order.
        pub const VISIT_METHODS: &[&str] = &[$(stringify!($visit),)*];

        /// Dispatch `id` to the thin visitor method for its variant.
        pub fn accept_thin<R, D, V>(visitor: &mut V, arena: &IrArena, id: ElementId, data: D) -> R
        where
            D: Copy,
            V: IrThinVisitor<R, D> + ?Sized,
        {
            match arena.kind(id) {
                $(ElementKind::$variant => visitor.$visit(arena, id, data),)*
            }
        }
    };
}

for_each_element!(define_thin_visitor);

/// Accept every owned child of `id`, in slot order. Results are discarded.
pub fn accept_children_thin<R, D, V>(visitor: &mut V, arena: &IrArena, id: ElementId, data: D)
where
    D: Copy,
    V: IrThinVisitor<R, D> + ?Sized,
{
    arena.element(id).for_each_child(&mut |child| {
        accept_thin(visitor, arena, child, data);
    });
}
