//! Element arena with ownership tracking.
//!
//! [`IrArena`] stores elements in struct-of-arrays layout: parallel
//! `elements`, `spans` and `parents` vectors indexed by [`ElementId`].
//!
//! # Ownership
//!
//! Every element has at most one parent. Allocation adopts the children a
//! node is built with; replacing a slot (through [`IrArena::update`] or
//! `transform_children`) orphans the old child and adopts the new one.
//! Attaching an element that already has a parent panics, as does putting
//! an element into a slot of the wrong kind.
//!
//! A replacement may also be a descendant of the child it replaces, which
//! is how a transformation hoists a node out of a wrapper it drops. The
//! dropped wrapper is left orphaned.

use smallvec::SmallVec;

use crate::element::{Children, Element, ElementKind, ElementVariant, SlotKind};
use crate::ids::to_u32;
use crate::{ElementId, Span};

/// Child list returned by [`IrArena::children`].
pub type ChildList = SmallVec<[ElementId; 8]>;

/// Arena owning every IR element of a module.
#[derive(Clone, Debug, Default)]
pub struct IrArena {
    elements: Vec<Element>,
    /// Source offsets (parallel with `elements`).
    spans: Vec<Span>,
    /// Owning element, `INVALID` for roots and orphans (parallel with `elements`).
    parents: Vec<ElementId>,
}

impl IrArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IrArena {
            elements: Vec::with_capacity(capacity),
            spans: Vec::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
        }
    }

    /// Allocate an element and adopt its children.
    ///
    /// Module fragments always get the undefined span.
    ///
    /// # Panics
    /// Panics if a child id is not allocated, already has a parent, or does
    /// not fit its slot.
    pub fn alloc(&mut self, span: Span, node: impl Into<Element>) -> ElementId {
        let mut element = node.into();
        let id = ElementId::new(to_u32(self.elements.len(), "IR elements"));

        let mut slots: SmallVec<[(SlotKind, ElementId); 8]> = SmallVec::new();
        element.for_each_child_mut(&mut |slot, child| slots.push((slot, *child)));
        for &(slot, child) in &slots {
            self.check_attachable(id, element.kind(), slot, child, None);
            self.parents[child.index()] = id;
        }

        let span = if element.kind() == ElementKind::ModuleFragment {
            Span::UNDEFINED
        } else {
            span
        };
        self.elements.push(element);
        self.spans.push(span);
        self.parents.push(ElementId::INVALID);
        id
    }

    #[inline]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ElementId) -> ElementKind {
        self.elements[id.index()].kind()
    }

    #[inline]
    pub fn span(&self, id: ElementId) -> Span {
        self.spans[id.index()]
    }

    /// Owning element, `None` for roots and orphans.
    #[inline]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        let parent = self.parents[id.index()];
        parent.is_valid().then_some(parent)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Typed view of an element, `None` on a kind mismatch.
    pub fn try_get<T: ElementVariant>(&self, id: ElementId) -> Option<&T> {
        T::from_element(&self.elements[id.index()])
    }

    /// Typed view of an element.
    ///
    /// # Panics
    /// Panics if the element is not a `T`.
    pub fn get<T: ElementVariant>(&self, id: ElementId) -> &T {
        let element = &self.elements[id.index()];
        T::from_element(element).unwrap_or_else(|| {
            panic!(
                "{id:?} is a {}, not a {}",
                element.kind().name(),
                T::KIND.name()
            )
        })
    }

    /// Unchecked mutable view; only [`IrArena::update`] hands it out.
    fn get_mut<T: ElementVariant>(&mut self, id: ElementId) -> &mut T {
        let element = &mut self.elements[id.index()];
        let kind = element.kind();
        match T::from_element_mut(element) {
            Some(node) => node,
            None => panic!("{id:?} is a {}, not a {}", kind.name(), T::KIND.name()),
        }
    }

    /// Owned children in traversal order.
    pub fn children(&self, id: ElementId) -> ChildList {
        let mut children = ChildList::new();
        self.elements[id.index()].for_each_child(&mut |child| children.push(child));
        children
    }

    /// Edit a node in place.
    ///
    /// This is the only way to mutate an allocated element. Children dropped
    /// by `edit` are orphaned; children added are checked and adopted.
    ///
    /// # Panics
    /// Panics if the element is not a `T`, a child ends up in two slots, or
    /// an added child violates ownership or its slot kind.
    pub fn update<T: ElementVariant, R>(
        &mut self,
        id: ElementId,
        edit: impl FnOnce(&mut T) -> R,
    ) -> R {
        let before = self.children(id);
        let result = edit(self.get_mut::<T>(id));

        let mut after: SmallVec<[(SlotKind, ElementId); 8]> = SmallVec::new();
        self.elements[id.index()].for_each_child_mut(&mut |slot, child| after.push((slot, *child)));

        for (i, &(_, child)) in after.iter().enumerate() {
            assert!(
                !after[..i].iter().any(|&(_, earlier)| earlier == child),
                "{child:?} appears in two child slots of {id:?}"
            );
        }
        for &old in &before {
            if !after.iter().any(|&(_, child)| child == old) {
                self.parents[old.index()] = ElementId::INVALID;
            }
        }
        for &(slot, child) in &after {
            if before.contains(&child) {
                continue;
            }
            self.check_attachable(id, T::KIND, slot, child, None);
            self.parents[child.index()] = id;
        }
        result
    }

    /// Release `id` from its parent so it can be attached elsewhere.
    ///
    /// The former parent keeps the id in its slot until that slot is
    /// replaced; until then the former parent must not be traversed.
    pub fn detach(&mut self, id: ElementId) {
        self.parents[id.index()] = ElementId::INVALID;
    }

    /// Whether `id` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.parents[id.index()];
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.parents[current.index()];
        }
        false
    }

    /// Snapshot of a node's child slots, for two-phase replacement.
    pub(crate) fn child_slots(&mut self, id: ElementId) -> SmallVec<[(SlotKind, ElementId); 8]> {
        let mut slots = SmallVec::new();
        self.elements[id.index()].for_each_child_mut(&mut |slot, child| slots.push((slot, *child)));
        slots
    }

    /// Write back replaced child slots produced from [`IrArena::child_slots`].
    ///
    /// # Panics
    /// Panics if the slot count changed in between, or a replacement fails
    /// the ownership or slot-kind checks.
    pub(crate) fn replace_child_slots(
        &mut self,
        id: ElementId,
        old: &[(SlotKind, ElementId)],
        new: &[ElementId],
    ) {
        let kind = self.kind(id);
        for (i, (&(slot, old_child), &new_child)) in old.iter().zip(new).enumerate() {
            if old_child != new_child {
                self.check_attachable(id, kind, slot, new_child, Some(old_child));
                assert!(
                    !new[..i].contains(&new_child),
                    "{new_child:?} returned for two child slots of {id:?}"
                );
            }
        }

        let mut index = 0;
        self.elements[id.index()].for_each_child_mut(&mut |_, child| {
            if let Some(&replacement) = new.get(index) {
                *child = replacement;
            }
            index += 1;
        });
        assert_eq!(
            index,
            new.len(),
            "child slots of {id:?} changed while its children were transformed"
        );

        for (&(_, old_child), &new_child) in old.iter().zip(new) {
            if old_child == new_child {
                continue;
            }
            tracing::trace!(
                parent = ?id,
                old = ?old_child,
                new = ?new_child,
                "replaced child slot"
            );
            if self.parents[old_child.index()] == id {
                self.parents[old_child.index()] = ElementId::INVALID;
            }
            self.parents[new_child.index()] = id;
        }
    }

    fn check_attachable(
        &self,
        parent: ElementId,
        parent_kind: ElementKind,
        slot: SlotKind,
        child: ElementId,
        replacing: Option<ElementId>,
    ) {
        assert!(
            child.is_valid() && child.index() < self.elements.len(),
            "{} {parent:?} refers to unallocated child {child:?}",
            parent_kind.name()
        );
        let child_kind = self.kind(child);
        assert!(
            slot.accepts(child_kind),
            "{} slot of {} {parent:?} cannot hold a {}",
            slot_name(slot),
            parent_kind.name(),
            child_kind.name()
        );
        let allocated = parent.index() < self.elements.len();
        assert!(
            !allocated || (child != parent && !self.is_descendant_of(parent, child)),
            "attaching {child:?} under {parent:?} would create a cycle"
        );
        let owner = self.parents[child.index()];
        let hoisted = replacing.is_some_and(|old| self.is_descendant_of(child, old));
        assert!(
            !owner.is_valid() || hoisted,
            "{} {child:?} is already owned by {owner:?}",
            child_kind.name()
        );
    }
}

fn slot_name(slot: SlotKind) -> &'static str {
    match slot {
        SlotKind::File => "file",
        SlotKind::Declaration => "declaration",
        SlotKind::Statement => "statement",
        SlotKind::Expression => "expression",
        SlotKind::VarargElement => "vararg element",
        SlotKind::Body => "body",
        SlotKind::ExpressionBody => "expression body",
        SlotKind::BlockBody => "block body",
        SlotKind::Branch => "branch",
        SlotKind::Catch => "catch",
        SlotKind::Variable => "variable",
        SlotKind::SimpleFunction => "function",
        SlotKind::Class => "class",
        SlotKind::Field => "field",
        SlotKind::ValueParameter => "value parameter",
        SlotKind::TypeParameter => "type parameter",
    }
}

#[cfg(test)]
mod tests;
