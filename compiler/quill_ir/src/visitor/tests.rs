use super::*;
use crate::element::{Block, Const, ConstValue, Return, Variable};
use crate::test_fixtures::{int, sample_module, INT};
use crate::{Span, StringInterner};
use pretty_assertions::assert_eq;

/// Records every element in preorder.
struct Collect {
    seen: Vec<ElementId>,
}

impl IrVisitor<(), ()> for Collect {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) {
        self.seen.push(id);
        accept_children(self, arena, id, ());
    }
}

#[test]
fn visitor_and_thin_visitor_share_methods() {
    assert_eq!(VISIT_METHODS, crate::thin_visitor::VISIT_METHODS);
    assert_eq!(VISIT_METHODS.len(), ElementKind::ALL.len());
}

#[test]
fn traversal_visits_each_owned_child_once() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    let mut collect = Collect { seen: Vec::new() };
    accept(&mut collect, &mut sample.arena, sample.module, ());

    assert_eq!(collect.seen.len(), sample.arena.len());
    let mut sorted = collect.seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), collect.seen.len());
    assert_eq!(
        &collect.seen[..5],
        &[
            sample.module,
            sample.file,
            sample.function,
            sample.parameter,
            sample.body
        ]
    );
}

#[derive(Default)]
struct BranchCounter {
    branches: usize,
    elements: usize,
}

impl IrVisitor<(), ()> for BranchCounter {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) {
        self.elements += 1;
        accept_children(self, arena, id, ());
    }

    fn visit_branch(&mut self, arena: &mut IrArena, id: ElementId, _: ()) {
        self.branches += 1;
        accept_children(self, arena, id, ());
    }
}

#[test]
fn else_branch_falls_back_to_branch() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    let mut counter = BranchCounter::default();
    accept(&mut counter, &mut sample.arena, sample.module, ());
    assert_eq!(counter.branches, 2);
    assert_eq!(counter.elements + counter.branches, sample.arena.len());
}

/// Returns the depth each element was reached at.
struct Depth;

impl IrVisitor<u32, u32> for Depth {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, depth: u32) -> u32 {
        let mut deepest = depth;
        for child in arena.children(id) {
            deepest = deepest.max(accept(self, arena, child, depth + 1));
        }
        deepest
    }
}

#[test]
fn data_and_results_flow_through_dispatch() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    // module > file > function > body > when > branch > const
    assert_eq!(accept(&mut Depth, &mut sample.arena, sample.module, 0), 6);
}

/// Replaces every integer literal with a fresh one ten times larger.
struct ScaleInts;

impl IrVisitor<ElementId, ()> for ScaleInts {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
        walk_transform(self, arena, id, ())
    }

    fn visit_const(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
        let value = arena.get::<Const>(id).value.clone();
        match value {
            ConstValue::Int(value) => int(arena, value * 10),
            _ => id,
        }
    }
}

#[test]
fn transform_replaces_slots_and_orphans_old_children() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    let old_initializer = sample.arena.get::<Variable>(sample.variable).initializer;

    let root = transform(&mut ScaleInts, &mut sample.arena, sample.module, ());
    assert_eq!(root, sample.module);

    let new_initializer = sample.arena.get::<Variable>(sample.variable).initializer;
    assert_ne!(new_initializer, old_initializer);
    let new_initializer = new_initializer.unwrap_or_default();
    assert_eq!(
        sample.arena.get::<Const>(new_initializer).value,
        ConstValue::Int(10)
    );
    assert_eq!(sample.arena.parent(new_initializer), Some(sample.variable));
    assert_eq!(sample.arena.parent(old_initializer.unwrap_or_default()), None);

    // Absent default argument stays absent.
    let call = sample.arena.get::<crate::element::Call>(sample.call);
    assert_eq!(call.value_arguments.len(), 2);
    assert!(call.value_arguments[1].is_none());
}

/// Drops single-statement blocks, hoisting their statement.
struct Unwrap;

impl IrVisitor<ElementId, ()> for Unwrap {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
        walk_transform(self, arena, id, ())
    }

    fn visit_block(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
        transform_children(self, arena, id, ());
        let statements = &arena.get::<Block>(id).statements;
        if let [only] = statements.as_slice() {
            *only
        } else {
            id
        }
    }
}

#[test]
fn transform_can_hoist_descendants() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    let ret = sample.arena.children(sample.body)[3];
    let block = sample.arena.get::<Return>(ret).value;
    let read = sample.arena.children(block)[0];

    transform(&mut Unwrap, &mut sample.arena, sample.module, ());

    assert_eq!(sample.arena.get::<Return>(ret).value, read);
    assert_eq!(sample.arena.parent(read), Some(ret));
    assert_eq!(sample.arena.parent(block), None);
}

/// Puts a literal into a value-parameter slot.
struct Vandal;

impl IrVisitor<ElementId, ()> for Vandal {
    fn visit_element(&mut self, arena: &mut IrArena, id: ElementId, _: ()) -> ElementId {
        walk_transform(self, arena, id, ())
    }

    fn visit_value_parameter(&mut self, arena: &mut IrArena, _: ElementId, _: ()) -> ElementId {
        arena.alloc(
            Span::UNDEFINED,
            Const {
                ty: INT,
                value: ConstValue::Null,
            },
        )
    }
}

#[test]
#[should_panic(expected = "cannot hold a Const")]
fn transform_checks_slot_kinds() {
    let interner = StringInterner::new();
    let mut sample = sample_module(&interner);
    transform(&mut Vandal, &mut sample.arena, sample.module, ());
}
