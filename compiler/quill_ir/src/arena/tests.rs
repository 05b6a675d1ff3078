use super::*;
use crate::element::{Block, Composite, ConstValue, SuspensionPoint, Variable, When};
use crate::test_fixtures::{int, sample_module, INT};
use crate::{Name, StringInterner, TypeId};
use pretty_assertions::assert_eq;

#[test]
fn alloc_adopts_children() {
    let interner = StringInterner::new();
    let sample = sample_module(&interner);
    let arena = &sample.arena;

    assert_eq!(arena.parent(sample.file), Some(sample.module));
    assert_eq!(arena.parent(sample.function), Some(sample.file));
    assert_eq!(arena.parent(sample.parameter), Some(sample.function));
    assert_eq!(arena.parent(sample.body), Some(sample.function));
    assert_eq!(arena.parent(sample.variable), Some(sample.body));
    assert_eq!(arena.parent(sample.module), None);
}

#[test]
fn module_fragment_span_is_undefined() {
    let interner = StringInterner::new();
    let sample = sample_module(&interner);
    assert_eq!(sample.arena.span(sample.module), Span::UNDEFINED);
    assert_eq!(sample.arena.span(sample.function), Span::new(0, 94));
}

#[test]
fn typed_access() {
    let interner = StringInterner::new();
    let sample = sample_module(&interner);
    let when = sample.arena.get::<When>(sample.when);
    assert_eq!(when.branches.len(), 2);
    assert!(sample.arena.try_get::<Block>(sample.when).is_none());
    assert_eq!(sample.arena.kind(sample.when), ElementKind::When);
}

#[test]
#[should_panic(expected = "is a When, not a Block")]
fn typed_access_wrong_kind_panics() {
    let interner = StringInterner::new();
    let sample = sample_module(&interner);
    let _ = sample.arena.get::<Block>(sample.when);
}

#[test]
#[should_panic(expected = "already owned")]
fn double_ownership_panics() {
    let mut arena = IrArena::new();
    let one = int(&mut arena, 1);
    arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );
    arena.alloc(
        Span::UNDEFINED,
        Composite {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );
}

#[test]
#[should_panic(expected = "cannot hold a Const")]
fn suspension_point_id_must_be_variable() {
    let mut arena = IrArena::new();
    let id = int(&mut arena, 0);
    let result = int(&mut arena, 1);
    let resume = int(&mut arena, 2);
    arena.alloc(
        Span::UNDEFINED,
        SuspensionPoint {
            ty: INT,
            suspension_point_id_parameter: id,
            result,
            resume_result: resume,
        },
    );
}

#[test]
fn update_orphans_dropped_children_and_adopts_new_ones() {
    let mut arena = IrArena::new();
    let one = int(&mut arena, 1);
    let two = int(&mut arena, 2);
    let block = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );

    arena.update::<Block, _>(block, |block| block.statements = vec![two]);

    assert_eq!(arena.parent(one), None);
    assert_eq!(arena.parent(two), Some(block));
    assert_eq!(arena.children(block).as_slice(), &[two]);
}

#[test]
#[should_panic(expected = "cycle")]
fn update_rejects_cycles() {
    let mut arena = IrArena::new();
    let inner = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: Vec::new(),
        },
    );
    let outer = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![inner],
        },
    );
    arena.update::<Block, _>(inner, |block| block.statements.push(outer));
}

#[test]
fn detach_allows_reattachment() {
    let mut arena = IrArena::new();
    let one = int(&mut arena, 1);
    let first = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );
    arena.update::<Block, _>(first, |block| block.statements.clear());
    let second = arena.alloc(
        Span::UNDEFINED,
        Composite {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );
    assert_eq!(arena.parent(one), Some(second));

    arena.detach(one);
    assert_eq!(arena.parent(one), None);
}

#[test]
fn non_structural_fields_are_mutable() {
    let mut arena = IrArena::new();
    let var = arena.alloc(Span::UNDEFINED, Variable::new(Name::EMPTY, INT));
    arena.update::<Variable, _>(var, |variable| variable.ty = TypeId::from_raw(9));
    assert_eq!(arena.get::<Variable>(var).ty, TypeId::from_raw(9));
    let five = int(&mut arena, 5);
    assert!(matches!(
        arena.element(five),
        crate::Element::Const(c) if c.value == ConstValue::Int(5)
    ));
}

#[test]
#[should_panic(expected = "already owned")]
fn update_rejects_children_owned_elsewhere() {
    let mut arena = IrArena::new();
    let shared = int(&mut arena, 1);
    arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![shared],
        },
    );
    let second = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: Vec::new(),
        },
    );
    arena.update::<Block, _>(second, |block| block.statements.push(shared));
}

#[test]
#[should_panic(expected = "appears in two child slots")]
fn update_rejects_duplicated_children() {
    let mut arena = IrArena::new();
    let one = int(&mut arena, 1);
    let block = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![one],
        },
    );
    arena.update::<Block, _>(block, |block| block.statements.push(one));
}

#[test]
fn descendant_query() {
    let interner = StringInterner::new();
    let sample = sample_module(&interner);
    assert!(sample.arena.is_descendant_of(sample.variable, sample.module));
    assert!(!sample.arena.is_descendant_of(sample.module, sample.variable));
    assert!(!sample.arena.is_descendant_of(sample.file, sample.file));
}

#[test]
fn arena_is_sync() {
    fn assert_sync<T: Sync + Send>() {}
    assert_sync::<IrArena>();
}
