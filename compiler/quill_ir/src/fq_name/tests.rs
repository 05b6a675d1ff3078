use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fq_name_parse_and_render() {
    let interner = StringInterner::new();
    let fq = FqName::parse("kotlin.collections", &interner);
    assert_eq!(fq.segments().len(), 2);
    assert_eq!(fq.as_string(&interner), "kotlin.collections");
    assert!(FqName::parse("", &interner).is_root());
}

#[test]
fn fq_name_parent_and_child() {
    let interner = StringInterner::new();
    let fq = FqName::parse("a.b", &interner);
    assert_eq!(fq.parent().as_string(&interner), "a");
    assert_eq!(
        fq.child(interner.intern("c")).as_string(&interner),
        "a.b.c"
    );
    assert_eq!(FqName::root().parent(), FqName::root());
}

#[test]
fn class_id_as_string() {
    let interner = StringInterner::new();
    let entry = ClassId::parse("kotlin.collections/Map.Entry", &interner);
    assert_eq!(entry.as_string(&interner), "kotlin/collections/Map.Entry");
    assert_eq!(
        entry.as_fq_name().as_string(&interner),
        "kotlin.collections.Map.Entry"
    );
    assert_eq!(interner.lookup(entry.short_name()), "Entry");

    let root = ClassId::parse("Local", &interner);
    assert_eq!(root.as_string(&interner), "Local");
}

#[test]
fn class_id_outer_and_nested() {
    let interner = StringInterner::new();
    let outer = ClassId::parse("p/Outer", &interner);
    let inner = outer.nested(interner.intern("Inner"));
    assert_eq!(inner.as_string(&interner), "p/Outer.Inner");
    assert_eq!(inner.outer(), Some(outer.clone()));
    assert_eq!(outer.outer(), None);
}

#[test]
fn callable_id_as_string() {
    let interner = StringInterner::new();
    let class_id = ClassId::parse("kotlin.annotation/AnnotationTarget", &interner);
    let entry = CallableId::member(&class_id, interner.intern("CLASS"));
    assert_eq!(
        entry.as_string(&interner),
        "kotlin/annotation/AnnotationTarget.CLASS"
    );

    let top_level = CallableId {
        package: FqName::root(),
        class_name: None,
        callable_name: interner.intern("main"),
    };
    assert_eq!(top_level.as_string(&interner), "/main");
}
