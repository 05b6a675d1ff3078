use pretty_assertions::assert_eq;
use quill_ir::element::{ClassKind, Variance};
use quill_ir::{ClassId, StringInterner};

use super::TypePool;
use crate::classifier::{ClassDescriptor, ClassFlags, TypeParameterDescriptor};
use crate::data::{TypeKind, TypeProjection};

fn pool() -> (StringInterner, TypePool) {
    let interner = StringInterner::new();
    let pool = TypePool::new(&interner);
    (interner, pool)
}

#[test]
fn builtins_are_interned_once() {
    let (_, mut pool) = pool();
    let any = pool.well_known().any;
    let builtins = pool.builtins().clone();
    assert_eq!(pool.class_type(any, []), builtins.any_type);
    assert_eq!(pool.nullable(builtins.any_type), builtins.any_nullable_type);
    assert!(pool.is_any(builtins.any_type));
    assert!(!pool.is_any(builtins.any_nullable_type));
    assert!(!pool.is_any(builtins.int_type));
}

#[test]
fn any_declares_the_three_open_methods() {
    let (interner, pool) = pool();
    let any = pool.class(pool.well_known().any).map(|class| class.members.clone());
    let names: Vec<_> = any
        .unwrap_or_default()
        .into_iter()
        .map(|member| interner.lookup(pool.member(member).name))
        .collect();
    assert_eq!(names, ["equals", "hashCode", "toString"]);
}

#[test]
fn structurally_equal_types_share_an_id() {
    let (_, mut pool) = pool();
    let int = pool.builtins().int_type;
    let array = pool.well_known().array;
    let first = pool.class_type(array, [TypeProjection::out(int)]);
    let second = pool.class_type(array, [TypeProjection::out(int)]);
    let invariant = pool.class_type(array, [TypeProjection::invariant(int)]);
    assert_eq!(first, second);
    assert_ne!(first, invariant);
}

#[test]
fn nullability_of_definitely_not_null() {
    let (interner, mut pool) = pool();
    let parameter = pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("T"), 0));
    let t = pool.type_parameter_type(parameter);
    let dnn = pool.definitely_not_null(t);

    assert_eq!(pool.definitely_not_null(dnn), dnn);
    assert_eq!(pool.with_nullability(dnn, false), dnn);
    let nullable = pool.nullable(dnn);
    assert_eq!(nullable, pool.nullable(t));
    assert!(!pool.is_marked_nullable(dnn));
}

#[test]
fn classifier_of_unwraps_wrappers() {
    let (_, mut pool) = pool();
    let int = pool.builtins().int_type;
    let string = pool.builtins().string_type;
    let nullable_int = pool.nullable(int);
    let flexible = pool.flexible(int, nullable_int);
    let dnn = pool.definitely_not_null(string);
    let abbreviated = pool.abbreviated(string, int);
    let error = pool.error_type();
    let variable = pool.type_variable(None);

    let well_known = *pool.well_known();
    assert_eq!(pool.classifier_of(flexible), Some(well_known.int));
    assert_eq!(pool.classifier_of(dnn), Some(well_known.string));
    assert_eq!(pool.classifier_of(abbreviated), Some(well_known.int));
    assert_eq!(pool.classifier_of(error), None);
    assert_eq!(pool.classifier_of(variable), None);
}

#[test]
fn type_parameters_are_nullable_unless_bounded() {
    let (interner, mut pool) = pool();
    let unbounded = pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("T"), 0));
    let mut bounded = TypeParameterDescriptor::new(interner.intern("U"), 1);
    bounded.upper_bounds.push(pool.any_type());
    let bounded = pool.add_type_parameter(bounded);

    let t = pool.type_parameter_type(unbounded);
    let u = pool.type_parameter_type(bounded);
    let int = pool.builtins().int_type;
    let nullable_int = pool.nullable(int);
    let platform = pool.flexible(int, nullable_int);
    let t_not_null = pool.definitely_not_null(t);

    assert!(pool.is_nullable_type(t));
    assert!(!pool.is_nullable_type(u));
    assert!(pool.is_nullable_type(platform));
    assert!(!pool.is_nullable_type(t_not_null));
    assert!(!pool.is_nullable_type(int));
}

#[test]
fn inner_classes_capture_outer_parameters() {
    let (interner, mut pool) = pool();
    let package = quill_ir::FqName::parse("p", &interner);
    let outer_param =
        pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("A"), 0));
    let mut outer = ClassDescriptor::new(
        ClassId::top_level(package.clone(), interner.intern("Outer")),
        ClassKind::Class,
    );
    outer.declared_type_parameters.push(outer_param);
    let outer_class_id = outer.class_id.clone();
    let outer = pool.add_class(outer);

    let inner_param =
        pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("B"), 0));
    let mut inner = ClassDescriptor::new(
        outer_class_id.nested(interner.intern("Inner")),
        ClassKind::Class,
    );
    inner.flags |= ClassFlags::INNER;
    inner.outer = Some(outer);
    inner.declared_type_parameters.push(inner_param);
    let inner_class_id = inner.class_id.clone();
    let inner = pool.add_class(inner);

    assert_eq!(pool.all_type_parameters(inner), [inner_param, outer_param]);
    assert_eq!(pool.find_class(&inner_class_id), Some(inner));
    let default = pool.default_type(inner);
    assert_eq!(pool.type_arguments(default).len(), 2);
}

#[test]
fn function_types_share_their_class() {
    let (interner, mut pool) = pool();
    let int = pool.builtins().int_type;
    let string = pool.builtins().string_type;
    let first = pool.function_class(2, &interner);
    let second = pool.function_class(2, &interner);
    assert_eq!(first, second);

    let class = pool.class(first).map(|class| class.declared_type_parameters.clone());
    let variances: Vec<_> = class
        .unwrap_or_default()
        .into_iter()
        .filter_map(|parameter| pool.classifier(parameter).as_type_parameter().map(|p| p.variance))
        .collect();
    assert_eq!(variances, [Variance::In, Variance::In, Variance::Out]);

    let plain = pool.function_type(&interner, None, &[int, string], int);
    let extension = pool.function_type(&interner, Some(int), &[string], int);
    assert_eq!(pool.classifier_of(plain), pool.classifier_of(extension));
    assert!(pool.annotations(plain).is_empty());
    assert_eq!(pool.annotations(extension).len(), 1);
    assert!(matches!(
        pool.kind(extension),
        TypeKind::Simple { arguments, .. } if arguments.len() == 3
    ));
}
