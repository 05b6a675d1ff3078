use pretty_assertions::assert_eq;
use quill_ir::element::ClassKind;
use quill_ir::{ClassId, StringInterner, TypeId};

use super::ReversibleSet;
use crate::classifier::{
    ClassDescriptor, ClassFlags, ClassifierId, ConstructorParameter, InlineClassRepresentation,
    TypeParameterDescriptor,
};
use crate::data::TypeProjection;
use crate::pool::TypePool;

struct Fixture {
    interner: StringInterner,
    pool: TypePool,
}

impl Fixture {
    fn new() -> Self {
        let interner = StringInterner::new();
        let pool = TypePool::new(&interner);
        Fixture { interner, pool }
    }

    /// Declare `value class name(...)` with placeholder fields; fill them
    /// with [`Fixture::set_fields`] once the field types exist.
    fn value_class(&mut self, name: &str) -> ClassifierId {
        let mut class =
            ClassDescriptor::new(ClassId::parse(name, &self.interner), ClassKind::Class);
        class.flags |= ClassFlags::VALUE;
        self.pool.add_class(class)
    }

    fn set_fields(&mut self, class: ClassifierId, fields: &[TypeId]) {
        let parameters: Vec<_> = fields
            .iter()
            .enumerate()
            .map(|(i, &ty)| ConstructorParameter {
                name: self.interner.intern(&format!("f{i}")),
                ty,
            })
            .collect();
        let representation = match parameters.as_slice() {
            [only] => Some(InlineClassRepresentation {
                underlying_property_name: only.name,
                underlying_type: only.ty,
            }),
            _ => None,
        };
        let class = self.pool.class_mut(class);
        class.primary_constructor = Some(parameters);
        class.inline_representation = representation;
    }

    fn ty(&mut self, class: ClassifierId) -> TypeId {
        self.pool.class_type(class, [])
    }
}

#[test]
fn reversible_set_frames() {
    let mut set = ReversibleSet::new();
    assert!(set.insert(1));
    set.checkpoint();
    assert!(set.insert(2));
    set.checkpoint();
    assert!(set.insert(3));
    assert!(!set.insert(1));
    set.revert();
    assert!(!set.contains(&3));
    assert!(set.contains(&2));
    set.checkpoint();
    set.insert(4);
    set.commit();
    set.revert();
    // The committed frame folded into the reverted one.
    assert!(!set.contains(&4));
    assert!(!set.contains(&2));
    assert!(set.contains(&1));
    assert_eq!(set.len(), 1);
    assert_eq!(set.depth(), 0);
}

#[test]
fn inline_class_classification() {
    let mut fx = Fixture::new();
    let int = fx.pool.builtins().int_type;
    let string = fx.pool.builtins().string_type;

    let single = fx.value_class("p/Single");
    fx.set_fields(single, &[int]);
    let pair = fx.value_class("p/Pair");
    fx.set_fields(pair, &[int, string]);
    let unknown = fx.value_class("p/Unknown");
    let mut legacy =
        ClassDescriptor::new(ClassId::parse("p/Legacy", &fx.interner), ClassKind::Class);
    legacy.flags |= ClassFlags::INLINE;
    let legacy = fx.pool.add_class(legacy);

    let single = fx.ty(single);
    let pair = fx.ty(pair);
    let unknown = fx.ty(unknown);
    let legacy = fx.ty(legacy);

    assert!(fx.pool.is_inline_class_type(single));
    assert!(!fx.pool.is_inline_class_type(pair));
    assert!(fx.pool.is_value_class_type(pair));
    assert!(fx.pool.is_inline_or_value_class_type(pair));
    assert!(fx.pool.is_inline_class_type(unknown));
    assert!(fx.pool.is_inline_class_type(legacy));
    assert!(!fx.pool.is_inline_class_type(int));

    assert_eq!(fx.pool.unsubstituted_underlying_types(single), [int]);
    assert_eq!(fx.pool.unsubstituted_underlying_types(pair), [int, string]);
    assert!(fx.pool.unsubstituted_underlying_types(int).is_empty());
}

#[test]
fn substituted_underlying_type() {
    let mut fx = Fixture::new();
    let t = fx
        .pool
        .add_type_parameter(TypeParameterDescriptor::new(fx.interner.intern("T"), 0));
    let wrapper = fx.value_class("p/Wrapper");
    fx.pool.class_mut(wrapper).declared_type_parameters.push(t);
    let t_type = fx.pool.type_parameter_type(t);
    let nullable_t = fx.pool.nullable(t_type);
    fx.set_fields(wrapper, &[nullable_t]);

    let int = fx.pool.builtins().int_type;
    let of_int = fx.pool.class_type(wrapper, [TypeProjection::invariant(int)]);
    let nullable_int = fx.pool.nullable(int);

    assert_eq!(fx.pool.unsubstituted_underlying_type(of_int), Some(nullable_t));
    assert_eq!(fx.pool.substituted_underlying_type(of_int), Some(nullable_int));
    assert_eq!(fx.pool.substituted_underlying_types(of_int), [nullable_int]);
    assert!(fx.pool.is_nullable_underlying_type(of_int));

    let plain = fx.value_class("p/Plain");
    fx.set_fields(plain, &[int]);
    let plain = fx.ty(plain);
    assert!(!fx.pool.is_nullable_underlying_type(plain));
    assert!(!fx.pool.is_nullable_underlying_type(int));
}

#[test]
fn direct_and_indirect_recursion() {
    let mut fx = Fixture::new();
    let a = fx.value_class("p/A");
    let a_type = fx.ty(a);
    fx.set_fields(a, &[a_type]);
    assert!(fx.pool.is_recursive_value_class_type(a_type));

    let b = fx.value_class("p/B");
    let c = fx.value_class("p/C");
    let b_type = fx.ty(b);
    let c_type = fx.ty(c);
    let nullable_c = fx.pool.nullable(c_type);
    fx.set_fields(b, &[nullable_c]);
    fx.set_fields(c, &[b_type]);
    assert!(fx.pool.is_recursive_value_class_type(b_type));
}

#[test]
fn recursion_through_type_parameter_bounds() {
    let mut fx = Fixture::new();
    let holder = fx.value_class("p/Holder");
    let holder_type = fx.ty(holder);
    let mut t = TypeParameterDescriptor::new(fx.interner.intern("T"), 0);
    t.upper_bounds.push(holder_type);
    let t = fx.pool.add_type_parameter(t);
    let t_type = fx.pool.type_parameter_type(t);
    fx.set_fields(holder, &[t_type]);
    assert!(fx.pool.is_recursive_value_class_type(holder_type));
}

#[test]
fn shared_fields_are_not_recursion() {
    // Top(Left, Right), Left(Leaf), Right(Leaf), Leaf(Int)
    let mut fx = Fixture::new();
    let int = fx.pool.builtins().int_type;
    let leaf = fx.value_class("p/Leaf");
    fx.set_fields(leaf, &[int]);
    let leaf = fx.ty(leaf);
    let left = fx.value_class("p/Left");
    fx.set_fields(left, &[leaf]);
    let right = fx.value_class("p/Right");
    fx.set_fields(right, &[leaf]);
    let left = fx.ty(left);
    let right = fx.ty(right);
    let top = fx.value_class("p/Top");
    fx.set_fields(top, &[left, right]);
    let top = fx.ty(top);

    assert!(!fx.pool.is_recursive_value_class_type(top));
    assert!(!fx.pool.is_recursive_value_class_type(int));
}

#[test]
fn failed_probe_leaves_visited_unchanged() {
    let mut fx = Fixture::new();
    let int = fx.pool.builtins().int_type;
    let leaf = fx.value_class("p/Leaf");
    fx.set_fields(leaf, &[int]);
    let leaf_type = fx.ty(leaf);

    let mut visited = ReversibleSet::new();
    let marker = fx.pool.well_known().unit;
    visited.insert(marker);
    assert!(!fx.pool.is_recursive_value_class_type_with(leaf_type, &mut visited));
    assert_eq!(visited.len(), 1);
    assert!(visited.contains(&marker));
    assert_eq!(visited.depth(), 0);

    // A confirmed cycle keeps what it visited.
    let looped = fx.value_class("p/Looped");
    let looped_type = fx.ty(looped);
    fx.set_fields(looped, &[looped_type]);
    assert!(fx.pool.is_recursive_value_class_type_with(looped_type, &mut visited));
    assert!(visited.contains(&looped));
}
