//! Property-based tests for the type renderer.
//!
//! Random type shapes are interned into a pool and rendered, checking that:
//! 1. Marking a type nullable appends exactly one `?`
//! 2. Rendering is deterministic
//! 3. Debug flexible types keep both bounds (`ft<L, U>`)
//! 4. Intersections are always parenthesised
//! 5. Short names never carry a package prefix; full names always do

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Once;

use proptest::prelude::*;
use quill_ir::element::{ClassKind, Variance};
use quill_ir::{ClassId, StringInterner, TypeId};
use quill_types::{
    ClassDescriptor, ClassifierId, RendererOptions, TypePool, TypeProjection, TypeRenderer,
    TypeParameterDescriptor,
};

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=quill_types=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Clone, Debug)]
enum Shape {
    Int,
    String,
    List(Variance, Box<Shape>),
    StarList,
    Nullable(Box<Shape>),
    Flexible(Box<Shape>),
    Intersection(Vec<Shape>),
    Function(Vec<Shape>, Box<Shape>),
    Error,
    TypeVariable,
}

fn variance() -> impl Strategy<Value = Variance> {
    prop_oneof![Just(Variance::Invariant), Just(Variance::In), Just(Variance::Out)]
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        Just(Shape::Int),
        Just(Shape::String),
        Just(Shape::StarList),
        Just(Shape::Error),
        Just(Shape::TypeVariable),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (variance(), inner.clone()).prop_map(|(v, s)| Shape::List(v, Box::new(s))),
            inner.clone().prop_map(|s| Shape::Nullable(Box::new(s))),
            inner.clone().prop_map(|s| Shape::Flexible(Box::new(s))),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Shape::Intersection),
            (prop::collection::vec(inner.clone(), 0..3), inner)
                .prop_map(|(params, ret)| Shape::Function(params, Box::new(ret))),
        ]
    })
}

struct World {
    interner: StringInterner,
    pool: TypePool,
    list: ClassifierId,
    t: ClassifierId,
}

impl World {
    fn new() -> Self {
        init_tracing();
        let interner = StringInterner::new();
        let mut pool = TypePool::new(&interner);
        let t = pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("T"), 0));
        let e = pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("E"), 0));
        let mut list = ClassDescriptor::new(
            ClassId::parse("kotlin/collections/List", &interner),
            ClassKind::Interface,
        );
        list.declared_type_parameters.push(e);
        let list = pool.add_class(list);
        World {
            interner,
            pool,
            list,
            t,
        }
    }

    fn build(&mut self, shape: &Shape) -> TypeId {
        match shape {
            Shape::Int => self.pool.builtins().int_type,
            Shape::String => self.pool.builtins().string_type,
            Shape::List(variance, element) => {
                let ty = self.build(element);
                self.pool.class_type(
                    self.list,
                    [TypeProjection::Projected {
                        variance: *variance,
                        ty,
                    }],
                )
            }
            Shape::StarList => self.pool.class_type(self.list, [TypeProjection::Star]),
            Shape::Nullable(inner) => {
                let ty = self.build(inner);
                self.pool.nullable(ty)
            }
            Shape::Flexible(inner) => {
                let lower = self.build(inner);
                let lower = self.pool.with_nullability(lower, false);
                let upper = self.pool.nullable(lower);
                self.pool.flexible(lower, upper)
            }
            Shape::Intersection(components) => {
                let components: Vec<_> = components.iter().map(|c| self.build(c)).collect();
                self.pool.intersection(components)
            }
            Shape::Function(parameters, ret) => {
                let parameters: Vec<_> = parameters.iter().map(|p| self.build(p)).collect();
                let ret = self.build(ret);
                self.pool.function_type(&self.interner, None, &parameters, ret)
            }
            Shape::Error => self.pool.error_type(),
            Shape::TypeVariable => self.pool.type_variable(Some(self.t)),
        }
    }

    fn render(&self, ty: TypeId, options: RendererOptions) -> String {
        TypeRenderer::display(&self.pool, &self.interner, options).render_to_string(ty)
    }

    fn debug(&self, ty: TypeId) -> String {
        TypeRenderer::debug(&self.pool, &self.interner).render_to_string(ty)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn nullable_appends_one_question_mark(shape in shape()) {
        let mut world = World::new();
        let ty = world.build(&shape);
        let ty = world.pool.with_nullability(ty, false);
        let nullable = world.pool.nullable(ty);

        for options in [RendererOptions::FULL, RendererOptions::SHORT] {
            prop_assert_eq!(
                world.render(nullable, options),
                format!("{}?", world.render(ty, options))
            );
        }
        prop_assert_eq!(world.debug(nullable), format!("{}?", world.debug(ty)));
    }

    #[test]
    fn rendering_is_deterministic(shape in shape()) {
        let mut world = World::new();
        let ty = world.build(&shape);
        prop_assert_eq!(
            world.render(ty, RendererOptions::FULL),
            world.render(ty, RendererOptions::FULL)
        );
        prop_assert_eq!(world.debug(ty), world.debug(ty));
    }

    #[test]
    fn debug_flexible_keeps_both_bounds(shape in shape()) {
        let mut world = World::new();
        let ty = world.build(&Shape::Flexible(Box::new(shape)));
        let (lower, upper) = match world.pool.kind(ty) {
            quill_types::TypeKind::Flexible { lower, upper } => (*lower, *upper),
            other => panic!("expected a flexible type, got {other:?}"),
        };
        prop_assert_eq!(
            world.debug(ty),
            format!("ft<{}, {}>", world.debug(lower), world.debug(upper))
        );
    }

    #[test]
    fn intersections_are_parenthesised(components in prop::collection::vec(shape(), 0..4)) {
        let mut world = World::new();
        let ty = world.build(&Shape::Intersection(components));
        let rendered = world.render(ty, RendererOptions::SHORT);
        prop_assert!(rendered.starts_with('('), "{}", rendered);
        prop_assert!(rendered.ends_with(')'), "{}", rendered);
        prop_assert!(world.debug(ty).starts_with("it("));
    }

    #[test]
    fn short_names_drop_packages(shape in shape()) {
        let mut world = World::new();
        let ty = world.build(&shape);
        let short = world.render(ty, RendererOptions::SHORT);
        prop_assert!(!short.contains("kotlin."), "{}", short);
    }

    #[test]
    fn full_names_keep_packages(variance in variance(), shape in shape()) {
        let mut world = World::new();
        let element = world.build(&shape);
        let ty = world.pool.class_type(
            world.list,
            [TypeProjection::Projected { variance, ty: element }],
        );
        let full = world.render(ty, RendererOptions::FULL);
        prop_assert!(full.starts_with("kotlin.collections.List<"), "{}", full);
    }
}
