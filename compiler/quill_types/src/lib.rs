//! Resolved types for Quill.
//!
//! - [`TypePool`]: hash-consed [`TypeData`] behind `TypeId(u32)` handles,
//!   plus the classifier and member tables types refer to
//! - [`TypeRenderer`]: display and debug renderings of a type
//! - Inline/value class queries and a reversible visited set for the
//!   recursion check
//! - Nominal subtyping and function-type helpers used by call resolution
//!
//! Nullability is a flag on [`TypeData`], independent of its shape.

mod annotation;
mod classifier;
mod data;
mod function_types;
mod naming;
mod pool;
mod render;
mod stack;
mod subtyping;
mod substitution;
mod value_class;

pub use annotation::{Annotation, ConstantValue, Literal};
pub use classifier::{
    ClassDescriptor, ClassFlags, Classifier, ClassifierId, ConstructorParameter,
    InlineClassRepresentation, MemberDescriptor, MemberId, MemberKind, TypeAliasDescriptor,
    TypeParameterDescriptor,
};
pub use data::{CapturedTypeConstructor, TypeConstructor, TypeData, TypeKind, TypeProjection};
pub use function_types::FunctionClassKind;
pub use naming::{is_keyword, needs_escaping, push_escaped};
pub use pool::{TypePool, WellKnownClasses};
pub use render::{render_to_string, RenderMode, RenderSink, RendererOptions, TypeRenderer};
pub use stack::ensure_sufficient_stack;
pub use substitution::Substitution;
pub use value_class::ReversibleSet;

quill_ir::static_assert_size!(ClassifierId, 4);
quill_ir::static_assert_size!(MemberId, 4);
