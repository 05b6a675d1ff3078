//! Resolved type values stored in the [`TypePool`](crate::TypePool).
//!
//! `TypeData` uses `TypeId` for nested types, so equality of interned types
//! is O(1) and the renderer walks the pool instead of boxed trees.
//!
//! Nullability is a flag orthogonal to the shape: every shape can be marked
//! nullable except definitely-non-null types, which the pool never builds
//! with the flag set.

use quill_ir::element::Variance;
use quill_ir::TypeId;

use crate::annotation::Annotation;
use crate::classifier::ClassifierId;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeData {
    pub kind: TypeKind,
    /// Marked nullable (`T?`).
    pub nullable: bool,
    pub annotations: Box<[Annotation]>,
}

impl TypeData {
    pub fn new(kind: TypeKind) -> Self {
        TypeData {
            kind,
            nullable: false,
            annotations: Box::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Constructor applied to arguments.
    Simple {
        constructor: TypeConstructor,
        arguments: Box<[TypeProjection]>,
    },
    /// Platform type with a lower and an upper bound.
    Flexible { lower: TypeId, upper: TypeId },
    /// `T & Any`.
    DefinitelyNotNull { original: TypeId },
    Error,
    /// Captured projection from the old inference.
    Captured { projection: TypeProjection },
    /// Captured projection from the new inference; the projection lives on
    /// its constructor.
    NewCaptured { constructor: CapturedTypeConstructor },
    /// A use of a type alias together with what it expands to.
    Abbreviated { abbreviation: TypeId, expansion: TypeId },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CapturedTypeConstructor {
    pub projection: TypeProjection,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeConstructor {
    /// Class, type parameter or type alias.
    Classifier(ClassifierId),
    /// Inference variable, optionally created for a type parameter.
    TypeVariable {
        original_type_parameter: Option<ClassifierId>,
    },
    Intersection(Box<[TypeId]>),
    /// Constructor without a declaration (e.g. an integer literal type).
    Unknown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeProjection {
    Star,
    Projected { variance: Variance, ty: TypeId },
}

impl TypeProjection {
    pub fn invariant(ty: TypeId) -> Self {
        TypeProjection::Projected {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn out(ty: TypeId) -> Self {
        TypeProjection::Projected {
            variance: Variance::Out,
            ty,
        }
    }

    pub fn contravariant(ty: TypeId) -> Self {
        TypeProjection::Projected {
            variance: Variance::In,
            ty,
        }
    }

    /// Projected type; `None` for star projections.
    pub fn ty(self) -> Option<TypeId> {
        match self {
            TypeProjection::Star => None,
            TypeProjection::Projected { ty, .. } => Some(ty),
        }
    }
}
