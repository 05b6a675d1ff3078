//! Replacing type-parameter uses by concrete arguments.

use quill_ir::TypeId;
use rustc_hash::FxHashMap;

use crate::classifier::{Classifier, ClassifierId};
use crate::data::{CapturedTypeConstructor, TypeConstructor, TypeData, TypeKind, TypeProjection};
use crate::pool::TypePool;
use crate::stack::ensure_sufficient_stack;

/// Map from type parameters to the projections that replace them.
pub type Substitution = FxHashMap<ClassifierId, TypeProjection>;

impl TypePool {
    /// Substitution that binds the type parameters of `ty`'s classifier
    /// (captured outer ones included) to `ty`'s arguments.
    pub fn substitution_for(&self, ty: TypeId) -> Substitution {
        let Some(classifier) = self.classifier_of(ty) else {
            return Substitution::default();
        };
        self.all_type_parameters(classifier)
            .into_iter()
            .zip(self.type_arguments(ty).iter().copied())
            .collect()
    }

    /// Apply `substitution` throughout `ty`.
    ///
    /// A substituted `T?` stays nullable. A star argument stands for the
    /// parameter's widest value, `Any?`.
    pub fn substitute(&mut self, ty: TypeId, substitution: &Substitution) -> TypeId {
        if substitution.is_empty() {
            return ty;
        }
        ensure_sufficient_stack(|| {
            let data = self.get(ty).clone();
            let kind = match data.kind {
                TypeKind::Simple {
                    constructor: TypeConstructor::Classifier(classifier),
                    ref arguments,
                } if arguments.is_empty()
                    && matches!(self.classifier(classifier), Classifier::TypeParameter(_)) =>
                {
                    let Some(&replacement) = substitution.get(&classifier) else {
                        return ty;
                    };
                    let replaced = match replacement {
                        TypeProjection::Projected { ty, .. } => ty,
                        TypeProjection::Star => self.builtins().any_nullable_type,
                    };
                    return if data.nullable {
                        self.nullable(replaced)
                    } else {
                        replaced
                    };
                }
                TypeKind::Simple {
                    constructor,
                    arguments,
                } => {
                    let constructor = match constructor {
                        TypeConstructor::Intersection(types) => TypeConstructor::Intersection(
                            types
                                .iter()
                                .map(|&component| self.substitute(component, substitution))
                                .collect(),
                        ),
                        other => other,
                    };
                    let arguments = arguments
                        .iter()
                        .map(|&argument| self.substitute_projection(argument, substitution))
                        .collect();
                    TypeKind::Simple {
                        constructor,
                        arguments,
                    }
                }
                TypeKind::Flexible { lower, upper } => TypeKind::Flexible {
                    lower: self.substitute(lower, substitution),
                    upper: self.substitute(upper, substitution),
                },
                TypeKind::DefinitelyNotNull { original } => {
                    let original = self.substitute(original, substitution);
                    return self.definitely_not_null(original);
                }
                TypeKind::Abbreviated {
                    abbreviation,
                    expansion,
                } => TypeKind::Abbreviated {
                    abbreviation: self.substitute(abbreviation, substitution),
                    expansion: self.substitute(expansion, substitution),
                },
                TypeKind::Captured { projection } => TypeKind::Captured {
                    projection: self.substitute_projection(projection, substitution),
                },
                TypeKind::NewCaptured {
                    constructor: CapturedTypeConstructor { projection },
                } => TypeKind::NewCaptured {
                    constructor: CapturedTypeConstructor {
                        projection: self.substitute_projection(projection, substitution),
                    },
                },
                TypeKind::Error => return ty,
            };
            self.intern(TypeData {
                kind,
                nullable: data.nullable,
                annotations: data.annotations,
            })
        })
    }

    fn substitute_projection(
        &mut self,
        projection: TypeProjection,
        substitution: &Substitution,
    ) -> TypeProjection {
        match projection {
            TypeProjection::Star => TypeProjection::Star,
            TypeProjection::Projected { variance, ty } => TypeProjection::Projected {
                variance,
                ty: self.substitute(ty, substitution),
            },
        }
    }
}
