//! Type constructors on [`TypePool`].
//!
//! Every constructor interns its result, so building the same type twice
//! yields the same [`TypeId`].

use quill_ir::element::ClassKind;
use quill_ir::{ClassId, StringInterner, TypeId};

use super::{function_parameter_variance, TypePool};
use crate::annotation::Annotation;
use crate::classifier::{ClassDescriptor, ClassifierId, TypeParameterDescriptor};
use crate::data::{CapturedTypeConstructor, TypeConstructor, TypeData, TypeKind, TypeProjection};

impl TypePool {
    /// Simple type over an arbitrary constructor.
    pub fn simple(
        &mut self,
        constructor: TypeConstructor,
        arguments: impl IntoIterator<Item = TypeProjection>,
    ) -> TypeId {
        self.intern(TypeData::new(TypeKind::Simple {
            constructor,
            arguments: arguments.into_iter().collect(),
        }))
    }

    /// Non-null use of a classifier with the given arguments.
    pub fn class_type(
        &mut self,
        classifier: ClassifierId,
        arguments: impl IntoIterator<Item = TypeProjection>,
    ) -> TypeId {
        self.simple(TypeConstructor::Classifier(classifier), arguments)
    }

    /// Use of a type parameter (`T`).
    pub fn type_parameter_type(&mut self, parameter: ClassifierId) -> TypeId {
        self.class_type(parameter, [])
    }

    /// A class applied to its own type parameters, including the ones an
    /// inner class captures from its outer classes.
    pub fn default_type(&mut self, classifier: ClassifierId) -> TypeId {
        let arguments: Vec<_> = self
            .all_type_parameters(classifier)
            .into_iter()
            .map(|parameter| TypeProjection::invariant(self.type_parameter_type(parameter)))
            .collect();
        self.class_type(classifier, arguments)
    }

    /// Same type with the `?` flag set or cleared.
    ///
    /// Definitely-non-null types never carry the flag: making `T & Any`
    /// nullable yields `T?`, and clearing it is a no-op.
    pub fn with_nullability(&mut self, ty: TypeId, nullable: bool) -> TypeId {
        if let TypeKind::DefinitelyNotNull { original } = self.kind(ty) {
            let original = *original;
            return if nullable {
                self.with_nullability(original, true)
            } else {
                ty
            };
        }
        if self.is_marked_nullable(ty) == nullable {
            return ty;
        }
        let mut data = self.get(ty).clone();
        data.nullable = nullable;
        self.intern(data)
    }

    #[inline]
    pub fn nullable(&mut self, ty: TypeId) -> TypeId {
        self.with_nullability(ty, true)
    }

    /// Platform type `lower..upper`.
    pub fn flexible(&mut self, lower: TypeId, upper: TypeId) -> TypeId {
        self.intern(TypeData::new(TypeKind::Flexible { lower, upper }))
    }

    /// `original & Any`. Already definitely-non-null types are returned
    /// unchanged.
    pub fn definitely_not_null(&mut self, original: TypeId) -> TypeId {
        if matches!(self.kind(original), TypeKind::DefinitelyNotNull { .. }) {
            return original;
        }
        self.intern(TypeData::new(TypeKind::DefinitelyNotNull { original }))
    }

    pub fn error_type(&mut self) -> TypeId {
        self.intern(TypeData::new(TypeKind::Error))
    }

    pub fn captured(&mut self, projection: TypeProjection) -> TypeId {
        self.intern(TypeData::new(TypeKind::Captured { projection }))
    }

    pub fn new_captured(&mut self, projection: TypeProjection) -> TypeId {
        self.intern(TypeData::new(TypeKind::NewCaptured {
            constructor: CapturedTypeConstructor { projection },
        }))
    }

    /// Use of a type alias (`abbreviation`) that expands to `expansion`.
    pub fn abbreviated(&mut self, abbreviation: TypeId, expansion: TypeId) -> TypeId {
        self.intern(TypeData::new(TypeKind::Abbreviated {
            abbreviation,
            expansion,
        }))
    }

    pub fn type_variable(&mut self, original_type_parameter: Option<ClassifierId>) -> TypeId {
        self.simple(
            TypeConstructor::TypeVariable {
                original_type_parameter,
            },
            [],
        )
    }

    pub fn intersection(&mut self, types: impl IntoIterator<Item = TypeId>) -> TypeId {
        self.simple(TypeConstructor::Intersection(types.into_iter().collect()), [])
    }

    /// Same type carrying `annotations` instead of its current ones.
    pub fn with_annotations(
        &mut self,
        ty: TypeId,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> TypeId {
        let mut data = self.get(ty).clone();
        data.annotations = annotations.into_iter().collect();
        self.intern(data)
    }

    /// `kotlin/FunctionN`, created on first use.
    ///
    /// Its type parameters are `P1..PN` (contravariant) followed by `R`
    /// (covariant).
    pub fn function_class(&mut self, arity: u32, interner: &StringInterner) -> ClassifierId {
        if let Some(class) = self.function_class_cached(arity) {
            return class;
        }
        let class_id = ClassId::top_level(
            self.kotlin_package().clone(),
            interner.intern(&format!("Function{arity}")),
        );
        let class = match self.find_class(&class_id) {
            Some(existing) => existing,
            None => {
                let parameters: Vec<_> = (0..=arity)
                    .map(|index| {
                        let name = if index < arity {
                            interner.intern(&format!("P{}", index + 1))
                        } else {
                            interner.intern("R")
                        };
                        let mut parameter = TypeParameterDescriptor::new(name, index);
                        parameter.variance = function_parameter_variance(index, arity);
                        self.add_type_parameter(parameter)
                    })
                    .collect();
                let mut descriptor = ClassDescriptor::new(class_id, ClassKind::Interface);
                descriptor.declared_type_parameters = parameters;
                descriptor.super_types.push(self.any_type());
                self.add_class(descriptor)
            }
        };
        self.cache_function_class(arity, class);
        class
    }

    /// `(P1, .., PN) -> R`, or `T.(P1, .., PN) -> R` with a receiver.
    ///
    /// Receiver types become the first argument of `FunctionN+1` and mark
    /// the type with the extension-function annotation.
    pub fn function_type(
        &mut self,
        interner: &StringInterner,
        receiver: Option<TypeId>,
        parameters: &[TypeId],
        return_type: TypeId,
    ) -> TypeId {
        let arity = u32::try_from(parameters.len() + usize::from(receiver.is_some()))
            .unwrap_or_else(|_| panic!("function type with {} parameters", parameters.len()));
        let class = self.function_class(arity, interner);
        let arguments: Vec<_> = receiver
            .iter()
            .chain(parameters)
            .map(|&ty| TypeProjection::invariant(ty))
            .chain(std::iter::once(TypeProjection::invariant(return_type)))
            .collect();
        let ty = self.class_type(class, arguments);
        if receiver.is_some() {
            let marker = Annotation::new(self.extension_function_type_class_id().clone());
            self.with_annotations(ty, [marker])
        } else {
            ty
        }
    }
}
