//! Recognising function types and taking them apart.
//!
//! A function type is a use of one of the synthetic `FunctionN` families.
//! Its arguments are laid out as `[receiver?, P1, .., PN, R]`; the receiver
//! slot exists only when the type carries the extension-function-type
//! annotation.

use quill_ir::{ClassId, StringInterner, TypeId};

use crate::data::{TypeConstructor, TypeKind, TypeProjection};
use crate::pool::TypePool;

/// Family of a synthetic function class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionClassKind {
    /// `kotlin/FunctionN`
    Function,
    /// `kotlin/coroutines/SuspendFunctionN`
    SuspendFunction,
    /// `kotlin/reflect/KFunctionN`
    KFunction,
    /// `kotlin/reflect/KSuspendFunctionN`
    KSuspendFunction,
}

impl FunctionClassKind {
    fn package(self) -> &'static str {
        match self {
            FunctionClassKind::Function => "kotlin",
            FunctionClassKind::SuspendFunction => "kotlin.coroutines",
            FunctionClassKind::KFunction | FunctionClassKind::KSuspendFunction => "kotlin.reflect",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            FunctionClassKind::Function => "Function",
            FunctionClassKind::SuspendFunction => "SuspendFunction",
            FunctionClassKind::KFunction => "KFunction",
            FunctionClassKind::KSuspendFunction => "KSuspendFunction",
        }
    }

    /// Family and arity of `class_id`, if it names a function class.
    pub fn of(class_id: &ClassId, interner: &StringInterner) -> Option<(FunctionClassKind, u32)> {
        if class_id.is_local || class_id.relative.segments().len() != 1 {
            return None;
        }
        let package = class_id.package.as_string(interner);
        let name = interner.lookup(class_id.short_name());
        [
            FunctionClassKind::Function,
            FunctionClassKind::SuspendFunction,
            FunctionClassKind::KFunction,
            FunctionClassKind::KSuspendFunction,
        ]
        .into_iter()
        .filter(|kind| kind.package() == package)
        .find_map(|kind| {
            let digits = name.strip_prefix(kind.prefix())?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok().map(|arity| (kind, arity))
        })
    }
}

impl TypePool {
    /// Whether `ty` is a use of a function class.
    pub fn is_function_type(&self, ty: TypeId, interner: &StringInterner) -> bool {
        let TypeKind::Simple {
            constructor: TypeConstructor::Classifier(classifier),
            ..
        } = self.kind(ty)
        else {
            return false;
        };
        self.classifier(*classifier)
            .class_id()
            .is_some_and(|class_id| FunctionClassKind::of(class_id, interner).is_some())
    }

    /// Whether `ty` carries the extension-function-type marker annotation.
    pub fn has_extension_function_annotation(&self, ty: TypeId) -> bool {
        let marker = self.extension_function_type_class_id();
        self.annotations(ty)
            .iter()
            .any(|annotation| annotation.class_id.as_ref() == Some(marker))
    }

    /// Receiver type of an extension function type.
    pub fn function_receiver_type(&self, ty: TypeId) -> Option<TypeId> {
        if !self.has_extension_function_annotation(ty) {
            return None;
        }
        self.type_arguments(ty).first().and_then(|argument| argument.ty())
    }

    /// Parameter projections, between the receiver (if any) and the return
    /// type.
    pub fn function_value_parameters(&self, ty: TypeId) -> &[TypeProjection] {
        let arguments = self.type_arguments(ty);
        let start = usize::from(self.has_extension_function_annotation(ty)).min(arguments.len());
        let end = arguments.len().saturating_sub(1).max(start);
        &arguments[start..end]
    }

    /// Return type projection: the last argument.
    pub fn function_return_type(&self, ty: TypeId) -> Option<TypeProjection> {
        self.type_arguments(ty).last().copied()
    }
}
