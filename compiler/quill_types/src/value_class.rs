//! Inline and value class queries.
//!
//! An inline class wraps exactly one underlying value; a multi-field value
//! class wraps the parameters of its primary constructor. The recursion
//! check walks underlying types (and type-parameter bounds) looking for a
//! classifier that contains itself.

use std::hash::Hash;

use quill_ir::TypeId;
use rustc_hash::FxHashSet;

use crate::classifier::{Classifier, ClassifierId};
use crate::pool::TypePool;
use crate::stack::ensure_sufficient_stack;

/// Set with nested undo frames.
///
/// `checkpoint` opens a frame; inserts made afterwards are recorded in it.
/// `commit` folds the frame into its parent (keeping the inserts), `revert`
/// removes everything the frame inserted.
#[derive(Clone, Debug)]
pub struct ReversibleSet<T> {
    items: FxHashSet<T>,
    frames: Vec<Vec<T>>,
}

impl<T: Copy + Eq + Hash> ReversibleSet<T> {
    pub fn new() -> Self {
        ReversibleSet {
            items: FxHashSet::default(),
            frames: Vec::new(),
        }
    }

    /// Insert `value`; `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if !self.items.insert(value) {
            return false;
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.push(value);
        }
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn checkpoint(&mut self) {
        self.frames.push(Vec::new());
    }

    /// Keep the innermost frame's inserts.
    pub fn commit(&mut self) {
        if let Some(frame) = self.frames.pop() {
            if let Some(parent) = self.frames.last_mut() {
                parent.extend(frame);
            }
        }
    }

    /// Undo the innermost frame's inserts.
    pub fn revert(&mut self) {
        if let Some(frame) = self.frames.pop() {
            for value in frame {
                self.items.remove(&value);
            }
        }
    }
}

impl<T: Copy + Eq + Hash> Default for ReversibleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl TypePool {
    /// Whether the type's constructor is an inline class.
    pub fn is_inline_class_type(&self, ty: TypeId) -> bool {
        self.class_of(ty).is_some_and(|class| class.is_inline_class())
    }

    pub fn is_value_class_type(&self, ty: TypeId) -> bool {
        self.class_of(ty).is_some_and(|class| class.is_value())
    }

    pub fn is_inline_or_value_class_type(&self, ty: TypeId) -> bool {
        self.class_of(ty)
            .is_some_and(|class| class.is_inline_or_value_class())
    }

    /// Declared underlying type of an inline class, before substitution.
    pub fn unsubstituted_underlying_type(&self, ty: TypeId) -> Option<TypeId> {
        self.class_of(ty)?
            .inline_representation
            .as_ref()
            .map(|representation| representation.underlying_type)
    }

    /// Underlying types before substitution: the single inline-class value,
    /// or the primary constructor parameters of a multi-field value class.
    pub fn unsubstituted_underlying_types(&self, ty: TypeId) -> Vec<TypeId> {
        let Some(class) = self.class_of(ty) else {
            return Vec::new();
        };
        if class.is_inline_class() {
            self.unsubstituted_underlying_type(ty).into_iter().collect()
        } else if class.is_value() {
            class
                .primary_constructor
                .as_ref()
                .map(|parameters| parameters.iter().map(|parameter| parameter.ty).collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    /// Underlying type with the class' type parameters replaced by the
    /// arguments of `ty`.
    pub fn substituted_underlying_type(&mut self, ty: TypeId) -> Option<TypeId> {
        let underlying = self.unsubstituted_underlying_type(ty)?;
        let substitution = self.substitution_for(ty);
        Some(self.substitute(underlying, &substitution))
    }

    pub fn substituted_underlying_types(&mut self, ty: TypeId) -> Vec<TypeId> {
        let substitution = self.substitution_for(ty);
        self.unsubstituted_underlying_types(ty)
            .into_iter()
            .map(|underlying| self.substitute(underlying, &substitution))
            .collect()
    }

    /// Whether an inline class type wraps a nullable value.
    pub fn is_nullable_underlying_type(&self, ty: TypeId) -> bool {
        if !self.is_inline_class_type(ty) {
            return false;
        }
        self.unsubstituted_underlying_type(ty)
            .is_some_and(|underlying| self.is_nullable_type(underlying))
    }

    /// Whether an inline or value class contains itself through its
    /// underlying types.
    pub fn is_recursive_value_class_type(&self, ty: TypeId) -> bool {
        let mut visited = ReversibleSet::new();
        self.is_recursive_value_class_type_with(ty, &mut visited)
    }

    /// Recursion check sharing a caller-owned visited set.
    ///
    /// Classifiers reached only by a probe that found no recursion are
    /// removed again, so `visited` is unchanged when this returns `false`.
    pub fn is_recursive_value_class_type_with(
        &self,
        ty: TypeId,
        visited: &mut ReversibleSet<ClassifierId>,
    ) -> bool {
        ensure_sufficient_stack(|| {
            visited.checkpoint();
            let recursive = self.probe_recursion(ty, visited);
            if recursive {
                visited.commit();
            } else {
                visited.revert();
            }
            recursive
        })
    }

    fn probe_recursion(&self, ty: TypeId, visited: &mut ReversibleSet<ClassifierId>) -> bool {
        let Some(classifier) = self.classifier_of(ty) else {
            return false;
        };
        if !visited.insert(classifier) {
            tracing::trace!(?classifier, "value class recursion found");
            return true;
        }
        match self.classifier(classifier) {
            Classifier::Class(class) => {
                class.is_inline_or_value_class()
                    && self
                        .unsubstituted_underlying_types(ty)
                        .into_iter()
                        .any(|underlying| {
                            self.is_recursive_value_class_type_with(underlying, visited)
                        })
            }
            Classifier::TypeParameter(parameter) => parameter
                .upper_bounds
                .iter()
                .any(|&bound| self.is_recursive_value_class_type_with(bound, visited)),
            Classifier::TypeAlias(_) => false,
        }
    }
}

#[cfg(test)]
mod tests;
