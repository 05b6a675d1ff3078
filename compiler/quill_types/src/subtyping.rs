//! Nominal subtyping over declared supertypes.
//!
//! Type arguments are not compared: `List<Int>` is a subtype of
//! `Collection<String>` here. Callers that need variance-aware checks must
//! layer them on top.

use quill_ir::TypeId;
use rustc_hash::FxHashSet;

use crate::classifier::{Classifier, ClassifierId};
use crate::data::{TypeConstructor, TypeKind};
use crate::pool::TypePool;
use crate::stack::ensure_sufficient_stack;

impl TypePool {
    /// Whether every value of `sub` is a value of `sup`.
    ///
    /// Flexible types answer with their lower bound as the subtype and their
    /// upper bound as the supertype. `Nothing` is below every type and
    /// non-null `Any` above every non-null type.
    pub fn is_subtype_of(&self, sub: TypeId, sup: TypeId) -> bool {
        ensure_sufficient_stack(|| {
            if sub == sup {
                return true;
            }
            if let TypeKind::Flexible { lower, .. } = self.kind(sub) {
                return self.is_subtype_of(*lower, sup);
            }
            if let TypeKind::Flexible { upper, .. } = self.kind(sup) {
                return self.is_subtype_of(sub, *upper);
            }
            if let TypeKind::Abbreviated { expansion, .. } = self.kind(sub) {
                return self.is_subtype_of(*expansion, sup);
            }
            if let TypeKind::Abbreviated { expansion, .. } = self.kind(sup) {
                let expansion = *expansion;
                return if self.is_marked_nullable(sup) {
                    self.is_nullable_subtype_target(sub, expansion)
                } else {
                    self.is_subtype_of(sub, expansion)
                };
            }
            if matches!(self.kind(sub), TypeKind::Error)
                || matches!(self.kind(sup), TypeKind::Error)
            {
                return false;
            }
            if self.is_nullable_type(sub) && !self.is_nullable_type(sup) {
                return false;
            }
            if let TypeKind::Simple {
                constructor: TypeConstructor::Intersection(components),
                ..
            } = self.kind(sup)
            {
                return components
                    .iter()
                    .all(|&component| self.is_subtype_of(sub, component));
            }
            let Some(target) = self.classifier_of(sup) else {
                return false;
            };
            if target == self.well_known().any {
                return true;
            }
            self.reaches_classifier(sub, target, &mut FxHashSet::default())
        })
    }

    /// `sub <: expansion?` where the nullable flag sits on the alias use.
    fn is_nullable_subtype_target(&self, sub: TypeId, expansion: TypeId) -> bool {
        match self.classifier_of(expansion) {
            Some(target) if target == self.well_known().any => true,
            Some(target) => self.reaches_classifier(sub, target, &mut FxHashSet::default()),
            None => false,
        }
    }

    /// Whether `target` is `sub`'s own classifier or one of its declared
    /// supertypes, transitively.
    fn reaches_classifier(
        &self,
        sub: TypeId,
        target: ClassifierId,
        visited: &mut FxHashSet<ClassifierId>,
    ) -> bool {
        ensure_sufficient_stack(|| {
            if let TypeKind::Simple {
                constructor: TypeConstructor::Intersection(components),
                ..
            } = self.kind(sub)
            {
                return components
                    .iter()
                    .any(|&component| self.reaches_classifier(component, target, visited));
            }
            let Some(classifier) = self.classifier_of(sub) else {
                return false;
            };
            if classifier == target || classifier == self.well_known().nothing {
                return true;
            }
            if !visited.insert(classifier) {
                return false;
            }
            let supertypes = match self.classifier(classifier) {
                Classifier::Class(class) => &class.super_types,
                Classifier::TypeParameter(parameter) => &parameter.upper_bounds,
                Classifier::TypeAlias(alias) => {
                    return self.reaches_classifier(alias.expanded_type, target, visited);
                }
            };
            supertypes
                .iter()
                .any(|&supertype| self.reaches_classifier(supertype, target, visited))
        })
    }
}
