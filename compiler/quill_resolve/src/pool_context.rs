//! [`ResolutionContext`] backed by a [`TypePool`].
//!
//! Member scopes are built from declared members. A member declared in a
//! supertype is visible as a fake override unless a class closer to the
//! receiver declares a member with the same signature or explicitly
//! overrides it. Classes and interfaces without declared supertypes inherit
//! from `kotlin.Any`, whose members keep `Any` as their dispatch receiver.

use std::collections::VecDeque;

use quill_ir::element::ClassKind;
use quill_ir::{Name, StringInterner, TypeId};
use quill_types::{
    Classifier, ClassifierId, MemberDescriptor, MemberId, TypeConstructor, TypeKind, TypePool,
};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::context::{CallableMember, ResolutionContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MemberFilter {
    Functions,
    Properties,
}

impl MemberFilter {
    fn accepts(self, member: &MemberDescriptor) -> bool {
        match self {
            MemberFilter::Functions => member.is_function(),
            MemberFilter::Properties => !member.is_function(),
        }
    }
}

/// Stock resolution context over a type pool.
#[derive(Copy, Clone)]
pub struct PoolContext<'a> {
    pool: &'a TypePool,
    interner: &'a StringInterner,
}

impl<'a> PoolContext<'a> {
    pub fn new(pool: &'a TypePool, interner: &'a StringInterner) -> Self {
        PoolContext { pool, interner }
    }

    pub fn pool(&self) -> &'a TypePool {
        self.pool
    }

    /// Classifiers whose members make up the scope of `ty`.
    fn scope_roots(&self, ty: TypeId) -> SmallVec<[ClassifierId; 2]> {
        match self.pool.kind(ty) {
            TypeKind::Simple {
                constructor: TypeConstructor::Intersection(components),
                ..
            } => components
                .iter()
                .flat_map(|&component| self.scope_roots(component))
                .collect(),
            _ => self.pool.classifier_of(ty).into_iter().collect(),
        }
    }

    /// Direct supertypes of a classifier, with the implicit `Any`.
    fn direct_supertypes(&self, classifier: ClassifierId) -> SmallVec<[ClassifierId; 4]> {
        let any = self.pool.well_known().any;
        let declared: &[TypeId] = match self.pool.classifier(classifier) {
            Classifier::Class(class) => &class.super_types,
            Classifier::TypeParameter(parameter) => &parameter.upper_bounds,
            Classifier::TypeAlias(alias) => std::slice::from_ref(&alias.expanded_type),
        };
        let mut supertypes: SmallVec<[ClassifierId; 4]> = declared
            .iter()
            .filter_map(|&supertype| self.pool.classifier_of(supertype))
            .collect();
        if supertypes.is_empty() && classifier != any {
            supertypes.push(any);
        }
        supertypes
    }

    /// Whether `class` is `ancestor` or inherits from it.
    fn inherits_from(&self, class: ClassifierId, ancestor: ClassifierId) -> bool {
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::from([class]);
        while let Some(current) = queue.pop_front() {
            if current == ancestor {
                return true;
            }
            if visited.insert(current) {
                queue.extend(self.direct_supertypes(current));
            }
        }
        false
    }

    /// Whether `candidate` is hidden by a member already in scope.
    fn is_overridden(&self, candidate: MemberId, found: &[CallableMember]) -> bool {
        let descriptor = self.pool.member(candidate);
        found.iter().any(|visible| {
            let visible = self.pool.member(visible.original);
            visible.overridden.contains(&candidate)
                || (visible.kind == descriptor.kind
                    && visible.owner != descriptor.owner
                    && self.inherits_from(visible.owner, descriptor.owner))
        })
    }

    /// Members of `Any` stay dispatched on `Any`; everything else is seen
    /// through the queried type.
    fn dispatch_receiver(&self, ty: TypeId, member: &MemberDescriptor) -> TypeId {
        if member.owner == self.pool.well_known().any {
            self.pool.any_type()
        } else {
            ty
        }
    }

    /// Walk the supertype graph breadth first, nearest classes first.
    fn members(&self, ty: TypeId, name: Name, filter: MemberFilter) -> Vec<CallableMember> {
        let mut found: Vec<CallableMember> = Vec::new();
        let mut visited = FxHashSet::default();
        let mut queue: VecDeque<ClassifierId> = self.scope_roots(ty).into_iter().collect();

        while let Some(classifier) = queue.pop_front() {
            if !visited.insert(classifier) {
                continue;
            }
            let level: SmallVec<[MemberId; 4]> = self
                .pool
                .declared_members_named(classifier, name)
                .filter(|&member| filter.accepts(self.pool.member(member)))
                .filter(|&member| !self.is_overridden(member, &found))
                .collect();
            found.extend(level.into_iter().map(|member| {
                let descriptor = self.pool.member(member);
                CallableMember {
                    symbol: member,
                    modality: descriptor.modality,
                    dispatch_receiver_type: Some(self.dispatch_receiver(ty, descriptor)),
                    original: member,
                }
            }));
            queue.extend(self.direct_supertypes(classifier));
        }
        found
    }
}

impl ResolutionContext for PoolContext<'_> {
    fn function_members(&self, ty: TypeId, name: Name) -> Vec<CallableMember> {
        self.members(ty, name, MemberFilter::Functions)
    }

    fn property_members(&self, ty: TypeId, name: Name) -> Vec<CallableMember> {
        self.members(ty, name, MemberFilter::Properties)
    }

    fn is_subtype_of(&self, sub: TypeId, sup: TypeId) -> bool {
        self.pool.is_subtype_of(sub, sup)
    }

    fn class_kind(&self, ty: TypeId) -> Option<ClassKind> {
        self.pool.class_of(ty).map(|class| class.kind)
    }

    fn declaring_class(&self, member: MemberId) -> Option<ClassifierId> {
        Some(self.pool.member(member).owner)
    }

    fn any_class(&self) -> ClassifierId {
        self.pool.well_known().any
    }

    fn any_type(&self) -> TypeId {
        self.pool.any_type()
    }

    fn is_any(&self, ty: TypeId) -> bool {
        self.pool.is_any(ty)
    }

    fn name_text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}
