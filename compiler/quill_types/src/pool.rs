//! Type pool: interned type values plus the classifier and member tables.
//!
//! [`TypePool`] hash-conses [`TypeData`] so structurally equal types share
//! one [`TypeId`]. Classifiers (classes, type parameters, type aliases) and
//! their member declarations live beside the types so renderers and
//! resolvers can follow a type to its declaration.
//!
//! # Built-ins
//!
//! A new pool already contains `kotlin.Any` (with `equals`, `hashCode` and
//! `toString`), `Nothing`, `Unit`, `Boolean`, `Int`, `String` and
//! `Array<T>`, and exposes their types as [`IrBuiltIns`].

mod construct;

use std::sync::Arc;

use quill_ir::element::{ClassKind, Modality, Variance};
use quill_ir::{ClassId, FqName, IrBuiltIns, Name, StringInterner, TypeId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::annotation::Annotation;
use crate::classifier::{
    ClassDescriptor, Classifier, ClassifierId, MemberDescriptor, MemberId, TypeAliasDescriptor,
    TypeParameterDescriptor,
};
use crate::data::{TypeConstructor, TypeData, TypeKind, TypeProjection};
use crate::stack::ensure_sufficient_stack;

/// Classifier handles of the built-in classes.
#[derive(Copy, Clone, Debug)]
pub struct WellKnownClasses {
    pub any: ClassifierId,
    pub nothing: ClassifierId,
    pub unit: ClassifierId,
    pub boolean: ClassifierId,
    pub int: ClassifierId,
    pub string: ClassifierId,
    pub array: ClassifierId,
}

/// Store of resolved types, classifiers and members.
pub struct TypePool {
    types: Vec<TypeData>,
    type_map: FxHashMap<TypeData, TypeId>,
    classifiers: Vec<Classifier>,
    class_index: FxHashMap<ClassId, ClassifierId>,
    members: Vec<MemberDescriptor>,
    well_known: WellKnownClasses,
    builtins: Arc<IrBuiltIns>,
    /// `kotlin/FunctionN` classes by arity, created on demand.
    function_classes: FxHashMap<u32, ClassifierId>,
    kotlin_package: FqName,
    extension_function_type: ClassId,
}

impl TypePool {
    /// Create a pool holding the built-in classes.
    pub fn new(interner: &StringInterner) -> Self {
        let kotlin_package = FqName::parse("kotlin", interner);
        let class_id =
            |name: &str| ClassId::top_level(kotlin_package.clone(), interner.intern(name));
        let placeholder = ClassifierId::from_raw(0);

        let mut pool = TypePool {
            types: Vec::new(),
            type_map: FxHashMap::default(),
            classifiers: Vec::new(),
            class_index: FxHashMap::default(),
            members: Vec::new(),
            well_known: WellKnownClasses {
                any: placeholder,
                nothing: placeholder,
                unit: placeholder,
                boolean: placeholder,
                int: placeholder,
                string: placeholder,
                array: placeholder,
            },
            builtins: Arc::new(IrBuiltIns {
                any_type: TypeId::NONE,
                any_nullable_type: TypeId::NONE,
                nothing_type: TypeId::NONE,
                nothing_nullable_type: TypeId::NONE,
                unit_type: TypeId::NONE,
                boolean_type: TypeId::NONE,
                int_type: TypeId::NONE,
                string_type: TypeId::NONE,
            }),
            function_classes: FxHashMap::default(),
            kotlin_package: kotlin_package.clone(),
            extension_function_type: class_id("ExtensionFunctionType"),
        };

        let mut any = ClassDescriptor::new(class_id("Any"), ClassKind::Class);
        any.modality = Modality::Open;
        let any = pool.add_class(any);
        for (name, arity) in [("equals", 1), ("hashCode", 0), ("toString", 0)] {
            let mut member = MemberDescriptor::function(interner.intern(name), any, arity);
            member.modality = Modality::Open;
            pool.add_member(member);
        }

        let final_class = |pool: &mut TypePool, name: &str, kind: ClassKind| {
            pool.add_class(ClassDescriptor::new(class_id(name), kind))
        };
        let nothing = final_class(&mut pool, "Nothing", ClassKind::Class);
        let unit = final_class(&mut pool, "Unit", ClassKind::Object);
        let boolean = final_class(&mut pool, "Boolean", ClassKind::Class);
        let int = final_class(&mut pool, "Int", ClassKind::Class);
        let string = final_class(&mut pool, "String", ClassKind::Class);

        let element =
            pool.add_type_parameter(TypeParameterDescriptor::new(interner.intern("T"), 0));
        let mut array = ClassDescriptor::new(class_id("Array"), ClassKind::Class);
        array.declared_type_parameters.push(element);
        let array = pool.add_class(array);

        pool.well_known = WellKnownClasses {
            any,
            nothing,
            unit,
            boolean,
            int,
            string,
            array,
        };

        let any_type = pool.class_type(any, []);
        let any_nullable_type = pool.nullable(any_type);
        let nothing_type = pool.class_type(nothing, []);
        let nothing_nullable_type = pool.nullable(nothing_type);
        pool.builtins = Arc::new(IrBuiltIns {
            any_type,
            any_nullable_type,
            nothing_type,
            nothing_nullable_type,
            unit_type: pool.class_type(unit, []),
            boolean_type: pool.class_type(boolean, []),
            int_type: pool.class_type(int, []),
            string_type: pool.class_type(string, []),
        });
        for class in [boolean, int, string, unit, array] {
            pool.class_mut(class).super_types.push(any_type);
        }
        pool
    }

    // Types

    /// Intern a type value, returning the existing id for an equal value.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.type_map.get(&data) {
            return id;
        }
        let id = TypeId::from_raw(to_u32(self.types.len(), "types"));
        self.types.push(data.clone());
        self.type_map.insert(data, id);
        id
    }

    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()].kind
    }

    /// Whether the type itself carries the `?` flag.
    #[inline]
    pub fn is_marked_nullable(&self, id: TypeId) -> bool {
        self.types[id.index()].nullable
    }

    #[inline]
    pub fn annotations(&self, id: TypeId) -> &[Annotation] {
        &self.types[id.index()].annotations
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Declaration behind a type's constructor.
    ///
    /// Flexible types answer for their lower bound, definitely-non-null
    /// types for their original, abbreviated types for their expansion.
    pub fn classifier_of(&self, id: TypeId) -> Option<ClassifierId> {
        ensure_sufficient_stack(|| match self.kind(id) {
            TypeKind::Simple {
                constructor: TypeConstructor::Classifier(classifier),
                ..
            } => Some(*classifier),
            TypeKind::Flexible { lower, .. } => self.classifier_of(*lower),
            TypeKind::DefinitelyNotNull { original } => self.classifier_of(*original),
            TypeKind::Abbreviated { expansion, .. } => self.classifier_of(*expansion),
            _ => None,
        })
    }

    /// Type arguments of a type, through the same unwrapping as
    /// [`TypePool::classifier_of`].
    pub fn type_arguments(&self, id: TypeId) -> &[TypeProjection] {
        match self.kind(id) {
            TypeKind::Simple { arguments, .. } => arguments,
            TypeKind::Flexible { lower, .. } => self.type_arguments(*lower),
            TypeKind::DefinitelyNotNull { original } => self.type_arguments(*original),
            TypeKind::Abbreviated { expansion, .. } => self.type_arguments(*expansion),
            _ => &[],
        }
    }

    /// Exactly the non-null `kotlin.Any` type.
    pub fn is_any(&self, id: TypeId) -> bool {
        !self.is_marked_nullable(id)
            && matches!(
                self.kind(id),
                TypeKind::Simple {
                    constructor: TypeConstructor::Classifier(classifier),
                    ..
                } if *classifier == self.well_known.any
            )
    }

    /// Whether values of the type may be null: marked nullable, a flexible
    /// type with a nullable upper bound, or a type parameter with a
    /// nullable bound (no declared bound means `Any?`).
    pub fn is_nullable_type(&self, id: TypeId) -> bool {
        let mut visited = FxHashSet::default();
        self.is_nullable_type_inner(id, &mut visited)
    }

    fn is_nullable_type_inner(&self, id: TypeId, visited: &mut FxHashSet<ClassifierId>) -> bool {
        ensure_sufficient_stack(|| {
            if self.is_marked_nullable(id) {
                return true;
            }
            match self.kind(id) {
                TypeKind::Flexible { upper, .. } => self.is_nullable_type_inner(*upper, visited),
                TypeKind::DefinitelyNotNull { .. } => false,
                TypeKind::Abbreviated { expansion, .. } => {
                    self.is_nullable_type_inner(*expansion, visited)
                }
                TypeKind::Simple {
                    constructor: TypeConstructor::Classifier(classifier),
                    ..
                } => match self.classifier(*classifier) {
                    Classifier::TypeParameter(parameter) => {
                        if !visited.insert(*classifier) {
                            return false;
                        }
                        parameter.upper_bounds.is_empty()
                            || parameter
                                .upper_bounds
                                .iter()
                                .any(|&bound| self.is_nullable_type_inner(bound, visited))
                    }
                    _ => false,
                },
                _ => false,
            }
        })
    }

    // Classifiers

    pub fn add_class(&mut self, class: ClassDescriptor) -> ClassifierId {
        self.add_classifier(Classifier::Class(class))
    }

    pub fn add_type_parameter(&mut self, parameter: TypeParameterDescriptor) -> ClassifierId {
        self.add_classifier(Classifier::TypeParameter(parameter))
    }

    pub fn add_type_alias(&mut self, alias: TypeAliasDescriptor) -> ClassifierId {
        self.add_classifier(Classifier::TypeAlias(alias))
    }

    /// Register a classifier. Class-like classifiers become findable by
    /// their class id.
    pub fn add_classifier(&mut self, classifier: Classifier) -> ClassifierId {
        let id = ClassifierId::from_raw(to_u32(self.classifiers.len(), "classifiers"));
        if let Some(class_id) = classifier.class_id() {
            self.class_index.insert(class_id.clone(), id);
        }
        self.classifiers.push(classifier);
        id
    }

    #[inline]
    pub fn classifier(&self, id: ClassifierId) -> &Classifier {
        &self.classifiers[id.index()]
    }

    /// Classifier for `id`, `None` if no classifier has that id.
    pub fn try_classifier(&self, id: ClassifierId) -> Option<&Classifier> {
        self.classifiers.get(id.index())
    }

    pub fn classifier_mut(&mut self, id: ClassifierId) -> &mut Classifier {
        &mut self.classifiers[id.index()]
    }

    /// Class descriptor, `None` for type parameters and aliases.
    pub fn class(&self, id: ClassifierId) -> Option<&ClassDescriptor> {
        self.classifier(id).as_class()
    }

    /// # Panics
    /// Panics if `id` is not a class.
    pub fn class_mut(&mut self, id: ClassifierId) -> &mut ClassDescriptor {
        match &mut self.classifiers[id.index()] {
            Classifier::Class(class) => class,
            other => panic!("{id:?} is not a class: {other:?}"),
        }
    }

    pub fn find_class(&self, class_id: &ClassId) -> Option<ClassifierId> {
        self.class_index.get(class_id).copied()
    }

    /// Class descriptor behind a type's constructor, if it is a class.
    pub fn class_of(&self, id: TypeId) -> Option<&ClassDescriptor> {
        self.classifier_of(id).and_then(|classifier| self.class(classifier))
    }

    /// Own type parameters of `classifier` followed by those captured from
    /// enclosing classes when it is inner; the order type arguments use.
    pub fn all_type_parameters(&self, classifier: ClassifierId) -> Vec<ClassifierId> {
        let mut parameters = Vec::new();
        let mut current = Some(classifier);
        while let Some(id) = current {
            let descriptor = self.classifier(id);
            parameters.extend_from_slice(descriptor.declared_type_parameters());
            current = match descriptor {
                Classifier::Class(class) if class.is_inner() => class.outer,
                _ => None,
            };
        }
        parameters
    }

    // Members

    /// Register a member and attach it to its owning class.
    pub fn add_member(&mut self, member: MemberDescriptor) -> MemberId {
        let id = MemberId::from_raw(to_u32(self.members.len(), "members"));
        let owner = member.owner;
        self.members.push(member);
        if let Classifier::Class(class) = &mut self.classifiers[owner.index()] {
            class.members.push(id);
        }
        id
    }

    #[inline]
    pub fn member(&self, id: MemberId) -> &MemberDescriptor {
        &self.members[id.index()]
    }

    /// Members declared directly in `class` with the given name.
    pub fn declared_members_named(
        &self,
        class: ClassifierId,
        name: Name,
    ) -> impl Iterator<Item = MemberId> + '_ {
        self.class(class)
            .map(|class| class.members.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(move |&member| self.member(member).name == name)
    }

    // Built-ins

    pub fn well_known(&self) -> &WellKnownClasses {
        &self.well_known
    }

    pub fn builtins(&self) -> &IrBuiltIns {
        &self.builtins
    }

    /// Shared handle for module fragments.
    pub fn ir_builtins(&self) -> Arc<IrBuiltIns> {
        Arc::clone(&self.builtins)
    }

    #[inline]
    pub fn any_type(&self) -> TypeId {
        self.builtins.any_type
    }

    /// Class id of the marker annotation that makes a function type an
    /// extension function type.
    pub fn extension_function_type_class_id(&self) -> &ClassId {
        &self.extension_function_type
    }

    pub(crate) fn kotlin_package(&self) -> &FqName {
        &self.kotlin_package
    }

    pub(crate) fn function_class_cached(&self, arity: u32) -> Option<ClassifierId> {
        self.function_classes.get(&arity).copied()
    }

    pub(crate) fn cache_function_class(&mut self, arity: u32, class: ClassifierId) {
        self.function_classes.insert(arity, class);
    }
}

/// Variance of the `index`-th type parameter of `FunctionN`: parameters are
/// contravariant, the return type covariant.
pub(crate) fn function_parameter_variance(index: u32, arity: u32) -> Variance {
    if index < arity {
        Variance::In
    } else {
        Variance::Out
    }
}

/// Convert a table length into a `u32` handle index.
///
/// # Panics
/// Panics when the table outgrows `u32`.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

#[cfg(test)]
mod tests;
