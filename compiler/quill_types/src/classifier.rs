//! Classifier and member descriptors stored in the [`TypePool`](crate::TypePool).
//!
//! A classifier is whatever a simple type's constructor can name: a class,
//! a type parameter, or a type alias. Members are the functions and
//! properties a class declares; inherited members are not stored, the
//! resolution layer derives them from supertypes.

use std::fmt;

use bitflags::bitflags;
use quill_ir::element::{ClassKind, Modality, Variance};
use quill_ir::{ClassId, Name, TypeId};

/// Index of a classifier in the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ClassifierId(u32);

impl ClassifierId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ClassifierId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ClassifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassifierId({})", self.0)
    }
}

/// Index of a member declaration in the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct MemberId(u32);

impl MemberId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        MemberId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberId({})", self.0)
    }
}

bitflags! {
    /// Declaration modifiers of a class that affect typing.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ClassFlags: u8 {
        /// Inner class: captures the outer class' type parameters.
        const INNER = 1 << 0;
        /// `value class`.
        const VALUE = 1 << 1;
        /// Legacy `inline class`.
        const INLINE = 1 << 2;
        /// Declared inside a function body.
        const LOCAL = 1 << 3;
        const DATA = 1 << 4;
    }
}

/// A value parameter of a primary constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorParameter {
    pub name: Name,
    pub ty: TypeId,
}

/// Underlying property of an inline class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InlineClassRepresentation {
    pub underlying_property_name: Name,
    pub underlying_type: TypeId,
}

#[derive(Clone, Debug)]
pub struct ClassDescriptor {
    pub class_id: ClassId,
    pub kind: ClassKind,
    pub modality: Modality,
    pub flags: ClassFlags,
    /// Containing class, for nested and inner classes.
    pub outer: Option<ClassifierId>,
    /// Type parameters declared on this class itself, not captured ones.
    pub declared_type_parameters: Vec<ClassifierId>,
    pub super_types: Vec<TypeId>,
    pub members: Vec<MemberId>,
    /// `None` when constructor information is unavailable.
    pub primary_constructor: Option<Vec<ConstructorParameter>>,
    pub inline_representation: Option<InlineClassRepresentation>,
}

impl ClassDescriptor {
    pub fn new(class_id: ClassId, kind: ClassKind) -> Self {
        ClassDescriptor {
            class_id,
            kind,
            modality: Modality::Final,
            flags: ClassFlags::empty(),
            outer: None,
            declared_type_parameters: Vec::new(),
            super_types: Vec::new(),
            members: Vec::new(),
            primary_constructor: None,
            inline_representation: None,
        }
    }

    #[inline]
    pub fn is_inner(&self) -> bool {
        self.flags.contains(ClassFlags::INNER)
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        self.flags.contains(ClassFlags::VALUE)
    }

    /// Inline class: the legacy modifier, or a value class with a single
    /// primary constructor parameter (or no constructor information).
    pub fn is_inline_class(&self) -> bool {
        if self.flags.contains(ClassFlags::INLINE) {
            return true;
        }
        self.is_value()
            && self
                .primary_constructor
                .as_ref()
                .map_or(true, |parameters| parameters.len() == 1)
    }

    #[inline]
    pub fn is_inline_or_value_class(&self) -> bool {
        self.is_inline_class() || self.is_value()
    }

    pub fn name(&self) -> Name {
        self.class_id.short_name()
    }
}

#[derive(Clone, Debug)]
pub struct TypeParameterDescriptor {
    pub name: Name,
    pub index: u32,
    pub variance: Variance,
    pub is_reified: bool,
    /// Declared bounds; empty means the implicit `Any?`.
    pub upper_bounds: Vec<TypeId>,
}

impl TypeParameterDescriptor {
    pub fn new(name: Name, index: u32) -> Self {
        TypeParameterDescriptor {
            name,
            index,
            variance: Variance::Invariant,
            is_reified: false,
            upper_bounds: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypeAliasDescriptor {
    pub class_id: ClassId,
    pub declared_type_parameters: Vec<ClassifierId>,
    pub expanded_type: TypeId,
}

#[derive(Clone, Debug)]
pub enum Classifier {
    Class(ClassDescriptor),
    TypeParameter(TypeParameterDescriptor),
    TypeAlias(TypeAliasDescriptor),
}

impl Classifier {
    pub fn name(&self) -> Name {
        match self {
            Classifier::Class(class) => class.name(),
            Classifier::TypeParameter(parameter) => parameter.name,
            Classifier::TypeAlias(alias) => alias.class_id.short_name(),
        }
    }

    /// Class id of class-like classifiers (classes and type aliases).
    pub fn class_id(&self) -> Option<&ClassId> {
        match self {
            Classifier::Class(class) => Some(&class.class_id),
            Classifier::TypeAlias(alias) => Some(&alias.class_id),
            Classifier::TypeParameter(_) => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDescriptor> {
        match self {
            Classifier::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_type_parameter(&self) -> Option<&TypeParameterDescriptor> {
        match self {
            Classifier::TypeParameter(parameter) => Some(parameter),
            _ => None,
        }
    }

    /// Declared type parameters of class-like classifiers.
    pub fn declared_type_parameters(&self) -> &[ClassifierId] {
        match self {
            Classifier::Class(class) => &class.declared_type_parameters,
            Classifier::TypeAlias(alias) => &alias.declared_type_parameters,
            Classifier::TypeParameter(_) => &[],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Function { value_parameter_count: u32 },
    Property,
}

/// A function or property declared in a class body.
#[derive(Clone, Debug)]
pub struct MemberDescriptor {
    pub name: Name,
    pub kind: MemberKind,
    pub modality: Modality,
    /// Declaring class.
    pub owner: ClassifierId,
    /// Members of supertypes this one explicitly overrides.
    pub overridden: Vec<MemberId>,
}

impl MemberDescriptor {
    pub fn function(name: Name, owner: ClassifierId, value_parameter_count: u32) -> Self {
        MemberDescriptor {
            name,
            kind: MemberKind::Function {
                value_parameter_count,
            },
            modality: Modality::Final,
            owner,
            overridden: Vec::new(),
        }
    }

    pub fn property(name: Name, owner: ClassifierId) -> Self {
        MemberDescriptor {
            name,
            kind: MemberKind::Property,
            modality: Modality::Final,
            owner,
            overridden: Vec::new(),
        }
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self.kind, MemberKind::Function { .. })
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.modality == Modality::Abstract
    }
}
