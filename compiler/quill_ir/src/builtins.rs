//! Module identity and the built-in type handles shared by a module's IR.

use crate::{Name, TypeId};

/// Identity of the module an IR fragment was compiled from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleDescriptor {
    pub name: Name,
    /// Whether this module is the standard library itself.
    pub is_stdlib: bool,
}

impl ModuleDescriptor {
    pub fn new(name: Name) -> Self {
        ModuleDescriptor {
            name,
            is_stdlib: false,
        }
    }
}

/// Handles of the built-in types, filled in by the type pool that owns them.
///
/// Shared between the module fragment and every pass through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IrBuiltIns {
    pub any_type: TypeId,
    pub any_nullable_type: TypeId,
    pub nothing_type: TypeId,
    pub nothing_nullable_type: TypeId,
    pub unit_type: TypeId,
    pub boolean_type: TypeId,
    pub int_type: TypeId,
    pub string_type: TypeId,
}
