//! What call resolution needs to know about types and their members.

use quill_ir::element::{ClassKind, Modality};
use quill_ir::{Name, TypeId};
use quill_types::{ClassifierId, MemberId};

/// A function or property as seen through a receiver type.
///
/// Inherited members show up as fake overrides: `symbol` and `original`
/// are the same declaration, but `dispatch_receiver_type` is the type they
/// were found through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallableMember {
    pub symbol: MemberId,
    pub modality: Modality,
    /// `None` for members without a dispatch receiver.
    pub dispatch_receiver_type: Option<TypeId>,
    /// Declaration behind any chain of fake overrides.
    pub original: MemberId,
}

/// Member scopes and type queries used to pick supertypes.
pub trait ResolutionContext {
    /// Functions named `name` visible in the member scope of `ty`,
    /// inherited ones included.
    fn function_members(&self, ty: TypeId, name: Name) -> Vec<CallableMember>;

    /// Properties named `name` visible in the member scope of `ty`.
    fn property_members(&self, ty: TypeId, name: Name) -> Vec<CallableMember>;

    fn is_subtype_of(&self, sub: TypeId, sup: TypeId) -> bool;

    /// Kind of the regular class `ty` refers to; `None` for type
    /// parameters and other non-class types.
    fn class_kind(&self, ty: TypeId) -> Option<ClassKind>;

    /// Class that declares `member`.
    fn declaring_class(&self, member: MemberId) -> Option<ClassifierId>;

    /// The `kotlin.Any` class.
    fn any_class(&self) -> ClassifierId;

    /// Non-null `kotlin.Any` type.
    fn any_type(&self) -> TypeId;

    fn is_any(&self, ty: TypeId) -> bool;

    /// Text of an interned name.
    fn name_text(&self, name: Name) -> &str;
}
