//! Function and initializer bodies.

use super::impl_children;
use crate::ElementId;

/// A body that is a single expression (`= expr`, default values, field
/// initializers).
#[derive(Clone, Debug)]
pub struct ExpressionBody {
    pub expression: ElementId,
}

impl_children!(ExpressionBody { one expression: Expression });

/// A body made of statements.
#[derive(Clone, Debug, Default)]
pub struct BlockBody {
    pub statements: Vec<ElementId>,
}

impl_children!(BlockBody { list statements: Statement });

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntheticBodyKind {
    EnumValues,
    EnumValueOf,
    EnumEntries,
}

/// Body generated by the backend on demand.
#[derive(Clone, Debug)]
pub struct SyntheticBody {
    pub kind: SyntheticBodyKind,
}

impl_children!(SyntheticBody);
