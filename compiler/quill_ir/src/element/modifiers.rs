//! Small enums shared by declarations, expressions and the type layer.

/// Kind of a class-like declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}

impl ClassKind {
    #[inline]
    pub fn is_interface(self) -> bool {
        self == ClassKind::Interface
    }
}

/// Inheritance modality of a class or member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Modality {
    #[default]
    Final,
    Sealed,
    Open,
    Abstract,
}

/// Declaration-site or use-site variance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Variance {
    #[default]
    Invariant,
    In,
    Out,
}

impl Variance {
    /// Keyword as written in source; empty for invariant.
    pub fn label(self) -> &'static str {
        match self {
            Variance::Invariant => "",
            Variance::In => "in",
            Variance::Out => "out",
        }
    }
}

/// Why a statement or container was synthesized.
///
/// Lowering passes tag the blocks and calls they create so later passes can
/// recognise the pattern they came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementOrigin {
    SafeCall,
    Elvis,
    ExclExcl,
    ForLoop,
    ForLoopIterator,
    ForLoopNext,
    WhileLoop,
    DoWhileLoop,
    If,
    When,
    Try,
    AndAnd,
    OrOr,
    Equals,
    PostfixIncr,
    PostfixDecr,
    PrefixIncr,
    PrefixDecr,
    PlusEq,
    MinusEq,
    Get,
    Invoke,
    Lambda,
    AnonymousFunction,
    ArgumentsReorderingForCall,
    DestructuringDeclaration,
    Initialize,
}
