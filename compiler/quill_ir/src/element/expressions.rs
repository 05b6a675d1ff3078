//! Expression elements, plus the `when` branches and `catch` clauses they
//! own.
//!
//! Every expression carries its resolved type as `ty`.

use super::{impl_children, StatementOrigin};
use crate::{ElementId, Name, Symbol, TypeId};

/// A coroutine body split at a suspension point: `suspension_point_id`
/// names the point, `result` computes the value.
#[derive(Clone, Debug)]
pub struct SuspendableExpression {
    pub ty: TypeId,
    pub suspension_point_id: ElementId,
    pub result: ElementId,
}

impl_children!(SuspendableExpression {
    one suspension_point_id: Expression,
    one result: Expression,
});

/// A point where a coroutine may suspend and later resume.
///
/// The id parameter is always a `Variable` declaration; the slot check
/// rejects anything else, also on replacement.
#[derive(Clone, Debug)]
pub struct SuspensionPoint {
    pub ty: TypeId,
    pub suspension_point_id_parameter: ElementId,
    pub result: ElementId,
    pub resume_result: ElementId,
}

impl_children!(SuspensionPoint {
    one suspension_point_id_parameter: Variable,
    one result: Expression,
    one resume_result: Expression,
});

/// Literal value. Floats are stored as bits so values stay `Eq + Hash`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstValue {
    Null,
    Boolean(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(u32),
    Double(u64),
    String(String),
}

impl ConstValue {
    pub fn float(value: f32) -> Self {
        ConstValue::Float(value.to_bits())
    }

    pub fn double(value: f64) -> Self {
        ConstValue::Double(value.to_bits())
    }
}

#[derive(Clone, Debug)]
pub struct Const {
    pub ty: TypeId,
    pub value: ConstValue,
}

impl_children!(Const);

/// Compile-time constant object built by a constructor.
#[derive(Clone, Debug)]
pub struct ConstantObject {
    pub ty: TypeId,
    pub constructor: Symbol,
    pub type_arguments: Vec<TypeId>,
    pub value_arguments: Vec<ElementId>,
}

impl_children!(ConstantObject { list value_arguments: Expression });

#[derive(Clone, Debug)]
pub struct ConstantPrimitive {
    pub ty: TypeId,
    pub value: ElementId,
}

impl_children!(ConstantPrimitive { one value: Expression });

#[derive(Clone, Debug)]
pub struct ConstantArray {
    pub ty: TypeId,
    pub elements: Vec<ElementId>,
}

impl_children!(ConstantArray { list elements: Expression });

#[derive(Clone, Debug)]
pub struct Vararg {
    pub ty: TypeId,
    pub vararg_element_type: TypeId,
    pub elements: Vec<ElementId>,
}

impl_children!(Vararg { list elements: VarargElement });

/// `*array` inside a vararg.
#[derive(Clone, Debug)]
pub struct SpreadElement {
    pub expression: ElementId,
}

impl_children!(SpreadElement { one expression: Expression });

/// An expression that owns an ordered statement list.
pub trait StatementContainer {
    fn origin(&self) -> Option<StatementOrigin>;

    fn statements(&self) -> &[ElementId];

    /// Whether declarations inside are visible to the enclosing scope.
    fn is_transparent_scope(&self) -> bool;
}

/// Statement sequence that opens its own scope.
#[derive(Clone, Debug)]
pub struct Block {
    pub ty: TypeId,
    pub origin: Option<StatementOrigin>,
    pub statements: Vec<ElementId>,
}

impl_children!(Block { list statements: Statement });

impl StatementContainer for Block {
    fn origin(&self) -> Option<StatementOrigin> {
        self.origin
    }

    fn statements(&self) -> &[ElementId] {
        &self.statements
    }

    fn is_transparent_scope(&self) -> bool {
        false
    }
}

/// Statement sequence spliced into the enclosing scope.
#[derive(Clone, Debug)]
pub struct Composite {
    pub ty: TypeId,
    pub origin: Option<StatementOrigin>,
    pub statements: Vec<ElementId>,
}

impl_children!(Composite { list statements: Statement });

impl StatementContainer for Composite {
    fn origin(&self) -> Option<StatementOrigin> {
        self.origin
    }

    fn statements(&self) -> &[ElementId] {
        &self.statements
    }

    fn is_transparent_scope(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
pub struct StringConcatenation {
    pub ty: TypeId,
    pub arguments: Vec<ElementId>,
}

impl_children!(StringConcatenation { list arguments: Expression });

#[derive(Clone, Debug)]
pub struct GetObjectValue {
    pub ty: TypeId,
    pub symbol: Symbol,
}

impl_children!(GetObjectValue);

#[derive(Clone, Debug)]
pub struct GetEnumValue {
    pub ty: TypeId,
    pub symbol: Symbol,
}

impl_children!(GetEnumValue);

/// Read of a variable or value parameter.
#[derive(Clone, Debug)]
pub struct GetValue {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub origin: Option<StatementOrigin>,
}

impl_children!(GetValue);

#[derive(Clone, Debug)]
pub struct SetValue {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub origin: Option<StatementOrigin>,
    pub value: ElementId,
}

impl_children!(SetValue { one value: Expression });

#[derive(Clone, Debug)]
pub struct GetField {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub super_qualifier: Option<Symbol>,
    pub origin: Option<StatementOrigin>,
    pub receiver: Option<ElementId>,
}

impl_children!(GetField { opt receiver: Expression });

#[derive(Clone, Debug)]
pub struct SetField {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub super_qualifier: Option<Symbol>,
    pub origin: Option<StatementOrigin>,
    pub receiver: Option<ElementId>,
    pub value: ElementId,
}

impl_children!(SetField {
    opt receiver: Expression,
    one value: Expression,
});

/// Function call. Absent value arguments (defaults) are `None` and skipped
/// by traversal.
#[derive(Clone, Debug)]
pub struct Call {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub origin: Option<StatementOrigin>,
    pub super_qualifier: Option<Symbol>,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
    pub value_arguments: Vec<Option<ElementId>>,
}

impl Call {
    pub fn new(symbol: Symbol, ty: TypeId) -> Self {
        Call {
            ty,
            symbol,
            origin: None,
            super_qualifier: None,
            type_arguments: Vec::new(),
            dispatch_receiver: None,
            extension_receiver: None,
            value_arguments: Vec::new(),
        }
    }
}

impl_children!(Call {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
    opt_list value_arguments: Expression,
});

#[derive(Clone, Debug)]
pub struct ConstructorCall {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub origin: Option<StatementOrigin>,
    pub constructor_type_arguments_count: u32,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
    pub value_arguments: Vec<Option<ElementId>>,
}

impl_children!(ConstructorCall {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
    opt_list value_arguments: Expression,
});

/// `this(...)` or `super(...)` from a constructor.
#[derive(Clone, Debug)]
pub struct DelegatingConstructorCall {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
    pub value_arguments: Vec<Option<ElementId>>,
}

impl_children!(DelegatingConstructorCall {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
    opt_list value_arguments: Expression,
});

#[derive(Clone, Debug)]
pub struct EnumConstructorCall {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
    pub value_arguments: Vec<Option<ElementId>>,
}

impl_children!(EnumConstructorCall {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
    opt_list value_arguments: Expression,
});

/// `x::class`
#[derive(Clone, Debug)]
pub struct GetClass {
    pub ty: TypeId,
    pub argument: ElementId,
}

impl_children!(GetClass { one argument: Expression });

#[derive(Clone, Debug)]
pub struct FunctionReference {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub reflection_target: Option<Symbol>,
    pub origin: Option<StatementOrigin>,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
    pub value_arguments: Vec<Option<ElementId>>,
}

impl_children!(FunctionReference {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
    opt_list value_arguments: Expression,
});

#[derive(Clone, Debug)]
pub struct PropertyReference {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub field: Option<Symbol>,
    pub getter: Option<Symbol>,
    pub setter: Option<Symbol>,
    pub origin: Option<StatementOrigin>,
    pub type_arguments: Vec<Option<TypeId>>,
    pub dispatch_receiver: Option<ElementId>,
    pub extension_receiver: Option<ElementId>,
}

impl_children!(PropertyReference {
    opt dispatch_receiver: Expression,
    opt extension_receiver: Expression,
});

#[derive(Clone, Debug)]
pub struct LocalDelegatedPropertyReference {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub delegate: Symbol,
    pub getter: Symbol,
    pub setter: Option<Symbol>,
    pub origin: Option<StatementOrigin>,
}

impl_children!(LocalDelegatedPropertyReference);

/// Reference to a function used only as a backend handle.
#[derive(Clone, Debug)]
pub struct RawFunctionReference {
    pub ty: TypeId,
    pub symbol: Symbol,
}

impl_children!(RawFunctionReference);

/// A lambda or anonymous function; owns the function it defines.
#[derive(Clone, Debug)]
pub struct FunctionExpression {
    pub ty: TypeId,
    pub origin: StatementOrigin,
    pub function: ElementId,
}

impl_children!(FunctionExpression { one function: SimpleFunction });

/// `Foo::class` on a classifier.
#[derive(Clone, Debug)]
pub struct ClassReference {
    pub ty: TypeId,
    pub symbol: Symbol,
    pub class_type: TypeId,
}

impl_children!(ClassReference);

/// Marker where a constructor runs the class' property initializers.
#[derive(Clone, Debug)]
pub struct InstanceInitializerCall {
    pub ty: TypeId,
    pub class_symbol: Symbol,
}

impl_children!(InstanceInitializerCall);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    Cast,
    ImplicitCast,
    ImplicitNotNull,
    ImplicitCoercionToUnit,
    ImplicitIntegerCoercion,
    SafeCast,
    InstanceOf,
    NotInstanceOf,
    SamConversion,
    ImplicitDynamicCast,
    ReinterpretCast,
}

#[derive(Clone, Debug)]
pub struct TypeOperatorCall {
    pub ty: TypeId,
    pub operator: TypeOperator,
    pub type_operand: TypeId,
    pub argument: ElementId,
}

impl_children!(TypeOperatorCall { one argument: Expression });

#[derive(Clone, Debug)]
pub struct When {
    pub ty: TypeId,
    pub origin: Option<StatementOrigin>,
    pub branches: Vec<ElementId>,
}

impl_children!(When { list branches: Branch });

#[derive(Clone, Debug)]
pub struct Branch {
    pub condition: ElementId,
    pub result: ElementId,
}

impl_children!(Branch {
    one condition: Expression,
    one result: Expression,
});

/// The `else ->` branch; its condition is the constant `true`.
#[derive(Clone, Debug)]
pub struct ElseBranch {
    pub condition: ElementId,
    pub result: ElementId,
}

impl_children!(ElseBranch {
    one condition: Expression,
    one result: Expression,
});

#[derive(Clone, Debug)]
pub struct WhileLoop {
    pub ty: TypeId,
    pub origin: Option<StatementOrigin>,
    pub label: Option<Name>,
    pub condition: ElementId,
    pub body: Option<ElementId>,
}

impl_children!(WhileLoop {
    one condition: Expression,
    opt body: Expression,
});

/// Body runs before the condition, and is traversed first.
#[derive(Clone, Debug)]
pub struct DoWhileLoop {
    pub ty: TypeId,
    pub origin: Option<StatementOrigin>,
    pub label: Option<Name>,
    pub body: Option<ElementId>,
    pub condition: ElementId,
}

impl_children!(DoWhileLoop {
    opt body: Expression,
    one condition: Expression,
});

#[derive(Clone, Debug)]
pub struct Try {
    pub ty: TypeId,
    pub try_result: ElementId,
    pub catches: Vec<ElementId>,
    pub finally_expression: Option<ElementId>,
}

impl_children!(Try {
    one try_result: Expression,
    list catches: Catch,
    opt finally_expression: Expression,
});

#[derive(Clone, Debug)]
pub struct Catch {
    pub catch_parameter: ElementId,
    pub result: ElementId,
}

impl_children!(Catch {
    one catch_parameter: Variable,
    one result: Expression,
});

#[derive(Clone, Debug)]
pub struct Break {
    pub ty: TypeId,
    pub loop_target: Symbol,
    pub label: Option<Name>,
}

impl_children!(Break);

#[derive(Clone, Debug)]
pub struct Continue {
    pub ty: TypeId,
    pub loop_target: Symbol,
    pub label: Option<Name>,
}

impl_children!(Continue);

#[derive(Clone, Debug)]
pub struct Return {
    pub ty: TypeId,
    pub return_target: Symbol,
    pub value: ElementId,
}

impl_children!(Return { one value: Expression });

#[derive(Clone, Debug)]
pub struct Throw {
    pub ty: TypeId,
    pub value: ElementId,
}

impl_children!(Throw { one value: Expression });

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DynamicOperator {
    UnaryPlus,
    UnaryMinus,
    Excl,
    PrefixIncrement,
    PrefixDecrement,
    PostfixIncrement,
    PostfixDecrement,
    BinaryPlus,
    BinaryMinus,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
    Ge,
    Le,
    EqEq,
    ExclEq,
    EqEqEq,
    ExclEqEq,
    AndAnd,
    OrOr,
    ArrayAccess,
    Invoke,
    Assign,
}

/// Operator applied to a dynamically typed receiver.
#[derive(Clone, Debug)]
pub struct DynamicOperatorExpression {
    pub ty: TypeId,
    pub operator: DynamicOperator,
    pub receiver: ElementId,
    pub arguments: Vec<ElementId>,
}

impl_children!(DynamicOperatorExpression {
    one receiver: Expression,
    list arguments: Expression,
});

#[derive(Clone, Debug)]
pub struct DynamicMemberExpression {
    pub ty: TypeId,
    pub member_name: Name,
    pub receiver: ElementId,
}

impl_children!(DynamicMemberExpression { one receiver: Expression });

#[derive(Clone, Debug)]
pub struct ErrorExpression {
    pub ty: TypeId,
    pub description: String,
}

impl_children!(ErrorExpression);

#[derive(Clone, Debug)]
pub struct ErrorCallExpression {
    pub ty: TypeId,
    pub description: String,
    pub explicit_receiver: Option<ElementId>,
    pub arguments: Vec<ElementId>,
}

impl_children!(ErrorCallExpression {
    opt explicit_receiver: Expression,
    list arguments: Expression,
});
