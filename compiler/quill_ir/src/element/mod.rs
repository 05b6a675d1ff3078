//! IR element variants.
//!
//! The variant set is closed and listed exactly once, in
//! [`for_each_element!`]. The [`Element`] enum, [`ElementKind`], and both
//! visitor protocols are generated from that list, so adding a variant
//! updates every dispatch site together.
//!
//! Each variant struct owns its children as [`ElementId`] slots and reports
//! them through [`Children`]. Slot order is traversal order. Non-owning
//! references to other declarations are [`Symbol`](crate::Symbol)s and are
//! never reported as children.

mod bodies;
mod declarations;
mod expressions;
mod modifiers;

pub use bodies::{BlockBody, ExpressionBody, SyntheticBody, SyntheticBodyKind};
pub use declarations::{
    AnonymousInitializer, Class, Constructor, EnumEntry, ErrorDeclaration,
    ExternalPackageFragment, Field, File, LocalDelegatedProperty, ModuleFragment, Property,
    Script, SimpleFunction, TypeAlias, TypeParameter, ValueParameter, Variable,
};
pub use expressions::{
    Block, Branch, Break, Call, Catch, ClassReference, Composite, Const, ConstValue,
    ConstantArray, ConstantObject, ConstantPrimitive, ConstructorCall, Continue,
    DelegatingConstructorCall, DoWhileLoop, DynamicMemberExpression, DynamicOperator,
    DynamicOperatorExpression, ElseBranch, EnumConstructorCall, ErrorCallExpression,
    ErrorExpression, FunctionExpression, FunctionReference, GetClass, GetEnumValue, GetField,
    GetObjectValue, GetValue, InstanceInitializerCall, LocalDelegatedPropertyReference,
    PropertyReference, RawFunctionReference, Return, SetField, SetValue, SpreadElement,
    StatementContainer, StringConcatenation, SuspendableExpression, SuspensionPoint, Throw, Try,
    TypeOperator, TypeOperatorCall, Vararg, When, WhileLoop,
};
pub use modifiers::{ClassKind, Modality, StatementOrigin, Variance};

use crate::ElementId;

/// Invoke `$callback!` with the full variant list.
///
/// Each entry is `Variant => visit_method, fallback_method;`. The fallback
/// is the handler a visitor's default implementation forwards to: usually
/// `visit_element`, or a more general variant for specializations.
macro_rules! for_each_element {
    ($callback:ident) => {
        $callback! {
            ModuleFragment => visit_module_fragment, visit_element;
            File => visit_file, visit_element;
            ExternalPackageFragment => visit_external_package_fragment, visit_element;
            Script => visit_script, visit_element;
            Class => visit_class, visit_element;
            SimpleFunction => visit_simple_function, visit_element;
            Constructor => visit_constructor, visit_element;
            Property => visit_property, visit_element;
            Field => visit_field, visit_element;
            LocalDelegatedProperty => visit_local_delegated_property, visit_element;
            Variable => visit_variable, visit_element;
            EnumEntry => visit_enum_entry, visit_element;
            AnonymousInitializer => visit_anonymous_initializer, visit_element;
            TypeParameter => visit_type_parameter, visit_element;
            ValueParameter => visit_value_parameter, visit_element;
            TypeAlias => visit_type_alias, visit_element;
            ExpressionBody => visit_expression_body, visit_element;
            BlockBody => visit_block_body, visit_element;
            SyntheticBody => visit_synthetic_body, visit_element;
            SuspendableExpression => visit_suspendable_expression, visit_element;
            SuspensionPoint => visit_suspension_point, visit_element;
            Const => visit_const, visit_element;
            ConstantObject => visit_constant_object, visit_element;
            ConstantPrimitive => visit_constant_primitive, visit_element;
            ConstantArray => visit_constant_array, visit_element;
            Vararg => visit_vararg, visit_element;
            SpreadElement => visit_spread_element, visit_element;
            Block => visit_block, visit_element;
            Composite => visit_composite, visit_element;
            StringConcatenation => visit_string_concatenation, visit_element;
            GetObjectValue => visit_get_object_value, visit_element;
            GetEnumValue => visit_get_enum_value, visit_element;
            GetValue => visit_get_value, visit_element;
            SetValue => visit_set_value, visit_element;
            GetField => visit_get_field, visit_element;
            SetField => visit_set_field, visit_element;
            Call => visit_call, visit_element;
            ConstructorCall => visit_constructor_call, visit_element;
            DelegatingConstructorCall => visit_delegating_constructor_call, visit_element;
            EnumConstructorCall => visit_enum_constructor_call, visit_element;
            GetClass => visit_get_class, visit_element;
            FunctionReference => visit_function_reference, visit_element;
            PropertyReference => visit_property_reference, visit_element;
            LocalDelegatedPropertyReference =>
                visit_local_delegated_property_reference, visit_element;
            RawFunctionReference => visit_raw_function_reference, visit_element;
            FunctionExpression => visit_function_expression, visit_element;
            ClassReference => visit_class_reference, visit_element;
            InstanceInitializerCall => visit_instance_initializer_call, visit_element;
            TypeOperatorCall => visit_type_operator, visit_element;
            When => visit_when, visit_element;
            Branch => visit_branch, visit_element;
            ElseBranch => visit_else_branch, visit_branch;
            WhileLoop => visit_while_loop, visit_element;
            DoWhileLoop => visit_do_while_loop, visit_element;
            Try => visit_try, visit_element;
            Catch => visit_catch, visit_element;
            Break => visit_break, visit_element;
            Continue => visit_continue, visit_element;
            Return => visit_return, visit_element;
            Throw => visit_throw, visit_element;
            DynamicOperatorExpression => visit_dynamic_operator_expression, visit_element;
            DynamicMemberExpression => visit_dynamic_member_expression, visit_element;
            ErrorDeclaration => visit_error_declaration, visit_element;
            ErrorExpression => visit_error_expression, visit_element;
            ErrorCallExpression => visit_error_call_expression, visit_error_expression;
        }
    };
}
pub(crate) use for_each_element;

/// What a child slot may hold. Checked whenever a slot is filled, at
/// allocation and on replacement during transformation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    File,
    Declaration,
    Statement,
    Expression,
    /// A vararg element: an expression or a spread element.
    VarargElement,
    Body,
    ExpressionBody,
    BlockBody,
    Branch,
    Catch,
    Variable,
    SimpleFunction,
    Class,
    Field,
    ValueParameter,
    TypeParameter,
}

impl SlotKind {
    /// Whether an element of `kind` may occupy a slot of this kind.
    pub fn accepts(self, kind: ElementKind) -> bool {
        match self {
            SlotKind::File => kind == ElementKind::File,
            SlotKind::Declaration => kind.is_declaration(),
            SlotKind::Statement => kind.is_declaration() || kind.is_expression(),
            SlotKind::Expression => kind.is_expression(),
            SlotKind::VarargElement => kind.is_expression() || kind == ElementKind::SpreadElement,
            SlotKind::Body => kind.is_body(),
            SlotKind::ExpressionBody => kind == ElementKind::ExpressionBody,
            SlotKind::BlockBody => kind == ElementKind::BlockBody,
            SlotKind::Branch => matches!(kind, ElementKind::Branch | ElementKind::ElseBranch),
            SlotKind::Catch => kind == ElementKind::Catch,
            SlotKind::Variable => kind == ElementKind::Variable,
            SlotKind::SimpleFunction => kind == ElementKind::SimpleFunction,
            SlotKind::Class => kind == ElementKind::Class,
            SlotKind::Field => kind == ElementKind::Field,
            SlotKind::ValueParameter => kind == ElementKind::ValueParameter,
            SlotKind::TypeParameter => kind == ElementKind::TypeParameter,
        }
    }
}

/// Access to the owned child slots of an element.
pub trait Children {
    /// Report each owned child in traversal order.
    fn for_each_child(&self, f: &mut dyn FnMut(ElementId));

    /// Hand out each owned child slot, in traversal order, for replacement.
    fn for_each_child_mut(&mut self, f: &mut dyn FnMut(SlotKind, &mut ElementId));
}

/// A concrete variant struct of [`Element`].
pub trait ElementVariant: Children + Sized {
    const KIND: ElementKind;

    fn from_element(element: &Element) -> Option<&Self>;

    fn from_element_mut(element: &mut Element) -> Option<&mut Self>;
}

macro_rules! define_elements {
    ($($variant:ident => $visit:ident, $fallback:ident;)*) => {
        /// Any IR element.
        #[derive(Clone, Debug)]
        pub enum Element {
            $($variant($variant),)*
        }

        /// Discriminant of [`Element`].
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum ElementKind {
            $($variant,)*
        }

        impl ElementKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [ElementKind] = &[$(ElementKind::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(ElementKind::$variant => stringify!($variant),)*
                }
            }
        }

        impl Element {
            pub fn kind(&self) -> ElementKind {
                match self {
                    $(Element::$variant(_) => ElementKind::$variant,)*
                }
            }
        }

        impl Children for Element {
            fn for_each_child(&self, f: &mut dyn FnMut(ElementId)) {
                match self {
                    $(Element::$variant(node) => node.for_each_child(f),)*
                }
            }

            fn for_each_child_mut(&mut self, f: &mut dyn FnMut(SlotKind, &mut ElementId)) {
                match self {
                    $(Element::$variant(node) => node.for_each_child_mut(f),)*
                }
            }
        }

        $(
            impl ElementVariant for $variant {
                const KIND: ElementKind = ElementKind::$variant;

                fn from_element(element: &Element) -> Option<&Self> {
                    match element {
                        Element::$variant(node) => Some(node),
                        _ => None,
                    }
                }

                fn from_element_mut(element: &mut Element) -> Option<&mut Self> {
                    match element {
                        Element::$variant(node) => Some(node),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for Element {
                fn from(node: $variant) -> Self {
                    Element::$variant(node)
                }
            }
        )*
    };
}

for_each_element!(define_elements);

impl ElementKind {
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            ElementKind::Script
                | ElementKind::Class
                | ElementKind::SimpleFunction
                | ElementKind::Constructor
                | ElementKind::Property
                | ElementKind::Field
                | ElementKind::LocalDelegatedProperty
                | ElementKind::Variable
                | ElementKind::EnumEntry
                | ElementKind::AnonymousInitializer
                | ElementKind::TypeParameter
                | ElementKind::ValueParameter
                | ElementKind::TypeAlias
                | ElementKind::ErrorDeclaration
        )
    }

    pub fn is_body(self) -> bool {
        matches!(
            self,
            ElementKind::ExpressionBody | ElementKind::BlockBody | ElementKind::SyntheticBody
        )
    }

    pub fn is_expression(self) -> bool {
        !self.is_declaration()
            && !self.is_body()
            && !matches!(
                self,
                ElementKind::ModuleFragment
                    | ElementKind::File
                    | ElementKind::ExternalPackageFragment
                    | ElementKind::SpreadElement
                    | ElementKind::Branch
                    | ElementKind::ElseBranch
                    | ElementKind::Catch
            )
    }
}

/// Implement [`Children`] from a field list.
///
/// Each entry is `mode field: SlotKind` where mode is one of:
/// - `one`: `ElementId`
/// - `opt`: `Option<ElementId>`
/// - `list`: `Vec<ElementId>`
/// - `opt_list`: `Vec<Option<ElementId>>` (absent arguments are skipped)
macro_rules! impl_children {
    ($ty:ident) => {
        impl $crate::element::Children for $ty {
            fn for_each_child(&self, _f: &mut dyn FnMut($crate::ElementId)) {}

            fn for_each_child_mut(
                &mut self,
                _f: &mut dyn FnMut($crate::element::SlotKind, &mut $crate::ElementId),
            ) {
            }
        }
    };
    ($ty:ident { $($mode:ident $field:ident : $slot:ident),+ $(,)? }) => {
        impl $crate::element::Children for $ty {
            fn for_each_child(&self, f: &mut dyn FnMut($crate::ElementId)) {
                $( impl_children!(@ref $mode, self.$field, f); )+
            }

            fn for_each_child_mut(
                &mut self,
                f: &mut dyn FnMut($crate::element::SlotKind, &mut $crate::ElementId),
            ) {
                $( impl_children!(@mut $mode, self.$field, $crate::element::SlotKind::$slot, f); )+
            }
        }
    };
    (@ref one, $e:expr, $f:ident) => { $f($e) };
    (@ref opt, $e:expr, $f:ident) => { if let Some(id) = $e { $f(id) } };
    (@ref list, $e:expr, $f:ident) => { for &id in &$e { $f(id) } };
    (@ref opt_list, $e:expr, $f:ident) => { for &id in $e.iter().flatten() { $f(id) } };
    (@mut one, $e:expr, $slot:expr, $f:ident) => { $f($slot, &mut $e) };
    (@mut opt, $e:expr, $slot:expr, $f:ident) => { if let Some(id) = &mut $e { $f($slot, id) } };
    (@mut list, $e:expr, $slot:expr, $f:ident) => { for id in &mut $e { $f($slot, id) } };
    (@mut opt_list, $e:expr, $slot:expr, $f:ident) => {
        for id in $e.iter_mut().flatten() { $f($slot, id) }
    };
}
pub(crate) use impl_children;
