//! Declaration elements and the module/file containers.

use std::sync::Arc;

use super::{impl_children, ClassKind, Modality, Variance};
use crate::{ElementId, FqName, IrBuiltIns, ModuleDescriptor, Name, Symbol, TypeId};

/// Root of a compiled module: the files produced for one module.
///
/// The module descriptor and the built-ins table are shared, not owned.
/// Its span is always undefined.
#[derive(Clone, Debug)]
pub struct ModuleFragment {
    pub descriptor: Arc<ModuleDescriptor>,
    pub builtins: Arc<IrBuiltIns>,
    pub files: Vec<ElementId>,
}

impl ModuleFragment {
    pub fn new(descriptor: Arc<ModuleDescriptor>, builtins: Arc<IrBuiltIns>) -> Self {
        ModuleFragment {
            descriptor,
            builtins,
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> Name {
        self.descriptor.name
    }

    pub fn files(&self) -> &[ElementId] {
        &self.files
    }
}

impl_children!(ModuleFragment { list files: File });

#[derive(Clone, Debug)]
pub struct File {
    pub file_name: Name,
    pub package: FqName,
    pub declarations: Vec<ElementId>,
}

impl_children!(File { list declarations: Declaration });

/// Declarations of a package coming from a dependency.
#[derive(Clone, Debug)]
pub struct ExternalPackageFragment {
    pub package: FqName,
    pub declarations: Vec<ElementId>,
}

impl_children!(ExternalPackageFragment { list declarations: Declaration });

#[derive(Clone, Debug)]
pub struct Script {
    pub name: Name,
    pub statements: Vec<ElementId>,
}

impl_children!(Script { list statements: Statement });

#[derive(Clone, Debug)]
pub struct Class {
    pub name: Name,
    pub kind: ClassKind,
    pub modality: Modality,
    pub is_inner: bool,
    pub is_value: bool,
    pub is_data: bool,
    pub super_types: Vec<TypeId>,
    pub this_receiver: Option<ElementId>,
    pub type_parameters: Vec<ElementId>,
    pub declarations: Vec<ElementId>,
}

impl Class {
    pub fn new(name: Name, kind: ClassKind) -> Self {
        Class {
            name,
            kind,
            modality: Modality::Final,
            is_inner: false,
            is_value: false,
            is_data: false,
            super_types: Vec::new(),
            this_receiver: None,
            type_parameters: Vec::new(),
            declarations: Vec::new(),
        }
    }
}

impl_children!(Class {
    opt this_receiver: ValueParameter,
    list type_parameters: TypeParameter,
    list declarations: Declaration,
});

#[derive(Clone, Debug)]
pub struct SimpleFunction {
    pub name: Name,
    pub modality: Modality,
    pub is_suspend: bool,
    pub is_inline: bool,
    pub is_fake_override: bool,
    pub return_type: TypeId,
    pub overridden: Vec<Symbol>,
    pub corresponding_property: Option<Symbol>,
    pub type_parameters: Vec<ElementId>,
    pub dispatch_receiver_parameter: Option<ElementId>,
    pub extension_receiver_parameter: Option<ElementId>,
    pub value_parameters: Vec<ElementId>,
    pub body: Option<ElementId>,
}

impl SimpleFunction {
    pub fn new(name: Name, return_type: TypeId) -> Self {
        SimpleFunction {
            name,
            modality: Modality::Final,
            is_suspend: false,
            is_inline: false,
            is_fake_override: false,
            return_type,
            overridden: Vec::new(),
            corresponding_property: None,
            type_parameters: Vec::new(),
            dispatch_receiver_parameter: None,
            extension_receiver_parameter: None,
            value_parameters: Vec::new(),
            body: None,
        }
    }
}

impl_children!(SimpleFunction {
    list type_parameters: TypeParameter,
    opt dispatch_receiver_parameter: ValueParameter,
    opt extension_receiver_parameter: ValueParameter,
    list value_parameters: ValueParameter,
    opt body: Body,
});

#[derive(Clone, Debug)]
pub struct Constructor {
    pub is_primary: bool,
    pub return_type: TypeId,
    pub type_parameters: Vec<ElementId>,
    pub dispatch_receiver_parameter: Option<ElementId>,
    pub value_parameters: Vec<ElementId>,
    pub body: Option<ElementId>,
}

impl_children!(Constructor {
    list type_parameters: TypeParameter,
    opt dispatch_receiver_parameter: ValueParameter,
    list value_parameters: ValueParameter,
    opt body: Body,
});

#[derive(Clone, Debug)]
pub struct Property {
    pub name: Name,
    pub modality: Modality,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub is_fake_override: bool,
    pub backing_field: Option<ElementId>,
    pub getter: Option<ElementId>,
    pub setter: Option<ElementId>,
}

impl_children!(Property {
    opt backing_field: Field,
    opt getter: SimpleFunction,
    opt setter: SimpleFunction,
});

#[derive(Clone, Debug)]
pub struct Field {
    pub name: Name,
    pub ty: TypeId,
    pub is_final: bool,
    pub is_static: bool,
    pub initializer: Option<ElementId>,
}

impl_children!(Field { opt initializer: ExpressionBody });

/// `val x by delegate` inside a function body.
#[derive(Clone, Debug)]
pub struct LocalDelegatedProperty {
    pub name: Name,
    pub ty: TypeId,
    pub is_var: bool,
    pub delegate: ElementId,
    pub getter: ElementId,
    pub setter: Option<ElementId>,
}

impl_children!(LocalDelegatedProperty {
    one delegate: Variable,
    one getter: SimpleFunction,
    opt setter: SimpleFunction,
});

#[derive(Clone, Debug)]
pub struct Variable {
    pub name: Name,
    pub ty: TypeId,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub initializer: Option<ElementId>,
}

impl Variable {
    pub fn new(name: Name, ty: TypeId) -> Self {
        Variable {
            name,
            ty,
            is_var: false,
            is_const: false,
            is_lateinit: false,
            initializer: None,
        }
    }
}

impl_children!(Variable { opt initializer: Expression });

#[derive(Clone, Debug)]
pub struct EnumEntry {
    pub name: Name,
    pub initializer_expression: Option<ElementId>,
    pub corresponding_class: Option<ElementId>,
}

impl_children!(EnumEntry {
    opt initializer_expression: ExpressionBody,
    opt corresponding_class: Class,
});

/// `init { ... }` block of a class.
#[derive(Clone, Debug)]
pub struct AnonymousInitializer {
    pub is_static: bool,
    pub body: ElementId,
}

impl_children!(AnonymousInitializer { one body: BlockBody });

#[derive(Clone, Debug)]
pub struct TypeParameter {
    pub name: Name,
    pub index: u32,
    pub variance: Variance,
    pub is_reified: bool,
    pub super_types: Vec<TypeId>,
}

impl_children!(TypeParameter);

#[derive(Clone, Debug)]
pub struct ValueParameter {
    pub name: Name,
    /// Position among the value parameters; `None` for receivers.
    pub index: Option<u32>,
    pub ty: TypeId,
    pub vararg_element_type: Option<TypeId>,
    pub is_crossinline: bool,
    pub is_noinline: bool,
    pub default_value: Option<ElementId>,
}

impl ValueParameter {
    pub fn new(name: Name, index: Option<u32>, ty: TypeId) -> Self {
        ValueParameter {
            name,
            index,
            ty,
            vararg_element_type: None,
            is_crossinline: false,
            is_noinline: false,
            default_value: None,
        }
    }
}

impl_children!(ValueParameter { opt default_value: ExpressionBody });

#[derive(Clone, Debug)]
pub struct TypeAlias {
    pub name: Name,
    pub expanded_type: TypeId,
    pub is_actual: bool,
    pub type_parameters: Vec<ElementId>,
}

impl_children!(TypeAlias { list type_parameters: TypeParameter });

/// Placeholder for a declaration that failed to resolve.
#[derive(Clone, Debug, Default)]
pub struct ErrorDeclaration;

impl_children!(ErrorDeclaration);
