//! Small IR trees shared by the unit tests.

use std::sync::Arc;

use crate::element::{
    Block, BlockBody, Branch, Call, Const, ConstValue, ElseBranch, File, GetValue, ModuleFragment,
    Return, SimpleFunction, ValueParameter, Variable, When,
};
use crate::{
    ElementId, FqName, IrArena, IrBuiltIns, ModuleDescriptor, Span, StringInterner, Symbol, TypeId,
};

pub(crate) const INT: TypeId = TypeId::from_raw(1);

pub(crate) fn builtins() -> Arc<IrBuiltIns> {
    Arc::new(IrBuiltIns {
        any_type: TypeId::from_raw(0),
        any_nullable_type: TypeId::from_raw(2),
        nothing_type: TypeId::from_raw(3),
        nothing_nullable_type: TypeId::from_raw(4),
        unit_type: TypeId::from_raw(5),
        boolean_type: TypeId::from_raw(6),
        int_type: INT,
        string_type: TypeId::from_raw(7),
    })
}

pub(crate) fn int(arena: &mut IrArena, value: i32) -> ElementId {
    arena.alloc(
        Span::UNDEFINED,
        Const {
            ty: INT,
            value: ConstValue::Int(value),
        },
    )
}

pub(crate) fn boolean(arena: &mut IrArena, value: bool) -> ElementId {
    arena.alloc(
        Span::UNDEFINED,
        Const {
            ty: TypeId::from_raw(6),
            value: ConstValue::Boolean(value),
        },
    )
}

/// Handles of the elements in [`sample_module`].
pub(crate) struct Sample {
    pub arena: IrArena,
    pub module: ElementId,
    pub file: ElementId,
    pub function: ElementId,
    pub parameter: ElementId,
    pub body: ElementId,
    pub variable: ElementId,
    pub when: ElementId,
    pub call: ElementId,
}

/// ```text
/// fun f(p: Int) {
///     val x = 1
///     when { true -> 2; else -> 3 }
///     f(4, <default>)
///     return { x }
/// }
/// ```
pub(crate) fn sample_module(interner: &StringInterner) -> Sample {
    let mut arena = IrArena::new();

    let parameter = arena.alloc(
        Span::new(6, 12),
        ValueParameter::new(interner.intern("p"), Some(0), INT),
    );

    let one = int(&mut arena, 1);
    let mut x = Variable::new(interner.intern("x"), INT);
    x.initializer = Some(one);
    let variable = arena.alloc(Span::new(20, 29), x);

    let cond = boolean(&mut arena, true);
    let two = int(&mut arena, 2);
    let branch = arena.alloc(
        Span::UNDEFINED,
        Branch {
            condition: cond,
            result: two,
        },
    );
    let else_cond = boolean(&mut arena, true);
    let three = int(&mut arena, 3);
    let else_branch = arena.alloc(
        Span::UNDEFINED,
        ElseBranch {
            condition: else_cond,
            result: three,
        },
    );
    let when = arena.alloc(
        Span::new(34, 60),
        When {
            ty: INT,
            origin: None,
            branches: vec![branch, else_branch],
        },
    );

    // The call target is patched once the function exists.
    let four = int(&mut arena, 4);
    let mut call = Call::new(Symbol(ElementId::INVALID), INT);
    call.value_arguments = vec![Some(four), None];
    let call = arena.alloc(Span::new(65, 75), call);

    let read = arena.alloc(
        Span::UNDEFINED,
        GetValue {
            ty: INT,
            symbol: Symbol(variable),
            origin: None,
        },
    );
    let block = arena.alloc(
        Span::UNDEFINED,
        Block {
            ty: INT,
            origin: None,
            statements: vec![read],
        },
    );
    let ret = arena.alloc(
        Span::new(80, 92),
        Return {
            ty: TypeId::from_raw(3),
            return_target: Symbol(ElementId::INVALID),
            value: block,
        },
    );

    let body = arena.alloc(
        Span::new(14, 94),
        BlockBody {
            statements: vec![variable, when, call, ret],
        },
    );

    let mut function = SimpleFunction::new(interner.intern("f"), INT);
    function.value_parameters = vec![parameter];
    function.body = Some(body);
    let function = arena.alloc(Span::new(0, 94), function);
    arena.update::<Call, _>(call, |call| call.symbol = Symbol(function));
    arena.update::<Return, _>(ret, |ret| ret.return_target = Symbol(function));

    let file = arena.alloc(
        Span::new(0, 94),
        File {
            file_name: interner.intern("sample.kt"),
            package: FqName::parse("sample", interner),
            declarations: vec![function],
        },
    );

    let mut fragment = ModuleFragment::new(
        Arc::new(ModuleDescriptor::new(interner.intern("main"))),
        builtins(),
    );
    fragment.files.push(file);
    let module = arena.alloc(Span::new(0, 94), fragment);

    Sample {
        arena,
        module,
        file,
        function,
        parameter,
        body,
        variable,
        when,
        call,
    }
}
