//! Textual rendering of pooled types.
//!
//! [`TypeRenderer`] has two modes. Display mode produces source-like text
//! (`kotlin.collections.List<kotlin.Int>?`, `(Int) -> String`); debug mode
//! spells out every structural detail (`ft<L, U>`, `it(A & B)`,
//! `TypeVariable(T)`, class ids, annotations).
//!
//! Rendering never fails. Shapes the renderer cannot name degrade to the
//! `ERROR_TYPE` and `ERROR CLASS` placeholders.

mod flexible;

use quill_ir::{ClassId, FqName, Name, StringInterner, TypeId};
use smallvec::SmallVec;

use crate::annotation::{Annotation, ConstantValue};
use crate::classifier::{Classifier, ClassifierId};
use crate::data::{CapturedTypeConstructor, TypeConstructor, TypeData, TypeKind, TypeProjection};
use crate::function_types::FunctionClassKind;
use crate::naming::push_escaped;
use crate::pool::TypePool;
use crate::stack::ensure_sufficient_stack;

const ERROR_TYPE_TEXT: &str = "ERROR_TYPE";
const ERROR_CLASS_TEXT: &str = "ERROR CLASS";
const NO_NAME_PROVIDED: &str = "<no name provided>";

/// Destination for rendered text.
pub trait RenderSink {
    fn append(&mut self, text: &str);

    fn append_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.append(c.encode_utf8(&mut buf));
    }
}

impl RenderSink for String {
    #[inline]
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }

    #[inline]
    fn append_char(&mut self, c: char) {
        self.push(c);
    }
}

/// Knobs for display-mode rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererOptions {
    /// Omit package prefixes (`List<Int>` instead of
    /// `kotlin.collections.List<kotlin.Int>`).
    pub short_qualified_names: bool,
    /// Render function classes as `(A) -> B` instead of `Function1<A, B>`.
    pub render_function_type: bool,
}

impl RendererOptions {
    pub const FULL: RendererOptions = RendererOptions {
        short_qualified_names: false,
        render_function_type: true,
    };

    pub const SHORT: RendererOptions = RendererOptions {
        short_qualified_names: true,
        render_function_type: true,
    };
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Display,
    Debug,
}

/// Renders types from one pool. Holds no state between calls.
#[derive(Copy, Clone)]
pub struct TypeRenderer<'a> {
    pool: &'a TypePool,
    interner: &'a StringInterner,
    options: RendererOptions,
    mode: RenderMode,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(
        pool: &'a TypePool,
        interner: &'a StringInterner,
        options: RendererOptions,
        mode: RenderMode,
    ) -> Self {
        TypeRenderer {
            pool,
            interner,
            options,
            mode,
        }
    }

    pub fn display(
        pool: &'a TypePool,
        interner: &'a StringInterner,
        options: RendererOptions,
    ) -> Self {
        Self::new(pool, interner, options, RenderMode::Display)
    }

    pub fn debug(pool: &'a TypePool, interner: &'a StringInterner) -> Self {
        Self::new(pool, interner, RendererOptions::default(), RenderMode::Debug)
    }

    #[inline]
    fn is_debug(&self) -> bool {
        self.mode == RenderMode::Debug
    }

    /// Write `ty` into `sink`.
    pub fn render<S: RenderSink + ?Sized>(&self, ty: TypeId, sink: &mut S) {
        self.render_type(ty, sink, true);
    }

    pub fn render_to_string(&self, ty: TypeId) -> String {
        let mut buf = String::new();
        self.render(ty, &mut buf);
        buf
    }

    /// Render one type. `with_nullability` is cleared for an abbreviation so
    /// the `?` of the abbreviated type is the only one written.
    fn render_type<S: RenderSink + ?Sized>(
        &self,
        ty: TypeId,
        sink: &mut S,
        with_nullability: bool,
    ) {
        ensure_sufficient_stack(|| {
            let Some(data) = self.pool_type(ty) else {
                tracing::trace!(?ty, "type outside the pool rendered as error type");
                sink.append(ERROR_TYPE_TEXT);
                return;
            };

            if self.is_debug() {
                self.render_annotations(&data.annotations, sink);
            }

            match &data.kind {
                TypeKind::Flexible { lower, upper } => self.render_flexible(*lower, *upper, sink),
                TypeKind::DefinitelyNotNull { original } => {
                    self.render_type(*original, sink, true);
                    sink.append(" & Any");
                }
                TypeKind::Error => sink.append(ERROR_TYPE_TEXT),
                TypeKind::Captured { projection }
                | TypeKind::NewCaptured {
                    constructor: CapturedTypeConstructor { projection },
                } => {
                    sink.append("CapturedType(");
                    self.render_projection(*projection, sink);
                    sink.append_char(')');
                }
                TypeKind::Abbreviated { abbreviation, .. } => {
                    self.render_type(*abbreviation, sink, false);
                }
                TypeKind::Simple {
                    constructor,
                    arguments,
                } => self.render_simple(ty, constructor, arguments, sink),
            }

            if with_nullability && data.nullable {
                sink.append_char('?');
            }
        });
    }

    fn pool_type(&self, ty: TypeId) -> Option<&'a TypeData> {
        (ty.index() < self.pool.len()).then(|| self.pool.get(ty))
    }

    fn render_flexible<S: RenderSink + ?Sized>(&self, lower: TypeId, upper: TypeId, sink: &mut S) {
        if self.is_debug() {
            sink.append("ft<");
            self.render_type(lower, sink, true);
            sink.append(", ");
            self.render_type(upper, sink, true);
            sink.append_char('>');
            return;
        }
        let lower = self.render_to_string(lower);
        let upper = self.render_to_string(upper);
        sink.append(&flexible::compact_flexible(
            &lower,
            &upper,
            self.options.short_qualified_names,
        ));
    }

    fn render_simple<S: RenderSink + ?Sized>(
        &self,
        ty: TypeId,
        constructor: &TypeConstructor,
        arguments: &[TypeProjection],
        sink: &mut S,
    ) {
        match constructor {
            TypeConstructor::TypeVariable {
                original_type_parameter,
            } => self.render_type_variable(*original_type_parameter, sink),
            TypeConstructor::Intersection(types) => {
                if self.is_debug() {
                    sink.append("it");
                }
                sink.append_char('(');
                for (i, &component) in types.iter().enumerate() {
                    if i > 0 {
                        sink.append(" & ");
                    }
                    self.render_type(component, sink, true);
                }
                sink.append_char(')');
            }
            TypeConstructor::Classifier(classifier) => match self.pool.try_classifier(*classifier) {
                Some(Classifier::Class(class))
                    if !self.is_debug()
                        && self.options.render_function_type
                        && FunctionClassKind::of(&class.class_id, self.interner).is_some() =>
                {
                    self.render_function_type(ty, sink);
                }
                Some(Classifier::TypeParameter(parameter)) => {
                    self.push_name(parameter.name, sink);
                }
                Some(Classifier::Class(_) | Classifier::TypeAlias(_)) => {
                    self.render_ordinary_type(*classifier, arguments, sink);
                }
                None => {
                    tracing::trace!(?classifier, "unknown classifier rendered as error class");
                    sink.append(ERROR_CLASS_TEXT);
                }
            },
            TypeConstructor::Unknown => {
                tracing::trace!(?ty, "constructor without declaration rendered as error class");
                sink.append(ERROR_CLASS_TEXT);
            }
        }
    }

    fn render_type_variable<S: RenderSink + ?Sized>(
        &self,
        original: Option<ClassifierId>,
        sink: &mut S,
    ) {
        let name = original
            .and_then(|parameter| self.pool.try_classifier(parameter))
            .and_then(Classifier::as_type_parameter)
            .map_or(NO_NAME_PROVIDED, |parameter| self.interner.lookup(parameter.name));
        if self.is_debug() {
            sink.append("TypeVariable(");
            sink.append(name);
            sink.append_char(')');
        } else {
            sink.append(name);
        }
    }

    /// `R.(P1, P2) -> Ret`, receiver only for extension function types.
    fn render_function_type<S: RenderSink + ?Sized>(&self, ty: TypeId, sink: &mut S) {
        if let Some(receiver) = self.pool.function_receiver_type(ty) {
            self.render_type(receiver, sink, true);
            sink.append_char('.');
        }
        sink.append_char('(');
        for (i, &parameter) in self.pool.function_value_parameters(ty).iter().enumerate() {
            if i > 0 {
                sink.append(", ");
            }
            self.render_projection(parameter, sink);
        }
        sink.append(") -> ");
        match self.pool.function_return_type(ty) {
            Some(TypeProjection::Projected { ty: return_type, .. }) => {
                self.render_type(return_type, sink, true);
            }
            Some(TypeProjection::Star) => sink.append_char('*'),
            None => {
                tracing::trace!(?ty, "function type without arguments");
                sink.append(ERROR_TYPE_TEXT);
            }
        }
    }

    /// Class or alias use, split into the chain of inner-class segments.
    fn render_ordinary_type<S: RenderSink + ?Sized>(
        &self,
        classifier: ClassifierId,
        arguments: &[TypeProjection],
        sink: &mut S,
    ) {
        let segments = self.segments(classifier, arguments);
        for (i, &(segment, segment_arguments)) in segments.iter().enumerate() {
            if i > 0 {
                sink.append_char('.');
            }
            self.render_segment(segment, i == 0, sink);
            if !segment_arguments.is_empty() {
                sink.append_char('<');
                for (j, &argument) in segment_arguments.iter().enumerate() {
                    if j > 0 {
                        sink.append(", ");
                    }
                    self.render_projection(argument, sink);
                }
                sink.append_char('>');
            }
        }
    }

    /// Pair each class in the inner-class chain with its own slice of the
    /// arguments, outermost first.
    ///
    /// Arguments run innermost first: an inner class takes as many as it
    /// declares type parameters and passes the rest outward; the first
    /// non-inner class takes everything left.
    fn segments<'t>(
        &self,
        classifier: ClassifierId,
        arguments: &'t [TypeProjection],
    ) -> SmallVec<[(ClassifierId, &'t [TypeProjection]); 2]> {
        let mut segments: SmallVec<[(ClassifierId, &[TypeProjection]); 2]> = SmallVec::new();
        let mut current = Some(classifier);
        let mut index = 0;
        while let Some(id) = current {
            if segments.iter().any(|&(seen, _)| seen == id) {
                break;
            }
            let Some(descriptor) = self.pool.try_classifier(id) else {
                break;
            };
            let start = index.min(arguments.len());
            match descriptor {
                Classifier::Class(class) if class.is_inner() && class.outer.is_some() => {
                    let end = (index + class.declared_type_parameters.len()).min(arguments.len());
                    segments.push((id, &arguments[start..end]));
                    index = end;
                    current = class.outer;
                }
                _ => {
                    segments.push((id, &arguments[start..]));
                    current = None;
                }
            }
        }
        segments.reverse();
        segments
    }

    fn render_segment<S: RenderSink + ?Sized>(
        &self,
        classifier: ClassifierId,
        is_root: bool,
        sink: &mut S,
    ) {
        let Some(descriptor) = self.pool.try_classifier(classifier) else {
            return;
        };
        match descriptor.class_id() {
            Some(class_id) if self.is_debug() => sink.append(&class_id.as_string(self.interner)),
            Some(class_id) if is_root => self.render_root_segment(class_id, sink),
            _ => self.push_name(descriptor.name(), sink),
        }
    }

    fn render_root_segment<S: RenderSink + ?Sized>(&self, class_id: &ClassId, sink: &mut S) {
        if !self.options.short_qualified_names && !class_id.package.is_root() {
            self.render_fq_name(&class_id.package, sink);
            sink.append_char('.');
        }
        self.render_fq_name(&class_id.relative, sink);
    }

    fn render_fq_name<S: RenderSink + ?Sized>(&self, fq_name: &FqName, sink: &mut S) {
        for (i, &segment) in fq_name.segments().iter().enumerate() {
            if i > 0 {
                sink.append_char('.');
            }
            self.push_name(segment, sink);
        }
    }

    fn push_name<S: RenderSink + ?Sized>(&self, name: Name, sink: &mut S) {
        let mut buf = String::new();
        push_escaped(&mut buf, self.interner.lookup(name));
        sink.append(&buf);
    }

    fn render_projection<S: RenderSink + ?Sized>(&self, projection: TypeProjection, sink: &mut S) {
        match projection {
            TypeProjection::Star => sink.append_char('*'),
            TypeProjection::Projected { variance, ty } => {
                let label = variance.label();
                if !label.is_empty() {
                    sink.append(label);
                    sink.append_char(' ');
                }
                self.render_type(ty, sink, true);
            }
        }
    }

    // Debug annotations

    /// `@R|a.B|(x = Int(1)) @R|c.D|()  `; the extension-function-type
    /// marker is left out and nothing is written when no annotation remains.
    fn render_annotations<S: RenderSink + ?Sized>(&self, annotations: &[Annotation], sink: &mut S) {
        let marker = self.pool.extension_function_type_class_id();
        let mut rendered_any = false;
        for annotation in annotations
            .iter()
            .filter(|annotation| annotation.class_id.as_ref() != Some(marker))
        {
            if rendered_any {
                sink.append_char(' ');
            }
            self.render_annotation(annotation.class_id.as_ref(), &annotation.arguments, sink);
            rendered_any = true;
        }
        if rendered_any {
            sink.append("  ");
        }
    }

    fn render_annotation<S: RenderSink + ?Sized>(
        &self,
        class_id: Option<&ClassId>,
        arguments: &[(Name, ConstantValue)],
        sink: &mut S,
    ) {
        sink.append_char('@');
        match class_id {
            Some(class_id) => {
                sink.append("R|");
                self.render_fq_name(&class_id.as_fq_name(), sink);
                sink.append_char('|');
            }
            None => sink.append("<ERROR TYPE REF>"),
        }
        sink.append_char('(');
        for (i, (name, value)) in arguments.iter().enumerate() {
            if i > 0 {
                sink.append(", ");
            }
            sink.append(self.interner.lookup(*name));
            sink.append(" = ");
            self.render_constant(value, sink);
        }
        sink.append_char(')');
    }

    fn render_constant<S: RenderSink + ?Sized>(&self, value: &ConstantValue, sink: &mut S) {
        ensure_sufficient_stack(|| match value {
            ConstantValue::Annotation {
                class_id,
                arguments,
            } => self.render_annotation(class_id.as_ref(), arguments, sink),
            ConstantValue::Array(values) => {
                sink.append_char('[');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        sink.append(", ");
                    }
                    self.render_constant(value, sink);
                }
                sink.append_char(']');
            }
            ConstantValue::EnumEntry(callable_id) => {
                sink.append(&callable_id.as_string(self.interner));
            }
            ConstantValue::Literal(literal) => {
                let mut buf = String::from(literal.kind_name());
                buf.push('(');
                literal.write_value(&mut buf);
                buf.push(')');
                sink.append(&buf);
            }
            ConstantValue::Unsupported => sink.append("UnsupportedConstantValue"),
            ConstantValue::Error => sink.append("<ERROR>"),
        });
    }
}

/// Render `ty` in display mode with the given options.
pub fn render_to_string(
    pool: &TypePool,
    interner: &StringInterner,
    ty: TypeId,
    options: RendererOptions,
) -> String {
    TypeRenderer::display(pool, interner, options).render_to_string(ty)
}
