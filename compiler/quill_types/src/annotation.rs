//! Type annotations and their constant arguments.

use quill_ir::{CallableId, ClassId, Name};

/// Annotation on a type use.
///
/// `class_id` is `None` when the annotation class failed to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub class_id: Option<ClassId>,
    pub arguments: Vec<(Name, ConstantValue)>,
}

impl Annotation {
    pub fn new(class_id: ClassId) -> Self {
        Annotation {
            class_id: Some(class_id),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: Name, value: ConstantValue) -> Self {
        self.arguments.push((name, value));
        self
    }
}

/// Compile-time value of an annotation argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    /// Nested annotation.
    Annotation {
        class_id: Option<ClassId>,
        arguments: Vec<(Name, ConstantValue)>,
    },
    Array(Vec<ConstantValue>),
    EnumEntry(CallableId),
    Literal(Literal),
    /// A value the front end could not represent.
    Unsupported,
    Error,
}

/// Literal constant. Floats are stored as bits for Hash compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Boolean(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    UnsignedByte(u8),
    UnsignedShort(u16),
    UnsignedInt(u32),
    UnsignedLong(u64),
    Float(u32),
    Double(u64),
    String(String),
}

impl Literal {
    pub fn float(value: f32) -> Self {
        Literal::Float(value.to_bits())
    }

    pub fn double(value: f64) -> Self {
        Literal::Double(value.to_bits())
    }

    /// Name of the constant kind, as shown in debug renderings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Null => "Null",
            Literal::Boolean(_) => "Boolean",
            Literal::Char(_) => "Char",
            Literal::Byte(_) => "Byte",
            Literal::Short(_) => "Short",
            Literal::Int(_) => "Int",
            Literal::Long(_) => "Long",
            Literal::UnsignedByte(_) => "UnsignedByte",
            Literal::UnsignedShort(_) => "UnsignedShort",
            Literal::UnsignedInt(_) => "UnsignedInt",
            Literal::UnsignedLong(_) => "UnsignedLong",
            Literal::Float(_) => "Float",
            Literal::Double(_) => "Double",
            Literal::String(_) => "String",
        }
    }

    /// Append the value itself (no kind, no quotes).
    pub fn write_value(&self, buf: &mut String) {
        use std::fmt::Write;

        // Writing into a String cannot fail.
        let _ = match self {
            Literal::Null => write!(buf, "null"),
            Literal::Boolean(v) => write!(buf, "{v}"),
            Literal::Char(v) => write!(buf, "{v}"),
            Literal::Byte(v) => write!(buf, "{v}"),
            Literal::Short(v) => write!(buf, "{v}"),
            Literal::Int(v) => write!(buf, "{v}"),
            Literal::Long(v) => write!(buf, "{v}"),
            Literal::UnsignedByte(v) => write!(buf, "{v}"),
            Literal::UnsignedShort(v) => write!(buf, "{v}"),
            Literal::UnsignedInt(v) => write!(buf, "{v}"),
            Literal::UnsignedLong(v) => write!(buf, "{v}"),
            Literal::Float(bits) => write_floating(buf, f64::from(f32::from_bits(*bits))),
            Literal::Double(bits) => write_floating(buf, f64::from_bits(*bits)),
            Literal::String(v) => write!(buf, "{v}"),
        };
    }
}

/// Whole finite values keep a `.0` suffix (`1.0`, not `1`).
fn write_floating(buf: &mut String, value: f64) -> std::fmt::Result {
    use std::fmt::Write;

    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        write!(buf, "{value:.1}")
    } else if value.is_nan() {
        write!(buf, "NaN")
    } else if value.is_infinite() {
        write!(buf, "{}", if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(buf, "{value}")
    }
}
