//! The closed set of bindable field shapes and the dynamically typed values
//! that flow between the parser, the binder, and the parameter set.
//!
//! Every supported shape is an explicit variant — there is no catch-all
//! fallback. A field whose storage has no variant here surfaces as
//! [`FieldKind::Unsupported`] carrying the rejected type's name, so the
//! binder can report it instead of silently skipping.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A scalar field shape: one value, one storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Duration,
    String,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Duration => "duration",
            ScalarKind::String => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported map shapes. Keys are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    StringToString,
    StringToInt,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKind::StringToString => f.write_str("map of string to string"),
            MapKind::StringToInt => f.write_str("map of string to i64"),
        }
    }
}

/// The full shape of a configuration field.
///
/// `Nested` marks a sub-structure the binder recurses into rather than
/// registering. `Unsupported` carries the declared type's name for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Slice(ScalarKind),
    Map(MapKind),
    Nested,
    Unsupported(&'static str),
}

impl FieldKind {
    /// The zero value a leaf field holds when its default text is empty.
    /// `None` for the non-leaf shapes, which carry no value of their own.
    pub fn zero_value(self) -> Option<Value> {
        match self {
            FieldKind::Scalar(scalar) => Some(scalar_zero(scalar)),
            FieldKind::Slice(_) => Some(Value::List(Vec::new())),
            FieldKind::Map(MapKind::StringToString) => Some(Value::StrMap(BTreeMap::new())),
            FieldKind::Map(MapKind::StringToInt) => Some(Value::IntMap(BTreeMap::new())),
            FieldKind::Nested | FieldKind::Unsupported(_) => None,
        }
    }
}

fn scalar_zero(scalar: ScalarKind) -> Value {
    match scalar {
        ScalarKind::Bool => Value::Bool(false),
        ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64 => Value::Int(0),
        ScalarKind::U8 | ScalarKind::U16 | ScalarKind::U32 | ScalarKind::U64 => Value::Uint(0),
        ScalarKind::F32 | ScalarKind::F64 => Value::Float(0.0),
        ScalarKind::Duration => Value::Duration(Duration::ZERO),
        ScalarKind::String => Value::Str(String::new()),
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(scalar) => write!(f, "{scalar}"),
            FieldKind::Slice(scalar) => write!(f, "slice of {scalar}"),
            FieldKind::Map(map) => write!(f, "{map}"),
            FieldKind::Nested => f.write_str("nested structure"),
            FieldKind::Unsupported(name) => write!(f, "unsupported type {name}"),
        }
    }
}

/// A parsed configuration value.
///
/// Integers are carried at full width (`i64`/`u64`); the live binding
/// narrows on store, and the parser has already range-checked against the
/// declared width.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Duration(Duration),
    Str(String),
    List(Vec<Value>),
    StrMap(BTreeMap<String, String>),
    IntMap(BTreeMap<String, i64>),
}

impl Value {
    /// Render back to the canonical text form the parser accepts.
    ///
    /// Lists join elements with `,`; maps render as `key=value` pairs.
    pub fn render(&self) -> String {
        match self {
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Duration(v) => humantime::format_duration(*v).to_string(),
            Value::Str(v) => v.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::render)
                .collect::<Vec<_>>()
                .join(","),
            Value::StrMap(map) => map
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(","),
            Value::IntMap(map) => map
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}
