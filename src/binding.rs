//! Live bindings: exclusive read/write access to one field's storage.
//!
//! A [`Binding`] is the engine's only handle on caller-owned storage. The
//! binder writes parsed defaults through it at bind time and resolved values
//! through it at apply time. The variant set is the closed enumeration of
//! supported storage shapes; one exhaustive dispatch maps each to its
//! [`FieldKind`] and narrows full-width parsed values on store.
//!
//! Slice storages follow the host framework's surface (`bool`, `i32`,
//! `i64`, `u64`, `f64`, duration, string elements); scalar storages cover
//! every integer and float width.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::field::FieldSpec;
use crate::types::{FieldKind, MapKind, ScalarKind, Value};

pub enum Binding<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Duration(&'a mut Duration),
    Str(&'a mut String),
    BoolVec(&'a mut Vec<bool>),
    I32Vec(&'a mut Vec<i32>),
    I64Vec(&'a mut Vec<i64>),
    U64Vec(&'a mut Vec<u64>),
    F64Vec(&'a mut Vec<f64>),
    DurationVec(&'a mut Vec<Duration>),
    StrVec(&'a mut Vec<String>),
    StrMap(&'a mut BTreeMap<String, String>),
    IntMap(&'a mut BTreeMap<String, i64>),
    /// A nested structure: recursed into, never registered.
    Nested(Vec<FieldSpec<'a>>),
    /// A field whose declared type has no parameter primitive. Carries the
    /// type's name for diagnostics.
    Unsupported(&'static str),
}

impl<'a> Binding<'a> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Binding::Bool(_) => FieldKind::Scalar(ScalarKind::Bool),
            Binding::I8(_) => FieldKind::Scalar(ScalarKind::I8),
            Binding::I16(_) => FieldKind::Scalar(ScalarKind::I16),
            Binding::I32(_) => FieldKind::Scalar(ScalarKind::I32),
            Binding::I64(_) => FieldKind::Scalar(ScalarKind::I64),
            Binding::U8(_) => FieldKind::Scalar(ScalarKind::U8),
            Binding::U16(_) => FieldKind::Scalar(ScalarKind::U16),
            Binding::U32(_) => FieldKind::Scalar(ScalarKind::U32),
            Binding::U64(_) => FieldKind::Scalar(ScalarKind::U64),
            Binding::F32(_) => FieldKind::Scalar(ScalarKind::F32),
            Binding::F64(_) => FieldKind::Scalar(ScalarKind::F64),
            Binding::Duration(_) => FieldKind::Scalar(ScalarKind::Duration),
            Binding::Str(_) => FieldKind::Scalar(ScalarKind::String),
            Binding::BoolVec(_) => FieldKind::Slice(ScalarKind::Bool),
            Binding::I32Vec(_) => FieldKind::Slice(ScalarKind::I32),
            Binding::I64Vec(_) => FieldKind::Slice(ScalarKind::I64),
            Binding::U64Vec(_) => FieldKind::Slice(ScalarKind::U64),
            Binding::F64Vec(_) => FieldKind::Slice(ScalarKind::F64),
            Binding::DurationVec(_) => FieldKind::Slice(ScalarKind::Duration),
            Binding::StrVec(_) => FieldKind::Slice(ScalarKind::String),
            Binding::StrMap(_) => FieldKind::Map(MapKind::StringToString),
            Binding::IntMap(_) => FieldKind::Map(MapKind::StringToInt),
            Binding::Nested(_) => FieldKind::Nested,
            Binding::Unsupported(name) => FieldKind::Unsupported(name),
        }
    }

    /// Write `value` into the bound storage, narrowing integer widths.
    ///
    /// Fails with a human-readable reason when the value's shape does not
    /// match the binding (a parameter-set contract violation) or a narrow
    /// store would overflow.
    pub fn store(&mut self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (Binding::Bool(slot), Value::Bool(v)) => **slot = *v,
            (Binding::I8(slot), Value::Int(v)) => **slot = narrow(*v, i8::try_from(*v))?,
            (Binding::I16(slot), Value::Int(v)) => **slot = narrow(*v, i16::try_from(*v))?,
            (Binding::I32(slot), Value::Int(v)) => **slot = narrow(*v, i32::try_from(*v))?,
            (Binding::I64(slot), Value::Int(v)) => **slot = *v,
            (Binding::U8(slot), Value::Uint(v)) => **slot = narrow(*v, u8::try_from(*v))?,
            (Binding::U16(slot), Value::Uint(v)) => **slot = narrow(*v, u16::try_from(*v))?,
            (Binding::U32(slot), Value::Uint(v)) => **slot = narrow(*v, u32::try_from(*v))?,
            (Binding::U64(slot), Value::Uint(v)) => **slot = *v,
            (Binding::F32(slot), Value::Float(v)) => **slot = *v as f32,
            (Binding::F64(slot), Value::Float(v)) => **slot = *v,
            (Binding::Duration(slot), Value::Duration(v)) => **slot = *v,
            (Binding::Str(slot), Value::Str(v)) => **slot = v.clone(),
            (Binding::BoolVec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Bool(b) => Ok(*b),
                    other => Err(mismatch("bool element", other)),
                })?;
            }
            (Binding::I32Vec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Int(i) => narrow(*i, i32::try_from(*i)),
                    other => Err(mismatch("i32 element", other)),
                })?;
            }
            (Binding::I64Vec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Int(i) => Ok(*i),
                    other => Err(mismatch("i64 element", other)),
                })?;
            }
            (Binding::U64Vec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Uint(u) => Ok(*u),
                    other => Err(mismatch("u64 element", other)),
                })?;
            }
            (Binding::F64Vec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Float(f) => Ok(*f),
                    other => Err(mismatch("f64 element", other)),
                })?;
            }
            (Binding::DurationVec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Duration(d) => Ok(*d),
                    other => Err(mismatch("duration element", other)),
                })?;
            }
            (Binding::StrVec(slot), Value::List(items)) => {
                **slot = collect(items, |v| match v {
                    Value::Str(s) => Ok(s.clone()),
                    other => Err(mismatch("string element", other)),
                })?;
            }
            (Binding::StrMap(slot), Value::StrMap(map)) => **slot = map.clone(),
            (Binding::IntMap(slot), Value::IntMap(map)) => **slot = map.clone(),
            (binding, value) => {
                return Err(mismatch(&binding.kind().to_string(), value));
            }
        }
        Ok(())
    }
}

fn narrow<T, E: std::fmt::Display>(wide: impl std::fmt::Display, result: Result<T, E>) -> Result<T, String> {
    result.map_err(|_| format!("value {wide} out of range"))
}

fn collect<T>(items: &[Value], f: impl Fn(&Value) -> Result<T, String>) -> Result<Vec<T>, String> {
    items.iter().map(f).collect()
}

fn mismatch(expected: &str, got: &Value) -> String {
    format!("expected {expected}, got {got:?}")
}
