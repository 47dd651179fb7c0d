//! Type-directed parsing of default text into [`Value`]s.
//!
//! Parsing is strict: numeric text is range-checked against the declared
//! width, durations use the humantime grammar (`"1h30m"`, `"500ms"`), and
//! booleans accept the usual token set (`true`/`false`/`t`/`f`/`1`/`0`).
//! Empty text is not an error — it yields the kind's zero value, matching
//! fields declared without a default.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::types::{FieldKind, MapKind, ScalarKind, Value};

/// Parse `text` into a value of `kind`.
///
/// Slice kinds split on `,` and trim each element before parsing it as the
/// element kind; the first failing element aborts the whole field. Map kinds
/// split the same way into `key=value` entries (the value may itself contain
/// `=`). Non-leaf kinds are always an error.
pub fn parse(kind: FieldKind, text: &str) -> Result<Value, ParseError> {
    if text.is_empty() {
        return kind
            .zero_value()
            .ok_or_else(|| ParseError::Unsupported(kind.to_string()));
    }

    match kind {
        FieldKind::Scalar(scalar) => parse_scalar(scalar, text),
        FieldKind::Slice(scalar) => parse_list(scalar, text),
        FieldKind::Map(map) => parse_map(map, text),
        FieldKind::Nested | FieldKind::Unsupported(_) => {
            Err(ParseError::Unsupported(kind.to_string()))
        }
    }
}

pub fn parse_scalar(kind: ScalarKind, text: &str) -> Result<Value, ParseError> {
    match kind {
        ScalarKind::Bool => parse_bool(text),
        ScalarKind::I8 => parse_int::<i8>(kind, text),
        ScalarKind::I16 => parse_int::<i16>(kind, text),
        ScalarKind::I32 => parse_int::<i32>(kind, text),
        ScalarKind::I64 => parse_int::<i64>(kind, text),
        ScalarKind::U8 => parse_uint::<u8>(kind, text),
        ScalarKind::U16 => parse_uint::<u16>(kind, text),
        ScalarKind::U32 => parse_uint::<u32>(kind, text),
        ScalarKind::U64 => parse_uint::<u64>(kind, text),
        ScalarKind::F32 => text
            .parse::<f32>()
            .map(|v| Value::Float(f64::from(v)))
            .map_err(|source| ParseError::InvalidFloat {
                text: text.to_string(),
                kind,
                source,
            }),
        ScalarKind::F64 => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|source| ParseError::InvalidFloat {
                text: text.to_string(),
                kind,
                source,
            }),
        ScalarKind::Duration => humantime::parse_duration(text)
            .map(Value::Duration)
            .map_err(|source| ParseError::InvalidDuration {
                text: text.to_string(),
                source,
            }),
        ScalarKind::String => Ok(Value::Str(text.to_string())),
    }
}

fn parse_bool(text: &str) -> Result<Value, ParseError> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(Value::Bool(true)),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(Value::Bool(false)),
        _ => Err(ParseError::InvalidBool {
            text: text.to_string(),
        }),
    }
}

fn parse_int<T>(kind: ScalarKind, text: &str) -> Result<Value, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError> + Into<i64>,
{
    text.parse::<T>()
        .map(|v| Value::Int(v.into()))
        .map_err(|source| ParseError::InvalidInt {
            text: text.to_string(),
            kind,
            source,
        })
}

fn parse_uint<T>(kind: ScalarKind, text: &str) -> Result<Value, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError> + Into<u64>,
{
    text.parse::<T>()
        .map(|v| Value::Uint(v.into()))
        .map_err(|source| ParseError::InvalidInt {
            text: text.to_string(),
            kind,
            source,
        })
}

fn parse_list(element: ScalarKind, text: &str) -> Result<Value, ParseError> {
    let mut items = Vec::new();
    for (position, raw) in text.split(',').enumerate() {
        let trimmed = raw.trim();
        let value =
            parse_scalar(element, trimmed).map_err(|source| ParseError::InvalidElement {
                position,
                element: trimmed.to_string(),
                source: Box::new(source),
            })?;
        items.push(value);
    }
    Ok(Value::List(items))
}

fn parse_map(kind: MapKind, text: &str) -> Result<Value, ParseError> {
    match kind {
        MapKind::StringToString => {
            let mut map = BTreeMap::new();
            for (position, raw) in text.split(',').enumerate() {
                let (key, value) = split_entry(position, raw)?;
                map.insert(key.to_string(), value.to_string());
            }
            Ok(Value::StrMap(map))
        }
        MapKind::StringToInt => {
            let mut map = BTreeMap::new();
            for (position, raw) in text.split(',').enumerate() {
                let (key, value) = split_entry(position, raw)?;
                let parsed = value.parse::<i64>().map_err(|source| {
                    ParseError::InvalidElement {
                        position,
                        element: value.to_string(),
                        source: Box::new(ParseError::InvalidInt {
                            text: value.to_string(),
                            kind: ScalarKind::I64,
                            source,
                        }),
                    }
                })?;
                map.insert(key.to_string(), parsed);
            }
            Ok(Value::IntMap(map))
        }
    }
}

/// Split one `key=value` entry at the first `=`, trimming key and value.
fn split_entry(position: usize, raw: &str) -> Result<(&str, &str), ParseError> {
    let entry = raw.trim();
    entry
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| ParseError::MapEntry {
            position,
            entry: entry.to_string(),
        })
}
