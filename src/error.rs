use thiserror::Error;

use crate::types::ScalarKind;

/// Failure to parse a textual value into a field's kind.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid boolean '{text}'")]
    InvalidBool { text: String },

    #[error("invalid {kind} '{text}': {source}")]
    InvalidInt {
        text: String,
        kind: ScalarKind,
        source: std::num::ParseIntError,
    },

    #[error("invalid {kind} '{text}': {source}")]
    InvalidFloat {
        text: String,
        kind: ScalarKind,
        source: std::num::ParseFloatError,
    },

    #[error("invalid duration '{text}': {source}")]
    InvalidDuration {
        text: String,
        source: humantime::DurationError,
    },

    #[error("element {position} ('{element}'): {source}")]
    InvalidElement {
        position: usize,
        element: String,
        source: Box<ParseError>,
    },

    #[error("map entry {position} ('{entry}') is not in key=value form")]
    MapEntry { position: usize, entry: String },

    #[error("unsupported type {0}")]
    Unsupported(String),
}

/// Rejection from a [`ParameterSet`](crate::ParameterSet) implementation.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("unknown parameter '{0}'")]
    Unknown(String),

    #[error("parameter '{0}' is already registered")]
    Duplicate(String),

    #[error("invalid value for '{name}': {source}")]
    InvalidValue { name: String, source: ParseError },
}

/// A field-scoped binding diagnostic.
///
/// None of these abort a bind: each is reported and the binder moves on to
/// the next field, leaving the failed field at its zero value and
/// unregistered.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid default for '{name}': {source}")]
    BadDefault {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot bind '{name}': unsupported type {type_name}")]
    UnsupportedField {
        name: String,
        type_name: &'static str,
    },

    #[error("registering '{name}' failed: {source}")]
    Register {
        name: String,
        #[source]
        source: ParameterError,
    },

    #[error("environment override {var} for '{name}' rejected: {source}")]
    EnvOverride {
        name: String,
        var: String,
        #[source]
        source: ParameterError,
    },

    #[error("marking '{name}' required failed: {source}")]
    Required {
        name: String,
        #[source]
        source: ParameterError,
    },

    #[error("writing default for '{name}' failed: {reason}")]
    DefaultStore { name: String, reason: String },

    #[error("resolved value for '{name}' does not fit its field: {reason}")]
    Apply { name: String, reason: String },
}

impl BindError {
    /// External parameter name the diagnostic is scoped to.
    pub fn name(&self) -> &str {
        match self {
            BindError::BadDefault { name, .. }
            | BindError::UnsupportedField { name, .. }
            | BindError::Register { name, .. }
            | BindError::EnvOverride { name, .. }
            | BindError::Required { name, .. }
            | BindError::DefaultStore { name, .. }
            | BindError::Apply { name, .. } => name,
        }
    }
}
