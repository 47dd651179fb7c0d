//! The parameter-set contract the binder registers against.
//!
//! A parameter set is the surrounding command-line framework's registry: it
//! accepts typed registrations, knows after parsing whether a parameter was
//! set explicitly, can be force-set (the environment fallback path), and
//! serves the resolved values back for [`Binder::apply`](crate::Binder::apply).
//! The engine consumes this capability; it never implements the framework
//! itself. The `clap` feature ships [`ClapSet`](crate::ClapSet) as one
//! implementation.

use crate::error::ParameterError;
use crate::types::{FieldKind, Value};

/// One registered external parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// External kebab-form name.
    pub name: String,
    pub kind: FieldKind,
    /// Parsed compiled-in default.
    pub default: Value,
    pub help: String,
}

/// Registry abstraction supplied by the caller's command-line framework.
pub trait ParameterSet {
    /// Register a parameter. Duplicate names are an error.
    fn register(&mut self, parameter: Parameter) -> Result<(), ParameterError>;

    /// Whether the parameter was set explicitly (by parsed input), as
    /// opposed to holding its default or a force-set value.
    fn is_set(&self, name: &str) -> bool;

    /// Force-set a parameter from text, parsed against its registered kind.
    /// Used for the environment fallback; does not mark the parameter
    /// explicitly set.
    fn set(&mut self, name: &str, text: &str) -> Result<(), ParameterError>;

    /// Require the parameter to be set explicitly at parse time. The
    /// constraint is registered here and evaluated by the implementation's
    /// own parse step.
    fn mark_required(&mut self, name: &str) -> Result<(), ParameterError>;

    /// The resolved override for a parameter: the explicitly parsed value
    /// if set, else a force-set value, else `None` (the compiled default
    /// already written into the configuration structure stands).
    fn value(&self, name: &str) -> Option<Value>;
}
