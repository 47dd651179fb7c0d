//! The binding orchestrator: one depth-first traversal per call.
//!
//! `bind` walks the configuration structure's field descriptors, filters on
//! metadata (skip, group), derives each leaf's external name, writes the
//! parsed default into the field, registers the parameter, applies the
//! environment fallback, and registers required constraints. `apply` repeats
//! the traversal after the framework has parsed input and writes resolved
//! values back into the structure.
//!
//! Every failure is field-scoped and non-fatal: it lands in the returned
//! [`BindReport`] (and as a `tracing` warning) and the traversal continues.
//! Environment variables are snapshotted at construction so tests and
//! concurrent binds with different prefixes never interfere.

use crate::binding::Binding;
use crate::error::BindError;
use crate::field::{Bindable, FieldSpec};
use crate::name;
use crate::params::{Parameter, ParameterSet};
use crate::parse;

/// Environment variable naming the prefix for override variables.
const PREFIX_VAR: &str = "PREFIX_ACF";

/// Prefix used when `PREFIX_ACF` is unset or empty.
const DEFAULT_PREFIX: &str = "ACF_";

/// Field-scoped diagnostics collected during a `bind` or `apply` traversal.
///
/// An empty report means every field bound cleanly. A non-empty report is
/// not a failure of the call: the affected fields are left at their zero
/// values and unregistered, everything else proceeded.
#[derive(Debug, Default)]
pub struct BindReport {
    pub diagnostics: Vec<BindError>,
}

impl BindReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn push(&mut self, error: BindError) {
        tracing::warn!(parameter = error.name(), %error, "field binding failed");
        self.diagnostics.push(error);
    }
}

/// The binding engine.
///
/// Construction snapshots the process environment and resolves the override
/// prefix; [`env_prefix`](Self::env_prefix) and [`env_vars`](Self::env_vars)
/// replace either explicitly (synthetic data in tests, per-call prefixes in
/// concurrent binds).
pub struct Binder {
    env_prefix: String,
    env_vars: Vec<(String, String)>,
}

impl Binder {
    pub fn new() -> Self {
        let env_prefix = std::env::var(PREFIX_VAR)
            .ok()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        Self {
            env_prefix,
            env_vars: std::env::vars().collect(),
        }
    }

    /// Override the environment variable prefix (default: `ACF_`, or the
    /// value of `PREFIX_ACF` when set).
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Replace the environment snapshot. Takes an iterator so tests can pass
    /// synthetic data instead of `std::env::vars()`.
    pub fn env_vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env_vars = vars.into_iter().collect();
        self
    }

    /// Bind `config` against `set` for the given active groups.
    ///
    /// On return, the structure's leaf fields hold their compiled defaults
    /// and the set holds one registration per included leaf. Overrides land
    /// later: environment force-sets are already queued in the set, explicit
    /// arguments arrive when the framework parses, and both reach the
    /// structure via [`apply`](Self::apply).
    pub fn bind<C: Bindable>(
        &self,
        set: &mut dyn ParameterSet,
        config: &mut C,
        active_groups: &[&str],
    ) -> BindReport {
        let mut report = BindReport::default();
        self.bind_fields(set, config.fields(), "", active_groups, &mut report);
        report
    }

    /// Write resolved values (explicit arguments, environment force-sets)
    /// back into `config` after the framework has parsed input.
    ///
    /// Uses the same filtering and naming as [`bind`](Self::bind); fields the
    /// set holds no override for keep the default written at bind time.
    pub fn apply<C: Bindable>(
        &self,
        set: &dyn ParameterSet,
        config: &mut C,
        active_groups: &[&str],
    ) -> BindReport {
        let mut report = BindReport::default();
        apply_fields(set, config.fields(), "", active_groups, &mut report);
        report
    }

    fn bind_fields(
        &self,
        set: &mut dyn ParameterSet,
        fields: Vec<FieldSpec<'_>>,
        prefix: &str,
        active_groups: &[&str],
        report: &mut BindReport,
    ) {
        for field in fields {
            let Some(name) = external_name(&field, prefix, active_groups) else {
                continue;
            };

            let mut binding = field.binding;
            match binding {
                Binding::Nested(children) => {
                    self.bind_fields(set, children, &name, active_groups, report);
                    continue;
                }
                Binding::Unsupported(type_name) => {
                    report.push(BindError::UnsupportedField { name, type_name });
                    continue;
                }
                _ => {}
            }

            let kind = binding.kind();
            let default = match parse::parse(kind, field.meta.default) {
                Ok(value) => value,
                Err(source) => {
                    report.push(BindError::BadDefault { name, source });
                    continue;
                }
            };

            if let Err(reason) = binding.store(&default) {
                report.push(BindError::DefaultStore { name, reason });
                continue;
            }

            if let Err(source) = set.register(Parameter {
                name: name.clone(),
                kind,
                default,
                help: field.meta.help.to_string(),
            }) {
                report.push(BindError::Register { name, source });
                continue;
            }

            self.apply_env_override(set, &name, report);

            if field.meta.required
                && let Err(source) = set.mark_required(&name)
            {
                report.push(BindError::Required { name, source });
            }
        }
    }

    /// Force-set from the environment when the variable is present with a
    /// non-empty value and the parameter is not already explicitly set.
    fn apply_env_override(
        &self,
        set: &mut dyn ParameterSet,
        name: &str,
        report: &mut BindReport,
    ) {
        let var = name::env_key(&self.env_prefix, name);
        let Some((_, value)) = self.env_vars.iter().find(|(key, _)| *key == var) else {
            return;
        };
        if value.is_empty() || set.is_set(name) {
            return;
        }
        if let Err(source) = set.set(name, value) {
            report.push(BindError::EnvOverride {
                name: name.to_string(),
                var,
                source,
            });
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_fields(
    set: &dyn ParameterSet,
    fields: Vec<FieldSpec<'_>>,
    prefix: &str,
    active_groups: &[&str],
    report: &mut BindReport,
) {
    for field in fields {
        let Some(name) = external_name(&field, prefix, active_groups) else {
            continue;
        };

        let mut binding = field.binding;
        match binding {
            Binding::Nested(children) => {
                apply_fields(set, children, &name, active_groups, report);
                continue;
            }
            Binding::Unsupported(_) => continue,
            _ => {}
        }

        if let Some(value) = set.value(&name)
            && let Err(reason) = binding.store(&value)
        {
            report.push(BindError::Apply { name, reason });
        }
    }
}

/// The external name for a field, or `None` when metadata filters it out.
///
/// An explicit `flag` override is used verbatim (no prefixing, no
/// conversion). Otherwise the dotted `prefix.identifier` path is kebab
/// converted as a whole, so prefix and leaf are jointly normalized.
fn external_name(field: &FieldSpec<'_>, prefix: &str, active_groups: &[&str]) -> Option<String> {
    if field.meta.skip {
        return None;
    }
    if let Some(group) = field.meta.group
        && !group.is_empty()
        && !active_groups.contains(&group)
    {
        return None;
    }
    if let Some(flag) = field.meta.flag {
        return Some(flag.to_string());
    }
    let qualified = if prefix.is_empty() {
        field.name.to_string()
    } else {
        format!("{prefix}.{}", field.name)
    };
    Some(name::to_kebab(&qualified))
}
