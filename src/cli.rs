//! Clap-backed parameter set.
//!
//! This module is the **optional integration layer** between the
//! framework-agnostic binding engine and the [clap](https://docs.rs/clap)
//! argument parser. It is compiled only when the `clap` Cargo feature is
//! enabled (on by default).
//!
//! [`ClapSet`] implements [`ParameterSet`]: every registration becomes a
//! `--kebab-name` argument whose value is validated against the registered
//! kind during clap parsing. After [`try_parse_from`](ClapSet::try_parse_from),
//! explicit arguments win over environment force-sets, which win over the
//! compiled defaults the binder already wrote into the structure — feed the
//! result back with [`Binder::apply`](crate::Binder::apply).
//!
//! Callers using a different parser (or none) implement [`ParameterSet`]
//! themselves and skip this module entirely.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::ParameterError;
use crate::params::{Parameter, ParameterSet};
use crate::parse;
use crate::types::{FieldKind, ScalarKind, Value};

struct Entry {
    parameter: Parameter,
    required: bool,
    forced: Option<Value>,
}

/// A [`ParameterSet`] backed by a lazily built [`clap::Command`].
///
/// Arguments are added in registration order. The command itself is
/// constructed at parse time so later `mark_required` and force-set calls
/// are reflected.
pub struct ClapSet {
    name: String,
    entries: Vec<Entry>,
    matches: Option<ArgMatches>,
}

impl ClapSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            matches: None,
        }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.parameter.name == name)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.parameter.name == name)
    }

    /// Build the clap command from the current registrations.
    ///
    /// Exposed so callers can embed the arguments into a larger CLI; a
    /// required parameter already satisfied by a force-set value is relaxed,
    /// matching the environment-fallback semantics.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.name.clone());
        for entry in &self.entries {
            let kind = entry.parameter.kind;
            let mut arg = Arg::new(entry.parameter.name.clone())
                .long(entry.parameter.name.clone())
                .action(ArgAction::Set)
                .value_parser(move |text: &str| {
                    parse::parse(kind, text).map(|_| text.to_owned())
                });
            if !entry.parameter.help.is_empty() {
                arg = arg.help(entry.parameter.help.clone());
            }
            if matches!(kind, FieldKind::Scalar(ScalarKind::Bool)) {
                arg = arg.num_args(0..=1).default_missing_value("true");
            }
            if entry.required && entry.forced.is_none() {
                arg = arg.required(true);
            } else {
                arg = arg.default_value(entry.parameter.default.render());
            }
            command = command.arg(arg);
        }
        command
    }

    /// Parse explicit arguments. The first element of `argv` is the binary
    /// name, as with `clap::Command::try_get_matches_from`.
    pub fn try_parse_from<I, T>(&mut self, argv: I) -> Result<(), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.to_command().try_get_matches_from(argv)?;
        self.matches = Some(matches);
        Ok(())
    }
}

impl ParameterSet for ClapSet {
    fn register(&mut self, parameter: Parameter) -> Result<(), ParameterError> {
        if self.entry(&parameter.name).is_some() {
            return Err(ParameterError::Duplicate(parameter.name));
        }
        self.entries.push(Entry {
            parameter,
            required: false,
            forced: None,
        });
        Ok(())
    }

    fn is_set(&self, name: &str) -> bool {
        self.matches
            .as_ref()
            .is_some_and(|m| m.value_source(name) == Some(ValueSource::CommandLine))
    }

    fn set(&mut self, name: &str, text: &str) -> Result<(), ParameterError> {
        let Some(entry) = self.entry_mut(name) else {
            return Err(ParameterError::Unknown(name.to_string()));
        };
        let value = parse::parse(entry.parameter.kind, text).map_err(|source| {
            ParameterError::InvalidValue {
                name: name.to_string(),
                source,
            }
        })?;
        entry.forced = Some(value);
        Ok(())
    }

    fn mark_required(&mut self, name: &str) -> Result<(), ParameterError> {
        let Some(entry) = self.entry_mut(name) else {
            return Err(ParameterError::Unknown(name.to_string()));
        };
        entry.required = true;
        Ok(())
    }

    fn value(&self, name: &str) -> Option<Value> {
        let entry = self.entry(name)?;
        if self.is_set(name) {
            let raw = self.matches.as_ref()?.get_one::<String>(name)?;
            return parse::parse(entry.parameter.kind, raw).ok();
        }
        entry.forced.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Binder;
    use crate::fixtures::test::{vars, ServerConfig};
    use std::time::Duration;

    fn binder() -> Binder {
        Binder::new().env_prefix("ACF_").env_vars(vars(&[]))
    }

    fn bound() -> (ServerConfig, ClapSet, Binder) {
        let mut config = ServerConfig::default();
        let mut set = ClapSet::new("app");
        let engine = binder();
        let report = engine.bind(&mut set, &mut config, &[]);
        assert!(report.is_clean(), "{:?}", report.diagnostics);
        (config, set, engine)
    }

    #[test]
    fn defaults_stand_without_arguments() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--api-key", "k"]).unwrap();
        engine.apply(&set, &mut config, &[]);

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout, Duration::from_secs(90 * 60));
    }

    #[test]
    fn explicit_argument_overrides_default() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--port", "3000", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn bare_bool_flag_sets_true() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--debug", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert!(config.debug);
    }

    #[test]
    fn bool_flag_accepts_equals_value() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--debug=false", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert!(!config.debug);
    }

    #[test]
    fn slice_argument_parses_comma_list() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--retries", "4, 5,6", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.retries, vec![4, 5, 6]);
    }

    #[test]
    fn map_argument_parses_pairs() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--labels", "env=prod,region=us", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.labels.get("env").map(String::as_str), Some("prod"));
        assert_eq!(config.labels.get("region").map(String::as_str), Some("us"));
    }

    #[test]
    fn malformed_map_argument_fails_parse() {
        let (_config, mut set, _engine) = bound();
        let result = set.try_parse_from(["app", "--labels", "no-equals", "--api-key", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn duration_argument() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from(["app", "--timeout", "10s", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn nested_field_flag() {
        let (mut config, mut set, engine) = bound();
        set.try_parse_from([
            "app",
            "--database-pool-size",
            "42",
            "--db-url",
            "pg://x",
            "--api-key",
            "k",
        ])
        .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.database.pool_size, 42);
        assert_eq!(config.database.url, "pg://x");
    }

    #[test]
    fn invalid_explicit_value_fails_parse() {
        let (_config, mut set, _engine) = bound();
        let result = set.try_parse_from(["app", "--port", "not-a-port", "--api-key", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_argument_fails_parse() {
        let (_config, mut set, _engine) = bound();
        let result = set.try_parse_from(["app", "--nope", "1", "--api-key", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_argument_fails_parse() {
        let (_config, mut set, _engine) = bound();
        let result = set.try_parse_from(["app"]);
        assert!(result.is_err());
    }

    #[test]
    fn env_force_set_relaxes_required() {
        let mut config = ServerConfig::default();
        let mut set = ClapSet::new("app");
        let engine = binder().env_vars(vars(&[("ACF_API_KEY", "secret")]));
        engine.bind(&mut set, &mut config, &[]);

        set.try_parse_from(["app"]).unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn precedence_explicit_over_env() {
        let mut config = ServerConfig::default();
        let mut set = ClapSet::new("app");
        let engine = binder().env_vars(vars(&[("ACF_PORT", "9090")]));
        engine.bind(&mut set, &mut config, &[]);

        set.try_parse_from(["app", "--port", "3000", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn precedence_env_over_default() {
        let mut config = ServerConfig::default();
        let mut set = ClapSet::new("app");
        let engine = binder().env_vars(vars(&[("ACF_PORT", "9090")]));
        engine.bind(&mut set, &mut config, &[]);

        set.try_parse_from(["app", "--api-key", "k"]).unwrap();
        engine.apply(&set, &mut config, &[]);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn set_on_unknown_parameter_errors() {
        let mut set = ClapSet::new("app");
        let err = set.set("nope", "1").unwrap_err();
        assert!(matches!(err, ParameterError::Unknown(_)));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut set = ClapSet::new("app");
        let parameter = Parameter {
            name: "port".into(),
            kind: FieldKind::Scalar(ScalarKind::U16),
            default: Value::Uint(0),
            help: String::new(),
        };
        set.register(parameter.clone()).unwrap();
        let err = set.register(parameter).unwrap_err();
        assert!(matches!(err, ParameterError::Duplicate(_)));
    }

    #[test]
    fn group_gated_argument_absent_without_group() {
        let (_config, mut set, _engine) = bound();
        let result = set.try_parse_from(["app", "--admin-token", "t", "--api-key", "k"]);
        assert!(result.is_err());
    }

    #[test]
    fn group_gated_argument_present_with_group() {
        let mut config = ServerConfig::default();
        let mut set = ClapSet::new("app");
        let engine = binder();
        engine.bind(&mut set, &mut config, &["admin"]);

        set.try_parse_from(["app", "--admin-token", "t", "--api-key", "k"])
            .unwrap();
        engine.apply(&set, &mut config, &["admin"]);
        assert_eq!(config.admin_token, "t");
    }
}
