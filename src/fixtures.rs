#[cfg(test)]
pub mod test {
    use std::collections::{BTreeMap, BTreeSet};
    use std::time::Duration;

    use crate::binding::Binding;
    use crate::error::ParameterError;
    use crate::field::{Bindable, FieldMetadata, FieldSpec};
    use crate::params::{Parameter, ParameterSet};
    use crate::parse;

    use crate::types::Value;

    /// Build an env var snapshot from string pairs.
    pub fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Shared test configuration exercising every metadata attribute and a
    /// spread of field shapes.
    #[derive(Debug, Default)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
        pub debug: bool,
        pub timeout: Duration,
        pub max_retries: i64,
        pub retries: Vec<i64>,
        pub labels: BTreeMap<String, String>,
        pub api_key: String,
        pub admin_token: String,
        pub internal: bool,
        pub broken: i8,
        pub database: DatabaseConfig,

        /// When set, `Broken` declares a default that overflows `i8`.
        pub bad_default: bool,
        /// When set, the descriptor list includes a field of an unsupported
        /// type.
        pub with_unsupported: bool,
    }

    #[derive(Debug, Default)]
    pub struct DatabaseConfig {
        pub pool_size: u32,
        pub url: String,
    }

    impl Bindable for ServerConfig {
        fn fields(&mut self) -> Vec<FieldSpec<'_>> {
            let broken_default = if self.bad_default { "999" } else { "0" };
            let with_unsupported = self.with_unsupported;

            let mut fields = vec![
                FieldSpec::with_meta(
                    "Host",
                    FieldMetadata {
                        default: "localhost",
                        help: "Bind address.",
                        ..Default::default()
                    },
                    Binding::Str(&mut self.host),
                ),
                FieldSpec::with_meta(
                    "Port",
                    FieldMetadata {
                        default: "8080",
                        help: "Listen port.",
                        ..Default::default()
                    },
                    Binding::U16(&mut self.port),
                ),
                FieldSpec::with_meta(
                    "Debug",
                    FieldMetadata {
                        help: "Enable debug output.",
                        ..Default::default()
                    },
                    Binding::Bool(&mut self.debug),
                ),
                FieldSpec::with_meta(
                    "Timeout",
                    FieldMetadata {
                        default: "1h30m",
                        ..Default::default()
                    },
                    Binding::Duration(&mut self.timeout),
                ),
                FieldSpec::with_meta(
                    "MaxRetries",
                    FieldMetadata {
                        default: "10",
                        ..Default::default()
                    },
                    Binding::I64(&mut self.max_retries),
                ),
                FieldSpec::with_meta(
                    "Retries",
                    FieldMetadata {
                        default: "1,2,3",
                        ..Default::default()
                    },
                    Binding::I64Vec(&mut self.retries),
                ),
                FieldSpec::new("Labels", Binding::StrMap(&mut self.labels)),
                FieldSpec::with_meta(
                    "ApiKey",
                    FieldMetadata {
                        required: true,
                        ..Default::default()
                    },
                    Binding::Str(&mut self.api_key),
                ),
                FieldSpec::with_meta(
                    "AdminToken",
                    FieldMetadata {
                        group: Some("admin"),
                        ..Default::default()
                    },
                    Binding::Str(&mut self.admin_token),
                ),
                FieldSpec::with_meta(
                    "Internal",
                    FieldMetadata {
                        skip: true,
                        default: "maybe",
                        ..Default::default()
                    },
                    Binding::Bool(&mut self.internal),
                ),
                FieldSpec::with_meta(
                    "Broken",
                    FieldMetadata {
                        default: broken_default,
                        ..Default::default()
                    },
                    Binding::I8(&mut self.broken),
                ),
            ];

            if with_unsupported {
                fields.push(FieldSpec::new("Socket", Binding::Unsupported("PathBuf")));
            }

            fields.push(FieldSpec::new(
                "Database",
                Binding::Nested(self.database.fields()),
            ));
            fields
        }
    }

    impl Bindable for DatabaseConfig {
        fn fields(&mut self) -> Vec<FieldSpec<'_>> {
            vec![
                FieldSpec::with_meta(
                    "PoolSize",
                    FieldMetadata {
                        default: "5",
                        ..Default::default()
                    },
                    Binding::U32(&mut self.pool_size),
                ),
                FieldSpec::with_meta(
                    "Url",
                    FieldMetadata {
                        flag: Some("db-url"),
                        ..Default::default()
                    },
                    Binding::Str(&mut self.url),
                ),
            ]
        }
    }

    /// In-memory parameter set: just enough framework behavior to exercise
    /// the binder. Explicit values are raw text, parsed lazily against the
    /// registered kind, so tests can stage them before binding.
    #[derive(Debug, Default)]
    pub struct StubSet {
        pub params: BTreeMap<String, Parameter>,
        pub required: BTreeSet<String>,
        forced: BTreeMap<String, Value>,
        explicit: BTreeMap<String, String>,
    }

    impl StubSet {
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulate the framework parsing an explicit argument.
        pub fn pre_set_explicit(&mut self, name: &str, text: &str) {
            self.explicit.insert(name.to_string(), text.to_string());
        }

        /// Post-parse required check: every required parameter must have an
        /// explicit or force-set value.
        pub fn validate_required(&self) -> Result<(), Vec<String>> {
            let missing: Vec<String> = self
                .required
                .iter()
                .filter(|name| {
                    !self.explicit.contains_key(*name) && !self.forced.contains_key(*name)
                })
                .cloned()
                .collect();
            if missing.is_empty() { Ok(()) } else { Err(missing) }
        }
    }

    impl ParameterSet for StubSet {
        fn register(&mut self, parameter: Parameter) -> Result<(), ParameterError> {
            if self.params.contains_key(&parameter.name) {
                return Err(ParameterError::Duplicate(parameter.name));
            }
            self.params.insert(parameter.name.clone(), parameter);
            Ok(())
        }

        fn is_set(&self, name: &str) -> bool {
            self.explicit.contains_key(name)
        }

        fn set(&mut self, name: &str, text: &str) -> Result<(), ParameterError> {
            let parameter = self
                .params
                .get(name)
                .ok_or_else(|| ParameterError::Unknown(name.to_string()))?;
            let value = parse::parse(parameter.kind, text).map_err(|source| {
                ParameterError::InvalidValue {
                    name: name.to_string(),
                    source,
                }
            })?;
            self.forced.insert(name.to_string(), value);
            Ok(())
        }

        fn mark_required(&mut self, name: &str) -> Result<(), ParameterError> {
            if !self.params.contains_key(name) {
                return Err(ParameterError::Unknown(name.to_string()));
            }
            self.required.insert(name.to_string());
            Ok(())
        }

        fn value(&self, name: &str) -> Option<Value> {
            if let Some(raw) = self.explicit.get(name) {
                let parameter = self.params.get(name)?;
                return parse::parse(parameter.kind, raw).ok();
            }
            self.forced.get(name).cloned()
        }
    }
}
