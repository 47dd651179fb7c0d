//! Demo configuration struct and its field descriptors.

use std::collections::BTreeMap;
use std::time::Duration;

use flagbind::{Bindable, Binding, FieldMetadata, FieldSpec};

#[derive(Debug, Default)]
pub struct DemoConfig {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub api_key: String,
    pub admin_token: String,
    pub database: DatabaseConfig,
}

#[derive(Debug, Default)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl Bindable for DemoConfig {
    fn fields(&mut self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::with_meta(
                "Host",
                FieldMetadata {
                    default: "localhost",
                    help: "Address to bind the server to.",
                    ..Default::default()
                },
                Binding::Str(&mut self.host),
            ),
            FieldSpec::with_meta(
                "Port",
                FieldMetadata {
                    default: "8080",
                    help: "Port to listen on.",
                    ..Default::default()
                },
                Binding::U16(&mut self.port),
            ),
            FieldSpec::with_meta(
                "Verbose",
                FieldMetadata {
                    help: "Enable verbose output.",
                    ..Default::default()
                },
                Binding::Bool(&mut self.verbose),
            ),
            FieldSpec::with_meta(
                "RequestTimeout",
                FieldMetadata {
                    default: "30s",
                    help: "Per-request timeout (e.g. 30s, 1m30s).",
                    ..Default::default()
                },
                Binding::Duration(&mut self.request_timeout),
            ),
            FieldSpec::with_meta(
                "AllowedOrigins",
                FieldMetadata {
                    default: "localhost,127.0.0.1",
                    help: "Comma-separated list of allowed origins.",
                    ..Default::default()
                },
                Binding::StrVec(&mut self.allowed_origins),
            ),
            FieldSpec::with_meta(
                "Labels",
                FieldMetadata {
                    help: "Instance labels as key=value pairs.",
                    ..Default::default()
                },
                Binding::StrMap(&mut self.labels),
            ),
            FieldSpec::with_meta(
                "ApiKey",
                FieldMetadata {
                    required: true,
                    help: "API key for upstream calls.",
                    ..Default::default()
                },
                Binding::Str(&mut self.api_key),
            ),
            FieldSpec::with_meta(
                "AdminToken",
                FieldMetadata {
                    group: Some("admin"),
                    help: "Token for the admin endpoints.",
                    ..Default::default()
                },
                Binding::Str(&mut self.admin_token),
            ),
            FieldSpec::new("Database", Binding::Nested(self.database.fields())),
        ]
    }
}

impl Bindable for DatabaseConfig {
    fn fields(&mut self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::with_meta(
                "Url",
                FieldMetadata {
                    flag: Some("db-url"),
                    default: "postgres://localhost/demo",
                    help: "Database connection string.",
                    ..Default::default()
                },
                Binding::Str(&mut self.url),
            ),
            FieldSpec::with_meta(
                "PoolSize",
                FieldMetadata {
                    default: "5",
                    help: "Connection pool size.",
                    ..Default::default()
                },
                Binding::U32(&mut self.pool_size),
            ),
        ]
    }
}
