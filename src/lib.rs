//! Declarative command-line and environment binding for configuration
//! structs. Describe your fields once, and flags, env vars, and defaults
//! all line up.
//!
//! Flagbind connects a plain Rust configuration struct to a command-line
//! framework: every leaf field becomes a `--kebab-case` parameter with a
//! typed default, an automatic `PREFIX_FIELD_NAME` environment fallback,
//! and an optional required constraint. The core is framework-agnostic;
//! an adapter for [clap](https://docs.rs/clap) ships behind the `clap`
//! Cargo feature (on by default).
//!
//! ```ignore
//! let mut config = ServerConfig::default();
//! let mut set = ClapSet::new("server");
//! let binder = Binder::new();
//!
//! binder.bind(&mut set, &mut config, &[]);
//! set.try_parse_from(std::env::args())?;
//! binder.apply(&set, &mut config, &[]);
//! ```
//!
//! After those three calls, `config` holds the fully resolved values and
//! the user got `--help` text, value validation, and env overrides for
//! free.
//!
//! # Why flagbind
//!
//! Wiring a config struct to a CLI by hand means repeating every field
//! three times: once in the struct, once as a flag registration, once in
//! the code that copies parsed values back. The copies drift — a renamed
//! field keeps its old flag, a new field never gets an env override.
//!
//! Flagbind collapses the three into one: the [`Bindable`] implementation
//! is the single description of which fields exist, what their defaults
//! are, and how they surface externally. Flags, env var names, help text,
//! and required constraints all derive from it.
//!
//! # Design: descriptors over reflection
//!
//! A configuration struct implements [`Bindable`] by returning a list of
//! [`FieldSpec`] descriptors, each pairing a field identifier and its
//! [`FieldMetadata`] with a [`Binding`] — a mutable borrow of the field's
//! storage. The binder never inspects types at runtime: the closed
//! [`Binding`] enumeration is the complete set of supported storage
//! shapes, and everything else is rejected up front as
//! [`Unsupported`](Binding::Unsupported).
//!
//! Descriptors are rebuilt on every traversal (`fields` takes
//! `&mut self`), so the borrows live exactly as long as one `bind` or
//! `apply` call. Nothing is retained between the two; the parameter set
//! carries the state across the framework's parse step.
//!
//! # Layer precedence
//!
//! ```text
//! Compiled defaults     FieldMetadata::default, parsed and written at bind
//!        ↑ overridden by
//! Environment vars      PREFIX_FIELD_NAME, force-set into the parameter set
//!        ↑ overridden by
//! Explicit arguments    whatever the framework parses
//! ```
//!
//! Every layer is sparse: an unset env var or absent flag falls through
//! to the layer below. The mechanism is two-phase — [`Binder::bind`]
//! writes defaults into the struct and queues env force-sets,
//! [`Binder::apply`] walks the same descriptors after parsing and writes
//! back only the parameters the set holds an override for.
//!
//! # Field metadata
//!
//! [`FieldMetadata`] carries the per-field vocabulary:
//!
//! - **`default`** — textual default, parsed against the field's kind at
//!   bind time. Empty means the type's zero value.
//! - **`help`** — parameter help text.
//! - **`flag`** — explicit external name, used verbatim (no kebab
//!   conversion, no nesting prefix).
//! - **`group`** — the field only binds when its group is listed in the
//!   call's active groups. Ungrouped fields always bind.
//! - **`required`** — registers a must-be-set constraint with the
//!   parameter set, enforced at the framework's parse step.
//! - **`skip`** — the field never binds; not even its default is parsed.
//!
//! Nested structures compose: a [`Binding::Nested`] field contributes its
//! children under a dotted prefix, so `database.pool_size` surfaces as
//! `--database-pool-size` and `PREFIX_DATABASE_POOL_SIZE`.
//!
//! # External names
//!
//! Field identifiers are converted to kebab-case: word boundaries fall
//! before an uppercase letter that follows a lowercase letter or digit,
//! or that starts a new word (`HTTPServer.Port` → `http-server-port`).
//! The env var key is the kebab name uppercased with hyphens replaced by
//! underscores, behind the binder's prefix. The default prefix is `ACF_`;
//! the `PREFIX_ACF` environment variable or
//! [`Binder::env_prefix`] replaces it.
//!
//! # Parameter sets
//!
//! The binder talks to the surrounding framework only through the
//! [`ParameterSet`] trait: register a typed parameter, force-set a value,
//! report whether a parameter was set explicitly, and serve resolved
//! values back. [`ClapSet`] (behind the `clap` feature) implements it on
//! top of a lazily built `clap::Command`; any other parser — or none —
//! plugs in the same way. To use flagbind without clap:
//!
//! ```toml
//! flagbind = { version = "...", default-features = false }
//! ```
//!
//! # Error handling
//!
//! Binding failures are field-scoped and non-fatal: a malformed default,
//! an unsupported field type, or a bad env value lands in the returned
//! [`BindReport`] (and as a `tracing` warning) while the remaining fields
//! bind normally. The affected field keeps its zero value and is not
//! registered. See the [`error`] module for the taxonomy; explicit
//! argument errors stay with the framework, which already reports them
//! to the user.

pub mod error;
pub mod types;

mod binder;
mod binding;
#[cfg(feature = "clap")]
mod cli;
mod field;
mod name;
mod params;
mod parse;

#[cfg(test)]
mod fixtures;

pub use binder::{BindReport, Binder};
pub use binding::Binding;
#[cfg(feature = "clap")]
pub use cli::ClapSet;
pub use error::{BindError, ParameterError, ParseError};
pub use field::{Bindable, FieldMetadata, FieldSpec};
pub use name::{env_key, to_kebab};
pub use params::{Parameter, ParameterSet};
pub use types::{FieldKind, MapKind, ScalarKind, Value};
