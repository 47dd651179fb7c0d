//! Field descriptors: the declare-once surface a configuration structure
//! exposes to the binder.
//!
//! A configuration type implements [`Bindable`] by listing its fields in
//! declaration order, each as a [`FieldSpec`] pairing the declared
//! identifier, its [`FieldMetadata`], and a live [`Binding`] into the
//! field's storage. Descriptors are rebuilt per call — they are transient
//! views over caller-owned storage, never retained by the engine.

use crate::binding::Binding;

/// Declarative per-field annotations.
///
/// All fields are optional in spirit: `Default` gives an always-bound,
/// optional field with no default text, no group, and no help.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Exclude this field from binding entirely. When set, no other
    /// metadata is consulted — not even a malformed default is an error.
    pub skip: bool,
    /// Textual default, parsed by the field's kind. Empty means the kind's
    /// zero value.
    pub default: &'static str,
    /// Gate inclusion on an active group. `None` (or empty) fields bind
    /// under any group set.
    pub group: Option<&'static str>,
    /// Require the parameter to be set explicitly at parse time.
    pub required: bool,
    /// Help text forwarded to the parameter set.
    pub help: &'static str,
    /// Explicit external name, bypassing kebab conversion and prefixing.
    pub flag: Option<&'static str>,
}

/// One field of a configuration structure, as seen by the binder.
pub struct FieldSpec<'a> {
    /// Declared identifier (the struct field name).
    pub name: &'static str,
    pub meta: FieldMetadata,
    pub binding: Binding<'a>,
}

impl<'a> FieldSpec<'a> {
    /// A field with default metadata.
    pub fn new(name: &'static str, binding: Binding<'a>) -> Self {
        Self {
            name,
            meta: FieldMetadata::default(),
            binding,
        }
    }

    /// A field with explicit metadata.
    pub fn with_meta(name: &'static str, meta: FieldMetadata, binding: Binding<'a>) -> Self {
        Self { name, meta, binding }
    }
}

/// A configuration structure that can hand the binder an ordered list of
/// field descriptors.
///
/// Implementations list every field, including nested structures (as
/// [`Binding::Nested`] wrapping the child descriptors) and fields of
/// unsupported types (as [`Binding::Unsupported`], so they are reported
/// rather than silently dropped).
pub trait Bindable {
    fn fields(&mut self) -> Vec<FieldSpec<'_>>;
}
