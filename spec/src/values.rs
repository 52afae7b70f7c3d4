//! Literal kind descriptors.
//!
//! A [`LiteralKindDescriptor`] is everything the generator needs to know
//! about a primitive kind: what to call it, how generated code spells its
//! Rust type, and which runtime codec delegate handles it.

use ontogen_runtime::LiteralCodec;

/// One resolved primitive kind.
#[derive(Debug, Clone)]
pub struct LiteralKindDescriptor {
    /// Local name, used for accessor names (e.g. `dateTime`).
    pub name: String,
    /// Canonical IRI of the kind.
    pub uri: String,
    /// Rust type of the decoded value, as written in generated code.
    pub definition_type: &'static str,
    /// Zero value of `definition_type`, quoted in generated getter docs.
    pub zero_value: &'static str,
    /// `ontogen_runtime::LiteralValue` variant holding the value.
    pub variant: &'static str,
    /// Path of the runtime codec module, as written in generated code.
    pub codec_path: &'static str,
    /// The codec itself, for building type tables in memory.
    pub codec: LiteralCodec,
}

impl LiteralKindDescriptor {
    /// Returns a copy renamed for a schema-local datatype that reuses this
    /// kind's codec.
    #[must_use]
    pub fn derived(&self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            ..self.clone()
        }
    }
}

impl PartialEq for LiteralKindDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && self.name == other.name && self.codec.kind == other.codec.kind
    }
}

impl Eq for LiteralKindDescriptor {}
