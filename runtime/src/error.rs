//! Error types for literal codecs, property mutation, and document decoding.

use thiserror::Error;

/// Failure reported by a literal codec delegate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value lies outside the domain the wire format can represent.
    #[error("cannot encode {kind}: {reason}")]
    Encode {
        /// Name of the literal kind.
        kind: &'static str,
        /// Why the value is not representable.
        reason: String,
    },
    /// The wire value does not have the shape this kind expects.
    #[error("cannot decode {kind}: {reason}")]
    Decode {
        /// Name of the literal kind.
        kind: &'static str,
        /// Description of the mismatch.
        reason: String,
    },
    /// The wire value is a string that does not follow the kind's lexical form.
    #[error("malformed {kind} literal {input:?}")]
    Format {
        /// Name of the literal kind.
        kind: &'static str,
        /// The offending input text.
        input: String,
    },
}

impl CodecError {
    pub(crate) fn encode(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Encode {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn decode(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Decode {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn format(kind: &'static str, input: impl Into<String>) -> Self {
        Self::Format {
            kind,
            input: input.into(),
        }
    }
}

/// Misuse of a polymorphic property's mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The kind index does not name one of the property's declared kinds.
    #[error("property {property} has no kind at index {index} (it declares {declared})")]
    KindOutOfRange {
        /// Property name.
        property: String,
        /// Requested kind index.
        index: usize,
        /// Number of declared kinds.
        declared: usize,
    },
    /// The value cannot be stored under the requested kind.
    #[error("kind {kind} of property {property} cannot hold a {found} value")]
    KindMismatch {
        /// Property name.
        property: String,
        /// Name of the requested kind.
        kind: String,
        /// What was supplied instead.
        found: String,
    },
    /// A sequence position is past the end of a non-functional property.
    #[error("index {index} is out of bounds for property {property} of length {len}")]
    OutOfBounds {
        /// Property name.
        property: String,
        /// Requested position.
        index: usize,
        /// Current sequence length.
        len: usize,
    },
}

/// Failure to decode or encode a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The document root is not a JSON object.
    #[error("document is not a JSON object")]
    NotAnObject,
    /// The document has no `type` entry.
    #[error("document has no type")]
    MissingType,
    /// None of the document's types is known to the type table.
    #[error("document type {0:?} is not in the type table")]
    UnknownType(String),
    /// The document names a different type than the one requested.
    #[error("expected a {expected} document, found {found}")]
    TypeMismatch {
        /// The class that was requested.
        expected: String,
        /// The types the document declares.
        found: String,
    },
    /// A value held by the aggregate could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
