//! Runtime support for code generated by `ontogen`.
//!
//! Generated vocabularies are thin, typed front-ends over the generic types
//! in this crate:
//!
//! - [`literal`] holds one codec delegate per primitive kind.
//! - [`ValueCell`] is the polymorphic single-value slot: at most one declared
//!   kind, an identifier reference, or an opaque passthrough value.
//! - [`FunctionalProperty`] and [`NonFunctionalProperty`] wrap cells with
//!   cardinality-one and cardinality-many semantics.
//! - [`Aggregate`] is an instance of a vocabulary class.
//! - [`TypeTable`] is the capability table used to create aggregates and
//!   decode nested class values.
//!
//! ```
//! use std::sync::Arc;
//! use ontogen_runtime::literal::{string, LiteralValue};
//! use ontogen_runtime::{ClassType, KindType, PropertyType, TypeTable};
//!
//! let mut table = TypeTable::new();
//! let name = table.insert_property(PropertyType::new(
//!     "name",
//!     "https://example.org/ns",
//!     true,
//!     vec![KindType::literal("string", "http://www.w3.org/2001/XMLSchema#string", string::CODEC)],
//! ));
//! table.insert_class(ClassType::new("Thing", "https://example.org/ns").with_properties(vec![name]));
//!
//! let mut thing = table.new_aggregate("Thing").ok_or("no Thing")?;
//! thing
//!     .functional_mut("name")
//!     .ok_or("no name")?
//!     .set(0, LiteralValue::String("widget".into()))?;
//! assert_eq!(thing.serialize()?["name"], "widget");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod cell;
pub mod context;
pub mod document;
pub mod error;
pub mod functional;
pub mod iri;
pub mod literal;
pub mod sequence;
pub mod types;

pub use aggregate::{Aggregate, PropertyValue};
/// Re-exported so generated code can name timestamp and duration types.
pub use chrono;

pub use cell::{KindValue, ValueCell, IRI_KIND_INDEX, NO_KIND_INDEX};
pub use context::{AliasMap, DecodeContext, JsonLdContext};
pub use error::{CodecError, DocumentError, PropertyError};
pub use functional::FunctionalProperty;
pub use iri::Iri;
pub use literal::{LiteralCodec, LiteralValue};
pub use sequence::{Cursor, NonFunctionalProperty, PropertyCell};
pub use types::{ClassType, KindType, PropertyType, TypeTable};
