//! Vocabulary schemas compiled into a typed model.
//!
//! The `ontogen-spec` crate reads a linked-data schema document (JSON-LD with
//! a `members` list of classes, properties, and datatypes), resolves every
//! term through a [`Registry`] of ontologies, and builds a validated
//! [`Vocabulary`]: classes with their `extends` graph, properties with their
//! ordered kinds and cardinality, and the literal kinds in use.
//!
//! # Entry Point
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json!({
//!     "@context": {
//!         "owl": "http://www.w3.org/2002/07/owl#",
//!         "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
//!         "xsd": "http://www.w3.org/2001/XMLSchema#",
//!         "ex": "https://example.org/ns#"
//!     },
//!     "@id": "https://example.org/ns",
//!     "name": "Example",
//!     "members": [
//!         {"@id": "ex:Note", "@type": "owl:Class"},
//!         {"@id": "ex:content", "@type": "owl:DatatypeProperty",
//!          "rdfs:domain": "ex:Note", "rdfs:range": "xsd:string"}
//!     ]
//! });
//! let vocabulary = ontogen_spec::compile(&schema, ontogen_spec::Registry::shared()).unwrap();
//! assert_eq!(vocabulary.effective_properties("Note")[0].name, "content");
//! ```
//!
//! # Serialization
//!
//! ```
//! # let vocabulary = ontogen_spec::Vocabulary {
//! #     name: "Empty".into(), uri: "urn:empty".into(), alias: String::new(),
//! #     classes: vec![], properties: vec![], values: vec![], passthrough: vec![],
//! # };
//! let dump = ontogen_spec::serializer::jsonld::to_json_ld(&vocabulary);
//! assert_eq!(dump["name"], "Empty");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod error;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod registry;
pub mod serializer;
pub mod term;
pub mod values;

pub use builder::build;
pub use error::{SchemaError, SpecError};
pub use model::{Cardinality, ClassDef, Kind, PropertyDef, Vocabulary};
pub use parser::{parse, parse_str, ParsedVocabulary};
pub use registry::{Ontology, Registry};
pub use values::LiteralKindDescriptor;

/// Parses a schema document and builds its vocabulary.
///
/// # Errors
///
/// Returns any error [`parse`] or [`build`] reports.
pub fn compile(document: &serde_json::Value, registry: &Registry) -> Result<Vocabulary, SpecError> {
    let parsed = parse(document, registry)?;
    build(parsed)
}

/// Reads and compiles a schema document from JSON text.
///
/// # Errors
///
/// Returns [`SpecError::Json`] for invalid JSON, otherwise as [`compile`].
pub fn compile_str(text: &str, registry: &Registry) -> Result<Vocabulary, SpecError> {
    build(parse_str(text, registry)?)
}
