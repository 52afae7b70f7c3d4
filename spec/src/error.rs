//! Error types for registry, parsing, and model-building failures.

use thiserror::Error;

/// The schema is well-formed JSON but describes an illegal vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A class is its own ancestor.
    #[error("class {class} extends itself through {path}")]
    ExtendsCycle {
        /// Class where the cycle was detected.
        class: String,
        /// The cycle, as `A -> B -> A`.
        path: String,
    },
    /// A class both extends and is disjoint with the same class.
    #[error("class {class} both extends and is disjoint with {ancestor}")]
    Contradiction {
        /// The offending class.
        class: String,
        /// The ancestor it is also declared disjoint with.
        ancestor: String,
    },
    /// A local reference names no class or local literal kind.
    #[error("{term} refers to unknown class {reference}")]
    UnknownClass {
        /// Term holding the reference.
        term: String,
        /// The unresolved local name.
        reference: String,
    },
    /// Two members define a class with the same name.
    #[error("class {0} is defined more than once")]
    DuplicateClass(String),
    /// A property is named after a key the wire encoding reserves for the
    /// instance itself.
    #[error("property {0} collides with a reserved instance key")]
    ReservedProperty(String),
    /// Two members define a property with the same name but different kinds
    /// or cardinality.
    #[error("property {0} is redefined with different kinds or cardinality")]
    ConflictingProperty(String),
    /// A reference points at the wrong sort of term, such as a literal kind
    /// used as a property domain.
    #[error("{term} cannot use {reference} as {role}")]
    MisplacedReference {
        /// Term holding the reference.
        term: String,
        /// The reference.
        reference: String,
        /// What the reference was used as.
        role: &'static str,
    },
}

/// Any failure while registering ontologies or compiling a schema document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// An ontology with the same base URI is already registered.
    #[error("ontology {0} is already registered")]
    DuplicateOntology(String),
    /// No ontology is registered under the base URI.
    #[error("no ontology is registered for {0}")]
    OntologyNotFound(String),
    /// The ontology has no term with this name.
    #[error("ontology {ontology} has no term {name}")]
    TermNotFound {
        /// Base URI of the ontology.
        ontology: String,
        /// Requested local name.
        name: String,
    },
    /// A leaf term was asked to enter or exit a nested object.
    #[error("term {0} is a leaf and cannot hold a nested object")]
    LeafTraversal(String),
    /// A literal kind URI was registered twice with different codecs.
    #[error("literal kind {uri} is registered as both {first} and {second}")]
    DuplicateLiteral {
        /// Kind URI.
        uri: String,
        /// Codec already registered.
        first: &'static str,
        /// Codec offered the second time.
        second: &'static str,
    },
    /// The schema document does not have the expected shape.
    #[error("malformed schema document: {0}")]
    Document(String),
    /// The described vocabulary is illegal.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The schema is not valid JSON or lacks the root header.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
