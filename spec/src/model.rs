//! The finished vocabulary model.
//!
//! A [`Vocabulary`] is produced once per compilation by the
//! [builder](crate::builder) and only read afterwards. Classes and properties
//! refer to each other by name.

use serde_json::Value;

use crate::values::LiteralKindDescriptor;

/// Whether a property holds one value or an ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// At most one value.
    #[default]
    Functional,
    /// Any number of values, in order.
    NonFunctional,
}

impl Cardinality {
    /// Returns true for [`Cardinality::Functional`].
    #[must_use]
    pub fn is_functional(self) -> bool {
        self == Cardinality::Functional
    }
}

/// One of the kinds a property may hold.
///
/// Identifier references and passthrough values are available on every
/// property and are not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A primitive literal kind.
    Value(LiteralKindDescriptor),
    /// An instance of a class of the same vocabulary, by name.
    Class(String),
}

impl Kind {
    /// Returns the kind's name: the literal's local name or the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Kind::Value(v) => &v.name,
            Kind::Class(name) => name,
        }
    }
}

/// A vocabulary class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    /// Local name.
    pub name: String,
    /// Full IRI.
    pub uri: String,
    /// Description, if the schema gives one.
    pub comment: Option<String>,
    /// Names of the classes this class extends.
    pub extends: Vec<String>,
    /// Names of the classes this class is disjoint with.
    pub disjoint_with: Vec<String>,
    /// Names of the properties whose domain includes this class.
    pub properties: Vec<String>,
    /// Example documents, kept verbatim.
    pub examples: Vec<Value>,
}

/// A vocabulary property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Local name; also the bare wire key.
    pub name: String,
    /// Full IRI.
    pub uri: String,
    /// Description, if the schema gives one.
    pub comment: Option<String>,
    /// Declared kinds in first-seen order.
    pub kinds: Vec<Kind>,
    /// Functional or non-functional.
    pub cardinality: Cardinality,
    /// Names of the classes that own this property.
    pub domain: Vec<String>,
    /// Example documents, kept verbatim.
    pub examples: Vec<Value>,
}

impl PropertyDef {
    /// Returns the position of the kind called `name`.
    #[must_use]
    pub fn kind_index(&self, name: &str) -> Option<usize> {
        self.kinds.iter().position(|k| k.name() == name)
    }
}

/// A compiled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Vocabulary name (e.g. `ActivityStreams`).
    pub name: String,
    /// Base IRI, as given by the schema's `@id`.
    pub uri: String,
    /// Prefix the schema uses for its own terms, or `""`.
    pub alias: String,
    /// Classes in declaration order.
    pub classes: Vec<ClassDef>,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDef>,
    /// Literal kinds used by at least one property, ordered by IRI.
    pub values: Vec<LiteralKindDescriptor>,
    /// Members whose type was not recognized, kept verbatim.
    pub passthrough: Vec<Value>,
}

impl Vocabulary {
    /// Looks up a class by local name.
    #[must_use]
    pub fn find_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up a property by local name.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Every class `name` extends, directly or not, nearest first.
    ///
    /// Each ancestor appears once. Unknown names yield an empty list.
    #[must_use]
    pub fn ancestors(&self, name: &str) -> Vec<&ClassDef> {
        let mut out: Vec<&ClassDef> = Vec::new();
        let mut queue: Vec<&str> = self
            .find_class(name)
            .map(|c| c.extends.iter().map(String::as_str).collect())
            .unwrap_or_default();
        while !queue.is_empty() {
            let mut next = Vec::new();
            for parent in queue {
                let Some(class) = self.find_class(parent) else {
                    continue;
                };
                if class.name == name || out.iter().any(|c| c.name == class.name) {
                    continue;
                }
                out.push(class);
                next.extend(class.extends.iter().map(String::as_str));
            }
            queue = next;
        }
        out
    }

    /// The properties an instance of `name` holds: inherited ones first,
    /// starting from the most distant ancestor, then the class's own.
    #[must_use]
    pub fn effective_properties(&self, name: &str) -> Vec<&PropertyDef> {
        let Some(class) = self.find_class(name) else {
            return Vec::new();
        };
        let mut out: Vec<&PropertyDef> = Vec::new();
        let owners = self.ancestors(name).into_iter().rev().chain(Some(class));
        for owner in owners {
            for p in owner.properties.iter().filter_map(|p| self.find_property(p)) {
                if !out.iter().any(|q| q.name == p.name) {
                    out.push(p);
                }
            }
        }
        out
    }
}

/// Standard IRI constants.
pub mod iris {
    /// JSON-LD keyword namespace.
    pub const JSONLD: &str = "http://www.w3.org/ns/json-ld#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// schema.org namespace.
    pub const SCHEMA: &str = "http://schema.org/";

    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
