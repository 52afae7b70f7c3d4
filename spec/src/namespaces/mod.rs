//! Built-in ontologies.
//!
//! Each module exposes `ontology()`, returning the ontology that
//! [`Registry::standard`](crate::Registry::standard) registers.

pub mod jsonld;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod schema;
pub mod xsd;

use std::sync::Arc;

use crate::term::Term;

/// Shorthand for building term tables.
pub(crate) fn term(name: &'static str, term: impl Term + 'static) -> (&'static str, Arc<dyn Term>) {
    (name, Arc::new(term))
}
