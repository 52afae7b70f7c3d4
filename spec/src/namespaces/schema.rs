//! schema.org terms used for documentation.

use crate::model::iris::SCHEMA;
use crate::registry::TermOntology;
use crate::term::{Annotation, AnnotationTerm, ExampleTerm};

use super::term;

/// Returns the schema.org ontology.
#[must_use]
pub fn ontology() -> TermOntology {
    let uri = |local: &str| format!("{SCHEMA}{local}");
    TermOntology::new(
        SCHEMA,
        vec![
            term("name", AnnotationTerm::new(uri("name"), Annotation::Label)),
            term("description", AnnotationTerm::new(uri("description"), Annotation::Comment)),
            term("url", AnnotationTerm::new(uri("url"), Annotation::SeeAlso)),
            term("example", ExampleTerm),
        ],
    )
}
