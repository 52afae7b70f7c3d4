//! JSON-LD keywords.
//!
//! Loaded with the empty alias into every document's root scope, so `@id`
//! and `@type` (and their `id`/`type` aliases) are always recognized.

use crate::model::iris::JSONLD;
use crate::registry::TermOntology;
use crate::term::{IdTerm, TypeTerm};

use super::term;

/// Returns the JSON-LD keyword ontology.
#[must_use]
pub fn ontology() -> TermOntology {
    TermOntology::new(
        JSONLD,
        vec![
            term("@id", IdTerm),
            term("id", IdTerm),
            term("@type", TypeTerm),
            term("type", TypeTerm),
        ],
    )
}
