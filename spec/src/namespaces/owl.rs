//! `owl:` terms.

use crate::model::iris::{OWL, OWL_THING};
use crate::registry::TermOntology;
use crate::term::{CardinalityTerm, ClassTerm, Marker, MarkerTerm, Relation, RelationTerm};

use super::term;

/// Returns the OWL ontology.
#[must_use]
pub fn ontology() -> TermOntology {
    let uri = |local: &str| format!("{OWL}{local}");
    TermOntology::new(
        OWL,
        vec![
            term("Class", MarkerTerm::new(Marker::Class)),
            term("ObjectProperty", MarkerTerm::new(Marker::Property)),
            term("DatatypeProperty", MarkerTerm::new(Marker::Property)),
            term("FunctionalProperty", MarkerTerm::new(Marker::Functional)),
            term("unionOf", RelationTerm::new(uri("unionOf"), Relation::UnionOf)),
            term("disjointWith", RelationTerm::new(uri("disjointWith"), Relation::DisjointWith)),
            term(
                "equivalentClass",
                RelationTerm::new(uri("equivalentClass"), Relation::EquivalentClass),
            ),
            term("maxCardinality", CardinalityTerm),
            term("Thing", ClassTerm::new(OWL_THING)),
        ],
    )
}
