//! `rdfs:` terms.
//!
//! RDFS is also where schema-local datatypes come from: a member typed
//! `rdfs:Datatype` whose `rdfs:subClassOf` names exactly one literal kind
//! defines a new kind, under the member's own name, that reuses the base
//! kind's codec.

use std::sync::Arc;

use crate::error::{SchemaError, SpecError};
use crate::model::iris::RDFS;
use crate::parser::{NodeDraft, ParsingContext};
use crate::registry::{NamedTerm, Ontology, TermOntology};
use crate::term::{
    Annotation, AnnotationTerm, LiteralKindTerm, Marker, MarkerTerm, Reference, Relation,
    RelationTerm, Term,
};

use super::term;

/// The RDFS ontology.
#[derive(Debug)]
pub struct Rdfs {
    terms: TermOntology,
}

/// Returns the RDFS ontology.
#[must_use]
pub fn ontology() -> Rdfs {
    let uri = |local: &str| format!("{RDFS}{local}");
    Rdfs {
        terms: TermOntology::new(
            RDFS,
            vec![
                term("label", AnnotationTerm::new(uri("label"), Annotation::Label)),
                term("comment", AnnotationTerm::new(uri("comment"), Annotation::Comment)),
                term("seeAlso", AnnotationTerm::new(uri("seeAlso"), Annotation::SeeAlso)),
                term("isDefinedBy", AnnotationTerm::new(uri("isDefinedBy"), Annotation::SeeAlso)),
                term("domain", RelationTerm::new(uri("domain"), Relation::Domain)),
                term("range", RelationTerm::new(uri("range"), Relation::Range)),
                term("subClassOf", RelationTerm::new(uri("subClassOf"), Relation::SubClassOf)),
                term("Class", MarkerTerm::new(Marker::Class)),
                term("Datatype", MarkerTerm::new(Marker::Datatype)),
            ],
        ),
    }
}

impl Ontology for Rdfs {
    fn spec_uri(&self) -> &str {
        self.terms.spec_uri()
    }

    fn resolve(&self, alias: &str) -> Vec<NamedTerm> {
        self.terms.resolve(alias)
    }

    fn load_local_element(
        &self,
        name: &str,
        payload: &NodeDraft,
        ctx: &ParsingContext<'_>,
    ) -> Result<Vec<NamedTerm>, SpecError> {
        if !payload.is_datatype() {
            return Ok(Vec::new());
        }
        let bases: Vec<&str> = payload
            .sub_class_of
            .iter()
            .filter_map(|r| match r {
                Reference::Literal(uri) => Some(uri.as_str()),
                _ => None,
            })
            .collect();
        let [base] = bases.as_slice() else {
            return Err(SchemaError::MisplacedReference {
                term: name.to_owned(),
                reference: bases.join(", "),
                role: "the single literal base of a datatype",
            }
            .into());
        };
        let descriptor = ctx
            .value(base)
            .ok_or_else(|| SpecError::TermNotFound {
                ontology: RDFS.to_owned(),
                name: (*base).to_owned(),
            })?
            .derived(name, ctx.local_uri(name));
        log::debug!("{name} is a local datatype over {base}");
        let term: Arc<dyn Term> = Arc::new(LiteralKindTerm::new(descriptor));
        Ok(vec![NamedTerm {
            name: name.to_owned(),
            term,
        }])
    }

    fn lookup(&self, name: &str) -> Result<Arc<dyn Term>, SpecError> {
        self.terms.lookup(name)
    }
}
