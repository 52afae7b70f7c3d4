//! The ontology registry.
//!
//! Ontologies are registered once by base URI and then only read. The
//! [`Registry::shared`] instance holds the built-in ontologies and is
//! initialized on first use.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use ontogen_runtime::context::canonical_uri;

use crate::error::SpecError;
use crate::namespaces;
use crate::parser::{NodeDraft, ParsingContext};
use crate::term::Term;

/// A term under the name a schema document uses for it.
#[derive(Debug, Clone)]
pub struct NamedTerm {
    /// The name as it appears in the document (`xsd:string`, `label`).
    pub name: String,
    /// The term.
    pub term: Arc<dyn Term>,
}

/// A named source of term definitions.
pub trait Ontology: fmt::Debug + Send + Sync {
    /// Base URI identifying the ontology.
    fn spec_uri(&self) -> &str;

    /// Every term of the ontology, named `alias:local` (or bare when `alias`
    /// is empty).
    fn resolve(&self, alias: &str) -> Vec<NamedTerm>;

    /// The single term `local`, named `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::TermNotFound`] if the ontology has no such term.
    fn resolve_specific(&self, alias: &str, local: &str) -> Result<Vec<NamedTerm>, SpecError> {
        let term = self.lookup(local)?;
        Ok(vec![NamedTerm {
            name: alias.to_owned(),
            term,
        }])
    }

    /// Terms a schema-local member defines through this ontology, such as a
    /// local datatype. Most ontologies define none.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if the member is malformed for this ontology.
    fn load_local_element(
        &self,
        name: &str,
        payload: &NodeDraft,
        ctx: &ParsingContext<'_>,
    ) -> Result<Vec<NamedTerm>, SpecError> {
        let _ = (name, payload, ctx);
        Ok(Vec::new())
    }

    /// Looks up a term by local name.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::TermNotFound`] if the ontology has no such term.
    fn lookup(&self, name: &str) -> Result<Arc<dyn Term>, SpecError>;
}

/// An ontology defined by a fixed table of terms.
#[derive(Debug)]
pub struct TermOntology {
    uri: &'static str,
    terms: Vec<(&'static str, Arc<dyn Term>)>,
}

impl TermOntology {
    /// Creates an ontology from its base URI and term table.
    #[must_use]
    pub fn new(uri: &'static str, terms: Vec<(&'static str, Arc<dyn Term>)>) -> Self {
        Self { uri, terms }
    }
}

impl Ontology for TermOntology {
    fn spec_uri(&self) -> &str {
        self.uri
    }

    fn resolve(&self, alias: &str) -> Vec<NamedTerm> {
        self.terms
            .iter()
            .map(|(local, term)| NamedTerm {
                name: if alias.is_empty() {
                    (*local).to_owned()
                } else {
                    format!("{alias}:{local}")
                },
                term: Arc::clone(term),
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<Arc<dyn Term>, SpecError> {
        self.terms
            .iter()
            .find(|(local, _)| *local == name)
            .map(|(_, term)| Arc::clone(term))
            .ok_or_else(|| SpecError::TermNotFound {
                ontology: self.uri.to_owned(),
                name: name.to_owned(),
            })
    }
}

/// Ontologies keyed by canonical base URI.
#[derive(Debug, Default)]
pub struct Registry {
    ontologies: BTreeMap<String, Arc<dyn Ontology>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry holding the built-in ontologies: JSON-LD keywords,
    /// RDF, RDFS, OWL, XSD, and schema.org.
    #[must_use]
    pub fn standard() -> Self {
        let builtins: [Arc<dyn Ontology>; 6] = [
            Arc::new(namespaces::jsonld::ontology()),
            Arc::new(namespaces::rdf::ontology()),
            Arc::new(namespaces::rdfs::ontology()),
            Arc::new(namespaces::owl::ontology()),
            Arc::new(namespaces::xsd::ontology()),
            Arc::new(namespaces::schema::ontology()),
        ];
        let ontologies = builtins
            .into_iter()
            .map(|o| (canonical_uri(o.spec_uri()).to_owned(), o))
            .collect();
        Self { ontologies }
    }

    /// The process-wide registry of built-in ontologies.
    #[must_use]
    pub fn shared() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::standard)
    }

    /// Adds an ontology.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DuplicateOntology`] if one is already registered
    /// under the same base URI.
    pub fn register(&mut self, ontology: impl Ontology + 'static) -> Result<(), SpecError> {
        let key = canonical_uri(ontology.spec_uri()).to_owned();
        if self.ontologies.contains_key(&key) {
            return Err(SpecError::DuplicateOntology(ontology.spec_uri().to_owned()));
        }
        self.ontologies.insert(key, Arc::new(ontology));
        Ok(())
    }

    /// Looks up an ontology by base URI; a trailing `#` or `/` is ignored.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&Arc<dyn Ontology>> {
        self.ontologies.get(canonical_uri(uri))
    }

    /// Iterates over the registered ontologies.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Ontology>> {
        self.ontologies.values()
    }

    /// Every term of the ontology at `uri`, named under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::OntologyNotFound`] if nothing is registered there.
    pub fn resolve_alias(&self, uri: &str, alias: &str) -> Result<Vec<NamedTerm>, SpecError> {
        self.get(uri)
            .map(|o| o.resolve(alias))
            .ok_or_else(|| SpecError::OntologyNotFound(uri.to_owned()))
    }

    /// The single term `local` of the ontology at `uri`, named `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::OntologyNotFound`] or [`SpecError::TermNotFound`].
    pub fn resolve_specific(
        &self,
        uri: &str,
        alias: &str,
        local: &str,
    ) -> Result<Vec<NamedTerm>, SpecError> {
        self.get(uri)
            .ok_or_else(|| SpecError::OntologyNotFound(uri.to_owned()))?
            .resolve_specific(alias, local)
    }

    /// Resolves an absolute IRI such as
    /// `http://www.w3.org/2001/XMLSchema#string` to its term.
    #[must_use]
    pub fn find_term(&self, iri: &str) -> Option<Arc<dyn Term>> {
        self.ontologies.iter().find_map(|(base, ontology)| {
            let rest = iri.strip_prefix(base.as_str())?;
            let local = rest.strip_prefix('#').or_else(|| rest.strip_prefix('/'))?;
            ontology.lookup(local).ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris;

    #[derive(Debug)]
    struct Tiny;

    impl Ontology for Tiny {
        fn spec_uri(&self) -> &str {
            "https://example.org/tiny#"
        }

        fn resolve(&self, _alias: &str) -> Vec<NamedTerm> {
            Vec::new()
        }

        fn lookup(&self, name: &str) -> Result<Arc<dyn Term>, SpecError> {
            Err(SpecError::TermNotFound {
                ontology: self.spec_uri().to_owned(),
                name: name.to_owned(),
            })
        }
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = Registry::new();
        registry.register(Tiny).unwrap();
        assert!(matches!(
            registry.register(Tiny),
            Err(SpecError::DuplicateOntology(_))
        ));
        assert!(registry.get("https://example.org/tiny").is_some());
    }

    #[test]
    fn builtins_are_registered_once() {
        let registry = Registry::shared();
        for uri in [iris::JSONLD, iris::RDF, iris::RDFS, iris::OWL, iris::XSD, iris::SCHEMA] {
            assert!(registry.get(uri).is_some(), "{uri} is not registered");
        }
        assert_eq!(registry.iter().count(), 6);
    }

    #[test]
    fn resolve_names_terms_under_the_alias() {
        let registry = Registry::standard();
        let names: Vec<String> = registry
            .resolve_alias(iris::XSD, "xsd")
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert!(names.contains(&"xsd:string".to_owned()));
        assert!(names.contains(&"xsd:duration".to_owned()));
        assert!(matches!(
            registry.resolve_alias("https://nowhere.example/", "x"),
            Err(SpecError::OntologyNotFound(_))
        ));
    }

    #[test]
    fn resolve_specific_binds_one_term() {
        let registry = Registry::standard();
        let terms = registry.resolve_specific(iris::RDFS, "label", "label").unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].name, "label");
        assert!(matches!(
            registry.resolve_specific(iris::RDFS, "x", "nope"),
            Err(SpecError::TermNotFound { .. })
        ));
    }

    #[test]
    fn absolute_iris_find_their_term() {
        let registry = Registry::standard();
        assert!(registry.find_term(iris::XSD_STRING).is_some());
        assert!(registry.find_term("http://www.w3.org/2001/XMLSchema#nope").is_none());
    }
}
