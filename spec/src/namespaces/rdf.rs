//! `rdf:` terms.

use ontogen_runtime::literal::lang_string;

use crate::model::iris::RDF;
use crate::registry::TermOntology;
use crate::term::{LiteralKindTerm, Marker, MarkerTerm, TypeTerm};
use crate::values::LiteralKindDescriptor;

use super::term;

/// `rdf:langString`: a map from language tag to text.
#[must_use]
pub fn lang_string() -> LiteralKindDescriptor {
    LiteralKindDescriptor {
        name: "langString".into(),
        uri: format!("{RDF}langString"),
        definition_type: "std::collections::BTreeMap<String, String>",
        zero_value: "std::collections::BTreeMap::new()",
        variant: "LangString",
        codec_path: "ontogen_runtime::literal::lang_string",
        codec: lang_string::CODEC,
    }
}

/// Returns the RDF ontology.
#[must_use]
pub fn ontology() -> TermOntology {
    TermOntology::new(
        RDF,
        vec![
            term("type", TypeTerm),
            term("Property", MarkerTerm::new(Marker::Property)),
            term("langString", LiteralKindTerm::new(lang_string())),
        ],
    )
}
