//! JSON-LD dump of a compiled vocabulary.
//!
//! The output uses the same root header and `members` layout the
//! [parser](crate::parser) reads, so a dump compiles back to an equal
//! [`Vocabulary`]. References into other vocabularies were already dropped by
//! the builder and do not reappear.

use serde_json::{json, Map, Value};

use crate::model::{iris, Cardinality, ClassDef, Kind, PropertyDef, Vocabulary};
use crate::values::LiteralKindDescriptor;

const PREFIXES: &[(&str, &str)] = &[
    ("owl", iris::OWL),
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("xsd", iris::XSD),
    ("schema", iris::SCHEMA),
];

/// Serializes a vocabulary to a JSON-LD schema document.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocabulary: &Vocabulary) -> Value {
    let writer = Writer { vocabulary };
    let mut members: Vec<Value> = Vec::new();
    members.extend(
        vocabulary
            .values
            .iter()
            .filter(|v| writer.is_local(&v.uri))
            .map(|v| writer.datatype(v)),
    );
    members.extend(vocabulary.classes.iter().map(|c| writer.class(c)));
    members.extend(vocabulary.properties.iter().map(|p| writer.property(p)));
    members.extend(vocabulary.passthrough.iter().cloned());

    json!({
        "@context": writer.context(),
        "@id": vocabulary.uri,
        "name": vocabulary.name,
        "members": members
    })
}

struct Writer<'v> {
    vocabulary: &'v Vocabulary,
}

impl Writer<'_> {
    fn context(&self) -> Value {
        let mut ctx = Map::new();
        for (prefix, iri) in PREFIXES {
            ctx.insert((*prefix).to_owned(), json!(iri));
        }
        if !self.vocabulary.alias.is_empty() {
            ctx.insert(self.vocabulary.alias.clone(), json!(self.vocabulary.uri));
        }
        Value::Object(ctx)
    }

    fn is_local(&self, uri: &str) -> bool {
        !PREFIXES.iter().any(|(_, iri)| uri.starts_with(iri))
    }

    /// Writes a reference to a term of this vocabulary.
    fn local(&self, name: &str) -> String {
        if self.vocabulary.alias.is_empty() {
            name.to_owned()
        } else {
            format!("{}:{name}", self.vocabulary.alias)
        }
    }

    fn kind(&self, kind: &Kind) -> String {
        match kind {
            Kind::Class(name) => self.local(name),
            Kind::Value(v) if self.is_local(&v.uri) => self.local(&v.name),
            Kind::Value(v) => shorten_iri(&v.uri),
        }
    }

    fn datatype(&self, value: &LiteralKindDescriptor) -> Value {
        let base = if value.codec.kind == "langString" {
            iris::RDF
        } else {
            iris::XSD
        };
        json!({
            "@id": self.local(&value.name),
            "@type": "rdfs:Datatype",
            "rdfs:subClassOf": shorten_iri(&format!("{base}{}", value.codec.kind))
        })
    }

    fn class(&self, class: &ClassDef) -> Value {
        let mut node = json!({
            "@id": self.local(&class.name),
            "@type": "owl:Class"
        });
        let refs = |names: &[String]| -> Value {
            names.iter().map(|n| Value::String(self.local(n))).collect()
        };
        if !class.extends.is_empty() {
            node["rdfs:subClassOf"] = refs(&class.extends);
        }
        if !class.disjoint_with.is_empty() {
            node["owl:disjointWith"] = refs(&class.disjoint_with);
        }
        annotate(&mut node, class.comment.as_deref(), &class.examples);
        node
    }

    fn property(&self, property: &PropertyDef) -> Value {
        let mut node = match property.cardinality {
            Cardinality::Functional => json!({
                "@id": self.local(&property.name),
                "@type": ["rdf:Property", "owl:FunctionalProperty"]
            }),
            Cardinality::NonFunctional => json!({
                "@id": self.local(&property.name),
                "@type": "rdf:Property",
                "owl:maxCardinality": "*"
            }),
        };
        let kinds: Vec<Value> = property
            .kinds
            .iter()
            .map(|k| Value::String(self.kind(k)))
            .collect();
        match kinds.len() {
            0 => {}
            1 => node["rdfs:range"] = kinds[0].clone(),
            _ => node["rdfs:range"] = json!({ "owl:unionOf": kinds }),
        }
        if !property.domain.is_empty() {
            node["rdfs:domain"] = property
                .domain
                .iter()
                .map(|d| Value::String(self.local(d)))
                .collect();
        }
        annotate(&mut node, property.comment.as_deref(), &property.examples);
        node
    }
}

fn annotate(node: &mut Value, comment: Option<&str>, examples: &[Value]) {
    if let Some(comment) = comment {
        node["rdfs:comment"] = json!(comment);
    }
    if !examples.is_empty() {
        node["schema:example"] = Value::Array(examples.to_vec());
    }
}

/// Shortens a full IRI to a prefixed form using the standard prefixes.
fn shorten_iri(iri: &str) -> String {
    for (prefix, full) in PREFIXES {
        if let Some(local) = iri.strip_prefix(full) {
            return format!("{prefix}:{local}");
        }
    }
    iri.to_owned()
}
