//! Vocabulary model builder: parser drafts to a validated [`Vocabulary`].
//!
//! Kind lists keep first-seen declaration order. Properties declared more
//! than once are merged when they agree. `extends` edges are checked for
//! cycles and against `disjointWith`.

use std::collections::{BTreeMap, BTreeSet};

use ontogen_runtime::aggregate::RESERVED_KEYS;

use crate::error::{SchemaError, SpecError};
use crate::model::{iris, Cardinality, ClassDef, Kind, PropertyDef, Vocabulary};
use crate::parser::{NodeDraft, ParsedVocabulary};
use crate::term::{Marker, Reference};
use crate::values::LiteralKindDescriptor;

/// Builds the finished model from parser output.
///
/// # Errors
///
/// Returns [`SpecError::Schema`] for duplicate classes, conflicting property
/// redefinitions, properties named after reserved instance keys, unknown local references, misplaced references, `extends`
/// cycles, and classes that extend something they are disjoint with.
/// Returns [`SpecError::Document`] for a class or property without `@id`.
pub fn build(parsed: ParsedVocabulary) -> Result<Vocabulary, SpecError> {
    let resolver = Resolver {
        classes: parsed
            .nodes
            .iter()
            .filter(|d| d.is_class())
            .filter_map(|d| d.name.clone())
            .collect(),
        values: &parsed.values,
        local_values: &parsed.local_values,
    };

    let mut classes: Vec<ClassDef> = Vec::new();
    for draft in parsed.nodes.iter().filter(|d| d.is_class()) {
        let name = required_name(draft, "class")?;
        if classes.iter().any(|c| c.name == name) {
            return Err(SchemaError::DuplicateClass(name).into());
        }
        classes.push(ClassDef {
            extends: resolver.classes_of(&name, &draft.sub_class_of, "a superclass")?,
            disjoint_with: resolver.classes_of(&name, &draft.disjoint_with, "a disjoint class")?,
            uri: draft.uri.clone().unwrap_or_default(),
            comment: draft.comment.clone().or_else(|| draft.label.clone()),
            properties: Vec::new(),
            examples: draft.examples.clone(),
            name,
        });
    }

    let mut properties: Vec<PropertyDef> = Vec::new();
    for draft in parsed
        .nodes
        .iter()
        .filter(|d| d.is_property() && !d.is_class())
    {
        let property = resolver.property(draft)?;
        match properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => merge(existing, property)?,
            None => properties.push(property),
        }
    }

    for property in &properties {
        for owner in &property.domain {
            if let Some(class) = classes.iter_mut().find(|c| &c.name == owner) {
                if !class.properties.contains(&property.name) {
                    class.properties.push(property.name.clone());
                }
            }
        }
    }

    let mut values: BTreeMap<&str, &LiteralKindDescriptor> = BTreeMap::new();
    for kind in properties.iter().flat_map(|p| &p.kinds) {
        if let Kind::Value(v) = kind {
            values.entry(v.uri.as_str()).or_insert(v);
        }
    }
    let values = values.into_values().cloned().collect();

    let vocabulary = Vocabulary {
        name: parsed.name,
        uri: parsed.uri,
        alias: parsed.alias,
        classes,
        properties,
        values,
        passthrough: parsed.passthrough,
    };
    check_extends(&vocabulary)?;
    log::info!(
        "built {}: {} classes, {} properties, {} literal kinds",
        vocabulary.name,
        vocabulary.classes.len(),
        vocabulary.properties.len(),
        vocabulary.values.len()
    );
    Ok(vocabulary)
}

struct Resolver<'a> {
    classes: BTreeSet<String>,
    values: &'a BTreeMap<String, LiteralKindDescriptor>,
    local_values: &'a BTreeMap<String, String>,
}

impl Resolver<'_> {
    /// Resolves references that must name classes of this vocabulary.
    /// `owl:Thing` and foreign classes are dropped.
    fn classes_of(
        &self,
        term: &str,
        references: &[Reference],
        role: &'static str,
    ) -> Result<Vec<String>, SchemaError> {
        let mut out: Vec<String> = Vec::new();
        for reference in references {
            match reference {
                Reference::Local(name) if self.classes.contains(name) => {
                    if !out.contains(name) {
                        out.push(name.clone());
                    }
                }
                Reference::Local(name) if self.local_values.contains_key(name) => {
                    return Err(misplaced(term, name, role));
                }
                Reference::Local(name) => {
                    return Err(SchemaError::UnknownClass {
                        term: term.to_owned(),
                        reference: name.clone(),
                    })
                }
                Reference::Literal(uri) => return Err(misplaced(term, uri, role)),
                Reference::Foreign(uri) if uri == iris::OWL_THING => {}
                Reference::Foreign(uri) => {
                    log::warn!("{term}: dropping {role} {uri} from an unregistered vocabulary");
                }
                Reference::Marker(_) => {}
            }
        }
        Ok(out)
    }

    /// Resolves a range into kinds, local classes before local datatypes.
    fn kinds_of(&self, term: &str, references: &[Reference]) -> Result<Vec<Kind>, SchemaError> {
        let mut out: Vec<Kind> = Vec::new();
        for reference in references {
            let kind = match reference {
                Reference::Local(name) if self.classes.contains(name) => Kind::Class(name.clone()),
                Reference::Local(name) => {
                    let value = self
                        .local_values
                        .get(name)
                        .and_then(|uri| self.values.get(uri))
                        .ok_or_else(|| SchemaError::UnknownClass {
                            term: term.to_owned(),
                            reference: name.clone(),
                        })?;
                    Kind::Value(value.clone())
                }
                Reference::Literal(uri) => match self.values.get(uri) {
                    Some(value) => Kind::Value(value.clone()),
                    None => return Err(misplaced(term, uri, "a kind")),
                },
                Reference::Foreign(uri) => {
                    log::warn!("{term}: dropping kind {uri} from an unregistered vocabulary");
                    continue;
                }
                Reference::Marker(_) => continue,
            };
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        Ok(out)
    }

    fn property(&self, draft: &NodeDraft) -> Result<PropertyDef, SpecError> {
        let name = required_name(draft, "property")?;
        if RESERVED_KEYS.contains(&name.as_str()) {
            return Err(SchemaError::ReservedProperty(name).into());
        }
        let cardinality = match (draft.has_marker(Marker::Functional), draft.cardinality) {
            (true, Some(Cardinality::NonFunctional)) => {
                return Err(SchemaError::ConflictingProperty(name).into())
            }
            (true, _) => Cardinality::Functional,
            (false, explicit) => explicit.unwrap_or_default(),
        };
        Ok(PropertyDef {
            kinds: self.kinds_of(&name, &draft.range)?,
            domain: self.classes_of(&name, &draft.domain, "a domain")?,
            uri: draft.uri.clone().unwrap_or_default(),
            comment: draft.comment.clone().or_else(|| draft.label.clone()),
            cardinality,
            examples: draft.examples.clone(),
            name,
        })
    }
}

fn required_name(draft: &NodeDraft, what: &str) -> Result<String, SpecError> {
    draft
        .name
        .clone()
        .ok_or_else(|| SpecError::Document(format!("{what} member has no @id")))
}

fn misplaced(term: &str, reference: &str, role: &'static str) -> SchemaError {
    SchemaError::MisplacedReference {
        term: term.to_owned(),
        reference: reference.to_owned(),
        role,
    }
}

fn merge(existing: &mut PropertyDef, again: PropertyDef) -> Result<(), SchemaError> {
    if existing.kinds != again.kinds || existing.cardinality != again.cardinality {
        return Err(SchemaError::ConflictingProperty(again.name));
    }
    log::debug!("merging repeated definition of {}", again.name);
    for owner in again.domain {
        if !existing.domain.contains(&owner) {
            existing.domain.push(owner);
        }
    }
    if existing.comment.is_none() {
        existing.comment = again.comment;
    }
    existing.examples.extend(again.examples);
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

fn check_extends(vocabulary: &Vocabulary) -> Result<(), SchemaError> {
    let mut marks: BTreeMap<&str, Mark> = BTreeMap::new();
    for class in &vocabulary.classes {
        let mut path = Vec::new();
        visit(vocabulary, &class.name, &mut marks, &mut path)?;
    }
    for class in &vocabulary.classes {
        if let Some(ancestor) = vocabulary
            .ancestors(&class.name)
            .into_iter()
            .find(|a| class.disjoint_with.contains(&a.name))
        {
            return Err(SchemaError::Contradiction {
                class: class.name.clone(),
                ancestor: ancestor.name.clone(),
            });
        }
    }
    Ok(())
}

fn visit<'v>(
    vocabulary: &'v Vocabulary,
    name: &'v str,
    marks: &mut BTreeMap<&'v str, Mark>,
    path: &mut Vec<&'v str>,
) -> Result<(), SchemaError> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = path.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<&str> = path[start..].to_vec();
            cycle.push(name);
            return Err(SchemaError::ExtendsCycle {
                class: name.to_owned(),
                path: cycle.join(" -> "),
            });
        }
        None => {}
    }
    marks.insert(name, Mark::Visiting);
    path.push(name);
    if let Some(class) = vocabulary.find_class(name) {
        for parent in &class.extends {
            visit(vocabulary, parent, marks, path)?;
        }
    }
    path.pop();
    marks.insert(name, Mark::Done);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::registry::Registry;
    use serde_json::{json, Value};

    fn document(members: Value) -> Value {
        json!({
            "@context": [
                "http://www.w3.org/ns/json-ld",
                {
                    "xsd": "http://www.w3.org/2001/XMLSchema#",
                    "owl": "http://www.w3.org/2002/07/owl#",
                    "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                    "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
                    "foaf": "http://xmlns.com/foaf/0.1/",
                    "ex": "https://example.org/ns#"
                }
            ],
            "@id": "https://example.org/ns",
            "name": "Example",
            "members": members
        })
    }

    fn compile(members: Value) -> Result<Vocabulary, SpecError> {
        build(parse(&document(members), &Registry::standard())?)
    }

    fn class(id: &str, extends: &[&str], disjoint: &[&str]) -> Value {
        json!({
            "@id": id,
            "@type": "owl:Class",
            "rdfs:subClassOf": extends,
            "owl:disjointWith": disjoint
        })
    }

    #[test]
    fn kinds_keep_declaration_order_and_drop_foreign_references() {
        let v = compile(json!([
            class("ex:Foo", &[], &[]),
            {
                "@id": "ex:p",
                "@type": ["owl:ObjectProperty", "owl:FunctionalProperty"],
                "rdfs:domain": "ex:Foo",
                "rdfs:range": {"owl:unionOf": ["xsd:string", "ex:Foo", "foaf:Person", "xsd:string"]}
            }
        ]))
        .unwrap();
        let p = v.find_property("p").unwrap();
        let names: Vec<&str> = p.kinds.iter().map(Kind::name).collect();
        assert_eq!(names, ["string", "Foo"]);
        assert_eq!(p.cardinality, Cardinality::Functional);
        assert_eq!(v.find_class("Foo").unwrap().properties, ["p"]);
        assert_eq!(v.values.len(), 1);
    }

    #[test]
    fn cardinality_defaults_to_functional() {
        let v = compile(json!([
            {"@id": "ex:a", "@type": "rdf:Property", "rdfs:range": "xsd:boolean"},
            {"@id": "ex:b", "@type": "rdf:Property", "owl:maxCardinality": 5, "rdfs:range": "xsd:boolean"}
        ]))
        .unwrap();
        assert_eq!(v.find_property("a").unwrap().cardinality, Cardinality::Functional);
        assert_eq!(v.find_property("b").unwrap().cardinality, Cardinality::NonFunctional);
    }

    #[test]
    fn shared_properties_merge_domains() {
        let v = compile(json!([
            class("ex:A", &[], &[]),
            class("ex:B", &[], &[]),
            {"@id": "ex:name", "@type": "rdf:Property", "rdfs:domain": "ex:A", "rdfs:range": "xsd:string"},
            {"@id": "ex:name", "@type": "rdf:Property", "rdfs:domain": "ex:B", "rdfs:range": "xsd:string"}
        ]))
        .unwrap();
        assert_eq!(v.properties.len(), 1);
        assert_eq!(v.find_property("name").unwrap().domain, ["A", "B"]);
        assert_eq!(v.find_class("B").unwrap().properties, ["name"]);

        let err = compile(json!([
            {"@id": "ex:name", "@type": "rdf:Property", "rdfs:range": "xsd:string"},
            {"@id": "ex:name", "@type": "rdf:Property", "rdfs:range": "xsd:boolean"}
        ]))
        .unwrap_err();
        assert!(matches!(err, SpecError::Schema(SchemaError::ConflictingProperty(_))));
    }

    #[test]
    fn properties_cannot_shadow_the_instance_type() {
        let err = compile(json!([
            class("ex:Note", &[], &[]),
            {"@id": "ex:type", "@type": "rdf:Property", "rdfs:domain": "ex:Note", "rdfs:range": "xsd:string"}
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::Schema(SchemaError::ReservedProperty(ref name)) if name == "type"
        ));
        // Only the exact key is reserved
        assert!(compile(json!([
            {"@id": "ex:mediaType", "@type": "rdf:Property", "rdfs:range": "xsd:string"}
        ]))
        .is_ok());
    }

    #[test]
    fn extends_cycles_are_rejected() {
        let err = compile(json!([
            class("ex:A", &["ex:C"], &[]),
            class("ex:B", &["ex:A"], &[]),
            class("ex:C", &["ex:B"], &[])
        ]))
        .unwrap_err();
        match err {
            SpecError::Schema(SchemaError::ExtendsCycle { path, .. }) => {
                assert_eq!(path, "A -> C -> B -> A");
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn extending_a_disjoint_class_is_a_contradiction() {
        let err = compile(json!([
            class("ex:Base", &[], &[]),
            class("ex:Mid", &["ex:Base"], &[]),
            class("ex:Leaf", &["ex:Mid"], &["ex:Base"])
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::Schema(SchemaError::Contradiction { ref class, ref ancestor })
                if class == "Leaf" && ancestor == "Base"
        ));
    }

    #[test]
    fn unknown_local_references_are_fatal() {
        let err = compile(json!([
            {"@id": "ex:p", "@type": "rdf:Property", "rdfs:range": "ex:Missing"}
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::Schema(SchemaError::UnknownClass { ref reference, .. }) if reference == "Missing"
        ));
    }

    #[test]
    fn literal_domains_are_misplaced() {
        let err = compile(json!([
            {"@id": "ex:p", "@type": "rdf:Property", "rdfs:domain": "xsd:string"}
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::Schema(SchemaError::MisplacedReference { .. })
        ));
    }

    #[test]
    fn local_datatypes_resolve_after_classes() {
        let v = compile(json!([
            {"@id": "ex:mediaType", "@type": "rdfs:Datatype", "rdfs:subClassOf": "xsd:string"},
            {"@id": "ex:p", "@type": "rdf:Property", "rdfs:range": ["ex:mediaType", "xsd:float"]}
        ]))
        .unwrap();
        let p = v.find_property("p").unwrap();
        match &p.kinds[0] {
            Kind::Value(d) => {
                assert_eq!(d.name, "mediaType");
                assert_eq!(d.codec.kind, "string");
            }
            other => panic!("expected a literal kind, got {other:?}"),
        }
        assert_eq!(p.kind_index("float"), Some(1));
    }
}
