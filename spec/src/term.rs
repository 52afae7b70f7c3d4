//! Terms: the named delegates an ontology exposes to the schema parser.
//!
//! While walking a member, the parser hands every key it recognizes to the
//! key's [`Term`]. Scalars and arrays go to [`Term::apply`]; nested objects
//! are bracketed by [`Term::enter`] and [`Term::exit`]. Leaf terms only
//! implement `apply` and refuse to enter or exit.
//!
//! Terms named in value position (the `xsd:string` in a range, the
//! `owl:Class` in an `@type`) are applied too: they record a [`Reference`]
//! in the innermost frame, which the enclosing term collects on exit.

use std::fmt;

use serde_json::Value;

use crate::error::SpecError;
use crate::model::Cardinality;
use crate::parser::{Frame, ParsingContext};
use crate::values::LiteralKindDescriptor;

/// What the parser should do with a nested object after [`Term::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// Walk the object's keys as terms.
    Walk,
    /// Keep the object verbatim in the frame.
    Capture,
}

/// A named reference delegate.
pub trait Term: fmt::Debug + Send + Sync {
    /// Called before the parser descends into a nested object under `key`.
    ///
    /// # Errors
    ///
    /// The default refuses with [`SpecError::LeafTraversal`].
    fn enter(&self, key: &str, ctx: &mut ParsingContext<'_>) -> Result<Descent, SpecError> {
        let _ = ctx;
        Err(SpecError::LeafTraversal(key.to_owned()))
    }

    /// Called with the finished frame after the nested object under `key`.
    ///
    /// # Errors
    ///
    /// The default refuses with [`SpecError::LeafTraversal`].
    fn exit(&self, key: &str, frame: Frame, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let _ = (frame, ctx);
        Err(SpecError::LeafTraversal(key.to_owned()))
    }

    /// Called with a scalar or array value under `key`, or with the term's
    /// own name when it appears in value position.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if the value has the wrong shape for the term.
    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError>;
}

/// The role a type marker gives a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Marker {
    /// `owl:Class`, `rdfs:Class`.
    Class,
    /// `rdf:Property`, `owl:ObjectProperty`, `owl:DatatypeProperty`.
    Property,
    /// `owl:FunctionalProperty`.
    Functional,
    /// `rdfs:Datatype`.
    Datatype,
}

/// A resolved reference found in value position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A term of the vocabulary being compiled, by local name.
    Local(String),
    /// A registered literal kind, by IRI.
    Literal(String),
    /// A type marker.
    Marker(Marker),
    /// Anything in another vocabulary, by IRI (or compact form if the
    /// prefix is unknown).
    Foreign(String),
}

/// Relations between members that carry references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `rdfs:domain`.
    Domain,
    /// `rdfs:range`.
    Range,
    /// `rdfs:subClassOf`.
    SubClassOf,
    /// `owl:disjointWith`.
    DisjointWith,
    /// `owl:unionOf`: hands its members to the enclosing relation.
    UnionOf,
    /// `owl:equivalentClass`: parsed and ignored.
    EquivalentClass,
}

/// Documentation fields a member can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Human-readable name.
    Label,
    /// Description.
    Comment,
    /// Related resource.
    SeeAlso,
}

/// `@id` / `id`: names the member, or references another term when nested.
#[derive(Debug, Default)]
pub struct IdTerm;

impl Term for IdTerm {
    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let Some(text) = value.as_str() else {
            return Err(SpecError::Document(format!("{key} must be a string")));
        };
        if ctx.at_member_level() {
            ctx.node_mut()?.id = Some(text.to_owned());
            Ok(())
        } else {
            ctx.apply_reference(text)
        }
    }
}

/// `@type` / `type` / `rdf:type`: collects the member's type markers.
#[derive(Debug, Default)]
pub struct TypeTerm;

impl Term for TypeTerm {
    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let frame = ctx.with_frame(key, |ctx| {
            for text in strings(value) {
                ctx.apply_reference(text)?;
            }
            Ok(())
        })?;
        let node = ctx.node_mut()?;
        for reference in frame.collected {
            match reference {
                Reference::Marker(m) if !node.markers.contains(&m) => node.markers.push(m),
                Reference::Marker(_) => {}
                Reference::Local(name) | Reference::Literal(name) | Reference::Foreign(name) => {
                    node.other_types.push(name);
                }
            }
        }
        Ok(())
    }
}

/// A type marker such as `owl:Class`; only meaningful in value position.
#[derive(Debug)]
pub struct MarkerTerm {
    marker: Marker,
}

impl MarkerTerm {
    /// Creates a marker term.
    #[must_use]
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl Term for MarkerTerm {
    fn apply(&self, _key: &str, _value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        ctx.collect(Reference::Marker(self.marker));
        Ok(())
    }
}

/// A class defined by a built-in ontology, such as `owl:Thing`.
#[derive(Debug)]
pub struct ClassTerm {
    uri: String,
}

impl ClassTerm {
    /// Creates a class term.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl Term for ClassTerm {
    fn apply(&self, _key: &str, _value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        ctx.collect(Reference::Foreign(self.uri.clone()));
        Ok(())
    }
}

/// A primitive literal kind.
///
/// Applying it registers its descriptor with the parsing context, which
/// keeps the first registration and ignores identical repeats.
#[derive(Debug)]
pub struct LiteralKindTerm {
    descriptor: LiteralKindDescriptor,
}

impl LiteralKindTerm {
    /// Creates a literal kind term.
    #[must_use]
    pub fn new(descriptor: LiteralKindDescriptor) -> Self {
        Self { descriptor }
    }

    /// Returns the kind's descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &LiteralKindDescriptor {
        &self.descriptor
    }
}

impl Term for LiteralKindTerm {
    fn apply(&self, _key: &str, _value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        ctx.register_value(&self.descriptor)?;
        ctx.collect(Reference::Literal(self.descriptor.uri.clone()));
        Ok(())
    }
}

/// A documentation field: label, comment, or related link.
#[derive(Debug)]
pub struct AnnotationTerm {
    uri: String,
    annotation: Annotation,
}

impl AnnotationTerm {
    /// Creates an annotation term.
    #[must_use]
    pub fn new(uri: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            uri: uri.into(),
            annotation,
        }
    }

    fn record(&self, ctx: &mut ParsingContext<'_>, texts: Vec<String>) -> Result<(), SpecError> {
        let node = ctx.node_mut()?;
        let mut texts = texts.into_iter();
        match self.annotation {
            Annotation::Label => {
                if node.label.is_none() {
                    node.label = texts.next();
                }
            }
            Annotation::Comment => {
                if node.comment.is_none() {
                    node.comment = texts.next();
                }
            }
            Annotation::SeeAlso => node.see_also.extend(texts),
        }
        Ok(())
    }
}

impl Term for AnnotationTerm {
    fn enter(&self, _key: &str, _ctx: &mut ParsingContext<'_>) -> Result<Descent, SpecError> {
        Ok(Descent::Capture)
    }

    fn exit(&self, _key: &str, frame: Frame, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let text = frame.captured.as_ref().and_then(preferred_text);
        self.record(ctx, text.into_iter().collect())
    }

    fn apply(&self, _key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        if !ctx.at_member_level() {
            ctx.collect(Reference::Foreign(self.uri.clone()));
            return Ok(());
        }
        let texts = strings(value).map(str::to_owned).collect();
        self.record(ctx, texts)
    }
}

/// A relation whose value is one or more references.
#[derive(Debug)]
pub struct RelationTerm {
    uri: String,
    relation: Relation,
}

impl RelationTerm {
    /// Creates a relation term.
    #[must_use]
    pub fn new(uri: impl Into<String>, relation: Relation) -> Self {
        Self {
            uri: uri.into(),
            relation,
        }
    }

    fn finish(&self, frame: Frame, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        match self.relation {
            Relation::UnionOf => {
                for r in frame.collected {
                    ctx.collect(r);
                }
                Ok(())
            }
            Relation::EquivalentClass => {
                log::debug!("ignoring {} on {:?}", self.uri, ctx.node_mut()?.id);
                Ok(())
            }
            relation => {
                ctx.node_mut()?.push_references(relation, frame.collected);
                Ok(())
            }
        }
    }
}

impl Term for RelationTerm {
    fn enter(&self, _key: &str, _ctx: &mut ParsingContext<'_>) -> Result<Descent, SpecError> {
        Ok(Descent::Walk)
    }

    fn exit(&self, _key: &str, frame: Frame, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        self.finish(frame, ctx)
    }

    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let frame = ctx.with_frame(key, |ctx| {
            let items = match value {
                Value::Array(items) => items.as_slice(),
                other => std::slice::from_ref(other),
            };
            for item in items {
                match item {
                    Value::String(text) => ctx.apply_reference(text)?,
                    Value::Object(map) => ctx.walk_object(map)?,
                    other => {
                        return Err(SpecError::Document(format!(
                            "{key} holds {other}, expected references"
                        )))
                    }
                }
            }
            Ok(())
        })?;
        self.finish(frame, ctx)
    }
}

/// `schema:example`: captured verbatim.
#[derive(Debug, Default)]
pub struct ExampleTerm;

impl Term for ExampleTerm {
    fn enter(&self, _key: &str, _ctx: &mut ParsingContext<'_>) -> Result<Descent, SpecError> {
        Ok(Descent::Capture)
    }

    fn exit(&self, _key: &str, frame: Frame, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        if let Some(example) = frame.captured {
            ctx.node_mut()?.examples.push(example);
        }
        Ok(())
    }

    fn apply(&self, _key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let node = ctx.node_mut()?;
        match value {
            Value::Array(items) => node.examples.extend(items.iter().cloned()),
            other => node.examples.push(other.clone()),
        }
        Ok(())
    }
}

/// `owl:maxCardinality`: `1` makes a property functional, a larger number
/// or `"*"` makes it non-functional.
#[derive(Debug, Default)]
pub struct CardinalityTerm;

impl Term for CardinalityTerm {
    fn apply(&self, key: &str, value: &Value, ctx: &mut ParsingContext<'_>) -> Result<(), SpecError> {
        let cardinality = match value {
            Value::Number(n) if n.as_u64() == Some(1) => Cardinality::Functional,
            Value::Number(n) if n.as_u64().is_some_and(|n| n > 1) => Cardinality::NonFunctional,
            Value::String(s) if s == "*" => Cardinality::NonFunctional,
            other => {
                return Err(SpecError::Document(format!(
                    "{key} must be a positive integer or \"*\", found {other}"
                )))
            }
        };
        ctx.node_mut()?.cardinality = Some(cardinality);
        Ok(())
    }
}

/// Iterates over the strings in a scalar or array value.
fn strings(value: &Value) -> impl Iterator<Item = &str> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    items.iter().filter_map(Value::as_str)
}

/// Picks the text to keep from a language map or value object: English
/// first, then `@value`, then any string.
fn preferred_text(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    ["en", "@value"]
        .iter()
        .find_map(|k| map.get(*k).and_then(Value::as_str))
        .or_else(|| map.values().find_map(Value::as_str))
        .map(str::to_owned)
}
