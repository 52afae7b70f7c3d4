//! The parsing context: a stack of frames over the schema document.
//!
//! Each frame remembers the key that opened it and the terms and prefixes
//! its `@context` brought into scope. Name lookups search from the innermost
//! frame outwards. References applied inside a frame accumulate in it until
//! the term that opened the frame collects them.

use std::collections::BTreeMap;
use std::sync::Arc;

use ontogen_runtime::context::canonical_uri;
use serde_json::{Map, Value};

use crate::error::SpecError;
use crate::model::iris;
use crate::registry::{NamedTerm, Registry};
use crate::term::{Descent, Reference, Term};
use crate::values::LiteralKindDescriptor;

use super::draft::NodeDraft;

#[derive(Debug, Default)]
struct Scope {
    terms: BTreeMap<String, Arc<dyn Term>>,
    prefixes: BTreeMap<String, String>,
}

/// One level of the traversal stack.
#[derive(Debug)]
pub struct Frame {
    /// The key that opened the frame.
    pub key: String,
    /// References applied while the frame was open.
    pub collected: Vec<Reference>,
    /// The verbatim object, when the opening term asked for a capture.
    pub captured: Option<Value>,
    member: bool,
    scope: Scope,
}

impl Frame {
    fn new(key: &str, member: bool) -> Self {
        Self {
            key: key.to_owned(),
            collected: Vec::new(),
            captured: None,
            member,
            scope: Scope::default(),
        }
    }
}

/// Traversal state shared by the parser and the terms it calls.
#[derive(Debug)]
pub struct ParsingContext<'r> {
    registry: &'r Registry,
    vocabulary_uri: String,
    vocabulary_alias: String,
    frames: Vec<Frame>,
    node: Option<NodeDraft>,
    values: BTreeMap<String, LiteralKindDescriptor>,
    local_values: BTreeMap<String, String>,
}

impl<'r> ParsingContext<'r> {
    /// Creates a context for the vocabulary at `vocabulary_uri`, with the
    /// JSON-LD keywords in scope.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::OntologyNotFound`] if `registry` lacks the
    /// JSON-LD keyword ontology.
    pub fn new(registry: &'r Registry, vocabulary_uri: &str) -> Result<Self, SpecError> {
        let mut root = Frame::new("@root", false);
        for named in registry.resolve_alias(iris::JSONLD, "")? {
            root.scope.terms.insert(named.name, named.term);
        }
        Ok(Self {
            registry,
            vocabulary_uri: vocabulary_uri.to_owned(),
            vocabulary_alias: String::new(),
            frames: vec![root],
            node: None,
            values: BTreeMap::new(),
            local_values: BTreeMap::new(),
        })
    }

    /// The registry terms are resolved against.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Base IRI of the vocabulary being parsed.
    #[must_use]
    pub fn vocabulary_uri(&self) -> &str {
        &self.vocabulary_uri
    }

    /// Prefix the document uses for the vocabulary's own terms, or `""`.
    #[must_use]
    pub fn vocabulary_alias(&self) -> &str {
        &self.vocabulary_alias
    }

    /// Full IRI of the vocabulary's term `name`.
    #[must_use]
    pub fn local_uri(&self, name: &str) -> String {
        if self.vocabulary_uri.ends_with(['#', '/']) {
            format!("{}{name}", self.vocabulary_uri)
        } else {
            format!("{}#{name}", self.vocabulary_uri)
        }
    }

    /// Brings the entries of a `@context` value into the innermost frame.
    ///
    /// Full IRIs of registered ontologies load every term under the entry's
    /// key; compact values such as `"rdfs:label"` bind one term to the key;
    /// the vocabulary's own IRI sets its alias. Other IRIs are remembered as
    /// prefixes whose references are foreign.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Document`] for entries that are neither strings
    /// nor objects with an `@id`.
    pub fn load_context(&mut self, context: &Value) -> Result<(), SpecError> {
        match context {
            Value::String(uri) => {
                self.load_ontology(uri, "");
                Ok(())
            }
            Value::Array(items) => items.iter().try_for_each(|item| self.load_context(item)),
            Value::Object(entries) => {
                let mut compact = Vec::new();
                for (key, value) in entries {
                    let target = match value {
                        Value::String(s) => s.as_str(),
                        Value::Object(def) => match def.get("@id").and_then(Value::as_str) {
                            Some(id) => id,
                            None => continue,
                        },
                        other => {
                            return Err(SpecError::Document(format!(
                                "@context entry {key} holds {other}"
                            )))
                        }
                    };
                    if is_absolute(target) {
                        self.load_ontology(target, key);
                    } else {
                        compact.push((key.as_str(), target));
                    }
                }
                for (key, target) in compact {
                    self.bind_compact(key, target);
                }
                Ok(())
            }
            Value::Null => Ok(()),
            other => Err(SpecError::Document(format!("@context holds {other}"))),
        }
    }

    fn load_ontology(&mut self, uri: &str, alias: &str) {
        if canonical_uri(uri) == canonical_uri(&self.vocabulary_uri) {
            if self.vocabulary_alias.is_empty() {
                self.vocabulary_alias = alias.to_owned();
            }
            self.add_prefix(alias, uri);
            return;
        }
        match self.registry.resolve_alias(uri, alias) {
            Ok(terms) => {
                log::debug!("loaded {uri} as {alias:?}");
                self.add_terms(terms);
                self.add_prefix(alias, uri);
            }
            Err(_) => {
                log::warn!("no ontology is registered for {uri}; references through it are dropped");
                self.add_prefix(alias, uri);
            }
        }
    }

    fn bind_compact(&mut self, key: &str, target: &str) {
        let Some((prefix, local)) = target.split_once(':') else {
            log::debug!("ignoring @context entry {key}: {target}");
            return;
        };
        let Some(uri) = self.prefix(prefix).map(str::to_owned) else {
            log::warn!("@context entry {key} uses unknown prefix {prefix}");
            return;
        };
        match self.registry.resolve_specific(&uri, key, local) {
            Ok(terms) => self.add_terms(terms),
            Err(err) => log::debug!("@context entry {key} stays unresolved: {err}"),
        }
    }

    fn add_terms(&mut self, terms: Vec<NamedTerm>) {
        if let Some(frame) = self.frames.last_mut() {
            for named in terms {
                frame.scope.terms.insert(named.name, named.term);
            }
        }
    }

    fn add_prefix(&mut self, alias: &str, uri: &str) {
        if alias.is_empty() {
            return;
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.scope.prefixes.insert(alias.to_owned(), uri.to_owned());
        }
    }

    fn prefix(&self, prefix: &str) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.scope.prefixes.get(prefix))
            .map(String::as_str)
    }

    /// Finds the term a key or value names, innermost scope first, then by
    /// absolute IRI.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Term>> {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.scope.terms.get(name))
            .cloned()
            .or_else(|| {
                if is_absolute(name) {
                    self.registry.find_term(name)
                } else {
                    None
                }
            })
    }

    /// Opens a nested frame.
    pub fn push_frame(&mut self, key: &str) {
        self.frames.push(Frame::new(key, false));
    }

    /// Closes the innermost frame.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Document`] if only the root frame is left.
    pub fn pop_frame(&mut self) -> Result<Frame, SpecError> {
        if self.frames.len() <= 1 {
            return Err(SpecError::Document("unbalanced traversal".into()));
        }
        self.frames
            .pop()
            .ok_or_else(|| SpecError::Document("unbalanced traversal".into()))
    }

    /// Runs `f` inside a fresh frame and returns the closed frame.
    ///
    /// # Errors
    ///
    /// Returns the first error from `f`; the frame is closed either way.
    pub fn with_frame(
        &mut self,
        key: &str,
        f: impl FnOnce(&mut Self) -> Result<(), SpecError>,
    ) -> Result<Frame, SpecError> {
        self.push_frame(key);
        let result = f(self);
        let frame = self.pop_frame()?;
        result.map(|()| frame)
    }

    /// Returns true if the innermost frame is a member's own frame.
    #[must_use]
    pub fn at_member_level(&self) -> bool {
        self.frames.last().is_some_and(|f| f.member)
    }

    /// The draft of the member being walked.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Document`] outside a member.
    pub fn node_mut(&mut self) -> Result<&mut NodeDraft, SpecError> {
        self.node
            .as_mut()
            .ok_or_else(|| SpecError::Document("term used outside a member".into()))
    }

    /// Records a reference in the innermost frame.
    pub fn collect(&mut self, reference: Reference) {
        if let Some(frame) = self.frames.last_mut() {
            frame.collected.push(reference);
        }
    }

    /// Stores a verbatim value in the innermost frame.
    pub fn capture(&mut self, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.captured = Some(value);
        }
    }

    /// Applies the term `text` names, or records it as a local or foreign
    /// reference when no registered term claims it.
    ///
    /// # Errors
    ///
    /// Returns whatever the named term's `apply` returns.
    pub fn apply_reference(&mut self, text: &str) -> Result<(), SpecError> {
        match self.lookup(text) {
            Some(term) => term.apply(text, &Value::String(text.to_owned()), self),
            None => {
                let reference = self.classify(text);
                self.collect(reference);
                Ok(())
            }
        }
    }

    fn classify(&self, text: &str) -> Reference {
        if let Some((prefix, local)) = text.split_once(':') {
            if !local.starts_with("//") {
                if let Some(uri) = self.prefix(prefix) {
                    if canonical_uri(uri) == canonical_uri(&self.vocabulary_uri) {
                        return Reference::Local(local.to_owned());
                    }
                    return Reference::Foreign(format!("{uri}{local}"));
                }
            }
            if is_absolute(text) {
                let base = canonical_uri(&self.vocabulary_uri);
                let local = text
                    .strip_prefix(base)
                    .and_then(|rest| rest.strip_prefix('#').or_else(|| rest.strip_prefix('/')))
                    .filter(|local| !local.is_empty());
                return match local {
                    Some(local) => Reference::Local(local.to_owned()),
                    None => Reference::Foreign(text.to_owned()),
                };
            }
            log::warn!("reference {text} uses an undeclared prefix");
            return Reference::Foreign(text.to_owned());
        }
        Reference::Local(text.to_owned())
    }

    /// Local name of a member `@id`.
    #[must_use]
    pub fn local_name(&self, id: &str) -> String {
        match self.classify(id) {
            Reference::Local(name) => name,
            _ => id
                .rsplit([':', '#', '/'])
                .next()
                .unwrap_or(id)
                .to_owned(),
        }
    }

    /// Full IRI of a member `@id`.
    #[must_use]
    pub fn expand(&self, id: &str) -> String {
        match self.classify(id) {
            Reference::Local(name) => self.local_uri(&name),
            Reference::Foreign(uri) | Reference::Literal(uri) => uri,
            Reference::Marker(_) => id.to_owned(),
        }
    }

    /// Registers a literal kind. Registering the same kind again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DuplicateLiteral`] if the IRI is already
    /// registered with a different codec.
    pub fn register_value(&mut self, descriptor: &LiteralKindDescriptor) -> Result<(), SpecError> {
        match self.values.get(&descriptor.uri) {
            Some(existing) if existing.codec.kind == descriptor.codec.kind => {
                log::debug!("literal kind {} already registered", descriptor.uri);
                Ok(())
            }
            Some(existing) => Err(SpecError::DuplicateLiteral {
                uri: descriptor.uri.clone(),
                first: existing.codec.kind,
                second: descriptor.codec.kind,
            }),
            None => {
                self.values
                    .insert(descriptor.uri.clone(), descriptor.clone());
                Ok(())
            }
        }
    }

    /// Looks up a registered literal kind by IRI.
    #[must_use]
    pub fn value(&self, uri: &str) -> Option<&LiteralKindDescriptor> {
        self.values.get(uri)
    }

    /// Walks every key of a nested object as a term.
    ///
    /// # Errors
    ///
    /// Returns the first error a term reports.
    pub fn walk_object(&mut self, map: &Map<String, Value>) -> Result<(), SpecError> {
        for (key, value) in map {
            self.walk_entry(key, value)?;
        }
        Ok(())
    }

    /// Hands one key and its value to the key's term. Unclaimed keys of a
    /// member are kept as passthrough entries.
    ///
    /// # Errors
    ///
    /// Returns the first error a term reports.
    pub fn walk_entry(&mut self, key: &str, value: &Value) -> Result<(), SpecError> {
        if key == "@context" {
            return Ok(());
        }
        let Some(term) = self.lookup(key) else {
            self.record_unknown(key, value);
            return Ok(());
        };
        match value {
            Value::Object(map) => {
                let descent = term.enter(key, self)?;
                self.push_frame(key);
                let walked = match descent {
                    Descent::Walk => self.walk_object(map),
                    Descent::Capture => {
                        self.capture(value.clone());
                        Ok(())
                    }
                };
                let frame = self.pop_frame()?;
                walked?;
                term.exit(key, frame, self)
            }
            other => term.apply(key, other, self),
        }
    }

    fn record_unknown(&mut self, key: &str, value: &Value) {
        match self.node.as_mut() {
            Some(node) if self.frames.last().is_some_and(|f| f.member) => {
                log::debug!("keeping unrecognized key {key} as passthrough");
                node.unknown.insert(key.to_owned(), value.clone());
            }
            _ => log::debug!("dropping unrecognized nested key {key}"),
        }
    }

    /// Opens a member's frame, loading its scoped `@context` if any.
    ///
    /// # Errors
    ///
    /// Returns the error [`ParsingContext::load_context`] reports.
    pub fn begin_member(&mut self, context: Option<&Value>) -> Result<(), SpecError> {
        self.frames.push(Frame::new("@member", true));
        self.node = Some(NodeDraft::default());
        match context {
            Some(context) => self.load_context(context),
            None => Ok(()),
        }
    }

    /// Closes the member's frame and returns its draft with name and IRI
    /// derived from its `@id`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Document`] if no member is open.
    pub fn finish_member(&mut self) -> Result<NodeDraft, SpecError> {
        if !self.at_member_level() {
            return Err(SpecError::Document("unbalanced member traversal".into()));
        }
        let mut draft = self
            .node
            .take()
            .ok_or_else(|| SpecError::Document("no member is open".into()))?;
        if let Some(id) = draft.id.as_deref() {
            draft.name = Some(self.local_name(id));
            draft.uri = Some(self.expand(id));
        }
        self.pop_frame()?;
        Ok(draft)
    }

    /// Asks every ontology for the terms a local datatype member defines and
    /// registers the literal kinds they carry under the member's name.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Document`] for a datatype without `@id`, or the
    /// error an ontology reports.
    pub fn load_local_elements(&mut self, draft: &NodeDraft) -> Result<(), SpecError> {
        let name = draft
            .name
            .clone()
            .ok_or_else(|| SpecError::Document("datatype member has no @id".into()))?;
        let registry = self.registry;
        for ontology in registry.iter() {
            for named in ontology.load_local_element(&name, draft, self)? {
                let frame = self.with_frame(&named.name, |ctx| {
                    named
                        .term
                        .apply(&named.name, &Value::String(named.name.clone()), ctx)
                })?;
                for reference in frame.collected {
                    if let Reference::Literal(uri) = reference {
                        self.local_values.insert(named.name.clone(), uri);
                    }
                }
            }
        }
        Ok(())
    }

    /// Consumes the context, returning the vocabulary alias, every
    /// registered literal kind by IRI, and local datatype names by IRI.
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        String,
        BTreeMap<String, LiteralKindDescriptor>,
        BTreeMap<String, String>,
    ) {
        (self.vocabulary_alias, self.values, self.local_values)
    }
}

fn is_absolute(text: &str) -> bool {
    text.contains("://") || text.starts_with("urn:")
}
