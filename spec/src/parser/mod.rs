//! Schema document parser.
//!
//! The root header (`@context`, `@id`, `name`, `members`) is decoded with
//! serde; members are then walked key by key through a [`ParsingContext`],
//! which asks the [`Registry`] to resolve every term.

mod context;
mod draft;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SpecError;
use crate::registry::Registry;
use crate::values::LiteralKindDescriptor;

pub use context::{Frame, ParsingContext};
pub use draft::NodeDraft;

#[derive(Debug, Deserialize)]
struct RootHeader {
    #[serde(rename = "@context", default)]
    context: Option<Value>,
    #[serde(rename = "@id")]
    id: String,
    name: String,
    #[serde(default)]
    members: Vec<Value>,
}

/// Parser output: one draft per recognized member plus the literal kinds the
/// members referenced.
#[derive(Debug, Clone)]
pub struct ParsedVocabulary {
    /// Vocabulary name.
    pub name: String,
    /// Base IRI.
    pub uri: String,
    /// Prefix the document uses for its own terms.
    pub alias: String,
    /// Drafts of class, property, and datatype members in document order.
    pub nodes: Vec<NodeDraft>,
    /// Members without a recognized type, verbatim.
    pub passthrough: Vec<Value>,
    /// Every literal kind applied during the walk, by IRI.
    pub values: BTreeMap<String, LiteralKindDescriptor>,
    /// Local datatype names and the IRI of the kind each one registered.
    pub local_values: BTreeMap<String, String>,
}

/// Parses a schema document.
///
/// # Errors
///
/// Returns [`SpecError::Json`] if the root header is missing or malformed,
/// [`SpecError::Document`] for members that are not objects, and any error a
/// term reports while walking a member.
pub fn parse(document: &Value, registry: &Registry) -> Result<ParsedVocabulary, SpecError> {
    let header = RootHeader::deserialize(document)?;
    let mut ctx = ParsingContext::new(registry, &header.id)?;
    if let Some(context) = &header.context {
        ctx.load_context(context)?;
    }

    let mut nodes = Vec::new();
    let mut passthrough = Vec::new();
    for (position, member) in header.members.iter().enumerate() {
        let Value::Object(map) = member else {
            return Err(SpecError::Document(format!(
                "member {position} is not an object"
            )));
        };
        ctx.begin_member(map.get("@context"))?;
        let walked = ctx.walk_object(map);
        let draft = ctx.finish_member()?;
        walked?;

        if draft.is_datatype() {
            ctx.load_local_elements(&draft)?;
        } else if !draft.is_class() && !draft.is_property() {
            log::warn!(
                "member {} has no recognized type; keeping it as passthrough",
                draft.id.as_deref().unwrap_or("<anonymous>")
            );
            passthrough.push(member.clone());
            continue;
        }
        nodes.push(draft);
    }

    log::info!(
        "parsed {} ({} members, {} passthrough)",
        header.name,
        nodes.len(),
        passthrough.len()
    );
    let (alias, values, local_values) = ctx.into_parts();
    Ok(ParsedVocabulary {
        name: header.name,
        uri: header.id,
        alias,
        nodes,
        passthrough,
        values,
        local_values,
    })
}

/// Parses a schema document from JSON text.
///
/// # Errors
///
/// Returns [`SpecError::Json`] for invalid JSON, otherwise as [`parse`].
pub fn parse_str(text: &str, registry: &Registry) -> Result<ParsedVocabulary, SpecError> {
    let document: Value = serde_json::from_str(text)?;
    parse(&document, registry)
}
