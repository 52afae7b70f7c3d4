//! Whole JSON-LD documents: an aggregate plus its `@context`.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::aggregate::{declared_types, local_name, Aggregate};
use crate::context::{canonical_uri, AliasMap, DecodeContext, JsonLdContext};
use crate::error::DocumentError;
use crate::iri::Iri;
use crate::types::TypeTable;

/// Encodes `aggregate` as a top-level document with an `@context` entry.
///
/// Vocabularies without an alias appear as bare IRIs; aliased ones as
/// `{alias: iri}` objects. A single entry is written without an array.
///
/// # Errors
///
/// Returns [`DocumentError::Codec`] if a held value cannot be encoded.
pub fn serialize(aggregate: &Aggregate) -> Result<Value, DocumentError> {
    let Value::Object(body) = aggregate.serialize()? else {
        return Err(DocumentError::NotAnObject);
    };
    let mut map = Map::new();
    map.insert("@context".to_owned(), context_value(&aggregate.json_ld_context()));
    map.extend(body);
    Ok(Value::Object(map))
}

fn context_value(ctx: &JsonLdContext) -> Value {
    let mut entries: Vec<Value> = ctx
        .iter()
        .map(|(uri, alias)| {
            if alias.is_empty() {
                Value::String(uri.clone())
            } else {
                let mut m = Map::new();
                m.insert(alias.clone(), Value::String(uri.clone()));
                Value::Object(m)
            }
        })
        .collect();
    if entries.len() == 1 {
        entries.pop().unwrap_or(Value::Null)
    } else {
        Value::Array(entries)
    }
}

/// Reads the vocabulary aliases a document's `@context` declares.
///
/// Bare IRI strings map to the empty alias. Object entries whose value is an
/// absolute IRI map to their key; compact values such as `"as:Public"` that
/// use a prefix declared alongside them are term definitions and skipped.
#[must_use]
pub fn read_aliases(context: &Value) -> AliasMap {
    let mut aliases = AliasMap::new();
    collect_aliases(context, &mut aliases);
    aliases
}

fn collect_aliases(context: &Value, aliases: &mut AliasMap) {
    match context {
        Value::String(uri) => {
            aliases
                .entry(canonical_uri(uri).to_owned())
                .or_default();
        }
        Value::Array(items) => {
            for item in items {
                collect_aliases(item, aliases);
            }
        }
        Value::Object(entries) => {
            for (alias, value) in entries {
                let Some(uri) = value.as_str() else { continue };
                let scheme = uri.split(':').next().unwrap_or_default();
                if entries.contains_key(scheme) || Iri::parse(uri).is_err() {
                    continue;
                }
                aliases
                    .entry(canonical_uri(uri).to_owned())
                    .or_insert_with(|| alias.clone());
            }
        }
        _ => {}
    }
}

/// Decodes a top-level document, dispatching on its declared type.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] for a non-object root,
/// [`DocumentError::MissingType`] if no type is declared, and
/// [`DocumentError::UnknownType`] if no declared type is in `table`.
pub fn deserialize(value: &Value, table: &TypeTable) -> Result<Aggregate, DocumentError> {
    let map = value.as_object().ok_or(DocumentError::NotAnObject)?;
    let declared = declared_types(map);
    let first = declared.first().ok_or(DocumentError::MissingType)?;
    let class = declared
        .iter()
        .find_map(|t| table.class(local_name(t)))
        .ok_or_else(|| DocumentError::UnknownType((*first).to_owned()))?;
    let aliases = map.get("@context").map(read_aliases).unwrap_or_default();
    let ctx = DecodeContext {
        table,
        aliases: &aliases,
    };
    Aggregate::deserialize(Arc::clone(class), map, &ctx)
}
