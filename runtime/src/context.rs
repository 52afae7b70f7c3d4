//! JSON-LD context bookkeeping: which alias each vocabulary uses in a
//! document, and how property keys are qualified.

use std::collections::BTreeMap;

use crate::types::TypeTable;

/// Mapping from vocabulary base IRI to the alias a value uses for it.
pub type JsonLdContext = BTreeMap<String, String>;

/// Mapping from canonical vocabulary IRI to the alias a document declares.
pub type AliasMap = BTreeMap<String, String>;

/// Merges `other` into `target`; keys already present in `target` win.
pub fn merge_context(target: &mut JsonLdContext, other: JsonLdContext) {
    for (uri, alias) in other {
        target.entry(uri).or_insert(alias);
    }
}

/// Strips a trailing `#` or `/` so `https://example.org/ns#` and
/// `https://example.org/ns` name the same vocabulary.
#[must_use]
pub fn canonical_uri(uri: &str) -> &str {
    uri.trim_end_matches(|c| c == '#' || c == '/')
}

/// Returns the alias `aliases` declares for `uri`, or `""`.
#[must_use]
pub fn alias_for<'a>(aliases: &'a AliasMap, uri: &str) -> &'a str {
    aliases
        .get(canonical_uri(uri))
        .map(String::as_str)
        .unwrap_or("")
}

/// Returns `name`, prefixed with `alias:` when an alias is active.
#[must_use]
pub fn qualified_key(alias: &str, name: &str) -> String {
    if alias.is_empty() {
        name.to_owned()
    } else {
        format!("{alias}:{name}")
    }
}

/// Everything value decoding needs besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    /// Types available for nested aggregates.
    pub table: &'a TypeTable,
    /// Aliases declared by the enclosing document.
    pub aliases: &'a AliasMap,
}
