//! Instances of vocabulary classes.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::context::{alias_for, merge_context, qualified_key, DecodeContext, JsonLdContext};
use crate::error::{CodecError, DocumentError};
use crate::functional::FunctionalProperty;
use crate::sequence::NonFunctionalProperty;
use crate::types::{ClassType, PropertyType};

/// Keys an aggregate consumes itself rather than routing to a property.
///
/// No property may be named after one of these.
pub const RESERVED_KEYS: [&str; 3] = ["type", "@type", "@context"];

/// One property slot of an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A cardinality-one property.
    Functional(FunctionalProperty),
    /// A cardinality-many property.
    NonFunctional(NonFunctionalProperty),
}

impl PropertyValue {
    /// Creates an empty slot shaped by the property's cardinality.
    #[must_use]
    pub fn new(ty: Arc<PropertyType>) -> Self {
        if ty.functional {
            PropertyValue::Functional(FunctionalProperty::new(ty))
        } else {
            PropertyValue::NonFunctional(NonFunctionalProperty::new(ty))
        }
    }

    /// Returns the property's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            PropertyValue::Functional(p) => p.name(),
            PropertyValue::NonFunctional(p) => p.name(),
        }
    }

    /// Returns true if the slot holds nothing worth serializing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            PropertyValue::Functional(p) => p.is_empty(),
            PropertyValue::NonFunctional(p) => p.is_empty(),
        }
    }

    /// Returns the wire key.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            PropertyValue::Functional(p) => p.key(),
            PropertyValue::NonFunctional(p) => p.key(),
        }
    }

    /// Sets the alias in use for the property's vocabulary.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        match self {
            PropertyValue::Functional(p) => p.set_alias(alias),
            PropertyValue::NonFunctional(p) => p.set_alias(alias),
        }
    }

    /// Returns the slot's context map.
    #[must_use]
    pub fn json_ld_context(&self) -> JsonLdContext {
        match self {
            PropertyValue::Functional(p) => p.json_ld_context(),
            PropertyValue::NonFunctional(p) => p.json_ld_context(),
        }
    }

    /// Encodes the slot.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] of the first value that fails to encode.
    pub fn serialize(&self) -> Result<Value, CodecError> {
        match self {
            PropertyValue::Functional(p) => p.serialize(),
            PropertyValue::NonFunctional(p) => p.serialize(),
        }
    }

    /// Canonical order between two slots of the same cardinality.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Functional(a), PropertyValue::Functional(b)) => a.less_than(b),
            (PropertyValue::NonFunctional(a), PropertyValue::NonFunctional(b)) => a.less_than(b),
            _ => false,
        }
    }

    /// Decodes a slot shaped by the property's cardinality.
    #[must_use]
    pub fn deserialize(ty: Arc<PropertyType>, value: &Value, ctx: &DecodeContext<'_>) -> Self {
        if ty.functional {
            PropertyValue::Functional(FunctionalProperty::deserialize(ty, value, ctx))
        } else {
            PropertyValue::NonFunctional(NonFunctionalProperty::deserialize(ty, value, ctx))
        }
    }

    /// Returns the functional property, if this slot is one.
    #[must_use]
    pub fn as_functional(&self) -> Option<&FunctionalProperty> {
        match self {
            PropertyValue::Functional(p) => Some(p),
            PropertyValue::NonFunctional(_) => None,
        }
    }

    /// Returns the non-functional property, if this slot is one.
    #[must_use]
    pub fn as_non_functional(&self) -> Option<&NonFunctionalProperty> {
        match self {
            PropertyValue::NonFunctional(p) => Some(p),
            PropertyValue::Functional(_) => None,
        }
    }
}

/// An instance of a vocabulary class: one slot per effective property plus
/// any entries the class does not know about, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    ty: Arc<ClassType>,
    properties: Vec<PropertyValue>,
    unknown: Map<String, Value>,
    alias: String,
}

impl Aggregate {
    /// Creates an aggregate with every property empty.
    #[must_use]
    pub fn new(ty: Arc<ClassType>) -> Self {
        let properties = ty
            .properties
            .iter()
            .map(|p| PropertyValue::new(Arc::clone(p)))
            .collect();
        Self {
            ty,
            properties,
            unknown: Map::new(),
            alias: String::new(),
        }
    }

    /// Returns the class type.
    #[must_use]
    pub fn class_type(&self) -> &Arc<ClassType> {
        &self.ty
    }

    /// Returns the class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.ty.name
    }

    /// Returns the alias in use for the class's vocabulary.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Sets the alias for the class's vocabulary on the aggregate and every
    /// property governed by the same vocabulary.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        let alias = alias.into();
        for (p, ty) in self.properties.iter_mut().zip(&self.ty.properties) {
            if ty.vocabulary == self.ty.vocabulary {
                p.set_alias(alias.clone());
            }
        }
        self.alias = alias;
    }

    /// Looks up a property slot by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Looks up a property slot by name for mutation.
    pub fn property_mut(&mut self, name: &str) -> Option<&mut PropertyValue> {
        self.properties.iter_mut().find(|p| p.name() == name)
    }

    /// Looks up a functional property by name.
    #[must_use]
    pub fn functional(&self, name: &str) -> Option<&FunctionalProperty> {
        self.property(name).and_then(PropertyValue::as_functional)
    }

    /// Looks up a functional property by name for mutation.
    pub fn functional_mut(&mut self, name: &str) -> Option<&mut FunctionalProperty> {
        match self.property_mut(name)? {
            PropertyValue::Functional(p) => Some(p),
            PropertyValue::NonFunctional(_) => None,
        }
    }

    /// Looks up a non-functional property by name.
    #[must_use]
    pub fn non_functional(&self, name: &str) -> Option<&NonFunctionalProperty> {
        self.property(name).and_then(PropertyValue::as_non_functional)
    }

    /// Looks up a non-functional property by name for mutation.
    pub fn non_functional_mut(&mut self, name: &str) -> Option<&mut NonFunctionalProperty> {
        match self.property_mut(name)? {
            PropertyValue::NonFunctional(p) => Some(p),
            PropertyValue::Functional(_) => None,
        }
    }

    /// Iterates over every property slot in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyValue> {
        self.properties.iter()
    }

    /// Entries the class does not declare, retained from decoding.
    #[must_use]
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    /// Union of the class's own alias and every non-empty property's
    /// context; earlier entries win.
    #[must_use]
    pub fn json_ld_context(&self) -> JsonLdContext {
        let mut ctx = JsonLdContext::new();
        ctx.insert(self.ty.vocabulary.clone(), self.alias.clone());
        for p in self.properties.iter().filter(|p| !p.is_empty()) {
            merge_context(&mut ctx, p.json_ld_context());
        }
        ctx
    }

    /// Encodes the aggregate as a JSON object: `type`, then every non-empty
    /// property, then the retained unknown entries.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] of the first value that fails to encode.
    pub fn serialize(&self) -> Result<Value, CodecError> {
        let mut map = Map::new();
        map.insert(
            "type".to_owned(),
            Value::String(qualified_key(&self.alias, &self.ty.name)),
        );
        for p in self.properties.iter().filter(|p| !p.is_empty()) {
            map.insert(p.key(), p.serialize()?);
        }
        for (k, v) in &self.unknown {
            map.entry(k.clone()).or_insert_with(|| v.clone());
        }
        Ok(Value::Object(map))
    }

    /// Canonical order: properties compared pairwise in declaration order.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        if self.ty.name != other.ty.name {
            return self.ty.name < other.ty.name;
        }
        for (a, b) in self.properties.iter().zip(&other.properties) {
            if a.less_than(b) {
                return true;
            }
            if b.less_than(a) {
                return false;
            }
        }
        false
    }

    /// Decodes an aggregate of class `ty` from a JSON object.
    ///
    /// Property keys are matched bare or with the alias the document declares
    /// for the property's vocabulary. Entries no property claims are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingType`] if `map` has no type and
    /// [`DocumentError::TypeMismatch`] if none of its types names `ty`.
    pub fn deserialize(
        ty: Arc<ClassType>,
        map: &Map<String, Value>,
        ctx: &DecodeContext<'_>,
    ) -> Result<Self, DocumentError> {
        let declared = declared_types(map);
        if declared.is_empty() {
            return Err(DocumentError::MissingType);
        }
        if !declared.iter().any(|t| local_name(t) == ty.name) {
            return Err(DocumentError::TypeMismatch {
                expected: ty.name.clone(),
                found: declared.join(", "),
            });
        }

        let mut claimed: Vec<&str> = RESERVED_KEYS.to_vec();
        let mut properties = Vec::with_capacity(ty.properties.len());
        for p in &ty.properties {
            let alias = alias_for(ctx.aliases, &p.vocabulary);
            let qualified = qualified_key(alias, &p.name);
            let entry = map
                .get_key_value(qualified.as_str())
                .or_else(|| map.get_key_value(p.name.as_str()));
            match entry {
                Some((key, value)) => {
                    claimed.push(key.as_str());
                    properties.push(PropertyValue::deserialize(Arc::clone(p), value, ctx));
                }
                None => {
                    let mut empty = PropertyValue::new(Arc::clone(p));
                    empty.set_alias(alias);
                    properties.push(empty);
                }
            }
        }

        let unknown: Map<String, Value> = map
            .iter()
            .filter(|(k, _)| !claimed.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if !unknown.is_empty() {
            log::debug!("{}: keeping {} unrecognized entries", ty.name, unknown.len());
        }

        let alias = alias_for(ctx.aliases, &ty.vocabulary).to_owned();
        Ok(Self {
            ty,
            properties,
            unknown,
            alias,
        })
    }
}

/// Every type name a JSON object declares under `type` or `@type`.
pub(crate) fn declared_types(map: &Map<String, Value>) -> Vec<&str> {
    let mut names = Vec::new();
    for key in ["type", "@type"] {
        match map.get(key) {
            Some(Value::String(s)) => names.push(s.as_str()),
            Some(Value::Array(items)) => names.extend(items.iter().filter_map(Value::as_str)),
            _ => {}
        }
    }
    names
}

/// The local part of a type reference: `as:Note`, `https://x/ns#Note` and
/// `Note` all name `Note`.
pub(crate) fn local_name(reference: &str) -> &str {
    reference
        .rsplit(|c| c == ':' || c == '#' || c == '/')
        .next()
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AliasMap;
    use crate::literal::{string, LiteralValue};
    use crate::types::{KindType, TypeTable};
    use serde_json::json;

    const NS: &str = "https://example.org/ns";

    fn table() -> TypeTable {
        let mut table = TypeTable::new();
        let name = table.insert_property(PropertyType::new(
            "name",
            NS,
            true,
            vec![KindType::literal("string", "xsd:string", string::CODEC)],
        ));
        let tag = table.insert_property(PropertyType::new(
            "tag",
            NS,
            false,
            vec![
                KindType::literal("string", "xsd:string", string::CODEC),
                KindType::class("Note", "https://example.org/ns#Note"),
            ],
        ));
        table.insert_class(ClassType::new("Note", NS).with_properties(vec![name, tag]));
        table
    }

    fn decode(table: &TypeTable, aliases: &AliasMap, value: Value) -> Result<Aggregate, DocumentError> {
        let ctx = DecodeContext { table, aliases };
        let map = value.as_object().cloned().unwrap_or_default();
        Aggregate::deserialize(Arc::clone(table.class("Note").unwrap()), &map, &ctx)
    }

    #[test]
    fn serialize_skips_empty_properties() {
        let table = table();
        let mut note = table.new_aggregate("Note").unwrap();
        assert_eq!(note.serialize().unwrap(), json!({"type": "Note"}));
        note.functional_mut("name")
            .unwrap()
            .set(0, LiteralValue::String("hi".into()))
            .unwrap();
        assert_eq!(note.serialize().unwrap(), json!({"type": "Note", "name": "hi"}));
    }

    #[test]
    fn alias_prefixes_type_and_keys() {
        let table = table();
        let mut note = table.new_aggregate("Note").unwrap();
        note.functional_mut("name")
            .unwrap()
            .set(0, LiteralValue::String("hi".into()))
            .unwrap();
        note.set_alias("ex");
        assert_eq!(note.serialize().unwrap(), json!({"type": "ex:Note", "ex:name": "hi"}));
        assert_eq!(note.json_ld_context().get(NS).map(String::as_str), Some("ex"));
    }

    #[test]
    fn unknown_entries_survive_a_round_trip() {
        let table = table();
        let wire = json!({
            "type": "Note",
            "name": "hi",
            "tag": ["a", {"type": "Note", "name": "inner"}],
            "mediaType": "text/html"
        });
        let note = decode(&table, &AliasMap::new(), wire.clone()).unwrap();
        assert_eq!(note.unknown().get("mediaType"), Some(&json!("text/html")));
        let tags = note.non_functional("tag").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.at(1).unwrap().cell().kind_index(), 1);
        assert_eq!(note.serialize().unwrap(), wire);
    }

    #[test]
    fn aliased_keys_are_recognized() {
        let table = table();
        let aliases: AliasMap = [(NS.to_owned(), "ex".to_owned())].into();
        let note = decode(&table, &aliases, json!({"type": "ex:Note", "ex:name": "hi"})).unwrap();
        assert_eq!(note.alias(), "ex");
        assert!(note.functional("name").unwrap().is_kind(0));
        assert!(note.unknown().is_empty());
    }

    #[test]
    fn wrong_or_missing_type_is_rejected() {
        let table = table();
        assert_eq!(
            decode(&table, &AliasMap::new(), json!({"name": "hi"})),
            Err(DocumentError::MissingType)
        );
        assert!(matches!(
            decode(&table, &AliasMap::new(), json!({"type": "Image"})),
            Err(DocumentError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn ordering_compares_properties_in_order() {
        let table = table();
        let mut a = table.new_aggregate("Note").unwrap();
        let mut b = table.new_aggregate("Note").unwrap();
        a.functional_mut("name").unwrap().set(0, LiteralValue::String("a".into())).unwrap();
        b.functional_mut("name").unwrap().set(0, LiteralValue::String("b".into())).unwrap();
        assert!(a.less_than(&b));
        assert!(!b.less_than(&a));
        assert!(!a.less_than(&a.clone()));
    }

    #[test]
    fn local_names_strip_prefixes() {
        assert_eq!(local_name("as:Note"), "Note");
        assert_eq!(local_name("https://example.org/ns#Note"), "Note");
        assert_eq!(local_name("Note"), "Note");
    }
}
