//! The single-value cell behind every polymorphic property.
//!
//! A cell holds exactly one of: a value of one declared kind, an identifier
//! reference, an opaque passthrough value, or nothing. Setting any of them
//! replaces whatever was there, so two kinds are never active at once.

use std::sync::Arc;

use serde_json::Value;

use crate::aggregate::Aggregate;
use crate::context::{merge_context, DecodeContext, JsonLdContext};
use crate::error::{CodecError, PropertyError};
use crate::iri::Iri;
use crate::literal::LiteralValue;
use crate::types::{KindType, PropertyType};

/// [`ValueCell::kind_index`] when the identifier reference slot is active.
pub const IRI_KIND_INDEX: isize = -2;

/// [`ValueCell::kind_index`] when no kind is active (empty or passthrough).
pub const NO_KIND_INDEX: isize = -1;

/// A value of one declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum KindValue {
    /// A literal.
    Literal(LiteralValue),
    /// An aggregate of a vocabulary class.
    Object(Box<Aggregate>),
}

impl KindValue {
    /// Returns the literal, if this is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            KindValue::Literal(v) => Some(v),
            KindValue::Object(_) => None,
        }
    }

    /// Returns the aggregate, if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Aggregate> {
        match self {
            KindValue::Object(v) => Some(v),
            KindValue::Literal(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            KindValue::Literal(v) => v.kind_name().to_owned(),
            KindValue::Object(a) => a.class_name().to_owned(),
        }
    }
}

impl From<LiteralValue> for KindValue {
    fn from(value: LiteralValue) -> Self {
        KindValue::Literal(value)
    }
}

impl From<Aggregate> for KindValue {
    fn from(value: Aggregate) -> Self {
        KindValue::Object(Box::new(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Slot {
    #[default]
    Empty,
    Kind {
        index: usize,
        value: KindValue,
    },
    Iri(Iri),
    Unknown(Value),
}

/// One property value slot, typed by its [`PropertyType`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCell {
    ty: Arc<PropertyType>,
    slot: Slot,
}

impl ValueCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new(ty: Arc<PropertyType>) -> Self {
        Self {
            ty,
            slot: Slot::Empty,
        }
    }

    /// Returns the property type this cell belongs to.
    #[must_use]
    pub fn property_type(&self) -> &Arc<PropertyType> {
        &self.ty
    }

    /// Returns true if a kind or an identifier reference is set.
    #[must_use]
    pub fn has_any(&self) -> bool {
        matches!(self.slot, Slot::Kind { .. } | Slot::Iri(_))
    }

    /// Returns true if nothing at all is held, not even a passthrough value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    /// Returns true if the kind at `index` is active.
    #[must_use]
    pub fn is_kind(&self, index: usize) -> bool {
        matches!(self.slot, Slot::Kind { index: i, .. } if i == index)
    }

    /// Returns true if the identifier reference slot is active.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self.slot, Slot::Iri(_))
    }

    /// Returns the value of kind `index`, or `None` if another slot is active.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KindValue> {
        match &self.slot {
            Slot::Kind { index: i, value } if *i == index => Some(value),
            _ => None,
        }
    }

    /// Returns the identifier reference, if active.
    #[must_use]
    pub fn get_iri(&self) -> Option<&Iri> {
        match &self.slot {
            Slot::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the passthrough value retained from decoding, if any.
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Unknown(value) => Some(value),
            _ => None,
        }
    }

    /// Stores `value` as kind `index`, clearing every other slot.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::KindOutOfRange`] if `index` is not a declared
    /// kind and [`PropertyError::KindMismatch`] if `value` does not fit it.
    pub fn set(&mut self, index: usize, value: KindValue) -> Result<(), PropertyError> {
        self.check(index, &value)?;
        self.slot = Slot::Kind { index, value };
        Ok(())
    }

    /// Stores an identifier reference, clearing every other slot.
    pub fn set_iri(&mut self, iri: Iri) {
        self.slot = Slot::Iri(iri);
    }

    /// Clears every slot.
    pub fn clear(&mut self) {
        self.slot = Slot::Empty;
    }

    /// Position of the active kind in declaration order, [`IRI_KIND_INDEX`]
    /// for an identifier reference, or [`NO_KIND_INDEX`] otherwise.
    #[must_use]
    pub fn kind_index(&self) -> isize {
        match &self.slot {
            Slot::Kind { index, .. } => *index as isize,
            Slot::Iri(_) => IRI_KIND_INDEX,
            Slot::Empty | Slot::Unknown(_) => NO_KIND_INDEX,
        }
    }

    /// Canonical order: by kind index, then by the active kind's own order,
    /// then by IRI text.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        let (lhs, rhs) = (self.kind_index(), other.kind_index());
        if lhs != rhs {
            return lhs < rhs;
        }
        match (&self.slot, &other.slot) {
            (Slot::Kind { index, value: a }, Slot::Kind { value: b, .. }) => {
                match (self.ty.kinds.get(*index), a, b) {
                    (Some(KindType::Literal { codec, .. }), KindValue::Literal(a), KindValue::Literal(b)) => {
                        (codec.less)(a, b)
                    }
                    (_, KindValue::Object(a), KindValue::Object(b)) => a.less_than(b),
                    _ => false,
                }
            }
            (Slot::Iri(a), Slot::Iri(b)) => a.as_str() < b.as_str(),
            _ => false,
        }
    }

    /// Context entries contributed by a nested aggregate, if one is active.
    #[must_use]
    pub fn json_ld_context(&self) -> JsonLdContext {
        let mut ctx = JsonLdContext::new();
        if let Slot::Kind {
            value: KindValue::Object(aggregate),
            ..
        } = &self.slot
        {
            merge_context(&mut ctx, aggregate.json_ld_context());
        }
        ctx
    }

    /// Encodes the active slot; an empty cell encodes as `null`.
    ///
    /// # Errors
    ///
    /// Returns the active kind's [`CodecError`] if its value cannot be encoded.
    pub fn serialize(&self) -> Result<Value, CodecError> {
        match &self.slot {
            Slot::Empty => Ok(Value::Null),
            Slot::Kind { index, value } => match (self.ty.kinds.get(*index), value) {
                (Some(KindType::Literal { codec, .. }), KindValue::Literal(v)) => (codec.serialize)(v),
                (_, KindValue::Object(aggregate)) => aggregate.serialize(),
                (_, KindValue::Literal(v)) => Err(CodecError::encode(
                    v.kind_name(),
                    format!("kind {index} of {} is not a literal kind", self.ty.name),
                )),
            },
            Slot::Iri(iri) => Ok(Value::String(iri.as_str().to_owned())),
            Slot::Unknown(value) => Ok(value.clone()),
        }
    }

    /// Decodes `value` by trying each declared kind in order, then the
    /// identifier reference form, and finally keeping it as passthrough.
    ///
    /// Never fails: input matching no kind is retained verbatim and
    /// re-serializes unchanged.
    #[must_use]
    pub fn deserialize(ty: Arc<PropertyType>, value: &Value, ctx: &DecodeContext<'_>) -> Self {
        let slot = decode_slot(&ty, value, ctx);
        Self { ty, slot }
    }

    fn check(&self, index: usize, value: &KindValue) -> Result<(), PropertyError> {
        let kind = self
            .ty
            .kinds
            .get(index)
            .ok_or_else(|| PropertyError::KindOutOfRange {
                property: self.ty.name.clone(),
                index,
                declared: self.ty.kinds.len(),
            })?;
        let fits = match (kind, value) {
            (KindType::Literal { codec, .. }, KindValue::Literal(v)) => codec.accepts(v),
            (KindType::Class { name, .. }, KindValue::Object(a)) => a.class_name() == name,
            _ => false,
        };
        if fits {
            Ok(())
        } else {
            Err(PropertyError::KindMismatch {
                property: self.ty.name.clone(),
                kind: kind.name().to_owned(),
                found: value.describe(),
            })
        }
    }
}

fn decode_slot(ty: &PropertyType, value: &Value, ctx: &DecodeContext<'_>) -> Slot {
    for (index, kind) in ty.kinds.iter().enumerate() {
        if let Some(decoded) = decode_kind(kind, value, ctx) {
            return Slot::Kind {
                index,
                value: decoded,
            };
        }
    }
    if let Value::String(text) = value {
        if let Ok(iri) = Iri::parse(text.as_str()) {
            return Slot::Iri(iri);
        }
    }
    log::debug!("{}: no declared kind accepts the value, keeping it as passthrough", ty.name);
    Slot::Unknown(value.clone())
}

fn decode_kind(kind: &KindType, value: &Value, ctx: &DecodeContext<'_>) -> Option<KindValue> {
    match kind {
        KindType::Literal { codec, .. } => (codec.deserialize)(value).ok().map(KindValue::Literal),
        KindType::Class { name, .. } => {
            let map = value.as_object()?;
            let class = ctx.table.class(name)?;
            Aggregate::deserialize(Arc::clone(class), map, ctx)
                .ok()
                .map(KindValue::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AliasMap;
    use crate::literal::{boolean, string};
    use crate::types::{ClassType, TypeTable};
    use serde_json::json;

    const NS: &str = "https://example.org/ns";

    fn table() -> TypeTable {
        let mut table = TypeTable::new();
        let content = table.insert_property(PropertyType::new(
            "content",
            NS,
            true,
            vec![
                KindType::literal("string", "xsd:string", string::CODEC),
                KindType::class("Note", "https://example.org/ns#Note"),
                KindType::literal("boolean", "xsd:boolean", boolean::CODEC),
            ],
        ));
        table.insert_class(ClassType::new("Note", NS).with_properties(vec![content]));
        table
    }

    fn decode(table: &TypeTable, value: Value) -> ValueCell {
        let aliases = AliasMap::new();
        let ctx = DecodeContext {
            table,
            aliases: &aliases,
        };
        ValueCell::deserialize(Arc::clone(table.property("content").unwrap()), &value, &ctx)
    }

    #[test]
    fn setting_a_kind_clears_the_others() {
        let table = table();
        let mut cell = ValueCell::new(Arc::clone(table.property("content").unwrap()));
        assert_eq!(cell.kind_index(), NO_KIND_INDEX);
        cell.set_iri(Iri::parse("https://example.org/x").unwrap());
        assert_eq!(cell.kind_index(), IRI_KIND_INDEX);
        cell.set(2, LiteralValue::Boolean(true).into()).unwrap();
        assert!(cell.is_kind(2));
        assert!(!cell.is_iri());
        assert!(!cell.is_kind(0));
        assert_eq!(cell.kind_index(), 2);
        assert!(cell.get(0).is_none(), "inactive kinds read as None");
        cell.clear();
        assert!(!cell.has_any());
    }

    #[test]
    fn set_rejects_wrong_shapes() {
        let table = table();
        let mut cell = ValueCell::new(Arc::clone(table.property("content").unwrap()));
        assert!(matches!(
            cell.set(0, LiteralValue::Boolean(true).into()),
            Err(PropertyError::KindMismatch { .. })
        ));
        assert!(matches!(
            cell.set(7, LiteralValue::Boolean(true).into()),
            Err(PropertyError::KindOutOfRange { declared: 3, .. })
        ));
        assert!(cell.is_empty());
    }

    #[test]
    fn deserialize_tries_kinds_in_declaration_order() {
        let table = table();
        assert_eq!(decode(&table, json!("hello")).kind_index(), 0);
        assert_eq!(decode(&table, json!(true)).kind_index(), 2);
        let note = decode(&table, json!({"type": "Note", "content": "inner"}));
        assert_eq!(note.kind_index(), 1);
    }

    #[test]
    fn mismatched_input_degrades_to_passthrough() {
        let table = table();
        let wire = json!({"type": "Image", "url": "https://example.org/a.png"});
        let cell = decode(&table, wire.clone());
        assert_eq!(cell.kind_index(), NO_KIND_INDEX);
        assert!(!cell.has_any());
        assert_eq!(cell.unknown(), Some(&wire));
        assert_eq!(cell.serialize().unwrap(), wire);
    }

    #[test]
    fn ordering_follows_kind_index_then_value() {
        let table = table();
        let ty = Arc::clone(table.property("content").unwrap());
        let mut iri = ValueCell::new(Arc::clone(&ty));
        iri.set_iri(Iri::parse("https://example.org/z").unwrap());
        let mut a = ValueCell::new(Arc::clone(&ty));
        a.set(0, LiteralValue::String("a".into()).into()).unwrap();
        let mut b = ValueCell::new(Arc::clone(&ty));
        b.set(0, LiteralValue::String("b".into()).into()).unwrap();
        let mut flag = ValueCell::new(Arc::clone(&ty));
        flag.set(2, LiteralValue::Boolean(false).into()).unwrap();

        assert!(iri.less_than(&a), "IRIs order before resolved kinds");
        assert!(!a.less_than(&iri));
        assert!(a.less_than(&b));
        assert!(b.less_than(&flag), "kind 0 orders before kind 2");

        let p = decode(&table, json!([1, 2]));
        let q = decode(&table, json!({"x": 1}));
        assert!(!p.less_than(&q));
        assert!(!q.less_than(&p));
    }
}
