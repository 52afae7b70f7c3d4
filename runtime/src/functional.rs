//! Cardinality-one properties.

use std::sync::Arc;

use serde_json::Value;

use crate::cell::{KindValue, ValueCell};
use crate::context::{alias_for, merge_context, qualified_key, DecodeContext, JsonLdContext};
use crate::error::{CodecError, PropertyError};
use crate::iri::Iri;
use crate::types::PropertyType;

/// A property holding at most one value.
///
/// The alias records which prefix the enclosing document declared for the
/// property's vocabulary; it only affects the wire key and the context map.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalProperty {
    cell: ValueCell,
    alias: String,
}

impl FunctionalProperty {
    /// Creates an empty property.
    #[must_use]
    pub fn new(ty: Arc<PropertyType>) -> Self {
        Self {
            cell: ValueCell::new(ty),
            alias: String::new(),
        }
    }

    /// Returns the property's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.cell.property_type().name
    }

    /// Returns the property type.
    #[must_use]
    pub fn property_type(&self) -> &Arc<PropertyType> {
        self.cell.property_type()
    }

    /// Returns the alias in use for the property's vocabulary.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Sets the alias in use for the property's vocabulary.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Returns the wire key: the bare name, or `alias:name`.
    #[must_use]
    pub fn key(&self) -> String {
        qualified_key(&self.alias, self.name())
    }

    /// Returns the underlying cell.
    #[must_use]
    pub fn cell(&self) -> &ValueCell {
        &self.cell
    }

    /// See [`ValueCell::has_any`].
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.cell.has_any()
    }

    /// See [`ValueCell::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    /// See [`ValueCell::is_kind`].
    #[must_use]
    pub fn is_kind(&self, index: usize) -> bool {
        self.cell.is_kind(index)
    }

    /// See [`ValueCell::is_iri`].
    #[must_use]
    pub fn is_iri(&self) -> bool {
        self.cell.is_iri()
    }

    /// See [`ValueCell::get`].
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KindValue> {
        self.cell.get(index)
    }

    /// See [`ValueCell::get_iri`].
    #[must_use]
    pub fn get_iri(&self) -> Option<&Iri> {
        self.cell.get_iri()
    }

    /// See [`ValueCell::unknown`].
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        self.cell.unknown()
    }

    /// See [`ValueCell::set`].
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `value` does not fit kind `index`.
    pub fn set(&mut self, index: usize, value: impl Into<KindValue>) -> Result<(), PropertyError> {
        self.cell.set(index, value.into())
    }

    /// See [`ValueCell::set_iri`].
    pub fn set_iri(&mut self, iri: Iri) {
        self.cell.set_iri(iri);
    }

    /// See [`ValueCell::clear`].
    pub fn clear(&mut self) {
        self.cell.clear();
    }

    /// See [`ValueCell::kind_index`].
    #[must_use]
    pub fn kind_index(&self) -> isize {
        self.cell.kind_index()
    }

    /// See [`ValueCell::less_than`].
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cell.less_than(&other.cell)
    }

    /// The property's own vocabulary alias, then any nested aggregate's.
    #[must_use]
    pub fn json_ld_context(&self) -> JsonLdContext {
        let mut ctx = JsonLdContext::new();
        ctx.insert(
            self.cell.property_type().vocabulary.clone(),
            self.alias.clone(),
        );
        merge_context(&mut ctx, self.cell.json_ld_context());
        ctx
    }

    /// Encodes the held value.
    ///
    /// # Errors
    ///
    /// Returns the active kind's [`CodecError`] if its value cannot be encoded.
    pub fn serialize(&self) -> Result<Value, CodecError> {
        self.cell.serialize()
    }

    /// Decodes `value`, taking the alias from the document's context.
    #[must_use]
    pub fn deserialize(ty: Arc<PropertyType>, value: &Value, ctx: &DecodeContext<'_>) -> Self {
        let alias = alias_for(ctx.aliases, &ty.vocabulary).to_owned();
        Self {
            cell: ValueCell::deserialize(ty, value, ctx),
            alias,
        }
    }
}
