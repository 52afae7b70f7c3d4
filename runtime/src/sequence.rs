//! Cardinality-many properties: an ordered sequence of value cells.
//!
//! Every element records its own position. Insertions and removals renumber
//! the elements they shift; `swap` only touches the two elements involved.
//! Cursors borrow the sequence and compute their neighbours from its current
//! length, so they never outlive a mutation.

use std::sync::Arc;

use serde_json::Value;

use crate::cell::{KindValue, ValueCell};
use crate::context::{alias_for, merge_context, qualified_key, DecodeContext, JsonLdContext};
use crate::error::{CodecError, PropertyError};
use crate::iri::Iri;
use crate::types::PropertyType;

/// One element of a [`NonFunctionalProperty`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCell {
    index: usize,
    cell: ValueCell,
}

impl PropertyCell {
    /// Position of this element in its sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element's value cell.
    #[must_use]
    pub fn cell(&self) -> &ValueCell {
        &self.cell
    }
}

/// A property holding an ordered list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFunctionalProperty {
    ty: Arc<PropertyType>,
    cells: Vec<PropertyCell>,
    alias: String,
}

impl NonFunctionalProperty {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new(ty: Arc<PropertyType>) -> Self {
        Self {
            ty,
            cells: Vec::new(),
            alias: String::new(),
        }
    }

    /// Returns the property's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ty.name
    }

    /// Returns the property type.
    #[must_use]
    pub fn property_type(&self) -> &Arc<PropertyType> {
        &self.ty
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
        qualified_key(&self.alias, &self.ty.name)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&PropertyCell> {
        self.cells.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyCell> {
        self.cells.iter()
    }

    /// Appends a value of kind `kind`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `value` does not fit kind `kind`.
    pub fn append(&mut self, kind: usize, value: impl Into<KindValue>) -> Result<(), PropertyError> {
        let cell = self.filled(kind, value.into())?;
        self.push_cell(cell);
        Ok(())
    }

    /// Appends an identifier reference.
    pub fn append_iri(&mut self, iri: Iri) {
        let cell = self.iri_cell(iri);
        self.push_cell(cell);
    }

    /// Inserts a value of kind `kind` at the front.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if `value` does not fit kind `kind`.
    pub fn prepend(&mut self, kind: usize, value: impl Into<KindValue>) -> Result<(), PropertyError> {
        self.insert_at(0, kind, value)
    }

    /// Inserts an identifier reference at the front.
    pub fn prepend_iri(&mut self, iri: Iri) {
        let cell = self.iri_cell(iri);
        self.insert_cell(0, cell);
    }

    /// Inserts a value of kind `kind` at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if `index > len()`, or a kind
    /// error if `value` does not fit kind `kind`.
    pub fn insert_at(
        &mut self,
        index: usize,
        kind: usize,
        value: impl Into<KindValue>,
    ) -> Result<(), PropertyError> {
        self.check_bounds(index, self.cells.len() + 1)?;
        let cell = self.filled(kind, value.into())?;
        self.insert_cell(index, cell);
        Ok(())
    }

    /// Inserts an identifier reference at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if `index > len()`.
    pub fn insert_iri_at(&mut self, index: usize, iri: Iri) -> Result<(), PropertyError> {
        self.check_bounds(index, self.cells.len() + 1)?;
        let cell = self.iri_cell(iri);
        self.insert_cell(index, cell);
        Ok(())
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if there is no such element.
    pub fn remove_at(&mut self, index: usize) -> Result<ValueCell, PropertyError> {
        self.check_bounds(index, self.cells.len())?;
        let removed = self.cells.remove(index);
        self.renumber_from(index);
        Ok(removed.cell)
    }

    /// Exchanges two elements. No other element is renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), PropertyError> {
        self.check_bounds(i, self.cells.len())?;
        self.check_bounds(j, self.cells.len())?;
        self.cells.swap(i, j);
        if let Some(c) = self.cells.get_mut(i) {
            c.index = i;
        }
        if let Some(c) = self.cells.get_mut(j) {
            c.index = j;
        }
        Ok(())
    }

    /// Replaces the element at `index` with a value of kind `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if there is no such element, or
    /// a kind error if `value` does not fit kind `kind`.
    pub fn set_at(
        &mut self,
        index: usize,
        kind: usize,
        value: impl Into<KindValue>,
    ) -> Result<(), PropertyError> {
        let slot = self.slot_mut(index)?;
        slot.cell.set(kind, value.into())
    }

    /// Replaces the element at `index` with an identifier reference.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfBounds`] if there is no such element.
    pub fn set_iri_at(&mut self, index: usize, iri: Iri) -> Result<(), PropertyError> {
        self.slot_mut(index)?.cell.set_iri(iri);
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns a cursor positioned at `index`.
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor<'_> {
        Cursor { owner: self, index }
    }

    /// Returns a cursor at the first element, if any.
    #[must_use]
    pub fn cursor_front(&self) -> Option<Cursor<'_>> {
        (!self.is_empty()).then(|| self.cursor(0))
    }

    /// Returns a cursor at the last element, if any.
    #[must_use]
    pub fn cursor_back(&self) -> Option<Cursor<'_>> {
        self.cells.len().checked_sub(1).map(|i| self.cursor(i))
    }

    /// Returns true if element `i` orders before element `j`.
    #[must_use]
    pub fn less(&self, i: usize, j: usize) -> bool {
        match (self.cells.get(i), self.cells.get(j)) {
            (Some(a), Some(b)) => a.cell.less_than(&b.cell),
            _ => false,
        }
    }

    /// Stable-sorts the elements into canonical order and renumbers them.
    pub fn sort_canonical(&mut self) {
        self.cells.sort_by(|a, b| {
            if a.cell.less_than(&b.cell) {
                std::cmp::Ordering::Less
            } else if b.cell.less_than(&a.cell) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        self.renumber_from(0);
    }

    /// Element-wise comparison; a proper prefix orders first.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        for (a, b) in self.cells.iter().zip(&other.cells) {
            if a.cell.less_than(&b.cell) {
                return true;
            }
            if b.cell.less_than(&a.cell) {
                return false;
            }
        }
        self.cells.len() < other.cells.len()
    }

    /// The property's own vocabulary alias, then every element's context.
    #[must_use]
    pub fn json_ld_context(&self) -> JsonLdContext {
        let mut ctx = JsonLdContext::new();
        ctx.insert(self.ty.vocabulary.clone(), self.alias.clone());
        for c in &self.cells {
            merge_context(&mut ctx, c.cell.json_ld_context());
        }
        ctx
    }

    /// Encodes the sequence. A single element encodes as the bare value.
    ///
    /// # Errors
    ///
    /// Returns the first element's [`CodecError`] that fails to encode.
    pub fn serialize(&self) -> Result<Value, CodecError> {
        if let [only] = self.cells.as_slice() {
            return only.cell.serialize();
        }
        self.cells
            .iter()
            .map(|c| c.cell.serialize())
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Decodes an array element-wise, or any other value as one element.
    #[must_use]
    pub fn deserialize(ty: Arc<PropertyType>, value: &Value, ctx: &DecodeContext<'_>) -> Self {
        let alias = alias_for(ctx.aliases, &ty.vocabulary).to_owned();
        let items = match value {
            Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        let cells = items
            .iter()
            .enumerate()
            .map(|(index, item)| PropertyCell {
                index,
                cell: ValueCell::deserialize(Arc::clone(&ty), item, ctx),
            })
            .collect();
        Self { ty, cells, alias }
    }

    fn filled(&self, kind: usize, value: KindValue) -> Result<ValueCell, PropertyError> {
        let mut cell = ValueCell::new(Arc::clone(&self.ty));
        cell.set(kind, value)?;
        Ok(cell)
    }

    fn iri_cell(&self, iri: Iri) -> ValueCell {
        let mut cell = ValueCell::new(Arc::clone(&self.ty));
        cell.set_iri(iri);
        cell
    }

    fn push_cell(&mut self, cell: ValueCell) {
        let index = self.cells.len();
        self.cells.push(PropertyCell { index, cell });
    }

    fn insert_cell(&mut self, index: usize, cell: ValueCell) {
        self.cells.insert(index, PropertyCell { index, cell });
        self.renumber_from(index + 1);
    }

    fn renumber_from(&mut self, start: usize) {
        for (i, c) in self.cells.iter_mut().enumerate().skip(start) {
            c.index = i;
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut PropertyCell, PropertyError> {
        let len = self.cells.len();
        let property = &self.ty.name;
        self.cells
            .get_mut(index)
            .ok_or_else(|| PropertyError::OutOfBounds {
                property: property.clone(),
                index,
                len,
            })
    }

    fn check_bounds(&self, index: usize, limit: usize) -> Result<(), PropertyError> {
        if index < limit {
            Ok(())
        } else {
            Err(PropertyError::OutOfBounds {
                property: self.ty.name.clone(),
                index,
                len: self.cells.len(),
            })
        }
    }
}

/// A position in a [`NonFunctionalProperty`].
///
/// Neighbours are computed from the owner's current length on every call.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    owner: &'a NonFunctionalProperty,
    index: usize,
}

impl<'a> Cursor<'a> {
    /// The position this cursor refers to.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, if the position is still in range.
    #[must_use]
    pub fn get(&self) -> Option<&'a PropertyCell> {
        self.owner.at(self.index)
    }

    /// The cursor one position later, if there is an element there.
    #[must_use]
    pub fn next(&self) -> Option<Cursor<'a>> {
        let index = self.index.checked_add(1)?;
        (index < self.owner.len()).then_some(Cursor {
            owner: self.owner,
            index,
        })
    }

    /// The cursor one position earlier, if there is one.
    #[must_use]
    pub fn previous(&self) -> Option<Cursor<'a>> {
        let index = self.index.checked_sub(1)?;
        (index < self.owner.len()).then_some(Cursor {
            owner: self.owner,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{non_negative_integer, string, LiteralValue};
    use crate::types::KindType;
    use serde_json::json;

    fn tags() -> NonFunctionalProperty {
        NonFunctionalProperty::new(Arc::new(PropertyType::new(
            "tag",
            "https://example.org/ns",
            false,
            vec![
                KindType::literal("string", "xsd:string", string::CODEC),
                KindType::literal(
                    "nonNegativeInteger",
                    "xsd:nonNegativeInteger",
                    non_negative_integer::CODEC,
                ),
            ],
        )))
    }

    fn text(s: &str) -> LiteralValue {
        LiteralValue::String(s.to_owned())
    }

    fn indices(p: &NonFunctionalProperty) -> Vec<usize> {
        p.iter().map(PropertyCell::index).collect()
    }

    fn strings(p: &NonFunctionalProperty) -> Vec<String> {
        p.iter()
            .filter_map(|c| match c.cell().get(0).and_then(KindValue::as_literal) {
                Some(LiteralValue::String(s)) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    fn five() -> NonFunctionalProperty {
        let mut p = tags();
        for s in ["a", "b", "c", "d", "e"] {
            p.append(0, text(s)).unwrap();
        }
        p
    }

    #[test]
    fn append_then_remove_empties() {
        let mut p = tags();
        p.append(0, text("only")).unwrap();
        assert_eq!(p.len(), 1);
        p.remove_at(0).unwrap();
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
    }

    #[test]
    fn remove_renumbers_the_tail() {
        let mut p = five();
        p.remove_at(2).unwrap();
        assert_eq!(strings(&p), ["a", "b", "d", "e"]);
        assert_eq!(indices(&p), [0, 1, 2, 3]);
    }

    #[test]
    fn swap_leaves_the_middle_alone() {
        let mut p = five();
        p.swap(0, 4).unwrap();
        assert_eq!(p.len(), 5);
        assert_eq!(strings(&p), ["e", "b", "c", "d", "a"]);
        assert_eq!(indices(&p), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_and_prepend_shift_later_elements() {
        let mut p = five();
        p.insert_at(1, 0, text("x")).unwrap();
        p.prepend(0, text("first")).unwrap();
        assert_eq!(strings(&p), ["first", "a", "x", "b", "c", "d", "e"]);
        assert_eq!(indices(&p), [0, 1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            p.insert_at(99, 0, text("y")),
            Err(PropertyError::OutOfBounds { index: 99, .. })
        ));
        assert!(p.remove_at(7).is_err());
    }

    #[test]
    fn set_at_replaces_in_place() {
        let mut p = five();
        p.set_at(3, 1, LiteralValue::NonNegativeInteger(9)).unwrap();
        let cell = p.at(3).unwrap();
        assert_eq!(cell.index(), 3);
        assert_eq!(cell.cell().kind_index(), 1);
        p.set_iri_at(3, Iri::parse("https://example.org/t").unwrap()).unwrap();
        assert!(p.at(3).unwrap().cell().is_iri());
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn single_element_serializes_bare() {
        let mut p = tags();
        p.append(0, text("a")).unwrap();
        assert_eq!(p.serialize().unwrap(), json!("a"));
        p.append(1, LiteralValue::NonNegativeInteger(2)).unwrap();
        assert_eq!(p.serialize().unwrap(), json!(["a", 2]));
        assert_eq!(tags().serialize().unwrap(), json!([]));
    }

    #[test]
    fn cursor_walks_both_ways() {
        let p = five();
        let mut seen = Vec::new();
        let mut cursor = p.cursor_front();
        while let Some(c) = cursor {
            seen.push(c.index());
            cursor = c.next();
        }
        assert_eq!(seen, [0, 1, 2, 3, 4]);
        let back = p.cursor_back().unwrap();
        assert_eq!(back.index(), 4);
        assert_eq!(back.previous().map(|c| c.index()), Some(3));
        assert!(p.cursor(0).previous().is_none());
        assert!(tags().cursor_front().is_none());
    }

    #[test]
    fn sort_canonical_orders_and_renumbers() {
        let mut p = tags();
        p.append(1, LiteralValue::NonNegativeInteger(3)).unwrap();
        p.append(0, text("b")).unwrap();
        p.append_iri(Iri::parse("https://example.org/z").unwrap());
        p.append(0, text("a")).unwrap();
        assert!(p.less(2, 0), "IRIs order before resolved kinds");
        p.sort_canonical();
        assert_eq!(p.serialize().unwrap(), json!(["https://example.org/z", "a", "b", 3]));
        assert_eq!(indices(&p), [0, 1, 2, 3]);
    }

    #[test]
    fn shorter_prefix_orders_first() {
        let mut short = tags();
        short.append(0, text("a")).unwrap();
        let mut long = short.clone();
        long.append(0, text("b")).unwrap();
        assert!(short.less_than(&long));
        assert!(!long.less_than(&short));
    }
}
