// @generated by ontogen. Do not edit.

//! Type table of the `Fixture` vocabulary.

use std::sync::Arc;

use ontogen_runtime::{ClassType, KindType, PropertyType, TypeTable};

/// Base IRI of the vocabulary.
pub const VOCABULARY: &str = "https://example.org/fixture";

/// Builds the type table of every property and class of this vocabulary.
#[must_use]
pub fn type_table() -> TypeTable {
    let mut table = TypeTable::new();
    let property_p = table.insert_property(PropertyType::new(
        "p",
        VOCABULARY,
        true,
        vec![
            KindType::literal("string", "http://www.w3.org/2001/XMLSchema#string", ontogen_runtime::literal::string::CODEC),
            KindType::class("Foo", "https://example.org/fixture#Foo"),
        ],
    ));
    let property_tags = table.insert_property(PropertyType::new(
        "tags",
        VOCABULARY,
        false,
        vec![
            KindType::literal("string", "http://www.w3.org/2001/XMLSchema#string", ontogen_runtime::literal::string::CODEC),
        ],
    ));
    let property_published = table.insert_property(PropertyType::new(
        "published",
        VOCABULARY,
        true,
        vec![
            KindType::literal("dateTime", "http://www.w3.org/2001/XMLSchema#dateTime", ontogen_runtime::literal::date_time::CODEC),
        ],
    ));
    let property_durations = table.insert_property(PropertyType::new(
        "durations",
        VOCABULARY,
        false,
        vec![
            KindType::literal("duration", "http://www.w3.org/2001/XMLSchema#duration", ontogen_runtime::literal::duration::CODEC),
        ],
    ));
    table.insert_class(ClassType::new("Foo", VOCABULARY).with_properties(vec![Arc::clone(&property_p), Arc::clone(&property_tags), Arc::clone(&property_published), Arc::clone(&property_durations)]));
    table
}
