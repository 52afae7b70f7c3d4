//! Type table generation: the frozen vocabulary as a runtime [`TypeTable`].
//!
//! [`build_type_table`] builds the table in memory; [`generate_table_file`]
//! emits a `type_table()` function that builds the same table from generated
//! code.

use std::collections::BTreeMap;
use std::sync::Arc;

use ontogen_runtime::{ClassType, KindType, PropertyType, TypeTable};
use ontogen_spec::{Kind, PropertyDef, Vocabulary};

use crate::emit::RustFile;
use crate::mapping::to_snake_case;

/// Builds the runtime type table of a vocabulary.
///
/// Every class holds its effective properties: inherited ones first, then
/// its own.
pub fn build_type_table(vocabulary: &Vocabulary) -> TypeTable {
    let mut table = TypeTable::new();
    let mut inserted: BTreeMap<&str, Arc<PropertyType>> = BTreeMap::new();
    for property in &vocabulary.properties {
        let ty = table.insert_property(property_type(vocabulary, property));
        inserted.insert(property.name.as_str(), ty);
    }
    for class in &vocabulary.classes {
        let properties = vocabulary
            .effective_properties(&class.name)
            .into_iter()
            .filter_map(|p| inserted.get(p.name.as_str()).cloned())
            .collect();
        table.insert_class(ClassType::new(&class.name, &vocabulary.uri).with_properties(properties));
    }
    log::debug!(
        "type table for {}: {} properties, {} classes",
        vocabulary.name,
        inserted.len(),
        vocabulary.classes.len()
    );
    table
}

fn property_type(vocabulary: &Vocabulary, property: &PropertyDef) -> PropertyType {
    let kinds = property
        .kinds
        .iter()
        .map(|kind| match kind {
            Kind::Value(v) => KindType::literal(&v.name, &v.uri, v.codec),
            Kind::Class(name) => KindType::class(name, class_uri(vocabulary, name)),
        })
        .collect();
    PropertyType::new(
        &property.name,
        &vocabulary.uri,
        property.cardinality.is_functional(),
        kinds,
    )
}

fn class_uri(vocabulary: &Vocabulary, name: &str) -> String {
    vocabulary
        .find_class(name)
        .map_or_else(String::new, |c| c.uri.clone())
}

fn property_var(name: &str) -> String {
    format!("property_{}", to_snake_case(name).trim_end_matches('_'))
}

/// Generates `table.rs`: a `type_table()` constructor mirroring
/// [`build_type_table`].
pub fn generate_table_file(vocabulary: &Vocabulary) -> String {
    let mut f = RustFile::new(&format!(
        "Type table of the `{}` vocabulary.",
        vocabulary.name
    ));

    let shares_properties = vocabulary
        .classes
        .iter()
        .any(|c| !vocabulary.effective_properties(&c.name).is_empty());
    if shares_properties {
        f.line("use std::sync::Arc;");
        f.blank();
    }
    f.line("use ontogen_runtime::{ClassType, KindType, PropertyType, TypeTable};");
    f.blank();
    f.doc_comment("Base IRI of the vocabulary.");
    f.line(&format!("pub const VOCABULARY: &str = {:?};", vocabulary.uri));
    f.blank();

    f.doc_comment("Builds the type table of every property and class of this vocabulary.");
    f.line("#[must_use]");
    f.line("pub fn type_table() -> TypeTable {");
    f.line("    let mut table = TypeTable::new();");
    for property in &vocabulary.properties {
        f.line(&format!(
            "    let {} = table.insert_property(PropertyType::new(",
            property_var(&property.name)
        ));
        f.line(&format!("        {:?},", property.name));
        f.line("        VOCABULARY,");
        f.line(&format!("        {},", property.cardinality.is_functional()));
        f.line("        vec![");
        for kind in &property.kinds {
            let expr = match kind {
                Kind::Value(v) => format!(
                    "KindType::literal({:?}, {:?}, {}::CODEC)",
                    v.name, v.uri, v.codec_path
                ),
                Kind::Class(name) => format!(
                    "KindType::class({name:?}, {:?})",
                    class_uri(vocabulary, name)
                ),
            };
            f.line(&format!("            {expr},"));
        }
        f.line("        ],");
        f.line("    ));");
    }
    for class in &vocabulary.classes {
        let properties: Vec<String> = vocabulary
            .effective_properties(&class.name)
            .iter()
            .map(|p| format!("Arc::clone(&{})", property_var(&p.name)))
            .collect();
        f.line(&format!(
            "    table.insert_class(ClassType::new({:?}, VOCABULARY).with_properties(vec![{}]));",
            class.name,
            properties.join(", ")
        ));
    }
    // Unused bindings are possible when a property has no domain
    if vocabulary.properties.iter().any(|p| p.domain.is_empty()) {
        let unused: Vec<String> = vocabulary
            .properties
            .iter()
            .filter(|p| p.domain.is_empty())
            .map(|p| property_var(&p.name))
            .collect();
        f.line(&format!("    let _ = ({},);", unused.join(", ")));
    }
    f.line("    table");
    f.line("}");
    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontogen_spec::{Cardinality, ClassDef};

    fn vocabulary() -> Vocabulary {
        let string = ontogen_spec::namespaces::xsd::descriptor("string").unwrap();
        Vocabulary {
            name: "Example".into(),
            uri: "https://example.org/ns".into(),
            alias: "ex".into(),
            classes: vec![
                ClassDef {
                    name: "Base".into(),
                    uri: "https://example.org/ns#Base".into(),
                    comment: None,
                    extends: vec![],
                    disjoint_with: vec![],
                    properties: vec!["name".into()],
                    examples: vec![],
                },
                ClassDef {
                    name: "Foo".into(),
                    uri: "https://example.org/ns#Foo".into(),
                    comment: None,
                    extends: vec!["Base".into()],
                    disjoint_with: vec![],
                    properties: vec!["p".into()],
                    examples: vec![],
                },
            ],
            properties: vec![
                PropertyDef {
                    name: "p".into(),
                    uri: "https://example.org/ns#p".into(),
                    comment: None,
                    kinds: vec![Kind::Value(string.clone()), Kind::Class("Foo".into())],
                    cardinality: Cardinality::Functional,
                    domain: vec!["Foo".into()],
                    examples: vec![],
                },
                PropertyDef {
                    name: "name".into(),
                    uri: "https://example.org/ns#name".into(),
                    comment: None,
                    kinds: vec![Kind::Value(string.clone())],
                    cardinality: Cardinality::NonFunctional,
                    domain: vec!["Base".into()],
                    examples: vec![],
                },
            ],
            values: vec![string],
            passthrough: vec![],
        }
    }

    #[test]
    fn classes_hold_inherited_properties_first() {
        let table = build_type_table(&vocabulary());
        let foo = table.class("Foo").unwrap();
        let names: Vec<&str> = foo.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["name", "p"]);
        assert!(table.new_non_functional("name").is_some());
        let p = table.property("p").unwrap();
        assert_eq!(p.kind_position("Foo"), Some(1));
        assert_eq!(p.kinds[1].uri(), "https://example.org/ns#Foo");
    }

    #[test]
    fn emitted_table_mirrors_the_model() {
        let src = generate_table_file(&vocabulary());
        assert!(src.contains("pub const VOCABULARY: &str = \"https://example.org/ns\";"));
        assert!(src.contains(
            "KindType::literal(\"string\", \"http://www.w3.org/2001/XMLSchema#string\", ontogen_runtime::literal::string::CODEC),"
        ));
        assert!(src.contains("KindType::class(\"Foo\", \"https://example.org/ns#Foo\"),"));
        assert!(src.contains(
            "ClassType::new(\"Foo\", VOCABULARY).with_properties(vec![Arc::clone(&property_name), Arc::clone(&property_p)])"
        ));
        assert!(!src.contains("let _ ="));
    }
}
