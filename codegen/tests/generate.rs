//! End-to-end: schema document → vocabulary → generated tree and type table.

use ontogen_codegen::{build_type_table, generate, GeneratorConfig};
use ontogen_runtime::literal::LiteralValue;
use ontogen_runtime::{document, IRI_KIND_INDEX};
use ontogen_spec::{compile, Registry, Vocabulary};
use serde_json::{json, Value};

fn schema() -> Value {
    json!({
        "@context": {
            "xsd": "http://www.w3.org/2001/XMLSchema#",
            "owl": "http://www.w3.org/2002/07/owl#",
            "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
            "ex": "https://example.org/ns#"
        },
        "@id": "https://example.org/ns",
        "name": "Example",
        "members": [
            {"@id": "ex:Foo", "@type": "owl:Class", "rdfs:comment": "A foo."},
            {
                "@id": "ex:p",
                "@type": ["owl:DatatypeProperty", "owl:FunctionalProperty"],
                "rdfs:domain": "ex:Foo",
                "rdfs:range": {"owl:unionOf": ["xsd:string", "ex:Foo"]}
            },
            {
                "@id": "ex:tags",
                "@type": "rdf:Property",
                "owl:maxCardinality": "*",
                "rdfs:domain": "ex:Foo",
                "rdfs:range": "xsd:string"
            }
        ]
    })
}

fn vocabulary() -> Vocabulary {
    compile(&schema(), Registry::shared()).expect("schema compiles")
}

#[test]
fn generates_per_vocabulary_units() {
    let out = tempfile::tempdir().expect("tempdir");
    let config = GeneratorConfig {
        out_dir: out.path().to_path_buf(),
        prefix: "vocab".into(),
        individual: false,
    };
    let report = generate(&vocabulary(), &config).expect("generation succeeds");
    assert_eq!(report.property_count, 2);
    assert_eq!(report.class_count, 1);

    let dir = out.path().join("vocab").join("example");
    for file in ["mod.rs", "properties.rs", "classes.rs", "table.rs", "vocabulary.jsonld"] {
        assert!(dir.join(file).is_file(), "{file} was not written");
    }
    assert_eq!(report.files.len(), 5);

    let properties = std::fs::read_to_string(dir.join("properties.rs")).expect("read properties.rs");
    assert!(properties.contains("pub mod p {"));
    assert!(properties.contains("pub fn set_string(p: &mut FunctionalProperty, value: String)"));
    assert!(properties.contains("pub fn is_foo(p: &FunctionalProperty) -> bool {"));
    assert!(properties.contains("pub fn append_string(p: &mut NonFunctionalProperty, value: String)"));

    let module = std::fs::read_to_string(dir.join("mod.rs")).expect("read mod.rs");
    assert!(module.contains("pub mod classes;\npub mod properties;\npub mod table;\n"));
    assert!(module.contains("Module path: `vocab::example`."));

    let dump: Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("vocabulary.jsonld")).expect("read dump"),
    )
    .expect("dump is JSON");
    let again = compile(&dump, Registry::shared()).expect("dump compiles");
    assert_eq!(again, vocabulary());
}

#[test]
fn generates_individual_units() {
    let out = tempfile::tempdir().expect("tempdir");
    let config = GeneratorConfig {
        out_dir: out.path().to_path_buf(),
        prefix: String::new(),
        individual: true,
    };
    generate(&vocabulary(), &config).expect("generation succeeds");

    let dir = out.path().join("example");
    for file in ["property_p.rs", "property_tags.rs", "type_foo.rs", "table.rs", "mod.rs"] {
        assert!(dir.join(file).is_file(), "{file} was not written");
    }
    let module = std::fs::read_to_string(dir.join("mod.rs")).expect("read mod.rs");
    assert!(module.contains("pub mod property_p;"));
    assert!(module.contains("pub mod type_foo;"));
    let class = std::fs::read_to_string(dir.join("type_foo.rs")).expect("read type_foo.rs");
    assert!(class.contains("//! `Foo`: A foo."));
    assert!(class.contains("pub fn tags_mut(value: &mut Aggregate) -> Option<&mut NonFunctionalProperty> {"));
}

#[test]
fn functional_property_switches_kinds() {
    let table = build_type_table(&vocabulary());
    let mut foo = table.new_aggregate("Foo").expect("Foo exists");
    let p = foo.functional_mut("p").expect("p is functional");

    p.set(0, LiteralValue::String("a".into())).expect("string fits");
    assert!(p.is_kind(0));
    assert!(!p.is_kind(1));
    assert_eq!(p.kind_index(), 0);
    assert_eq!(p.serialize().expect("serializes"), json!("a"));

    let inner = table.new_aggregate("Foo").expect("Foo exists");
    p.set(1, inner).expect("Foo fits");
    assert!(!p.is_kind(0));
    assert_eq!(p.kind_index(), 1);
}

#[test]
fn documents_round_trip_through_the_table() {
    let table = build_type_table(&vocabulary());
    let input = json!({
        "@context": "https://example.org/ns",
        "type": "Foo",
        "p": "https://example.org/things/1",
        "tags": ["b", "a"],
        "extra": {"kept": true}
    });
    let foo = document::deserialize(&input, &table).expect("decodes");
    let p = foo.functional("p").expect("p");
    // A plain string decodes as the first declared kind
    assert_eq!(p.kind_index(), 0);
    assert_ne!(p.kind_index(), IRI_KIND_INDEX);
    assert_eq!(foo.non_functional("tags").expect("tags").len(), 2);

    let output = document::serialize(&foo).expect("encodes");
    assert_eq!(output["p"], input["p"]);
    assert_eq!(output["tags"], json!(["b", "a"]));
    assert_eq!(output["extra"], json!({"kept": true}));
}
