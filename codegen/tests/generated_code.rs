//! The checked-in `fixture/` tree is generator output for [`schema`],
//! compiled into this test crate against `ontogen-runtime` alone.
//!
//! Run with `ONTOGEN_UPDATE_FIXTURE=1` to rewrite the tree after changing
//! the generator.

use std::path::Path;

use ontogen_codegen::{generate, GeneratorConfig};
use ontogen_runtime::chrono::{DateTime, Duration};
use ontogen_runtime::document;
use ontogen_spec::{compile, Registry};
use serde_json::{json, Value};

#[allow(dead_code)]
#[path = "fixture/mod.rs"]
mod fixture;

use fixture::classes::foo;
use fixture::properties::{durations, p, published, tags};

const FIXTURE_FILES: [&str; 4] = ["classes.rs", "mod.rs", "properties.rs", "table.rs"];

fn schema() -> Value {
    json!({
        "@context": {
            "xsd": "http://www.w3.org/2001/XMLSchema#",
            "owl": "http://www.w3.org/2002/07/owl#",
            "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
            "ex": "https://example.org/fixture#"
        },
        "@id": "https://example.org/fixture",
        "name": "Fixture",
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
            },
            {
                "@id": "ex:published",
                "@type": ["rdf:Property", "owl:FunctionalProperty"],
                "rdfs:domain": "ex:Foo",
                "rdfs:range": "xsd:dateTime"
            },
            {
                "@id": "ex:durations",
                "@type": "rdf:Property",
                "owl:maxCardinality": "*",
                "rdfs:domain": "ex:Foo",
                "rdfs:range": "xsd:duration"
            }
        ]
    })
}

#[test]
fn fixture_matches_the_generator() {
    let vocabulary = compile(&schema(), Registry::shared()).expect("schema compiles");
    let out = tempfile::tempdir().expect("tempdir");
    let config = GeneratorConfig {
        out_dir: out.path().to_path_buf(),
        prefix: String::new(),
        individual: false,
    };
    generate(&vocabulary, &config).expect("generation succeeds");

    let generated = out.path().join("fixture");
    let checked_in = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixture");
    let update = std::env::var_os("ONTOGEN_UPDATE_FIXTURE").is_some();
    for file in FIXTURE_FILES {
        let fresh = std::fs::read_to_string(generated.join(file)).expect("read generated file");
        if update {
            std::fs::write(checked_in.join(file), &fresh).expect("update fixture");
            continue;
        }
        let kept = std::fs::read_to_string(checked_in.join(file)).expect("read fixture");
        assert!(
            fresh == kept,
            "tests/fixture/{file} is stale; rerun with ONTOGEN_UPDATE_FIXTURE=1"
        );
    }
}

#[test]
fn setting_a_kind_through_generated_accessors() {
    let table = fixture::type_table();
    let mut value = foo::new(&table).expect("Foo is in the table");
    let inner = foo::new(&table).expect("Foo is in the table");
    let prop = foo::p_mut(&mut value).expect("Foo has p");

    p::set_string(prop, "a".to_owned()).expect("string fits");
    assert!(p::is_string(prop));
    assert!(!p::is_foo(prop));
    assert_eq!(prop.kind_index(), p::STRING as isize);
    assert_eq!(p::get_string(prop).map(String::as_str), Some("a"));
    assert_eq!(prop.serialize().expect("serializes"), json!("a"));

    p::set_foo(prop, inner).expect("Foo fits");
    assert!(p::is_foo(prop));
    assert_eq!(prop.kind_index(), 1);
    assert!(p::get_string(prop).is_none());
    assert_eq!(p::get_foo(prop).map(|f| f.class_name()), Some(foo::NAME));
}

#[test]
fn sequences_keep_generated_insertion_order() {
    let table = fixture::type_table();
    let mut value = foo::new(&table).expect("Foo is in the table");
    let list = foo::tags_mut(&mut value).expect("Foo has tags");

    tags::append_string(list, "b".to_owned()).expect("append");
    tags::prepend_string(list, "a".to_owned()).expect("prepend");
    tags::insert_string_at(list, 1, "ab".to_owned()).expect("insert");
    assert!(tags::insert_string_at(list, 9, "z".to_owned()).is_err());
    tags::set_string_at(list, 2, "c".to_owned()).expect("set");

    let held: Vec<&str> = (0..list.len())
        .filter_map(|i| tags::get_string_at(list, i).map(String::as_str))
        .collect();
    assert_eq!(held, ["a", "ab", "c"]);
    assert!(tags::is_string_at(list, 0));
    assert!(!tags::is_string_at(list, 3));
}

#[test]
fn time_kinds_round_trip_through_documents() {
    let table = fixture::type_table();
    let mut value = foo::new(&table).expect("Foo is in the table");
    let when = DateTime::parse_from_rfc3339("2024-03-01T12:30:00+02:00").expect("timestamp");
    let span = Duration::try_minutes(90).expect("duration");

    published::set_date_time(foo::published_mut(&mut value).expect("published"), when)
        .expect("dateTime fits");
    let spans = foo::durations_mut(&mut value).expect("durations");
    durations::append_duration(spans, span).expect("duration fits");
    durations::append_duration(spans, Duration::zero()).expect("duration fits");

    let encoded = document::serialize(&value).expect("encodes");
    assert_eq!(encoded["type"], json!(foo::NAME));
    let decoded = document::deserialize(&encoded, &table).expect("decodes");

    let published_again = foo::published(&decoded).expect("published");
    assert_eq!(published::get_date_time(published_again), Some(&when));
    let spans_again = foo::durations(&decoded).expect("durations");
    assert_eq!(durations::get_duration_at(spans_again, 0), Some(&span));
    assert_eq!(durations::get_duration_at(spans_again, 1), Some(&Duration::zero()));
}
