//! `xsd:` literal kinds.
//!
//! | Kind                 | Rust type                            | Zero value          |
//! |----------------------|--------------------------------------|---------------------|
//! | `anyURI`             | `ontogen_runtime::Iri`               | `about:blank`       |
//! | `dateTime`           | `chrono::DateTime<FixedOffset>`      | Unix epoch          |
//! | `float`              | `f64`                                | `0.0`               |
//! | `string`             | `String`                             | `""`                |
//! | `boolean`            | `bool`                               | `false`             |
//! | `nonNegativeInteger` | `u64`                                | `0`                 |
//! | `duration`           | `chrono::Duration`                   | zero span           |
//! | `language`           | `String`                             | `""`                |
//!
//! Generated code reaches `chrono` through `ontogen_runtime::chrono`.

use ontogen_runtime::literal::{
    any_uri, boolean, date_time, duration, float, language, non_negative_integer, string,
};
use ontogen_runtime::LiteralCodec;

use crate::model::iris::XSD;
use crate::registry::TermOntology;
use crate::term::LiteralKindTerm;
use crate::values::LiteralKindDescriptor;

use super::term;

struct Row {
    name: &'static str,
    definition_type: &'static str,
    zero_value: &'static str,
    variant: &'static str,
    codec_path: &'static str,
    codec: LiteralCodec,
}

const ROWS: [Row; 8] = [
    Row {
        name: "anyURI",
        definition_type: "ontogen_runtime::Iri",
        zero_value: "about:blank",
        variant: "AnyUri",
        codec_path: "ontogen_runtime::literal::any_uri",
        codec: any_uri::CODEC,
    },
    Row {
        name: "dateTime",
        definition_type: "ontogen_runtime::chrono::DateTime<ontogen_runtime::chrono::FixedOffset>",
        zero_value: "ontogen_runtime::chrono::DateTime::UNIX_EPOCH.fixed_offset()",
        variant: "DateTime",
        codec_path: "ontogen_runtime::literal::date_time",
        codec: date_time::CODEC,
    },
    Row {
        name: "float",
        definition_type: "f64",
        zero_value: "0.0",
        variant: "Float",
        codec_path: "ontogen_runtime::literal::float",
        codec: float::CODEC,
    },
    Row {
        name: "string",
        definition_type: "String",
        zero_value: "String::new()",
        variant: "String",
        codec_path: "ontogen_runtime::literal::string",
        codec: string::CODEC,
    },
    Row {
        name: "boolean",
        definition_type: "bool",
        zero_value: "false",
        variant: "Boolean",
        codec_path: "ontogen_runtime::literal::boolean",
        codec: boolean::CODEC,
    },
    Row {
        name: "nonNegativeInteger",
        definition_type: "u64",
        zero_value: "0",
        variant: "NonNegativeInteger",
        codec_path: "ontogen_runtime::literal::non_negative_integer",
        codec: non_negative_integer::CODEC,
    },
    Row {
        name: "duration",
        definition_type: "ontogen_runtime::chrono::Duration",
        zero_value: "ontogen_runtime::chrono::Duration::zero()",
        variant: "Duration",
        codec_path: "ontogen_runtime::literal::duration",
        codec: duration::CODEC,
    },
    Row {
        name: "language",
        definition_type: "String",
        zero_value: "String::new()",
        variant: "Language",
        codec_path: "ontogen_runtime::literal::language",
        codec: language::CODEC,
    },
];

/// Returns the descriptor of the XSD kind called `name`.
#[must_use]
pub fn descriptor(name: &str) -> Option<LiteralKindDescriptor> {
    ROWS.iter().find(|r| r.name == name).map(|r| LiteralKindDescriptor {
        name: r.name.to_owned(),
        uri: format!("{XSD}{}", r.name),
        definition_type: r.definition_type,
        zero_value: r.zero_value,
        variant: r.variant,
        codec_path: r.codec_path,
        codec: r.codec,
    })
}

/// Returns the XSD ontology.
#[must_use]
pub fn ontology() -> TermOntology {
    let terms = ROWS
        .iter()
        .filter_map(|r| descriptor(r.name).map(|d| term(r.name, LiteralKindTerm::new(d))))
        .collect();
    TermOntology::new(XSD, terms)
}
