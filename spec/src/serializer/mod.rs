//! Serializers for a finished [`Vocabulary`](crate::Vocabulary).
//!
//! - **JSON-LD** ([`jsonld`]): the schema document format the parser reads,
//!   written next to generated code as `vocabulary.jsonld`.

pub mod jsonld;
