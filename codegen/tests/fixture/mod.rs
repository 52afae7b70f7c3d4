// @generated by ontogen. Do not edit.

//! `Fixture` vocabulary (`https://example.org/fixture`).
//!
//! Module path: `fixture`. Classes: 1. Properties: 4.

pub mod classes;
pub mod properties;
pub mod table;

pub use table::type_table;
