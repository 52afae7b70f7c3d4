//! Property unit generation: one module of accessor functions per property.
//!
//! Units are thin typed front-ends over the runtime's generic
//! `FunctionalProperty` and `NonFunctionalProperty`; each declared kind gets
//! an index constant and `is_`/`get_`/`set_` functions (plus positional
//! variants for non-functional properties).

use ontogen_spec::{Kind, PropertyDef, Vocabulary};

use crate::emit::{example_doc, join_module_doc, normalize_comment, RustFile};
use crate::mapping::{kind_idents, kind_rust_type, module_name, KindIdent};

/// Generates `properties.rs` with one nested module per property.
pub fn generate_properties_file(vocabulary: &Vocabulary) -> String {
    let mut f = RustFile::new(&format!(
        "Properties of the `{}` vocabulary.",
        vocabulary.name
    ));
    for property in &vocabulary.properties {
        for line in property_doc(property) {
            f.doc_comment(&line);
        }
        f.open_module(&module_name(&property.name));
        write_property_body(&mut f, property);
        f.close();
        f.blank();
    }
    f.finish()
}

/// Generates `property_<name>.rs`, a single property unit.
pub fn generate_property_file(property: &PropertyDef) -> String {
    let mut f = RustFile::new(&join_module_doc(&property_doc(property)));
    write_property_body(&mut f, property);
    f.finish()
}

fn property_doc(property: &PropertyDef) -> Vec<String> {
    let cardinality = if property.cardinality.is_functional() {
        "functional"
    } else {
        "non-functional"
    };
    let mut lines = vec![match &property.comment {
        Some(comment) => format!("`{}` ({cardinality}): {}", property.name, normalize_comment(comment)),
        None => format!("`{}` ({cardinality}).", property.name),
    }];
    if !property.kinds.is_empty() {
        let kinds: Vec<String> = property.kinds.iter().map(|k| format!("`{}`", k.name())).collect();
        lines.push(String::new());
        lines.push(format!("Kinds, in precedence order: {}.", kinds.join(", ")));
    }
    lines.extend(example_doc(&property.examples));
    lines
}

fn write_property_body(f: &mut RustFile, property: &PropertyDef) {
    let functional = property.cardinality.is_functional();
    let wrapper = if functional {
        "FunctionalProperty"
    } else {
        "NonFunctionalProperty"
    };
    let has_literal = property.kinds.iter().any(|k| matches!(k, Kind::Value(_)));
    let has_class = property.kinds.iter().any(|k| matches!(k, Kind::Class(_)));

    if !property.kinds.is_empty() {
        if has_literal {
            f.line("use ontogen_runtime::literal::LiteralValue;");
        }
        let mut imports = Vec::new();
        if has_class {
            imports.push("Aggregate");
        }
        imports.push(wrapper);
        if has_literal {
            imports.push("KindValue");
        }
        imports.push("PropertyError");
        f.line(&format!("use ontogen_runtime::{{{}}};", imports.join(", ")));
        f.blank();
    }

    f.doc_comment("Wire key of the property.");
    f.line(&format!("pub const NAME: &str = {:?};", property.name));
    for ident in kind_idents(property) {
        f.doc_comment(&format!("Kind index of `{}`.", ident.name));
        f.line(&format!("pub const {}: usize = {};", ident.constant, ident.index));
    }

    for (kind, ident) in property.kinds.iter().zip(kind_idents(property)) {
        f.blank();
        if functional {
            write_functional_accessors(f, kind, &ident);
        } else {
            write_sequence_accessors(f, kind, &ident);
        }
    }
}

/// Emits the tail of a getter reading the `Option<&KindValue>` at `lead`.
fn getter_tail(f: &mut RustFile, kind: &Kind, lead: &str) {
    match kind {
        Kind::Value(v) => {
            f.line(&format!("    match {lead}? {{"));
            f.line(&format!("        KindValue::Literal(LiteralValue::{}(v)) => Some(v),", v.variant));
            f.line("        _ => None,");
            f.line("    }");
        }
        Kind::Class(_) => f.line(&format!("    {lead}?.as_object()")),
    }
}

/// Documents the zero value of a literal kind on its getter.
fn zero_value_doc(f: &mut RustFile, kind: &Kind) {
    if let Kind::Value(v) = kind {
        f.doc_comment("");
        f.doc_comment(&format!("The zero value of `{}` is `{}`.", v.name, v.zero_value));
    }
}

fn wrapped(kind: &Kind, value: &str) -> String {
    match kind {
        Kind::Value(v) => format!("LiteralValue::{}({value})", v.variant),
        Kind::Class(_) => value.to_owned(),
    }
}

fn write_functional_accessors(f: &mut RustFile, kind: &Kind, ident: &KindIdent) {
    let KindIdent { name, suffix, constant, .. } = ident;
    let ty = kind_rust_type(kind);

    f.doc_comment(&format!("Returns true if the property holds a `{name}`."));
    f.line("#[must_use]");
    f.line(&format!("pub fn is_{suffix}(p: &FunctionalProperty) -> bool {{"));
    f.line(&format!("    p.is_kind({constant})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Returns the `{name}` value, if that is the kind held."));
    zero_value_doc(f, kind);
    f.line("#[must_use]");
    f.line(&format!("pub fn get_{suffix}(p: &FunctionalProperty) -> Option<&{ty}> {{"));
    getter_tail(f, kind, &format!("p.get({constant})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Sets a `{name}` value, replacing whatever the property held."));
    f.doc_comment("");
    f.doc_comment("# Errors");
    f.doc_comment("");
    f.doc_comment("Returns the runtime's error if the value does not fit the kind.");
    f.line(&format!(
        "pub fn set_{suffix}(p: &mut FunctionalProperty, value: {ty}) -> Result<(), PropertyError> {{"
    ));
    f.line(&format!("    p.set({constant}, {})", wrapped(kind, "value")));
    f.line("}");
}

fn write_sequence_accessors(f: &mut RustFile, kind: &Kind, ident: &KindIdent) {
    let KindIdent { name, suffix, constant, .. } = ident;
    let ty = kind_rust_type(kind);
    let value = wrapped(kind, "value");
    let errors = |f: &mut RustFile, what: &str| {
        f.doc_comment("");
        f.doc_comment("# Errors");
        f.doc_comment("");
        f.doc_comment(what);
    };

    f.doc_comment(&format!("Returns true if the element at `index` is a `{name}`."));
    f.line("#[must_use]");
    f.line(&format!(
        "pub fn is_{suffix}_at(p: &NonFunctionalProperty, index: usize) -> bool {{"
    ));
    f.line(&format!("    p.at(index).is_some_and(|c| c.cell().is_kind({constant}))"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Returns the `{name}` value at `index`, if that is the kind held there."));
    zero_value_doc(f, kind);
    f.line("#[must_use]");
    f.line(&format!(
        "pub fn get_{suffix}_at(p: &NonFunctionalProperty, index: usize) -> Option<&{ty}> {{"
    ));
    getter_tail(f, kind, &format!("p.at(index)?.cell().get({constant})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Appends a `{name}` value."));
    errors(f, "Returns the runtime's error if the value does not fit the kind.");
    f.line(&format!(
        "pub fn append_{suffix}(p: &mut NonFunctionalProperty, value: {ty}) -> Result<(), PropertyError> {{"
    ));
    f.line(&format!("    p.append({constant}, {value})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Prepends a `{name}` value."));
    errors(f, "Returns the runtime's error if the value does not fit the kind.");
    f.line(&format!(
        "pub fn prepend_{suffix}(p: &mut NonFunctionalProperty, value: {ty}) -> Result<(), PropertyError> {{"
    ));
    f.line(&format!("    p.prepend({constant}, {value})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Inserts a `{name}` value at `index`, shifting later elements."));
    errors(
        f,
        "Returns the runtime's error if `index` is past the end or the value does not fit the kind.",
    );
    f.line(&format!(
        "pub fn insert_{suffix}_at(p: &mut NonFunctionalProperty, index: usize, value: {ty}) -> Result<(), PropertyError> {{"
    ));
    f.line(&format!("    p.insert_at(index, {constant}, {value})"));
    f.line("}");
    f.blank();

    f.doc_comment(&format!("Replaces the element at `index` with a `{name}` value."));
    errors(
        f,
        "Returns the runtime's error if there is no such element or the value does not fit the kind.",
    );
    f.line(&format!(
        "pub fn set_{suffix}_at(p: &mut NonFunctionalProperty, index: usize, value: {ty}) -> Result<(), PropertyError> {{"
    ));
    f.line(&format!("    p.set_at(index, {constant}, {value})"));
    f.line("}");
}
