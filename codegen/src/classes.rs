//! Class unit generation: one module per class.
//!
//! A class unit names the class, creates empty instances through the type
//! table, and borrows each effective property with its cardinality's
//! runtime type.

use ontogen_spec::{ClassDef, Vocabulary};

use crate::emit::{example_doc, join_module_doc, normalize_comment, RustFile};
use crate::mapping::{accessor_mut_name, accessor_name, module_name};

/// Generates `classes.rs` with one nested module per class.
pub fn generate_classes_file(vocabulary: &Vocabulary) -> String {
    let mut f = RustFile::new(&format!("Classes of the `{}` vocabulary.", vocabulary.name));
    for class in &vocabulary.classes {
        for line in class_doc(vocabulary, class) {
            f.doc_comment(&line);
        }
        f.open_module(&module_name(&class.name));
        write_class_body(&mut f, vocabulary, class);
        f.close();
        f.blank();
    }
    f.finish()
}

/// Generates `type_<name>.rs`, a single class unit.
pub fn generate_class_file(vocabulary: &Vocabulary, class: &ClassDef) -> String {
    let mut f = RustFile::new(&join_module_doc(&class_doc(vocabulary, class)));
    write_class_body(&mut f, vocabulary, class);
    f.finish()
}

fn class_doc(vocabulary: &Vocabulary, class: &ClassDef) -> Vec<String> {
    let mut lines = vec![match &class.comment {
        Some(comment) => format!("`{}`: {}", class.name, normalize_comment(comment)),
        None => format!("`{}`.", class.name),
    }];
    let ancestors: Vec<String> = vocabulary
        .ancestors(&class.name)
        .iter()
        .map(|c| format!("`{}`", c.name))
        .collect();
    if !ancestors.is_empty() {
        lines.push(String::new());
        lines.push(format!("Extends {}.", ancestors.join(", ")));
    }
    lines.extend(example_doc(&class.examples));
    lines
}

fn write_class_body(f: &mut RustFile, vocabulary: &Vocabulary, class: &ClassDef) {
    let properties = vocabulary.effective_properties(&class.name);
    let mut imports = vec!["Aggregate"];
    if properties.iter().any(|p| p.cardinality.is_functional()) {
        imports.push("FunctionalProperty");
    }
    if properties.iter().any(|p| !p.cardinality.is_functional()) {
        imports.push("NonFunctionalProperty");
    }
    imports.push("TypeTable");
    f.line(&format!("use ontogen_runtime::{{{}}};", imports.join(", ")));
    f.blank();

    f.doc_comment("Wire `type` of the class.");
    f.line(&format!("pub const NAME: &str = {:?};", class.name));
    f.blank();
    f.doc_comment(&format!("Creates an empty `{}`.", class.name));
    f.doc_comment("");
    f.doc_comment("Returns `None` if `table` was not built from this vocabulary.");
    f.line("#[must_use]");
    f.line("pub fn new(table: &TypeTable) -> Option<Aggregate> {");
    f.line("    table.new_aggregate(NAME)");
    f.line("}");

    for property in properties {
        let (wrapper, getter) = if property.cardinality.is_functional() {
            ("FunctionalProperty", "functional")
        } else {
            ("NonFunctionalProperty", "non_functional")
        };
        let accessor = accessor_name(&property.name);
        let accessor_mut = accessor_mut_name(&property.name);
        f.blank();
        f.doc_comment(&format!("Borrows the `{}` property.", property.name));
        f.line("#[must_use]");
        f.line(&format!(
            "pub fn {accessor}(value: &Aggregate) -> Option<&{wrapper}> {{"
        ));
        f.line(&format!("    value.{getter}({:?})", property.name));
        f.line("}");
        f.blank();
        f.doc_comment(&format!("Mutably borrows the `{}` property.", property.name));
        f.line(&format!(
            "pub fn {accessor_mut}(value: &mut Aggregate) -> Option<&mut {wrapper}> {{"
        ));
        f.line(&format!("    value.{getter}_mut({:?})", property.name));
        f.line("}");
    }
}
