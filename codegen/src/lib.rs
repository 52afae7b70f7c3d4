//! Ontogen code generator.
//!
//! Walks a compiled [`Vocabulary`] and writes Rust source for it: one unit
//! of typed accessors per property, one unit per class, and a `table.rs`
//! whose `type_table()` rebuilds the runtime [`TypeTable`] the units
//! operate on. A JSON-LD dump of the vocabulary is written alongside.
//!
//! [`build_type_table`] gives the same table in memory, without writing
//! anything.
//!
//! [`TypeTable`]: ontogen_runtime::TypeTable

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classes;
pub mod emit;
pub mod layout;
pub mod mapping;
pub mod properties;
pub mod table;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ontogen_spec::serializer::jsonld::to_json_ld;
use ontogen_spec::Vocabulary;

use emit::RustFile;
pub use layout::GeneratorConfig;
pub use table::build_type_table;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of property units generated.
    pub property_count: usize,
    /// Number of class units generated.
    pub class_count: usize,
    /// Number of literal kinds in use.
    pub value_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Generates every unit of `vocabulary` under `config.out_dir`.
///
/// # Errors
///
/// Returns an error if two terms map to the same module or file name, or if
/// any file cannot be written.
pub fn generate(vocabulary: &Vocabulary, config: &GeneratorConfig) -> Result<GenerationReport> {
    let dir = config.vocabulary_dir(&vocabulary.name);
    let mut report = GenerationReport {
        property_count: vocabulary.properties.len(),
        class_count: vocabulary.classes.len(),
        value_count: vocabulary.values.len(),
        files: Vec::new(),
    };
    let mut modules: Vec<String> = Vec::new();

    // 1. Property and class units
    if config.individual {
        check_unique(
            vocabulary
                .properties
                .iter()
                .map(|p| (layout::property_file(&p.name), p.name.as_str()))
                .chain(
                    vocabulary
                        .classes
                        .iter()
                        .map(|c| (layout::class_file(&c.name), c.name.as_str())),
                ),
        )?;
        for property in &vocabulary.properties {
            let file = layout::property_file(&property.name);
            let content = properties::generate_property_file(property);
            write(config, &dir.join(&file), &content, &mut report)
                .with_context(|| format!("Failed to generate property {}", property.name))?;
            modules.push(file.trim_end_matches(".rs").to_owned());
        }
        for class in &vocabulary.classes {
            let file = layout::class_file(&class.name);
            let content = classes::generate_class_file(vocabulary, class);
            write(config, &dir.join(&file), &content, &mut report)
                .with_context(|| format!("Failed to generate class {}", class.name))?;
            modules.push(file.trim_end_matches(".rs").to_owned());
        }
    } else {
        check_unique(
            vocabulary
                .properties
                .iter()
                .map(|p| (mapping::module_name(&p.name), p.name.as_str())),
        )?;
        check_unique(
            vocabulary
                .classes
                .iter()
                .map(|c| (mapping::module_name(&c.name), c.name.as_str())),
        )?;
        let content = properties::generate_properties_file(vocabulary);
        write(config, &dir.join("properties.rs"), &content, &mut report)?;
        let content = classes::generate_classes_file(vocabulary);
        write(config, &dir.join("classes.rs"), &content, &mut report)?;
        modules.push("classes".to_owned());
        modules.push("properties".to_owned());
    }

    // 2. Type table
    let content = table::generate_table_file(vocabulary);
    write(config, &dir.join("table.rs"), &content, &mut report)?;
    modules.push("table".to_owned());

    // 3. Module root
    let content = generate_mod_rs(vocabulary, config, &modules);
    write(config, &dir.join("mod.rs"), &content, &mut report)?;

    // 4. JSON-LD dump of the model
    let dump = serde_json::to_string_pretty(&to_json_ld(vocabulary))
        .context("Failed to serialize the vocabulary dump")?;
    write(config, &dir.join("vocabulary.jsonld"), &dump, &mut report)?;

    log::info!(
        "generated {} ({} files) in {}",
        vocabulary.name,
        report.files.len(),
        dir.display()
    );
    Ok(report)
}

fn write(
    config: &GeneratorConfig,
    path: &Path,
    content: &str,
    report: &mut GenerationReport,
) -> Result<()> {
    emit::write_file(path, content)?;
    report
        .files
        .push(layout::display_relative(path, &config.out_dir));
    Ok(())
}

/// Fails if two terms map to the same generated name.
fn check_unique<'a>(names: impl Iterator<Item = (String, &'a str)>) -> Result<()> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for (generated, term) in names {
        if let Some(first) = seen.insert(generated.clone(), term) {
            bail!("terms {first} and {term} both generate {generated}");
        }
    }
    Ok(())
}

/// Generates the vocabulary's `mod.rs`.
fn generate_mod_rs(vocabulary: &Vocabulary, config: &GeneratorConfig, modules: &[String]) -> String {
    let mut f = RustFile::new(&format!(
        "`{}` vocabulary (`{}`).\n\
         //!\n\
         //! Module path: `{}`. Classes: {}. Properties: {}.",
        vocabulary.name,
        vocabulary.uri,
        config.module_path(&vocabulary.name),
        vocabulary.classes.len(),
        vocabulary.properties.len(),
    ));
    let mut sorted: Vec<&str> = modules.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    for module in sorted {
        f.line(&format!("pub mod {module};"));
    }
    f.blank();
    f.line("pub use table::type_table;");
    f.finish()
}
