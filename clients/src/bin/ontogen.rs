//! `ontogen`: compiles a vocabulary schema document into Rust source.
//!
//! Reads the schema, resolves its terms against the built-in ontologies,
//! builds the vocabulary model, and writes the generated units.
//!
//! **Usage:**
//! ```text
//! ontogen [--input <path>] [--prefix <module path>] [--individual] [--out <dir>]
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for traversal diagnostics.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ontogen_codegen::GeneratorConfig;
use ontogen_spec::Registry;

/// Compile a vocabulary schema into typed Rust source.
#[derive(Parser)]
#[command(name = "ontogen", about = "Compile a vocabulary schema into typed Rust source")]
struct Args {
    /// Schema document to compile.
    #[arg(long, default_value = "spec.json")]
    input: PathBuf,

    /// Module path the generated vocabulary is rooted under.
    #[arg(long, default_value = "")]
    prefix: String,

    /// Emit one unit per property and class instead of one per vocabulary.
    #[arg(long)]
    individual: bool,

    /// Output directory for generated source.
    #[arg(long, default_value = "generated")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let vocabulary = ontogen_spec::compile_str(&text, Registry::shared())
        .with_context(|| format!("Failed to compile {}", args.input.display()))?;

    println!(
        "Vocabulary {} ({}): {} classes, {} properties, {} literal kinds",
        vocabulary.name,
        vocabulary.uri,
        vocabulary.classes.len(),
        vocabulary.properties.len(),
        vocabulary.values.len()
    );
    if !vocabulary.passthrough.is_empty() {
        println!(
            "Kept {} members with unrecognized types as passthrough",
            vocabulary.passthrough.len()
        );
    }

    let config = GeneratorConfig {
        out_dir: args.out,
        prefix: args.prefix,
        individual: args.individual,
    };
    let report = match ontogen_codegen::generate(&vocabulary, &config) {
        Ok(report) => report,
        Err(err) => {
            // A partial tree is never valid output
            let dir = config.vocabulary_dir(&vocabulary.name);
            if dir.exists() {
                if let Err(cleanup) = fs::remove_dir_all(&dir) {
                    log::warn!("could not remove partial output {}: {cleanup}", dir.display());
                }
            }
            return Err(err.context(format!("Failed to generate {}", vocabulary.name)));
        }
    };

    println!(
        "Generated {} property units, {} class units",
        report.property_count, report.class_count
    );
    println!("Files written ({}):", report.files.len());
    for file in &report.files {
        println!("  {file}");
    }

    println!("Generation complete.");
    Ok(())
}
