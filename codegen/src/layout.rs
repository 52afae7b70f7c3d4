//! Output layout: where each generated unit is written.

use std::path::{Path, PathBuf};

use crate::mapping::to_snake_case;

/// Generator settings, as given on the command line.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the generated tree is written under.
    pub out_dir: PathBuf,
    /// Module path, `::`- or `/`-separated, the vocabulary is rooted under.
    /// Empty roots it directly in `out_dir`.
    pub prefix: String,
    /// Write one unit per property and class instead of one per vocabulary.
    pub individual: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("generated"),
            prefix: String::new(),
            individual: false,
        }
    }
}

impl GeneratorConfig {
    /// Prefix segments as module names.
    pub fn prefix_segments(&self) -> Vec<String> {
        self.prefix
            .split(['/', ':'])
            .filter(|s| !s.is_empty())
            .map(to_snake_case)
            .collect()
    }

    /// Directory holding a vocabulary's units.
    pub fn vocabulary_dir(&self, vocabulary: &str) -> PathBuf {
        let mut dir = self.out_dir.clone();
        for segment in self.prefix_segments() {
            dir.push(segment);
        }
        dir.push(to_snake_case(vocabulary));
        dir
    }

    /// Rust module path of a vocabulary, relative to the crate root.
    pub fn module_path(&self, vocabulary: &str) -> String {
        let mut segments = self.prefix_segments();
        segments.push(to_snake_case(vocabulary));
        segments.join("::")
    }
}

/// File name of a property unit under `--individual`.
pub fn property_file(name: &str) -> String {
    format!("property_{}.rs", to_snake_case(name).trim_end_matches('_'))
}

/// File name of a class unit under `--individual`.
pub fn class_file(name: &str) -> String {
    format!("type_{}.rs", to_snake_case(name).trim_end_matches('_'))
}

/// Returns `path` relative to `base` for reporting, or `path` itself.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
