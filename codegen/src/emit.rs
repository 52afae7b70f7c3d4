//! Rust source emission helpers.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// An in-progress generated Rust source file.
pub struct RustFile {
    /// Source text written so far.
    pub buf: String,
    indent: usize,
}

impl RustFile {
    /// Starts a file with the generated-code marker and a module doc comment.
    ///
    /// `module_doc` may span several lines; continuation lines must carry
    /// their own `//!` prefix.
    pub fn new(module_doc: &str) -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str("// @generated by ontogen. Do not edit.\n\n");
        let _ = writeln!(buf, "//! {module_doc}");
        buf.push('\n');
        Self { buf, indent: 0 }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("    ");
        }
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes a `///` doc comment line; an empty string writes a bare `///`.
    pub fn doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            self.line("///");
        } else {
            self.line(&format!("/// {s}"));
        }
    }

    /// Writes each line of `text` as a doc comment line.
    pub fn doc_block(&mut self, text: &str) {
        for line in text.lines() {
            self.doc_comment(line.trim_end());
        }
    }

    /// Opens `pub mod name {` and indents what follows.
    pub fn open_module(&mut self, name: &str) {
        self.line(&format!("pub mod {name} {{"));
        self.indent += 1;
    }

    /// Closes the innermost open block.
    pub fn close(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.line("}");
    }

    /// Returns the finished source text.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error naming the path if a directory or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Joins doc lines into the `module_doc` form [`RustFile::new`] expects.
pub fn join_module_doc(lines: &[String]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(if line.is_empty() { "\n//!" } else { "\n//! " });
        }
        out.push_str(line);
    }
    out
}

/// Renders examples as fenced JSON blocks for doc comments.
pub fn example_doc(examples: &[serde_json::Value]) -> Vec<String> {
    let mut lines = Vec::new();
    for example in examples {
        let text = serde_json::to_string_pretty(example).unwrap_or_else(|_| example.to_string());
        lines.push(String::new());
        lines.push("# Example".to_owned());
        lines.push(String::new());
        lines.push("```json".to_owned());
        lines.extend(text.lines().map(str::to_owned));
        lines.push("```".to_owned());
    }
    lines
}

/// Collapses runs of whitespace, including newlines, to single spaces.
pub fn normalize_comment(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
