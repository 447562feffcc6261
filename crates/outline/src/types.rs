use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::language;

/// A source file prepared for a single extraction call.
///
/// The line sequence is 1:1 with the raw content split on newline. The file
/// is immutable once built; extraction never mutates it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Source file path
    pub path: PathBuf,

    /// Language identifier from the classification table
    pub language: &'static str,

    /// Raw content split on newline
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Build a source file from raw content, classifying the language from
    /// the file name.
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        let language = language::classify_path(&path);
        let lines = content.lines().map(str::to_string).collect();
        Self {
            path,
            language,
            lines,
        }
    }

    /// Build a source file with an explicit language identifier.
    pub fn with_language(path: impl Into<PathBuf>, content: &str, language: &'static str) -> Self {
        let lines = content.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            language,
            lines,
        }
    }

    /// Total character count across all lines, newlines included
    #[must_use]
    pub fn char_len(&self) -> usize {
        let newlines = self.lines.len().saturating_sub(1);
        self.lines.iter().map(String::len).sum::<usize>() + newlines
    }

    /// File path as displayable text, workspace-relative when under `root`
    #[must_use]
    pub fn display_path(&self, root: Option<&Path>) -> String {
        display_path(&self.path, root)
    }
}

/// Render a path workspace-relative when it falls under `root`, otherwise
/// as given.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    match root.and_then(|r| path.strip_prefix(r).ok()) {
        Some(relative) => relative.display().to_string(),
        None => path.display().to_string(),
    }
}

/// A labeled syntactic span supplied by an external boundary-detection
/// facility. Rows are 0-indexed and inclusive. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Namespaced label, e.g. `comment`, `definition.function`
    pub label: String,

    /// First row of the span (0-indexed)
    pub start_row: usize,

    /// Last row of the span (0-indexed, inclusive)
    pub end_row: usize,
}

impl Capture {
    #[must_use]
    pub fn new(label: impl Into<String>, start_row: usize, end_row: usize) -> Self {
        Self {
            label: label.into(),
            start_row,
            end_row,
        }
    }
}

/// A contiguous span of lines with materialized text, prior to dedup and
/// merge. Ephemeral within one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The materialized fragment text
    pub content: String,

    /// First row of the span (0-indexed)
    pub start_row: usize,

    /// Last row of the span (0-indexed, inclusive)
    pub end_row: usize,
}

impl Chunk {
    #[must_use]
    pub fn new(content: impl Into<String>, start_row: usize, end_row: usize) -> Self {
        Self {
            content: content.into(),
            start_row,
            end_row,
        }
    }
}

/// Ordered outline lines for one file; insertion order is discovery order.
/// Lines may carry indentation to express nesting (method under class).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    lines: Vec<String>,
}

impl ExtractionResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outline line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append every line of a (possibly multi-line) fragment
    pub fn push_fragment(&mut self, fragment: &str) {
        for line in fragment.lines() {
            self.lines.push(line.to_string());
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Outline lines in discovery order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for ExtractionResult {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn source_file_splits_lines() {
        let file = SourceFile::new("test.py", "a\nb\nc");
        assert_eq!(file.language, "python");
        assert_eq!(file.lines, vec!["a", "b", "c"]);
        assert_eq!(file.char_len(), 5);
    }

    #[test]
    fn display_path_relative_under_root() {
        let path = PathBuf::from("/ws/src/main.rs");
        assert_eq!(display_path(&path, Some(Path::new("/ws"))), "src/main.rs");
        assert_eq!(display_path(&path, Some(Path::new("/other"))), "/ws/src/main.rs");
        assert_eq!(display_path(&path, None), "/ws/src/main.rs");
    }

    #[test]
    fn extraction_result_fragment_split() {
        let mut result = ExtractionResult::new();
        result.push_fragment("class Foo {\n  extends Bar");
        assert_eq!(result.lines(), ["class Foo {", "  extends Bar"]);
    }
}
