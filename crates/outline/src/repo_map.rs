use std::path::{Path, PathBuf};

use crate::config::OutlineConfig;
use crate::extractor::OutlineExtractor;
use crate::language;
use crate::types::display_path;

/// Aggregates per-file outlines across a batch of paths into one text
/// document.
///
/// Files are visited in sorted order; unsupported, unreadable, oversized
/// and outline-less files are skipped; the batch stops after `max_files`
/// contributing files and reports how many paths were left unvisited. A
/// single-file failure never aborts the batch.
pub struct RepoMapBuilder {
    config: OutlineConfig,
    extractor: OutlineExtractor,
}

impl RepoMapBuilder {
    #[must_use]
    pub fn new(config: OutlineConfig) -> Self {
        let extractor = OutlineExtractor::new(config.clone());
        Self { config, extractor }
    }

    /// Render the repo map for `paths`. Display paths are made relative to
    /// `workspace_root` when they fall under it.
    pub fn build(&self, paths: &[PathBuf], workspace_root: Option<&Path>) -> String {
        let mut sorted: Vec<&PathBuf> = paths.iter().collect();
        sorted.sort();

        let mut out = String::new();
        let mut processed = 0;

        for (visited, path) in sorted.iter().enumerate() {
            if processed >= self.config.max_files {
                let remaining = sorted.len() - visited;
                out.push_str(&format!("... and {remaining} more files\n"));
                break;
            }

            let language = language::classify_path(path);
            if !OutlineExtractor::supports(language) {
                continue;
            }

            let outline = self.extractor.extract_path(path);
            if outline.is_empty() {
                continue;
            }

            processed += 1;
            out.push_str(&display_path(path, workspace_root));
            out.push_str(":\n");
            for line in outline.lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &OutlineConfig {
        &self.config
    }
}

impl Default for RepoMapBuilder {
    fn default() -> Self {
        Self::new(OutlineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_header_outline_and_separator() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("svc.go"), "func Run() error {\n  return nil\n}\n").unwrap();

        let builder = RepoMapBuilder::default();
        let map = builder.build(&[root.join("svc.go")], Some(root));

        assert_eq!(map, "svc.go:\n  func Run() error\n\n");
    }

    #[test]
    fn skips_unsupported_and_empty_files() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("notes.md"), "# nothing structural\n").unwrap();
        fs::write(root.join("empty.go"), "// no declarations\n").unwrap();
        fs::write(root.join("svc.go"), "func Run() {}\n").unwrap();

        let builder = RepoMapBuilder::default();
        let map = builder.build(
            &[
                root.join("notes.md"),
                root.join("empty.go"),
                root.join("svc.go"),
            ],
            Some(root),
        );

        assert!(map.starts_with("svc.go:"));
        assert!(!map.contains("notes.md"));
        assert!(!map.contains("empty.go"));
    }

    #[test]
    fn unreadable_file_does_not_abort_batch() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("svc.go"), "func Run() {}\n").unwrap();

        let builder = RepoMapBuilder::default();
        let map = builder.build(&[root.join("missing.go"), root.join("svc.go")], Some(root));

        assert!(map.contains("svc.go:"));
        assert!(!map.contains("missing.go"));
    }

    #[test]
    fn file_cap_appends_remaining_trailer() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        for name in ["a.go", "b.go", "c.go", "d.go"] {
            fs::write(root.join(name), "func Run() {}\n").unwrap();
        }

        let builder = RepoMapBuilder::new(OutlineConfig {
            max_files: 2,
            ..Default::default()
        });
        let paths: Vec<PathBuf> = ["a.go", "b.go", "c.go", "d.go"]
            .iter()
            .map(|name| root.join(name))
            .collect();
        let map = builder.build(&paths, Some(root));

        assert!(map.contains("a.go:"));
        assert!(map.contains("b.go:"));
        assert!(!map.contains("c.go:"));
        assert!(map.ends_with("... and 2 more files\n"));
    }

    #[test]
    fn paths_outside_root_keep_their_original_form() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::write(root.join("svc.go"), "func Run() {}\n").unwrap();

        let builder = RepoMapBuilder::default();
        let other_root = root.join("elsewhere");
        let map = builder.build(&[root.join("svc.go")], Some(&other_root));

        let expected_header = format!("{}:", root.join("svc.go").display());
        assert!(map.starts_with(&expected_header));
    }
}
