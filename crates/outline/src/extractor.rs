use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::ast_walker::PythonAstWalker;
use crate::capture::strategy_for;
use crate::chunk::{filter_duplicated_chunks, merge_adjacent_chunks};
use crate::config::OutlineConfig;
use crate::error::Result;
use crate::patterns::{match_lines, pattern_table};
use crate::types::{Capture, Chunk, ExtractionResult, SourceFile};

/// Per-file outline extraction.
///
/// Python gets the native-syntax walker; every other mapped language goes
/// through its heuristic pattern table; unmapped languages yield an empty
/// outline. No failure here ever crosses a file boundary: unreadable and
/// oversized files contribute nothing, a native parse failure degrades to
/// the dedicated fallback table for that file only.
pub struct OutlineExtractor {
    config: OutlineConfig,
}

impl OutlineExtractor {
    #[must_use]
    pub fn new(config: OutlineConfig) -> Self {
        config
            .validate()
            .expect("Invalid outline configuration provided");
        Self { config }
    }

    /// True when the language can produce a non-empty outline.
    #[must_use]
    pub fn supports(language: &str) -> bool {
        language == "python" || pattern_table(language).is_some()
    }

    /// Extract the outline for one prepared source file.
    pub fn extract(&self, file: &SourceFile) -> ExtractionResult {
        if file.char_len() > self.config.max_file_chars {
            log::debug!(
                "Skipping large file {} ({} chars > {})",
                file.path.display(),
                file.char_len(),
                self.config.max_file_chars
            );
            return ExtractionResult::new();
        }

        if file.language == "python" {
            match Self::extract_native(file) {
                Ok(result) => return result,
                Err(e) => log::warn!(
                    "Native parse failed for {}, falling back to patterns: {e}",
                    file.path.display()
                ),
            }
        }

        self.extract_heuristic(file)
    }

    /// Read and extract a file from disk. Unreadable files yield an empty
    /// outline.
    pub fn extract_path(&self, path: &Path) -> ExtractionResult {
        match fs::read_to_string(path) {
            Ok(content) => self.extract(&SourceFile::new(path, &content)),
            Err(e) => {
                log::debug!("Skipping unreadable file {}: {e}", path.display());
                ExtractionResult::new()
            }
        }
    }

    /// Outline a file from externally supplied boundary captures: the
    /// language's capture strategy materializes fragments, then the chunk
    /// passes dedup and merge them into ordered lines.
    pub fn outline_from_captures(
        &self,
        file: &SourceFile,
        captures: &[Capture],
    ) -> ExtractionResult {
        if file.char_len() > self.config.max_file_chars {
            return ExtractionResult::new();
        }

        let strategy = strategy_for(file.language);
        let last_row = file.lines.len().saturating_sub(1);
        let mut seen: HashSet<String> = HashSet::new();
        let mut chunks: Vec<Chunk> = Vec::new();

        for capture in captures {
            if let Some(fragment) = strategy.parse_capture(
                &capture.label,
                &file.lines,
                capture.start_row,
                capture.end_row,
                &mut seen,
            ) {
                chunks.push(Chunk::new(
                    fragment,
                    capture.start_row,
                    capture.end_row.min(last_row),
                ));
            }
        }

        let chunks = merge_adjacent_chunks(filter_duplicated_chunks(chunks));

        let mut result = ExtractionResult::new();
        for chunk in &chunks {
            result.push_fragment(&chunk.content);
        }
        result
    }

    fn extract_native(file: &SourceFile) -> Result<ExtractionResult> {
        let mut walker = PythonAstWalker::new()?;
        walker.outline(&file.lines.join("\n"))
    }

    fn extract_heuristic(&self, file: &SourceFile) -> ExtractionResult {
        match pattern_table(file.language) {
            Some(table) => match_lines(&file.lines, table).into(),
            None => ExtractionResult::new(),
        }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &OutlineConfig {
        &self.config
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new(OutlineConfig::default())
    }
}
