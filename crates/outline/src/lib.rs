//! # Codeskim Outline
//!
//! Condenses source files into compact structural outlines — signatures,
//! declarations, imports, comments, never bodies — for inclusion in
//! AI-assistant prompts.
//!
//! ## Architecture
//!
//! ```text
//! File paths
//!     │
//!     ├──> Language Classification (filename/extension tables)
//!     │
//!     ├──> Outline Extraction
//!     │    ├─> Native-syntax walker (Python, tree-sitter)
//!     │    ├─> Heuristic pattern tables (everything else)
//!     │    └─> Capture strategies (external boundary spans)
//!     │
//!     ├──> Chunk Passes (dedup by row, adjacency merge)
//!     │
//!     └──> Repo Map (per-file headers, two-space indent, file cap)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codeskim_outline::{OutlineExtractor, SourceFile};
//!
//! let extractor = OutlineExtractor::default();
//! let file = SourceFile::new("app.py", "def greet(name):\n    print(name)\n");
//! let outline = extractor.extract(&file);
//! assert_eq!(outline.lines(), ["def greet(name)"]);
//! ```

mod ast_walker;
mod capture;
mod chunk;
mod config;
mod error;
mod extractor;
mod language;
mod patterns;
mod repo_map;
mod types;

pub use capture::{
    strategy_for, BraceStrategy, CaptureStrategy, DefaultStrategy, PythonStrategy,
    StylesheetStrategy,
};
pub use chunk::{check_and_add, filter_duplicated_chunks, merge_adjacent_chunks};
pub use config::OutlineConfig;
pub use error::{OutlineError, Result};
pub use extractor::OutlineExtractor;
pub use language::{classify, classify_path};
pub use patterns::{match_lines, pattern_table, PatternSpec};
pub use repo_map::RepoMapBuilder;
pub use types::{display_path, Capture, Chunk, ExtractionResult, SourceFile};
