//! Capture strategies: convert labeled syntactic spans into canonical
//! outline fragments.
//!
//! Strategies are stateless; the per-file dedup set is caller-supplied so a
//! single shared instance can serve concurrent extraction calls. The set
//! must not be shared across files.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::chunk::check_and_add;

/// Converts a single labeled span into zero-or-one outline fragment.
///
/// `start_row`/`end_row` are 0-indexed inclusive rows into `lines`. A
/// `start_row` past the end of the file means "no fragment", never an error.
pub trait CaptureStrategy: Send + Sync {
    fn parse_capture(
        &self,
        label: &str,
        lines: &[String],
        start_row: usize,
        end_row: usize,
        seen: &mut HashSet<String>,
    ) -> Option<String>;
}

/// Strategy for Python: `:` body token, decorator lookback.
pub struct PythonStrategy;

/// Strategy for brace-delimited families (Rust, Go, JS/TS, Java, C#, C,
/// C++, Kotlin, Swift, Scala, PHP, ...): `{`, `=>` and `;` body tokens,
/// `extends`/`implements` continuation lines.
pub struct BraceStrategy;

/// Strategy for stylesheet languages: selectors and at-rules keep their
/// first line only.
pub struct StylesheetStrategy;

/// Fallback strategy for everything without a family of its own.
pub struct DefaultStrategy;

static PYTHON_STRATEGY: PythonStrategy = PythonStrategy;
static BRACE_STRATEGY: BraceStrategy = BraceStrategy;
static STYLESHEET_STRATEGY: StylesheetStrategy = StylesheetStrategy;
static DEFAULT_STRATEGY: DefaultStrategy = DefaultStrategy;

static REGISTRY: Lazy<HashMap<&'static str, &'static dyn CaptureStrategy>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static dyn CaptureStrategy> = HashMap::new();
    map.insert("python", &PYTHON_STRATEGY);
    for language in [
        "rust",
        "go",
        "javascript",
        "typescript",
        "java",
        "csharp",
        "c",
        "cpp",
        "kotlin",
        "swift",
        "scala",
        "php",
        "dart",
        "zig",
    ] {
        map.insert(language, &BRACE_STRATEGY);
    }
    for language in ["css", "scss", "less"] {
        map.insert(language, &STYLESHEET_STRATEGY);
    }
    map
});

/// Look up the strategy for a language identifier. Unmapped identifiers get
/// the default strategy.
#[must_use]
pub fn strategy_for(language: &str) -> &'static dyn CaptureStrategy {
    REGISTRY
        .get(language)
        .copied()
        .unwrap_or(&DEFAULT_STRATEGY)
}

fn is_comment(label: &str) -> bool {
    label.contains("comment")
}

fn is_import(label: &str) -> bool {
    label.contains("import") || label.contains("module")
}

fn definition_kind(label: &str) -> Option<&str> {
    label
        .find("definition.")
        .map(|idx| &label[idx + "definition.".len()..])
}

fn span(lines: &[String], start_row: usize, end_row: usize) -> Option<&[String]> {
    if start_row >= lines.len() {
        return None;
    }
    let end = end_row.min(lines.len() - 1);
    Some(&lines[start_row..=end])
}

fn full_span(lines: &[String], start_row: usize, end_row: usize) -> Option<String> {
    span(lines, start_row, end_row).map(|lines| lines.join("\n"))
}

fn first_line(lines: &[String], start_row: usize) -> Option<String> {
    lines.get(start_row).map(|line| line.trim_end().to_string())
}

pub(crate) fn strip_body_marker(line: &str) -> String {
    let mut out = line.trim_end().to_string();
    if out.ends_with("{}") {
        out.truncate(out.len() - 2);
    } else if out.ends_with('{') {
        out.pop();
    }
    out.truncate(out.trim_end().len());
    out
}

/// Collect lines up to the first one containing a body token, with the
/// earliest token occurrence and everything after it removed.
fn signature_until_first(
    lines: &[String],
    start_row: usize,
    end_row: usize,
    tokens: &[&str],
) -> Option<String> {
    let span = span(lines, start_row, end_row)?;
    let mut collected = Vec::new();

    for line in span {
        let hit = tokens
            .iter()
            .filter_map(|token| line.find(token))
            .min();
        match hit {
            Some(idx) => {
                let head = line[..idx].trim_end();
                if !head.is_empty() {
                    collected.push(head.to_string());
                }
                return Some(collected.join("\n"));
            }
            None => collected.push(line.trim_end().to_string()),
        }
    }

    Some(collected.join("\n"))
}

/// Like `signature_until_first`, but truncating at the *last* token
/// occurrence on the hit line. Colon-delimited syntax needs this: the body
/// colon is the final one on the line, annotation colons come earlier.
fn signature_until_last(
    lines: &[String],
    start_row: usize,
    end_row: usize,
    token: char,
) -> Option<String> {
    let span = span(lines, start_row, end_row)?;
    let mut collected = Vec::new();

    for line in span {
        match line.rfind(token) {
            Some(idx) => {
                let head = line[..idx].trim_end();
                if !head.is_empty() {
                    collected.push(head.to_string());
                }
                return Some(collected.join("\n"));
            }
            None => collected.push(line.trim_end().to_string()),
        }
    }

    Some(collected.join("\n"))
}

/// Upward scan collecting decorator/annotation lines in original top-down
/// order; stops at the first non-matching line.
fn decorator_lookback(lines: &[String], start_row: usize, marker: char) -> Vec<String> {
    let mut decorators = Vec::new();
    let mut row = start_row.min(lines.len());

    while row > 0 {
        row -= 1;
        let line = lines[row].trim();
        if line.starts_with(marker) {
            decorators.push(line.to_string());
        } else {
            break;
        }
    }

    decorators.reverse();
    decorators
}

static PYTHON_DEF_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:async\s+)?def\s+(\w+)").expect("valid regex"));

static BRACE_DEF_NAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Keyword-introduced functions, including Go method receivers.
        r"\b(?:function|func|fn|fun|def)\s*(?:\([^)]*\)\s*)?\*?\s*([A-Za-z_$][\w$]*)",
        // Variable-bound functions (arrow and function expressions).
        r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=",
        // Anything else: first identifier before an argument list.
        r"([A-Za-z_$][\w$]*)\s*\(",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

fn python_symbol_name(signature: &str) -> Option<String> {
    PYTHON_DEF_NAME
        .captures(signature)
        .map(|caps| caps[1].to_string())
}

fn brace_symbol_name(signature: &str) -> Option<String> {
    BRACE_DEF_NAMES
        .iter()
        .find_map(|regex| regex.captures(signature).map(|caps| caps[1].to_string()))
}

/// Register a symbol name in the dedup set under a keyed namespace so it
/// cannot collide with textual dedup entries. Returns false on repeat.
fn register_symbol(name: &str, seen: &mut HashSet<String>) -> bool {
    seen.insert(format!("sym:{name}"))
}

impl CaptureStrategy for PythonStrategy {
    fn parse_capture(
        &self,
        label: &str,
        lines: &[String],
        start_row: usize,
        end_row: usize,
        seen: &mut HashSet<String>,
    ) -> Option<String> {
        if is_comment(label) || is_import(label) {
            let text = full_span(lines, start_row, end_row)?;
            return check_and_add(&text, seen);
        }

        match definition_kind(label) {
            Some("function") | Some("method") => {
                let signature = signature_until_last(lines, start_row, end_row, ':')?;
                if let Some(name) = python_symbol_name(&signature) {
                    if !register_symbol(&name, seen) {
                        return None;
                    }
                }
                let decorators = decorator_lookback(lines, start_row, '@');
                let fragment = if decorators.is_empty() {
                    signature
                } else {
                    format!("{}\n{}", decorators.join("\n"), signature)
                };
                check_and_add(&fragment, seen)
            }
            Some("class") => {
                let declaration = signature_until_last(lines, start_row, end_row, ':')?;
                let decorators = decorator_lookback(lines, start_row, '@');
                let fragment = if decorators.is_empty() {
                    declaration
                } else {
                    format!("{}\n{}", decorators.join("\n"), declaration)
                };
                check_and_add(&fragment, seen)
            }
            _ => {
                let line = first_line(lines, start_row)?;
                check_and_add(&line, seen)
            }
        }
    }
}

impl CaptureStrategy for BraceStrategy {
    fn parse_capture(
        &self,
        label: &str,
        lines: &[String],
        start_row: usize,
        end_row: usize,
        seen: &mut HashSet<String>,
    ) -> Option<String> {
        if is_comment(label) || is_import(label) {
            let text = full_span(lines, start_row, end_row)?;
            return check_and_add(&text, seen);
        }

        match definition_kind(label) {
            Some("function") | Some("method") => {
                let signature =
                    signature_until_first(lines, start_row, end_row, &["{", "=>", ";"])?;
                if let Some(name) = brace_symbol_name(&signature) {
                    if !register_symbol(&name, seen) {
                        return None;
                    }
                }
                check_and_add(&signature, seen)
            }
            Some("class") | Some("interface") | Some("type") | Some("enum") => {
                let declaration = strip_body_marker(lines.get(start_row)?);
                let mut fragment = declaration;
                if let Some(next) = lines.get(start_row + 1) {
                    let trimmed = next.trim();
                    if trimmed.starts_with("extends") || trimmed.starts_with("implements") {
                        fragment.push('\n');
                        fragment.push_str(&strip_body_marker(next));
                    }
                }
                check_and_add(&fragment, seen)
            }
            _ => {
                let line = first_line(lines, start_row)?;
                check_and_add(&strip_body_marker(&line), seen)
            }
        }
    }
}

impl CaptureStrategy for StylesheetStrategy {
    fn parse_capture(
        &self,
        label: &str,
        lines: &[String],
        start_row: usize,
        end_row: usize,
        seen: &mut HashSet<String>,
    ) -> Option<String> {
        if is_comment(label) || is_import(label) {
            let text = full_span(lines, start_row, end_row)?;
            return check_and_add(&text, seen);
        }

        // Selectors, at-rules and anything else keep their first line only.
        let line = first_line(lines, start_row)?;
        check_and_add(&strip_body_marker(&line), seen)
    }
}

impl CaptureStrategy for DefaultStrategy {
    fn parse_capture(
        &self,
        label: &str,
        lines: &[String],
        start_row: usize,
        end_row: usize,
        seen: &mut HashSet<String>,
    ) -> Option<String> {
        if is_comment(label) || is_import(label) {
            let text = full_span(lines, start_row, end_row)?;
            return check_and_add(&text, seen);
        }

        if definition_kind(label).is_some() {
            let line = first_line(lines, start_row)?;
            return check_and_add(&line, seen);
        }

        // Unclassified captures dedup by (label, start_row) identity, not by
        // content: meaningfully different spans can share text.
        let line = first_line(lines, start_row)?;
        if !seen.insert(format!("{label}@{start_row}")) {
            return None;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }
}
