//! Heuristic pattern tables for languages without a native-syntax walker.
//!
//! Each family owns an ordered list of (pattern, capture-group) pairs,
//! evaluated in declared order for reproducible output. The first pattern
//! matching a line wins that line; the first occurrence of each distinct
//! symbol name wins the file.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::capture::strip_body_marker;

/// One heuristic pattern: a regex plus the index of its symbol-name group.
pub struct PatternSpec {
    pub regex: Regex,
    pub group: usize,
}

fn spec(pattern: &str, group: usize) -> PatternSpec {
    PatternSpec {
        regex: Regex::new(pattern).expect("valid pattern"),
        group,
    }
}

/// Control-flow keywords that heuristic name groups must never treat as
/// symbols. The broad method/function patterns can land on these.
const RESERVED_NAMES: &[&str] = &[
    "if", "else", "elif", "for", "while", "switch", "match", "catch", "do", "return", "new",
    "try", "unless",
];

static RUST_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r#"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+"[^"]*"\s+)?fn\s+(\w+)"#,
            1,
        ),
        spec(r"^\s*(?:pub(?:\([^)]*\))?\s+)?struct\s+(\w+)", 1),
        spec(r"^\s*(?:pub(?:\([^)]*\))?\s+)?enum\s+(\w+)", 1),
        spec(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:unsafe\s+)?trait\s+(\w+)", 1),
        spec(r"^\s*(?:pub(?:\([^)]*\))?\s+)?type\s+(\w+)", 1),
        spec(r"^\s*(?:pub(?:\([^)]*\))?\s+)?mod\s+(\w+)", 1),
        spec(r"^\s*macro_rules!\s+(\w+)", 1),
    ]
});

static GO_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        // Methods with receivers must be tried before plain functions.
        spec(r"^\s*func\s+\([^)]*\)\s+(\w+)\s*\(", 1),
        spec(r"^\s*func\s+(\w+)\s*\(", 1),
        spec(r"^\s*type\s+(\w+)\s+struct\b", 1),
        spec(r"^\s*type\s+(\w+)\s+interface\b", 1),
        spec(r"^\s*type\s+(\w+)\b", 1),
    ]
});

static JAVASCRIPT_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)", 1),
        spec(
            r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)\s*\(",
            1,
        ),
        spec(
            r"^\s*(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*=>|[A-Za-z_$][\w$]*\s*=>)",
            1,
        ),
        spec(
            r"^\s*(?:static\s+|async\s+|get\s+|set\s+)*(\w+)\s*\([^)]*\)\s*\{",
            1,
        ),
    ]
});

static TYPESCRIPT_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:export\s+)?(?:declare\s+)?interface\s+(\w+)", 1),
        spec(r"^\s*(?:export\s+)?(?:declare\s+)?type\s+(\w+)\s*=", 1),
        spec(r"^\s*(?:export\s+)?(?:declare\s+)?(?:const\s+)?enum\s+(\w+)", 1),
        spec(r"^\s*(?:export\s+)?(?:declare\s+)?namespace\s+(\w+)", 1),
        spec(r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)", 1),
        spec(
            r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)\s*\(",
            1,
        ),
        spec(
            r"^\s*(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*=>|[A-Za-z_$][\w$]*\s*=>)",
            1,
        ),
        spec(
            r"^\s*(?:public\s+|private\s+|protected\s+|static\s+|async\s+|readonly\s+)*(\w+)\s*\([^)]*\)\s*\{",
            1,
        ),
    ]
});

static JAVA_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r"^\s*(?:public\s+|protected\s+|private\s+|static\s+|final\s+|abstract\s+)*class\s+(\w+)",
            1,
        ),
        spec(
            r"^\s*(?:public\s+|protected\s+|private\s+|static\s+)*@?interface\s+(\w+)",
            1,
        ),
        spec(r"^\s*(?:public\s+|protected\s+|private\s+)*enum\s+(\w+)", 1),
        spec(r"^\s*(?:public\s+|protected\s+|private\s+)*record\s+(\w+)\s*\(", 1),
        spec(
            r"^\s*(?:public\s+|protected\s+|private\s+|static\s+|final\s+|abstract\s+|synchronized\s+)+[\w<>\[\],\s]*?\b(\w+)\s*\([^)]*\)\s*(?:\{|throws\b)",
            1,
        ),
    ]
});

static CSHARP_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r"^\s*(?:public\s+|internal\s+|protected\s+|private\s+|static\s+|sealed\s+|abstract\s+|partial\s+)*class\s+(\w+)",
            1,
        ),
        spec(
            r"^\s*(?:public\s+|internal\s+|protected\s+|private\s+)*(?:readonly\s+)?struct\s+(\w+)",
            1,
        ),
        spec(r"^\s*(?:public\s+|internal\s+)*interface\s+(\w+)", 1),
        spec(r"^\s*(?:public\s+|internal\s+)*enum\s+(\w+)", 1),
        spec(r"^\s*(?:public\s+|internal\s+)*record\s+(\w+)", 1),
        spec(r"^\s*namespace\s+([\w.]+)", 1),
        spec(
            r"^\s*(?:public\s+|internal\s+|protected\s+|private\s+|static\s+|virtual\s+|override\s+|async\s+|sealed\s+)+[\w<>\[\],\s]*?\b(\w+)\s*\([^)]*\)",
            1,
        ),
    ]
});

static C_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:typedef\s+)?struct\s+(\w+)", 1),
        spec(r"^\s*(?:typedef\s+)?enum\s+(\w+)", 1),
        spec(r"^\s*(?:typedef\s+)?union\s+(\w+)", 1),
        spec(
            r"^\s*(?:static\s+|inline\s+|extern\s+)*[A-Za-z_][\w\s\*]*?[\s\*](\w+)\s*\([^;]*\)\s*\{?\s*$",
            1,
        ),
    ]
});

static CPP_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:template\s*<[^>]*>\s*)?class\s+(\w+)", 1),
        spec(r"^\s*(?:typedef\s+)?struct\s+(\w+)", 1),
        spec(r"^\s*enum\s+(?:class\s+)?(\w+)", 1),
        spec(r"^\s*namespace\s+(\w+)", 1),
        spec(r"^\s*using\s+(\w+)\s*=", 1),
        spec(
            r"^\s*(?:static\s+|inline\s+|extern\s+|virtual\s+|constexpr\s+)*[A-Za-z_][\w:<>\s\*&]*?[\s\*&](\w+)\s*\([^;]*\)\s*(?:const\s*)?\{?\s*$",
            1,
        ),
    ]
});

static RUBY_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*def\s+(?:self\.)?([\w?!=\[\]]+)", 1),
        spec(r"^\s*class\s+([A-Z]\w*)", 1),
        spec(r"^\s*module\s+([A-Z]\w*)", 1),
    ]
});

static PHP_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r"^\s*(?:public\s+|private\s+|protected\s+|static\s+|abstract\s+|final\s+)*function\s+(\w+)\s*\(",
            1,
        ),
        spec(r"^\s*(?:abstract\s+|final\s+)*class\s+(\w+)", 1),
        spec(r"^\s*interface\s+(\w+)", 1),
        spec(r"^\s*trait\s+(\w+)", 1),
    ]
});

static SWIFT_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r"^\s*(?:public\s+|private\s+|internal\s+|open\s+|fileprivate\s+|static\s+|class\s+|override\s+|final\s+)*func\s+([\w]+)",
            1,
        ),
        spec(
            r"^\s*(?:public\s+|private\s+|internal\s+|open\s+|fileprivate\s+|final\s+)*(?:class|struct|enum|protocol|extension)\s+(\w+)",
            1,
        ),
    ]
});

static KOTLIN_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(
            r"^\s*(?:public\s+|private\s+|internal\s+|protected\s+|open\s+|override\s+|suspend\s+|inline\s+|operator\s+)*fun\s+(?:<[^>]*>\s*)?(\w+)",
            1,
        ),
        spec(
            r"^\s*(?:public\s+|private\s+|internal\s+|data\s+|sealed\s+|abstract\s+|open\s+|enum\s+|annotation\s+)*class\s+(\w+)",
            1,
        ),
        spec(r"^\s*(?:public\s+|private\s+|internal\s+)*object\s+(\w+)", 1),
        spec(r"^\s*(?:public\s+|private\s+|internal\s+)*interface\s+(\w+)", 1),
    ]
});

static SCALA_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:private\s+|protected\s+|override\s+|final\s+)*def\s+(\w+)", 1),
        spec(r"^\s*(?:case\s+|abstract\s+|final\s+|sealed\s+)*class\s+(\w+)", 1),
        spec(r"^\s*(?:case\s+)?object\s+(\w+)", 1),
        spec(r"^\s*(?:sealed\s+)?trait\s+(\w+)", 1),
    ]
});

static SHELL_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*function\s+(\w+)", 1),
        spec(r"^\s*(\w+)\s*\(\)\s*\{", 1),
    ]
});

/// Dedicated fallback table for the native-syntax language, used only when
/// its exact parser rejects a file.
static PYTHON_PATTERNS: Lazy<Vec<PatternSpec>> = Lazy::new(|| {
    vec![
        spec(r"^\s*(?:async\s+)?def\s+(\w+)\s*\(", 1),
        spec(r"^\s*class\s+(\w+)", 1),
    ]
});

/// Look up the pattern table for a language family. `None` means the
/// language has no heuristic group and yields an empty outline.
#[must_use]
pub fn pattern_table(language: &str) -> Option<&'static [PatternSpec]> {
    match language {
        "rust" => Some(RUST_PATTERNS.as_slice()),
        "go" => Some(GO_PATTERNS.as_slice()),
        "javascript" => Some(JAVASCRIPT_PATTERNS.as_slice()),
        "typescript" => Some(TYPESCRIPT_PATTERNS.as_slice()),
        "java" => Some(JAVA_PATTERNS.as_slice()),
        "csharp" => Some(CSHARP_PATTERNS.as_slice()),
        "c" => Some(C_PATTERNS.as_slice()),
        "cpp" => Some(CPP_PATTERNS.as_slice()),
        "ruby" => Some(RUBY_PATTERNS.as_slice()),
        "php" => Some(PHP_PATTERNS.as_slice()),
        "swift" => Some(SWIFT_PATTERNS.as_slice()),
        "kotlin" => Some(KOTLIN_PATTERNS.as_slice()),
        "scala" => Some(SCALA_PATTERNS.as_slice()),
        "shell" => Some(SHELL_PATTERNS.as_slice()),
        "python" => Some(PYTHON_PATTERNS.as_slice()),
        _ => None,
    }
}

/// Apply a pattern table line by line. The first matching pattern consumes
/// the line; the first occurrence of each distinct symbol name wins; output
/// lines are trimmed of any trailing opening-brace body marker.
#[must_use]
pub fn match_lines(lines: &[String], table: &[PatternSpec]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for line in lines {
        for pattern in table {
            let Some(caps) = pattern.regex.captures(line) else {
                continue;
            };
            let Some(name) = caps.get(pattern.group) else {
                continue;
            };
            let name = name.as_str();
            if RESERVED_NAMES.contains(&name) {
                continue;
            }
            if seen.insert(name.to_string()) {
                out.push(strip_body_marker(line.trim()));
            }
            break;
        }
    }

    out
}
