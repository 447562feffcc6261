use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Identifier returned when no table entry matches
pub const TEXT: &str = "text";

/// Well-known extension-less files and dotfiles, matched on the whole
/// lowercased file name before any extension lookup.
const WELL_KNOWN_FILES: &[(&str, &str)] = &[
    ("makefile", "make"),
    ("gnumakefile", "make"),
    ("justfile", "just"),
    ("dockerfile", "dockerfile"),
    ("containerfile", "dockerfile"),
    ("gemfile", "ruby"),
    ("rakefile", "ruby"),
    ("vagrantfile", "ruby"),
    ("cmakelists.txt", "cmake"),
    ("build.gradle", "groovy"),
    (".gitignore", "gitignore"),
    (".gitattributes", "gitignore"),
    (".dockerignore", "gitignore"),
    (".npmignore", "gitignore"),
    (".env", "env"),
    (".bashrc", "shell"),
    (".bash_profile", "shell"),
    (".zshrc", "shell"),
    (".profile", "shell"),
];

/// Compound suffixes checked before the single-extension fallback. Order
/// matters: the first suffix that matches wins.
const COMPOUND_SUFFIXES: &[(&str, &str)] = &[
    (".d.ts", "typescript"),
    (".test.ts", "typescript"),
    (".test.tsx", "typescript"),
    (".spec.ts", "typescript"),
    (".spec.tsx", "typescript"),
    (".config.ts", "typescript"),
    (".stories.tsx", "typescript"),
    (".test.js", "javascript"),
    (".test.jsx", "javascript"),
    (".spec.js", "javascript"),
    (".spec.jsx", "javascript"),
    (".config.js", "javascript"),
    (".min.js", "javascript"),
    (".test.py", "python"),
    (".spec.rb", "ruby"),
    (".html.erb", "erb"),
    (".blade.php", "blade"),
    (".module.css", "css"),
    (".module.scss", "scss"),
    (".tar.gz", "binary"),
];

static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // General purpose languages
        ("rs", "rust"),
        ("py", "python"),
        ("pyw", "python"),
        ("pyi", "python"),
        ("js", "javascript"),
        ("mjs", "javascript"),
        ("cjs", "javascript"),
        ("jsx", "javascript"),
        ("ts", "typescript"),
        ("mts", "typescript"),
        ("cts", "typescript"),
        ("tsx", "typescript"),
        ("go", "go"),
        ("java", "java"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("c", "c"),
        ("h", "c"),
        ("cpp", "cpp"),
        ("cc", "cpp"),
        ("cxx", "cpp"),
        ("hpp", "cpp"),
        ("hh", "cpp"),
        ("hxx", "cpp"),
        ("cs", "csharp"),
        ("rb", "ruby"),
        ("erb", "erb"),
        ("php", "php"),
        ("swift", "swift"),
        ("scala", "scala"),
        ("dart", "dart"),
        ("zig", "zig"),
        ("lua", "lua"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("hs", "haskell"),
        ("pl", "perl"),
        ("r", "r"),
        // Scripts
        ("sh", "shell"),
        ("bash", "shell"),
        ("zsh", "shell"),
        ("fish", "shell"),
        ("ps1", "powershell"),
        ("bat", "batch"),
        ("cmd", "batch"),
        // Stylesheets and markup
        ("css", "css"),
        ("scss", "scss"),
        ("less", "less"),
        ("html", "html"),
        ("htm", "html"),
        ("vue", "vue"),
        ("svelte", "svelte"),
        ("xml", "xml"),
        // Docs
        ("md", "markdown"),
        ("mdx", "markdown"),
        ("rst", "rst"),
        ("txt", "text"),
        // Config / data / infra
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("cfg", "ini"),
        ("conf", "ini"),
        ("env", "env"),
        ("sql", "sql"),
        ("proto", "proto"),
        ("tf", "hcl"),
        ("hcl", "hcl"),
        ("gradle", "groovy"),
        ("groovy", "groovy"),
        ("dockerfile", "dockerfile"),
    ])
});

/// Map a file name to a language identifier.
///
/// Resolution order: well-known extension-less files and dotfiles, then the
/// compound-suffix table, then the last single extension, then `"text"`.
/// Matching is case-insensitive; the original name is never altered.
/// Infallible: always returns an identifier.
#[must_use]
pub fn classify(file_name: &str) -> &'static str {
    let lowered = file_name.to_lowercase();

    for (name, language) in WELL_KNOWN_FILES {
        if lowered == *name {
            return language;
        }
    }

    for (suffix, language) in COMPOUND_SUFFIXES {
        if lowered.ends_with(suffix) {
            return language;
        }
    }

    if let Some((_, ext)) = lowered.rsplit_once('.') {
        if let Some(language) = EXTENSIONS.get(ext) {
            return language;
        }
    }

    TEXT
}

/// Map a full path to a language identifier via its file name.
#[must_use]
pub fn classify_path(path: &Path) -> &'static str {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(classify)
        .unwrap_or(TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(classify("main.rs"), "rust");
        assert_eq!(classify("app.py"), "python");
        assert_eq!(classify("index.ts"), "typescript");
        assert_eq!(classify("styles.scss"), "scss");
        assert_eq!(classify("notes.unknownext"), "text");
        assert_eq!(classify("no_extension"), "text");
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("MAIN.RS"), "rust");
        assert_eq!(classify("Makefile"), "make");
        assert_eq!(classify("DOCKERFILE"), "dockerfile");
    }

    #[test]
    fn well_known_files_win_over_extensions() {
        assert_eq!(classify("CMakeLists.txt"), "cmake");
        assert_eq!(classify(".gitignore"), "gitignore");
        assert_eq!(classify("Gemfile"), "ruby");
    }

    #[test]
    fn compound_suffixes_checked_before_single_extension() {
        assert_eq!(classify("types.d.ts"), "typescript");
        assert_eq!(classify("view.html.erb"), "erb");
        assert_eq!(classify("layout.blade.php"), "blade");
        assert_eq!(classify("release.tar.gz"), "binary");
        // Single-extension fallback still applies when no compound matches.
        assert_eq!(classify("view.erb"), "erb");
    }

    #[test]
    fn classify_path_uses_file_name() {
        assert_eq!(classify_path(Path::new("src/deep/dir/mod.rs")), "rust");
        assert_eq!(classify_path(Path::new("/abs/Makefile")), "make");
    }
}
