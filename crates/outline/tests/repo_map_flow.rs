use std::fs;
use std::path::PathBuf;

use codeskim_outline::{OutlineConfig, RepoMapBuilder};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write(root: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn mixed_language_batch_renders_in_sorted_order() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    let py = write(
        root,
        "models.py",
        "class User(Base):\n    def full_name(self):\n        return self.name\n",
    );
    let go = write(
        root,
        "handler.go",
        "func (h *Handler) Serve(w http.ResponseWriter) {\n}\n",
    );
    let rs = write(
        root,
        "lib.rs",
        "pub struct Engine {\n    state: u8,\n}\n\npub fn start(engine: &Engine) {\n}\n",
    );
    let md = write(root, "README.md", "# readme\n");

    let builder = RepoMapBuilder::default();
    let map = builder.build(&[py, go, rs, md], Some(root));

    assert_eq!(
        map,
        "handler.go:\n  func (h *Handler) Serve(w http.ResponseWriter)\n\n\
         lib.rs:\n  pub struct Engine\n  pub fn start(engine: &Engine)\n\n\
         models.py:\n  class User(Base):\n    def full_name(self)\n\n"
    );
}

#[test]
fn python_syntax_errors_degrade_to_fallback_within_the_batch() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    let broken = write(
        root,
        "broken.py",
        "def usable(x):\n    pass\nclass Dangling(:\n    pass\n",
    );
    let fine = write(root, "fine.go", "func Ok() {}\n");

    let builder = RepoMapBuilder::default();
    let map = builder.build(&[broken, fine], Some(root));

    // The broken file still contributes what the fallback table can see,
    // and the rest of the batch is untouched.
    assert!(map.contains("broken.py:"));
    assert!(map.contains("  def usable(x):"));
    assert!(map.contains("fine.go:\n  func Ok()"));
}

#[test]
fn oversized_files_are_excluded_without_partial_output() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    let mut big = String::from("func Huge() {\n");
    big.push_str(&"\t// padding\n".repeat(200));
    big.push_str("}\n");
    let big = write(root, "big.go", &big);
    let small = write(root, "small.go", "func Small() {}\n");

    let builder = RepoMapBuilder::new(OutlineConfig {
        max_file_chars: 100,
        ..Default::default()
    });
    let map = builder.build(&[big, small], Some(root));

    assert!(!map.contains("big.go"));
    assert_eq!(map, "small.go:\n  func Small()\n\n");
}

#[test]
fn file_cap_reports_unvisited_paths() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    let paths: Vec<PathBuf> = (0..5)
        .map(|i| write(root, &format!("f{i}.go"), "func Run() {}\n"))
        .collect();

    let builder = RepoMapBuilder::new(OutlineConfig {
        max_files: 3,
        ..Default::default()
    });
    let map = builder.build(&paths, Some(root));

    assert!(map.contains("f0.go:"));
    assert!(map.contains("f2.go:"));
    assert!(!map.contains("f3.go:"));
    assert!(map.ends_with("... and 2 more files\n"));
}
