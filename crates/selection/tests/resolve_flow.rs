use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use codeskim_selection::{resolve_selection, SelectionState};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn directory_expansion_honors_gitignore() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("keep.rs"), "fn keep() {}\n").unwrap();
    fs::write(root.join("skip.log"), "noise\n").unwrap();
    fs::write(root.join(".gitignore"), "*.log\n").unwrap();

    let state = SelectionState::new();
    state.add(root.to_path_buf());

    let resolved = resolve_selection(&state);

    assert!(resolved.contains(&root.join("keep.rs")));
    assert!(resolved.iter().all(|p| !p.ends_with("skip.log")));
}

#[test]
fn resolution_started_before_a_replace_reads_as_stale() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("a.rs"), "fn a() {}\n").unwrap();

    let state = SelectionState::new();
    state.add(root.join("a.rs"));

    // Simulate a slow resolver: record the stamp, then let the selection
    // move on before the result lands.
    let stamp = state.generation();
    let late_result: HashSet<PathBuf> = [root.join("a.rs")].into_iter().collect();

    state.replace_all([root.join("b.rs")]);
    state.set_resolved_files(late_result, stamp);

    assert_eq!(state.get_resolved_files_if_fresh(), None);

    // A fresh resolution against the new generation is accepted again.
    fs::write(root.join("b.rs"), "fn b() {}\n").unwrap();
    let resolved = resolve_selection(&state);
    assert_eq!(state.get_resolved_files_if_fresh(), Some(resolved));
}

#[test]
fn workspace_reset_invalidates_outstanding_work() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("a.rs"), "fn a() {}\n").unwrap();

    let state = SelectionState::new();
    state.add(root.join("a.rs"));
    let resolved = resolve_selection(&state);
    assert_eq!(state.get_resolved_files_if_fresh(), Some(resolved));

    state.reset();

    assert!(state.is_empty());
    assert_eq!(state.get_resolved_files_if_fresh(), None);
}
