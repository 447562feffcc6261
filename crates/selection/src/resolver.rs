use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::state::SelectionState;

/// Expand the current selection into concrete files and stamp the result
/// into the state's resolved cache.
///
/// The generation is recorded before any filesystem work starts; if the
/// selection changes mid-flight the stamped write is simply never read
/// back as fresh. Selected files are kept as-is, selected directories are
/// walked gitignore-aware (hidden entries skipped). Walk errors are logged
/// and skipped; a missing path contributes nothing.
pub fn resolve_selection(state: &SelectionState) -> HashSet<PathBuf> {
    let stamp = state.generation();
    let snapshot = state.selected_paths();

    let mut resolved: HashSet<PathBuf> = HashSet::new();
    for path in snapshot {
        if path.is_dir() {
            expand_dir(&path, &mut resolved);
        } else if path.is_file() {
            resolved.insert(path);
        } else {
            log::debug!("Selected path no longer exists: {}", path.display());
        }
    }

    state.set_resolved_files(resolved.clone(), stamp);
    resolved
}

fn expand_dir(root: &Path, resolved: &mut HashSet<PathBuf>) {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true) // do not resolve hidden files by default
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        // Selections are not always git checkouts; ignore rules apply
        // either way.
        .require_git(false);

    for result in builder.build() {
        match result {
            Ok(entry) => {
                let Some(file_type) = entry.file_type() else {
                    continue;
                };
                if !file_type.is_file() {
                    continue;
                }
                resolved.insert(entry.path().to_path_buf());
            }
            Err(e) => log::warn!("Failed to read entry: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn files_and_directories_both_expand() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("src");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.rs"), "fn a() {}\n").unwrap();
        fs::write(dir.join("b.rs"), "fn b() {}\n").unwrap();
        let single = temp.path().join("single.py");
        fs::write(&single, "def s():\n    pass\n").unwrap();

        let state = SelectionState::new();
        state.add(dir.clone());
        state.add(single.clone());

        let resolved = resolve_selection(&state);

        assert_eq!(resolved.len(), 3);
        assert!(resolved.contains(&single));
        assert!(resolved.contains(&dir.join("a.rs")));
    }

    #[test]
    fn missing_paths_contribute_nothing() {
        let temp = tempdir().unwrap();
        let state = SelectionState::new();
        state.add(temp.path().join("ghost.rs"));

        let resolved = resolve_selection(&state);

        assert!(resolved.is_empty());
        // The empty result is still a valid, fresh resolution.
        assert_eq!(state.get_resolved_files_if_fresh(), Some(HashSet::new()));
    }
}
