use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Observer invoked with a copy of the current selection and generation.
pub type SelectionObserver = Box<dyn Fn(&HashSet<PathBuf>, u64) + Send + Sync>;

struct ResolvedFiles {
    files: HashSet<PathBuf>,
    stamp: u64,
}

/// Generation-counted selection set with a staleness-safe resolved-file
/// cache.
///
/// One logical writer mutates the selection while independently scheduled
/// resolution tasks read it concurrently. Consistency is optimistic: a
/// resolution task records the generation when it starts, does its slow
/// expansion work, and stamps the result with that starting generation.
/// Readers accept the cache only while its stamp equals the current
/// generation; a stale cache reads as absent and means "recompute", never
/// an error. The counter never decreases; in-flight work is never
/// cancelled, only discarded at the read site.
pub struct SelectionState {
    selected: Mutex<HashSet<PathBuf>>,
    generation: AtomicU64,
    resolved: Mutex<Option<ResolvedFiles>>,
    observer: Mutex<Option<SelectionObserver>>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: Mutex::new(HashSet::new()),
            generation: AtomicU64::new(0),
            resolved: Mutex::new(None),
            observer: Mutex::new(None),
        }
    }

    /// Current generation value.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Copy of the current selection.
    #[must_use]
    pub fn selected_paths(&self) -> HashSet<PathBuf> {
        self.selected.lock().expect("selection lock poisoned").clone()
    }

    /// Number of selected paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.lock().expect("selection lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add one path. Does not bump the generation: additions are compatible
    /// with an in-flight resolution unless the caller invalidates
    /// explicitly. Returns true when the set changed.
    pub fn add(&self, path: impl Into<PathBuf>) -> bool {
        self.selected
            .lock()
            .expect("selection lock poisoned")
            .insert(path.into())
    }

    /// Remove one path. Does not bump the generation. Returns true when the
    /// set changed.
    pub fn remove(&self, path: &Path) -> bool {
        self.selected
            .lock()
            .expect("selection lock poisoned")
            .remove(path)
    }

    /// Batch add. Returns the count actually inserted.
    pub fn add_many<I, P>(&self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut selected = self.selected.lock().expect("selection lock poisoned");
        let mut changed = 0;
        for path in paths {
            if selected.insert(path.into()) {
                changed += 1;
            }
        }
        changed
    }

    /// Batch remove. Returns the count actually removed.
    pub fn remove_many<I, P>(&self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut selected = self.selected.lock().expect("selection lock poisoned");
        let mut changed = 0;
        for path in paths {
            if selected.remove(path.as_ref()) {
                changed += 1;
            }
        }
        changed
    }

    /// Wholesale replacement. Always bumps the generation, so callers never
    /// need a separate bump. Returns the new generation.
    pub fn replace_all<I, P>(&self, paths: I) -> u64
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        {
            let mut selected = self.selected.lock().expect("selection lock poisoned");
            *selected = paths.into_iter().map(Into::into).collect();
        }
        self.bump_generation()
    }

    /// Empty the set without bumping the generation. Semantically distinct
    /// from `reset`.
    pub fn clear(&self) {
        self.selected.lock().expect("selection lock poisoned").clear();
    }

    /// Clear selection and resolved cache, and unconditionally increment
    /// the generation even though the set becomes empty. Any outstanding
    /// resolution holding the prior generation is thereby detected as
    /// stale. Used on workspace change; the counter never restarts at zero.
    pub fn reset(&self) {
        self.selected.lock().expect("selection lock poisoned").clear();
        self.bump_generation();
    }

    /// Explicit invalidation: clears the resolved cache and increments the
    /// counter. Returns the new value.
    pub fn bump_generation(&self) -> u64 {
        *self.resolved.lock().expect("resolved lock poisoned") = None;
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store a resolution result stamped with the generation the caller
    /// observed when it started resolving, not when it finished.
    pub fn set_resolved_files(&self, files: HashSet<PathBuf>, generation: u64) {
        *self.resolved.lock().expect("resolved lock poisoned") =
            Some(ResolvedFiles {
                files,
                stamp: generation,
            });
    }

    /// The cached resolved set, only while its stamp equals the current
    /// generation. `None` means the caller must recompute.
    #[must_use]
    pub fn get_resolved_files_if_fresh(&self) -> Option<HashSet<PathBuf>> {
        let resolved = self.resolved.lock().expect("resolved lock poisoned");
        resolved
            .as_ref()
            .filter(|cache| cache.stamp == self.generation())
            .map(|cache| cache.files.clone())
    }

    /// Register the observer invoked by `notify_changed`.
    pub fn set_observer(&self, observer: SelectionObserver) {
        *self.observer.lock().expect("observer lock poisoned") = Some(observer);
    }

    /// Invoke the registered observer with a copy of the current selection
    /// and generation. Callers must finish mutating and bumping before
    /// calling this.
    pub fn notify_changed(&self) {
        let snapshot = self.selected_paths();
        let generation = self.generation();
        let observer = self.observer.lock().expect("observer lock poisoned");
        if let Some(observer) = observer.as_ref() {
            observer(&snapshot, generation);
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
