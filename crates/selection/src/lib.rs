//! # Codeskim Selection
//!
//! Generation-counted file selection with a staleness-safe resolved-file
//! cache.
//!
//! The selection set has a single logical writer but is read by any number
//! of independently scheduled resolution tasks. There is no locking across
//! resolution work and no cancellation token: a resolver records the
//! generation when it starts, expands the selection, and stamps the result;
//! readers accept the cache only while the stamp matches the current
//! generation. Stale results are discarded at the read site by convention.

mod resolver;
mod state;

pub use resolver::resolve_selection;
pub use state::{SelectionObserver, SelectionState};
