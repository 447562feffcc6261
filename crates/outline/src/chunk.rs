//! Pure chunk passes: dedup by row, adjacency merge, textual dedup.

use std::collections::{HashMap, HashSet};

use crate::types::Chunk;

/// Drop duplicate chunks sharing a `start_row`, keeping the one with the
/// longest content. Ties keep the first-seen chunk. Output is ordered by
/// ascending `start_row`.
#[must_use]
pub fn filter_duplicated_chunks(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut kept: Vec<Chunk> = Vec::with_capacity(chunks.len());
    let mut index_by_row: HashMap<usize, usize> = HashMap::new();

    for chunk in chunks {
        match index_by_row.get(&chunk.start_row) {
            Some(&idx) => {
                if chunk.content.len() > kept[idx].content.len() {
                    kept[idx] = chunk;
                }
            }
            None => {
                index_by_row.insert(chunk.start_row, kept.len());
                kept.push(chunk);
            }
        }
    }

    kept.sort_by_key(|chunk| chunk.start_row);
    kept
}

/// Merge chunks whose spans are adjacent (`prev.end_row + 1 ==
/// next.start_row`) in a single left-to-right pass, joining content with a
/// newline. Input must be sorted ascending by `start_row`. Idempotent.
#[must_use]
pub fn merge_adjacent_chunks(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if let Some(prev) = out.last_mut() {
            if prev.end_row + 1 == chunk.start_row {
                prev.content.push('\n');
                prev.content.push_str(&chunk.content);
                prev.end_row = chunk.end_row;
                continue;
            }
        }
        out.push(chunk);
    }

    out
}

/// Trim-normalizing textual dedup primitive. Returns the normalized content
/// the first time it is seen (registering it in `seen`), `None` on repeat.
/// Whitespace-only input yields `None` without registering anything.
pub fn check_and_add(content: &str, seen: &mut HashSet<String>) -> Option<String> {
    let normalized = content.trim();
    if normalized.is_empty() {
        return None;
    }

    if seen.insert(normalized.to_string()) {
        Some(normalized.to_string())
    } else {
        None
    }
}
