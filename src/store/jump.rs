//! Jump-search name store.
//!
//! Buckets are kept sorted, so every name starting with a given prefix
//! occupies one contiguous run. Counting locates the run's bounds by
//! jumping sqrt(len)-sized strides and refining linearly, touching
//! O(sqrt(bucket)) entries instead of the whole bucket.

use std::collections::HashMap;

use super::error::{DuplicateNameError, InsertResult};
use super::NameStore;

/// A name store backed by sorted first-character buckets.
#[derive(Debug, Default)]
pub struct JumpStore {
    /// Names grouped by their first character, each bucket sorted.
    buckets: HashMap<char, Vec<String>>,

    /// Whether the empty name is stored; it has no bucket of its own.
    holds_empty: bool,
}

impl JumpStore {
    /// Creates a new empty `JumpStore`.
    pub fn new() -> Self {
        Self::default()
    }

    fn total(&self) -> usize {
        let bucketed: usize = self.buckets.values().map(Vec::len).sum();
        bucketed + usize::from(self.holds_empty)
    }
}

impl NameStore for JumpStore {
    fn insert(&mut self, name: &str) -> InsertResult {
        let Some(first) = name.chars().next() else {
            if self.holds_empty {
                return Err(DuplicateNameError::new(name));
            }
            self.holds_empty = true;
            return Ok(());
        };

        let bucket = self.buckets.entry(first).or_default();
        // Sorted insertion doubles as the duplicate check.
        match bucket.binary_search_by(|stored| stored.as_str().cmp(name)) {
            Ok(_) => Err(DuplicateNameError::new(name)),
            Err(position) => {
                bucket.insert(position, name.to_string());
                Ok(())
            }
        }
    }

    fn count_with_prefix(&self, prefix: &str) -> usize {
        let Some(first) = prefix.chars().next() else {
            return self.total();
        };
        let Some(bucket) = self.buckets.get(&first) else {
            return 0;
        };

        let (start, end) = prefix_run(bucket, prefix);
        end - start
    }
}

/// Locates the half-open run `[start, end)` of sorted `names` that start
/// with `prefix`.
///
/// Any name starting with the prefix sorts at or after it, and the matches
/// are contiguous, so both bounds can be approached in sqrt(len) strides
/// before a short linear refinement.
fn prefix_run(names: &[String], prefix: &str) -> (usize, usize) {
    let len = names.len();
    if len == 0 {
        return (0, 0);
    }
    let step = (len as f64).sqrt() as usize + 1;

    // Lower bound: first entry sorting at or after the prefix.
    let mut start = 0;
    while start + step < len && names[start + step].as_str() < prefix {
        start += step;
    }
    while start < len && names[start].as_str() < prefix {
        start += 1;
    }

    // Upper bound: stride ahead while a whole block still matches, then
    // refine. Everything between two matching entries also matches.
    let mut end = start;
    while end + step < len && names[end + step].starts_with(prefix) {
        end += step;
    }
    while end < len && names[end].starts_with(prefix) {
        end += 1;
    }

    (start, end)
}
