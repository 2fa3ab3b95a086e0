//! Linear-scan name store.
//!
//! The simplest backend: names are bucketed by their first character and
//! counting walks the whole bucket, testing each name against the prefix.
//! O(bucket) per query; this is the baseline the other backends are
//! measured against in the benches.

use std::collections::HashMap;

use super::error::{DuplicateNameError, InsertResult};
use super::NameStore;

/// A name store backed by unsorted first-character buckets.
#[derive(Debug, Default)]
pub struct ScanStore {
    /// Names grouped by their first character.
    buckets: HashMap<char, Vec<String>>,

    /// Whether the empty name is stored. It has no first character to
    /// bucket under, so it is tracked on the side.
    holds_empty: bool,
}

impl ScanStore {
    /// Creates a new empty `ScanStore`.
    pub fn new() -> Self {
        Self::default()
    }

    fn total(&self) -> usize {
        let bucketed: usize = self.buckets.values().map(Vec::len).sum();
        bucketed + usize::from(self.holds_empty)
    }
}

impl NameStore for ScanStore {
    fn insert(&mut self, name: &str) -> InsertResult {
        let Some(first) = name.chars().next() else {
            if self.holds_empty {
                return Err(DuplicateNameError::new(name));
            }
            self.holds_empty = true;
            return Ok(());
        };

        let bucket = self.buckets.entry(first).or_default();
        if bucket.iter().any(|stored| stored == name) {
            return Err(DuplicateNameError::new(name));
        }
        bucket.push(name.to_string());
        Ok(())
    }

    fn count_with_prefix(&self, prefix: &str) -> usize {
        let Some(first) = prefix.chars().next() else {
            return self.total();
        };
        let Some(bucket) = self.buckets.get(&first) else {
            return 0;
        };

        // A one-character prefix selects the whole bucket.
        if prefix.chars().nth(1).is_none() {
            return bucket.len();
        }
        bucket.iter().filter(|name| name.starts_with(prefix)).count()
    }
}
