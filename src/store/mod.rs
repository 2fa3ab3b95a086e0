//! Name store backends for the notebook.
//!
//! This module contains the data structures that hold the set of unique
//! names and answer prefix-count queries. Three interchangeable backends
//! implement the same [`NameStore`] seam:
//!
//! * [`NameTrie`] - counting character trie, O(len(prefix)) lookups
//! * [`JumpStore`] - sorted first-character buckets with jump search
//! * [`ScanStore`] - unsorted first-character buckets with linear scan
//!
//! All backends expect pre-normalized input: the command layer lowercases
//! names and prefixes before they reach the store, and characters are
//! compared exactly, one unit at a time.

mod error;
pub mod jump;
pub mod scan;
pub mod trie;

pub use error::{DuplicateNameError, InsertResult};
pub use jump::JumpStore;
pub use scan::ScanStore;
pub use trie::NameTrie;

/// Common interface implemented by every name store backend.
///
/// A store holds a set of unique names. Insertion rejects a name that is
/// already present and leaves the store untouched in that case; counting
/// asks how many stored names start with a given prefix.
///
/// The trait is object safe so the binary can select a backend at runtime.
pub trait NameStore {
    /// Inserts a name, rejecting it if an identical name is already stored.
    ///
    /// A rejected insertion leaves every observable count exactly as it was
    /// before the call.
    fn insert(&mut self, name: &str) -> InsertResult;

    /// Returns how many stored names start with `prefix`.
    ///
    /// An empty prefix counts every stored name. A prefix no stored name
    /// starts with yields 0; that is a valid result, not an error.
    fn count_with_prefix(&self, prefix: &str) -> usize;

    /// Returns the number of stored names.
    fn len(&self) -> usize {
        self.count_with_prefix("")
    }

    /// Returns whether the store holds no names.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
