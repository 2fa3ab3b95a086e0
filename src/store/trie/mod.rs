//! Counting name trie implementation.
//!
//! This module provides the primary name store backend: a character trie
//! where every node carries a running count of the names passing through
//! or ending at it. Prefix counting is a single descent of the prefix,
//! and duplicate detection falls out of the counters during insertion with
//! no separate membership traversal.
//!
//! # Key properties
//!
//! * `count_with_prefix` runs in O(len(prefix)) with one map lookup per level
//! * `insert` runs in O(len(name)); a rejected duplicate walks the path a
//!   second time to undo its speculative counter updates
//! * Traversal is loop-based, so stack depth is independent of name length

mod node;

use super::error::{DuplicateNameError, InsertResult};
use super::NameStore;
use node::TrieNode;

/// A prefix-counting dictionary of unique names.
///
/// The trie owns all of its nodes; nodes are created lazily during
/// insertion and never removed. Counts along an inserted path are updated
/// speculatively and rolled back if the name turns out to be a duplicate,
/// so a failed insertion leaves every observable count untouched.
#[derive(Debug, Default)]
pub struct NameTrie {
    /// The root node; its count is the total number of stored names.
    root: TrieNode,
}

impl NameTrie {
    /// Creates a new empty `NameTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, rejecting it if an identical name is already stored.
    ///
    /// The empty name is a valid name; it terminates at the root and obeys
    /// the same duplicate rule as any other.
    pub fn insert(&mut self, name: &str) -> InsertResult {
        // Speculative descent: every node along the path, the root
        // included, is credited with the new name before we know whether
        // the insertion stands.
        let mut current = &mut self.root;
        current.count += 1;
        for c in name.chars() {
            current = current.children.entry(c).or_default();
            current.count += 1;
        }

        // At the node where the name ends, the credit must account for
        // exactly one name beyond those continuing into children. More
        // than one means this exact name was stored before.
        if current.count > current.child_count_sum() + 1 {
            self.roll_back(name);
            return Err(DuplicateNameError::new(name));
        }

        Ok(())
    }

    /// Returns how many stored names start with `prefix`.
    ///
    /// An empty prefix counts every stored name; a prefix with a character
    /// never inserted at that depth yields 0.
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        let mut current = &self.root;
        for c in prefix.chars() {
            match current.children.get(&c) {
                Some(child) => current = child,
                None => return 0,
            }
        }
        current.count
    }

    /// Returns whether the exact name is stored.
    pub fn contains(&self, name: &str) -> bool {
        let mut current = &self.root;
        for c in name.chars() {
            match current.children.get(&c) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.terminal_count() >= 1
    }

    /// Returns the number of stored names.
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Returns whether the trie holds no names.
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Undoes the speculative counter increments of a rejected insertion.
    ///
    /// A duplicate never creates nodes (its full path already existed), so
    /// walking the same path again is guaranteed to find every node. The
    /// walk still stops gracefully if a link is missing.
    fn roll_back(&mut self, name: &str) {
        let mut current = &mut self.root;
        current.count -= 1;
        for c in name.chars() {
            match current.children.get_mut(&c) {
                Some(child) => current = child,
                None => return,
            }
            current.count -= 1;
        }
    }
}

impl NameStore for NameTrie {
    fn insert(&mut self, name: &str) -> InsertResult {
        NameTrie::insert(self, name)
    }

    fn count_with_prefix(&self, prefix: &str) -> usize {
        NameTrie::count_with_prefix(self, prefix)
    }

    fn len(&self) -> usize {
        NameTrie::len(self)
    }

    fn is_empty(&self) -> bool {
        NameTrie::is_empty(self)
    }
}
