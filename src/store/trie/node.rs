//! Node implementation for the counting name trie.
//!
//! Nodes are the fundamental building blocks of the trie, each holding a
//! map of child nodes and a running count of the names that reach it.

use std::collections::HashMap;

/// A node in the counting name trie.
///
/// Each node represents one character position along stored names. Instead
/// of a terminal flag, the node keeps a count of every stored name whose
/// prefix reaches it; that single counter is what makes prefix counting a
/// plain descent with no subtree walk.
#[derive(Debug, Default)]
pub(super) struct TrieNode {
    /// Map of characters to child nodes.
    pub(super) children: HashMap<char, TrieNode>,

    /// Number of stored names whose prefix reaches this node.
    ///
    /// For the root this is the total number of stored names. The counter
    /// may run one ahead of the children's sums while an insertion is in
    /// flight; a rejected insertion rolls it back.
    pub(super) count: usize,
}

impl TrieNode {
    /// Sum of the counts of all direct children.
    ///
    /// The difference between `count` and this sum is the number of names
    /// terminating exactly at this node, which drives duplicate detection.
    pub(super) fn child_count_sum(&self) -> usize {
        self.children.values().map(|child| child.count).sum()
    }

    /// Number of stored names that end exactly at this node.
    pub(super) fn terminal_count(&self) -> usize {
        self.count.saturating_sub(self.child_count_sum())
    }
}
