//! Ordered tree of path segments

use std::collections::HashMap;

/// A tree entry: a file, or a directory holding further entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf,
    Dir(FileTree),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }
}

/// Mapping from segment name to `Node` that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    entries: Vec<(String, Node)>,
    index: HashMap<String, usize>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of leaves anywhere below this level.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                Node::Leaf => 1,
                Node::Dir(child) => child.file_count(),
            })
            .sum()
    }

    /// Insert `name` if absent and return a mutable handle to its node.
    pub(crate) fn entry_or_insert(&mut self, name: &str, node: Node) -> &mut Node {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push((name.to_string(), node));
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}
