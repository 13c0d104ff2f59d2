//! Build a `FileTree` from a flat path list

use crate::path_utils::segments;

use super::node::{FileTree, Node};

/// Build a tree from paths in the order given.
///
/// Siblings keep the order in which they are first seen, so the same input
/// always yields the same tree. Empty segments are skipped and repeated paths
/// collapse onto one entry.
///
/// If a name is used both as a file and as a directory, the directory wins:
/// an existing leaf is turned into a directory in place, and a later file
/// entry for an existing directory is dropped. Both cases are logged.
pub fn build_tree<I, S>(paths: I) -> FileTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = FileTree::new();
    for path in paths {
        let path = path.as_ref();
        let parts: Vec<&str> = segments(path).collect();
        insert_path(&mut tree, &parts, path);
    }
    tree
}

fn insert_path(tree: &mut FileTree, parts: &[&str], full_path: &str) {
    let Some((first, rest)) = parts.split_first() else {
        return;
    };

    if rest.is_empty() {
        let node = tree.entry_or_insert(first, Node::Leaf);
        if node.is_dir() {
            tracing::warn!(
                "'{}' is both a file and a directory; keeping the directory",
                full_path
            );
        }
        return;
    }

    let node = tree.entry_or_insert(first, Node::Dir(FileTree::new()));
    if !node.is_dir() {
        tracing::warn!(
            "'{}' is listed as a file but '{}' needs it as a directory; keeping the directory",
            first,
            full_path
        );
        *node = Node::Dir(FileTree::new());
    }
    if let Node::Dir(children) = node {
        insert_path(children, rest, full_path);
    }
}
