//! ASCII rendering of a `FileTree`

use super::node::{FileTree, Node};

/// Connector for every entry except the last at its level.
pub const BRANCH: &str = "├─ ";
/// Connector for the last entry at its level.
pub const LAST_BRANCH: &str = "└─ ";

const CONTINUE_INDENT: &str = "│  ";
const EMPTY_INDENT: &str = "   ";

/// Render the tree into a list of lines (without trailing newlines).
pub fn render(tree: &FileTree) -> Vec<String> {
    let mut lines = Vec::new();
    let result: Result<(), std::convert::Infallible> = render_with(tree, &mut |line: &str| {
        lines.push(line.to_string());
        Ok(())
    });
    match result {
        Ok(()) => lines,
        Err(never) => match never {},
    }
}

/// Render the tree depth-first, handing each line to `sink` as soon as it is
/// produced. Stops at the first error returned by the sink.
pub fn render_with<F, E>(tree: &FileTree, sink: &mut F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    render_level(tree, "", sink)
}

fn render_level<F, E>(tree: &FileTree, indent: &str, sink: &mut F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    let last_index = tree.len().saturating_sub(1);

    for (i, (name, node)) in tree.iter().enumerate() {
        let is_last = i == last_index;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        sink(&format!("{}{}{}", indent, connector, name))?;

        if let Node::Dir(children) = node {
            let child_indent = calculate_child_prefix(indent, is_last);
            render_level(children, &child_indent, sink)?;
        }
    }

    Ok(())
}

/// Calculate the indent for the children of an entry.
pub fn calculate_child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, EMPTY_INDENT)
    } else {
        format!("{}{}", current_prefix, CONTINUE_INDENT)
    }
}
