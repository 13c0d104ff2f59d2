//! File tree construction and rendering
//!
//! - `build_tree` turns a flat, ordered list of repository-relative paths into a
//!   nested `FileTree`, preserving the enumeration order of siblings.
//! - `render` / `render_with` draw that tree with ASCII branch connectors, one
//!   line at a time.

mod builder;
mod node;
mod render;

pub use builder::build_tree;
pub use node::{FileTree, Node};
pub use render::{BRANCH, LAST_BRANCH, calculate_child_prefix, render, render_with};
