//! Flat path enumeration for a repository root.
//!
//! Inside a git work tree the tracked files come from the index. Anywhere
//! else, or with `force_walk`, the directory is walked recursively.

use std::path::Path;

use ignore::WalkBuilder;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::git::GitTracked;

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    GitIndex,
    Walk,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::GitIndex => write!(f, "git index"),
            SourceKind::Walk => write!(f, "directory walk"),
        }
    }
}

/// Repository-relative paths with `/` separators, in enumeration order.
#[derive(Debug, Clone)]
pub struct Listing {
    pub kind: SourceKind,
    pub paths: Vec<String>,
}

/// Enumerate the files below `root`.
pub fn list_paths(root: &Path, config: &SourceConfig) -> Result<Listing> {
    if !config.force_walk {
        if let Some(git) = GitTracked::discover(root)? {
            tracing::debug!("listing tracked files from {}", git.repo_root().display());
            return Ok(Listing {
                kind: SourceKind::GitIndex,
                paths: git.tracked_paths()?,
            });
        }
        tracing::info!("not a git repository, walking the directory");
    }

    Ok(Listing {
        kind: SourceKind::Walk,
        paths: walk_paths(root)?,
    })
}

/// Recursively walk `root` and return its regular files relative to it.
///
/// No ignore rules apply, hidden files are included, symlinks are not
/// followed and the `.git` directory is skipped. Entries are sorted by name
/// so repeated walks agree.
pub fn walk_paths(root: &Path) -> Result<Vec<String>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if !relative.is_empty() {
            paths.push(relative.join("/"));
        }
    }

    Ok(paths)
}
