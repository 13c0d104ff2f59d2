//! repotext - flatten a repository into a single text document
//!
//! The document starts with an ASCII tree of the listed files, followed by the
//! concatenated content of every selected file.

pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod path_utils;
pub mod selector;
pub mod source;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::{Path, PathBuf};

pub use config::{Config, RuleSet, SourceConfig};
pub use error::{Error, Result};
pub use git::GitTracked;
pub use output::{OutputConfig, OutputWriter};
pub use selector::Selector;
pub use source::{Listing, SourceKind, list_paths, walk_paths};
pub use tree::{FileTree, Node, build_tree, render, render_with};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: SourceKind,
    /// Paths shown in the tree.
    pub listed: usize,
    /// Files whose content was concatenated.
    pub written: usize,
}

/// Write the output document described by `config`.
///
/// Any I/O failure aborts the run; whatever was already appended to the
/// output file stays there.
pub fn run(config: &Config) -> Result<RunSummary> {
    let root = config
        .repo_path
        .canonicalize()
        .map_err(|_| Error::RepoNotFound(config.repo_path.clone()))?;
    if !root.is_dir() {
        return Err(Error::RepoNotFound(config.repo_path.clone()));
    }

    let listing = list_paths(&root, &config.source)?;
    tracing::info!(
        "{} paths from {} in {}",
        listing.paths.len(),
        listing.kind,
        root.display()
    );

    // The output file is never part of its own document.
    let output_entry = output_path_below(&root, &config.output_path);
    let selector = Selector::new(&config.rules);
    let listed: Vec<&str> = listing
        .paths
        .iter()
        .map(String::as_str)
        .filter(|path| {
            if output_entry.as_deref() == Some(*path) {
                tracing::debug!("skipping output file {}", path);
                return false;
            }
            let keep = selector.is_listed(path);
            if !keep {
                tracing::debug!("excluded {}", path);
            }
            keep
        })
        .collect();

    let tree = build_tree(&listed);
    let mut writer = OutputWriter::create(&config.output_path, config.output.clone())?;
    writer.write_tree(&tree)?;
    writer.finish_tree()?;

    let mut written = 0;
    for path in listed.iter().filter(|p| selector.is_content_selected(p)) {
        let full_path: PathBuf = root.join(path);
        let content = read_lossy(&full_path)?;
        writer.write_file_block(path, &content)?;
        tracing::debug!("wrote {} ({} bytes)", path, content.len());
        written += 1;
    }
    writer.flush()?;

    Ok(RunSummary {
        source: listing.kind,
        listed: listed.len(),
        written,
    })
}

/// Read a file as text, replacing invalid UTF-8 sequences with U+FFFD.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, writing it lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// The output file's path relative to `root`, in listing form, if it lies
/// below `root`. The file itself need not exist yet.
fn output_path_below(root: &Path, output_path: &Path) -> Option<String> {
    let file_name = output_path.file_name()?;
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let absolute = parent.canonicalize().ok()?.join(file_name);
    let relative = absolute.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}
