//! Git repository integration: tracked-file listing from the index

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::error::Result;

/// Index mode of a submodule entry; it has no file content to read.
const GITLINK_MODE: u32 = 0o160000;

/// Lists the files git tracks below a directory.
pub struct GitTracked {
    repo: Repository,
    repo_root: PathBuf,
    /// `root` relative to the work tree, with `/` separators and a trailing
    /// slash; empty when `root` is the work tree itself.
    prefix: String,
}

impl GitTracked {
    /// Open the repository containing `root`.
    ///
    /// Returns `Ok(None)` when `root` is not inside a git work tree (including
    /// bare repositories); other git failures are errors.
    pub fn discover(root: &Path) -> Result<Option<Self>> {
        let repo = match Repository::discover(root) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let Some(workdir) = repo.workdir() else {
            return Ok(None);
        };
        let repo_root = workdir
            .canonicalize()
            .unwrap_or_else(|_| workdir.to_path_buf());
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        let prefix = match root.strip_prefix(&repo_root) {
            Ok(rel) => {
                let rel = rel.to_string_lossy().replace('\\', "/");
                if rel.is_empty() {
                    String::new()
                } else {
                    format!("{}/", rel.trim_end_matches('/'))
                }
            }
            // Inside the .git directory or otherwise outside the work tree
            Err(_) => return Ok(None),
        };

        Ok(Some(Self {
            repo,
            repo_root,
            prefix,
        }))
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Tracked paths below `root`, relative to it, in index order.
    ///
    /// Index order is byte order of the full path, the same order
    /// `git ls-files` prints. Unmerged entries appear once and submodules are
    /// skipped.
    pub fn tracked_paths(&self) -> Result<Vec<String>> {
        let index = self.repo.index()?;
        let mut seen = HashSet::new();
        let mut paths = Vec::new();

        for entry in index.iter() {
            if entry.mode == GITLINK_MODE {
                continue;
            }
            let path = String::from_utf8_lossy(&entry.path);
            let Some(relative) = path.strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            if relative.is_empty() {
                continue;
            }
            if seen.insert(relative.to_string()) {
                paths.push(relative.to_string());
            }
        }

        Ok(paths)
    }
}
