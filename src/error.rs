//! Error types for repotext

use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal; callers propagate these up to `main`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot access '{}': No such directory", .0.display())]
    RepoNotFound(PathBuf),
}

impl Error {
    /// Attach the path an I/O error concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
