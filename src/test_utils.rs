//! Temporary repositories for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary directory, optionally a git work tree, removed on drop.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    /// A plain directory with no git metadata.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// A directory initialized as a git repository.
    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn init_git(&mut self) {
        self.git(&["init", "--quiet"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git_initialized = true;
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    }

    /// Write a file, creating parent directories, and stage it when git is
    /// initialized.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.add_untracked(path, content);
        if self.git_initialized {
            self.git(&["add", "--", path]);
        }
        full_path
    }

    /// Write a file without staging it.
    pub fn add_untracked(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Read a file below the repository root.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
