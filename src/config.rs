//! Run configuration.
//!
//! A `Config` is built once from the command line and passed by reference to
//! every component; nothing reads options from global state.

use std::path::PathBuf;

use crate::output::OutputConfig;

/// Exclusion entries applied when none are given on the command line.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "node_modules/",
    ".git/",
    ".DS_Store",
    "dist/",
    "build/",
    "locales/",
    "*.log",
    "*.ts-snapshots",
];

/// Inclusion entries that override exclusions.
pub const DEFAULT_INCLUSIONS: &[&str] = &["package.json", "../../README.md", "README.md"];

/// Extensions whose content is concatenated by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx"];

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Static inclusion and exclusion rules for the selector.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub exclusions: Vec<String>,
    pub inclusions: Vec<String>,
    pub extensions: Vec<String>,
    /// Disable all filtering: every path is listed and concatenated.
    pub include_all: bool,
}

impl RuleSet {
    /// A rule set with no entries at all.
    pub fn empty() -> Self {
        Self {
            exclusions: Vec::new(),
            inclusions: Vec::new(),
            extensions: Vec::new(),
            include_all: false,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            inclusions: DEFAULT_INCLUSIONS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            include_all: false,
        }
    }
}

/// Normalize an extension filter entry to carry a leading dot.
///
/// Returns `None` for blank entries.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{}", ext))
    }
}

/// Where the flat path list comes from.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    /// Skip the git index even inside a work tree and walk the filesystem.
    pub force_walk: bool,
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub repo_path: PathBuf,
    pub output_path: PathBuf,
    pub rules: RuleSet,
    pub output: OutputConfig,
    pub source: SourceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            rules: RuleSet::default(),
            output: OutputConfig::default(),
            source: SourceConfig::default(),
        }
    }
}
