//! Path selection: which paths are listed in the tree and which have their
//! content concatenated.
//!
//! Inclusion always wins over exclusion. A path is listed when it is included
//! or not excluded; its content is written only when it is included. Every
//! content-selected path is therefore also listed.

use glob::{MatchOptions, Pattern};

use crate::config::RuleSet;
use crate::path_utils::{has_glob_chars, normalize, segments};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled exclusion entry.
#[derive(Debug, Clone)]
enum Exclusion {
    /// `dir/`: the path starts with this prefix.
    DirPrefix(String),
    /// `name`: the path ends with this text.
    Suffix(String),
    /// `pat*/`: some leading directory of the path matches.
    DirGlob(Pattern),
    /// `*.ext`: some segment of the path matches.
    SegmentGlob(Pattern),
}

impl Exclusion {
    fn compile(entry: &str) -> Option<Self> {
        let normalized = normalize(entry);
        if normalized.is_empty() {
            return None;
        }
        let is_dir = normalized.ends_with('/');

        if has_glob_chars(&normalized) {
            let body = normalized.trim_end_matches('/');
            if let Ok(pattern) = Pattern::new(body) {
                return Some(if is_dir {
                    Exclusion::DirGlob(pattern)
                } else {
                    Exclusion::SegmentGlob(pattern)
                });
            }
            tracing::warn!("invalid glob in exclusion '{}', matching literally", entry);
        }

        Some(if is_dir {
            Exclusion::DirPrefix(normalized)
        } else {
            Exclusion::Suffix(normalized)
        })
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Exclusion::DirPrefix(prefix) => path.starts_with(prefix.as_str()),
            Exclusion::Suffix(suffix) => path.ends_with(suffix.as_str()),
            Exclusion::SegmentGlob(pattern) => {
                segments(path).any(|segment| pattern.matches_with(segment, GLOB_OPTIONS))
            }
            Exclusion::DirGlob(pattern) => {
                let parts: Vec<&str> = segments(path).collect();
                // Only proper prefixes: the last segment is the file itself.
                (1..parts.len()).any(|len| {
                    pattern.matches_with(&parts[..len].join("/"), GLOB_OPTIONS)
                })
            }
        }
    }
}

/// Pure predicates over a fixed rule set.
#[derive(Debug, Clone)]
pub struct Selector {
    exclusions: Vec<Exclusion>,
    inclusions: Vec<String>,
    extensions: Vec<String>,
    include_all: bool,
}

impl Selector {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            exclusions: rules
                .exclusions
                .iter()
                .filter_map(|e| Exclusion::compile(e))
                .collect(),
            inclusions: rules
                .inclusions
                .iter()
                .map(|i| normalize(i))
                .filter(|i| !i.is_empty())
                .collect(),
            extensions: rules
                .extensions
                .iter()
                .filter(|e| !e.is_empty())
                .cloned()
                .collect(),
            include_all: rules.include_all,
        }
    }

    /// True if any exclusion entry matches the path.
    pub fn is_excluded(&self, path: &str) -> bool {
        if self.include_all {
            return false;
        }
        let path = normalize(path);
        self.exclusions.iter().any(|e| e.matches(&path))
    }

    /// True if the path contains an inclusion entry or ends with a configured
    /// extension.
    pub fn is_included(&self, path: &str) -> bool {
        if self.include_all {
            return true;
        }
        let path = normalize(path);
        self.inclusions.iter().any(|i| path.contains(i.as_str()))
            || self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    /// Whether the path appears in the tree listing.
    pub fn is_listed(&self, path: &str) -> bool {
        self.is_included(path) || !self.is_excluded(path)
    }

    /// Whether the path's content is concatenated into the output.
    pub fn is_content_selected(&self, path: &str) -> bool {
        self.is_included(path)
    }
}
