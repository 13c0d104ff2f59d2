//! Lexical path normalization for repository-relative paths.

/// Normalize a repository-relative path or pattern.
///
/// Backslashes become `/`, empty and `.` segments are dropped and `seg/..`
/// pairs are resolved lexically. A `..` with nothing left to pop is kept, so
/// entries such as `../../README.md` survive intact. A trailing `/` is
/// preserved because it marks a directory-prefix pattern.
///
/// # Example
///
/// ```
/// use repotext::path_utils::normalize;
///
/// assert_eq!(normalize("./src//lib/../main.ts"), "src/main.ts");
/// assert_eq!(normalize("node_modules\\"), "node_modules/");
/// assert_eq!(normalize("../../README.md"), "../../README.md");
/// ```
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let trailing_slash = unified.ends_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut normalized = parts.join("/");
    if trailing_slash && !normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty() && *s != ".")
}

/// Whether a pattern contains glob metacharacters.
pub fn has_glob_chars(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
