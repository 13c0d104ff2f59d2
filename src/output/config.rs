//! Output configuration types

pub const DEFAULT_HEADER: &str = "File Tree:";
pub const DEFAULT_BEGIN_PREFIX: &str = "===== BEGIN ";
pub const DEFAULT_END_PREFIX: &str = "===== END ";
pub const DEFAULT_MARKER_SUFFIX: &str = " =====";

/// Text of the header and the per-file marker lines.
///
/// Markers are a best-effort textual delimiter; file content that happens to
/// contain a line of the same shape is not escaped.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub header: String,
    pub begin_prefix: String,
    pub end_prefix: String,
    pub marker_suffix: String,
    /// Write an end marker line after each file's content.
    pub end_markers: bool,
}

impl OutputConfig {
    pub fn begin_marker(&self, path: &str) -> String {
        format!("{}{}{}", self.begin_prefix, path, self.marker_suffix)
    }

    pub fn end_marker(&self, path: &str) -> String {
        format!("{}{}{}", self.end_prefix, path, self.marker_suffix)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            begin_prefix: DEFAULT_BEGIN_PREFIX.to_string(),
            end_prefix: DEFAULT_END_PREFIX.to_string(),
            marker_suffix: DEFAULT_MARKER_SUFFIX.to_string(),
            end_markers: false,
        }
    }
}
