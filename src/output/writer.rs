//! Append-per-line writer for the output document

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tree::{FileTree, render_with};

use super::config::OutputConfig;

/// Writes the output document piece by piece.
///
/// The underlying writer is not buffered by this type: each line goes out in
/// its own `write_all`, so an interrupted run leaves everything written so far
/// on disk.
pub struct OutputWriter<W: Write> {
    out: W,
    config: OutputConfig,
    /// Path reported in I/O errors.
    target: PathBuf,
}

impl OutputWriter<File> {
    /// Create or truncate `path` and write the header line.
    pub fn create(path: &Path, config: OutputConfig) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Self::new(file, path, config)
    }
}

impl<W: Write> OutputWriter<W> {
    /// Wrap an arbitrary writer and write the header line.
    pub fn new(out: W, target: impl Into<PathBuf>, config: OutputConfig) -> Result<Self> {
        let mut writer = Self {
            out,
            config,
            target: target.into(),
        };
        let header = format!("{}\n", writer.config.header);
        writer.write_str(&header)?;
        Ok(writer)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&self.target, e))
    }

    /// Write every rendered tree line.
    pub fn write_tree(&mut self, tree: &FileTree) -> Result<()> {
        render_with(tree, &mut |line: &str| self.write_str(&format!("{}\n", line)))
    }

    /// Blank line between the tree and the file blocks.
    pub fn finish_tree(&mut self) -> Result<()> {
        self.write_str("\n")
    }

    /// Write one file block: begin marker, content, optional end marker, then
    /// a blank separator line.
    pub fn write_file_block(&mut self, path: &str, content: &str) -> Result<()> {
        let begin = format!("{}\n", self.config.begin_marker(path));
        self.write_str(&begin)?;
        self.write_str(content)?;
        self.write_str("\n")?;
        if self.config.end_markers {
            let end = format!("{}\n", self.config.end_marker(path));
            self.write_str(&end)?;
        }
        self.write_str("\n")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| Error::io(&self.target, e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
