//! Destinations for rendered reports.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

/// Receives rendered report content.
pub trait OutputSink {
    /// Persist `content` at `path`, relative to the project root.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. Callers do not retry.
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// Writes reports below a project root directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Create a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!(path = target.display().to_string(), bytes = content.len(); "Writing report");
        fs::write(&target, content)
    }
}
