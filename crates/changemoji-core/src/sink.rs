//! Changelog destinations.

use std::fs;
use std::path::{Path, PathBuf};

use changemoji_config::ChangelogConfig;
use tracing::info;

use crate::CoreResult;

/// Receives the rendered changelog text.
///
/// Publishing the same text twice must leave the destination as if it had
/// been published once.
pub trait ChangelogSink {
    /// Publishes the rendered text, replacing any earlier content.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written.
    fn publish(&mut self, body: &str) -> CoreResult<()>;
}

impl ChangelogSink for String {
    fn publish(&mut self, body: &str) -> CoreResult<()> {
        self.clear();
        self.push_str(body);
        Ok(())
    }
}

/// Writes the changelog to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a sink for the configured output file, relative to `root`.
    #[must_use]
    pub fn from_config(config: &ChangelogConfig, root: &Path) -> Self {
        Self::new(root.join(&config.output))
    }

    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangelogSink for FileSink {
    fn publish(&mut self, body: &str) -> CoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, body)?;
        info!(path = %self.path.display(), bytes = body.len(), "wrote changelog");
        Ok(())
    }
}
