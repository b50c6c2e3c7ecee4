//! Staging of clipboard text into a temporary file.
//!
//! Each run persists the clipboard text to a `clipboard-*.txt` file under
//! the platform temp directory before parsing. On a fully successful run the
//! file is deleted; on any failure it stays behind so the raw clipboard text
//! can be inspected.

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::error;
use tracing::info;

use crate::error::ExtractError;
use crate::error::Result;

/// A temporary file holding the clipboard text for the duration of a run.
///
/// The handle owns the file: it is released on every exit path, and the
/// underlying path is either deleted ([`Self::remove`]) or kept on disk
/// ([`Self::preserve`]) — never left to implicit cleanup.
#[derive(Debug)]
pub struct StagingFile {
    inner: NamedTempFile,
}

impl StagingFile {
    /// Creates a uniquely named `clipboard-*.txt` file and writes `content`
    /// into it in full.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::TempFile`] if the file cannot be created or
    /// written (disk full, permissions).
    pub fn write(content: &str) -> Result<Self> {
        let mut inner = tempfile::Builder::new()
            .prefix("clipboard-")
            .suffix(".txt")
            .tempfile()
            .map_err(ExtractError::TempFile)?;

        inner
            .write_all(content.as_bytes())
            .map_err(ExtractError::TempFile)?;

        Ok(Self { inner })
    }

    /// Path of the staging file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Closes the handle and deletes the file, logging the outcome.
    pub fn remove(self) {
        let path = self.inner.path().to_path_buf();
        match self.inner.close() {
            Ok(()) => info!(path = %path.display(), "staging file deleted"),
            Err(err) => error!(path = %path.display(), %err, "failed to delete staging file"),
        }
    }

    /// Closes the handle but leaves the file on disk, returning its path.
    pub fn preserve(self) -> PathBuf {
        match self.inner.keep() {
            Ok((_, path)) => path,
            Err(err) => {
                let path = err.file.path().to_path_buf();
                error!(path = %path.display(), "failed to release staging file handle");
                path
            }
        }
    }
}
