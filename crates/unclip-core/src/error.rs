//! Error types for clipboard extraction runs.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that abort a clipboard extraction run.
///
/// Only acquisition, staging, and parse failures appear here: they are fatal
/// and propagate immediately. Per-entry extraction failures are deliberately
/// absent — they are recorded as [`crate::ExtractionStatus`] values, logged,
/// and never abort the run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Clipboard is inaccessible, holds no text, or is empty.
    #[error("clipboard read failed: {reason}")]
    ClipboardRead {
        /// Platform-level cause.
        reason: String,
    },

    /// Staging file could not be created or written.
    #[error("staging file error: {0}")]
    TempFile(#[source] std::io::Error),

    /// Clipboard text parsed to zero archive entries.
    ///
    /// The staging file named in the message is left on disk so the raw
    /// clipboard text can be inspected.
    #[error("clipboard contents not in txtar format, see {}", .path.display())]
    NotTxtar {
        /// Location of the preserved staging file.
        path: PathBuf,
    },

    /// Other I/O failure surfaced by the pipeline.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Returns the preserved staging file path, if this error leaves one
    /// behind for inspection.
    #[must_use]
    pub fn staging_path(&self) -> Option<&Path> {
        match self {
            Self::NotTxtar { path } => Some(path),
            _ => None,
        }
    }
}
