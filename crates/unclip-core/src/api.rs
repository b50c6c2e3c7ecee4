//! High-level pipeline: clipboard text to files on disk.

use std::path::Path;

use tracing::info;

use crate::clipboard;
use crate::error::ExtractError;
use crate::error::Result;
use crate::extract::extract_entries;
use crate::staging::StagingFile;
use crate::status::ExtractionReport;
use crate::txtar::Archive;

/// Runs the full pipeline against the current clipboard contents.
///
/// Reads the clipboard, stages the text to a temporary file, parses it as a
/// txtar archive, and extracts every entry beneath `dest`. The staging file
/// is deleted only when every entry extracted successfully; otherwise it is
/// left on disk for inspection.
///
/// # Errors
///
/// Returns an error if the clipboard cannot be read, the staging file cannot
/// be created or written, or the clipboard text parses to zero entries.
/// Per-entry extraction failures do NOT error: they are recorded in the
/// returned report.
pub fn extract_clipboard(dest: &Path) -> Result<ExtractionReport> {
    let text = clipboard::read_text()?;
    extract_text(&text, dest)
}

/// The pipeline minus clipboard acquisition: stage, parse, extract, clean up.
///
/// # Errors
///
/// Same contract as [`extract_clipboard`], minus the clipboard read.
pub fn extract_text(text: &str, dest: &Path) -> Result<ExtractionReport> {
    let staging = StagingFile::write(text)?;

    let archive = match Archive::parse_file(staging.path()) {
        Ok(archive) => archive,
        Err(err) => {
            let _ = staging.preserve();
            return Err(err);
        }
    };

    if archive.is_empty() {
        let path = staging.preserve();
        return Err(ExtractError::NotTxtar { path });
    }

    let report = extract_entries(&archive, dest);

    if report.all_succeeded() {
        staging.remove();
    } else {
        info!(
            path = %staging.path().display(),
            failed = report.len() - report.files_extracted(),
            "staging file preserved for inspection"
        );
        let _ = staging.preserve();
    }

    Ok(report)
}
