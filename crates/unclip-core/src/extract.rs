//! Extraction of parsed archive entries onto the filesystem.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;
use tracing::error;

use crate::status::ExtractionReport;
use crate::status::ExtractionStatus;
use crate::txtar::Archive;

/// Writes every archive entry beneath `dest`, in archive order.
///
/// Entry names are joined onto `dest` exactly as stored in the archive —
/// `..` segments and absolute paths are not rejected. Missing parent
/// directories are created first; the target file is created (or truncated)
/// and the entry's bytes written in full. Each output file handle is
/// released at the end of its own iteration.
///
/// One entry's failure never aborts the loop: the failure is recorded,
/// logged at error level, and the remaining entries are still attempted.
#[must_use]
pub fn extract_entries(archive: &Archive, dest: &Path) -> ExtractionReport {
    let mut report = ExtractionReport::new();

    for entry in &archive.files {
        let local_path = dest.join(&entry.name);

        if let Some(parent) = local_path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                error!(entry = %entry.name, %err, "directory creation failed");
                report.push(ExtractionStatus::failed(
                    entry.name.as_str(),
                    format!("directory creation failed: {err}"),
                ));
                continue;
            }
        }

        let mut file = match File::create(&local_path) {
            Ok(file) => file,
            Err(err) => {
                error!(entry = %entry.name, %err, "file creation failed");
                report.push(ExtractionStatus::failed(
                    entry.name.as_str(),
                    format!("file creation failed: {err}"),
                ));
                continue;
            }
        };

        if let Err(err) = file.write_all(&entry.data) {
            error!(entry = %entry.name, %err, "file write failed");
            report.push(ExtractionStatus::failed(
                entry.name.as_str(),
                format!("file write failed: {err}"),
            ));
            continue;
        }

        report.push(ExtractionStatus::succeeded(entry.name.as_str()));
        debug!(path = %local_path.display(), "file extracted");
    }

    report
}
