//! Parser for the txtar plain-text archive convention.
//!
//! A txtar archive bundles multiple named file contents into one text blob.
//! Each file section begins with a marker line of the form `-- name --`; the
//! section's content is the literal text after that line, up to the next
//! marker line or the end of input. Text before the first marker is a
//! free-form comment. An input without marker lines parses to an archive
//! with zero files — parsing itself never fails.

use std::fs;
use std::path::Path;

use crate::error::Result;

const MARKER_PREFIX: &str = "-- ";
const MARKER_SUFFIX: &str = " --";

/// One named file carried by an archive.
///
/// The name is taken from the marker line exactly as written (after trimming
/// surrounding whitespace) and is treated as an untrusted relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// Relative path as stored in the archive.
    pub name: String,
    /// Literal file content.
    pub data: Vec<u8>,
}

/// An ordered txtar archive.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    /// Free-form text preceding the first marker line.
    pub comment: String,
    /// Files in the order their markers appear; extraction preserves it.
    pub files: Vec<ArchiveFile>,
}

impl Archive {
    /// Parses archive text.
    ///
    /// If the content of the final file does not end with a newline, one is
    /// appended; interior files always end with the newline that precedes
    /// the next marker.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut comment = String::new();
        let mut files = Vec::new();
        let mut current: Option<(String, String)> = None;

        for line in text.split_inclusive('\n') {
            if let Some(name) = marker_name(line) {
                if let Some((name, data)) = current.take() {
                    files.push(ArchiveFile {
                        name,
                        data: fix_newline(data).into_bytes(),
                    });
                }
                current = Some((name, String::new()));
            } else if let Some((_, data)) = &mut current {
                data.push_str(line);
            } else {
                comment.push_str(line);
            }
        }

        if let Some((name, data)) = current {
            files.push(ArchiveFile {
                name,
                data: fix_newline(data).into_bytes(),
            });
        }

        Self { comment, files }
    }

    /// Reads the file at `path` and parses its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn parse_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Number of files in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when the archive carries no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Extracts the file name if `line` is a marker line.
///
/// A marker line starts with `"-- "` and ends with `" --"`; the name between
/// is trimmed. A marker whose name would be empty is not a marker.
fn marker_name(line: &str) -> Option<String> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let name = line
        .strip_prefix(MARKER_PREFIX)?
        .strip_suffix(MARKER_SUFFIX)?
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn fix_newline(mut data: String) -> String {
    if !data.is_empty() && !data.ends_with('\n') {
        data.push('\n');
    }
    data
}
