//! Clipboard-to-filesystem extraction for txtar-style text archives.
//!
//! `unclip-core` reads the system clipboard, interprets its contents as a
//! txtar archive (a plain-text convention bundling multiple named files into
//! one blob using `-- name --` marker lines), and writes the archive's member
//! files to disk relative to a destination directory. Each entry's outcome is
//! tracked individually: one entry failing never stops the rest, and the
//! temporary staging copy of the clipboard text is deleted only when every
//! entry extracted successfully.
//!
//! # Examples
//!
//! ```no_run
//! use unclip_core::extract_clipboard;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_clipboard(std::path::Path::new("."))?;
//! println!("extracted {} files", report.files_extracted());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod clipboard;
pub mod error;
pub mod extract;
pub mod staging;
pub mod status;
pub mod txtar;

// Re-export main API types
pub use api::extract_clipboard;
pub use api::extract_text;
pub use error::ExtractError;
pub use error::Result;
pub use status::ExtractionReport;
pub use status::ExtractionStatus;
pub use txtar::Archive;
pub use txtar::ArchiveFile;
