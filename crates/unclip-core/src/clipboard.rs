//! System clipboard acquisition.

use arboard::Clipboard;
use tracing::debug;

use crate::error::ExtractError;
use crate::error::Result;

/// Reads the current text content of the system clipboard.
///
/// # Errors
///
/// Returns [`ExtractError::ClipboardRead`] when the clipboard is
/// inaccessible (no display server, platform denial), holds non-text
/// content, or is empty. There is no retry; a failure here is fatal to the
/// run.
pub fn read_text() -> Result<String> {
    let mut clipboard = Clipboard::new().map_err(|err| ExtractError::ClipboardRead {
        reason: err.to_string(),
    })?;

    let text = clipboard
        .get_text()
        .map_err(|err| ExtractError::ClipboardRead {
            reason: err.to_string(),
        })?;

    if text.is_empty() {
        return Err(ExtractError::ClipboardRead {
            reason: "clipboard is empty".to_string(),
        });
    }

    debug!(bytes = text.len(), "clipboard text acquired");
    Ok(text)
}
