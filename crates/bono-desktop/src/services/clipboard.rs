//! System clipboard access

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),

    #[error("Clipboard holds no text")]
    Empty,
}

/// Read the clipboard's text content, trimmed
pub fn read_url() -> Result<String, ClipboardError> {
    let mut clipboard = Clipboard::new()?;
    let text = clipboard.get_text()?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }
    Ok(text.to_string())
}
