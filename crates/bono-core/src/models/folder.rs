//! Folder labels
//!
//! Folders are plain string labels held in session-local state. They are not
//! stored remotely; a bookmark simply carries the folder name it belongs to.

/// Folders every session starts with, in display order.
pub const DEFAULT_FOLDERS: [&str; 4] = ["대학원", "업무", "KBS", "기타"];

/// Owned copy of [`DEFAULT_FOLDERS`].
#[must_use]
pub fn default_folders() -> Vec<String> {
    DEFAULT_FOLDERS.iter().map(ToString::to_string).collect()
}
