//! Data models for Bono

mod bookmark;
mod document;
mod folder;
mod tag;

pub use bookmark::{infer_title, Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
pub use document::{BookmarkFields, StoredDocument};
pub use folder::{default_folders, DEFAULT_FOLDERS};
pub use tag::{TagSet, DEFAULT_TAG, DEFAULT_TAGS};
