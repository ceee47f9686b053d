//! Raw stored document shape
//!
//! Mirrors the fields of a document in the `bookmarks` collection exactly as
//! the store returns them. Every field is optional here; defaults and the
//! legacy `tag` upconversion are applied when converting into a [`Bookmark`].
//!
//! [`Bookmark`]: super::Bookmark

use chrono::{DateTime, Utc};

use super::BookmarkId;

/// Field values of one stored bookmark document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFields {
    pub url: Option<String>,
    pub title: Option<String>,
    pub folder: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Single-tag field written by early versions of the app
    pub tag: Option<String>,
    pub memo: Option<String>,
    pub is_checked: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A document as delivered in a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub id: BookmarkId,
    pub fields: BookmarkFields,
}

impl StoredDocument {
    pub const fn new(id: BookmarkId, fields: BookmarkFields) -> Self {
        Self { id, fields }
    }
}
