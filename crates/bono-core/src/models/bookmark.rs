//! Bookmark model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{BookmarkFields, StoredDocument, TagSet, DEFAULT_TAG};
use crate::error::{Error, Result};

/// Identifier of a bookmark document, assigned when the document is written
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookmarkId(String);

impl BookmarkId {
    /// Wrap an identifier received from the store
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh document identifier (UUID v7, hyphen-free)
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookmarkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A bookmark as seen by the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Store-assigned identifier
    pub id: BookmarkId,
    /// Target URL
    pub url: String,
    /// Display title
    pub title: String,
    /// Name of the folder this bookmark belongs to
    pub folder: String,
    /// Tags, insertion ordered
    pub tags: Vec<String>,
    /// Optional free-text memo
    pub memo: Option<String>,
    /// Whether the link has been reviewed
    pub is_checked: bool,
    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Build a bookmark from a stored document.
    ///
    /// Missing fields fall back to their defaults: the title to the URL, the
    /// tag list to the legacy single `tag` field, the reviewed flag to
    /// `false` and the creation time to `read_at`.
    #[must_use]
    pub fn from_document(document: StoredDocument, read_at: DateTime<Utc>) -> Self {
        let StoredDocument { id, fields } = document;
        let BookmarkFields {
            url,
            title,
            folder,
            tags,
            tag,
            memo,
            is_checked,
            created_at,
        } = fields;

        let url = url.unwrap_or_default();
        let title = title.filter(|title| !title.is_empty()).unwrap_or_else(|| url.clone());
        let tags = tags.unwrap_or_else(|| {
            tag.filter(|tag| !tag.is_empty())
                .map(|tag| vec![tag])
                .unwrap_or_default()
        });

        Self {
            id,
            url,
            title,
            folder: folder.unwrap_or_default(),
            tags,
            memo: memo.filter(|memo| !memo.is_empty()),
            is_checked: is_checked.unwrap_or(false),
            created_at: created_at.unwrap_or(read_at),
        }
    }

    /// Memo text, or the empty string when there is none
    pub fn memo_or_empty(&self) -> &str {
        self.memo.as_deref().unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }
}

/// Field values for a bookmark that has not been written yet.
///
/// New bookmarks are always written unreviewed; the creation timestamp is
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub memo: Option<String>,
}

impl NewBookmark {
    /// Validate raw form input and build the fields to write.
    ///
    /// The URL and memo are trimmed. An empty URL is rejected. An empty tag
    /// selection falls back to [`DEFAULT_TAG`].
    pub fn from_input(raw_url: &str, folder: &str, tags: &TagSet, memo: &str) -> Result<Self> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(Error::EmptyUrl);
        }

        let tags = if tags.is_empty() {
            vec![DEFAULT_TAG.to_string()]
        } else {
            tags.as_slice().to_vec()
        };
        let memo = memo.trim();

        Ok(Self {
            url: url.to_string(),
            title: infer_title(url),
            folder: folder.to_string(),
            tags,
            memo: (!memo.is_empty()).then(|| memo.to_string()),
        })
    }
}

/// Derive a display title from a URL: host followed by path.
///
/// Text that does not parse as a URL is returned unchanged.
///
/// # Examples
///
/// ```
/// use bono_core::models::infer_title;
///
/// assert_eq!(infer_title("https://example.com/page"), "example.com/page");
/// assert_eq!(infer_title("not a url"), "not a url");
/// ```
#[must_use]
pub fn infer_title(raw: &str) -> String {
    Url::parse(raw).map_or_else(
        |_| raw.to_string(),
        |url| format!("{}{}", url.host_str().unwrap_or(""), url.path()),
    )
}

/// A partial overwrite of a stored bookmark.
///
/// Only the fields that are `Some` are written; everything else in the
/// document is left as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub folder: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_checked: Option<bool>,
}

impl BookmarkPatch {
    /// Patch written when an edit is saved
    #[must_use]
    pub fn relocate(folder: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            tags: Some(tags),
            is_checked: None,
        }
    }

    /// Patch written when a folder's members are moved elsewhere
    #[must_use]
    pub fn move_to(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Self::default()
        }
    }

    /// Patch written when the reviewed flag is toggled
    #[must_use]
    pub fn checked(is_checked: bool) -> Self {
        Self {
            is_checked: Some(is_checked),
            ..Self::default()
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.folder.is_none() && self.tags.is_none() && self.is_checked.is_none()
    }

    /// Apply the patch to an in-memory copy of the document fields
    pub fn apply_to(&self, fields: &mut BookmarkFields) {
        if let Some(folder) = &self.folder {
            fields.folder = Some(folder.clone());
        }
        if let Some(tags) = &self.tags {
            fields.tags = Some(tags.clone());
        }
        if let Some(is_checked) = self.is_checked {
            fields.is_checked = Some(is_checked);
        }
    }
}
