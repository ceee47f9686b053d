//! Firestore REST wire format
//!
//! Firestore's JSON encoding wraps every field in a typed value object such
//! as `{"stringValue": "..."}`. This module converts between that encoding and
//! [`BookmarkFields`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{BookmarkFields, BookmarkId, BookmarkPatch, NewBookmark, StoredDocument};

pub const FIELD_URL: &str = "url";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_FOLDER: &str = "folder";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_LEGACY_TAG: &str = "tag";
pub const FIELD_MEMO: &str = "memo";
pub const FIELD_IS_CHECKED: &str = "isChecked";
pub const FIELD_CREATED_AT: &str = "createdAt";

/// A single typed Firestore value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

pub type Fields = BTreeMap<String, Value>;

/// A document resource as returned by the REST API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
}

/// One element of a `runQuery` response stream
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryResponse {
    #[serde(default)]
    pub document: Option<Document>,
}

impl Value {
    fn string(value: impl Into<String>) -> Self {
        Self::StringValue(value.into())
    }

    fn string_array(values: &[String]) -> Self {
        Self::ArrayValue(ArrayValue {
            values: values.iter().cloned().map(Self::StringValue).collect(),
        })
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(value) => Some(value),
            _ => None,
        }
    }
}

/// Decode the documents of a `runQuery` response, in response order
pub fn decode_run_query(body: &str) -> Result<Vec<StoredDocument>> {
    let responses: Vec<RunQueryResponse> = serde_json::from_str(body)?;
    responses
        .into_iter()
        .filter_map(|response| response.document)
        .map(decode_document)
        .collect()
}

/// Decode one document resource.
///
/// Values of an unexpected type, and timestamps that do not parse, are
/// treated as absent so one malformed field does not hide the whole bookmark
/// or the rest of the snapshot.
pub fn decode_document(document: Document) -> Result<StoredDocument> {
    let id = document_id(&document.name)?;
    let mut fields = document.fields;

    let mut take_string = |key: &str| match fields.remove(key) {
        Some(Value::StringValue(value)) => Some(value),
        _ => None,
    };
    let url = take_string(FIELD_URL);
    let title = take_string(FIELD_TITLE);
    let folder = take_string(FIELD_FOLDER);
    let tag = take_string(FIELD_LEGACY_TAG);
    let memo = take_string(FIELD_MEMO);

    let tags = match fields.remove(FIELD_TAGS) {
        Some(Value::ArrayValue(array)) => Some(
            array
                .values
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect(),
        ),
        _ => None,
    };
    let is_checked = match fields.remove(FIELD_IS_CHECKED) {
        Some(Value::BooleanValue(value)) => Some(value),
        _ => None,
    };
    let created_at = match fields.remove(FIELD_CREATED_AT) {
        Some(Value::TimestampValue(raw)) => parse_timestamp(&id, &raw),
        _ => None,
    };

    Ok(StoredDocument::new(
        id,
        BookmarkFields {
            url,
            title,
            folder,
            tags,
            tag,
            memo,
            is_checked,
            created_at,
        },
    ))
}

/// Fields written when a bookmark is created (`createdAt` is set by a
/// server-side transform, not here)
pub fn encode_new(bookmark: &NewBookmark) -> Fields {
    let mut fields = Fields::new();
    fields.insert(FIELD_URL.to_string(), Value::string(&bookmark.url));
    fields.insert(FIELD_TITLE.to_string(), Value::string(&bookmark.title));
    fields.insert(FIELD_FOLDER.to_string(), Value::string(&bookmark.folder));
    fields.insert(FIELD_TAGS.to_string(), Value::string_array(&bookmark.tags));
    if let Some(memo) = &bookmark.memo {
        fields.insert(FIELD_MEMO.to_string(), Value::string(memo));
    }
    fields.insert(FIELD_IS_CHECKED.to_string(), Value::BooleanValue(false));
    fields
}

/// Fields and update-mask paths for a partial overwrite
pub fn encode_patch(patch: &BookmarkPatch) -> (Fields, Vec<&'static str>) {
    let mut fields = Fields::new();
    let mut mask = Vec::new();
    if let Some(folder) = &patch.folder {
        fields.insert(FIELD_FOLDER.to_string(), Value::string(folder));
        mask.push(FIELD_FOLDER);
    }
    if let Some(tags) = &patch.tags {
        fields.insert(FIELD_TAGS.to_string(), Value::string_array(tags));
        mask.push(FIELD_TAGS);
    }
    if let Some(is_checked) = patch.is_checked {
        fields.insert(FIELD_IS_CHECKED.to_string(), Value::BooleanValue(is_checked));
        mask.push(FIELD_IS_CHECKED);
    }
    (fields, mask)
}

fn parse_timestamp(id: &BookmarkId, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("Ignoring bad createdAt `{}` on bookmark {}: {}", raw, id, e);
            None
        }
    }
}

/// Last path segment of `projects/p/databases/d/documents/bookmarks/{id}`
fn document_id(name: &str) -> Result<BookmarkId> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(BookmarkId::new)
        .ok_or_else(|| Error::InvalidDocument(format!("document name without id: `{name}`")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const NAME: &str = "projects/demo/databases/(default)/documents/bookmarks/abc123";

    #[test]
    fn decodes_full_document() {
        let body = json!([
            {
                "document": {
                    "name": NAME,
                    "fields": {
                        "url": {"stringValue": "https://example.com/page"},
                        "title": {"stringValue": "example.com/page"},
                        "folder": {"stringValue": "기타"},
                        "tags": {"arrayValue": {"values": [{"stringValue": "뉴스"}]}},
                        "memo": {"stringValue": "읽을 것"},
                        "isChecked": {"booleanValue": true},
                        "createdAt": {"timestampValue": "2024-05-01T12:00:00.123456Z"}
                    },
                    "createTime": "2024-05-01T12:00:00.123456Z",
                    "updateTime": "2024-05-01T12:00:00.123456Z"
                },
                "readTime": "2024-05-02T00:00:00Z"
            },
            {"readTime": "2024-05-02T00:00:00Z"}
        ])
        .to_string();

        let documents = decode_run_query(&body).unwrap();
        assert_eq!(documents.len(), 1);
        let document = &documents[0];
        assert_eq!(document.id, BookmarkId::new("abc123"));
        assert_eq!(document.fields.tags, Some(vec!["뉴스".to_string()]));
        assert_eq!(document.fields.is_checked, Some(true));
        assert_eq!(document.fields.memo.as_deref(), Some("읽을 것"));
        assert_eq!(
            document.fields.created_at,
            Some(
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                    + chrono::Duration::microseconds(123_456)
            )
        );
    }

    #[test]
    fn decodes_legacy_and_null_fields() {
        let document: Document = serde_json::from_value(json!({
            "name": NAME,
            "fields": {
                "url": {"stringValue": "https://example.com"},
                "tag": {"stringValue": "메모"},
                "createdAt": {"nullValue": null},
                "isChecked": {"stringValue": "yes"}
            }
        }))
        .unwrap();

        let stored = decode_document(document).unwrap();
        assert_eq!(stored.fields.tag.as_deref(), Some("메모"));
        assert_eq!(stored.fields.tags, None);
        assert_eq!(stored.fields.created_at, None);
        assert_eq!(stored.fields.is_checked, None);
    }

    #[test]
    fn unparseable_timestamp_is_treated_as_missing() {
        let document: Document = serde_json::from_value(json!({
            "name": NAME,
            "fields": {
                "url": {"stringValue": "https://example.com"},
                "createdAt": {"timestampValue": "yesterday"}
            }
        }))
        .unwrap();
        let decoded = decode_document(document).unwrap();
        assert_eq!(decoded.fields.created_at, None);
        assert_eq!(decoded.fields.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn one_bad_timestamp_keeps_the_rest_of_the_query() {
        let body = json!([
            {"document": {
                "name": "projects/p/databases/(default)/documents/bookmarks/bad",
                "fields": {"createdAt": {"timestampValue": "not a time"}}
            }},
            {"document": {
                "name": "projects/p/databases/(default)/documents/bookmarks/good",
                "fields": {"createdAt": {"timestampValue": "2024-05-01T09:30:00Z"}}
            }}
        ])
        .to_string();
        let documents = decode_run_query(&body).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].id, BookmarkId::new("good"));
        assert!(documents[1].fields.created_at.is_some());
    }

    #[test]
    fn encode_new_omits_missing_memo() {
        let fields = encode_new(&NewBookmark {
            url: "https://example.com/page".to_string(),
            title: "example.com/page".to_string(),
            folder: "기타".to_string(),
            tags: vec!["뉴스".to_string()],
            memo: None,
        });
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "folder": {"stringValue": "기타"},
                "isChecked": {"booleanValue": false},
                "tags": {"arrayValue": {"values": [{"stringValue": "뉴스"}]}},
                "title": {"stringValue": "example.com/page"},
                "url": {"stringValue": "https://example.com/page"}
            })
        );
    }

    #[test]
    fn encode_patch_lists_only_changed_fields() {
        let (fields, mask) = encode_patch(&BookmarkPatch::checked(true));
        assert_eq!(mask, vec![FIELD_IS_CHECKED]);
        assert_eq!(fields.len(), 1);

        let (fields, mask) =
            encode_patch(&BookmarkPatch::relocate("업무", vec!["메모".to_string()]));
        assert_eq!(mask, vec![FIELD_FOLDER, FIELD_TAGS]);
        assert_eq!(
            fields.get(FIELD_FOLDER),
            Some(&Value::StringValue("업무".to_string()))
        );
    }
}
