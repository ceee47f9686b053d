//! Firestore document store over the v1 REST API.
//!
//! REST has no push channel, so the live query is a background task that
//! re-runs the ordered query every `poll_interval` and forwards a snapshot
//! whenever the result differs from the last one it forwarded.

mod codec;

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;

use super::{DocumentStore, Subscription};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::{BookmarkId, BookmarkPatch, NewBookmark, StoredDocument};
use crate::util::compact_text;

/// Handle to a Firestore collection
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    database_path: String,
    documents_url: String,
    collection: String,
    api_key: Option<String>,
    poll_interval: Duration,
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            database_path: config.database_path()?,
            documents_url: config.documents_url()?,
            collection: config.collection.clone(),
            api_key: config.api_key.clone(),
            poll_interval: config.poll_interval,
        })
    }

    /// Full resource name of a document, as used inside write requests
    fn document_name(&self, id: &BookmarkId) -> String {
        format!(
            "{}/documents/{}/{}",
            self.database_path, self.collection, id
        )
    }

    fn document_url(&self, id: &BookmarkId) -> String {
        format!("{}/{}/{}", self.documents_url, self.collection, id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    /// Run the collection query ordered by `createdAt` descending
    async fn run_query(&self) -> Result<Vec<StoredDocument>> {
        let body = json!({
            "structuredQuery": {
                "from": [{"collectionId": self.collection}],
                "orderBy": [{
                    "field": {"fieldPath": codec::FIELD_CREATED_AT},
                    "direction": "DESCENDING"
                }]
            }
        });
        let request = self
            .client
            .post(format!("{}:runQuery", self.documents_url))
            .json(&body);
        let response = check_status(self.authorize(request).send().await?).await?;
        codec::decode_run_query(&response.text().await?)
    }

    /// Forward changed query results until the subscriber goes away
    async fn poll(
        self,
        mut last: Vec<StoredDocument>,
        sender: mpsc::UnboundedSender<Vec<StoredDocument>>,
    ) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;
        loop {
            interval.tick().await;
            if sender.is_closed() {
                break;
            }
            match self.run_query().await {
                Ok(documents) if documents != last => {
                    tracing::debug!("Firestore snapshot changed ({} documents)", documents.len());
                    if sender.send(documents.clone()).is_err() {
                        break;
                    }
                    last = documents;
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!("Firestore poll failed: {}", error);
                }
            }
        }
        tracing::debug!("Firestore subscription released");
    }
}

impl DocumentStore for FirestoreStore {
    async fn subscribe(&self) -> Result<Subscription> {
        let initial = self.run_query().await?;
        tracing::info!(
            "Firestore subscription established on `{}` ({} documents)",
            self.collection,
            initial.len()
        );

        let (sender, receiver) = mpsc::unbounded_channel();
        sender
            .send(initial.clone())
            .map_err(|_| Error::SubscriptionClosed)?;
        let producer = tokio::spawn(self.clone().poll(initial, sender));
        Ok(Subscription::with_producer(receiver, producer))
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        self.run_query().await
    }

    async fn create(&self, bookmark: &NewBookmark) -> Result<BookmarkId> {
        let id = BookmarkId::generate();
        let body = json!({
            "writes": [{
                "update": {
                    "name": self.document_name(&id),
                    "fields": codec::encode_new(bookmark),
                },
                "updateTransforms": [{
                    "fieldPath": codec::FIELD_CREATED_AT,
                    "setToServerValue": "REQUEST_TIME",
                }],
                "currentDocument": {"exists": false},
            }]
        });
        let request = self
            .client
            .post(format!("{}:commit", self.documents_url))
            .json(&body);
        check_status(self.authorize(request).send().await?).await?;
        tracing::debug!("Created bookmark document {}", id);
        Ok(id)
    }

    async fn update(&self, id: &BookmarkId, patch: &BookmarkPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let (fields, mask) = codec::encode_patch(patch);
        let mut query: Vec<(&str, &str)> = mask
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();
        query.push(("currentDocument.exists", "true"));

        let request = self
            .client
            .patch(self.document_url(id))
            .query(&query)
            .json(&json!({ "fields": fields }));
        check_status(self.authorize(request).send().await?).await?;
        tracing::debug!("Updated bookmark document {} ({})", id, mask.join(", "));
        Ok(())
    }

    async fn delete(&self, id: &BookmarkId) -> Result<()> {
        let request = self.client.delete(self.document_url(id));
        check_status(self.authorize(request).send().await?).await?;
        tracing::debug!("Deleted bookmark document {}", id);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Store(parse_api_error(status, &body)))
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorEnvelope {
        error: Some(error),
    }) = serde_json::from_str::<ErrorEnvelope>(body)
    {
        if let Some(message) = error.message {
            let label = error.status.unwrap_or_else(|| status.as_u16().to_string());
            return format!("{} ({label})", message.trim());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{trimmed} ({})", status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> FirestoreStore {
        FirestoreStore::new(&StoreConfig::firestore("demo", Some("key".to_string()))).unwrap()
    }

    #[test]
    fn builds_document_paths() {
        let store = store();
        let id = BookmarkId::new("abc");
        assert_eq!(
            store.document_name(&id),
            "projects/demo/databases/(default)/documents/bookmarks/abc"
        );
        assert_eq!(
            store.document_url(&id),
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/bookmarks/abc"
        );
    }

    #[test]
    fn requires_project_id() {
        assert!(matches!(
            FirestoreStore::new(&StoreConfig::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn parse_api_error_prefers_firestore_message() {
        let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            parse_api_error(StatusCode::FORBIDDEN, body),
            "Missing or insufficient permissions. (PERMISSION_DENIED)"
        );
    }

    #[test]
    fn parse_api_error_falls_back_to_body_or_status() {
        assert_eq!(
            parse_api_error(StatusCode::BAD_GATEWAY, "  upstream down "),
            "upstream down (502)"
        );
        assert_eq!(parse_api_error(StatusCode::NOT_FOUND, ""), "HTTP 404");
    }
}
