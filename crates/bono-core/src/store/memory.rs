//! In-process document store
//!
//! Behaves like the hosted store from the application's point of view: every
//! mutation pushes a complete, newest-first snapshot to all live
//! subscriptions. Used when no Firestore project is configured and by tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;

use super::{DocumentStore, Subscription};
use crate::error::{Error, Result};
use crate::models::{BookmarkFields, BookmarkId, BookmarkPatch, NewBookmark, StoredDocument};

/// Shared handle to an in-memory bookmark collection
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collection>>,
}

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<StoredDocument>,
    subscribers: Vec<mpsc::UnboundedSender<Vec<StoredDocument>>>,
    last_timestamp: Option<DateTime<Utc>>,
    rejected_writes: HashSet<BookmarkId>,
}

impl Collection {
    /// Server-side timestamp, strictly increasing across writes
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let timestamp = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::milliseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }

    /// Documents ordered by `createdAt` descending; documents without a
    /// timestamp sort last, ties keep insertion order.
    fn snapshot(&self) -> Vec<StoredDocument> {
        let mut documents = self.documents.clone();
        documents.sort_by(|a, b| match (a.fields.created_at, b.fields.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        documents
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
    }

    fn check_writable(&self, id: &BookmarkId) -> Result<()> {
        if self.rejected_writes.contains(id) {
            return Err(Error::Store(format!("write rejected for {id}")));
        }
        Ok(())
    }

    fn position(&self, id: &BookmarkId) -> Result<usize> {
        self.documents
            .iter()
            .position(|document| &document.id == id)
            .ok_or_else(|| Error::Store(format!("no document with id {id}")))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document verbatim, bypassing the creation rules.
    ///
    /// Lets callers seed documents in shapes older clients wrote, such as the
    /// single `tag` field.
    pub fn insert_document(&self, document: StoredDocument) -> Result<()> {
        let mut collection = self.lock()?;
        collection.documents.push(document);
        collection.publish();
        Ok(())
    }

    /// Make every later update or delete of `id` fail
    pub fn reject_writes_for(&self, id: &BookmarkId) -> Result<()> {
        self.lock()?.rejected_writes.insert(id.clone());
        Ok(())
    }

    /// Number of documents currently stored
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.documents.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Current contents, newest first
    pub fn documents(&self) -> Result<Vec<StoredDocument>> {
        Ok(self.lock()?.snapshot())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collection>> {
        self.inner
            .lock()
            .map_err(|_| Error::Store("memory store lock poisoned".to_string()))
    }
}

impl DocumentStore for MemoryStore {
    async fn subscribe(&self) -> Result<Subscription> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut collection = self.lock()?;
        sender
            .send(collection.snapshot())
            .map_err(|_| Error::SubscriptionClosed)?;
        collection.subscribers.push(sender);
        tracing::debug!(
            "Memory store subscription opened ({} active)",
            collection.subscribers.len()
        );
        Ok(Subscription::new(receiver))
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        self.documents()
    }

    async fn create(&self, bookmark: &NewBookmark) -> Result<BookmarkId> {
        let mut collection = self.lock()?;
        let id = BookmarkId::generate();
        let created_at = collection.next_timestamp();
        collection.documents.push(StoredDocument::new(
            id.clone(),
            BookmarkFields {
                url: Some(bookmark.url.clone()),
                title: Some(bookmark.title.clone()),
                folder: Some(bookmark.folder.clone()),
                tags: Some(bookmark.tags.clone()),
                tag: None,
                memo: bookmark.memo.clone(),
                is_checked: Some(false),
                created_at: Some(created_at),
            },
        ));
        collection.publish();
        Ok(id)
    }

    async fn update(&self, id: &BookmarkId, patch: &BookmarkPatch) -> Result<()> {
        let mut collection = self.lock()?;
        collection.check_writable(id)?;
        let position = collection.position(id)?;
        patch.apply_to(&mut collection.documents[position].fields);
        collection.publish();
        Ok(())
    }

    async fn delete(&self, id: &BookmarkId) -> Result<()> {
        let mut collection = self.lock()?;
        collection.check_writable(id)?;
        // Deleting a missing document succeeds, as it does remotely.
        if let Ok(position) = collection.position(id) {
            collection.documents.remove(position);
            collection.publish();
        }
        Ok(())
    }
}
