//! Remote document store abstraction
//!
//! The application needs a live query over the bookmark collection ordered by
//! creation time (newest first), the same query read once, and create,
//! partial update and delete of single documents.

mod firestore;
mod memory;

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::{StoreConfig, StoreKind};
use crate::error::Result;
use crate::models::{BookmarkId, BookmarkPatch, NewBookmark, StoredDocument};

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

/// Storage operations for bookmark documents
pub trait DocumentStore {
    /// Open a live query over the whole collection.
    ///
    /// The first snapshot is delivered as soon as the query is established;
    /// another complete snapshot follows every change.
    fn subscribe(&self) -> impl Future<Output = Result<Subscription>> + Send;

    /// Read the collection once, newest first
    fn list(&self) -> impl Future<Output = Result<Vec<StoredDocument>>> + Send;

    /// Write a new document; the store assigns the creation timestamp
    fn create(&self, bookmark: &NewBookmark) -> impl Future<Output = Result<BookmarkId>> + Send;

    /// Overwrite the fields present in `patch`, leaving the rest untouched
    fn update(
        &self,
        id: &BookmarkId,
        patch: &BookmarkPatch,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Remove a document
    fn delete(&self, id: &BookmarkId) -> impl Future<Output = Result<()>> + Send;
}

/// Receiving end of a live query.
///
/// Dropping the subscription releases it: the producer notices the closed
/// channel, and a background producer task is aborted.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<Vec<StoredDocument>>,
    _producer: Option<AbortOnDrop>,
}

impl Subscription {
    /// Subscription fed directly by the store
    pub const fn new(receiver: mpsc::UnboundedReceiver<Vec<StoredDocument>>) -> Self {
        Self {
            receiver,
            _producer: None,
        }
    }

    /// Subscription fed by a background task that lives as long as it does
    pub fn with_producer(
        receiver: mpsc::UnboundedReceiver<Vec<StoredDocument>>,
        producer: JoinHandle<()>,
    ) -> Self {
        Self {
            receiver,
            _producer: Some(AbortOnDrop(producer)),
        }
    }

    /// Wait for the next snapshot; `None` once the store stops producing
    pub async fn next(&mut self) -> Option<Vec<StoredDocument>> {
        self.receiver.recv().await
    }

    /// Take a snapshot that is already waiting, if any
    pub fn try_next(&mut self) -> Option<Vec<StoredDocument>> {
        self.receiver.try_recv().ok()
    }
}

#[derive(Debug)]
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Store chosen at runtime from [`StoreConfig`]
#[derive(Debug, Clone)]
pub enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

impl Backend {
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        match config.kind {
            StoreKind::Firestore => Ok(Self::Firestore(FirestoreStore::new(config)?)),
            StoreKind::Memory => Ok(Self::Memory(MemoryStore::new())),
        }
    }

    /// Short label for logs and the status line
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Firestore(_) => "firestore",
            Self::Memory(_) => "memory",
        }
    }
}

impl DocumentStore for Backend {
    async fn subscribe(&self) -> Result<Subscription> {
        match self {
            Self::Firestore(store) => store.subscribe().await,
            Self::Memory(store) => store.subscribe().await,
        }
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        match self {
            Self::Firestore(store) => store.list().await,
            Self::Memory(store) => store.list().await,
        }
    }

    async fn create(&self, bookmark: &NewBookmark) -> Result<BookmarkId> {
        match self {
            Self::Firestore(store) => store.create(bookmark).await,
            Self::Memory(store) => store.create(bookmark).await,
        }
    }

    async fn update(&self, id: &BookmarkId, patch: &BookmarkPatch) -> Result<()> {
        match self {
            Self::Firestore(store) => store.update(id, patch).await,
            Self::Memory(store) => store.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &BookmarkId) -> Result<()> {
        match self {
            Self::Firestore(store) => store.delete(id).await,
            Self::Memory(store) => store.delete(id).await,
        }
    }
}
