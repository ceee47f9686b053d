//! Sync layer between the document store and the local bookmark list.
//!
//! The local list is never edited directly. Every write goes to the store and
//! becomes visible only when the snapshot reflecting it arrives through the
//! [`BookmarkFeed`].

use std::sync::Arc;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark, TagSet};
use crate::store::{DocumentStore, Subscription};

/// Bookmark operations against a document store
#[derive(Debug)]
pub struct SyncService<S> {
    store: Arc<S>,
}

impl<S> Clone for SyncService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> PartialEq for SyncService<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

/// Live, ordered bookmark snapshots
#[derive(Debug)]
pub struct BookmarkFeed {
    subscription: Subscription,
}

impl BookmarkFeed {
    /// Wait for the next complete snapshot, newest first.
    ///
    /// Returns [`Error::SubscriptionClosed`] once the store stops producing.
    pub async fn next(&mut self) -> Result<Vec<Bookmark>> {
        let documents = self
            .subscription
            .next()
            .await
            .ok_or(Error::SubscriptionClosed)?;
        let read_at = Utc::now();
        Ok(documents
            .into_iter()
            .map(|document| Bookmark::from_document(document, read_at))
            .collect())
    }
}

/// Outcome of deleting a folder, one entry per member bookmark
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderDeletionReport {
    pub folder: String,
    /// Folder the members were moved to; `None` when they were deleted
    pub destination: Option<String>,
    pub succeeded: Vec<BookmarkId>,
    pub failed: Vec<(BookmarkId, String)>,
}

impl FolderDeletionReport {
    /// Every member was moved or deleted
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of member bookmarks the operation touched
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

impl<S: DocumentStore> SyncService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open the live bookmark query
    pub async fn subscribe(&self) -> Result<BookmarkFeed> {
        let subscription = self.store.subscribe().await?;
        Ok(BookmarkFeed { subscription })
    }

    /// Validate form input and write a new bookmark
    pub async fn create(
        &self,
        raw_url: &str,
        folder: &str,
        tags: &TagSet,
        memo: &str,
    ) -> Result<BookmarkId> {
        let bookmark = NewBookmark::from_input(raw_url, folder, tags, memo)?;
        let id = self.store.create(&bookmark).await?;
        tracing::info!("Added bookmark {} to folder {}", id, bookmark.folder);
        Ok(id)
    }

    /// Overwrite folder and tags of one bookmark
    pub async fn relocate(&self, id: &BookmarkId, folder: &str, tags: &TagSet) -> Result<()> {
        let patch = BookmarkPatch::relocate(folder, tags.as_slice().to_vec());
        self.store.update(id, &patch).await
    }

    /// Write the reviewed flag of one bookmark
    pub async fn set_checked(&self, id: &BookmarkId, is_checked: bool) -> Result<()> {
        self.store.update(id, &BookmarkPatch::checked(is_checked)).await
    }

    pub async fn delete(&self, id: &BookmarkId) -> Result<()> {
        self.store.delete(id).await
    }

    /// Move or delete every bookmark in `folder`.
    ///
    /// Members are read from the store at call time, so bookmarks created
    /// after `bookmarks` was synced are included. `bookmarks` is used only
    /// when that read fails. Each member is written with its own request; a
    /// failed request does not stop the remaining ones and nothing is rolled
    /// back.
    pub async fn delete_folder(
        &self,
        bookmarks: &[Bookmark],
        folder: &str,
        destination: Option<&str>,
    ) -> Result<FolderDeletionReport> {
        if destination == Some(folder) {
            return Err(Error::InvalidInput(format!(
                "cannot move bookmarks of `{folder}` into itself"
            )));
        }

        let mut report = FolderDeletionReport {
            folder: folder.to_string(),
            destination: destination.map(ToString::to_string),
            ..FolderDeletionReport::default()
        };

        for id in self.folder_members(bookmarks, folder).await {
            let outcome = match destination {
                Some(target) => {
                    self.store
                        .update(&id, &BookmarkPatch::move_to(target))
                        .await
                }
                None => self.store.delete(&id).await,
            };
            match outcome {
                Ok(()) => report.succeeded.push(id),
                Err(error) => {
                    tracing::error!(
                        "Folder {}: failed to {} bookmark {}: {}",
                        folder,
                        if destination.is_some() { "move" } else { "delete" },
                        id,
                        error
                    );
                    report.failed.push((id, error.to_string()));
                }
            }
        }

        tracing::info!(
            "Folder {} deletion finished: {}/{} bookmarks handled",
            folder,
            report.succeeded.len(),
            report.total()
        );
        Ok(report)
    }

    async fn folder_members(&self, bookmarks: &[Bookmark], folder: &str) -> Vec<BookmarkId> {
        match self.store.list().await {
            Ok(documents) => documents
                .into_iter()
                .filter(|document| document.fields.folder.as_deref().unwrap_or_default() == folder)
                .map(|document| document.id)
                .collect(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read folder {} from the store, using the synced list: {}",
                    folder,
                    e
                );
                bookmarks
                    .iter()
                    .filter(|bookmark| bookmark.folder == folder)
                    .map(|bookmark| bookmark.id.clone())
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{BookmarkFields, StoredDocument};
    use crate::store::MemoryStore;
    use crate::view::{SortMode, ViewAction, ViewState};

    async fn service_with_feed() -> (SyncService<MemoryStore>, BookmarkFeed) {
        let service = SyncService::new(MemoryStore::new());
        let mut feed = service.subscribe().await.unwrap();
        assert!(feed.next().await.unwrap().is_empty());
        (service, feed)
    }

    fn tags(values: &[&str]) -> TagSet {
        values.iter().copied().collect()
    }

    #[tokio::test]
    async fn create_scenario_lands_on_top_of_folder() {
        let (service, mut feed) = service_with_feed().await;
        service
            .create("https://older.example", "기타", &tags(&["메모"]), "")
            .await
            .unwrap();
        feed.next().await.unwrap();

        let id = service
            .create("https://example.com/page", "기타", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        let bookmarks = feed.next().await.unwrap();

        let created = bookmarks.iter().find(|bookmark| bookmark.id == id).unwrap();
        assert_eq!(created.title, "example.com/page");
        assert_eq!(created.tags, vec!["뉴스".to_string()]);
        assert!(!created.is_checked);
        assert_eq!(created.memo, None);

        let view = ViewState::new();
        assert_eq!(view.sort_mode(), SortMode::Newest);
        let visible = crate::view::folder_bookmarks(&bookmarks, "기타", &view);
        assert_eq!(visible[0].id, id);
    }

    #[tokio::test]
    async fn create_rejects_blank_url_without_store_call() {
        let (service, _feed) = service_with_feed().await;
        let result = service.create("  ", "기타", &TagSet::new(), "").await;
        assert!(matches!(result, Err(Error::EmptyUrl)));
        assert!(service.store().is_empty().unwrap());
    }

    #[tokio::test]
    async fn relocate_and_toggle_write_partial_fields() {
        let (service, mut feed) = service_with_feed().await;
        let id = service
            .create("https://example.com", "업무", &tags(&["뉴스"]), "메모 유지")
            .await
            .unwrap();
        feed.next().await.unwrap();

        service
            .relocate(&id, "기타", &tags(&["메모", "유튜브"]))
            .await
            .unwrap();
        let bookmark = feed.next().await.unwrap().remove(0);
        assert_eq!(bookmark.folder, "기타");
        assert_eq!(bookmark.tags, vec!["메모".to_string(), "유튜브".to_string()]);
        assert_eq!(bookmark.memo.as_deref(), Some("메모 유지"));

        service.set_checked(&id, true).await.unwrap();
        let bookmark = feed.next().await.unwrap().remove(0);
        assert!(bookmark.is_checked);
        assert_eq!(bookmark.folder, "기타");
    }

    #[tokio::test]
    async fn legacy_tag_documents_are_upconverted() {
        let (service, mut feed) = service_with_feed().await;
        service
            .store()
            .insert_document(StoredDocument::new(
                BookmarkId::new("legacy"),
                BookmarkFields {
                    url: Some("https://example.com".to_string()),
                    folder: Some("기타".to_string()),
                    tag: Some("메모".to_string()),
                    ..BookmarkFields::default()
                },
            ))
            .unwrap();

        let bookmarks = feed.next().await.unwrap();
        assert_eq!(bookmarks[0].tags, vec!["메모".to_string()]);
        assert_eq!(bookmarks[0].title, "https://example.com");
    }

    #[tokio::test]
    async fn delete_folder_moves_members() {
        let (service, mut feed) = service_with_feed().await;
        let mut view = ViewState::new();
        view.apply(ViewAction::SetNewFolderName("Test".to_string()))
            .unwrap();
        view.apply(ViewAction::AddFolder).unwrap();
        assert_eq!(view.selected_folder(), "Test");

        let id = service
            .create("https://example.com", view.selected_folder(), view.selected_tags(), "")
            .await
            .unwrap();
        let bookmarks = feed.next().await.unwrap();

        view.apply(ViewAction::RequestFolderDeletion("Test".to_string()))
            .unwrap();
        let report = service
            .delete_folder(&bookmarks, "Test", Some("기타"))
            .await
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(report.succeeded, vec![id]);
        view.apply(ViewAction::FolderDeleted("Test".to_string()))
            .unwrap();

        let bookmarks = feed.next().await.unwrap();
        assert_eq!(bookmarks[0].folder, "기타");
        assert!(!view.folders().contains(&"Test".to_string()));
        assert!(bookmarks
            .iter()
            .all(|bookmark| view.folders().contains(&bookmark.folder)));
    }

    #[tokio::test]
    async fn delete_folder_without_destination_deletes_members() {
        let (service, mut feed) = service_with_feed().await;
        service
            .create("https://a.example", "KBS", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        service
            .create("https://b.example", "KBS", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        let keep = service
            .create("https://c.example", "업무", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        feed.next().await.unwrap();
        feed.next().await.unwrap();
        let bookmarks = feed.next().await.unwrap();

        let report = service.delete_folder(&bookmarks, "KBS", None).await.unwrap();
        assert_eq!(report.total(), 2);
        assert!(report.is_complete());

        let remaining = service.store().documents().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
    }

    #[tokio::test]
    async fn delete_folder_reports_partial_failure() {
        let (service, mut feed) = service_with_feed().await;
        let first = service
            .create("https://a.example", "KBS", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        let second = service
            .create("https://b.example", "KBS", &tags(&["뉴스"]), "")
            .await
            .unwrap();
        feed.next().await.unwrap();
        let bookmarks = feed.next().await.unwrap();
        service.store().reject_writes_for(&second).unwrap();

        let report = service
            .delete_folder(&bookmarks, "KBS", Some("기타"))
            .await
            .unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.succeeded, vec![first]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, second);
    }

    #[tokio::test]
    async fn delete_folder_includes_bookmarks_not_yet_synced() {
        let (service, _feed) = service_with_feed().await;
        let synced: Vec<Bookmark> = Vec::new();
        let late = service
            .create("https://late.example", "Test", &tags(&["뉴스"]), "")
            .await
            .unwrap();

        let report = service
            .delete_folder(&synced, "Test", Some("기타"))
            .await
            .unwrap();
        assert_eq!(report.succeeded, vec![late]);
        assert!(report.is_complete());

        let documents = service.store().documents().unwrap();
        assert!(documents
            .iter()
            .all(|document| document.fields.folder.as_deref() != Some("Test")));
    }

    #[tokio::test]
    async fn delete_folder_rejects_self_destination() {
        let (service, _feed) = service_with_feed().await;
        let result = service.delete_folder(&[], "KBS", Some("KBS")).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn subscriptions_are_independent() {
        let service = SyncService::new(MemoryStore::new());
        let feed = service.subscribe().await.unwrap();
        drop(feed);
        let mut other = service.subscribe().await.unwrap();
        assert!(other.next().await.unwrap().is_empty());
        assert_eq!(service.clone(), service);
    }
}
