//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::time::Duration;

use dioxus::prelude::*;

use bono_core::notify::Notice;
use bono_core::{Bookmark, ViewAction, ViewState};

use crate::services::BookmarkService;

/// How long a toast stays on screen
const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toasts on screen, oldest first, with ids that are never reused
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Add a toast and return the id its removal is keyed on
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Remove one toast; unknown or already removed ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Latest snapshot from the live query, newest first
    pub bookmarks: Signal<Vec<Bookmark>>,
    /// Whether the first snapshot has arrived
    pub loaded: Signal<bool>,
    /// Session-local selections, filters and dialogs
    pub view: Signal<ViewState>,
    /// Store connection, set once the app has connected
    pub service: Signal<Option<BookmarkService>>,
    /// Toasts on screen
    pub toasts: Signal<ToastQueue>,
}

impl AppState {
    pub fn new(
        bookmarks: Signal<Vec<Bookmark>>,
        loaded: Signal<bool>,
        view: Signal<ViewState>,
        service: Signal<Option<BookmarkService>>,
        toasts: Signal<ToastQueue>,
    ) -> Self {
        Self {
            bookmarks,
            loaded,
            view,
            service,
            toasts,
        }
    }

    /// Connected service, if any
    #[must_use]
    pub fn service(&self) -> Option<BookmarkService> {
        self.service.read().clone()
    }

    /// Apply a view transition, turning a rejection into an error toast
    pub fn dispatch(&mut self, action: ViewAction) -> bool {
        let result = self.view.write().apply(action);
        match result {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!("View action rejected: {}", error);
                self.notify(Notice::from_validation(&error));
                false
            }
        }
    }

    /// Show a toast and schedule its removal
    pub fn notify(&mut self, notice: Notice) {
        let id = self.toasts.write().push(notice);

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            toasts.write().dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toasts_keep_arrival_order() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::folder_added());
        let second = queue.push(Notice::add_failed());
        assert_ne!(first, second);

        let messages: Vec<_> = queue.iter().map(|toast| toast.notice.message.as_str()).collect();
        assert_eq!(messages, ["새 폴더가 추가되었습니다!", "북마크 추가에 실패했습니다"]);
    }

    #[test]
    fn dismissing_one_toast_keeps_the_others() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::pasted());
        let second = queue.push(Notice::paste_failed());

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|toast| toast.id), Some(second));

        // The expiry timer of a toast closed by hand still fires later.
        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        queue.dismiss(second);
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::pasted());
        queue.dismiss(first);
        let next = queue.push(Notice::pasted());
        assert_ne!(first, next);

        // A stale expiry for the first toast must not remove the new one.
        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }
}
