//! Main application component

use dioxus::prelude::*;

use bono_core::notify::Notice;
use bono_core::ViewState;

use crate::services;
use crate::state::{AppState, ToastQueue};
use crate::theme::palette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut bookmarks = use_signal(Vec::new);
    let mut loaded = use_signal(|| false);
    let view = use_signal(ViewState::new);
    let mut service = use_signal(|| None);
    let toasts = use_signal(ToastQueue::default);

    let mut state = use_context_provider(|| {
        AppState::new(bookmarks, loaded, view, service, toasts)
    });

    // Connect once and apply every snapshot the live query delivers
    use_future(move || async move {
        let connected = services::connect();
        service.set(Some(connected.clone()));

        let mut feed = match connected.subscribe().await {
            Ok(feed) => feed,
            Err(e) => {
                tracing::error!("Failed to subscribe to bookmarks: {}", e);
                state.notify(Notice::sync_failed());
                return;
            }
        };

        loop {
            match feed.next().await {
                Ok(snapshot) => {
                    tracing::debug!("Received snapshot with {} bookmarks", snapshot.len());
                    bookmarks.set(snapshot);
                    loaded.set(true);
                }
                Err(e) => {
                    tracing::error!("Bookmark subscription ended: {}", e);
                    state.notify(Notice::sync_failed());
                    break;
                }
            }
        }
    });

    let colors = palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: 'Pretendard', 'Apple SD Gothic Neo', system-ui, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
