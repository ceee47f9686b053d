//! Folder group component

use dioxus::prelude::*;

use bono_core::{Bookmark, ViewAction};

use super::{BookmarkRow, Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::palette;

/// Header and visible bookmarks of one folder
#[component]
pub fn FolderSection(folder: String, bookmarks: Vec<Bookmark>) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let count = bookmarks.len();
    let target = folder.clone();

    rsx! {
        section {
            class: "folder-section",
            style: "
                border: 1px solid {colors.border};
                border-radius: 12px;
                background: {colors.bg_primary};
                overflow: hidden;
            ",

            header {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    padding: 10px 12px;
                    background: {colors.bg_tertiary};
                ",
                h2 {
                    style: "margin: 0; font-size: 15px; font-weight: 600;",
                    "📁 {folder}"
                }
                span {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{count}개"
                }
                div { style: "flex: 1;" }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "폴더 삭제".to_string(),
                    onclick: move |_| {
                        state.dispatch(ViewAction::RequestFolderDeletion(target.clone()));
                    },
                    "🗑"
                }
            }

            for bookmark in bookmarks {
                BookmarkRow { key: "{bookmark.id}", bookmark: bookmark }
            }
        }
    }
}
