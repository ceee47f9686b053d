//! Home view - main application screen

use dioxus::prelude::*;

use bono_core::view::group_by_folder;

use crate::components::{CapturePanel, FilterBar, FolderDeleteDialog, FolderSection, ToastStack};
use crate::state::AppState;
use crate::theme::palette;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let bookmarks = (state.bookmarks)();
    let view = (state.view)();
    let loaded = (state.loaded)();

    let groups = group_by_folder(&bookmarks, &view);
    let total = bookmarks.len();
    let folder_count = view.folders().len();
    let checked = bookmarks.iter().filter(|bookmark| bookmark.is_checked).count();

    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 880px;
                margin: 0 auto;
                padding: 24px 16px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            header {
                h1 {
                    style: "margin: 0; font-size: 24px;",
                    "보노보노 언제보노"
                }
                p {
                    style: "margin: 4px 0 0; color: {colors.text_secondary};",
                    "링크를 붙여넣고, 폴더와 태그로 정리하고, 읽으면 체크하세요."
                }
            }

            CapturePanel {}

            if !loaded {
                div {
                    style: "padding: 24px; text-align: center; color: {colors.text_muted};",
                    "북마크를 불러오는 중..."
                }
            } else if bookmarks.is_empty() {
                div {
                    class: "empty-state",
                    style: "padding: 48px; text-align: center; color: {colors.text_muted};",
                    "아직 저장된 북마크가 없습니다. 첫 링크를 붙여넣어 보세요!"
                }
            } else {
                FilterBar {}

                for group in groups {
                    FolderSection {
                        key: "{group.folder}",
                        folder: group.folder.to_string(),
                        bookmarks: group.bookmarks.into_iter().cloned().collect::<Vec<_>>(),
                    }
                }
            }

            footer {
                style: "
                    padding: 12px 0;
                    text-align: center;
                    font-size: 12px;
                    color: {colors.text_muted};
                ",
                "북마크 {total}개 · 확인 {checked}개 · 폴더 {folder_count}개"
            }
        }

        FolderDeleteDialog {}
        ToastStack {}
    }
}
