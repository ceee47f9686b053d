//! Folder deletion confirmation dialog

use dioxus::prelude::*;

use bono_core::notify::Notice;
use bono_core::view::count_in_folder;
use bono_core::ViewAction;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::palette;

/// Move or delete the folder's members, then drop the folder.
///
/// The folder label is only removed when every member was handled; after a
/// partial failure the dialog stays open so the user can retry. A second
/// request while one is running is refused.
async fn remove_folder(mut state: AppState, folder: String, destination: Option<String>) {
    let Some(service) = state.service() else {
        return;
    };
    if !state.dispatch(ViewAction::FolderDeletionStarted) {
        return;
    }
    let snapshot = state.bookmarks.read().clone();

    match service
        .delete_folder(&snapshot, &folder, destination.as_deref())
        .await
    {
        Ok(report) => {
            state.notify(Notice::folder_deleted(&report));
            if report.is_complete() {
                state.dispatch(ViewAction::FolderDeleted(folder));
            } else {
                state.dispatch(ViewAction::FolderDeletionFinished);
            }
        }
        Err(e) => {
            tracing::error!("Failed to delete folder {}: {}", folder, e);
            state.dispatch(ViewAction::FolderDeletionFinished);
            state.notify(Notice::folder_delete_failed());
        }
    }
}

/// Modal shown while a folder deletion awaits confirmation
#[component]
pub fn FolderDeleteDialog() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = (state.view)();
    let Some(folder) = view.folder_to_delete().map(ToString::to_string) else {
        return rsx! {};
    };
    let member_count = count_in_folder(&state.bookmarks.read(), &folder);
    let targets: Vec<String> = view
        .relocation_targets()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    let delete_all = folder.clone();
    let running = view.is_folder_deletion_running();

    rsx! {
        div {
            class: "dialog-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.35);
                z-index: 50;
            ",

            div {
                class: "dialog",
                style: "
                    width: 360px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 20px;
                    border-radius: 12px;
                    background: {colors.bg_primary};
                ",

                h3 { style: "margin: 0;", "'{folder}' 폴더 삭제" }
                p {
                    style: "margin: 0; color: {colors.text_secondary};",
                    "이 폴더에 {member_count}개의 북마크가 있습니다. 북마크를 어떻게 할까요?"
                }
                if running {
                    p { style: "margin: 0; color: {colors.text_muted};", "처리 중..." }
                }

                if member_count > 0 {
                    for target in targets {
                        {
                            let folder = folder.clone();
                            let destination = target.clone();
                            rsx! {
                                Button {
                                    key: "{target}",
                                    variant: ButtonVariant::Secondary,
                                    disabled: running,
                                    onclick: move |_| {
                                        spawn(remove_folder(state, folder.clone(), Some(destination.clone())));
                                    },
                                    "'{target}' 폴더로 이동"
                                }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: running,
                    onclick: move |_| {
                        spawn(remove_folder(state, delete_all.clone(), None));
                    },
                    if member_count > 0 { "폴더와 북마크 모두 삭제" } else { "폴더 삭제" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: running,
                    onclick: move |_| {
                        state.dispatch(ViewAction::CancelFolderDeletion);
                    },
                    "취소"
                }
            }
        }
    }
}
