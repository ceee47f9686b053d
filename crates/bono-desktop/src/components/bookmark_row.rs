//! Bookmark row with inline edit mode

use dioxus::prelude::*;

use bono_core::models::DEFAULT_TAGS;
use bono_core::notify::Notice;
use bono_core::view::EditBuffer;
use bono_core::{Bookmark, ViewAction};

use super::{Button, ButtonVariant, TagChip};
use crate::state::AppState;
use crate::theme::palette;

async fn toggle_checked(mut state: AppState, bookmark: Bookmark) {
    let Some(service) = state.service() else {
        return;
    };
    let is_checked = !bookmark.is_checked;
    match service.set_checked(&bookmark.id, is_checked).await {
        Ok(()) => state.notify(Notice::checked_changed(is_checked)),
        Err(e) => {
            tracing::error!("Failed to update bookmark {}: {}", bookmark.id, e);
            state.notify(Notice::check_failed());
        }
    }
}

async fn delete_bookmark(mut state: AppState, bookmark: Bookmark) {
    let Some(service) = state.service() else {
        return;
    };
    match service.delete(&bookmark.id).await {
        Ok(()) => state.notify(Notice::bookmark_deleted()),
        Err(e) => {
            tracing::error!("Failed to delete bookmark {}: {}", bookmark.id, e);
            state.notify(Notice::delete_failed());
        }
    }
}

async fn save_edit(mut state: AppState, buffer: EditBuffer) {
    let Some(service) = state.service() else {
        return;
    };
    match service
        .relocate(&buffer.bookmark_id, &buffer.folder, &buffer.tags)
        .await
    {
        Ok(()) => {
            state.dispatch(ViewAction::EditSaved);
            state.notify(Notice::bookmark_updated());
        }
        Err(e) => {
            tracing::error!("Failed to save bookmark {}: {}", buffer.bookmark_id, e);
            state.notify(Notice::update_failed());
        }
    }
}

/// A single bookmark in a folder group
#[component]
pub fn BookmarkRow(bookmark: Bookmark) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = (state.view)();
    let editing = view
        .editing()
        .filter(|buffer| buffer.bookmark_id == bookmark.id)
        .cloned();

    let (check_label, check_title, title_decoration) = if bookmark.is_checked {
        ("✅", "미확인으로 표시", "line-through")
    } else {
        ("⬜", "확인으로 표시", "none")
    };

    let toggle_target = bookmark.clone();
    let delete_target = bookmark.clone();
    let edit_target = bookmark.clone();

    rsx! {
        div {
            class: "bookmark-row",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 12px;
                border-bottom: 1px solid {colors.border_light};
            ",

            div {
                style: "display: flex; gap: 10px; align-items: flex-start;",

                Button {
                    variant: ButtonVariant::Ghost,
                    title: check_title.to_string(),
                    onclick: move |_| {
                        spawn(toggle_checked(state, toggle_target.clone()));
                    },
                    "{check_label}"
                }

                div {
                    style: "flex: 1; min-width: 0;",
                    a {
                        href: "{bookmark.url}",
                        target: "_blank",
                        style: "
                            font-weight: 600;
                            color: {colors.text_primary};
                            text-decoration: {title_decoration};
                            overflow-wrap: anywhere;
                        ",
                        "{bookmark.title}"
                    }
                    div {
                        style: "
                            font-size: 12px;
                            color: {colors.text_muted};
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        "{bookmark.url}"
                    }
                    if let Some(memo) = bookmark.memo.as_ref() {
                        div {
                            style: "
                                margin-top: 4px;
                                font-size: 13px;
                                color: {colors.text_secondary};
                            ",
                            "📝 {memo}"
                        }
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 4px; margin-top: 6px;",
                        for tag in bookmark.tags.iter() {
                            TagChip { key: "{tag}", label: tag.clone() }
                        }
                    }
                }

                if editing.is_none() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            state.dispatch(ViewAction::StartEditing(edit_target.clone()));
                        },
                        "수정"
                    }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| {
                        spawn(delete_bookmark(state, delete_target.clone()));
                    },
                    "삭제"
                }
            }

            if let Some(buffer) = editing {
                EditPanel { buffer: buffer }
            }
        }
    }
}

/// Folder picker and tag toggles for the bookmark being edited
#[component]
fn EditPanel(buffer: EditBuffer) -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let folders = (state.view)().folders().to_vec();
    let save_buffer = buffer.clone();

    rsx! {
        div {
            class: "edit-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 10px;
                border-radius: 8px;
                background: {colors.accent_soft};
            ",

            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
                span { style: "font-size: 12px; color: {colors.text_secondary};", "폴더" }
                for folder in folders {
                    {
                        let is_selected = folder == buffer.folder;
                        let target = folder.clone();
                        rsx! {
                            Button {
                                key: "{folder}",
                                variant: if is_selected { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                onclick: move |_| {
                                    state.dispatch(ViewAction::SetEditingFolder(target.clone()));
                                },
                                "{folder}"
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
                span { style: "font-size: 12px; color: {colors.text_secondary};", "태그" }
                for tag in DEFAULT_TAGS {
                    TagChip {
                        key: "{tag}",
                        label: tag.to_string(),
                        is_active: buffer.tags.contains(tag),
                        onclick: move |_| {
                            state.dispatch(ViewAction::ToggleEditingTag(tag.to_string()));
                        },
                    }
                }
            }

            div {
                style: "display: flex; gap: 6px; justify-content: flex-end;",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        state.dispatch(ViewAction::CancelEditing);
                    },
                    "취소"
                }
                Button {
                    onclick: move |_| {
                        spawn(save_edit(state, save_buffer.clone()));
                    },
                    "저장"
                }
            }
        }
    }
}
