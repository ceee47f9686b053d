//! Bookmark capture panel: URL, memo, tags and target folder

use dioxus::prelude::*;

use bono_core::models::DEFAULT_TAGS;
use bono_core::notify::Notice;
use bono_core::ViewAction;

use super::{Button, ButtonVariant, TagChip};
use crate::services::read_url;
use crate::state::AppState;
use crate::theme::palette;

/// Write the bookmark described by the capture inputs
async fn add_bookmark(mut state: AppState) {
    let Some(service) = state.service() else {
        tracing::warn!("Add requested before the store connected");
        return;
    };
    let (url, folder, tags, memo) = {
        let view = state.view.read();
        (
            view.url_input().to_string(),
            view.selected_folder().to_string(),
            view.selected_tags().clone(),
            view.memo_input().to_string(),
        )
    };

    match service.create(&url, &folder, &tags, &memo).await {
        Ok(_) => {
            state.dispatch(ViewAction::BookmarkCreated);
            state.notify(Notice::bookmark_added(&folder));
        }
        Err(e) if e.is_validation() => state.notify(Notice::from_validation(&e)),
        Err(e) => {
            tracing::error!("Failed to add bookmark: {}", e);
            state.notify(Notice::add_failed());
        }
    }
}

fn add_folder(mut state: AppState) {
    if state.dispatch(ViewAction::AddFolder) {
        state.notify(Notice::folder_added());
    }
}

/// Input card at the top of the page
#[component]
pub fn CapturePanel() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = (state.view)();

    let paste = move |_| match read_url() {
        Ok(url) => {
            state.dispatch(ViewAction::SetUrlInput(url));
            state.notify(Notice::pasted());
        }
        Err(e) => {
            tracing::warn!("Clipboard read failed: {}", e);
            state.notify(Notice::paste_failed());
        }
    };

    let submit_on_enter = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            spawn(add_bookmark(state));
        }
    };

    let input_style = format!(
        "flex: 1; padding: 8px 12px; border: 1px solid {}; border-radius: 8px; font-size: 14px; background: {}; color: {}; outline: none;",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        section {
            class: "capture-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                border: 1px solid {colors.border};
                border-radius: 12px;
                background: {colors.bg_primary};
            ",

            div {
                style: "display: flex; gap: 8px;",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: paste,
                    "📋 붙여넣기"
                }
                input {
                    r#type: "text",
                    placeholder: "URL을 붙여넣거나 입력하세요",
                    value: "{view.url_input()}",
                    style: "{input_style}",
                    oninput: move |evt| {
                        state.dispatch(ViewAction::SetUrlInput(evt.value()));
                    },
                    onkeydown: submit_on_enter,
                }
                Button {
                    onclick: move |_| {
                        spawn(add_bookmark(state));
                    },
                    "추가"
                }
            }

            input {
                r#type: "text",
                placeholder: "메모 (선택)",
                value: "{view.memo_input()}",
                style: "{input_style}",
                oninput: move |evt| {
                    state.dispatch(ViewAction::SetMemoInput(evt.value()));
                },
                onkeydown: submit_on_enter,
            }

            div {
                class: "tag-selector",
                style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
                span { style: "color: {colors.text_secondary}; font-size: 12px;", "태그" }
                for tag in DEFAULT_TAGS {
                    TagChip {
                        key: "{tag}",
                        label: tag.to_string(),
                        is_active: view.selected_tags().contains(tag),
                        onclick: move |_| {
                            state.dispatch(ViewAction::ToggleTag(tag.to_string()));
                        },
                    }
                }
            }

            FolderSelector {}
        }
    }
}

/// Folder chooser with the new-folder input
#[component]
fn FolderSelector() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = (state.view)();

    rsx! {
        div {
            class: "folder-selector",
            style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
            span { style: "color: {colors.text_secondary}; font-size: 12px;", "폴더" }

            for folder in view.folders().iter().cloned() {
                {
                    let is_selected = folder == view.selected_folder();
                    let target = folder.clone();
                    rsx! {
                        Button {
                            key: "{folder}",
                            variant: if is_selected { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                            onclick: move |_| {
                                state.dispatch(ViewAction::SelectFolder(target.clone()));
                            },
                            "📁 {folder}"
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    state.dispatch(ViewAction::ToggleNewFolderInput);
                },
                "+ 새 폴더"
            }

            if view.is_new_folder_input_open() {
                input {
                    r#type: "text",
                    placeholder: "새 폴더 이름",
                    value: "{view.new_folder_name()}",
                    style: "
                        padding: 6px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        font-size: 13px;
                    ",
                    oninput: move |evt| {
                        state.dispatch(ViewAction::SetNewFolderName(evt.value()));
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            add_folder(state);
                        }
                    },
                }
                Button {
                    onclick: move |_| add_folder(state),
                    "만들기"
                }
            }
        }
    }
}
