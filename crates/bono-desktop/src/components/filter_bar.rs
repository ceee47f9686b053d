//! Tag filter and sort controls

use dioxus::prelude::*;

use bono_core::models::DEFAULT_TAGS;
use bono_core::{SortMode, ViewAction};

use super::{Button, ButtonVariant, TagChip};
use crate::state::AppState;
use crate::theme::palette;

/// Filter chips and sort buttons shown above the folder groups
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = (state.view)();
    let has_filter = !view.filter_tags().is_empty();

    rsx! {
        div {
            class: "filter-bar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 12px 16px;
                border: 1px solid {colors.border_light};
                border-radius: 12px;
                background: {colors.bg_primary};
            ",

            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center;",
                span { style: "color: {colors.text_secondary}; font-size: 12px;", "필터" }
                for tag in DEFAULT_TAGS {
                    TagChip {
                        key: "{tag}",
                        label: tag.to_string(),
                        is_active: view.filter_tags().contains(tag),
                        onclick: move |_| {
                            state.dispatch(ViewAction::ToggleFilterTag(tag.to_string()));
                        },
                    }
                }
                if has_filter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            state.dispatch(ViewAction::ClearFilterTags);
                        },
                        "필터 해제"
                    }
                }
            }

            div {
                style: "display: flex; gap: 6px; align-items: center;",
                span { style: "color: {colors.text_secondary}; font-size: 12px;", "정렬" }
                for mode in SortMode::ALL {
                    Button {
                        key: "{mode.label()}",
                        variant: if view.sort_mode() == mode { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        onclick: move |_| {
                            state.dispatch(ViewAction::SetSortMode(mode));
                        },
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
