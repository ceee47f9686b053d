//! Tag chip component

use dioxus::prelude::*;

use crate::theme::palette;

/// A tag label, optionally clickable as a toggle
#[component]
pub fn TagChip(
    label: String,
    #[props(default)] is_active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let colors = palette();
    let (background, color) = if is_active {
        (colors.accent, colors.accent_text)
    } else {
        (colors.bg_tertiary, colors.text_secondary)
    };
    let cursor = if onclick.is_some() { "pointer" } else { "default" };

    rsx! {
        span {
            class: if is_active { "tag-chip active" } else { "tag-chip" },
            style: "
                display: inline-block;
                padding: 2px 10px;
                border-radius: 999px;
                font-size: 12px;
                background: {background};
                color: {color};
                cursor: {cursor};
                user-select: none;
            ",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "#{label}"
        }
    }
}
