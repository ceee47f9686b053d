//! Toast notifications

use dioxus::prelude::*;

use crate::state::{AppState, Toast};
use crate::theme::palette;

/// Transient notices stacked in the bottom-right corner
#[component]
pub fn ToastStack() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let toasts: Vec<Toast> = state.toasts.read().iter().cloned().collect();

    rsx! {
        div {
            class: "toast-stack",
            style: "
                position: fixed;
                right: 16px;
                bottom: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 100;
            ",

            for toast in toasts {
                {
                    let id = toast.id;
                    let accent = if toast.notice.is_error() { colors.error } else { colors.success };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast",
                            style: "
                                min-width: 220px;
                                padding: 10px 14px;
                                border-left: 4px solid {accent};
                                border-radius: 8px;
                                background: {colors.bg_primary};
                                color: {colors.text_primary};
                                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
                                cursor: pointer;
                            ",
                            onclick: move |_| state.dismiss(id),
                            "{toast.notice.message}"
                        }
                    }
                }
            }
        }
    }
}
