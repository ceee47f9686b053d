//! Button component

use dioxus::prelude::*;

use crate::theme::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

/// Styled button
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] title: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let colors = palette();
    let (cursor, opacity) = if disabled { ("not-allowed", "0.5") } else { ("pointer", "1") };
    let (background, color, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => (colors.bg_primary, colors.text_primary, colors.border),
        ButtonVariant::Ghost => ("transparent", colors.text_secondary, "transparent"),
        ButtonVariant::Destructive => (colors.error, colors.accent_text, colors.error),
    };

    rsx! {
        button {
            r#type: "button",
            title: "{title}",
            disabled: disabled,
            style: "
                padding: 6px 12px;
                border-radius: 8px;
                border: 1px solid {border};
                background: {background};
                color: {color};
                font-size: 13px;
                cursor: {cursor};
                opacity: {opacity};
                white-space: nowrap;
            ",
            onclick: move |evt| {
                if !disabled {
                    onclick.call(evt);
                }
            },
            {children}
        }
    }
}
