//! Colors for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Warm pastel palette
pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#fdf8f3",
    bg_tertiary: "#f5ede4",
    text_primary: "#2d2a26",
    text_secondary: "#6b645c",
    text_muted: "#a39a90",
    border: "#e6dcd1",
    border_light: "#f0e8df",
    accent: "#f59e0b",
    accent_soft: "#fef3c7",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
};

#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}
