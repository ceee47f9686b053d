//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Truncate text to at most 180 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Toggle `item` in an insertion-ordered set.
///
/// Removes the item when present, appends it otherwise.
pub fn toggle_in(items: &mut Vec<String>, item: &str) {
    if let Some(position) = items.iter().position(|existing| existing == item) {
        items.remove(position);
    } else {
        items.push(item.to_string());
    }
}
