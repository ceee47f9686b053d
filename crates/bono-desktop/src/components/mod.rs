//! UI Components
//!
//! Reusable UI components for the desktop application.

mod bookmark_row;
mod button;
mod capture_panel;
mod filter_bar;
mod folder_delete_dialog;
mod folder_section;
mod tag_chip;
mod toast;

pub use bookmark_row::BookmarkRow;
pub use button::{Button, ButtonVariant};
pub use capture_panel::CapturePanel;
pub use filter_bar::FilterBar;
pub use folder_delete_dialog::FolderDeleteDialog;
pub use folder_section::FolderSection;
pub use tag_chip::TagChip;
pub use toast::ToastStack;
