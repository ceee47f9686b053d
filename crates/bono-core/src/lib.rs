//! bono-core - Core library for Bono
//!
//! This crate contains the bookmark models, the remote document store
//! backends, the sync layer, and the view-state reducer shared by the
//! Bono desktop shell.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod store;
pub mod sync;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
pub use sync::{BookmarkFeed, FolderDeletionReport, SyncService};
pub use view::{SortMode, ViewAction, ViewState};
