//! Application services
//!
//! Store connection and system clipboard access.

mod backend;
mod clipboard;

pub use backend::{connect, BookmarkService};
pub use clipboard::{read_url, ClipboardError};
