//! View-state controller
//!
//! All session-local UI state lives in one [`ViewState`] value. It changes
//! only through [`ViewState::apply`], which keeps every transition in one
//! place and lets the derived bookmark list be computed as a pure function of
//! the synced list plus this state.

mod collation;
mod derive;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{default_folders, Bookmark, BookmarkId, TagSet};

pub use collation::compare_korean;
pub use derive::{count_in_folder, folder_bookmarks, group_by_folder, sort_bookmarks, FolderGroup};

/// Ordering of bookmarks inside a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently created first
    #[default]
    Newest,
    /// Least recently created first
    Oldest,
    /// By memo text, Korean collation, bookmarks without memo first
    Alphabetical,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Alphabetical];

    /// Button label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "최신순",
            Self::Oldest => "오래된순",
            Self::Alphabetical => "가나다순",
        }
    }
}

/// In-progress edit of one bookmark's folder and tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub bookmark_id: BookmarkId,
    pub folder: String,
    pub tags: TagSet,
}

/// A transition of [`ViewState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetUrlInput(String),
    SetMemoInput(String),
    /// Choose the folder new bookmarks go into
    SelectFolder(String),
    /// Toggle a tag in the creation selection
    ToggleTag(String),
    ToggleFilterTag(String),
    ClearFilterTags,
    SetSortMode(SortMode),
    ToggleNewFolderInput,
    SetNewFolderName(String),
    /// Add the folder named in the new-folder input
    AddFolder,
    /// A bookmark was written; reset the creation form
    BookmarkCreated,
    /// Enter edit mode for a bookmark, replacing any other edit
    StartEditing(Bookmark),
    SetEditingFolder(String),
    ToggleEditingTag(String),
    /// The edit was written; leave edit mode
    EditSaved,
    CancelEditing,
    /// Ask for confirmation before deleting a folder
    RequestFolderDeletion(String),
    CancelFolderDeletion,
    /// The confirmed deletion's requests are being sent
    FolderDeletionStarted,
    /// The requests finished without removing the folder
    FolderDeletionFinished,
    /// The folder's members were handled; drop the label
    FolderDeleted(String),
}

/// Session-local UI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    folders: Vec<String>,
    selected_folder: String,
    selected_tags: TagSet,
    filter_tags: TagSet,
    sort_mode: SortMode,
    url_input: String,
    memo_input: String,
    new_folder_name: String,
    new_folder_input_open: bool,
    editing: Option<EditBuffer>,
    folder_to_delete: Option<String>,
    folder_deletion_running: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// State of a fresh session: default folders, first folder selected
    #[must_use]
    pub fn new() -> Self {
        let folders = default_folders();
        let selected_folder = folders.first().cloned().unwrap_or_default();
        Self {
            folders,
            selected_folder,
            selected_tags: TagSet::with_default_tag(),
            filter_tags: TagSet::new(),
            sort_mode: SortMode::default(),
            url_input: String::new(),
            memo_input: String::new(),
            new_folder_name: String::new(),
            new_folder_input_open: false,
            editing: None,
            folder_to_delete: None,
            folder_deletion_running: false,
        }
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub fn has_folder(&self, folder: &str) -> bool {
        self.folders.iter().any(|existing| existing == folder)
    }

    pub fn selected_folder(&self) -> &str {
        &self.selected_folder
    }

    pub const fn selected_tags(&self) -> &TagSet {
        &self.selected_tags
    }

    pub const fn filter_tags(&self) -> &TagSet {
        &self.filter_tags
    }

    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn memo_input(&self) -> &str {
        &self.memo_input
    }

    pub fn new_folder_name(&self) -> &str {
        &self.new_folder_name
    }

    pub const fn is_new_folder_input_open(&self) -> bool {
        self.new_folder_input_open
    }

    pub const fn editing(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &BookmarkId) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|buffer| &buffer.bookmark_id == id)
    }

    pub fn folder_to_delete(&self) -> Option<&str> {
        self.folder_to_delete.as_deref()
    }

    /// Whether the pending deletion's requests are in flight
    pub const fn is_folder_deletion_running(&self) -> bool {
        self.folder_deletion_running
    }

    /// Folders the pending deletion could move its bookmarks into
    pub fn relocation_targets(&self) -> Vec<&str> {
        self.folders
            .iter()
            .map(String::as_str)
            .filter(|folder| Some(*folder) != self.folder_to_delete.as_deref())
            .collect()
    }

    /// Apply one transition.
    ///
    /// Rejected actions return a validation error and leave the state as it
    /// was.
    pub fn apply(&mut self, action: ViewAction) -> Result<()> {
        match action {
            ViewAction::SetUrlInput(value) => self.url_input = value,
            ViewAction::SetMemoInput(value) => self.memo_input = value,
            ViewAction::SelectFolder(folder) => {
                self.ensure_folder(&folder)?;
                self.selected_folder = folder;
            }
            ViewAction::ToggleTag(tag) => self.selected_tags.toggle(&tag),
            ViewAction::ToggleFilterTag(tag) => self.filter_tags.toggle(&tag),
            ViewAction::ClearFilterTags => self.filter_tags.clear(),
            ViewAction::SetSortMode(mode) => self.sort_mode = mode,
            ViewAction::ToggleNewFolderInput => {
                self.new_folder_input_open = !self.new_folder_input_open;
            }
            ViewAction::SetNewFolderName(name) => self.new_folder_name = name,
            ViewAction::AddFolder => self.add_folder()?,
            ViewAction::BookmarkCreated => {
                self.url_input.clear();
                self.memo_input.clear();
                self.selected_tags = TagSet::with_default_tag();
            }
            ViewAction::StartEditing(bookmark) => {
                self.editing = Some(EditBuffer {
                    bookmark_id: bookmark.id,
                    folder: bookmark.folder,
                    tags: bookmark.tags.into_iter().collect(),
                });
            }
            ViewAction::SetEditingFolder(folder) => {
                self.ensure_folder(&folder)?;
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.folder = folder;
                }
            }
            ViewAction::ToggleEditingTag(tag) => {
                if let Some(buffer) = self.editing.as_mut() {
                    buffer.tags.toggle(&tag);
                }
            }
            ViewAction::EditSaved | ViewAction::CancelEditing => self.editing = None,
            ViewAction::RequestFolderDeletion(folder) => {
                self.ensure_folder(&folder)?;
                self.ensure_idle()?;
                if self.folders.len() == 1 {
                    return Err(Error::LastFolder);
                }
                self.folder_to_delete = Some(folder);
            }
            ViewAction::CancelFolderDeletion => {
                self.ensure_idle()?;
                self.folder_to_delete = None;
            }
            ViewAction::FolderDeletionStarted => {
                self.ensure_idle()?;
                if self.folder_to_delete.is_none() {
                    return Err(Error::InvalidInput(
                        "no folder deletion is pending".to_string(),
                    ));
                }
                self.folder_deletion_running = true;
            }
            ViewAction::FolderDeletionFinished => self.folder_deletion_running = false,
            ViewAction::FolderDeleted(folder) => self.remove_folder(&folder),
        }
        Ok(())
    }

    const fn ensure_idle(&self) -> Result<()> {
        if self.folder_deletion_running {
            Err(Error::FolderDeletionInProgress)
        } else {
            Ok(())
        }
    }

    fn ensure_folder(&self, folder: &str) -> Result<()> {
        if self.has_folder(folder) {
            Ok(())
        } else {
            Err(Error::UnknownFolder(folder.to_string()))
        }
    }

    fn add_folder(&mut self) -> Result<()> {
        let name = self.new_folder_name.trim();
        if name.is_empty() {
            return Err(Error::EmptyFolderName);
        }
        if self.has_folder(name) {
            return Err(Error::DuplicateFolder(name.to_string()));
        }

        let name = name.to_string();
        self.folders.push(name.clone());
        self.selected_folder = name;
        self.new_folder_name.clear();
        self.new_folder_input_open = false;
        Ok(())
    }

    fn remove_folder(&mut self, folder: &str) {
        self.folders.retain(|existing| existing != folder);
        if self.folder_to_delete.as_deref() == Some(folder) {
            self.folder_to_delete = None;
            self.folder_deletion_running = false;
        }
        if self.selected_folder == folder {
            self.selected_folder = self.folders.first().cloned().unwrap_or_default();
        }
        if self
            .editing
            .as_ref()
            .is_some_and(|buffer| buffer.folder == folder)
        {
            self.editing = None;
        }
    }
}
