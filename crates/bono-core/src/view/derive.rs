//! Pure derivation of the rendered list from the synced list and view state

use std::cmp::Ordering;

use super::{compare_korean, SortMode, ViewState};
use crate::models::Bookmark;

/// Visible bookmarks of one folder, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup<'a> {
    pub folder: &'a str,
    pub bookmarks: Vec<&'a Bookmark>,
}

/// Bookmarks of `folder` that pass the tag filter, sorted by the view's mode.
///
/// The synced list is only borrowed; the result is a fresh vector of
/// references.
pub fn folder_bookmarks<'a>(
    bookmarks: &'a [Bookmark],
    folder: &str,
    view: &ViewState,
) -> Vec<&'a Bookmark> {
    let filter = view.filter_tags();
    let mut visible: Vec<&Bookmark> = bookmarks
        .iter()
        .filter(|bookmark| bookmark.folder == folder)
        .filter(|bookmark| filter.is_empty() || filter.intersects(&bookmark.tags))
        .collect();
    sort_bookmarks(&mut visible, view.sort_mode());
    visible
}

/// Stable sort; equal keys keep their incoming order.
pub fn sort_bookmarks(bookmarks: &mut [&Bookmark], mode: SortMode) {
    match mode {
        SortMode::Newest => bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => bookmarks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Alphabetical => bookmarks.sort_by(|a, b| by_memo(a, b)),
    }
}

fn by_memo(a: &Bookmark, b: &Bookmark) -> Ordering {
    compare_korean(a.memo_or_empty(), b.memo_or_empty())
}

/// One group per folder in folder-list order, skipping folders with nothing
/// visible
pub fn group_by_folder<'a>(bookmarks: &'a [Bookmark], view: &'a ViewState) -> Vec<FolderGroup<'a>> {
    view.folders()
        .iter()
        .filter_map(|folder| {
            let visible = folder_bookmarks(bookmarks, folder, view);
            (!visible.is_empty()).then_some(FolderGroup {
                folder: folder.as_str(),
                bookmarks: visible,
            })
        })
        .collect()
}

/// Members of `folder` in the synced list, ignoring filters
pub fn count_in_folder(bookmarks: &[Bookmark], folder: &str) -> usize {
    bookmarks
        .iter()
        .filter(|bookmark| bookmark.folder == folder)
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::BookmarkId;
    use crate::view::ViewAction;

    fn bookmark(id: &str, folder: &str, tags: &[&str], memo: Option<&str>, minute: i64) -> Bookmark {
        Bookmark {
            id: BookmarkId::new(id),
            url: format!("https://{id}.example"),
            title: format!("{id}.example/"),
            folder: folder.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            memo: memo.map(ToString::to_string),
            is_checked: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minute),
        }
    }

    /// Newest first, as the store delivers it
    fn snapshot() -> Vec<Bookmark> {
        vec![
            bookmark("d", "기타", &["뉴스"], Some("다"), 4),
            bookmark("c", "기타", &["메모"], None, 3),
            bookmark("b", "업무", &["뉴스", "메모"], Some("가"), 2),
            bookmark("a", "기타", &["유튜브"], Some("가"), 1),
        ]
    }

    fn ids(bookmarks: &[&Bookmark]) -> Vec<String> {
        bookmarks.iter().map(|bookmark| bookmark.id.to_string()).collect()
    }

    #[test]
    fn filters_by_folder() {
        let bookmarks = snapshot();
        let view = ViewState::new();
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "기타", &view)), ["d", "c", "a"]);
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "업무", &view)), ["b"]);
        assert!(folder_bookmarks(&bookmarks, "KBS", &view).is_empty());
    }

    #[test]
    fn newest_and_oldest_are_reversed() {
        let bookmarks = snapshot();
        let mut view = ViewState::new();
        let newest = ids(&folder_bookmarks(&bookmarks, "기타", &view));
        view.apply(ViewAction::SetSortMode(SortMode::Oldest)).unwrap();
        let mut oldest = ids(&folder_bookmarks(&bookmarks, "기타", &view));
        oldest.reverse();
        assert_eq!(newest, oldest);
    }

    #[test]
    fn tag_filter_is_logical_or() {
        let bookmarks = snapshot();
        let mut view = ViewState::new();
        view.apply(ViewAction::ToggleFilterTag("뉴스".to_string())).unwrap();
        view.apply(ViewAction::ToggleFilterTag("유튜브".to_string())).unwrap();
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "기타", &view)), ["d", "a"]);
    }

    #[test]
    fn clearing_the_filter_restores_the_full_list() {
        let bookmarks = snapshot();
        let mut view = ViewState::new();
        let unfiltered = ids(&folder_bookmarks(&bookmarks, "기타", &view));

        view.apply(ViewAction::ToggleFilterTag("메모".to_string())).unwrap();
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "기타", &view)), ["c"]);
        view.apply(ViewAction::ClearFilterTags).unwrap();
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "기타", &view)), unfiltered);
        assert_eq!(bookmarks, snapshot());
    }

    #[test]
    fn alphabetical_puts_missing_memo_first_and_keeps_ties_stable() {
        let bookmarks = snapshot();
        let mut view = ViewState::new();
        view.apply(ViewAction::SetSortMode(SortMode::Alphabetical))
            .unwrap();
        assert_eq!(ids(&folder_bookmarks(&bookmarks, "기타", &view)), ["c", "a", "d"]);
    }

    #[test]
    fn alphabetical_ties_follow_snapshot_order() {
        let bookmarks = vec![
            bookmark("newer", "기타", &["메모"], Some("같음"), 2),
            bookmark("older", "기타", &["메모"], Some("같음"), 1),
        ];
        let mut view = ViewState::new();
        view.apply(ViewAction::SetSortMode(SortMode::Alphabetical))
            .unwrap();
        for _ in 0..3 {
            assert_eq!(
                ids(&folder_bookmarks(&bookmarks, "기타", &view)),
                ["newer", "older"]
            );
        }
    }

    #[test]
    fn groups_skip_empty_folders_and_follow_folder_order() {
        let bookmarks = snapshot();
        let mut view = ViewState::new();
        let groups = group_by_folder(&bookmarks, &view);
        let folders: Vec<_> = groups.iter().map(|group| group.folder).collect();
        assert_eq!(folders, ["업무", "기타"]);

        view.apply(ViewAction::ToggleFilterTag("유튜브".to_string())).unwrap();
        let groups = group_by_folder(&bookmarks, &view);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].folder, "기타");
        assert_eq!(count_in_folder(&bookmarks, "기타"), 3);
    }
}
