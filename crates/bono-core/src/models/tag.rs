//! Tag labels and the toggle-set used for tag selections

use serde::{Deserialize, Serialize};

use crate::util::toggle_in;

/// The predefined tag palette, in display order.
pub const DEFAULT_TAGS: [&str; 7] = [
    "유튜브",
    "페이스북",
    "인스타그램",
    "뉴스",
    "메모",
    "드라이브",
    "기타",
];

/// Tag applied when a bookmark is created with an empty selection.
pub const DEFAULT_TAG: &str = DEFAULT_TAGS[0];

/// An insertion-ordered set of tags.
///
/// Toggling a tag that is already present removes it; toggling an absent tag
/// appends it. Order is kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Selection a fresh creation form starts with
    #[must_use]
    pub fn with_default_tag() -> Self {
        Self(vec![DEFAULT_TAG.to_string()])
    }

    /// Add or remove `tag`
    pub fn toggle(&mut self, tag: &str) {
        toggle_in(&mut self.0, tag);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// True when any of `tags` is a member of this set
    pub fn intersects(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            let tag = tag.into();
            if !set.contains(&tag) {
                set.0.push(tag);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_selection() {
        let mut set = TagSet::with_default_tag();
        let before = set.clone();
        set.toggle("뉴스");
        assert!(set.contains("뉴스"));
        set.toggle("뉴스");
        assert_eq!(set, before);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut set = TagSet::new();
        set.toggle("메모");
        set.toggle("유튜브");
        set.toggle("뉴스");
        assert_eq!(set.as_slice(), ["메모", "유튜브", "뉴스"]);
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let set: TagSet = ["뉴스", "메모", "뉴스"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn intersects_is_logical_or() {
        let set: TagSet = ["뉴스", "메모"].into_iter().collect();
        assert!(set.intersects(&["기타".to_string(), "메모".to_string()]));
        assert!(!set.intersects(&["기타".to_string()]));
        assert!(!set.intersects(&[]));
    }
}
