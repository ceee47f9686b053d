//! Korean locale string comparison

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

thread_local! {
    static KOREAN: Option<Collator> = Collator::try_new(&locale!("ko").into(), CollatorOptions::new())
        .map_err(|error| tracing::warn!("Korean collator unavailable, using code point order: {error}"))
        .ok();
}

/// Compare two strings the way a Korean reader orders them (가나다 order,
/// Latin letters compared case-insensitively first).
pub fn compare_korean(a: &str, b: &str) -> Ordering {
    KOREAN.with(|collator| {
        collator
            .as_ref()
            .map_or_else(|| a.cmp(b), |collator| collator.compare(a, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_in_dictionary_order() {
        let mut words = vec!["다람쥐", "가방", "나무", "라디오"];
        words.sort_by(|a, b| compare_korean(a, b));
        assert_eq!(words, vec!["가방", "나무", "다람쥐", "라디오"]);
    }

    #[test]
    fn empty_string_sorts_first() {
        assert_eq!(compare_korean("", "가"), Ordering::Less);
        assert_eq!(compare_korean("", ""), Ordering::Equal);
    }

    #[test]
    fn latin_letters_ignore_case_at_first_level() {
        assert_eq!(compare_korean("apple", "Banana"), Ordering::Less);
    }
}
