//! Locale-aware ordering for display names

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare display names the way a reader expects them in a list.
///
/// Names are compared without accents and case first (`Émile` sits between
/// `eagle` and `zebra`), then case-insensitively with accents, then by raw
/// text, so the ordering is total and deterministic.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Base letters only: decomposed, combining marks dropped, lowercased
fn primary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Ids of `items` ordered by the name `name_of` returns. The sort is stable,
/// so entries with identical names keep their collection order.
pub fn ids_sorted_by_name<'a, T, I, F>(items: I, name_of: F) -> Vec<String>
where
    T: 'a,
    I: IntoIterator<Item = (&'a String, &'a T)>,
    F: Fn(&T) -> &str,
{
    let mut entries: Vec<(&String, &str)> = items
        .into_iter()
        .map(|(id, item)| (id, name_of(item)))
        .collect();
    entries.sort_by(|(_, a), (_, b)| compare_locale(a, b));
    entries.into_iter().map(|(id, _)| id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_case_insensitive_order() {
        let mut names = vec!["banana", "Apple", "cherry"];
        names.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_case_tie_break_is_deterministic() {
        assert_eq!(compare_locale("apple", "Apple"), Ordering::Greater);
        assert_eq!(compare_locale("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let mut names = vec!["zebra", "Émile", "eagle"];
        names.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(names, vec!["eagle", "Émile", "zebra"]);

        let mut names = vec!["Zürich", "Åland", "Berlin", "Ångström"];
        names.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(names, vec!["Åland", "Ångström", "Berlin", "Zürich"]);
    }

    #[test]
    fn test_accent_tie_break_is_deterministic() {
        assert_eq!(compare_locale("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_locale("résumé", "resume"), Ordering::Greater);
        assert_eq!(compare_locale("Résumé", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_ids_sorted_by_name_is_stable() {
        let items: IndexMap<String, &str> = [
            ("3".to_string(), "same"),
            ("1".to_string(), "alpha"),
            ("2".to_string(), "same"),
        ]
        .into_iter()
        .collect();

        let ids = ids_sorted_by_name(&items, |name| *name);
        assert_eq!(ids, vec!["1", "3", "2"]);
    }
}
