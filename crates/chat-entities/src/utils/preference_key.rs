//! Composite preference keys
//!
//! Preferences are stored under `category--name`. Decoding is only ever done
//! for a known category by stripping the prefix; the separator may also occur
//! inside `name`, so keys are never split generically.

/// Separator between category and name
pub const PREFERENCE_KEY_SEPARATOR: &str = "--";

/// Build the store key for a preference
pub fn get_preference_key(category: &str, name: &str) -> String {
    format!("{category}{PREFERENCE_KEY_SEPARATOR}{name}")
}

/// Return the preference name if `key` belongs to `category`
pub fn strip_category<'a>(category: &str, key: &'a str) -> Option<&'a str> {
    key.strip_prefix(category)?
        .strip_prefix(PREFERENCE_KEY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_preference_key() {
        assert_eq!(
            get_preference_key("notifications", "email"),
            "notifications--email"
        );
        assert_eq!(get_preference_key("theme", ""), "theme--");
    }

    #[test]
    fn test_strip_category_round_trip() {
        for (category, name) in [
            ("notifications", "email"),
            ("display_settings", "use_military_time"),
            ("theme", "team_id_1"),
        ] {
            let key = get_preference_key(category, name);
            assert_eq!(strip_category(category, &key), Some(name));
        }
    }

    #[test]
    fn test_strip_category_requires_separator() {
        // "notificationsx--email" shares the prefix but not the category
        assert_eq!(strip_category("notifications", "notificationsx--email"), None);
        assert_eq!(strip_category("notifications", "display--email"), None);
    }

    #[test]
    fn test_separator_inside_name_is_kept() {
        let key = get_preference_key("group", "a--b");
        assert_eq!(strip_category("group", &key), Some("a--b"));
    }
}
