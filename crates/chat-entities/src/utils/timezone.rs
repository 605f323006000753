//! User timezone resolution
//!
//! Older persisted state and the server both encode `useAutomaticTimezone` as
//! the strings `"true"`/`"false"`; newer clients send a boolean. Both are
//! accepted on input and the string form is written back out.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Timezone settings attached to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserTimezone {
    #[serde(
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub use_automatic_timezone: bool,
    pub automatic_timezone: String,
    pub manual_timezone: String,
}

impl UserTimezone {
    pub fn automatic(timezone: impl Into<String>) -> Self {
        Self {
            use_automatic_timezone: true,
            automatic_timezone: timezone.into(),
            manual_timezone: String::new(),
        }
    }

    pub fn manual(timezone: impl Into<String>) -> Self {
        Self {
            use_automatic_timezone: false,
            automatic_timezone: String::new(),
            manual_timezone: timezone.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => text == "true",
        None => false,
    })
}

fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "true" } else { "false" })
}

/// Resolve the timezone currently in effect for a user
pub fn get_user_current_timezone(timezone: &UserTimezone) -> &str {
    if timezone.use_automatic_timezone {
        &timezone.automatic_timezone
    } else {
        &timezone.manual_timezone
    }
}

/// Human readable label for a zone id, e.g. `America/New_York` -> `New York`
pub fn timezone_label(timezone: &str) -> String {
    timezone
        .rsplit('/')
        .next()
        .unwrap_or(timezone)
        .replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_flag_resolves_automatic() {
        let tz: UserTimezone = serde_json::from_str(
            r#"{"useAutomaticTimezone": "true", "automaticTimezone": "America/New_York", "manualTimezone": ""}"#,
        )
        .unwrap();
        assert_eq!(get_user_current_timezone(&tz), "America/New_York");
    }

    #[test]
    fn test_bool_flag_resolves_manual() {
        let tz: UserTimezone = serde_json::from_str(
            r#"{"useAutomaticTimezone": false, "automaticTimezone": "", "manualTimezone": "Europe/Paris"}"#,
        )
        .unwrap();
        assert_eq!(get_user_current_timezone(&tz), "Europe/Paris");
    }

    #[test]
    fn test_missing_and_null_flags_mean_manual() {
        let tz: UserTimezone = serde_json::from_str(r#"{"manualTimezone": "Asia/Tokyo"}"#).unwrap();
        assert!(!tz.use_automatic_timezone);

        let tz: UserTimezone =
            serde_json::from_str(r#"{"useAutomaticTimezone": null, "manualTimezone": "UTC"}"#)
                .unwrap();
        assert_eq!(get_user_current_timezone(&tz), "UTC");
    }

    #[test]
    fn test_serializes_string_flag() {
        let json = serde_json::to_value(UserTimezone::automatic("UTC")).unwrap();
        assert_eq!(json["useAutomaticTimezone"], "true");
    }

    #[test]
    fn test_timezone_label() {
        assert_eq!(timezone_label("America/New_York"), "New York");
        assert_eq!(timezone_label("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(timezone_label("UTC"), "UTC");
    }
}
