//! User preference model

use crate::toolkit::Entity;
use crate::utils::get_preference_key;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Well-known preference categories
pub mod categories {
    pub const THEME: &str = "theme";
    pub const DISPLAY_SETTINGS: &str = "display_settings";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const FLAGGED_POST: &str = "flagged_post";
}

/// A single user preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preference {
    pub user_id: String,
    pub category: String,
    pub name: String,
    pub value: String,
}

impl Preference {
    pub fn new(
        user_id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            category: category.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Entity for Preference {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Owned(get_preference_key(&self.category, &self.name))
    }
}
