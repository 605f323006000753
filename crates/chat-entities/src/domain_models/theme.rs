//! Theme model

use crate::toolkit::Entity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A color theme. Everything besides the id and type is a named color or
/// option and is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub id: String,
    /// Theme family name, e.g. "denim" or "onyx"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub colors: IndexMap<String, Value>,
}

impl Theme {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            colors: IndexMap::new(),
        }
    }

    /// Builder-style helper to set a color
    pub fn with_color(mut self, name: &str, value: &str) -> Self {
        self.colors
            .insert(name.to_string(), Value::String(value.to_string()));
        self
    }

    /// Color value by name, if it is a string
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).and_then(Value::as_str)
    }
}

impl Entity for Theme {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_flattened() {
        let theme: Theme = serde_json::from_str(
            r##"{"id": "t1", "type": "denim", "sidebarBg": "#1e325c", "codeTheme": "github"}"##,
        )
        .unwrap();

        assert_eq!(theme.kind, "denim");
        assert_eq!(theme.color("sidebarBg"), Some("#1e325c"));
        assert_eq!(theme.color("codeTheme"), Some("github"));
        assert!(!theme.colors.contains_key("id"));
    }
}
