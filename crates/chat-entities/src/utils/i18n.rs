//! Localization lookup
//!
//! A [`Localizer`] is built once by the host application and passed to the
//! code that renders user-facing labels. There is no process-wide translation
//! function.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Translation table for one locale
#[derive(Debug, Clone)]
pub struct Localizer {
    locale: String,
    translations: HashMap<String, String>,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, HashMap::new())
    }
}

impl Localizer {
    pub fn new(locale: impl Into<String>, translations: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            translations,
        }
    }

    /// Load a flat `{ "message.id": "Translated text" }` JSON file
    pub fn from_json_file(locale: impl Into<String>, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations file: {:?}", path))?;
        let translations: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse translations file: {:?}", path))?;

        let locale = locale.into();
        log::info!(
            "Loaded {} translations for locale {} from {:?}",
            translations.len(),
            locale,
            path
        );
        Ok(Self::new(locale, translations))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translated message for `id`, or `default_message` when there is none
    pub fn localize<'a>(&'a self, id: &str, default_message: &'a str) -> &'a str {
        self.translations
            .get(id)
            .map(String::as_str)
            .unwrap_or(default_message)
    }

    /// Like [`Localizer::localize`], substituting `{name}` placeholders
    ///
    /// Placeholders without a value are left as written. Substituted values
    /// are never scanned for placeholders themselves.
    pub fn localize_with(&self, id: &str, default_message: &str, values: &[(&str, &str)]) -> String {
        let template = self.localize(id, default_message);
        let mut message = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let (before, from_brace) = rest.split_at(open);
            message.push_str(before);

            let Some(close) = from_brace.find('}') else {
                rest = from_brace;
                break;
            };
            let name = &from_brace[1..close];
            match values.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => message.push_str(value),
                None => message.push_str(&from_brace[..=close]),
            }
            rest = &from_brace[close + 1..];
        }

        message.push_str(rest);
        message
    }
}
