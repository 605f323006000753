//! File attachment models

use crate::toolkit::Entity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Metadata for an uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub channel_id: String,
    pub name: String,
    pub extension: String,
    pub size: u64,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub has_preview_image: bool,
    pub create_at: i64,
    pub delete_at: i64,
}

impl Entity for FileInfo {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}
