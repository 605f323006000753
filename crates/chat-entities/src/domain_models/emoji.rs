//! Custom emoji model

use crate::toolkit::Entity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmoji {
    pub id: String,
    pub name: String,
    pub creator_id: String,
    pub create_at: i64,
    pub delete_at: i64,
}

impl Entity for CustomEmoji {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}
