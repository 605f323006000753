//! Channel model

use crate::toolkit::Entity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub delete_at: i64,
}

impl Channel {
    pub fn is_archived(&self) -> bool {
        self.delete_at != 0
    }
}

impl Entity for Channel {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}
