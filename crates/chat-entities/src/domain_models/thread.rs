//! Collapsed reply thread models

use crate::toolkit::Entity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The root post of a thread, as embedded in a thread payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadRootPost {
    pub channel_id: String,
    pub user_id: String,
}

/// A thread the current user participates in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserThread {
    /// Id of the root post
    pub id: String,
    pub reply_count: u64,
    pub last_reply_at: i64,
    pub last_viewed_at: i64,
    pub participants: Vec<String>,
    pub unread_replies: u64,
    pub unread_mentions: u64,
    pub is_following: bool,
    pub post: ThreadRootPost,
}

impl Entity for UserThread {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

/// Per-team thread totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsCount {
    pub total: u64,
    pub total_unread_threads: u64,
    pub total_unread_mentions: u64,
}
