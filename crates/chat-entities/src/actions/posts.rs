//! Post lifecycle actions consumed by the file, search and thread slices

use super::RawAction;
use crate::domain_models::Post;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PostActionType {
    PostDeleted,
    PostRemoved,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostAction {
    /// Soft delete: the post stays visible as "(message deleted)"
    PostDeleted(Post),
    /// The post is gone from the client entirely
    PostRemoved(Post),
}

impl PostAction {
    pub fn action_type(&self) -> PostActionType {
        match self {
            Self::PostDeleted(_) => PostActionType::PostDeleted,
            Self::PostRemoved(_) => PostActionType::PostRemoved,
        }
    }

    pub fn post(&self) -> &Post {
        match self {
            Self::PostDeleted(post) | Self::PostRemoved(post) => post,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = PostActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            PostActionType::PostDeleted => Self::PostDeleted(raw.data()),
            PostActionType::PostRemoved => Self::PostRemoved(raw.data()),
        })
    }
}
