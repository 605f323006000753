//! Search actions

use super::RawAction;
use crate::domain_models::{PostList, SearchParams};
use crate::toolkit::IdMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchActionType {
    SearchPostsRequest,
    ReceivedSearchPosts,
    ReceivedSearchFiles,
    ReceivedSearchTerm,
    RemoveSearchPosts,
    RemoveSearchFiles,
    ReceivedSearchFlaggedPosts,
    ReceivedSearchPinnedPosts,
}

/// Search hits in display order, with the matched terms per post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPostsPage {
    pub order: Vec<String>,
    pub matches: IdMap<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SearchPostsRequest { is_getting_more: bool },
    ReceivedSearchPosts { page: SearchPostsPage, is_getting_more: bool },
    ReceivedSearchFiles { order: Vec<String>, is_getting_more: bool },
    ReceivedSearchTerm { team_id: String, params: SearchParams },
    RemoveSearchPosts,
    RemoveSearchFiles,
    ReceivedSearchFlaggedPosts(PostList),
    ReceivedSearchPinnedPosts { channel_id: String, pinned: PostList },
}

impl SearchAction {
    pub fn action_type(&self) -> SearchActionType {
        match self {
            Self::SearchPostsRequest { .. } => SearchActionType::SearchPostsRequest,
            Self::ReceivedSearchPosts { .. } => SearchActionType::ReceivedSearchPosts,
            Self::ReceivedSearchFiles { .. } => SearchActionType::ReceivedSearchFiles,
            Self::ReceivedSearchTerm { .. } => SearchActionType::ReceivedSearchTerm,
            Self::RemoveSearchPosts => SearchActionType::RemoveSearchPosts,
            Self::RemoveSearchFiles => SearchActionType::RemoveSearchFiles,
            Self::ReceivedSearchFlaggedPosts(_) => SearchActionType::ReceivedSearchFlaggedPosts,
            Self::ReceivedSearchPinnedPosts { .. } => SearchActionType::ReceivedSearchPinnedPosts,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = SearchActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            SearchActionType::SearchPostsRequest => Self::SearchPostsRequest {
                is_getting_more: raw.field("isGettingMore"),
            },
            SearchActionType::ReceivedSearchPosts => Self::ReceivedSearchPosts {
                page: raw.data(),
                is_getting_more: raw.field("isGettingMore"),
            },
            SearchActionType::ReceivedSearchFiles => Self::ReceivedSearchFiles {
                order: raw.data_field("order"),
                is_getting_more: raw.field("isGettingMore"),
            },
            SearchActionType::ReceivedSearchTerm => {
                let mut params: SearchParams = raw.data_field("params");
                params.is_end = raw.data_field("is_end");
                Self::ReceivedSearchTerm {
                    team_id: raw.data_field("team_id"),
                    params,
                }
            }
            SearchActionType::RemoveSearchPosts => Self::RemoveSearchPosts,
            SearchActionType::RemoveSearchFiles => Self::RemoveSearchFiles,
            SearchActionType::ReceivedSearchFlaggedPosts => {
                Self::ReceivedSearchFlaggedPosts(raw.data())
            }
            SearchActionType::ReceivedSearchPinnedPosts => Self::ReceivedSearchPinnedPosts {
                channel_id: raw.data_field("channel_id"),
                pinned: raw.data_field("pinned"),
            },
        })
    }
}
