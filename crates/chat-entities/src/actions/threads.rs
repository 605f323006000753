//! Thread actions

use super::RawAction;
use crate::domain_models::UserThread;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadActionType {
    ReceivedThreads,
    ReceivedThread,
    ReadChangedThread,
    FollowChangedThread,
    AllTeamThreadsRead,
}

/// One page of threads for a team, with the team totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsPage {
    pub team_id: String,
    pub threads: Vec<UserThread>,
    pub total: u64,
    pub total_unread_threads: u64,
    pub total_unread_mentions: u64,
}

/// The user viewed a thread, or marked it unread
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadReadChange {
    pub id: String,
    pub team_id: String,
    pub last_viewed_at: i64,
    pub prev_unread_replies: u64,
    pub new_unread_replies: u64,
    pub prev_unread_mentions: u64,
    pub new_unread_mentions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThreadAction {
    ReceivedThreads(ThreadsPage),
    ReceivedThread { team_id: String, thread: UserThread },
    ReadChangedThread(ThreadReadChange),
    FollowChangedThread { id: String, team_id: String, following: bool },
    AllTeamThreadsRead { team_id: String },
}

impl ThreadAction {
    pub fn action_type(&self) -> ThreadActionType {
        match self {
            Self::ReceivedThreads(_) => ThreadActionType::ReceivedThreads,
            Self::ReceivedThread { .. } => ThreadActionType::ReceivedThread,
            Self::ReadChangedThread(_) => ThreadActionType::ReadChangedThread,
            Self::FollowChangedThread { .. } => ThreadActionType::FollowChangedThread,
            Self::AllTeamThreadsRead { .. } => ThreadActionType::AllTeamThreadsRead,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = ThreadActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            ThreadActionType::ReceivedThreads => Self::ReceivedThreads(raw.data()),
            ThreadActionType::ReceivedThread => Self::ReceivedThread {
                team_id: raw.data_field("team_id"),
                thread: raw.data_field("thread"),
            },
            ThreadActionType::ReadChangedThread => Self::ReadChangedThread(raw.data()),
            ThreadActionType::FollowChangedThread => Self::FollowChangedThread {
                id: raw.data_field("id"),
                team_id: raw.data_field("team_id"),
                following: raw.data_field("following"),
            },
            ThreadActionType::AllTeamThreadsRead => Self::AllTeamThreadsRead {
                team_id: raw.data_field("team_id"),
            },
        })
    }
}
