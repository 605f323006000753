//! User session actions

use super::RawAction;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserActionType {
    LogoutSuccess,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Clears every per-user slice
    LogoutSuccess,
}

impl UserAction {
    pub fn action_type(&self) -> UserActionType {
        match self {
            Self::LogoutSuccess => UserActionType::LogoutSuccess,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = UserActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            UserActionType::LogoutSuccess => Self::LogoutSuccess,
        })
    }
}
