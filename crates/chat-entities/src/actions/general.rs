//! Server-wide data actions

use super::RawAction;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GeneralActionType {
    ReceivedSupportedTimezones,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneralAction {
    ReceivedSupportedTimezones(Vec<String>),
}

impl GeneralAction {
    pub fn action_type(&self) -> GeneralActionType {
        match self {
            Self::ReceivedSupportedTimezones(_) => GeneralActionType::ReceivedSupportedTimezones,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = GeneralActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            GeneralActionType::ReceivedSupportedTimezones => {
                Self::ReceivedSupportedTimezones(raw.data())
            }
        })
    }
}
