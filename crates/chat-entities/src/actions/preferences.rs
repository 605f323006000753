//! Preference actions

use super::RawAction;
use crate::domain_models::Preference;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceActionType {
    ReceivedPreferences,
    ReceivedAllPreferences,
    DeletedPreferences,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceAction {
    /// Merge into the stored preferences
    ReceivedPreferences(Vec<Preference>),
    /// Complete preference set for the user, replaces what is stored
    ReceivedAllPreferences(Vec<Preference>),
    DeletedPreferences(Vec<Preference>),
}

impl PreferenceAction {
    pub fn action_type(&self) -> PreferenceActionType {
        match self {
            Self::ReceivedPreferences(_) => PreferenceActionType::ReceivedPreferences,
            Self::ReceivedAllPreferences(_) => PreferenceActionType::ReceivedAllPreferences,
            Self::DeletedPreferences(_) => PreferenceActionType::DeletedPreferences,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = PreferenceActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            PreferenceActionType::ReceivedPreferences => Self::ReceivedPreferences(raw.data()),
            PreferenceActionType::ReceivedAllPreferences => {
                Self::ReceivedAllPreferences(raw.data())
            }
            PreferenceActionType::DeletedPreferences => Self::DeletedPreferences(raw.data()),
        })
    }
}
