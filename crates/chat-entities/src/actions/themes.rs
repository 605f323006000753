//! Theme actions

use super::RawAction;
use crate::domain_models::Theme;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Wire names of theme actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeActionType {
    ReceivedTheme,
    ReceivedThemes,
    ReceivedThemeDeleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    ReceivedTheme(Theme),
    ReceivedThemes(Vec<Theme>),
    ReceivedThemeDeleted { id: String },
}

impl ThemeAction {
    pub fn action_type(&self) -> ThemeActionType {
        match self {
            Self::ReceivedTheme(_) => ThemeActionType::ReceivedTheme,
            Self::ReceivedThemes(_) => ThemeActionType::ReceivedThemes,
            Self::ReceivedThemeDeleted { .. } => ThemeActionType::ReceivedThemeDeleted,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = ThemeActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            ThemeActionType::ReceivedTheme => Self::ReceivedTheme(raw.data()),
            ThemeActionType::ReceivedThemes => Self::ReceivedThemes(raw.data()),
            ThemeActionType::ReceivedThemeDeleted => Self::ReceivedThemeDeleted {
                id: raw.data_field("id"),
            },
        })
    }
}
