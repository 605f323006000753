//! Custom emoji actions

use super::RawAction;
use crate::domain_models::CustomEmoji;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EmojiActionType {
    ReceivedCustomEmoji,
    ReceivedCustomEmojis,
    DeletedCustomEmoji,
    CustomEmojiDoesNotExist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmojiAction {
    ReceivedCustomEmoji(CustomEmoji),
    ReceivedCustomEmojis(Vec<CustomEmoji>),
    DeletedCustomEmoji { id: String },
    /// A lookup by name found nothing; remembered so it is not retried
    CustomEmojiDoesNotExist { name: String },
}

impl EmojiAction {
    pub fn action_type(&self) -> EmojiActionType {
        match self {
            Self::ReceivedCustomEmoji(_) => EmojiActionType::ReceivedCustomEmoji,
            Self::ReceivedCustomEmojis(_) => EmojiActionType::ReceivedCustomEmojis,
            Self::DeletedCustomEmoji { .. } => EmojiActionType::DeletedCustomEmoji,
            Self::CustomEmojiDoesNotExist { .. } => EmojiActionType::CustomEmojiDoesNotExist,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = EmojiActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            EmojiActionType::ReceivedCustomEmoji => Self::ReceivedCustomEmoji(raw.data()),
            EmojiActionType::ReceivedCustomEmojis => Self::ReceivedCustomEmojis(raw.data()),
            EmojiActionType::DeletedCustomEmoji => Self::DeletedCustomEmoji {
                id: raw.data_field("id"),
            },
            EmojiActionType::CustomEmojiDoesNotExist => {
                Self::CustomEmojiDoesNotExist { name: raw.data() }
            }
        })
    }
}
