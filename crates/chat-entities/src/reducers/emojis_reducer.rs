use crate::actions::{Action, EmojiAction, UserAction};
use crate::domain_models::CustomEmoji;
use crate::toolkit::keyed::{deleted, received_entities, received_entity, reset};
use crate::toolkit::IdMap;
use indexmap::IndexSet;
use std::sync::Arc;

/// Custom emoji keyed by emoji id
pub fn custom_emoji(prior: &Arc<IdMap<CustomEmoji>>, action: &Action) -> Arc<IdMap<CustomEmoji>> {
    match action {
        Action::Emoji(EmojiAction::ReceivedCustomEmoji(emoji)) => received_entity(prior, emoji),
        Action::Emoji(EmojiAction::ReceivedCustomEmojis(emojis)) => received_entities(prior, emojis),
        Action::Emoji(EmojiAction::DeletedCustomEmoji { id }) => deleted(prior, id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Names that were looked up and do not exist on the server
pub fn non_existent_emoji(prior: &Arc<IndexSet<String>>, action: &Action) -> Arc<IndexSet<String>> {
    match action {
        Action::Emoji(EmojiAction::CustomEmojiDoesNotExist { name }) => {
            if name.is_empty() || prior.contains(name) {
                return Arc::clone(prior);
            }
            let mut next = IndexSet::clone(prior);
            next.insert(name.clone());
            Arc::new(next)
        }
        Action::Emoji(EmojiAction::ReceivedCustomEmoji(emoji)) => {
            forget_names(prior, std::slice::from_ref(emoji))
        }
        Action::Emoji(EmojiAction::ReceivedCustomEmojis(emojis)) => forget_names(prior, emojis),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

fn forget_names(prior: &Arc<IndexSet<String>>, emojis: &[CustomEmoji]) -> Arc<IndexSet<String>> {
    if !emojis.iter().any(|emoji| prior.contains(&emoji.name)) {
        return Arc::clone(prior);
    }

    let mut next = IndexSet::clone(prior);
    for emoji in emojis {
        next.shift_remove(&emoji.name);
    }
    Arc::new(next)
}
