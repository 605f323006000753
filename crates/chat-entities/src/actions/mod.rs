//! Actions module
//!
//! Every action the store understands, tagged by domain. Each domain has a
//! payload enum (`ThemeAction`, ...) and a fieldless `*ActionType` enum whose
//! variants map one-to-one onto the wire names (`RECEIVED_THEME`, ...).
//!
//! Actions arrive from collaborators as [`RawAction`] JSON records and are
//! decoded with [`Action::from_raw`]. A wire name no domain recognizes decodes
//! to [`Action::Unknown`], which every reducer passes through untouched.

pub mod channels;
pub mod emojis;
pub mod files;
pub mod general;
pub mod jobs;
pub mod offline;
pub mod plugins;
pub mod posts;
pub mod preferences;
pub mod raw;
pub mod search;
pub mod themes;
pub mod threads;
pub mod users;

pub use channels::{ChannelAction, ChannelActionType};
pub use emojis::{EmojiAction, EmojiActionType};
pub use files::{FileAction, FileActionType};
pub use general::{GeneralAction, GeneralActionType};
pub use jobs::{JobAction, JobActionType};
pub use offline::{OfflineAction, OfflineError};
pub use plugins::{PluginAction, PluginActionType};
pub use posts::{PostAction, PostActionType};
pub use preferences::{PreferenceAction, PreferenceActionType};
pub use raw::RawAction;
pub use search::{SearchAction, SearchActionType};
pub use themes::{ThemeAction, ThemeActionType};
pub use threads::{ThreadAction, ThreadActionType};
pub use users::{UserAction, UserActionType};

/// Wire name of a batch of actions
pub const BATCH: &str = "BATCHING_REDUCER.BATCH";

/// Wire name used for offline request descriptors in logs
pub const OFFLINE: &str = "OFFLINE";

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    Theme(ThemeAction),
    Plugin(PluginAction),
    Thread(ThreadAction),
    File(FileAction),
    Preference(PreferenceAction),
    Job(JobAction),
    Search(SearchAction),
    General(GeneralAction),
    Channel(ChannelAction),
    Emoji(EmojiAction),
    Post(PostAction),
    User(UserAction),

    /// Several actions reduced in order as one dispatch
    Batch(Vec<Action>),

    /// Request descriptor handled by the offline middleware
    Offline(OfflineAction),

    /// An action type no domain recognizes
    Unknown(String),
}

impl Action {
    /// Wire name of this action
    pub fn kind(&self) -> &str {
        match self {
            Self::Theme(action) => action.action_type().into(),
            Self::Plugin(action) => action.action_type().into(),
            Self::Thread(action) => action.action_type().into(),
            Self::File(action) => action.action_type().into(),
            Self::Preference(action) => action.action_type().into(),
            Self::Job(action) => action.action_type().into(),
            Self::Search(action) => action.action_type().into(),
            Self::General(action) => action.action_type().into(),
            Self::Channel(action) => action.action_type().into(),
            Self::Emoji(action) => action.action_type().into(),
            Self::Post(action) => action.action_type().into(),
            Self::User(action) => action.action_type().into(),
            Self::Batch(_) => BATCH,
            Self::Offline(_) => OFFLINE,
            Self::Unknown(kind) => kind,
        }
    }

    /// Decode a wire action. Never fails: unknown types become
    /// [`Action::Unknown`] and malformed payloads decode to empty values.
    pub fn from_raw(raw: &RawAction) -> Action {
        if raw.kind == BATCH {
            let actions: Vec<RawAction> = raw.field("payload");
            return Action::Batch(actions.iter().map(Action::from_raw).collect());
        }

        ThemeAction::from_raw(raw)
            .map(Action::Theme)
            .or_else(|| PluginAction::from_raw(raw).map(Action::Plugin))
            .or_else(|| ThreadAction::from_raw(raw).map(Action::Thread))
            .or_else(|| FileAction::from_raw(raw).map(Action::File))
            .or_else(|| PreferenceAction::from_raw(raw).map(Action::Preference))
            .or_else(|| JobAction::from_raw(raw).map(Action::Job))
            .or_else(|| SearchAction::from_raw(raw).map(Action::Search))
            .or_else(|| GeneralAction::from_raw(raw).map(Action::General))
            .or_else(|| ChannelAction::from_raw(raw).map(Action::Channel))
            .or_else(|| EmojiAction::from_raw(raw).map(Action::Emoji))
            .or_else(|| PostAction::from_raw(raw).map(Action::Post))
            .or_else(|| UserAction::from_raw(raw).map(Action::User))
            .unwrap_or_else(|| Action::Unknown(raw.kind.clone()))
    }

    pub fn is_logout(&self) -> bool {
        matches!(self, Self::User(UserAction::LogoutSuccess))
    }
}

impl From<RawAction> for Action {
    fn from(raw: RawAction) -> Self {
        Action::from_raw(&raw)
    }
}
