//! Server entities mirrored into the store

mod channel;
mod emoji;
mod file_info;
mod job;
mod plugin;
mod post;
pub mod preference;
mod search;
mod theme;
mod thread;

pub use channel::Channel;
pub use emoji::CustomEmoji;
pub use file_info::FileInfo;
pub use job::{Job, JobStatus};
pub use plugin::{MarketplacePlugin, PluginManifest, PluginState, PluginStatus};
pub use post::{Post, PostList};
pub use preference::Preference;
pub use search::SearchParams;
pub use theme::Theme;
pub use thread::{ThreadRootPost, ThreadsCount, UserThread};
pub use crate::utils::timezone::UserTimezone;
