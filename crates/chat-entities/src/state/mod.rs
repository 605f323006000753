//! State records
//!
//! Every record is declared with [`combine_reducers!`](crate::combine_reducers):
//! its fields are `Arc` slices, each owned by one slice reducer. Domain records
//! are in turn slices of [`EntitiesState`], the root of the store.

mod channels;
mod emojis;
mod files;
mod general;
mod jobs;
mod plugins;
mod preferences;
mod search;
mod themes;
mod threads;

pub use channels::ChannelsState;
pub use emojis::EmojisState;
pub use files::FilesState;
pub use general::GeneralState;
pub use jobs::JobsState;
pub use plugins::PluginsState;
pub use preferences::PreferencesState;
pub use search::SearchState;
pub use themes::ThemesState;
pub use threads::ThreadsState;

use crate::actions::Action;
use crate::reducers::threads_reducer;

crate::combine_reducers! {
    /// Root of the entity store
    pub struct EntitiesState(Action) {
        themes: ThemesState => ThemesState::reduce,
        plugins: PluginsState => PluginsState::reduce,
        threads: ThreadsState => threads_reducer::threads_state,
        files: FilesState => FilesState::reduce,
        preferences: PreferencesState => PreferencesState::reduce,
        jobs: JobsState => JobsState::reduce,
        search: SearchState => SearchState::reduce,
        general: GeneralState => GeneralState::reduce,
        channels: ChannelsState => ChannelsState::reduce,
        emojis: EmojisState => EmojisState::reduce,
    }
}
