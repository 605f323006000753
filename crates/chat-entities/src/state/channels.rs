use crate::actions::Action;
use crate::domain_models::Channel;
use crate::reducers::channels_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    pub struct ChannelsState(Action) {
        channels: IdMap<Channel> => channels_reducer::channels,
        /// Keyed by team id
        channels_last_fetch: IdMap<i64> => channels_reducer::channels_last_fetch,
    }
}
