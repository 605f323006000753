use crate::actions::Action;
use crate::domain_models::{MarketplacePlugin, PluginStatus};
use crate::reducers::plugins_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// Server plugin statuses and the plugin marketplace
    pub struct PluginsState(Action) {
        statuses: IdMap<PluginStatus> => plugins_reducer::statuses,
        marketplace_plugins: Vec<MarketplacePlugin> => plugins_reducer::marketplace_plugins,
        marketplace_filter: String => plugins_reducer::marketplace_filter,
    }
}
