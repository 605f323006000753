use crate::domain_models::{MarketplacePlugin, PluginStatus};
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use std::sync::Arc;

pub fn get_plugin_statuses(state: &EntitiesState) -> &Arc<IdMap<PluginStatus>> {
    &state.plugins.statuses
}

pub fn get_marketplace_plugins(state: &EntitiesState) -> &Arc<Vec<MarketplacePlugin>> {
    &state.plugins.marketplace_plugins
}

pub fn get_marketplace_filter(state: &EntitiesState) -> &str {
    &state.plugins.marketplace_filter
}

/// Marketplace plugins that are installed on the server
pub fn make_get_installed_marketplace_plugins(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<MarketplacePlugin>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| Arc::clone(&state.plugins.marketplace_plugins),
        |plugins| {
            Arc::new(
                plugins
                    .iter()
                    .filter(|plugin| plugin.is_installed())
                    .cloned()
                    .collect(),
            )
        },
    )
}

/// Marketplace plugins whose name, id or description contain the current
/// filter, ignoring case
pub fn make_get_filtered_marketplace_plugins(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<MarketplacePlugin>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| {
            (
                Arc::clone(&state.plugins.marketplace_plugins),
                Arc::clone(&state.plugins.marketplace_filter),
            )
        },
        |(plugins, filter)| {
            let filter = filter.trim().to_lowercase();
            Arc::new(
                plugins
                    .iter()
                    .filter(|plugin| {
                        let manifest = &plugin.manifest;
                        filter.is_empty()
                            || [&manifest.id, &manifest.name, &manifest.description]
                                .iter()
                                .any(|text| text.to_lowercase().contains(&filter))
                    })
                    .cloned()
                    .collect(),
            )
        },
    )
}
