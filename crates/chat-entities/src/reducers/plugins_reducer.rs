use crate::actions::{Action, PluginAction, UserAction};
use crate::domain_models::{MarketplacePlugin, PluginStatus};
use crate::toolkit::keyed::{deleted, index_entities, received_entity, replace, reset};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Plugin statuses keyed by plugin id
pub fn statuses(prior: &Arc<IdMap<PluginStatus>>, action: &Action) -> Arc<IdMap<PluginStatus>> {
    match action {
        Action::Plugin(PluginAction::ReceivedPluginStatuses(statuses)) => {
            replace(prior, index_entities(statuses))
        }
        Action::Plugin(PluginAction::ReceivedPluginStatus(status)) => received_entity(prior, status),
        Action::Plugin(PluginAction::ReceivedPluginStatusDeleted { plugin_id }) => {
            deleted(prior, plugin_id)
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Marketplace listing in server order
pub fn marketplace_plugins(
    prior: &Arc<Vec<MarketplacePlugin>>,
    action: &Action,
) -> Arc<Vec<MarketplacePlugin>> {
    match action {
        Action::Plugin(PluginAction::ReceivedMarketplacePlugins(plugins)) => {
            replace(prior, plugins.clone())
        }
        Action::Plugin(PluginAction::MarketplacePluginInstalled { id, version }) => {
            set_installed_version(prior, id, version)
        }
        Action::Plugin(PluginAction::MarketplacePluginUninstalled { id }) => {
            set_installed_version(prior, id, "")
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Current marketplace search filter
pub fn marketplace_filter(prior: &Arc<String>, action: &Action) -> Arc<String> {
    match action {
        Action::Plugin(PluginAction::FilterMarketplacePlugins { filter }) => {
            replace(prior, filter.clone())
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

fn set_installed_version(
    prior: &Arc<Vec<MarketplacePlugin>>,
    id: &str,
    version: &str,
) -> Arc<Vec<MarketplacePlugin>> {
    let needs_update = prior
        .iter()
        .any(|plugin| plugin.manifest.id == id && plugin.installed_version != version);
    if !needs_update {
        return Arc::clone(prior);
    }

    Arc::new(
        prior
            .iter()
            .map(|plugin| {
                let mut plugin = plugin.clone();
                if plugin.manifest.id == id {
                    plugin.installed_version = version.to_string();
                }
                plugin
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{PluginManifest, PluginState};

    fn status(plugin_id: &str, state: PluginState) -> PluginStatus {
        PluginStatus {
            plugin_id: plugin_id.to_string(),
            state,
            ..Default::default()
        }
    }

    fn listing(id: &str) -> MarketplacePlugin {
        MarketplacePlugin {
            manifest: PluginManifest {
                id: id.to_string(),
                version: "1.0.0".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_received_statuses_replace_previous() {
        let state = statuses(
            &Arc::default(),
            &Action::Plugin(PluginAction::ReceivedPluginStatuses(vec![
                status("jira", PluginState::Running),
                status("zoom", PluginState::Stopping),
            ])),
        );
        assert_eq!(state.len(), 2);

        let next = statuses(
            &state,
            &Action::Plugin(PluginAction::ReceivedPluginStatuses(vec![status(
                "zoom",
                PluginState::Running,
            )])),
        );
        assert_eq!(next.len(), 1);
        assert_eq!(next["zoom"].state, PluginState::Running);
    }

    #[test]
    fn test_single_status_updates_and_deletes() {
        let state = statuses(
            &Arc::default(),
            &Action::Plugin(PluginAction::ReceivedPluginStatus(status("jira", PluginState::Starting))),
        );
        let state = statuses(
            &state,
            &Action::Plugin(PluginAction::ReceivedPluginStatus(status("jira", PluginState::Running))),
        );
        assert_eq!(state["jira"].state, PluginState::Running);

        let state = statuses(
            &state,
            &Action::Plugin(PluginAction::ReceivedPluginStatusDeleted {
                plugin_id: "jira".to_string(),
            }),
        );
        assert!(state.is_empty());
    }

    #[test]
    fn test_install_and_uninstall_track_version() {
        let state = marketplace_plugins(
            &Arc::default(),
            &Action::Plugin(PluginAction::ReceivedMarketplacePlugins(vec![
                listing("jira"),
                listing("zoom"),
            ])),
        );

        let installed = marketplace_plugins(
            &state,
            &Action::Plugin(PluginAction::MarketplacePluginInstalled {
                id: "zoom".to_string(),
                version: "1.0.0".to_string(),
            }),
        );
        assert!(installed[1].is_installed());
        assert!(!installed[0].is_installed());

        let again = marketplace_plugins(
            &installed,
            &Action::Plugin(PluginAction::MarketplacePluginInstalled {
                id: "zoom".to_string(),
                version: "1.0.0".to_string(),
            }),
        );
        assert!(Arc::ptr_eq(&installed, &again));

        let removed = marketplace_plugins(
            &installed,
            &Action::Plugin(PluginAction::MarketplacePluginUninstalled {
                id: "zoom".to_string(),
            }),
        );
        assert!(!removed[1].is_installed());
    }

    #[test]
    fn test_filter_and_logout() {
        let filter = marketplace_filter(
            &Arc::default(),
            &Action::Plugin(PluginAction::FilterMarketplacePlugins {
                filter: "jira".to_string(),
            }),
        );
        assert_eq!(*filter, "jira");

        let cleared = marketplace_filter(&filter, &Action::User(UserAction::LogoutSuccess));
        assert!(cleared.is_empty());
    }
}
