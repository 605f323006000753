use crate::actions::{Action, PostAction, SearchAction, UserAction};
use crate::domain_models::SearchParams;
use crate::toolkit::keyed::{
    append_unique, deleted, received_if_changed, received_many, remove_from_list, replace, reset,
    update_all,
};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Post ids of the current search, in result order
pub fn results(prior: &Arc<Vec<String>>, action: &Action) -> Arc<Vec<String>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchPosts { page, is_getting_more }) => {
            merge_order(prior, &page.order, *is_getting_more)
        }
        Action::Search(SearchAction::RemoveSearchPosts) => reset(prior),
        Action::Post(PostAction::PostRemoved(post)) => remove_from_list(prior, &post.id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// File ids of the current file search, in result order
pub fn file_results(prior: &Arc<Vec<String>>, action: &Action) -> Arc<Vec<String>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchFiles { order, is_getting_more }) => {
            merge_order(prior, order, *is_getting_more)
        }
        Action::Search(SearchAction::RemoveSearchFiles) => reset(prior),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Flagged post ids
pub fn flagged(prior: &Arc<Vec<String>>, action: &Action) -> Arc<Vec<String>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchFlaggedPosts(list)) => {
            replace(prior, list.order.clone())
        }
        Action::Post(PostAction::PostRemoved(post)) => remove_from_list(prior, &post.id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Pinned post ids per channel
pub fn pinned(prior: &Arc<IdMap<Vec<String>>>, action: &Action) -> Arc<IdMap<Vec<String>>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchPinnedPosts { channel_id, pinned }) => {
            received_if_changed(prior, channel_id, pinned.order.clone())
        }
        Action::Post(PostAction::PostRemoved(post)) => update_all(prior, |_, ids| {
            ids.retain(|id| *id != post.id);
        }),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Matched terms per result post, used for highlighting
pub fn matches(prior: &Arc<IdMap<Vec<String>>>, action: &Action) -> Arc<IdMap<Vec<String>>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchPosts { page, is_getting_more }) => {
            if *is_getting_more {
                received_many(prior, page.matches.clone())
            } else {
                replace(prior, page.matches.clone())
            }
        }
        Action::Search(SearchAction::RemoveSearchPosts) => reset(prior),
        Action::Post(PostAction::PostRemoved(post)) => deleted(prior, &post.id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Last search terms per team
pub fn current(prior: &Arc<IdMap<SearchParams>>, action: &Action) -> Arc<IdMap<SearchParams>> {
    match action {
        Action::Search(SearchAction::ReceivedSearchTerm { team_id, params }) => {
            received_if_changed(prior, team_id, params.clone())
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Whether a request for the next page of results is in flight
pub fn is_getting_more(prior: &Arc<bool>, action: &Action) -> Arc<bool> {
    match action {
        Action::Search(SearchAction::SearchPostsRequest { is_getting_more }) => {
            replace(prior, *is_getting_more)
        }
        Action::Search(SearchAction::ReceivedSearchPosts { .. }) => replace(prior, false),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

fn merge_order(prior: &Arc<Vec<String>>, order: &[String], is_getting_more: bool) -> Arc<Vec<String>> {
    if is_getting_more {
        replace(prior, append_unique(prior, order))
    } else {
        replace(prior, order.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::search::SearchPostsPage;
    use crate::domain_models::{Post, PostList};
    use pretty_assertions::assert_eq;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn search_page(order: &[&str], is_getting_more: bool) -> Action {
        let matches = order
            .iter()
            .map(|id| (id.to_string(), ids(&["term"])))
            .collect();
        Action::Search(SearchAction::ReceivedSearchPosts {
            page: SearchPostsPage {
                order: ids(order),
                matches,
            },
            is_getting_more,
        })
    }

    #[test]
    fn test_new_search_replaces_results() {
        let state = results(&Arc::default(), &search_page(&["p1", "p2"], false));
        let state = results(&state, &search_page(&["p3"], false));
        assert_eq!(*state, ids(&["p3"]));
    }

    #[test]
    fn test_getting_more_appends_results() {
        let state = results(&Arc::default(), &search_page(&["p1", "p2"], false));
        let state = results(&state, &search_page(&["p2", "p3"], true));
        assert_eq!(*state, ids(&["p1", "p2", "p3"]));

        let found = matches(&Arc::default(), &search_page(&["p1"], false));
        let found = matches(&found, &search_page(&["p2"], true));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_paging_flag_follows_requests() {
        let flag = is_getting_more(
            &Arc::default(),
            &Action::Search(SearchAction::SearchPostsRequest {
                is_getting_more: true,
            }),
        );
        assert!(*flag);

        let flag = is_getting_more(&flag, &search_page(&["p1"], true));
        assert!(!*flag);
    }

    #[test]
    fn test_remove_search_posts_clears_results_and_matches() {
        let action = search_page(&["p1"], false);
        let state = results(&Arc::default(), &action);
        let found = matches(&Arc::default(), &action);

        let clear = Action::Search(SearchAction::RemoveSearchPosts);
        assert!(results(&state, &clear).is_empty());
        assert!(matches(&found, &clear).is_empty());
    }

    #[test]
    fn test_file_results() {
        let state = file_results(
            &Arc::default(),
            &Action::Search(SearchAction::ReceivedSearchFiles {
                order: ids(&["f1"]),
                is_getting_more: false,
            }),
        );
        assert_eq!(*state, ids(&["f1"]));
        assert!(file_results(&state, &Action::Search(SearchAction::RemoveSearchFiles)).is_empty());
    }

    #[test]
    fn test_post_removed_drops_post_everywhere() {
        let removed = Action::Post(PostAction::PostRemoved(Post::new("p1")));

        let state = results(&Arc::default(), &search_page(&["p1", "p2"], false));
        assert_eq!(*results(&state, &removed), ids(&["p2"]));

        let found = matches(&Arc::default(), &search_page(&["p1", "p2"], false));
        assert!(!matches(&found, &removed).contains_key("p1"));

        let flags = flagged(
            &Arc::default(),
            &Action::Search(SearchAction::ReceivedSearchFlaggedPosts(PostList {
                order: ids(&["p1"]),
            })),
        );
        assert!(flagged(&flags, &removed).is_empty());

        let pins = pinned(
            &Arc::default(),
            &Action::Search(SearchAction::ReceivedSearchPinnedPosts {
                channel_id: "c1".to_string(),
                pinned: PostList {
                    order: ids(&["p1", "p3"]),
                },
            }),
        );
        assert_eq!(pinned(&pins, &removed)["c1"], ids(&["p3"]));
    }

    #[test]
    fn test_search_terms_per_team() {
        let params = SearchParams {
            terms: "release notes".to_string(),
            ..Default::default()
        };
        let action = Action::Search(SearchAction::ReceivedSearchTerm {
            team_id: "team1".to_string(),
            params,
        });
        let state = current(&Arc::default(), &action);
        assert_eq!(state["team1"].terms, "release notes");
        assert!(Arc::ptr_eq(&state, &current(&state, &action)));
    }
}
