use crate::domain_models::{ThreadsCount, UserThread};
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use std::sync::Arc;

pub fn get_threads(state: &EntitiesState) -> &Arc<IdMap<UserThread>> {
    &state.threads.threads
}

pub fn get_thread<'a>(state: &'a EntitiesState, id: &str) -> Option<&'a UserThread> {
    state.threads.threads.get(id)
}

/// Totals for a team, zero when the team was never loaded
pub fn get_thread_counts_in_team(state: &EntitiesState, team_id: &str) -> ThreadsCount {
    state
        .threads
        .counts
        .get(team_id)
        .copied()
        .unwrap_or_default()
}

/// Threads of a team, most recent reply first
pub fn make_get_threads_in_team(
) -> Selector<EntitiesState, String, impl InputEq, Arc<Vec<UserThread>>> {
    Selector::new(
        |state: &EntitiesState, team_id: &String| {
            (
                Arc::clone(&state.threads.threads),
                Arc::clone(&state.threads.thread_ids_in_team),
                team_id.clone(),
            )
        },
        |(threads, ids_in_team, team_id)| {
            let mut in_team: Vec<UserThread> = ids_in_team
                .get(team_id)
                .into_iter()
                .flatten()
                .filter_map(|id| threads.get(id))
                .cloned()
                .collect();
            in_team.sort_by(|a, b| b.last_reply_at.cmp(&a.last_reply_at));
            Arc::new(in_team)
        },
    )
}

/// Threads of a team that have unread replies, most recent reply first
pub fn make_get_unread_threads_in_team(
) -> Selector<EntitiesState, String, impl InputEq, Arc<Vec<UserThread>>> {
    let threads_in_team = make_get_threads_in_team();
    Selector::new(
        move |state: &EntitiesState, team_id: &String| threads_in_team.select_with(state, team_id),
        |threads| {
            Arc::new(
                threads
                    .iter()
                    .filter(|thread| thread.unread_replies > 0)
                    .cloned()
                    .collect(),
            )
        },
    )
}
