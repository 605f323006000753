use crate::actions::{Action, PostAction, ThreadAction, UserAction};
use crate::domain_models::{ThreadsCount, UserThread};
use crate::state::ThreadsState;
use crate::toolkit::keyed::{
    append_unique, deleted, received_entities, received_entity, received_if_changed, reset,
    update_all, update_each, update_in,
};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Reducer for the whole threads record.
///
/// Threads do not know their team, so marking a team read needs the team's
/// thread ids from `thread_ids_in_team`. Every other action goes through the
/// per-slice reducers unchanged.
pub fn threads_state(prior: &Arc<ThreadsState>, action: &Action) -> Arc<ThreadsState> {
    let next = ThreadsState::reduce(prior, action);
    let Action::Thread(ThreadAction::AllTeamThreadsRead { team_id }) = action else {
        return next;
    };

    let ids = prior.thread_ids_in_team.get(team_id).into_iter().flatten();
    let threads = update_each(&next.threads, ids.map(String::as_str), |thread| {
        thread.unread_replies = 0;
        thread.unread_mentions = 0;
    });
    if Arc::ptr_eq(&threads, &next.threads) {
        return next;
    }

    Arc::new(ThreadsState {
        threads,
        ..ThreadsState::clone(&next)
    })
}

/// Threads keyed by root post id
pub fn threads(prior: &Arc<IdMap<UserThread>>, action: &Action) -> Arc<IdMap<UserThread>> {
    match action {
        Action::Thread(ThreadAction::ReceivedThreads(page)) => received_entities(prior, &page.threads),
        Action::Thread(ThreadAction::ReceivedThread { thread, .. }) => received_entity(prior, thread),
        Action::Thread(ThreadAction::ReadChangedThread(change)) => {
            update_in(prior, &change.id, |thread| {
                thread.last_viewed_at = change.last_viewed_at;
                thread.unread_replies = change.new_unread_replies;
                thread.unread_mentions = change.new_unread_mentions;
            })
        }
        Action::Thread(ThreadAction::FollowChangedThread { id, following, .. }) => {
            update_in(prior, id, |thread| thread.is_following = *following)
        }
        Action::Post(PostAction::PostRemoved(post)) => deleted(prior, &post.id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Thread ids per team, in the order they were first received
pub fn thread_ids_in_team(
    prior: &Arc<IdMap<Vec<String>>>,
    action: &Action,
) -> Arc<IdMap<Vec<String>>> {
    match action {
        Action::Thread(ThreadAction::ReceivedThreads(page)) => {
            let ids: Vec<String> = page.threads.iter().map(|thread| thread.id.clone()).collect();
            add_thread_ids(prior, &page.team_id, &ids)
        }
        Action::Thread(ThreadAction::ReceivedThread { team_id, thread }) if !thread.id.is_empty() => {
            add_thread_ids(prior, team_id, std::slice::from_ref(&thread.id))
        }
        Action::Post(PostAction::PostRemoved(post)) => update_all(prior, |_, ids| {
            ids.retain(|id| *id != post.id);
        }),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Thread totals per team
pub fn counts(prior: &Arc<IdMap<ThreadsCount>>, action: &Action) -> Arc<IdMap<ThreadsCount>> {
    match action {
        Action::Thread(ThreadAction::ReceivedThreads(page)) => received_if_changed(
            prior,
            &page.team_id,
            ThreadsCount {
                total: page.total,
                total_unread_threads: page.total_unread_threads,
                total_unread_mentions: page.total_unread_mentions,
            },
        ),
        Action::Thread(ThreadAction::ReadChangedThread(change)) => {
            update_in(prior, &change.team_id, |count| {
                if change.prev_unread_replies > 0 && change.new_unread_replies == 0 {
                    count.total_unread_threads = count.total_unread_threads.saturating_sub(1);
                } else if change.prev_unread_replies == 0 && change.new_unread_replies > 0 {
                    count.total_unread_threads += 1;
                }
                count.total_unread_mentions = count
                    .total_unread_mentions
                    .saturating_sub(change.prev_unread_mentions)
                    + change.new_unread_mentions;
            })
        }
        Action::Thread(ThreadAction::AllTeamThreadsRead { team_id }) => {
            update_in(prior, team_id, |count| {
                count.total_unread_threads = 0;
                count.total_unread_mentions = 0;
            })
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

fn add_thread_ids(
    prior: &Arc<IdMap<Vec<String>>>,
    team_id: &str,
    ids: &[String],
) -> Arc<IdMap<Vec<String>>> {
    if team_id.is_empty() {
        log::debug!("threads: ignoring thread ids without a team");
        return Arc::clone(prior);
    }

    let existing = prior.get(team_id).map(Vec::as_slice).unwrap_or_default();
    received_if_changed(prior, team_id, append_unique(existing, ids))
}
