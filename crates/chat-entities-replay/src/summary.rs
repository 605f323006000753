//! Human and JSON summaries of the entity state after a replay

use chat_entities::utils::Localizer;
use chat_entities::EntitiesState;
use serde::Serialize;

use crate::replay::ReplayStats;

/// Number of entries held by one slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceSize {
    pub domain: &'static str,
    pub slice: &'static str,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub stats: ReplayStats,
    pub slices: Vec<SliceSize>,
}

fn slice(domain: &'static str, slice: &'static str, size: usize) -> SliceSize {
    SliceSize { domain, slice, size }
}

/// Sizes of every collection slice, in state order
pub fn slice_sizes(state: &EntitiesState) -> Vec<SliceSize> {
    vec![
        slice("themes", "themes", state.themes.themes.len()),
        slice("plugins", "statuses", state.plugins.statuses.len()),
        slice("plugins", "marketplace_plugins", state.plugins.marketplace_plugins.len()),
        slice("threads", "threads", state.threads.threads.len()),
        slice("threads", "thread_ids_in_team", state.threads.thread_ids_in_team.len()),
        slice("threads", "counts", state.threads.counts.len()),
        slice("files", "files", state.files.files.len()),
        slice("files", "file_ids_by_post_id", state.files.file_ids_by_post_id.len()),
        slice("files", "files_from_search", state.files.files_from_search.len()),
        slice("preferences", "my_preferences", state.preferences.my_preferences.len()),
        slice("jobs", "jobs", state.jobs.jobs.len()),
        slice("jobs", "jobs_by_type_list", state.jobs.jobs_by_type_list.len()),
        slice("search", "results", state.search.results.len()),
        slice("search", "file_results", state.search.file_results.len()),
        slice("search", "flagged", state.search.flagged.len()),
        slice("search", "pinned", state.search.pinned.len()),
        slice("search", "matches", state.search.matches.len()),
        slice("search", "current", state.search.current.len()),
        slice("general", "supported_timezones", state.general.supported_timezones.len()),
        slice("channels", "channels", state.channels.channels.len()),
        slice("channels", "channels_last_fetch", state.channels.channels_last_fetch.len()),
        slice("emojis", "custom_emoji", state.emojis.custom_emoji.len()),
        slice("emojis", "non_existent_emoji", state.emojis.non_existent_emoji.len()),
    ]
}

/// Plain text summary; empty slices are left out
pub fn render_text(localizer: &Localizer, report: &Report) -> String {
    let dispatched = report.stats.dispatched.to_string();
    let skipped = report.stats.skipped.to_string();
    let unknown = report.stats.unknown.to_string();

    let mut out = localizer.localize_with(
        "replay.summary.header",
        "Replayed {dispatched} actions ({skipped} skipped, {unknown} unknown)",
        &[
            ("dispatched", &dispatched),
            ("skipped", &skipped),
            ("unknown", &unknown),
        ],
    );
    out.push('\n');

    let filled: Vec<&SliceSize> = report.slices.iter().filter(|s| s.size > 0).collect();
    if filled.is_empty() {
        out.push_str(localizer.localize("replay.summary.empty", "The store is empty"));
        out.push('\n');
        return out;
    }

    for size in filled {
        out.push_str(&format!("  {}.{}: {}\n", size.domain, size.slice, size.size));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_entities::actions::{Action, GeneralAction};
    use chat_entities::reducers::reduce;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[test]
    fn test_slice_sizes_cover_every_collection() {
        let state = reduce(
            &Arc::default(),
            &Action::General(GeneralAction::ReceivedSupportedTimezones(vec![
                "UTC".to_string(),
            ])),
        );
        let sizes = slice_sizes(&state);
        let filled: Vec<_> = sizes.iter().filter(|s| s.size > 0).collect();

        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].slice, "supported_timezones");
    }

    #[test]
    fn test_render_text() {
        let report = Report {
            stats: ReplayStats {
                dispatched: 2,
                skipped: 0,
                unknown: 1,
            },
            slices: vec![slice("themes", "themes", 3), slice("jobs", "jobs", 0)],
        };

        let text = render_text(&Localizer::default(), &report);
        assert_eq!(
            text,
            "Replayed 2 actions (0 skipped, 1 unknown)\n  themes.themes: 3\n"
        );
    }

    #[test]
    fn test_render_text_localized_empty() {
        let report = Report {
            stats: ReplayStats::default(),
            slices: vec![],
        };
        let localizer = Localizer::new(
            "de",
            HashMap::from([(
                "replay.summary.empty".to_string(),
                "Der Speicher ist leer".to_string(),
            )]),
        );

        let text = render_text(&localizer, &report);
        assert!(text.ends_with("Der Speicher ist leer\n"));
    }
}
