//! Replaying newline-delimited wire actions through a store

use anyhow::{bail, Context, Result};
use chat_entities::{Action, RawAction, Store};
use serde::Serialize;
use std::io::BufRead;

/// Counters for one replay run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    pub dispatched: usize,
    pub skipped: usize,
    pub unknown: usize,
}

/// Dispatch every action read from `reader`, one JSON object per line.
///
/// Blank lines are ignored. A line that is not a valid action is skipped with
/// a warning, or aborts the replay when `strict` is set.
pub fn replay<R: BufRead>(store: &mut Store, reader: R, strict: bool) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: RawAction = match serde_json::from_str(&line) {
            Ok(raw) => raw,
            Err(e) if strict => bail!("Line {} is not a valid action: {}", line_no, e),
            Err(e) => {
                log::warn!("Skipping line {}: {}", line_no, e);
                stats.skipped += 1;
                continue;
            }
        };

        let action = Action::from_raw(&raw);
        if matches!(action, Action::Unknown(_)) {
            stats.unknown += 1;
        }
        store.dispatch(action);
        stats.dispatched += 1;
    }

    log::info!(
        "Replay finished: {} dispatched, {} skipped, {} unknown",
        stats.dispatched,
        stats.skipped,
        stats.unknown
    );
    Ok(stats)
}
