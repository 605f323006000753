//! Entity state snapshots
//!
//! The whole [`EntitiesState`] is written as one JSON document together with
//! a small metadata header. Loading a snapshot reproduces the reducer shape:
//! slices missing from an older snapshot start empty.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::state::EntitiesState;

const SNAPSHOT_VERSION: u32 = 1;

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub saved_at: DateTime<Utc>,
    pub version: u32,
}

/// Complete snapshot with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    #[serde(default)]
    pub entities: Arc<EntitiesState>,
}

impl Snapshot {
    pub fn new(entities: Arc<EntitiesState>) -> Self {
        Self {
            meta: SnapshotMeta {
                saved_at: Utc::now(),
                version: SNAPSHOT_VERSION,
            },
            entities,
        }
    }

    /// Load a snapshot from `path`
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {:?}", path))?;
        let snapshot: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot file: {:?}", path))?;

        if snapshot.meta.version > SNAPSHOT_VERSION {
            bail!(
                "Snapshot {:?} has version {}, newest supported is {}",
                path,
                snapshot.meta.version,
                SNAPSHOT_VERSION
            );
        }

        log::info!(
            "Loaded snapshot from {:?} (saved {})",
            path,
            snapshot.meta.saved_at.to_rfc3339()
        );
        Ok(snapshot)
    }

    /// Save the snapshot to `path`, creating parent directories
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.saved_at = Utc::now();

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write snapshot file: {:?}", path))?;

        log::info!("Saved snapshot to {:?}", path);
        Ok(())
    }
}

/// Rehydrate entity state from `path`, or start empty when there is no file
pub fn load_entities(path: &Path) -> Result<Arc<EntitiesState>> {
    if !path.exists() {
        log::info!("No snapshot at {:?}, starting empty", path);
        return Ok(Arc::default());
    }
    Ok(Snapshot::load_from_path(path)?.entities)
}

/// Write `entities` to `path`
pub fn save_entities(path: &Path, entities: &Arc<EntitiesState>) -> Result<()> {
    Snapshot::new(Arc::clone(entities)).save_to_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ChannelAction, PreferenceAction};
    use crate::domain_models::{Channel, Preference};
    use crate::reducers::reduce;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn populated() -> Arc<EntitiesState> {
        let state = reduce(
            &Arc::default(),
            &Action::Channel(ChannelAction::ReceivedChannel(Channel {
                id: "c1".to_string(),
                display_name: "Town Square".to_string(),
                ..Default::default()
            })),
        );
        reduce(
            &state,
            &Action::Preference(PreferenceAction::ReceivedPreferences(vec![Preference::new(
                "u1",
                "notifications",
                "email",
                "true",
            )])),
        )
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");
        let state = populated();

        save_entities(&path, &state).unwrap();
        let loaded = load_entities(&path).unwrap();

        assert_eq!(*loaded, *state);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load_entities(&dir.path().join("absent.json")).unwrap();
        assert_eq!(*loaded, EntitiesState::default());
    }

    #[test]
    fn test_partial_snapshot_fills_missing_slices() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "meta": {"saved_at": "2024-01-01T00:00:00Z", "version": 1},
                "entities": {"general": {"supported_timezones": ["UTC"]}}
            }"#,
        )
        .unwrap();

        let loaded = load_entities(&path).unwrap();
        assert_eq!(*loaded.general.supported_timezones, vec!["UTC".to_string()]);
        assert!(loaded.themes.themes.is_empty());
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{"meta": {"saved_at": "2024-01-01T00:00:00Z", "version": 99}}"#,
        )
        .unwrap();

        let err = load_entities(&path).unwrap_err();
        assert!(err.to_string().contains("version 99"));
    }

    #[test]
    fn test_unreadable_snapshot_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "not json").unwrap();

        let err = load_entities(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse snapshot file"));
    }
}
