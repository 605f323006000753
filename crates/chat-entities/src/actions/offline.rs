//! Offline-capable request descriptors
//!
//! An [`OfflineAction`] pairs an effect (the request to run) with the action
//! to commit once it succeeds and an optional rollback action for failures.
//! The offline middleware runs the effect; reducers never see the descriptor.

use super::Action;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The side effect to run, returning the server response
pub type Effect = Arc<dyn Fn() -> anyhow::Result<Value> + Send + Sync>;

/// Builds the commit action from the effect's response
pub type Commit = Arc<dyn Fn(Value) -> Action + Send + Sync>;

/// Misconfigured offline action. These are call-site bugs and are not retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfflineError {
    #[error("offline action `{0}` has no effect to run")]
    MissingEffect(String),
    #[error("offline action `{0}` has no commit action")]
    MissingCommit(String),
}

#[derive(Clone)]
pub struct OfflineAction {
    name: String,
    effect: Effect,
    commit: Commit,
    rollback: Option<Box<Action>>,
}

impl OfflineAction {
    pub fn builder(name: impl Into<String>) -> OfflineActionBuilder {
        OfflineActionBuilder {
            name: name.into(),
            effect: None,
            commit: None,
            rollback: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the effect and produce the follow-up action
    pub fn run(&self) -> Option<Action> {
        match (self.effect)() {
            Ok(response) => Some((self.commit)(response)),
            Err(e) => {
                log::warn!("Offline action {} failed: {:#}", self.name, e);
                self.rollback.as_deref().cloned()
            }
        }
    }
}

impl fmt::Debug for OfflineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfflineAction")
            .field("name", &self.name)
            .field("rollback", &self.rollback)
            .finish_non_exhaustive()
    }
}

pub struct OfflineActionBuilder {
    name: String,
    effect: Option<Effect>,
    commit: Option<Commit>,
    rollback: Option<Box<Action>>,
}

impl OfflineActionBuilder {
    pub fn effect<F>(mut self, effect: F) -> Self
    where
        F: Fn() -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.effect = Some(Arc::new(effect));
        self
    }

    /// Commit action built from the response
    pub fn commit_with<F>(mut self, commit: F) -> Self
    where
        F: Fn(Value) -> Action + Send + Sync + 'static,
    {
        self.commit = Some(Arc::new(commit));
        self
    }

    /// Fixed commit action, the response is ignored
    pub fn commit(self, action: Action) -> Self {
        self.commit_with(move |_| action.clone())
    }

    pub fn rollback(mut self, action: Action) -> Self {
        self.rollback = Some(Box::new(action));
        self
    }

    pub fn build(self) -> Result<OfflineAction, OfflineError> {
        let effect = self
            .effect
            .ok_or_else(|| OfflineError::MissingEffect(self.name.clone()))?;
        let commit = self
            .commit
            .ok_or_else(|| OfflineError::MissingCommit(self.name.clone()))?;

        Ok(OfflineAction {
            name: self.name,
            effect,
            commit,
            rollback: self.rollback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ThemeAction, UserAction};
    use crate::domain_models::Theme;
    use serde_json::json;

    #[test]
    fn test_missing_effect_is_rejected() {
        let err = OfflineAction::builder("SAVE_THEME")
            .commit(Action::User(UserAction::LogoutSuccess))
            .build()
            .unwrap_err();
        assert_eq!(err, OfflineError::MissingEffect("SAVE_THEME".to_string()));
        assert_eq!(err.to_string(), "offline action `SAVE_THEME` has no effect to run");
    }

    #[test]
    fn test_missing_commit_is_rejected() {
        let err = OfflineAction::builder("SAVE_THEME")
            .effect(|| Ok(json!({})))
            .build()
            .unwrap_err();
        assert_eq!(err, OfflineError::MissingCommit("SAVE_THEME".to_string()));
    }

    #[test]
    fn test_run_commits_response() {
        let offline = OfflineAction::builder("SAVE_THEME")
            .effect(|| Ok(json!({"id": "t1", "type": "onyx"})))
            .commit_with(|response| {
                Action::Theme(ThemeAction::ReceivedTheme(
                    serde_json::from_value(response).unwrap_or_default(),
                ))
            })
            .build()
            .unwrap();

        let Some(Action::Theme(ThemeAction::ReceivedTheme(theme))) = offline.run() else {
            panic!("expected a committed theme");
        };
        assert_eq!(theme, Theme::new("t1", "onyx"));
    }

    #[test]
    fn test_run_rolls_back_on_failure() {
        let offline = OfflineAction::builder("SAVE_THEME")
            .effect(|| anyhow::bail!("network down"))
            .commit(Action::User(UserAction::LogoutSuccess))
            .rollback(Action::Theme(ThemeAction::ReceivedThemeDeleted {
                id: "t1".to_string(),
            }))
            .build()
            .unwrap();

        assert!(matches!(
            offline.run(),
            Some(Action::Theme(ThemeAction::ReceivedThemeDeleted { .. }))
        ));
    }

    #[test]
    fn test_run_without_rollback_yields_nothing_on_failure() {
        let offline = OfflineAction::builder("SAVE_THEME")
            .effect(|| anyhow::bail!("network down"))
            .commit(Action::User(UserAction::LogoutSuccess))
            .build()
            .unwrap();
        assert!(offline.run().is_none());
    }
}
