//! Delayed, cancelable single-shot action
//!
//! Scheduling again replaces the pending fire; only the last scheduled body
//! runs. Must be used from within a tokio runtime.

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;

#[derive(Debug, Default)]
pub struct DelayedAction {
    pending: Option<JoinHandle<()>>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `body` once after `delay`, cancelling any pending fire
    pub fn fire_after<F>(&mut self, delay: Duration, body: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            body();
        }));
    }

    /// Dispatch `action` once after `delay`, cancelling any pending fire
    pub fn dispatch_after(&mut self, delay: Duration, dispatcher: Dispatcher, action: Action) {
        self.fire_after(delay, move || dispatcher.dispatch(action));
    }

    /// Cancel the pending fire. The body is guaranteed not to run afterwards.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a fire is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        let make = move || {
            let count = Arc::clone(&handle);
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (count, body) = counter();
        let mut delayed = DelayedAction::new();

        delayed.fire_after(Duration::from_millis(100), body());
        assert!(delayed.is_pending());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!delayed.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_pending_fire() {
        let (count, body) = counter();
        let mut delayed = DelayedAction::new();

        delayed.fire_after(Duration::from_millis(100), body());
        tokio::time::sleep(Duration::from_millis(60)).await;
        delayed.fire_after(Duration::from_millis(100), body());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_fire() {
        let (count, body) = counter();
        let mut delayed = DelayedAction::new();

        delayed.fire_after(Duration::from_millis(100), body());
        delayed.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!delayed.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_after_queues_action() {
        let dispatcher = Dispatcher::new();
        let mut delayed = DelayedAction::new();

        delayed.dispatch_after(
            Duration::from_millis(10),
            dispatcher.clone(),
            Action::User(crate::actions::UserAction::LogoutSuccess),
        );
        tokio::time::sleep(Duration::from_millis(20)).await;

        let queued = dispatcher.drain();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].kind(), "LOGOUT_SUCCESS");
    }
}
