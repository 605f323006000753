//! Dispatcher for middleware action dispatch
//!
//! When middleware (or a delayed action) needs to dispatch follow-up actions,
//! it queues them on the Dispatcher. The store drains the queue after each
//! reduce and feeds the queued actions back through the full middleware chain
//! in FIFO order.

use crate::actions::Action;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

/// Queue of actions that re-enter the middleware chain
///
/// Clones share one queue, so a clone handed to a background task feeds the
/// same store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
    action_rx: Arc<Mutex<Receiver<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            action_tx,
            action_rx: Arc::new(Mutex::new(action_rx)),
        }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to queue action: {}", e);
        }
    }

    /// Take every queued action, oldest first
    pub fn drain(&self) -> Vec<Action> {
        let action_rx = self.action_rx.lock().unwrap_or_else(PoisonError::into_inner);
        action_rx.try_iter().collect()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
