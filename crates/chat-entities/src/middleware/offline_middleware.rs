//! Offline Middleware
//!
//! Runs the effect of every [`OfflineAction`](crate::actions::OfflineAction)
//! and queues the resulting commit (or rollback) action. The descriptor itself
//! is consumed and never reaches the reducer.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::EntitiesState;

#[derive(Debug, Default)]
pub struct OfflineMiddleware;

impl OfflineMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for OfflineMiddleware {
    fn handle(&mut self, action: &Action, _state: &EntitiesState, dispatcher: &Dispatcher) -> bool {
        let Action::Offline(offline) = action else {
            return true;
        };

        log::debug!("OfflineMiddleware: running {}", offline.name());
        match offline.run() {
            Some(follow_up) => dispatcher.dispatch(follow_up),
            None => log::debug!("OfflineMiddleware: {} failed without rollback", offline.name()),
        }

        false
    }
}
