use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::EntitiesState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware {
    dispatched: usize,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions seen so far
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &EntitiesState, _dispatcher: &Dispatcher) -> bool {
        self.dispatched += 1;
        match action {
            Action::Batch(actions) => log::debug!("Action: {} ({} actions)", action.kind(), actions.len()),
            Action::Unknown(kind) => log::debug!("Action: {} (not handled by any slice)", kind),
            _ => log::debug!("Action: {}", action.kind()),
        }
        log::trace!("Action payload: {:?}", action);

        true // Always pass action through
    }
}
