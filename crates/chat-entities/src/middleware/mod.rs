use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::EntitiesState;

pub mod logging;
pub mod offline_middleware;

pub use logging::LoggingMiddleware;
pub use offline_middleware::OfflineMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current entity state (read-only snapshot)
    /// - `dispatcher`: Use to queue actions that should re-enter the middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &EntitiesState, dispatcher: &Dispatcher) -> bool;
}
