use crate::actions::{Action, RawAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::EntitiesState;
use std::sync::Arc;

/// Store - holds the entity state and manages the Redux loop
pub struct Store {
    state: Arc<EntitiesState>,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: Arc<EntitiesState>) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &Arc<EntitiesState> {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(&self.state, &action);
        }

        // Process any actions dispatched by middleware
        for action in self.dispatcher.drain() {
            self.dispatch(action);
        }
    }

    /// Decode and dispatch a wire action
    pub fn dispatch_raw(&mut self, raw: &RawAction) {
        self.dispatch(Action::from_raw(raw));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Arc::default())
    }
}
