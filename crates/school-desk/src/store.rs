use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Store - holds application state and manages the Redux loop
///
/// Actions queued through the [`Dispatcher`] (e.g. resolutions of network
/// calls) are applied by [`Store::process_pending`] or [`Store::wait_until`],
/// never in the middle of another dispatch.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
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
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }
    }

    /// Apply every queued action without blocking
    ///
    /// Returns the number of actions processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            processed += 1;
        }
        processed
    }

    /// Apply queued actions as they arrive until `predicate` holds
    ///
    /// Returns `false` if `timeout` elapsed first.
    pub fn wait_until<F>(&mut self, timeout: Duration, predicate: F) -> bool
    where
        F: Fn(&AppState) -> bool,
    {
        let deadline = Instant::now() + timeout;
        self.process_pending();

        while !predicate(&self.state) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.action_rx.recv_timeout(remaining) {
                Ok(action) => self.dispatch(action),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }
}
