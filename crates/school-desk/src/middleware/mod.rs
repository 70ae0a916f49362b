use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod logging;
pub mod notification_middleware;

pub use api_middleware::ApiMiddleware;
pub use logging::LoggingMiddleware;
pub use notification_middleware::NotificationMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware sees the state as it was before the action is reduced. Long
/// running work must not block here; spawn it and dispatch the result.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to queue follow-up actions for the store
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
