use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Fee(action) => log::debug!("Action: {}", action.describe()),
            Action::Parent(action) => log::debug!("Action: {}", action.describe()),
            Action::Salary(action) => log::debug!("Action: {}", action.describe()),
            Action::Document(action) => log::debug!("Action: {}", action.describe()),
            Action::Student(action) => log::debug!("Action: {}", action.describe()),
            Action::Teacher(action) => log::debug!("Action: {}", action.describe()),
            Action::Attendance(action) => log::debug!("Action: {}", action.describe()),
            Action::Global(_) | Action::StatusBar(_) => {
                log::debug!("Action: {:?}", action)
            }
        }

        true // Always pass action through
    }
}
