//! Notification Middleware
//!
//! Turns resolutions into status bar messages: the normalized message for
//! every failure, a confirmation for every success. Resolutions the reducer
//! is going to discard produce nothing.

use crate::actions::{Action, DomainRequest, RequestAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, RequestState, RequestStatus};

#[derive(Default)]
pub struct NotificationMiddleware;

impl NotificationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

fn notify<T, R>(partition: &RequestState<T>, action: &RequestAction<R>, dispatcher: &Dispatcher)
where
    R: DomainRequest<Data = T>,
{
    let RequestAction::Resolved {
        seq,
        label,
        outcome,
    } = action
    else {
        return;
    };

    if !partition.is_latest(*seq) {
        return;
    }

    let message = match outcome {
        Ok(resolution) => StatusBarAction::success(success_message(resolution.status), label),
        Err(failure) => StatusBarAction::error(failure.message(), label),
    };
    dispatcher.dispatch(Action::StatusBar(message));
}

fn success_message(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Added => "Saved successfully",
        RequestStatus::Deleted => "Deleted successfully",
        _ => "Done",
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Fee(action) => notify(&state.fees, action, dispatcher),
            Action::Parent(action) => notify(&state.parents, action, dispatcher),
            Action::Salary(action) => notify(&state.salaries, action, dispatcher),
            Action::Document(action) => notify(&state.documents, action, dispatcher),
            Action::Student(action) => notify(&state.students, action, dispatcher),
            Action::Teacher(action) => notify(&state.teachers, action, dispatcher),
            Action::Attendance(action) => notify(&state.attendance, action, dispatcher),
            _ => {}
        }
        true
    }
}
