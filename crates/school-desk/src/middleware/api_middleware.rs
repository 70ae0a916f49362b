//! API Middleware
//!
//! Starts the backend call for every domain request:
//! - reads the sequence number the reducer is about to assign
//! - performs the call on the middleware's tokio runtime
//! - dispatches the resolution tagged with that sequence number
//!
//! Failures never escape a task; they travel back as `Err` resolutions.

use crate::actions::{Action, DomainRequest, RequestAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, RequestState};
use anyhow::Context;
use school_api::SchoolClient;
use tokio::runtime::Runtime;

/// Middleware for all backend operations
pub struct ApiMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: SchoolClient,
}

impl ApiMiddleware {
    pub fn new(client: SchoolClient) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self { runtime, client })
    }

    /// Perform `request` in the background and dispatch its resolution
    fn spawn<R>(
        &self,
        request: &R,
        partition: &RequestState<R::Data>,
        dispatcher: &Dispatcher,
        wrap: fn(RequestAction<R>) -> Action,
    ) where
        R: DomainRequest,
    {
        // The reducer runs after the middleware chain and assigns exactly this number
        let seq = partition.next_seq();
        let request = request.clone();
        let client = self.client.clone();
        let dispatcher = dispatcher.clone();

        log::info!("ApiMiddleware: {} (#{})", request.label(), seq);
        self.runtime.spawn(async move {
            let result = request.clone().perform(&client).await;
            if let Err(failure) = &result {
                log::warn!("ApiMiddleware: {} failed: {}", request.label(), failure);
            }
            dispatcher.dispatch(wrap(RequestAction::resolved(seq, &request, result)));
        });
    }
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Fee(RequestAction::Request(request)) => {
                self.spawn(request, &state.fees, dispatcher, Action::Fee)
            }
            Action::Parent(RequestAction::Request(request)) => {
                self.spawn(request, &state.parents, dispatcher, Action::Parent)
            }
            Action::Salary(RequestAction::Request(request)) => {
                self.spawn(request, &state.salaries, dispatcher, Action::Salary)
            }
            Action::Document(RequestAction::Request(request)) => {
                self.spawn(request, &state.documents, dispatcher, Action::Document)
            }
            Action::Student(RequestAction::Request(request)) => {
                self.spawn(request, &state.students, dispatcher, Action::Student)
            }
            Action::Teacher(RequestAction::Request(request)) => {
                self.spawn(request, &state.teachers, dispatcher, Action::Teacher)
            }
            Action::Attendance(RequestAction::Request(request)) => {
                self.spawn(request, &state.attendance, dispatcher, Action::Attendance)
            }
            _ => {}
        }

        // Let the action reach the reducer, which marks the partition pending
        true
    }
}
