//! Request actions
//!
//! Every domain partition is driven by the same three actions: issue a
//! request, receive its resolution, acknowledge a terminal outcome. The
//! domain only contributes its request enum and how to perform it.

use crate::state::{RequestStatus, Resolution};
use async_trait::async_trait;
use school_api::{Failure, SchoolClient};
use std::fmt::Debug;

/// A request a domain can issue against the backend
#[async_trait]
pub trait DomainRequest: Debug + Clone + Send + Sync + 'static {
    /// Payload stored in the partition on success
    type Data: Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Status the partition ends in when this request succeeds
    fn success_status(&self) -> RequestStatus;

    /// Short label for logs and status messages, e.g. "Fee: create"
    fn label(&self) -> String;

    /// Perform the call
    async fn perform(self, client: &SchoolClient) -> Result<Self::Data, Failure>;
}

/// Lifecycle actions of one partition
#[derive(Debug, Clone)]
pub enum RequestAction<R: DomainRequest> {
    /// Issue a request
    ///
    /// The API middleware starts the call; the reducer marks the partition
    /// pending and assigns the sequence number.
    Request(R),
    /// The call identified by `seq` finished
    Resolved {
        seq: u64,
        label: String,
        outcome: Result<Resolution<R::Data>, Failure>,
    },
    /// The view consumed the terminal status
    Acknowledge,
}

impl<R: DomainRequest> RequestAction<R> {
    /// Build the resolution action for a finished call
    pub fn resolved(seq: u64, request: &R, result: Result<R::Data, Failure>) -> Self {
        let status = request.success_status();
        Self::Resolved {
            seq,
            label: request.label(),
            outcome: result.map(|data| Resolution { data, status }),
        }
    }

    /// One-line summary for the action log
    ///
    /// Request payloads may carry passwords, so only labels are logged.
    pub fn describe(&self) -> String {
        match self {
            RequestAction::Request(request) => format!("{} requested", request.label()),
            RequestAction::Resolved {
                seq,
                label,
                outcome: Ok(resolution),
            } => format!("{} resolved #{} ({})", label, seq, resolution.status),
            RequestAction::Resolved {
                seq,
                label,
                outcome: Err(failure),
            } => format!("{} failed #{}: {}", label, seq, failure),
            RequestAction::Acknowledge => "acknowledge".to_string(),
        }
    }
}
