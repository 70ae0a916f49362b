//! Request Reducer
//!
//! One reducer for every domain partition.

use crate::actions::{DomainRequest, RequestAction};
use crate::state::RequestState;

pub fn reduce_request<R: DomainRequest>(
    mut state: RequestState<R::Data>,
    action: &RequestAction<R>,
) -> RequestState<R::Data> {
    match action {
        RequestAction::Request(request) => {
            let seq = state.begin();
            log::debug!("{} started (#{})", request.label(), seq);
        }
        RequestAction::Resolved {
            seq,
            label,
            outcome,
        } => {
            if !state.resolve(*seq, outcome.clone()) {
                log::debug!(
                    "{}: discarding stale resolution #{} (latest is #{})",
                    label,
                    seq,
                    state.last_issued()
                );
            }
        }
        RequestAction::Acknowledge => {
            state.acknowledge();
        }
    }
    state
}
