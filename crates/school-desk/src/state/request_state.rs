//! Request State
//!
//! The lifecycle record every domain partition shares. Fields are private:
//! views read through the accessors, and only the reducers in this crate can
//! move a partition from one phase to the next.

use school_api::Failure;
use strum::{Display, EnumString};

/// Coarse lifecycle tag consumed by views to decide navigation and popups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success,
    /// Soft failure: the server refused the operation
    Failed,
    /// Transport failure or timeout
    Error,
    Added,
    Deleted,
    Logout,
}

impl RequestStatus {
    /// Terminal statuses stay until acknowledged or until the next request starts
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Idle | RequestStatus::Pending)
    }
}

/// Successful outcome of a request: the payload and the status it ends in
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    pub data: T,
    pub status: RequestStatus,
}

/// Lifecycle state of one partition
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    data: Option<T>,
    loading: bool,
    failure: Option<Failure>,
    status: RequestStatus,
    /// Sequence number of the most recently issued request
    last_issued: u64,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            failure: None,
            status: RequestStatus::Idle,
            last_issued: 0,
        }
    }
}

impl<T> RequestState<T> {
    /// Payload of the latest resolution; `None` after a failure
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last transport failure or timeout
    pub fn error(&self) -> Option<String> {
        self.failure
            .as_ref()
            .filter(|f| !f.is_soft())
            .map(Failure::message)
    }

    /// Message of the last soft failure
    pub fn response(&self) -> Option<String> {
        self.failure
            .as_ref()
            .filter(|f| f.is_soft())
            .map(Failure::message)
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Sequence number the next request on this partition will receive
    pub fn next_seq(&self) -> u64 {
        self.last_issued + 1
    }

    /// Whether a resolution carrying `seq` would still be applied
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.last_issued
    }

    /// Mark a new request as started and return its sequence number
    ///
    /// Clears the previous outcome, including any terminal status a view
    /// forgot to acknowledge.
    pub(crate) fn begin(&mut self) -> u64 {
        self.last_issued += 1;
        self.loading = true;
        self.failure = None;
        self.status = RequestStatus::Pending;
        self.last_issued
    }

    /// Apply the resolution of request `seq`
    ///
    /// Returns `false` and leaves the state untouched when a newer request
    /// has been issued since.
    pub(crate) fn resolve(&mut self, seq: u64, outcome: Result<Resolution<T>, Failure>) -> bool {
        if !self.is_latest(seq) {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(resolution) => {
                self.data = Some(resolution.data);
                self.failure = None;
                self.status = resolution.status;
            }
            Err(failure) => {
                self.data = None;
                self.status = if failure.is_soft() {
                    RequestStatus::Failed
                } else {
                    RequestStatus::Error
                };
                self.failure = Some(failure);
            }
        }
        true
    }

    /// Return a consumed terminal state to idle
    ///
    /// Data is kept; a pending request is not affected.
    pub(crate) fn acknowledge(&mut self) {
        if self.status.is_terminal() {
            self.status = RequestStatus::Idle;
            self.failure = None;
        }
    }

    /// Drop everything the session loaded
    ///
    /// In-flight requests are invalidated so their late resolutions are discarded.
    pub(crate) fn logout(&mut self) {
        *self = Self {
            last_issued: self.last_issued + 1,
            status: RequestStatus::Logout,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn success(data: &str, status: RequestStatus) -> Result<Resolution<String>, Failure> {
        Ok(Resolution {
            data: data.to_string(),
            status,
        })
    }

    #[test]
    fn test_begin_marks_pending() {
        let mut state = RequestState::<String>::default();
        assert_eq!(state.next_seq(), 1);

        let seq = state.begin();
        assert_eq!(seq, 1);
        assert!(state.loading());
        assert_eq!(state.status(), RequestStatus::Pending);
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_success_clears_failure() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, Err(Failure::Transport("Network Error".into())));
        assert_eq!(state.error().as_deref(), Some("Network Error"));

        let seq = state.begin();
        assert!(state.resolve(seq, success("fees", RequestStatus::Success)));
        assert!(!state.loading());
        assert_eq!(state.data().map(String::as_str), Some("fees"));
        assert!(state.error().is_none());
        assert!(state.response().is_none());
    }

    #[test]
    fn test_failure_channels() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, Err(Failure::Soft("No records".into())));
        assert_eq!(state.status(), RequestStatus::Failed);
        assert_eq!(state.response().as_deref(), Some("No records"));
        assert!(state.error().is_none());

        let seq = state.begin();
        state.resolve(seq, Err(Failure::Timeout));
        assert_eq!(state.status(), RequestStatus::Error);
        assert_eq!(state.error().as_deref(), Some("Request timed out"));
        assert!(state.response().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn test_failure_clears_previous_data() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, success("fees", RequestStatus::Success));
        let seq = state.begin();
        state.resolve(seq, Err(Failure::Transport("Network Error".into())));

        assert!(state.data().is_none());
        assert_eq!(state.error().as_deref(), Some("Network Error"));
        assert!(state.response().is_none());

        let seq = state.begin();
        state.resolve(seq, Err(Failure::Soft("No records".into())));
        assert!(state.data().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.response().as_deref(), Some("No records"));
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state = RequestState::<String>::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.resolve(second, success("second", RequestStatus::Added)));
        assert!(!state.resolve(first, success("first", RequestStatus::Added)));

        assert_eq!(state.data().map(String::as_str), Some("second"));
        assert_eq!(state.status(), RequestStatus::Added);
    }

    #[test]
    fn test_stale_resolution_does_not_end_loading() {
        let mut state = RequestState::<String>::default();
        let first = state.begin();
        let _second = state.begin();

        state.resolve(first, Err(Failure::Transport("late".into())));
        assert!(state.loading());
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_same_success_twice_is_idempotent() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, success("fees", RequestStatus::Success));
        let once = state.clone();
        state.resolve(seq, success("fees", RequestStatus::Success));
        assert_eq!(state, once);
    }

    #[test]
    fn test_acknowledge_resets_terminal_status() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, Err(Failure::Soft("Duplicate".into())));

        state.acknowledge();
        assert_eq!(state.status(), RequestStatus::Idle);
        assert!(state.response().is_none());

        state.begin();
        state.acknowledge();
        assert_eq!(state.status(), RequestStatus::Pending);
    }

    #[test]
    fn test_new_request_clears_unacknowledged_status() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.resolve(seq, success("ok", RequestStatus::Added));
        state.begin();
        assert_eq!(state.status(), RequestStatus::Pending);
    }

    #[test]
    fn test_logout_invalidates_in_flight() {
        let mut state = RequestState::<String>::default();
        let seq = state.begin();
        state.logout();

        assert_eq!(state.status(), RequestStatus::Logout);
        assert!(!state.loading());
        assert!(!state.resolve(seq, success("late", RequestStatus::Success)));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_status_names() {
        assert_eq!(RequestStatus::Added.to_string(), "added");
        assert_eq!(RequestStatus::from_str("deleted"), Ok(RequestStatus::Deleted));
        assert!(RequestStatus::Failed.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
    }
}
