//! Failure taxonomy for backend calls
//!
//! Every call through the client resolves to `Result<T, Failure>`. The three
//! variants replace the old split between an "error" and a "response" channel:
//! a caller can tell a transport problem from an application-level refusal
//! without inspecting which field happened to be filled.

use serde_json::Value;

/// Generic message used when neither the server nor the transport said anything useful
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Message used when the request never reached the server
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Message shown for a request that exceeded its explicit timeout
pub const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Outcome of a failed backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// The server answered with success but the body carries an application error
    #[error("{0}")]
    Soft(String),

    /// Network failure, non-success HTTP status, or an undecodable body
    #[error("{0}")]
    Transport(String),

    /// The request exceeded the timeout set for it
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,
}

impl Failure {
    /// Human-readable message for display
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Soft failures belong to the `response` channel, everything else to `error`
    pub fn is_soft(&self) -> bool {
        matches!(self, Failure::Soft(_))
    }
}

/// Derive the message to show for a failed call
///
/// Priority: a non-empty `message` field in the response body, then the
/// transport's own message, then [`FALLBACK_MESSAGE`].
pub fn normalize_error_message(body: Option<&Value>, transport_message: Option<&str>) -> String {
    if let Some(message) = body.and_then(server_message) {
        return message.to_string();
    }

    match transport_message.map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

/// Extract a non-empty `message` string from a JSON object body
pub(crate) fn server_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
}
