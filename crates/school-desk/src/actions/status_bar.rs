//! Status Bar Actions
//!
//! User feedback for finished operations.

use crate::state::StatusKind;

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Push a new status message
    Push {
        kind: StatusKind,
        message: String,
        source: String,
    },
}

impl StatusBarAction {
    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Success,
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Error,
            message: message.into(),
            source: source.into(),
        }
    }
}
