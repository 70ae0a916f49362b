//! Status Bar State
//!
//! Backs the popup/snackbar the dashboards show after an operation.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation completed successfully
    Success,
    /// Operation failed
    Error,
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    /// The normalized message text
    pub message: String,
    /// The operation that produced this message, e.g. "Fee: create"
    pub source: String,
}

impl StatusMessage {
    /// Create a new status message with current timestamp
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
        }
    }
}

impl StatusBarState {
    /// Get the latest message (if any)
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}
