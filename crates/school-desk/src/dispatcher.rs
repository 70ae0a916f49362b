//! Dispatcher for middleware action dispatch
//!
//! Middleware and the tasks it spawns use the Dispatcher to send actions back
//! into the store. Actions sent here are queued on the store's channel and go
//! through the full middleware chain when the store processes them.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Safe to call from any thread, including runtime worker threads.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
