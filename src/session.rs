//! Session lifecycle events consumed by the greeting dispatcher.
//!
//! The host's connection layer owns sessions; this module only models the
//! notifications it emits. All five lifecycle events are carried so the
//! host can forward its listener interface wholesale, but only
//! [`SessionEvent::Created`] triggers any behavior here.

use parking_lot::RwLock;
use std::sync::Arc;

/// The slice of a session this crate reads: its addressable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub address: String,
}

impl SessionInfo {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Session lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Created(SessionInfo),
    Destroyed(SessionInfo),
    ResourceBound(SessionInfo),
    AnonymousCreated(SessionInfo),
    AnonymousDestroyed(SessionInfo),
}

/// Receiver of session lifecycle notifications.
pub trait SessionEventListener: Send + Sync {
    fn on_session_event(&self, event: &SessionEvent);
}

/// Fan-out point for session events.
///
/// Listeners are identified by pointer, so the same `Arc` used to subscribe
/// must be used to unsubscribe.
#[derive(Default)]
pub struct SessionEventBus {
    listeners: RwLock<Vec<Arc<dyn SessionEventListener>>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: Arc<dyn SessionEventListener>) {
        self.listeners.write().push(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn SessionEventListener>) {
        self.listeners
            .write()
            .retain(|l| !Arc::ptr_eq(l, listener));
    }

    /// Deliver an event to every listener, in subscription order.
    pub fn dispatch(&self, event: &SessionEvent) {
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener.on_session_event(event);
        }
    }
}
