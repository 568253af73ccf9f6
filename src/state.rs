//! Shared MOTD state, backed by the property store.

use crate::store::PropertyStore;
use std::sync::Arc;

const SUBJECT_KEY: &str = "plugin.motd.subject";
const MESSAGE_KEY: &str = "plugin.motd.message";
const ENABLED_KEY: &str = "plugin.motd.enabled";

const DEFAULT_SUBJECT: &str = "Message of the Day";
const DEFAULT_MESSAGE: &str = "Big Brother is watching.";

/// The single shared MOTD record: enabled flag, subject, body.
///
/// Every accessor delegates straight to the underlying store, so writes are
/// immediately visible to all holders of the same state. Reads fall back to
/// the documented defaults when a key was never set.
pub struct MotdState {
    store: Arc<dyn PropertyStore>,
}

impl MotdState {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    /// Whether a greeting should be sent to new sessions.
    pub fn is_enabled(&self) -> bool {
        self.store.get_bool(ENABLED_KEY, false)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.store.set_bool(ENABLED_KEY, enabled);
    }

    /// Greeting subject line.
    pub fn subject(&self) -> String {
        self.store.get_string(SUBJECT_KEY, DEFAULT_SUBJECT)
    }

    pub fn set_subject(&self, subject: &str) {
        self.store.set_string(SUBJECT_KEY, subject);
    }

    /// Greeting body text.
    pub fn message(&self) -> String {
        self.store.get_string(MESSAGE_KEY, DEFAULT_MESSAGE)
    }

    pub fn set_message(&self, message: &str) {
        self.store.set_string(MESSAGE_KEY, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> MotdState {
        MotdState::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_defaults() {
        let state = state();
        assert!(!state.is_enabled());
        assert_eq!(state.subject(), "Message of the Day");
        assert_eq!(state.message(), "Big Brother is watching.");
    }

    #[test]
    fn test_writes_visible_immediately() {
        let state = state();
        state.set_enabled(true);
        state.set_subject("Maintenance");
        state.set_message("Back at noon.");
        assert!(state.is_enabled());
        assert_eq!(state.subject(), "Maintenance");
        assert_eq!(state.message(), "Back at noon.");
    }

    #[test]
    fn test_state_shared_through_store() {
        let store: Arc<dyn PropertyStore> = Arc::new(MemoryStore::new());
        let a = MotdState::new(Arc::clone(&store));
        let b = MotdState::new(store);
        a.set_enabled(true);
        assert!(b.is_enabled());
    }
}
