//! Session greeting dispatch.
//!
//! Reacts to new-session events by scheduling a one-shot delayed greeting.
//! The greeting content is snapshot at scheduling time: mutating the MOTD
//! between scheduling and firing only affects future schedules, never one
//! already enqueued. Delivery is best-effort - no retry, no acknowledgment,
//! and no cancellation if the session goes away before the timer fires.

use crate::scheduler::Scheduler;
use crate::session::{SessionEvent, SessionEventListener, SessionInfo};
use crate::state::MotdState;
use crate::transport::{Message, MessageRouter};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct SessionGreeter {
    state: Arc<MotdState>,
    router: Arc<dyn MessageRouter>,
    scheduler: Arc<dyn Scheduler>,
    /// Greeting source address, captured once at service start.
    server_address: String,
    delay: Duration,
}

impl SessionGreeter {
    pub fn new(
        state: Arc<MotdState>,
        router: Arc<dyn MessageRouter>,
        scheduler: Arc<dyn Scheduler>,
        server_address: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            state,
            router,
            scheduler,
            server_address: server_address.into(),
            delay,
        }
    }

    fn greet(&self, session: &SessionInfo) {
        if !self.state.is_enabled() {
            return;
        }

        let message = Message {
            to: session.address.clone(),
            from: self.server_address.clone(),
            subject: self.state.subject(),
            body: self.state.message(),
        };
        debug!(to = %message.to, delay = ?self.delay, "Greeting scheduled");

        let router = Arc::clone(&self.router);
        self.scheduler.schedule(
            self.delay,
            Box::pin(async move {
                debug!(to = %message.to, "Greeting sent");
                router.route(message);
            }),
        );
    }
}

impl SessionEventListener for SessionGreeter {
    fn on_session_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::Created(session) => self.greet(session),
            // Anonymous sessions receive no greeting, and teardown events
            // carry nothing to act on.
            SessionEvent::Destroyed(_)
            | SessionEvent::ResourceBound(_)
            | SessionEvent::AnonymousCreated(_)
            | SessionEvent::AnonymousDestroyed(_) => {}
        }
    }
}
