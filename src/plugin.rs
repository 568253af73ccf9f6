//! Service wiring and lifecycle.
//!
//! `MotdService` assembles the shared state, the three admin commands, and
//! the session greeter from injected collaborators, and attaches or detaches
//! the whole feature from the host's command registry and session event bus.

use crate::commands::{AdHocCommand, CommandRegistry, DeleteMotd, EditMotd, SetMotd};
use crate::config::MotdConfig;
use crate::greeter::SessionGreeter;
use crate::scheduler::Scheduler;
use crate::session::{SessionEventBus, SessionEventListener};
use crate::state::MotdState;
use crate::store::PropertyStore;
use crate::transport::MessageRouter;
use std::sync::Arc;
use tracing::info;

pub struct MotdService {
    state: Arc<MotdState>,
    greeter: Arc<SessionGreeter>,
    commands: [Arc<dyn AdHocCommand>; 3],
}

impl MotdService {
    pub fn new(
        config: &MotdConfig,
        store: Arc<dyn PropertyStore>,
        router: Arc<dyn MessageRouter>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let state = Arc::new(MotdState::new(store));
        let greeter = Arc::new(SessionGreeter::new(
            Arc::clone(&state),
            router,
            scheduler,
            config.server_address.clone(),
            config.greeting_delay(),
        ));
        let commands: [Arc<dyn AdHocCommand>; 3] = [
            Arc::new(SetMotd::new(Arc::clone(&state))),
            Arc::new(EditMotd::new(Arc::clone(&state))),
            Arc::new(DeleteMotd::new(Arc::clone(&state))),
        ];
        Self {
            state,
            greeter,
            commands,
        }
    }

    /// Register the admin commands and subscribe the greeter.
    pub fn start(&self, registry: &CommandRegistry, sessions: &SessionEventBus) {
        for command in &self.commands {
            registry.register(Arc::clone(command));
        }
        sessions.add_listener(self.listener());
        info!("MOTD service started");
    }

    /// Undo [`start`](Self::start): unregister commands, drop the listener.
    pub fn stop(&self, registry: &CommandRegistry, sessions: &SessionEventBus) {
        sessions.remove_listener(&self.listener());
        for command in &self.commands {
            registry.unregister(command.code());
        }
        info!("MOTD service stopped");
    }

    /// The shared MOTD state, for host inspection.
    pub fn state(&self) -> &Arc<MotdState> {
        &self.state
    }

    fn listener(&self) -> Arc<dyn SessionEventListener> {
        Arc::clone(&self.greeter) as Arc<dyn SessionEventListener>
    }
}
