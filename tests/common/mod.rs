//! Integration test common infrastructure.
//!
//! Wires a complete MOTD service over an in-memory store, a channel-backed
//! router whose receiving end the tests drain, and a manually fired
//! scheduler so delayed delivery is deterministic.

use futures_util::future::BoxFuture;
use motd_service::MotdService;
use motd_service::commands::CommandRegistry;
use motd_service::config::MotdConfig;
use motd_service::scheduler::Scheduler;
use motd_service::session::SessionEventBus;
use motd_service::store::{MemoryStore, PropertyStore};
use motd_service::transport::{ChannelRouter, Message};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[allow(dead_code)]
pub const SERVER_ADDRESS: &str = "chat.example.org";

/// Scheduler that queues tasks until the test fires them.
#[derive(Default)]
pub struct ManualScheduler {
    pending: Mutex<Vec<(Duration, BoxFuture<'static, ()>)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    #[allow(dead_code)]
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.lock().iter().map(|(d, _)| *d).collect()
    }

    /// Run every queued task, as the timer facility would at expiry.
    #[allow(dead_code)]
    pub async fn fire_all(&self) {
        let tasks: Vec<_> = self.pending.lock().drain(..).collect();
        for (_, task) in tasks {
            task.await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: BoxFuture<'static, ()>) {
        self.pending.lock().push((delay, task));
    }
}

#[allow(dead_code)]
pub struct TestHarness {
    pub service: MotdService,
    pub registry: CommandRegistry,
    pub sessions: SessionEventBus,
    pub scheduler: Arc<ManualScheduler>,
    pub deliveries: mpsc::UnboundedReceiver<Message>,
}

/// Build and start a service with default config (5 second greeting delay).
pub fn harness() -> TestHarness {
    let config = MotdConfig {
        server_address: SERVER_ADDRESS.to_string(),
        greeting_delay_secs: 5,
    };
    let store: Arc<dyn PropertyStore> = Arc::new(MemoryStore::new());
    let (router, deliveries) = ChannelRouter::new();
    let scheduler = Arc::new(ManualScheduler::new());

    let service = MotdService::new(
        &config,
        store,
        Arc::new(router),
        Arc::clone(&scheduler) as Arc<dyn Scheduler>,
    );
    let registry = CommandRegistry::new();
    let sessions = SessionEventBus::new();
    service.start(&registry, &sessions);

    TestHarness {
        service,
        registry,
        sessions,
        scheduler,
        deliveries,
    }
}
