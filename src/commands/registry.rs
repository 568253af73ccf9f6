//! Command registry and dispatch.
//!
//! The `CommandRegistry` routes incoming invocations to a registered command
//! instance by its stable code, and keeps usage counters for introspection.
//! Commands are registered at service start and removed at shutdown.

use super::{AdHocCommand, CommandSession, Note};
use crate::error::DispatchError;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Instrument, Level, debug, span};

/// Registry of ad-hoc command handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: DashMap<&'static str, Arc<dyn AdHocCommand>>,
    command_counts: DashMap<&'static str, Arc<AtomicU64>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its code. One handler instance per code;
    /// a later registration replaces an earlier one.
    pub fn register(&self, command: Arc<dyn AdHocCommand>) {
        let code = command.code();
        self.command_counts
            .entry(code)
            .or_insert_with(|| Arc::new(AtomicU64::new(0)));
        self.commands.insert(code, command);
    }

    /// Remove the command registered under `code`. Returns whether a
    /// registration was present.
    pub fn unregister(&self, code: &str) -> bool {
        self.commands.remove(code).is_some()
    }

    /// Look up a registered command, e.g. to render its stage form.
    pub fn get(&self, code: &str) -> Option<Arc<dyn AdHocCommand>> {
        self.commands.get(code).map(|c| Arc::clone(c.value()))
    }

    /// Codes of all registered commands.
    pub fn codes(&self) -> Vec<&'static str> {
        self.commands.iter().map(|e| *e.key()).collect()
    }

    /// Command usage statistics, most-used first.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|e| (*e.key(), e.value().load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }

    /// Dispatch an invocation to the command registered under `code`.
    ///
    /// Validation failures come back as error notes inside `Ok`; an
    /// unregistered code is an invariant violation of the invoking host and
    /// fails the single invocation without affecting anything else.
    pub async fn execute(
        &self,
        code: &str,
        session: &CommandSession,
    ) -> Result<Note, DispatchError> {
        let Some(command) = self.get(code) else {
            return Err(DispatchError::UnknownCommand(code.to_string()));
        };

        if let Some(counter) = self.command_counts.get(command.code()) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let cmd_span = span!(
            Level::DEBUG,
            "admin.command",
            code = %code,
            owner = %session.owner,
            locale = session.locale.as_deref(),
        );

        let note = command.execute(session).instrument(cmd_span).await;

        if note.is_error() {
            debug!(code = %code, owner = %session.owner, text = %note.text, "Command rejected");
        }

        Ok(note)
    }
}
