//! "Delete Message of the Day" admin command.
//!
//! Zero stages: executed immediately on invocation. Switches greetings off
//! and leaves subject and body intact.

use super::types::{Action, CommandSession, DataForm, Note};
use super::{AdHocCommand, OPERATION_SUCCESSFUL};
use crate::error::CommandError;
use crate::state::MotdState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const DELETE_MOTD_CODE: &str = "http://jabber.org/protocol/admin#delete-motd";

pub struct DeleteMotd {
    state: Arc<MotdState>,
}

impl DeleteMotd {
    pub fn new(state: Arc<MotdState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl AdHocCommand for DeleteMotd {
    fn code(&self) -> &'static str {
        DELETE_MOTD_CODE
    }

    fn label(&self) -> &'static str {
        "Delete Message of the Day"
    }

    fn max_stages(&self, _session: &CommandSession) -> usize {
        0
    }

    fn stage_form(&self, _session: &CommandSession) -> Option<DataForm> {
        None
    }

    fn actions(&self, _session: &CommandSession) -> Vec<Action> {
        Vec::new()
    }

    fn execute_action(&self, _session: &CommandSession) -> Option<Action> {
        None
    }

    async fn execute(&self, session: &CommandSession) -> Note {
        if !self.state.is_enabled() {
            return Note::from_errors(&[CommandError::NotSet]);
        }

        self.state.set_enabled(false);
        info!(owner = %session.owner, "Message of the day deleted");
        Note::info(OPERATION_SUCCESSFUL)
    }
}
