//! "Set Message of the Day" admin command.
//!
//! One form stage collecting the greeting text; on success the submitted
//! lines become the body and greetings are switched on. Refuses to run when
//! a message of the day is already set.

use super::types::{ADMIN_FORM_TYPE, Action, CommandSession, DataForm, FormField, Note};
use super::{AdHocCommand, OPERATION_SUCCESSFUL, submitted_motd};
use crate::error::CommandError;
use crate::state::MotdState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const SET_MOTD_CODE: &str = "http://jabber.org/protocol/admin#set-motd";

pub struct SetMotd {
    state: Arc<MotdState>,
}

impl SetMotd {
    pub fn new(state: Arc<MotdState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl AdHocCommand for SetMotd {
    fn code(&self) -> &'static str {
        SET_MOTD_CODE
    }

    fn label(&self) -> &'static str {
        "Set Message of the Day"
    }

    fn max_stages(&self, _session: &CommandSession) -> usize {
        1
    }

    fn stage_form(&self, _session: &CommandSession) -> Option<DataForm> {
        Some(
            DataForm::new("Setting the Message of the Day")
                .instruction("Fill out this form to set the message of the day.")
                .field(FormField::hidden("FORM_TYPE", ADMIN_FORM_TYPE))
                .field(FormField::text_multi("motd", "Message of the Day")),
        )
    }

    fn actions(&self, _session: &CommandSession) -> Vec<Action> {
        vec![Action::Complete]
    }

    fn execute_action(&self, _session: &CommandSession) -> Option<Action> {
        Some(Action::Complete)
    }

    async fn execute(&self, session: &CommandSession) -> Note {
        let mut errors = Vec::new();

        if self.state.is_enabled() {
            errors.push(CommandError::AlreadySet);
        }

        let body = submitted_motd(session);
        if body.is_none() {
            errors.push(CommandError::MissingText);
        }

        match body {
            Some(body) if errors.is_empty() => {
                self.state.set_message(&body);
                self.state.set_enabled(true);
                info!(owner = %session.owner, "Message of the day set");
                Note::info(OPERATION_SUCCESSFUL)
            }
            // All errors collected; return without applying changes.
            _ => Note::from_errors(&errors),
        }
    }
}
