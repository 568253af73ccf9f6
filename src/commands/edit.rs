//! "Edit Message of the Day" admin command.
//!
//! Same one-stage shape as Set, but edits the body unconditionally: it does
//! not require the message of the day to be enabled, and it never changes
//! the enabled flag. The stage form pre-fills the current body so the
//! invoker edits in place.

use super::types::{ADMIN_FORM_TYPE, Action, CommandSession, DataForm, FormField, Note};
use super::{AdHocCommand, OPERATION_SUCCESSFUL, submitted_motd};
use crate::error::CommandError;
use crate::state::MotdState;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const EDIT_MOTD_CODE: &str = "http://jabber.org/protocol/admin#edit-motd";

pub struct EditMotd {
    state: Arc<MotdState>,
}

impl EditMotd {
    pub fn new(state: Arc<MotdState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl AdHocCommand for EditMotd {
    fn code(&self) -> &'static str {
        EDIT_MOTD_CODE
    }

    fn label(&self) -> &'static str {
        "Edit Message of the Day"
    }

    fn max_stages(&self, _session: &CommandSession) -> usize {
        1
    }

    fn stage_form(&self, _session: &CommandSession) -> Option<DataForm> {
        let mut motd_field = FormField::text_multi("motd", "Message of the Day");
        for line in self.state.message().split("\r\n") {
            motd_field = motd_field.value(line);
        }
        Some(
            DataForm::new("Editing the Message of the Day")
                .instruction("Fill out this form to edit the message of the day.")
                .field(FormField::hidden("FORM_TYPE", ADMIN_FORM_TYPE))
                .field(motd_field),
        )
    }

    fn actions(&self, _session: &CommandSession) -> Vec<Action> {
        vec![Action::Complete]
    }

    fn execute_action(&self, _session: &CommandSession) -> Option<Action> {
        Some(Action::Complete)
    }

    async fn execute(&self, session: &CommandSession) -> Note {
        match submitted_motd(session) {
            Some(body) => {
                self.state.set_message(&body);
                info!(owner = %session.owner, "Message of the day edited");
                Note::info(OPERATION_SUCCESSFUL)
            }
            None => Note::from_errors(&[CommandError::MissingText]),
        }
    }
}
