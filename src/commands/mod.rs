//! Ad-hoc admin command protocol.
//!
//! Each command is a small state machine over form stages, driven from the
//! outside by the [`CommandRegistry`]: a 0-stage command is executed
//! immediately; a 1-stage command first exposes its form via
//! [`AdHocCommand::stage_form`], then executes once against the submitted
//! [`CommandSession`]. No command supports resubmission or backward
//! navigation.

pub mod delete;
pub mod edit;
pub mod registry;
pub mod set;
pub mod types;

pub use delete::{DELETE_MOTD_CODE, DeleteMotd};
pub use edit::{EDIT_MOTD_CODE, EditMotd};
pub use registry::CommandRegistry;
pub use set::{SET_MOTD_CODE, SetMotd};
pub use types::{
    ADMIN_FORM_TYPE, Action, CommandSession, DataForm, FieldKind, FormField, Note, NoteKind,
};

use async_trait::async_trait;

/// Success note text shared by all commands.
pub const OPERATION_SUCCESSFUL: &str = "Operation finished successfully";

/// Join the submitted `motd` field into body text, CRLF-separated.
///
/// Returns `None` when the field is missing, has no values, or joins to
/// empty text, preserving line order and count otherwise.
pub(crate) fn submitted_motd(session: &CommandSession) -> Option<String> {
    let joined = session.values("motd")?.join("\r\n");
    if joined.is_empty() { None } else { Some(joined) }
}

/// A remotely invocable, potentially multi-stage administrative command.
#[async_trait]
pub trait AdHocCommand: Send + Sync {
    /// Stable code identifying this command to remote invokers.
    fn code(&self) -> &'static str;

    /// Human-readable command label.
    fn label(&self) -> &'static str;

    /// Number of form stages before execution.
    fn max_stages(&self, session: &CommandSession) -> usize;

    /// Form presented for the current stage, or `None` for 0-stage commands.
    fn stage_form(&self, session: &CommandSession) -> Option<DataForm>;

    /// Actions available to the invoker; empty for 0-stage commands.
    fn actions(&self, session: &CommandSession) -> Vec<Action>;

    /// The action performed on submission, if any.
    fn execute_action(&self, session: &CommandSession) -> Option<Action>;

    /// Validate and run the command, producing the response note.
    ///
    /// All applicable validation errors are collected before anything is
    /// mutated; a non-empty error set means no state change happened.
    async fn execute(&self, session: &CommandSession) -> Note;
}
