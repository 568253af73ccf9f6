//! Unified error handling for the MOTD service.
//!
//! Validation failures are collected during command execution and rendered
//! into error notes; they never cross the protocol boundary as `Err` values.
//! Only programming invariant violations (dispatching an unregistered
//! command code) surface as hard errors.

use thiserror::Error;

/// Precondition and input failures raised while executing an admin command.
///
/// The display strings are the user-facing note texts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(
        "A message of the day is already set. If you intend to edit the message of the day, \
         use the 'Edit Message of the Day' command instead."
    )]
    AlreadySet,

    #[error(
        "Please provide text for the message of the day. If you intend to remove the message \
         of the day, use the 'Delete Message of the Day' command instead."
    )]
    MissingText,

    #[error("A message of the day does not exist. You cannot delete it.")]
    NotSet,
}

impl CommandError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySet => "already_set",
            Self::MissingText => "missing_text",
            Self::NotSet => "not_set",
        }
    }
}

/// Dispatch failures.
///
/// These are invariant violations of the invoking host, not user input
/// errors, so they propagate instead of becoming notes.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
