//! Shared types for the ad-hoc command protocol.
//!
//! A command invocation produces a [`Note`]; multi-stage commands also expose
//! a [`DataForm`] describing the fields to collect before execution. Field
//! values submitted by the invoker travel in a [`CommandSession`].

use crate::error::CommandError;
use std::collections::HashMap;

/// Hidden `FORM_TYPE` value identifying admin command forms.
pub const ADMIN_FORM_TYPE: &str = "http://jabber.org/protocol/admin";

/// Severity of a command response note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Info,
    Error,
}

/// The structured response element returned by a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub kind: NoteKind,
    pub text: String,
}

impl Note {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Error,
            text: text.into(),
        }
    }

    /// Aggregate collected validation errors into a single error note.
    ///
    /// Every error text is represented, one per line, in collection order.
    pub fn from_errors(errors: &[CommandError]) -> Self {
        let text = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::error(text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoteKind::Error
    }
}

/// Actions an invoker may take on a pending command stage.
///
/// Resubmission and backward navigation are not supported, so completing is
/// the only action that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Complete,
}

/// Form field kinds used by the admin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Not shown to the invoker; carries a fixed value.
    Hidden,
    /// Multi-line text input; each line is submitted as one value.
    TextMulti,
}

/// One field of a stage form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub var: String,
    pub kind: FieldKind,
    pub label: Option<String>,
    /// Default or fixed values presented with the form.
    pub values: Vec<String>,
}

impl FormField {
    pub fn hidden(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            kind: FieldKind::Hidden,
            label: None,
            values: vec![value.into()],
        }
    }

    pub fn text_multi(var: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            kind: FieldKind::TextMulti,
            label: Some(label.into()),
            values: Vec::new(),
        }
    }

    /// Add a default value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// Description of one form stage: title, instructions, fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataForm {
    pub title: String,
    pub instructions: Vec<String>,
    pub fields: Vec<FormField>,
}

impl DataForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn instruction(mut self, text: impl Into<String>) -> Self {
        self.instructions.push(text.into());
        self
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Per-invocation command session: who is invoking, their locale preference,
/// and the form field values they submitted.
#[derive(Debug, Clone, Default)]
pub struct CommandSession {
    pub owner: String,
    pub locale: Option<String>,
    fields: HashMap<String, Vec<String>>,
}

impl CommandSession {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Record submitted values for a form field.
    pub fn with_field<I, S>(mut self, var: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .insert(var.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Submitted values for a field, if the field was submitted at all.
    pub fn values(&self, var: &str) -> Option<&[String]> {
        self.fields.get(var).map(Vec::as_slice)
    }
}
