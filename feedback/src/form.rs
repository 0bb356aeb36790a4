//! Submit-time form rules.
//!
//! Every rule runs on every submit so all problems surface in one pass.
//! Results are resolved to a single annotation per field: when two rules hit
//! the same field the later rule's message is the one shown. Rule order is
//! required fields, then password confirmation, then password length, then
//! message length.
//!
//! Nothing is carried between submits; each report is derived from the
//! snapshot alone.

use std::fmt;

use crate::config::FeedbackConfig;
use crate::context::Intent;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirm_password";
pub const MESSAGE_FIELD: &str = "message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    Input,
    Textarea,
}

impl FieldTag {
    /// Map a DOM tag name; anything other than `input`/`textarea` is `None`.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("input") {
            Some(Self::Input)
        } else if tag.eq_ignore_ascii_case("textarea") {
            Some(Self::Textarea)
        } else {
            None
        }
    }
}

/// Position of a field within its [`FormSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub tag: FieldTag,
    pub name: Option<String>,
    pub value: String,
    pub required: bool,
}

impl FieldSnapshot {
    #[must_use]
    pub fn input(name: &str, value: &str) -> Self {
        Self { tag: FieldTag::Input, name: Some(name.to_owned()), value: value.to_owned(), required: false }
    }

    #[must_use]
    pub fn textarea(name: &str, value: &str) -> Self {
        Self { tag: FieldTag::Textarea, name: Some(name.to_owned()), value: value.to_owned(), required: false }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

/// Fields of one form in document order, plus its resolved action URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub action: String,
    pub fields: Vec<FieldSnapshot>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new(action: &str, fields: Vec<FieldSnapshot>) -> Self {
        Self { action: action.to_owned(), fields }
    }

    /// First field with the given tag and name, as `querySelector` would find it.
    #[must_use]
    pub fn find(&self, tag: FieldTag, name: &str) -> Option<(FieldId, &FieldSnapshot)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.tag == tag && f.is_named(name))
            .map(|(i, f)| (FieldId(i), f))
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldSnapshot> {
        self.fields.get(id.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMessage {
    Required,
    PasswordMismatch,
    PasswordTooShort { min: usize },
    MessageTooLong { max: usize },
}

impl fmt::Display for FieldMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("This field is required."),
            Self::PasswordMismatch => f.write_str("Passwords do not match."),
            Self::PasswordTooShort { min } => write!(f, "Password must be at least {min} characters long."),
            Self::MessageTooLong { max } => {
                write!(f, "Message too long for RSA encryption (max {max} characters).")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: FieldId,
    pub message: FieldMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub min_password_chars: usize,
    pub max_message_chars: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self::from_config(&FeedbackConfig::default())
    }
}

impl FormRules {
    #[must_use]
    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self { min_password_chars: config.min_password_chars, max_message_chars: config.max_message_chars }
    }
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Every rule failure, in rule order.
    pub violations: Vec<Violation>,
    /// Every field some rule looked at, in first-seen order.
    pub examined: Vec<FieldId>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The message a field ends up showing, if any.
    #[must_use]
    pub fn message_for(&self, field: FieldId) -> Option<FieldMessage> {
        self.violations
            .iter()
            .rev()
            .find(|v| v.field == field)
            .map(|v| v.message)
    }

    /// Final state of every examined field: `Some(message)` to annotate,
    /// `None` to clear.
    #[must_use]
    pub fn annotations(&self) -> Vec<(FieldId, Option<FieldMessage>)> {
        self.examined
            .iter()
            .map(|&field| (field, self.message_for(field)))
            .collect()
    }

    fn examine(&mut self, field: FieldId) {
        if !self.examined.contains(&field) {
            self.examined.push(field);
        }
    }

    fn flag(&mut self, field: FieldId, message: FieldMessage) {
        self.examine(field);
        self.violations.push(Violation { field, message });
    }
}

/// Run every rule against the snapshot.
#[must_use]
pub fn validate_form(form: &FormSnapshot, rules: &FormRules) -> FormReport {
    let mut report = FormReport::default();

    for (i, field) in form.fields.iter().enumerate() {
        if !field.required {
            continue;
        }
        let id = FieldId(i);
        if field.value.trim().is_empty() {
            report.flag(id, FieldMessage::Required);
        } else {
            report.examine(id);
        }
    }

    let password = form.find(FieldTag::Input, PASSWORD_FIELD);
    let confirm = form.find(FieldTag::Input, CONFIRM_PASSWORD_FIELD);
    if let (Some((password_id, password)), Some((confirm_id, confirm))) = (password, confirm) {
        report.examine(password_id);
        report.examine(confirm_id);
        if password.value != confirm.value {
            report.flag(confirm_id, FieldMessage::PasswordMismatch);
        }
        if password.char_count() < rules.min_password_chars {
            report.flag(password_id, FieldMessage::PasswordTooShort { min: rules.min_password_chars });
        }
    }

    if Intent::Encrypt.matches(&form.action) {
        if let Some((message_id, message)) = form.find(FieldTag::Textarea, MESSAGE_FIELD) {
            report.examine(message_id);
            if message.char_count() > rules.max_message_chars {
                report.flag(message_id, FieldMessage::MessageTooLong { max: rules.max_message_chars });
            }
        }
    }

    report
}
