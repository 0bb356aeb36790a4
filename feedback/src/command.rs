//! Declarative page mutations returned by the controller.
//!
//! Commands are applied in order. Field references are [`FieldId`]s into the
//! [`crate::form::FormSnapshot`] the command was computed from.

use crate::counter::CounterView;
use crate::form::FieldId;
use crate::severity::Severity;
use crate::strength::PasswordStrength;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a banner at the top of the page container.
    ShowAlert { message: String, severity: Severity },
    /// Reset the file input that raised the event to an empty selection.
    ClearFileSelection,
    /// Stop the submit event from reaching the browser.
    CancelSubmit,
    /// Replace any annotation on the field with this message.
    AnnotateField { field: FieldId, message: String },
    /// Remove the field's annotation, if present.
    ClearFieldAnnotation { field: FieldId },
    /// Disable the submit button and show the busy label.
    ShowProcessing,
    RenderCounter(CounterView),
    RenderStrength(PasswordStrength),
}

impl Command {
    #[must_use]
    pub fn alert(message: &str, severity: Severity) -> Self {
        Self::ShowAlert { message: message.to_owned(), severity }
    }
}
