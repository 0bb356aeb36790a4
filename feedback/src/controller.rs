//! Event entry points for the page.
//!
//! [`FeedbackController`] is the host-independent half of the page script.
//! The browser binding calls one method per DOM event with a snapshot of the
//! relevant elements and applies the returned commands. The controller keeps
//! no state between calls beyond its configuration.

use crate::clipboard::CopyOutcome;
use crate::command::Command;
use crate::config::FeedbackConfig;
use crate::context::Intent;
use crate::counter::CharacterCounter;
use crate::form::{FieldSnapshot, FieldTag, FormRules, FormSnapshot, MESSAGE_FIELD, validate_form};
use crate::strength::check_password_strength;
use crate::upload::{SelectedFile, UploadPolicy, validate_upload};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

#[derive(Debug, Clone)]
pub struct FeedbackController {
    upload: UploadPolicy,
    rules: FormRules,
    counter: CharacterCounter,
}

impl Default for FeedbackController {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}

impl FeedbackController {
    #[must_use]
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            upload: UploadPolicy::from_config(config),
            rules: FormRules::from_config(config),
            counter: CharacterCounter::for_message(config),
        }
    }

    // --- File inputs ---

    /// A file input changed. An empty selection produces nothing.
    #[must_use]
    pub fn on_file_change(&self, file: Option<&SelectedFile>) -> Vec<Command> {
        let Some(file) = file else {
            return Vec::new();
        };
        let verdict = validate_upload(file, &self.upload);
        let mut commands = vec![Command::ShowAlert {
            message: verdict.message(&self.upload),
            severity: verdict.severity(),
        }];
        if verdict.clears_selection() {
            log::debug!("rejected upload {:?}: {verdict:?}", file.name);
            commands.push(Command::ClearFileSelection);
        }
        commands
    }

    // --- Forms ---

    /// A form is being submitted.
    ///
    /// Emits one annotate/clear command per examined field, then either
    /// [`Command::CancelSubmit`] or [`Command::ShowProcessing`]. All clears
    /// come before any annotation.
    #[must_use]
    pub fn on_submit(&self, form: &FormSnapshot) -> Vec<Command> {
        let report = validate_form(form, &self.rules);
        let (annotate, clear): (Vec<_>, Vec<_>) =
            report.annotations().into_iter().partition(|(_, message)| message.is_some());
        let mut commands: Vec<Command> = clear
            .into_iter()
            .map(|(field, _)| Command::ClearFieldAnnotation { field })
            .chain(annotate.into_iter().filter_map(|(field, message)| {
                message.map(|m| Command::AnnotateField { field, message: m.to_string() })
            }))
            .collect();

        if report.is_valid() {
            commands.push(Command::ShowProcessing);
        } else {
            log::debug!("blocked submit to {} with {} violation(s)", form.action, report.violations.len());
            commands.push(Command::CancelSubmit);
        }
        commands
    }

    // --- Live annotators ---

    /// Counter to attach to `field`, if the page and field call for one.
    #[must_use]
    pub fn counter_for(&self, page_path: &str, field: &FieldSnapshot) -> Option<CharacterCounter> {
        let wanted =
            field.tag == FieldTag::Textarea && field.is_named(MESSAGE_FIELD) && Intent::Encrypt.matches(page_path);
        wanted.then_some(self.counter)
    }

    #[must_use]
    pub fn on_counted_input(&self, counter: &CharacterCounter, value: &str) -> Command {
        Command::RenderCounter(counter.render(value))
    }

    /// Whether a password field in a form posting to `form_action` gets a meter.
    #[must_use]
    pub fn wants_strength_meter(&self, form_action: &str) -> bool {
        Intent::Register.matches(form_action)
    }

    #[must_use]
    pub fn on_password_input(&self, value: &str) -> Command {
        Command::RenderStrength(check_password_strength(value))
    }

    // --- Clipboard ---

    #[must_use]
    pub fn on_copy_finished(&self, outcome: &CopyOutcome) -> Command {
        Command::alert(outcome.message(), outcome.severity())
    }
}
