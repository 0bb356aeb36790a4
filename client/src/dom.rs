//! Snapshotting elements into core types and applying core commands.
//!
//! This module is the only place that mutates page elements on behalf of
//! [`feedback::controller::FeedbackController`]. Banners go through
//! [`crate::services::alerts::AlertService`].

use feedback::command::Command;
use feedback::form::{FieldSnapshot, FieldTag, FormSnapshot};
use feedback::markup::{
    FIELD_ERROR_CLASS, FIELD_INVALID_CLASS, FIELD_SELECTOR, ORIGINAL_TEXT_ATTR,
    PROCESSING_HTML, SUBMIT_SELECTOR, strength_html,
};
use feedback::upload::SelectedFile;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::error::DomError;
use crate::services::alerts::AlertService;

/// Elements a batch of commands may touch. Commands whose element is absent
/// are skipped.
#[derive(Default)]
pub struct CommandTarget<'a> {
    pub event: Option<&'a Event>,
    pub file_input: Option<&'a HtmlInputElement>,
    pub form: Option<&'a HtmlFormElement>,
    /// Field elements aligned with the snapshot's `FieldId`s.
    pub fields: &'a [Element],
    /// Counter or strength indicator for live annotators.
    pub indicator: Option<&'a Element>,
}

/// Apply commands in order. A failing command is logged and skipped.
pub fn apply_all(commands: &[Command], target: &CommandTarget<'_>, alerts: &AlertService) {
    for command in commands {
        if let Err(e) = apply(command, target, alerts) {
            log::warn!("failed to apply {command:?}: {e}");
        }
    }
}

fn apply(command: &Command, target: &CommandTarget<'_>, alerts: &AlertService) -> Result<(), DomError> {
    match command {
        Command::ShowAlert { message, severity } => {
            alerts.show(message, *severity);
        }
        Command::ClearFileSelection => {
            if let Some(input) = target.file_input {
                input.set_value("");
            }
        }
        Command::CancelSubmit => {
            if let Some(event) = target.event {
                event.prevent_default();
                event.stop_propagation();
            }
        }
        Command::AnnotateField { field, message } => {
            if let Some(el) = target.fields.get(field.0) {
                annotate(el, message)?;
            }
        }
        Command::ClearFieldAnnotation { field } => {
            if let Some(el) = target.fields.get(field.0) {
                clear_annotation(el)?;
            }
        }
        Command::ShowProcessing => {
            if let Some(form) = target.form {
                show_processing(form)?;
            }
        }
        Command::RenderCounter(view) => {
            if let Some(el) = target.indicator {
                el.set_text_content(Some(&view.text()));
                el.set_class_name(&view.class_name());
            }
        }
        Command::RenderStrength(strength) => {
            if let Some(el) = target.indicator {
                el.set_inner_html(&strength_html(strength));
            }
        }
    }
    Ok(())
}

// --- Snapshots ---

/// Snapshot an `input` or `textarea`; other elements yield `None`.
pub fn field_snapshot(el: &Element) -> Option<FieldSnapshot> {
    let tag = FieldTag::from_tag_name(&el.tag_name())?;
    let value = match tag {
        FieldTag::Input => el.dyn_ref::<HtmlInputElement>()?.value(),
        FieldTag::Textarea => el.dyn_ref::<HtmlTextAreaElement>()?.value(),
    };
    Some(FieldSnapshot {
        tag,
        name: el.get_attribute("name"),
        value,
        required: el.has_attribute("required"),
    })
}

/// Snapshot every field of a form along with the elements, index-aligned.
///
/// # Errors
///
/// Returns `Err` if the field query throws.
pub fn snapshot_form(form: &HtmlFormElement) -> Result<(FormSnapshot, Vec<Element>), DomError> {
    let nodes = form.query_selector_all(FIELD_SELECTOR)?;
    let mut fields = Vec::new();
    let mut elements = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(field) = field_snapshot(&el) {
            fields.push(field);
            elements.push(el);
        }
    }
    Ok((FormSnapshot { action: form.action(), fields }, elements))
}

/// First selected file of a file input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn selected_file(input: &HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    Some(SelectedFile { name: file.name(), size: file.size() as u64, mime_type: file.type_() })
}

// --- Field annotations ---

/// Mark a field invalid and place its message directly after it, replacing
/// any earlier message.
///
/// # Errors
///
/// Returns `Err` if a class or node operation throws.
pub fn annotate(field: &Element, message: &str) -> Result<(), DomError> {
    clear_annotation(field)?;
    field.class_list().add_1(FIELD_INVALID_CLASS)?;
    let Some(parent) = field.parent_node() else {
        return Ok(());
    };
    let document = field.owner_document().ok_or(DomError::NoDocument)?;
    let note = document.create_element("div")?;
    note.set_class_name(FIELD_ERROR_CLASS);
    note.set_text_content(Some(message));
    parent.insert_before(&note, field.next_sibling().as_ref())?;
    Ok(())
}

/// Remove a field's invalid mark and its own message. Notes belonging to
/// other fields under the same parent are left alone. No-op on a clean field.
///
/// # Errors
///
/// Returns `Err` if a class operation throws.
pub fn clear_annotation(field: &Element) -> Result<(), DomError> {
    field.class_list().remove_1(FIELD_INVALID_CLASS)?;
    if let Some(note) = field.next_element_sibling() {
        if note.class_list().contains(FIELD_ERROR_CLASS) {
            note.remove();
        }
    }
    Ok(())
}

// --- Submit button ---

fn submit_button(form: &HtmlFormElement) -> Result<Option<HtmlButtonElement>, DomError> {
    match form.query_selector(SUBMIT_SELECTOR)? {
        Some(el) => el
            .dyn_into::<HtmlButtonElement>()
            .map(Some)
            .map_err(|_| DomError::UnexpectedElement("button")),
        None => Ok(None),
    }
}

/// Disable the submit button and swap in the busy label, keeping the
/// original markup in `data-original-text`.
///
/// # Errors
///
/// Returns `Err` if the button lookup or attribute write throws.
pub fn show_processing(form: &HtmlFormElement) -> Result<(), DomError> {
    let Some(button) = submit_button(form)? else {
        return Ok(());
    };
    let original = button.inner_html();
    button.set_disabled(true);
    button.set_inner_html(PROCESSING_HTML);
    button.set_attribute(ORIGINAL_TEXT_ATTR, &original)?;
    Ok(())
}

/// Undo [`show_processing`]. Buttons without saved markup are left alone.
///
/// # Errors
///
/// Returns `Err` if the button lookup or attribute removal throws.
pub fn restore_submit(form: &HtmlFormElement) -> Result<(), DomError> {
    let Some(button) = submit_button(form)? else {
        return Ok(());
    };
    let Some(original) = button.get_attribute(ORIGINAL_TEXT_ATTR) else {
        return Ok(());
    };
    button.set_inner_html(&original);
    button.set_disabled(false);
    button.remove_attribute(ORIGINAL_TEXT_ATTR)?;
    Ok(())
}

/// Detach an element if it is still in a tree.
pub fn detach(el: &Element) {
    if el.parent_node().is_some() {
        el.remove();
    }
}
