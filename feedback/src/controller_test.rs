use super::*;
use crate::clipboard::{ClipboardError, CopyPath};
use crate::form::{CONFIRM_PASSWORD_FIELD, FieldId, PASSWORD_FIELD};
use crate::severity::Severity;
use crate::strength::StrengthLevel;

fn controller() -> FeedbackController {
    FeedbackController::default()
}

fn png(size: u64) -> SelectedFile {
    SelectedFile { name: "carrier.png".to_owned(), size, mime_type: "image/png".to_owned() }
}

// =============================================================
// on_file_change
// =============================================================

#[test]
fn no_file_produces_no_commands() {
    assert!(controller().on_file_change(None).is_empty());
}

#[test]
fn accepted_file_shows_info_and_keeps_selection() {
    let commands = controller().on_file_change(Some(&png(2048)));
    assert_eq!(commands, vec![Command::alert("File selected: carrier.png (2 KB)", Severity::Info)]);
}

#[test]
fn oversized_file_alerts_and_clears() {
    let commands = controller().on_file_change(Some(&png(17 * 1024 * 1024)));
    assert_eq!(
        commands,
        vec![
            Command::alert("File size too large. Maximum size is 16MB.", Severity::Danger),
            Command::ClearFileSelection,
        ]
    );
}

#[test]
fn wrong_type_alerts_and_clears() {
    let file = SelectedFile { name: "a.svg".to_owned(), size: 10, mime_type: "image/svg+xml".to_owned() };
    let commands = controller().on_file_change(Some(&file));
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[1], Command::ClearFileSelection);
}

#[test]
fn custom_limit_is_respected() {
    let config = FeedbackConfig { max_upload_bytes: 1024, ..FeedbackConfig::default() };
    let commands = FeedbackController::new(&config).on_file_change(Some(&png(1025)));
    assert_eq!(commands[0], Command::alert("File size too large. Maximum size is 1 KB.", Severity::Danger));
}

// =============================================================
// on_submit
// =============================================================

#[test]
fn valid_form_clears_and_shows_processing() {
    let form = FormSnapshot::new("/login", vec![FieldSnapshot::input("username", "alice").required()]);
    assert_eq!(
        controller().on_submit(&form),
        vec![Command::ClearFieldAnnotation { field: FieldId(0) }, Command::ShowProcessing]
    );
}

#[test]
fn empty_required_field_cancels_with_one_annotation() {
    let form = FormSnapshot::new("/login", vec![FieldSnapshot::input("username", "").required()]);
    let expected = vec![
        Command::AnnotateField { field: FieldId(0), message: "This field is required.".to_owned() },
        Command::CancelSubmit,
    ];
    assert_eq!(controller().on_submit(&form), expected);
    // A second attempt yields the same single annotation.
    assert_eq!(controller().on_submit(&form), expected);
}

#[test]
fn mismatched_passwords_annotate_confirm_and_cancel() {
    let form = FormSnapshot::new(
        "/register",
        vec![FieldSnapshot::input(PASSWORD_FIELD, "abcdef"), FieldSnapshot::input(CONFIRM_PASSWORD_FIELD, "abcxyz")],
    );
    assert_eq!(
        controller().on_submit(&form),
        vec![
            Command::ClearFieldAnnotation { field: FieldId(0) },
            Command::AnnotateField { field: FieldId(1), message: "Passwords do not match.".to_owned() },
            Command::CancelSubmit,
        ]
    );
}

#[test]
fn clears_run_before_annotations() {
    // The password fails the length rule after the required loop already
    // examined the valid confirm field.
    let form = FormSnapshot::new(
        "/register",
        vec![
            FieldSnapshot::input(PASSWORD_FIELD, "abc").required(),
            FieldSnapshot::input(CONFIRM_PASSWORD_FIELD, "abc").required(),
        ],
    );
    assert_eq!(
        controller().on_submit(&form),
        vec![
            Command::ClearFieldAnnotation { field: FieldId(1) },
            Command::AnnotateField {
                field: FieldId(0),
                message: "Password must be at least 6 characters long.".to_owned(),
            },
            Command::CancelSubmit,
        ]
    );
}

#[test]
fn no_annotation_is_followed_by_a_clear() {
    let form = FormSnapshot::new(
        "/encrypt",
        vec![
            FieldSnapshot::input("recipient", "").required(),
            FieldSnapshot::input("subject", "hi").required(),
            FieldSnapshot::textarea("message", &"m".repeat(191)).required(),
            FieldSnapshot::input("note", "ok").required(),
        ],
    );
    let commands = controller().on_submit(&form);
    let first_annotation = commands
        .iter()
        .position(|c| matches!(c, Command::AnnotateField { .. }))
        .unwrap();
    assert!(
        commands[first_annotation..]
            .iter()
            .all(|c| !matches!(c, Command::ClearFieldAnnotation { .. }))
    );
    assert_eq!(commands.iter().filter(|c| matches!(c, Command::ClearFieldAnnotation { .. })).count(), 2);
}

#[test]
fn processing_is_never_emitted_for_invalid_forms() {
    let form = FormSnapshot::new("/encrypt", vec![FieldSnapshot::textarea("message", &"m".repeat(191))]);
    let commands = controller().on_submit(&form);
    assert!(!commands.contains(&Command::ShowProcessing));
    assert_eq!(commands.last(), Some(&Command::CancelSubmit));
}

#[test]
fn form_without_rules_goes_straight_to_processing() {
    let form = FormSnapshot::new("/logout", Vec::new());
    assert_eq!(controller().on_submit(&form), vec![Command::ShowProcessing]);
}

// =============================================================
// Counters and strength meter
// =============================================================

#[test]
fn counter_attaches_to_message_textarea_on_encrypt_pages() {
    let field = FieldSnapshot::textarea("message", "");
    let counter = controller().counter_for("/encrypt", &field).unwrap();
    assert_eq!(counter.max_len, 190);
    assert!(controller().counter_for("/decrypt", &field).is_none());
    assert!(controller().counter_for("/encrypt", &FieldSnapshot::textarea("notes", "")).is_none());
    assert!(controller().counter_for("/encrypt", &FieldSnapshot::input("message", "")).is_none());
}

#[test]
fn counted_input_renders_counter() {
    let c = controller();
    let counter = c.counter_for("/encrypt", &FieldSnapshot::textarea("message", "")).unwrap();
    match c.on_counted_input(&counter, "hello") {
        Command::RenderCounter(view) => assert_eq!(view.text(), "5/190 characters"),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn strength_meter_only_on_register_forms() {
    assert!(controller().wants_strength_meter("http://localhost:5000/register"));
    assert!(!controller().wants_strength_meter("http://localhost:5000/login"));
}

#[test]
fn password_input_renders_fresh_strength() {
    let c = controller();
    match c.on_password_input("Abcdef1!") {
        Command::RenderStrength(s) => assert_eq!(s.level, StrengthLevel::Strong),
        other => panic!("unexpected command {other:?}"),
    }
    match c.on_password_input("a") {
        Command::RenderStrength(s) => assert_eq!(s.score, 1),
        other => panic!("unexpected command {other:?}"),
    }
}

// =============================================================
// Clipboard
// =============================================================

#[test]
fn copy_outcomes_map_to_alerts() {
    let c = controller();
    assert_eq!(
        c.on_copy_finished(&CopyOutcome::Copied(CopyPath::Fallback)),
        Command::alert("Copied to clipboard!", Severity::Success)
    );
    assert_eq!(
        c.on_copy_finished(&CopyOutcome::Failed(ClipboardError::Unavailable)),
        Command::alert("Failed to copy to clipboard. Please copy manually.", Severity::Warning)
    );
}
