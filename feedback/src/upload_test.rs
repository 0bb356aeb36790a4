use super::*;

fn file(name: &str, size: u64, mime_type: &str) -> SelectedFile {
    SelectedFile { name: name.to_owned(), size, mime_type: mime_type.to_owned() }
}

// =============================================================
// validate_upload
// =============================================================

#[test]
fn oversized_file_is_rejected_regardless_of_type() {
    let policy = UploadPolicy::default();
    for mime in ["image/png", "image/gif", "application/pdf", ""] {
        let verdict = validate_upload(&file("big", 16 * 1024 * 1024 + 1, mime), &policy);
        assert_eq!(verdict, UploadVerdict::TooLarge { size: 16 * 1024 * 1024 + 1 });
        assert!(verdict.clears_selection());
        assert_eq!(verdict.severity(), Severity::Danger);
    }
}

#[test]
fn exactly_at_limit_is_accepted() {
    let verdict = validate_upload(&file("cover.png", 16 * 1024 * 1024, "image/png"), &UploadPolicy::default());
    assert!(verdict.is_accepted());
    assert!(!verdict.clears_selection());
}

#[test]
fn every_allowed_type_is_accepted() {
    let policy = UploadPolicy::default();
    for mime in ["image/png", "image/jpeg", "image/jpg", "image/gif", "image/bmp"] {
        let verdict = validate_upload(&file("pic", 2048, mime), &policy);
        assert!(verdict.is_accepted(), "{mime} should be accepted");
        assert!(!verdict.clears_selection());
    }
}

#[test]
fn disallowed_type_is_rejected() {
    let verdict = validate_upload(&file("notes.txt", 10, "text/plain"), &UploadPolicy::default());
    assert_eq!(verdict, UploadVerdict::UnsupportedType { mime_type: "text/plain".to_owned() });
    assert!(verdict.clears_selection());
}

#[test]
fn empty_mime_type_is_rejected() {
    let verdict = validate_upload(&file("mystery", 10, ""), &UploadPolicy::default());
    assert!(matches!(verdict, UploadVerdict::UnsupportedType { .. }));
}

#[test]
fn type_comparison_ignores_ascii_case() {
    let verdict = validate_upload(&file("a.PNG", 10, "IMAGE/PNG"), &UploadPolicy::default());
    assert!(verdict.is_accepted());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn accepted_message_carries_name_and_size() {
    let policy = UploadPolicy::default();
    let verdict = validate_upload(&file("stego.png", 1536, "image/png"), &policy);
    assert_eq!(verdict.message(&policy), "File selected: stego.png (1.5 KB)");
    assert_eq!(verdict.severity(), Severity::Info);
}

#[test]
fn rejection_messages_name_the_limits() {
    let policy = UploadPolicy::default();
    assert_eq!(
        UploadVerdict::TooLarge { size: 1 }.message(&policy),
        "File size too large. Maximum size is 16MB."
    );
    assert_eq!(
        UploadVerdict::UnsupportedType { mime_type: "x".to_owned() }.message(&policy),
        "Invalid file type. Please upload PNG, JPG, JPEG, GIF, or BMP files."
    );
}

#[test]
fn size_limit_label_falls_back_to_formatted_size() {
    let policy = UploadPolicy { max_size_bytes: 1536, ..UploadPolicy::default() };
    assert_eq!(policy.size_limit_label(), "1.5 KB");
}

// =============================================================
// format_file_size
// =============================================================

#[test]
fn format_file_size_reference_values() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1_048_576), "1 MB");
}

#[test]
fn format_file_size_small_values_stay_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn format_file_size_rounds_to_two_decimals() {
    // 1234 / 1024 = 1.2050...
    assert_eq!(format_file_size(1234), "1.21 KB");
    assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn format_file_size_caps_at_gigabytes() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}
