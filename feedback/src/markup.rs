//! Class names, selectors and fixed markup fragments shared with the page
//! templates. Dynamic text is never interpolated into markup here; the host
//! sets it as text content.

use crate::strength::PasswordStrength;

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

pub const FIELD_INVALID_CLASS: &str = "is-invalid";
pub const FIELD_ERROR_CLASS: &str = "invalid-feedback";
pub const COUNTER_CLASS: &str = "form-text character-counter";
pub const STRENGTH_CLASS: &str = "password-strength mt-1";
pub const ALERT_CONTAINER_SELECTOR: &str = ".container";
pub const ALERT_CLOSE_CLASS: &str = "btn-close";
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;
pub const FIELD_SELECTOR: &str = "input, textarea";
pub const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
pub const MESSAGE_TEXTAREA_SELECTOR: &str = r#"textarea[name="message"]"#;
pub const PASSWORD_INPUT_SELECTOR: &str = r#"input[name="password"]"#;
/// Holds a submit button's markup from before the busy state.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const PROCESSING_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm me-2" role="status"></span> Processing..."#;
/// Inline style that parks the clipboard fallback textarea off-screen.
pub const OFFSCREEN_STYLE: &str = "position: fixed; left: -999999px; top: -999999px;";

/// Classes for a banner of the given severity.
#[must_use]
pub fn alert_class(severity: crate::severity::Severity) -> String {
    format!("alert alert-{} alert-dismissible fade show", severity.as_str())
}

/// Inner markup of the strength indicator. Only enum-derived text is used.
#[must_use]
pub fn strength_html(strength: &PasswordStrength) -> String {
    format!(
        r#"<small class="{}">{}</small>"#,
        strength.level.severity().text_class(),
        strength.label()
    )
}
