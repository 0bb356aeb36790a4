//! File-selection gatekeeping.
//!
//! A selection is checked for size first; the type check only runs when the
//! size is acceptable. Rejections clear the input so the native form submit
//! cannot carry the file.

use crate::config::{FeedbackConfig, MIB};
use crate::severity::Severity;

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Metadata of the first file in a file input's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// Media type as declared by the browser, e.g. `image/png`.
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    pub allowed_types_label: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&FeedbackConfig::default())
    }
}

impl UploadPolicy {
    #[must_use]
    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self {
            max_size_bytes: config.max_upload_bytes,
            allowed_mime_types: config.allowed_mime_types.clone(),
            allowed_types_label: config.allowed_types_label.clone(),
        }
    }

    #[must_use]
    pub fn permits_type(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim();
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(mime_type))
    }

    /// Limit as shown to users: whole mebibytes read `16MB`.
    #[must_use]
    pub fn size_limit_label(&self) -> String {
        if self.max_size_bytes % MIB == 0 {
            format!("{}MB", self.max_size_bytes / MIB)
        } else {
            format_file_size(self.max_size_bytes)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadVerdict {
    Accepted { name: String, size_label: String },
    TooLarge { size: u64 },
    UnsupportedType { mime_type: String },
}

impl UploadVerdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejected selections are removed from the input.
    #[must_use]
    pub fn clears_selection(&self) -> bool {
        !self.is_accepted()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.is_accepted() { Severity::Info } else { Severity::Danger }
    }

    #[must_use]
    pub fn message(&self, policy: &UploadPolicy) -> String {
        match self {
            Self::Accepted { name, size_label } => format!("File selected: {name} ({size_label})"),
            Self::TooLarge { .. } => {
                format!("File size too large. Maximum size is {}.", policy.size_limit_label())
            }
            Self::UnsupportedType { .. } => {
                format!("Invalid file type. Please upload {} files.", policy.allowed_types_label)
            }
        }
    }
}

/// Check a selected file against the policy. Size failures short-circuit.
#[must_use]
pub fn validate_upload(file: &SelectedFile, policy: &UploadPolicy) -> UploadVerdict {
    if file.size > policy.max_size_bytes {
        return UploadVerdict::TooLarge { size: file.size };
    }
    if !policy.permits_type(&file.mime_type) {
        return UploadVerdict::UnsupportedType { mime_type: file.mime_type.clone() };
    }
    UploadVerdict::Accepted { name: file.name.clone(), size_label: format_file_size(file.size) }
}

/// Render a byte count with base-1024 units, at most two decimals.
///
/// `0` renders as `0 Bytes`; sizes past the gigabyte range stay in `GB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_fixed(scaled), SIZE_UNITS[unit])
}

fn trim_fixed(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}
