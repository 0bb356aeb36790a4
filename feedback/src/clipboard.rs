//! Copy-to-clipboard strategy.
//!
//! The platform clipboard is tried first. When it is missing or rejects the
//! write, the copy is retried through the fallback path without telling the
//! user; only a fallback failure is reported.

use crate::severity::Severity;

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard. Please copy manually.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command failed: {0}")]
    CommandFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed(ClipboardError),
}

impl CopyOutcome {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Copied(_) => COPIED_MESSAGE,
            Self::Failed(_) => COPY_FAILED_MESSAGE,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Copied(_) => Severity::Success,
            Self::Failed(_) => Severity::Warning,
        }
    }
}

/// The two ways a host can put text on the clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    /// Asynchronous platform clipboard write. Returns
    /// [`ClipboardError::Unavailable`] when the platform has no clipboard API.
    async fn write_primary(&self, text: &str) -> Result<(), ClipboardError>;

    /// Synchronous select-and-copy write.
    fn write_fallback(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, degrading to the fallback path on any primary failure.
pub async fn copy_text<B: ClipboardBackend>(backend: &B, text: &str) -> CopyOutcome {
    match backend.write_primary(text).await {
        Ok(()) => return CopyOutcome::Copied(CopyPath::Primary),
        Err(e) => log::debug!("primary clipboard path failed, using fallback: {e}"),
    }
    match backend.write_fallback(text) {
        Ok(()) => CopyOutcome::Copied(CopyPath::Fallback),
        Err(e) => {
            log::warn!("clipboard fallback failed: {e}");
            CopyOutcome::Failed(e)
        }
    }
}
